use serde::Deserialize;

/// Wire shape of a quiz document:
/// `{ "title": ..., "questions": [{ "question": ..., "answers": [{ "text": ..., "correct": ... }] }] }`
#[derive(Clone, Debug, Deserialize)]
pub struct RawQuiz {
    pub title: String,
    pub questions: Vec<RawQuestion>,
}

#[derive(Clone, Debug, Deserialize)]
pub struct RawQuestion {
    pub question: String,
    pub answers: Vec<RawAnswer>,
}

#[derive(Clone, Debug, Deserialize)]
pub struct RawAnswer {
    pub text: String,
    #[serde(default)]
    pub correct: bool,
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Question {
    pub text: String,
    pub answers: Vec<Answer>,
}

/// Exactly one answer per question should be tagged correct. This is not
/// enforced; a document with zero or several correct answers still plays,
/// and the reveal marks whatever the document tagged.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Answer {
    pub text: String,
    pub correct: bool,
}

impl From<RawQuestion> for Question {
    fn from(raw_question: RawQuestion) -> Self {
        Question {
            text: raw_question.question,
            answers: raw_question
                .answers
                .into_iter()
                .map(|raw_answer| Answer {
                    text: raw_answer.text,
                    correct: raw_answer.correct,
                })
                .collect(),
        }
    }
}
