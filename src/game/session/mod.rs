use anyhow::*;
use rand::thread_rng;

use self::definition::{Question, QuizDefinition};
use self::phase::*;
use crate::output::{Message, QuizOutput};
use crate::shuffle;

pub mod definition;
mod phase;

#[cfg(test)]
mod tests;

trait State {
    fn on_begin(&mut self);
    fn on_end(&mut self);
    fn is_over(&self) -> bool;
}

enum Phase<O: QuizOutput> {
    Question(QuestionState<O>),
    Results(ResultsState<O>),
}

impl<O: QuizOutput> Phase<O> {
    fn get_state(&mut self) -> &mut dyn State {
        match self {
            Phase::Question(s) => s,
            Phase::Results(s) => s,
        }
    }

    fn name(&self) -> &'static str {
        match self {
            Phase::Question(_) => "question",
            Phase::Results(_) => "results",
        }
    }
}

/// One run through one quiz: the quiz data (question order shuffled once
/// at creation), the current question index, and the score so far.
/// Discarded wholesale on restart or home navigation.
pub struct Session<O: QuizOutput> {
    title: String,
    questions: Vec<Question>,
    current_index: usize,
    score: u32,
    current_phase: Phase<O>,
    output: O,
}

impl<O: QuizOutput> Session<O> {
    pub fn new(definition: QuizDefinition, mut output: O) -> Session<O> {
        let QuizDefinition {
            title,
            mut questions,
        } = definition;
        shuffle::shuffle(&mut thread_rng(), &mut questions);

        output.say(&Message::QuizBegins(title.clone(), questions.len()));

        let mut current_phase = Self::make_phase(&questions, 0, 0, output.clone());
        current_phase.get_state().on_begin();

        Session {
            title,
            questions,
            current_index: 0,
            score: 0,
            current_phase,
            output,
        }
    }

    pub fn select(&mut self, answer: usize) -> Result<()> {
        match &mut self.current_phase {
            Phase::Question(question_state) => {
                let selection = question_state.select(answer)?;
                log::debug!(
                    "Answer {} selected ({})",
                    selection.answer + 1,
                    if selection.is_correct {
                        "correct"
                    } else {
                        "incorrect"
                    }
                );
                if selection.is_correct {
                    self.score += 1;
                }
                Ok(())
            }
            Phase::Results(_) => Err(anyhow!("There is no active question")),
        }
    }

    pub fn next(&mut self) -> Result<()> {
        match &self.current_phase {
            Phase::Question(question_state) => {
                if !question_state.is_over() {
                    return Err(anyhow!("Choose an answer before moving on"));
                }
                self.current_index += 1;
                let phase = Self::make_phase(
                    &self.questions,
                    self.current_index,
                    self.score,
                    self.output.clone(),
                );
                self.set_current_phase(phase);
                Ok(())
            }
            Phase::Results(_) => Err(anyhow!("The quiz is already over")),
        }
    }

    pub fn is_over(&self) -> bool {
        match self.current_phase {
            Phase::Results(_) => true,
            _ => false,
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    fn set_current_phase(&mut self, phase: Phase<O>) {
        log::debug!("Entering quiz phase: {}", phase.name());

        let state = self.current_phase.get_state();
        state.on_end();

        self.current_phase = phase;

        let state = self.current_phase.get_state();
        state.on_begin();
    }

    /// Question phase for `index`, with the answer order reshuffled for
    /// this display; past the last question, the results phase.
    fn make_phase(questions: &[Question], index: usize, score: u32, output: O) -> Phase<O> {
        match questions.get(index) {
            Some(question) => {
                let mut answers = question.answers.clone();
                shuffle::shuffle(&mut thread_rng(), &mut answers);
                Phase::Question(QuestionState::new(
                    index + 1,
                    questions.len(),
                    question.text.clone(),
                    answers,
                    output,
                ))
            }
            None => Phase::Results(ResultsState::new(score, questions.len(), output)),
        }
    }
}
