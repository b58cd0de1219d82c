use super::*;
use crate::game::session::definition::Answer;
use crate::output::mock::MockQuizOutput;
use crate::output::QuestionCard;

fn sample_definition(question_count: usize) -> QuizDefinition {
    let questions = (1..=question_count)
        .map(|number| Question {
            text: format!("Question {}", number),
            answers: vec![
                Answer {
                    text: "right".to_owned(),
                    correct: true,
                },
                Answer {
                    text: "wrong".to_owned(),
                    correct: false,
                },
                Answer {
                    text: "also wrong".to_owned(),
                    correct: false,
                },
            ],
        })
        .collect();
    QuizDefinition {
        title: "Sample".to_owned(),
        questions,
    }
}

fn last_card(messages: &[Message]) -> QuestionCard {
    messages
        .iter()
        .rev()
        .find_map(|message| match message {
            Message::QuestionBegins(card) => Some(card.clone()),
            _ => None,
        })
        .expect("No question was presented")
}

fn answer_index(card: &QuestionCard, text: &str) -> usize {
    card.answers
        .iter()
        .position(|answer| answer == text)
        .expect("Answer not on the card")
}

#[test]
fn announces_quiz_then_first_question() {
    let mut output = MockQuizOutput::new();
    let _session = Session::new(sample_definition(3), output.clone());
    let messages = output.flush();
    assert_eq!(messages[0], Message::QuizBegins("Sample".to_owned(), 3));
    let card = last_card(&messages);
    assert_eq!(card.number, 1);
    assert_eq!(card.total, 3);
}

#[test]
fn presents_every_question_exactly_once_before_results() {
    let mut output = MockQuizOutput::new();
    let mut session = Session::new(sample_definition(4), output.clone());

    let mut presented = Vec::new();
    for round in 0..4 {
        let card = last_card(&output.flush());
        assert_eq!(card.number, round + 1);
        assert_eq!(card.total, 4);
        presented.push(card.text.clone());
        session.select(answer_index(&card, "right")).unwrap();
        session.next().unwrap();
    }

    assert!(session.is_over());
    assert!(output.contains_message(&Message::ScoreSummary(4, 4)));

    presented.sort();
    let mut expected: Vec<String> = (1..=4).map(|n| format!("Question {}", n)).collect();
    expected.sort();
    assert_eq!(presented, expected);
}

#[test]
fn index_advances_by_one_per_next() {
    let mut output = MockQuizOutput::new();
    let mut session = Session::new(sample_definition(3), output.clone());

    for round in 0..3 {
        assert_eq!(session.current_index(), round);
        let card = last_card(&output.flush());
        session.select(answer_index(&card, "wrong")).unwrap();
        session.next().unwrap();
    }
    assert_eq!(session.current_index(), 3);
}

#[test]
fn score_counts_correct_selections() {
    let mut output = MockQuizOutput::new();
    let mut session = Session::new(sample_definition(3), output.clone());

    let picks = ["right", "wrong", "right"];
    let mut previous_score = 0;
    for &pick in &picks {
        let card = last_card(&output.flush());
        session.select(answer_index(&card, pick)).unwrap();
        assert!(session.score() >= previous_score);
        previous_score = session.score();
        session.next().unwrap();
    }

    assert_eq!(session.score(), 2);
    assert!(output.contains_message(&Message::ScoreSummary(2, 3)));
}

#[test]
fn cannot_advance_before_answering() {
    let mut output = MockQuizOutput::new();
    let mut session = Session::new(sample_definition(2), output.clone());

    assert!(session.next().is_err());
    let card = last_card(&output.flush());
    session.select(answer_index(&card, "right")).unwrap();
    assert!(session.next().is_ok());
}

#[test]
fn cannot_answer_the_same_question_twice() {
    let mut output = MockQuizOutput::new();
    let mut session = Session::new(sample_definition(2), output.clone());

    let card = last_card(&output.flush());
    session.select(answer_index(&card, "right")).unwrap();
    assert!(session.select(answer_index(&card, "right")).is_err());
    assert_eq!(session.score(), 1);
}

#[test]
fn empty_quiz_goes_straight_to_results() {
    let output = MockQuizOutput::new();
    let session = Session::new(sample_definition(0), output.clone());
    assert!(session.is_over());
    assert!(output.contains_message(&Message::ScoreSummary(0, 0)));
}

#[test]
fn rejects_interactions_once_over() {
    let mut output = MockQuizOutput::new();
    let mut session = Session::new(sample_definition(1), output.clone());

    let card = last_card(&output.flush());
    session.select(answer_index(&card, "right")).unwrap();
    session.next().unwrap();

    assert!(session.is_over());
    assert!(session.select(0).is_err());
    assert!(session.next().is_err());
}

#[test]
fn worked_example_scores_one_out_of_one() {
    let definition = QuizDefinition {
        title: "T".to_owned(),
        questions: vec![Question {
            text: "Q1".to_owned(),
            answers: vec![
                Answer {
                    text: "A".to_owned(),
                    correct: true,
                },
                Answer {
                    text: "B".to_owned(),
                    correct: false,
                },
            ],
        }],
    };

    let mut output = MockQuizOutput::new();
    let mut session = Session::new(definition, output.clone());
    assert_eq!(session.title(), "T");

    let card = last_card(&output.flush());
    session.select(answer_index(&card, "A")).unwrap();
    session.next().unwrap();

    assert_eq!(session.score(), 1);
    assert!(output.contains_message(&Message::ScoreSummary(1, 1)));
}
