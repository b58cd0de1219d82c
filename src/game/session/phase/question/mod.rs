use anyhow::*;

use crate::game::session::definition::Answer;
use crate::game::session::State;
use crate::output::{Message, QuestionCard, QuizOutput, SelectionReveal};


#[derive(Clone, Debug)]
pub struct Selection {
    pub answer: usize,
    pub is_correct: bool,
}

/// One question on screen. Unanswered, it is waiting for a selection;
/// once a selection lands the answer controls are dead and the phase is
/// over, pending the "next" action.
pub struct QuestionState<O> {
    number: usize,
    total: usize,
    text: String,
    answers: Vec<Answer>,
    selection: Option<Selection>,
    output: O,
}

impl<O: QuizOutput> QuestionState<O> {
    pub fn new(number: usize, total: usize, text: String, answers: Vec<Answer>, output: O) -> Self {
        QuestionState {
            number,
            total,
            text,
            answers,
            selection: None,
            output,
        }
    }

    pub fn select(&mut self, answer: usize) -> Result<Selection> {
        if self.selection.is_some() {
            return Err(anyhow!("An answer was already chosen for this question"));
        }

        let chosen = self
            .answers
            .get(answer)
            .ok_or_else(|| anyhow!("There is no answer number {}", answer + 1))?;
        let selection = Selection {
            answer,
            is_correct: chosen.correct,
        };
        self.selection = Some(selection.clone());

        self.output.say(&Message::SelectionReveal(SelectionReveal {
            answers: self.answer_texts(),
            chosen: answer,
            correct: self.correct_answers(),
            is_correct: selection.is_correct,
        }));

        Ok(selection)
    }

    fn answer_texts(&self) -> Vec<String> {
        self.answers.iter().map(|a| a.text.clone()).collect()
    }

    fn correct_answers(&self) -> Vec<usize> {
        self.answers
            .iter()
            .enumerate()
            .filter(|(_index, answer)| answer.correct)
            .map(|(index, _answer)| index)
            .collect()
    }
}

impl<O: QuizOutput> State for QuestionState<O> {
    fn on_begin(&mut self) {
        self.output.say(&Message::QuestionBegins(QuestionCard {
            number: self.number,
            total: self.total,
            text: self.text.clone(),
            answers: self.answer_texts(),
        }));
    }

    fn on_end(&mut self) {}

    fn is_over(&self) -> bool {
        self.selection.is_some()
    }
}
