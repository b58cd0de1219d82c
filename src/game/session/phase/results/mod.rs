use crate::game::session::State;
use crate::output::{Message, QuizOutput};


/// Terminal phase: the quiz UI is gone, only the score summary remains.
/// Leaving it takes a restart or a trip back to the home screen.
pub struct ResultsState<O> {
    score: u32,
    total: usize,
    output: O,
}

impl<O> ResultsState<O> {
    pub fn new(score: u32, total: usize, output: O) -> Self {
        ResultsState {
            score,
            total,
            output,
        }
    }
}

impl<O: QuizOutput> State for ResultsState<O> {
    fn on_begin(&mut self) {
        self.output
            .say(&Message::ScoreSummary(self.score, self.total));
    }

    fn on_end(&mut self) {}

    fn is_over(&self) -> bool {
        false
    }
}
