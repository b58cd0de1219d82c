use anyhow::{anyhow, Result};

pub mod session;

use self::session::definition::{QuizDefinition, QuizSource};
use self::session::Session;
use crate::output::{Message, QuizOutput};


enum Phase<O: QuizOutput> {
    Home,
    Session(Session<O>),
}

/// Outer machine: the neutral home screen, or a running quiz session.
/// Remembers the last quiz name so the results screen can offer a
/// restart.
pub struct Game<O: QuizOutput> {
    source: QuizSource,
    output: O,
    current_phase: Phase<O>,
    current_quiz: Option<String>,
}

impl<O: QuizOutput> Game<O> {
    pub fn new(source: QuizSource, output: O) -> Game<O> {
        let mut game = Game {
            source,
            output,
            current_phase: Phase::Home,
            current_quiz: None,
        };
        game.enter_home();
        game
    }

    /// Load boundary. A failed load is surfaced to the player and drops
    /// the game back to the home screen; no session survives it.
    pub fn begin(&mut self, quiz_name: &str) {
        match QuizDefinition::fetch(&self.source, quiz_name) {
            Ok(definition) => {
                log::debug!("Starting quiz: {}", quiz_name);
                self.current_quiz = Some(quiz_name.to_owned());
                self.current_phase = Phase::Session(Session::new(definition, self.output.clone()));
            }
            Err(e) => {
                log::error!("Could not load quiz '{}': {:#}", quiz_name, e);
                self.output.say(&Message::LoadFailed(quiz_name.to_owned()));
                self.enter_home();
            }
        }
    }

    pub fn select(&mut self, answer: usize) -> Result<()> {
        match &mut self.current_phase {
            Phase::Session(session) => session.select(answer),
            Phase::Home => Err(anyhow!("There is no quiz in progress")),
        }
    }

    pub fn next(&mut self) -> Result<()> {
        match &mut self.current_phase {
            Phase::Session(session) => session.next(),
            Phase::Home => Err(anyhow!("There is no quiz in progress")),
        }
    }

    pub fn restart(&mut self) -> Result<()> {
        match self.current_quiz.clone() {
            Some(quiz_name) => {
                self.begin(&quiz_name);
                Ok(())
            }
            None => Err(anyhow!("There is no quiz to restart")),
        }
    }

    pub fn go_home(&mut self) {
        if let Phase::Session(session) = &self.current_phase {
            if !session.is_over() {
                log::debug!(
                    "Abandoning quiz '{}' at question {} with score {}",
                    session.title(),
                    session.current_index() + 1,
                    session.score()
                );
            }
        }
        self.enter_home();
    }

    pub fn is_at_home(&self) -> bool {
        match self.current_phase {
            Phase::Home => true,
            _ => false,
        }
    }

    fn enter_home(&mut self) {
        log::debug!("Entering home screen");
        self.current_phase = Phase::Home;
        self.current_quiz = None;
        self.output.say(&Message::Home);
    }
}
