use std::env;
use std::io::{self, BufRead};

mod commands;
mod game;
mod output;
mod shuffle;

use crate::commands::Flow;
use crate::game::session::definition::QuizSource;
use crate::game::Game;
use crate::output::console::ConsoleOutput;

const DEFAULT_QUIZZES_LOCATION: &str = "quizzes";

fn main() {
    pretty_env_logger::init();

    let mut location = DEFAULT_QUIZZES_LOCATION.to_owned();
    let mut initial_quiz = None;
    let mut args = env::args().skip(1);
    while let Some(arg) = args.next() {
        if arg == "--quizzes" {
            match args.next() {
                Some(value) => location = value,
                None => {
                    eprintln!("--quizzes expects a directory or a base URL");
                    return;
                }
            }
        } else {
            initial_quiz = Some(arg);
        }
    }

    let source = QuizSource::from_location(&location);
    let mut game = Game::new(source, ConsoleOutput::new());

    if let Some(quiz_name) = &initial_quiz {
        game.begin(quiz_name);
    }

    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let line = match line {
            Ok(line) => line,
            Err(_) => break,
        };
        match commands::run(&mut game, &line) {
            Ok(Flow::Quit) => break,
            Ok(Flow::Continue) => (),
            Err(e) => {
                log::error!("{:#}", e);
                println!("{}", e);
            }
        }
    }
}
