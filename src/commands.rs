use anyhow::{anyhow, Result};

use crate::game::Game;
use crate::output::QuizOutput;

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Command {
    Begin(String),
    Select(usize),
    Next,
    Restart,
    Home,
    Quit,
}

#[derive(Debug, Eq, PartialEq)]
pub enum Flow {
    Continue,
    Quit,
}

/// Maps an input line to a command. Numbers are answer selections as
/// printed on screen (starting at 1); a bare word that is not a keyword
/// names a quiz to begin.
pub fn parse(line: &str) -> Result<Command> {
    let line = line.trim();

    if line.is_empty() {
        return Ok(Command::Next);
    }

    if let Ok(number) = line.parse::<usize>() {
        return number
            .checked_sub(1)
            .map(Command::Select)
            .ok_or_else(|| anyhow!("Answer numbers start at 1"));
    }

    match line.to_lowercase().as_str() {
        "next" => return Ok(Command::Next),
        "restart" => return Ok(Command::Restart),
        "home" => return Ok(Command::Home),
        "quit" | "exit" => return Ok(Command::Quit),
        _ => (),
    }

    if line.contains(char::is_whitespace) {
        return Err(anyhow!(
            "'{}' is not a command or a quiz name. Try a quiz name, an answer number, 'next', 'restart', 'home' or 'quit'.",
            line
        ));
    }

    Ok(Command::Begin(line.to_owned()))
}

pub fn run<O: QuizOutput>(game: &mut Game<O>, line: &str) -> Result<Flow> {
    match parse(line)? {
        Command::Begin(quiz_name) => game.begin(&quiz_name),
        Command::Select(answer) => game.select(answer)?,
        Command::Next => {
            // Enter on the home screen is a no-op, not an error.
            if !game.is_at_home() {
                game.next()?;
            }
        }
        Command::Restart => game.restart()?,
        Command::Home => game.go_home(),
        Command::Quit => return Ok(Flow::Quit),
    }
    Ok(Flow::Continue)
}
