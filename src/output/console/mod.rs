use crate::output::{Message, QuestionCard, QuizOutput, SelectionReveal};

#[derive(Clone)]
pub struct ConsoleOutput;

impl ConsoleOutput {
    pub fn new() -> Self {
        ConsoleOutput
    }

    fn print_home(&self) {
        println!();
        println!("== pop-quiz ==");
        println!("Type the name of a quiz to begin, or 'quit' to leave.");
    }

    fn print_question(&self, card: &QuestionCard) {
        println!();
        println!("Question {}/{}", card.number, card.total);
        println!("{}", card.text);
        for (index, answer) in card.answers.iter().enumerate() {
            println!("  {}) {}", index + 1, answer);
        }
        println!("Type the number of your answer.");
    }

    fn print_reveal(&self, reveal: &SelectionReveal) {
        println!();
        for (index, answer) in reveal.answers.iter().enumerate() {
            let marker = if reveal.correct.contains(&index) {
                "+"
            } else if index == reveal.chosen {
                "x"
            } else {
                " "
            };
            let chosen = if index == reveal.chosen {
                "  <- your answer"
            } else {
                ""
            };
            println!("  {} {}) {}{}", marker, index + 1, answer, chosen);
        }
        if reveal.is_correct {
            println!("Correct!");
        } else {
            println!("Not quite.");
        }
        println!("Press enter to continue.");
    }
}

impl QuizOutput for ConsoleOutput {
    fn say(&mut self, message: &Message) {
        match message {
            Message::Home => self.print_home(),
            Message::QuizBegins(title, total) => {
                println!();
                println!("=== {} ===", title);
                println!("{} questions. Good luck!", total);
            }
            Message::QuestionBegins(card) => self.print_question(card),
            Message::SelectionReveal(reveal) => self.print_reveal(reveal),
            Message::ScoreSummary(score, total) => {
                println!();
                println!("You scored {} out of {}!", score, total);
                println!("Type 'restart' to try again, or 'home' for the start screen.");
            }
            Message::LoadFailed(quiz_name) => {
                println!();
                println!(
                    "Could not load the quiz '{}'. It might not exist. Returning to the start screen.",
                    quiz_name
                );
            }
        }
    }
}
