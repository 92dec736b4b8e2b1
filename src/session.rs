use std::io::{self, BufRead, Write};

use rand::Rng;

use crate::display::{error_message, outcome_message, render_history, render_state};
use crate::engine::QuizEngine;
use crate::models::{Difficulty, Operation};
use crate::store::ScoreStore;

const HELP: &str = "\
Commands:
  new                  deal a new exercise
  difficulty <level>   easy, medium or hard
  op <operation>       +, -, × (or add, sub, mul); a bare symbol works too
  guess <n>            submit an answer; a bare number works too
  reveal               show the result without scoring
  show                 print the board again
  history              print the last five operations
  reset                reset score and history
  help                 this text
  quit                 save and leave";

#[derive(Debug, PartialEq, Eq)]
enum Command {
    New,
    Difficulty(Option<Difficulty>),
    Select(Option<Operation>),
    Guess(String),
    Reveal,
    Show,
    History,
    Reset,
    Help,
    Quit,
    Unknown(String),
}

fn parse_command(line: &str) -> Command {
    let line = line.trim();
    let (head, rest) = match line.split_once(char::is_whitespace) {
        Some((head, rest)) => (head, rest.trim()),
        None => (line, ""),
    };

    match head.to_lowercase().as_str() {
        "new" | "n" => Command::New,
        "difficulty" | "level" => Command::Difficulty(Difficulty::parse(rest)),
        "op" => Command::Select(Operation::parse(rest)),
        "guess" | "g" => Command::Guess(rest.to_string()),
        "reveal" => Command::Reveal,
        "show" | "" => Command::Show,
        "history" => Command::History,
        "reset" => Command::Reset,
        "help" | "?" => Command::Help,
        "quit" | "exit" | "q" => Command::Quit,
        _ => {
            if let Some(op) = Operation::parse(line) {
                Command::Select(Some(op))
            } else if looks_numeric(line) {
                Command::Guess(line.to_string())
            } else {
                Command::Unknown(line.to_string())
            }
        }
    }
}

/// An optional sign followed by digits, whether or not it fits an `i32`.
fn looks_numeric(line: &str) -> bool {
    let digits = line.strip_prefix(['-', '+']).unwrap_or(line);
    !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit())
}

/// Drives one interactive session until `quit` or end of input.
pub fn run<R, S, I, O>(engine: &mut QuizEngine<R, S>, input: I, mut out: O) -> io::Result<()>
where
    R: Rng,
    S: ScoreStore,
    I: BufRead,
    O: Write,
{
    write!(out, "{}", render_state(&engine.current_state()))?;
    writeln!(out, "Type 'help' for commands.")?;

    for line in input.lines() {
        let line = line?;
        let redraw = match parse_command(&line) {
            Command::New => {
                engine.new_exercise();
                writeln!(out, "New exercise generated")?;
                true
            }
            Command::Difficulty(Some(level)) => {
                engine.set_difficulty(level);
                writeln!(out, "Difficulty set to {}", level.display_name())?;
                true
            }
            Command::Difficulty(None) => {
                writeln!(out, "Unknown level. Use easy, medium or hard.")?;
                false
            }
            Command::Select(Some(op)) => {
                engine.select_operation(op);
                true
            }
            Command::Select(None) => {
                writeln!(out, "Unknown operation. Use +, - or ×.")?;
                false
            }
            Command::Guess(raw) => {
                match engine.submit_guess(&raw) {
                    Ok(outcome) => writeln!(out, "{}", outcome_message(&outcome))?,
                    Err(e) => writeln!(out, "{}", error_message(&e))?,
                }
                true
            }
            Command::Reveal => {
                match engine.reveal() {
                    Ok(result) => writeln!(out, "Result: {}", result)?,
                    Err(e) => writeln!(out, "{}", error_message(&e))?,
                }
                true
            }
            Command::Show => true,
            Command::History => {
                write!(out, "{}", render_history(&engine.current_state().history))?;
                false
            }
            Command::Reset => {
                engine.reset_score();
                writeln!(out, "Score reset")?;
                true
            }
            Command::Help => {
                writeln!(out, "{}", HELP)?;
                false
            }
            Command::Quit => break,
            Command::Unknown(text) => {
                writeln!(out, "Unknown command '{}'. Type 'help'.", text)?;
                false
            }
        };

        if redraw {
            write!(out, "{}", render_state(&engine.current_state()))?;
        }
    }

    engine.suspend();
    writeln!(out, "Final score: {}", engine.score())?;
    Ok(())
}
