use std::fmt::Write as _;

use crate::engine::QuizState;
use crate::models::{GuessError, GuessOutcome, HistoryEntry};

pub fn render_state(state: &QuizState) -> String {
    let symbol = state.operation.map(|op| op.symbol()).unwrap_or("?");

    let mut out = String::new();
    let _ = writeln!(out, "{}", "=".repeat(40));
    let _ = writeln!(
        out,
        "  Level: {:<10} Score: {}",
        state.difficulty.display_name(),
        state.score
    );
    let _ = writeln!(out, "{}", "-".repeat(40));
    let _ = writeln!(out, "  {} {} {} = ?", state.a, symbol, state.b);
    let _ = writeln!(out, "{}", "-".repeat(40));
    out.push_str(&render_history(&state.history));
    let _ = writeln!(out, "{}", "=".repeat(40));
    out
}

pub fn render_history(history: &[HistoryEntry]) -> String {
    if history.is_empty() {
        return "  No operations yet\n".to_string();
    }

    let mut out = String::from("  History:\n");
    for (i, entry) in history.iter().enumerate() {
        let _ = writeln!(out, "  {}. {}", i + 1, entry);
    }
    out
}

pub fn outcome_message(outcome: &GuessOutcome) -> String {
    match outcome {
        GuessOutcome::Correct(n) => format!("[+] Correct! The answer is {}.", n),
        GuessOutcome::Incorrect(n) => format!("[x] Wrong. The answer was {}.", n),
    }
}

pub fn error_message(error: &GuessError) -> String {
    match error {
        GuessError::NoOperationSelected => "Pick an operation first (+, -, ×).".to_string(),
        GuessError::EmptyInput => "Type an answer before submitting.".to_string(),
        GuessError::InvalidFormat(raw) => format!("'{}' is not a whole number.", raw),
    }
}
