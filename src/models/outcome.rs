use thiserror::Error;

/// Result of grading a guess. Carries the expected value either way.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuessOutcome {
    Correct(i32),
    Incorrect(i32),
}

/// Validation failures from `submit_guess`. None of them touch engine state.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GuessError {
    #[error("no operation selected")]
    NoOperationSelected,

    #[error("empty input")]
    EmptyInput,

    #[error("'{0}' is not an integer")]
    InvalidFormat(String),
}
