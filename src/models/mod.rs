pub mod config;
pub mod difficulty;
pub mod exercise;
pub mod history;
pub mod operation;
pub mod outcome;

// config is accessed as crate::models::config::{load_config, save_config, ...}
pub use difficulty::Difficulty;
pub use exercise::Exercise;
pub use history::{History, HistoryEntry};
pub use operation::Operation;
pub use outcome::{GuessError, GuessOutcome};
