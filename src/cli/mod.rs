mod difficulty_cmd;
mod play;
mod score;

use clap::{Parser, Subcommand};

use crate::models::Difficulty;

#[derive(Parser)]
#[command(name = "mathquiz")]
#[command(about = "Mental arithmetic quiz", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start an interactive session
    Play {
        #[arg(short, long, value_enum)]
        difficulty: Option<Difficulty>,
        /// Seed the number generator for a repeatable session
        #[arg(long)]
        seed: Option<u64>,
    },
    Difficulty {
        #[arg(value_enum)]
        level: Option<Difficulty>,
    },
    Score,
    Reset,
}

pub fn run(cli: Cli) {
    match cli.command {
        None => play::play(None, None),
        Some(Commands::Play { difficulty, seed }) => play::play(difficulty, seed),
        Some(Commands::Difficulty { level }) => difficulty_cmd::handle_difficulty(level),
        Some(Commands::Score) => score::show_score(),
        Some(Commands::Reset) => score::reset_score(),
    }
}
