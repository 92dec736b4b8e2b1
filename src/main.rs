mod cli;
mod display;
mod engine;
mod models;
mod session;
mod store;

use clap::Parser;
use crate::cli::Cli;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    cli::run(cli);
}
