use std::io;

use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::engine::QuizEngine;
use crate::models::{config, Difficulty};
use crate::session;
use crate::store::{MemoryStore, PrefsStore, ScoreStore};

pub fn play(difficulty: Option<Difficulty>, seed: Option<u64>) {
    let mut user_config = config::load_config();
    let difficulty = difficulty.unwrap_or(user_config.difficulty);

    let store: Box<dyn ScoreStore> = match PrefsStore::open_default() {
        Ok(store) => {
            log::info!("Using score store at {}", store.path().display());
            Box::new(store)
        }
        Err(e) => {
            log::warn!("{}; score will not be kept after this session", e);
            Box::new(MemoryStore::new())
        }
    };

    user_config.mark_played();
    if let Err(e) = config::save_config(&user_config) {
        log::warn!("Failed to save config: {}", e);
    }

    let rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let mut engine = QuizEngine::new(rng, store, difficulty);

    let stdin = io::stdin();
    if let Err(e) = session::run(&mut engine, stdin.lock(), io::stdout()) {
        eprintln!("Session ended unexpectedly: {}", e);
        std::process::exit(1);
    }
}
