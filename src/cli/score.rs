use crate::engine::SCORE_KEY;
use crate::store::{PrefsStore, ScoreStore};

fn open_store() -> PrefsStore {
    PrefsStore::open_default().unwrap_or_else(|e| {
        eprintln!("{}", e);
        std::process::exit(1);
    })
}

pub fn show_score() {
    let store = open_store();

    match store.get(SCORE_KEY) {
        Ok(score) => println!("Score: {}", score.unwrap_or(0)),
        Err(e) => {
            eprintln!("Failed to read score: {}", e);
            std::process::exit(1);
        }
    }
}

pub fn reset_score() {
    let mut store = open_store();

    if let Err(e) = store.put(SCORE_KEY, 0) {
        eprintln!("Failed to reset score: {}", e);
        std::process::exit(1);
    }
    println!("Score reset to 0");
}
