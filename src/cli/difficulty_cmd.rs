use crate::models::{config, Difficulty};

pub fn handle_difficulty(level: Option<Difficulty>) {
    let mut user_config = config::load_config();

    match level {
        None => {
            println!("Current difficulty: {}", user_config.difficulty.display_name());
            println!();
            println!("Operand ranges:");
            for d in Difficulty::ALL {
                let (min, max) = d.bounds();
                println!("  {:<8} {}-{}", format!("{}:", d.display_name()), min, max);
            }
            println!();
            println!("Each correct answer is worth 10 points.");
            println!();
            println!("To change: mathquiz difficulty <level>");
        }
        Some(new_level) => {
            let old_level = user_config.difficulty;
            if old_level == new_level {
                println!("Difficulty is already set to {}", new_level.display_name());
                return;
            }

            user_config.difficulty = new_level;
            if let Err(e) = config::save_config(&user_config) {
                eprintln!("Failed to save config: {}", e);
                std::process::exit(1);
            }

            println!(
                "Difficulty changed from {} to {}",
                old_level.display_name(),
                new_level.display_name()
            );
        }
    }
}
