use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use chrono::Local;
use serde::{Deserialize, Serialize};

use super::difficulty::Difficulty;

const CONFIG_DIR_ENV: &str = "MATHQUIZ_CONFIG_DIR";
const CONFIG_FILE: &str = "config.json";

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct UserConfig {
    #[serde(default)]
    pub difficulty: Difficulty,
    #[serde(default)]
    pub last_played: Option<String>,
}

impl UserConfig {
    pub fn mark_played(&mut self) {
        self.last_played = Some(Local::now().format("%Y-%m-%d").to_string());
    }
}

/// `$MATHQUIZ_CONFIG_DIR`, else `~/.config/mathquiz`.
pub fn config_dir() -> Option<PathBuf> {
    if let Some(dir) = env::var_os(CONFIG_DIR_ENV) {
        return Some(PathBuf::from(dir));
    }
    dirs::home_dir().map(|home| home.join(".config").join("mathquiz"))
}

pub fn load_config() -> UserConfig {
    match config_dir() {
        Some(dir) => load_config_from(&dir),
        None => UserConfig::default(),
    }
}

pub fn load_config_from(dir: &Path) -> UserConfig {
    let path = dir.join(CONFIG_FILE);
    if !path.exists() {
        return UserConfig::default();
    }

    match fs::read_to_string(&path) {
        Ok(contents) => serde_json::from_str(&contents).unwrap_or_else(|e| {
            log::warn!("Ignoring malformed {}: {}", path.display(), e);
            UserConfig::default()
        }),
        Err(_) => UserConfig::default(),
    }
}

pub fn save_config(config: &UserConfig) -> Result<(), std::io::Error> {
    let dir = config_dir().ok_or_else(|| {
        std::io::Error::new(std::io::ErrorKind::NotFound, "Could not determine home directory")
    })?;
    save_config_to(&dir, config)
}

pub fn save_config_to(dir: &Path, config: &UserConfig) -> Result<(), std::io::Error> {
    fs::create_dir_all(dir)?;
    let contents = serde_json::to_string_pretty(config)?;
    fs::write(dir.join(CONFIG_FILE), contents)
}
