use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};

pub const WINDOW_TITLE: &str = "Colorful Snake Game";
pub const CELL_SIZE: i32 = 32;
pub const TICKS_PER_SECOND: u32 = 15;
/// How long the game-over frame stays up before the program exits.
pub const GAME_OVER_HOLD_SECS: f64 = 2.0;
/// Config file picked up from the working directory when no path is given.
pub const DEFAULT_CONFIG_FILE: &str = "snake.json";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// RNG seed for food, spawn point and body palette. Random when unset.
    pub seed: Option<u64>,
    pub log_level: String,
    pub palette_len: usize,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            seed: None,
            log_level: "info".to_owned(),
            palette_len: 1000,
        }
    }
}

impl GameConfig {
    pub fn from_json(text: &str) -> Result<Self> {
        let config: GameConfig = serde_json::from_str(text).context("invalid config JSON")?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;
        Self::from_json(&text).with_context(|| format!("in config file {}", path.display()))
    }

    /// An explicit path must exist; otherwise the default file is optional.
    pub fn resolve(explicit: Option<&Path>) -> Result<Self> {
        match explicit {
            Some(path) => Self::load(path),
            None => {
                let fallback = PathBuf::from(DEFAULT_CONFIG_FILE);
                if fallback.exists() {
                    Self::load(&fallback)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.palette_len == 0 {
            bail!("palette_len must be at least 1");
        }
        Ok(())
    }

    pub fn tick_interval_secs() -> f64 {
        1.0 / TICKS_PER_SECOND as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_arcade_settings() {
        let config = GameConfig::default();
        assert_eq!(config.seed, None);
        assert_eq!(config.palette_len, 1000);
        assert_eq!(GAME_OVER_HOLD_SECS, 2.0);
    }

    #[test]
    fn partial_json_keeps_defaults() {
        let config = GameConfig::from_json(r#"{ "seed": 12 }"#).unwrap();
        assert_eq!(config.seed, Some(12));
        assert_eq!(config.log_level, "info");
        assert_eq!(config.palette_len, 1000);
    }

    #[test]
    fn hold_time_is_not_a_config_key() {
        // Unknown keys are ignored, so an old hold setting has no effect.
        let config = GameConfig::from_json(r#"{ "game_over_hold_ms": 10 }"#).unwrap();
        assert_eq!(config, GameConfig::default());
    }

    #[test]
    fn zero_palette_is_rejected() {
        let err = GameConfig::from_json(r#"{ "palette_len": 0 }"#).unwrap_err();
        assert!(err.to_string().contains("palette_len"));
    }

    #[test]
    fn malformed_json_is_an_error() {
        assert!(GameConfig::from_json("{ seed: }").is_err());
    }

    #[test]
    fn missing_explicit_file_is_an_error() {
        let missing = Path::new("definitely/not/here/snake.json");
        assert!(GameConfig::resolve(Some(missing)).is_err());
    }

    #[test]
    fn file_round_trip() {
        let path = std::env::temp_dir().join(format!("colorful_snake_{}.json", std::process::id()));
        let written = GameConfig {
            seed: Some(3),
            palette_len: 4,
            ..GameConfig::default()
        };
        fs::write(&path, serde_json::to_string_pretty(&written).unwrap()).unwrap();
        let loaded = GameConfig::load(&path).unwrap();
        fs::remove_file(&path).ok();
        assert_eq!(loaded, written);
    }
}
