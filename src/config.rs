//! Game tuning and endpoint configuration.
//!
//! Defaults reproduce the classic game exactly. `start_game_with_config` accepts a
//! JSON object overriding any subset of fields.

use serde::Deserialize;

use crate::error::GameError;

/// Baseline horizontal speed in pixels per animation frame.
pub const BASE_SPEED: f64 = 2.0;
/// How many recently spawned words are remembered for duplicate suppression.
pub const HISTORY_CAPACITY: usize = 20;
/// Minimum vertical distance between a new word and any live word.
pub const MIN_VERTICAL_SPACING: f64 = 50.0;
/// Spawn rows are drawn from `height / 2 ± VERTICAL_SPREAD`.
pub const VERTICAL_SPREAD: f64 = 200.0;
/// Upper bound on word draws and on position draws per spawn.
pub const MAX_SPAWN_ATTEMPTS: u32 = 10;

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Pixels per frame every live word moves right.
    pub speed: f64,
    pub history_capacity: usize,
    pub min_vertical_spacing: f64,
    pub vertical_spread: f64,
    pub max_spawn_attempts: u32,
    /// Word-association endpoint, queried as `{endpoint}?ml={seed_term}&max={max_words}`.
    pub endpoint: String,
    pub seed_term: String,
    pub max_words: u32,
    /// Local storage key holding the high score as a base-10 string.
    pub storage_key: String,
    /// Id of the canvas element to draw into (created if missing).
    pub canvas_id: String,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            speed: BASE_SPEED,
            history_capacity: HISTORY_CAPACITY,
            min_vertical_spacing: MIN_VERTICAL_SPACING,
            vertical_spread: VERTICAL_SPREAD,
            max_spawn_attempts: MAX_SPAWN_ATTEMPTS,
            endpoint: "https://api.datamuse.com/words".to_string(),
            seed_term: "life".to_string(),
            max_words: 50,
            storage_key: "highScore".to_string(),
            canvas_id: "gameCanvas".to_string(),
        }
    }
}

impl GameConfig {
    /// Parse a (possibly partial) JSON override. Missing fields keep their defaults.
    pub fn from_json(json: &str) -> Result<Self, GameError> {
        let config: GameConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), GameError> {
        if self.speed.is_nan() || self.speed <= 0.0 {
            return Err(GameError::InvalidConfig("speed must be positive"));
        }
        if self.history_capacity == 0 {
            return Err(GameError::InvalidConfig("history_capacity must be at least 1"));
        }
        if self.max_spawn_attempts == 0 {
            return Err(GameError::InvalidConfig("max_spawn_attempts must be at least 1"));
        }
        if self.min_vertical_spacing < 0.0 || self.vertical_spread < 0.0 {
            return Err(GameError::InvalidConfig("spacing and spread cannot be negative"));
        }
        Ok(())
    }

    /// Full request URL for the word list.
    pub fn word_list_url(&self) -> String {
        format!("{}?ml={}&max={}", self.endpoint, self.seed_term, self.max_words)
    }
}
