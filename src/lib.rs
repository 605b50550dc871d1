//! Word Drift core crate.
//!
//! Words drift across a full-window canvas and the player types them before they
//! reach the right edge. `start_game()` wires the game into the page; the
//! simulation itself (`game::session::Game` and friends) is plain Rust and runs
//! under native `cargo test`.

use wasm_bindgen::prelude::*;

pub mod config;
pub mod error;
pub mod game;

pub use config::GameConfig;
pub use error::GameError;
pub use game::difficulty::spawn_interval_for;
pub use game::session::{FrameOutcome, Game, GameSession, KeyOutcome, Phase};
pub use game::sim::{LiveWords, WordEntity, WordId};
pub use game::spawn::{SpawnHistory, SpawnOutcome, spawn_word};
pub use game::storage::{HighScore, KeyValueStore, MemoryStore};
pub use game::words::{FALLBACK_WORDS, LOADING_WORD, PoolState, WordPool};

// Optional small allocator for size (feature gated)
#[cfg(feature = "wee_alloc")]
#[global_allocator]
static ALLOC: wee_alloc::WeeAlloc = wee_alloc::WeeAlloc::INIT;

#[wasm_bindgen(start)]
pub fn wasm_start() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
    // A second init (e.g. hot reload) keeps the first logger.
    let _ = console_log::init_with_level(log::Level::Info);
}

/// Start the game with the default configuration.
#[wasm_bindgen]
pub fn start_game() -> Result<(), JsValue> {
    game::start_game_mode(GameConfig::default())?;
    Ok(())
}

/// Start the game with a JSON object overriding any `GameConfig` fields, e.g.
/// `{"seed_term": "ocean", "speed": 3}`.
#[wasm_bindgen]
pub fn start_game_with_config(json: &str) -> Result<(), JsValue> {
    let config = GameConfig::from_json(json)?;
    game::start_game_mode(config)?;
    Ok(())
}
