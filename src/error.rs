//! Error type shared by the browser glue and the core.
//!
//! Nothing in here is fatal to the game loop: word fetch and storage failures are
//! logged and degraded by their callers. Only setup (`start_game`) hands an error
//! back to JS.

use thiserror::Error;
use wasm_bindgen::JsValue;

#[derive(Error, Debug)]
pub enum GameError {
    #[error("no global window")]
    NoWindow,
    #[error("no document on window")]
    NoDocument,
    #[error("DOM operation failed: {0}")]
    Dom(String),
    #[error("word fetch failed: {0}")]
    Fetch(String),
    #[error("word fetch returned HTTP {0}")]
    HttpStatus(u16),
    #[error("could not parse word list")]
    Parse(#[source] serde_json::Error),
    #[error("storage unavailable: {0}")]
    Storage(String),
    #[error("invalid config: {0}")]
    Config(#[from] serde_json::Error),
    #[error("invalid config value: {0}")]
    InvalidConfig(&'static str),
}

impl GameError {
    /// Wrap a JS exception (or anything thrown across the boundary) as a DOM error.
    pub(crate) fn dom(err: JsValue) -> Self {
        GameError::Dom(js_message(&err))
    }
}

/// Best-effort textual form of a thrown JS value.
pub(crate) fn js_message(err: &JsValue) -> String {
    err.as_string().unwrap_or_else(|| format!("{err:?}"))
}

impl From<GameError> for JsValue {
    fn from(err: GameError) -> Self {
        JsValue::from_str(&err.to_string())
    }
}
