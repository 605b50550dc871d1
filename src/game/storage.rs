//! High score persistence over a string key-value store.
//!
//! In the browser the store is `window.localStorage`; tests use [`MemoryStore`].
//! A missing, unreadable or garbled value reads as 0.

use std::collections::HashMap;

use crate::error::{GameError, js_message};

pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str) -> Result<(), GameError>;
}

/// In-process store.
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), GameError> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// `window.localStorage`, if the browser grants it (it may not, e.g. in private mode).
pub struct LocalStore {
    storage: Option<web_sys::Storage>,
}

impl LocalStore {
    pub fn open() -> Self {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();
        if storage.is_none() {
            log::warn!("Local storage unavailable, high score will not persist");
        }
        Self { storage }
    }
}

impl KeyValueStore for LocalStore {
    fn get(&self, key: &str) -> Option<String> {
        self.storage.as_ref()?.get_item(key).ok().flatten()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), GameError> {
        let storage = self
            .storage
            .as_ref()
            .ok_or_else(|| GameError::Storage("local storage unavailable".to_string()))?;
        storage
            .set_item(key, value)
            .map_err(|e| GameError::Storage(js_message(&e)))
    }
}

/// Best score seen across sessions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HighScore {
    best: u32,
    key: String,
}

impl HighScore {
    pub fn load(store: &dyn KeyValueStore, key: &str) -> Self {
        let best = store.get(key).map(|raw| parse_score(&raw)).unwrap_or(0);
        log::info!("Loaded high score {best}");
        Self {
            best,
            key: key.to_string(),
        }
    }

    pub fn best(&self) -> u32 {
        self.best
    }

    /// Raise the high score to `score` if it beats it and persist the new value.
    /// Returns true when the record was broken. A failed write keeps the in-memory
    /// record and is only logged.
    pub fn submit(&mut self, score: u32, store: &mut dyn KeyValueStore) -> bool {
        if score <= self.best {
            return false;
        }
        self.best = score;
        if let Err(err) = store.set(&self.key, &score.to_string()) {
            log::warn!("Could not save high score {score}: {err}");
        }
        true
    }
}

/// Leading base-10 digits of `raw` (after whitespace); anything else is 0.
fn parse_score(raw: &str) -> u32 {
    let trimmed = raw.trim_start();
    let digits = trimmed
        .char_indices()
        .find(|(_, c)| !c.is_ascii_digit())
        .map(|(i, _)| &trimmed[..i])
        .unwrap_or(trimmed);
    digits.parse().unwrap_or(0)
}
