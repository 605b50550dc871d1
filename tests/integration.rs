// Integration tests (native) for the `word-drift` crate.
// These tests avoid wasm-specific functionality and exercise pure Rust logic so
// they can run under `cargo test` on the host.

use word_drift::{FALLBACK_WORDS, GameConfig, LOADING_WORD, spawn_interval_for};

// Default configuration reproduces the classic tuning.
#[test]
fn default_config_is_classic() {
    let c = GameConfig::default();
    assert_eq!(c.speed, 2.0);
    assert_eq!(c.min_vertical_spacing, 50.0);
    assert_eq!(c.vertical_spread, 200.0);
    assert_eq!(c.max_words, 50);
}

// Fallback vocabulary is exactly the three documented words.
#[test]
fn fallback_vocabulary() {
    assert_eq!(FALLBACK_WORDS, ["error", "loading", "retry"]);
    assert_eq!(LOADING_WORD, "loading");
}

#[test]
fn difficulty_curve_is_exported() {
    assert_eq!(spawn_interval_for(0), 3000.0);
    assert_eq!(spawn_interval_for(35), 1000.0);
}
