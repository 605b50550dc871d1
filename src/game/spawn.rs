//! Spawn policy: pick a word that was not shown recently and a row that keeps clear
//! of the live words. Either search is capped; running out of attempts skips the
//! spawn for this tick without touching any state.

use std::collections::VecDeque;

use rand::Rng;

use super::sim::{LiveWords, WordId};
use super::words::WordPool;
use crate::config::GameConfig;

/// Fixed-capacity FIFO of recently spawned word texts.
#[derive(Debug)]
pub struct SpawnHistory {
    recent: VecDeque<String>,
    capacity: usize,
}

impl SpawnHistory {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            recent: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    pub fn contains(&self, word: &str) -> bool {
        self.recent.iter().any(|w| w == word)
    }

    /// Record `word`, evicting the oldest entry once full.
    pub fn record(&mut self, word: &str) {
        if self.recent.len() == self.capacity {
            self.recent.pop_front();
        }
        self.recent.push_back(word.to_string());
    }

    pub fn len(&self) -> usize {
        self.recent.len()
    }

    pub fn is_empty(&self) -> bool {
        self.recent.is_empty()
    }

    pub fn clear(&mut self) {
        self.recent.clear();
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.recent.iter().map(String::as_str)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum SpawnOutcome {
    Spawned { id: WordId, word: String, y: f64 },
    /// Every word draw hit the recent history.
    DuplicateExhausted { attempts: u32 },
    /// Every row draw landed too close to a live word.
    OverlapExhausted { attempts: u32 },
}

/// Try to introduce one new word. Live words and history change only on success.
pub fn spawn_word<R: Rng + ?Sized>(
    pool: &WordPool,
    history: &mut SpawnHistory,
    live: &mut LiveWords,
    canvas_height: f64,
    config: &GameConfig,
    rng: &mut R,
) -> SpawnOutcome {
    let attempts = config.max_spawn_attempts;

    let Some(word) = (0..attempts)
        .map(|_| pool.random_word(rng))
        .find(|w| !history.contains(w))
    else {
        log::warn!("Failed to find a non-duplicate word after {attempts} attempts");
        return SpawnOutcome::DuplicateExhausted { attempts };
    };
    let word = word.to_string();

    let center = canvas_height / 2.0;
    let spread = config.vertical_spread;
    let Some(y) = (0..attempts)
        .map(|_| center + row_offset(rng, spread))
        .find(|&y| !live.overlaps(y, config.min_vertical_spacing))
    else {
        log::debug!("No free row for '{word}' after {attempts} attempts");
        return SpawnOutcome::OverlapExhausted { attempts };
    };

    let id = live.spawn(word.as_str(), y);
    history.record(&word);
    log::debug!("Spawned {id} '{word}' at y={y:.1}");
    SpawnOutcome::Spawned { id, word, y }
}

fn row_offset<R: Rng + ?Sized>(rng: &mut R, spread: f64) -> f64 {
    if spread > 0.0 {
        rng.gen_range(-spread..spread)
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn ready_pool(words: &[&str]) -> WordPool {
        let mut pool = WordPool::new();
        pool.begin_loading(0);
        pool.fill(0, words.iter().map(|w| w.to_string()).collect());
        pool
    }

    #[test]
    fn history_evicts_oldest_beyond_capacity() {
        let mut history = SpawnHistory::with_capacity(20);
        for i in 1..=21 {
            history.record(&format!("w{i}"));
        }
        assert_eq!(history.len(), 20);
        assert!(!history.contains("w1"));
        assert!(history.contains("w2"));
        assert!(history.contains("w21"));
    }

    #[test]
    fn spawn_records_history_and_starts_at_left_edge() {
        let config = GameConfig::default();
        let pool = ready_pool(&["cat"]);
        let mut history = SpawnHistory::with_capacity(config.history_capacity);
        let mut live = LiveWords::new();
        let mut rng = StdRng::seed_from_u64(3);

        let outcome = spawn_word(&pool, &mut history, &mut live, 800.0, &config, &mut rng);
        let SpawnOutcome::Spawned { id, word, y } = outcome else {
            panic!("expected a spawn, got {outcome:?}");
        };
        assert_eq!(word, "cat");
        assert!((200.0..600.0).contains(&y));
        let entity = live.get(id).unwrap();
        assert_eq!(entity.x, 0.0);
        assert_eq!(entity.text, "cat");
        assert!(history.contains("cat"));
    }

    #[test]
    fn all_duplicates_abort_without_side_effects() {
        let config = GameConfig::default();
        let pool = ready_pool(&["cat", "dog"]);
        let mut history = SpawnHistory::with_capacity(config.history_capacity);
        history.record("cat");
        history.record("dog");
        let mut live = LiveWords::new();
        let mut rng = StdRng::seed_from_u64(11);

        let outcome = spawn_word(&pool, &mut history, &mut live, 800.0, &config, &mut rng);
        assert_eq!(outcome, SpawnOutcome::DuplicateExhausted { attempts: 10 });
        assert!(live.is_empty());
        assert_eq!(history.iter().collect::<Vec<_>>(), vec!["cat", "dog"]);
    }

    #[test]
    fn crowded_rows_abort_without_side_effects() {
        let config = GameConfig::default();
        let pool = ready_pool(&["cat"]);
        let mut history = SpawnHistory::with_capacity(config.history_capacity);
        let mut live = LiveWords::new();
        // Rows every 50px across [center - 200, center + 200]: any new row is < 50 from one.
        for k in 0..=8 {
            live.spawn("blocker", 200.0 + 50.0 * k as f64);
        }
        let before = live.len();
        let mut rng = StdRng::seed_from_u64(5);

        let outcome = spawn_word(&pool, &mut history, &mut live, 800.0, &config, &mut rng);
        assert_eq!(outcome, SpawnOutcome::OverlapExhausted { attempts: 10 });
        assert_eq!(live.len(), before);
        assert!(history.is_empty());
    }

    #[test]
    fn empty_pool_spawns_loading_word() {
        let config = GameConfig::default();
        let pool = WordPool::new();
        let mut history = SpawnHistory::with_capacity(config.history_capacity);
        let mut live = LiveWords::new();
        let mut rng = StdRng::seed_from_u64(9);

        let first = spawn_word(&pool, &mut history, &mut live, 800.0, &config, &mut rng);
        assert!(matches!(first, SpawnOutcome::Spawned { ref word, .. } if word == "loading"));
        // The only candidate is now recent, so the next attempt is a duplicate.
        let second = spawn_word(&pool, &mut history, &mut live, 800.0, &config, &mut rng);
        assert!(matches!(second, SpawnOutcome::DuplicateExhausted { .. }));
    }

    proptest! {
        #[test]
        fn history_never_exceeds_capacity(seed in any::<u64>(), spawns in 1usize..80) {
            let config = GameConfig::default();
            let words: Vec<String> = (0..60).map(|i| format!("word{i}")).collect();
            let mut pool = WordPool::new();
            pool.begin_loading(1);
            pool.fill(1, words);
            let mut history = SpawnHistory::with_capacity(config.history_capacity);
            let mut live = LiveWords::new();
            let mut rng = StdRng::seed_from_u64(seed);
            for _ in 0..spawns {
                spawn_word(&pool, &mut history, &mut live, 800.0, &config, &mut rng);
                // Keep the field sparse so placement rarely fails.
                if live.len() > 4 {
                    let oldest = live.leading().unwrap();
                    live.remove(oldest);
                }
                prop_assert!(history.len() <= config.history_capacity);
            }
        }

        #[test]
        fn spawned_rows_keep_clear_of_live_words(seed in any::<u64>()) {
            let config = GameConfig::default();
            let words: Vec<String> = (0..30).map(|i| format!("word{i}")).collect();
            let mut pool = WordPool::new();
            pool.begin_loading(1);
            pool.fill(1, words);
            let mut history = SpawnHistory::with_capacity(config.history_capacity);
            let mut live = LiveWords::new();
            let mut rng = StdRng::seed_from_u64(seed);
            for _ in 0..12 {
                let others: Vec<f64> = live.iter().map(|w| w.y).collect();
                if let SpawnOutcome::Spawned { y, .. } =
                    spawn_word(&pool, &mut history, &mut live, 800.0, &config, &mut rng)
                {
                    for other in others {
                        prop_assert!((other - y).abs() >= config.min_vertical_spacing);
                    }
                }
            }
        }
    }
}
