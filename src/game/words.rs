//! Word vocabulary: the per-session pool, its loading state and the fallback list.
//!
//! A session's pool starts `Loading` (tagged with the session epoch) and turns
//! `Ready` once the fetch for that same epoch resolves. Until then every draw yields
//! [`LOADING_WORD`].

use rand::Rng;
use rand::seq::SliceRandom;
use serde::Deserialize;

use crate::error::GameError;

/// Vocabulary used when the word list cannot be fetched or parsed.
pub const FALLBACK_WORDS: [&str; 3] = ["error", "loading", "retry"];

/// Word drawn while the pool has nothing to offer yet.
pub const LOADING_WORD: &str = "loading";

#[derive(Debug, Clone, PartialEq)]
pub enum PoolState {
    /// No session has asked for words yet.
    Empty,
    /// A fetch for session `epoch` is outstanding.
    Loading { epoch: u64 },
    Ready { epoch: u64, words: Vec<String> },
}

#[derive(Debug)]
pub struct WordPool {
    state: PoolState,
}

impl Default for WordPool {
    fn default() -> Self {
        Self::new()
    }
}

impl WordPool {
    pub fn new() -> Self {
        Self { state: PoolState::Empty }
    }

    pub fn state(&self) -> &PoolState {
        &self.state
    }

    /// Drop the current vocabulary and wait for the fetch belonging to `epoch`.
    pub fn begin_loading(&mut self, epoch: u64) {
        self.state = PoolState::Loading { epoch };
    }

    /// Install `words` if they belong to the session currently loading.
    /// Returns false (and leaves the pool untouched) for stale epochs.
    pub fn fill(&mut self, epoch: u64, words: Vec<String>) -> bool {
        match self.state {
            PoolState::Loading { epoch: current } if current == epoch => {
                self.state = PoolState::Ready { epoch, words };
                true
            }
            _ => false,
        }
    }

    pub fn words(&self) -> &[String] {
        match &self.state {
            PoolState::Ready { words, .. } => words.as_slice(),
            _ => &[],
        }
    }

    /// Uniformly random word from the pool, or [`LOADING_WORD`] when there is none.
    pub fn random_word<R: Rng + ?Sized>(&self, rng: &mut R) -> &str {
        self.words()
            .choose(rng)
            .map(String::as_str)
            .unwrap_or(LOADING_WORD)
    }
}

/// Turn a fetch result into the vocabulary for a session. Never fails: errors and
/// empty lists degrade to [`FALLBACK_WORDS`]. Fetched words are shuffled.
pub fn resolve_words<R: Rng + ?Sized>(
    fetched: Result<Vec<String>, GameError>,
    rng: &mut R,
) -> Vec<String> {
    match fetched {
        Ok(mut words) if !words.is_empty() => {
            words.shuffle(rng);
            log::info!("Fetched {} words", words.len());
            words
        }
        Ok(_) => {
            log::warn!("Word list was empty, using fallback words");
            fallback_words()
        }
        Err(err) => {
            log::warn!("Error fetching words: {err}; using fallback words");
            fallback_words()
        }
    }
}

pub fn fallback_words() -> Vec<String> {
    FALLBACK_WORDS.iter().map(|w| w.to_string()).collect()
}

#[derive(Deserialize)]
struct LexicalEntry {
    word: String,
}

/// Parse a word-association response: a JSON array of objects with a `word` field.
pub fn parse_word_list(body: &str) -> Result<Vec<String>, GameError> {
    let entries: Vec<LexicalEntry> = serde_json::from_str(body).map_err(GameError::Parse)?;
    Ok(entries.into_iter().map(|e| e.word).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn words(list: &[&str]) -> Vec<String> {
        list.iter().map(|w| w.to_string()).collect()
    }

    #[test]
    fn loading_word_until_ready() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut pool = WordPool::new();
        assert_eq!(pool.random_word(&mut rng), LOADING_WORD);
        pool.begin_loading(1);
        assert_eq!(pool.random_word(&mut rng), LOADING_WORD);
        assert!(pool.fill(1, words(&["cat"])));
        assert_eq!(pool.random_word(&mut rng), "cat");
    }

    #[test]
    fn stale_epoch_is_discarded() {
        let mut pool = WordPool::new();
        pool.begin_loading(1);
        pool.begin_loading(2);
        assert!(!pool.fill(1, words(&["stale"])));
        assert_eq!(pool.state(), &PoolState::Loading { epoch: 2 });
        assert!(pool.fill(2, words(&["fresh"])));
        // A second result for an epoch that is already ready is also ignored.
        assert!(!pool.fill(2, words(&["again"])));
        assert_eq!(pool.words(), &words(&["fresh"])[..]);
    }

    #[test]
    fn fill_without_loading_is_rejected() {
        let mut pool = WordPool::new();
        assert!(!pool.fill(0, words(&["x"])));
        assert_eq!(pool.state(), &PoolState::Empty);
    }

    #[test]
    fn failed_fetch_falls_back() {
        let mut rng = StdRng::seed_from_u64(7);
        let resolved = resolve_words(Err(GameError::HttpStatus(500)), &mut rng);
        assert_eq!(resolved, fallback_words());

        let mut pool = WordPool::new();
        pool.begin_loading(3);
        pool.fill(3, resolved);
        for _ in 0..200 {
            let w = pool.random_word(&mut rng);
            assert!(FALLBACK_WORDS.contains(&w), "unexpected word {w}");
        }
    }

    #[test]
    fn empty_fetch_falls_back() {
        let mut rng = StdRng::seed_from_u64(7);
        assert_eq!(resolve_words(Ok(Vec::new()), &mut rng), fallback_words());
    }

    #[test]
    fn fetched_words_are_permuted_not_changed() {
        let mut rng = StdRng::seed_from_u64(42);
        let original: Vec<String> = (0..50).map(|i| format!("w{i}")).collect();
        let mut shuffled = resolve_words(Ok(original.clone()), &mut rng);
        assert_eq!(shuffled.len(), original.len());
        shuffled.sort();
        let mut sorted = original;
        sorted.sort();
        assert_eq!(shuffled, sorted);
    }

    #[test]
    fn parses_lexical_response() {
        let body = r#"[{"word":"living","score":4000,"tags":["n"]},{"word":"way of life","score":3000}]"#;
        assert_eq!(parse_word_list(body).unwrap(), words(&["living", "way of life"]));
    }

    #[test]
    fn malformed_response_is_parse_error() {
        assert!(matches!(parse_word_list("<html>"), Err(GameError::Parse(_))));
        assert!(matches!(parse_word_list(r#"[{"score":1}]"#), Err(GameError::Parse(_))));
    }
}
