//! Live word entities and the per-frame position update.

use std::fmt;

/// Identity handed out at spawn time. Ids grow monotonically within a session, so
/// the smallest live id is always the oldest word.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct WordId(pub u64);

impl fmt::Display for WordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A word drifting across the canvas.
#[derive(Debug, Clone, PartialEq)]
pub struct WordEntity {
    pub id: WordId,
    /// Characters still to be typed.
    pub text: String,
    pub x: f64,
    pub y: f64,
}

/// Live words in spawn order (oldest first).
#[derive(Debug, Default)]
pub struct LiveWords {
    words: Vec<WordEntity>,
    next_id: u64,
}

impl LiveWords {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &WordEntity> {
        self.words.iter()
    }

    /// Create a word at the left edge and return its id.
    pub fn spawn(&mut self, text: impl Into<String>, y: f64) -> WordId {
        let id = WordId(self.next_id);
        self.next_id += 1;
        self.words.push(WordEntity {
            id,
            text: text.into(),
            x: 0.0,
            y,
        });
        id
    }

    /// True if some live word sits closer than `spacing` vertically to `y`.
    pub fn overlaps(&self, y: f64, spacing: f64) -> bool {
        self.words.iter().any(|w| (w.y - y).abs() < spacing)
    }

    /// Id of the oldest live word, the only one keystrokes are matched against.
    pub fn leading(&self) -> Option<WordId> {
        self.words.iter().map(|w| w.id).min()
    }

    pub fn get(&self, id: WordId) -> Option<&WordEntity> {
        self.words.iter().find(|w| w.id == id)
    }

    pub fn get_mut(&mut self, id: WordId) -> Option<&mut WordEntity> {
        self.words.iter_mut().find(|w| w.id == id)
    }

    pub fn remove(&mut self, id: WordId) -> Option<WordEntity> {
        let idx = self.words.iter().position(|w| w.id == id)?;
        Some(self.words.remove(idx))
    }

    /// Drop every word. Ids keep counting so handles from before never alias new words.
    pub fn clear(&mut self) {
        self.words.clear();
    }

    /// Move every word right by `speed` and report whether any is now past `width`.
    /// All words move even when one crosses, and a crossing is reported once.
    pub fn advance(&mut self, speed: f64, width: f64) -> bool {
        let mut crossed = false;
        for w in &mut self.words {
            w.x += speed;
            if w.x > width {
                crossed = true;
            }
        }
        crossed
    }
}
