// Keystroke matching against the leading (oldest) live word.

use super::sim::{LiveWords, WordId};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyMatch {
    /// Key did not match the leading word's next character, or there is no word.
    Ignored,
    /// One character stripped; `remaining` characters still to type.
    Typed { id: WordId, remaining: usize },
    /// Last character typed; the word has been removed from the live set.
    Completed { id: WordId },
}

/// Match `key` (a single logical key, e.g. `"a"` or `" "`) against the first
/// remaining character of the leading word. Case-sensitive; named keys such as
/// `"Shift"` never match. No penalty for misses.
pub fn match_key(key: &str, live: &mut LiveWords) -> KeyMatch {
    let Some(id) = live.leading() else {
        return KeyMatch::Ignored;
    };
    let mut key_chars = key.chars();
    let (Some(pressed), None) = (key_chars.next(), key_chars.next()) else {
        return KeyMatch::Ignored;
    };
    let Some(word) = live.get_mut(id) else {
        return KeyMatch::Ignored;
    };
    if !word.text.starts_with(pressed) {
        return KeyMatch::Ignored;
    }
    word.text.remove(0);
    if !word.text.is_empty() {
        return KeyMatch::Typed {
            id,
            remaining: word.text.chars().count(),
        };
    }
    live.remove(id);
    KeyMatch::Completed { id }
}
