//! Word lists for Hardle
//!
//! Provides embedded word lists compiled into the binary, plus the
//! dictionary-membership set used to validate guesses. The answers list is
//! ordered: the seed derives a positional index into it.

mod embedded;
pub mod loader;

use crate::core::Word;
use rustc_hash::FxHashSet;

pub use embedded::{ALLOWED, ALLOWED_COUNT, ANSWERS, ANSWERS_COUNT};

/// Guess-validity set: allowed words plus every answer
///
/// Built once at startup; membership checks are how invalid guesses get
/// bounced before they cost an attempt.
#[derive(Debug, Clone)]
pub struct Dictionary {
    valid: FxHashSet<Word>,
}

impl Dictionary {
    /// Build the combined membership set from both lists
    #[must_use]
    pub fn new(answers: &[Word], allowed: &[Word]) -> Self {
        let valid = answers.iter().chain(allowed.iter()).cloned().collect();
        Self { valid }
    }

    /// Is this word a legal guess?
    #[must_use]
    pub fn contains(&self, word: &Word) -> bool {
        self.valid.contains(word)
    }

    /// Number of distinct legal guesses
    #[must_use]
    pub fn len(&self) -> usize {
        self.valid.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.valid.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use super::loader::words_from_slice;
    use crate::WORD_LEN;

    #[test]
    fn answers_count_matches_const() {
        assert_eq!(ANSWERS.len(), ANSWERS_COUNT);
    }

    #[test]
    fn allowed_count_matches_const() {
        assert_eq!(ALLOWED.len(), ALLOWED_COUNT);
    }

    #[test]
    fn answers_are_valid_words() {
        for &word in ANSWERS {
            assert_eq!(word.len(), WORD_LEN, "Word '{word}' is not {WORD_LEN} letters");
            assert!(
                word.chars().all(|c| c.is_ascii_lowercase()),
                "Word '{word}' contains non-lowercase chars"
            );
        }
    }

    #[test]
    fn allowed_are_valid_words() {
        for &word in ALLOWED {
            assert_eq!(word.len(), WORD_LEN, "Word '{word}' is not {WORD_LEN} letters");
            assert!(
                word.chars().all(|c| c.is_ascii_lowercase()),
                "Word '{word}' contains non-lowercase chars"
            );
        }
    }

    #[test]
    fn answers_never_repeat() {
        // The seed indexes positionally, so duplicates would make two
        // seeds collide on the same puzzle more often than intended
        let set: FxHashSet<&str> = ANSWERS.iter().copied().collect();
        assert_eq!(set.len(), ANSWERS.len());
    }

    #[test]
    fn dictionary_accepts_both_lists() {
        let answers = words_from_slice(&ANSWERS[..20]);
        let allowed = words_from_slice(&ALLOWED[..20]);
        let dict = Dictionary::new(&answers, &allowed);

        assert!(dict.contains(&answers[0]));
        assert!(dict.contains(&allowed[0]));
        assert_eq!(dict.len(), 40);
    }

    #[test]
    fn dictionary_rejects_outsiders() {
        let answers = words_from_slice(&["sweet"]);
        let allowed = words_from_slice(&["peels"]);
        let dict = Dictionary::new(&answers, &allowed);

        assert!(!dict.contains(&Word::new("qajaq").unwrap()));
    }
}
