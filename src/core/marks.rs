//! Player letter annotations
//!
//! Because feedback is count-only, players reason about letters across
//! several guesses at once. The mark tracker is their notebook: a manual
//! per-letter annotation cycled by repeated trigger, shown on the board and
//! keyboard but never consulted by scoring.

use rustc_hash::FxHashMap;

/// Manual annotation state for one letter
///
/// Cycles unmarked -> absent -> correct -> present -> unmarked.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Mark {
    #[default]
    Unmarked,
    MarkedAbsent,
    MarkedCorrect,
    MarkedPresent,
}

impl Mark {
    /// Advance one step along the fixed cycle
    #[must_use]
    pub const fn advance(self) -> Self {
        match self {
            Self::Unmarked => Self::MarkedAbsent,
            Self::MarkedAbsent => Self::MarkedCorrect,
            Self::MarkedCorrect => Self::MarkedPresent,
            Self::MarkedPresent => Self::Unmarked,
        }
    }
}

/// Per-letter mark state for a whole puzzle
///
/// Letters never touched read as [`Mark::Unmarked`]. Keys are lowercase
/// ASCII letters.
#[derive(Debug, Clone, Default)]
pub struct LetterMarks {
    marks: FxHashMap<u8, Mark>,
}

impl LetterMarks {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current mark for a letter (case-insensitive)
    #[must_use]
    pub fn mark(&self, letter: u8) -> Mark {
        self.marks
            .get(&letter.to_ascii_lowercase())
            .copied()
            .unwrap_or_default()
    }

    /// Cycle a letter's mark one step and return the new mark
    ///
    /// Safe for any letter; restricting marking to letters that already
    /// appear in a submitted guess is the caller's concern.
    pub fn cycle(&mut self, letter: u8) -> Mark {
        let key = letter.to_ascii_lowercase();
        let next = self.mark(key).advance();
        self.marks.insert(key, next);
        next
    }

    /// Revert every letter to unmarked
    ///
    /// Invoked when a new puzzle begins, never by the tracker itself.
    pub fn reset(&mut self) {
        self.marks.clear();
    }
}
