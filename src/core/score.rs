//! Guess evaluation
//!
//! Scores a guess against the secret answer with Wordle's duplicate-letter
//! rules. The per-position classification is computed in full; the game only
//! ever shows the player the aggregate green/yellow counts.

use super::Word;
use crate::WORD_LEN;
use rustc_hash::FxHashMap;

/// Classification of a single guess position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LetterScore {
    /// Right letter, right position (green)
    Correct,
    /// Letter occurs elsewhere in the answer (yellow)
    Present,
    /// Letter contributes no match at this position (grey)
    Absent,
}

/// Result of scoring one guess against the answer
///
/// Holds the per-position classification plus the aggregate counts derived
/// from it. The counts are what the game surfaces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Score {
    positions: [LetterScore; WORD_LEN],
    correct: usize,
    present: usize,
}

impl Score {
    /// Score `guess` against `answer`
    ///
    /// Two passes. The green pass marks exact matches and tallies every
    /// *unmatched* answer letter into a remaining-count pool. The yellow
    /// pass then walks the non-green guess positions left to right,
    /// consuming from the pool, so when a letter occurs more often in the
    /// guess than remains in the answer the leftmost occurrences win.
    ///
    /// The yellow pass must not start until the green pass has seen every
    /// position: a later green match owns its answer letter outright.
    ///
    /// # Examples
    /// ```
    /// use hardle::core::{Score, Word};
    ///
    /// let guess = Word::new("peels").unwrap();
    /// let answer = Word::new("sweet").unwrap();
    /// let score = Score::evaluate(&guess, &answer);
    ///
    /// // E matches at index 2; one more E and the S are misplaced
    /// assert_eq!(score.correct(), 1);
    /// assert_eq!(score.present(), 2);
    /// ```
    #[must_use]
    pub fn evaluate(guess: &Word, answer: &Word) -> Self {
        let mut positions = [LetterScore::Absent; WORD_LEN];
        let mut remaining: FxHashMap<u8, u8> = FxHashMap::default();

        let mut correct = 0;
        // Allow: Index needed to access guess[i], answer[i], and set positions[i]
        #[allow(clippy::needless_range_loop)]
        for i in 0..WORD_LEN {
            if guess.chars()[i] == answer.chars()[i] {
                positions[i] = LetterScore::Correct;
                correct += 1;
            } else {
                *remaining.entry(answer.chars()[i]).or_insert(0) += 1;
            }
        }

        let mut present = 0;
        // Allow: Index needed to access guess[i] and check/set positions[i]
        #[allow(clippy::needless_range_loop)]
        for i in 0..WORD_LEN {
            if positions[i] == LetterScore::Correct {
                continue;
            }
            let letter = guess.chars()[i];
            if let Some(count) = remaining.get_mut(&letter)
                && *count > 0
            {
                positions[i] = LetterScore::Present;
                present += 1;
                *count -= 1;
            }
        }

        Self {
            positions,
            correct,
            present,
        }
    }

    /// Number of green positions
    #[inline]
    #[must_use]
    pub const fn correct(&self) -> usize {
        self.correct
    }

    /// Number of yellow positions
    #[inline]
    #[must_use]
    pub const fn present(&self) -> usize {
        self.present
    }

    /// Number of grey positions
    #[inline]
    #[must_use]
    pub const fn absent(&self) -> usize {
        WORD_LEN - self.correct - self.present
    }

    /// A guess wins iff every position is green
    #[inline]
    #[must_use]
    pub const fn is_winning(&self) -> bool {
        self.correct == WORD_LEN
    }

    /// Per-position classification
    #[inline]
    #[must_use]
    pub const fn positions(&self) -> &[LetterScore; WORD_LEN] {
        &self.positions
    }
}
