//! Formatting utilities for terminal output

use crate::core::{LetterMarks, LetterScore, Mark, Score};

/// Format a score as the two count badges the game shows
///
/// Count-only feedback: how many greens, how many yellows, never where.
#[must_use]
pub fn count_badges(score: &Score) -> String {
    format!("🟩{} 🟨{}", score.correct(), score.present())
}

/// Format the per-position classification as an emoji row
///
/// Only the `eval` debugging command shows this; the game itself never
/// reveals positions.
#[must_use]
pub fn positions_emoji(score: &Score) -> String {
    score
        .positions()
        .iter()
        .map(|p| match p {
            LetterScore::Correct => '🟩',
            LetterScore::Present => '🟨',
            LetterScore::Absent => '⬜',
        })
        .collect()
}

/// Glyph for a player mark
#[must_use]
pub const fn mark_glyph(mark: Mark) -> char {
    match mark {
        Mark::Unmarked => '·',
        Mark::MarkedAbsent => '⬛',
        Mark::MarkedCorrect => '🟩',
        Mark::MarkedPresent => '🟨',
    }
}

/// One line of the alphabet with each letter's current mark
#[must_use]
pub fn alphabet_line(marks: &LetterMarks) -> String {
    let mut line = String::with_capacity(26 * 4);
    for letter in b'a'..=b'z' {
        if letter > b'a' {
            line.push(' ');
        }
        line.push(letter.to_ascii_uppercase() as char);
        line.push(mark_glyph(marks.mark(letter)));
    }
    line
}
