//! Guess scoring command
//!
//! Scores one guess against one answer and exposes the full breakdown,
//! including the per-position classification the game normally hides.

use crate::core::{Score, Word};

/// Result of scoring a guess against an answer
pub struct EvalResult {
    pub guess: Word,
    pub answer: Word,
    pub score: Score,
}

/// Score `guess` against `answer`
///
/// # Errors
///
/// Returns an error if either word is malformed (wrong length or
/// non-letter characters). Dictionary membership is deliberately not
/// checked here; this is a debugging aid.
pub fn eval_guess(guess: &str, answer: &str) -> Result<EvalResult, String> {
    let guess = Word::new(guess).map_err(|e| format!("Invalid guess: {e}"))?;
    let answer = Word::new(answer).map_err(|e| format!("Invalid answer: {e}"))?;

    let score = Score::evaluate(&guess, &answer);

    Ok(EvalResult {
        guess,
        answer,
        score,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::WORD_LEN;

    #[test]
    fn eval_scores_the_pair() {
        let result = eval_guess("peels", "sweet").unwrap();
        assert_eq!(result.score.correct(), 1);
        assert_eq!(result.score.present(), 2);
        assert_eq!(result.guess.text(), "peels");
        assert_eq!(result.answer.text(), "sweet");
    }

    #[test]
    fn eval_detects_win() {
        let result = eval_guess("slate", "slate").unwrap();
        assert_eq!(result.score.correct(), WORD_LEN);
        assert!(result.score.is_winning());
    }

    #[test]
    fn eval_rejects_malformed_input() {
        assert!(eval_guess("abc", "sweet").is_err());
        assert!(eval_guess("sweet", "toolong").is_err());
        assert!(eval_guess("sw33t", "sweet").is_err());
    }

    #[test]
    fn eval_skips_dictionary_check() {
        // Any well-formed letters work; this command scores, not validates
        assert!(eval_guess("zzzzz", "sweet").is_ok());
    }
}
