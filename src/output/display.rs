//! Display functions for command results

use super::formatters::{alphabet_line, count_badges, positions_emoji};
use crate::commands::EvalResult;
use crate::core::{LetterMarks, Score, Word};
use crate::NUM_ROWS;
use colored::Colorize;

/// Print the count-only result of one submitted guess
pub fn print_guess_result(attempt: usize, word: &Word, score: &Score) {
    println!(
        "  {attempt:>2}/{NUM_ROWS}  {}  {}",
        word.text().to_uppercase().bright_white().bold(),
        count_badges(score)
    );
}

/// Print the current letter marks
pub fn print_marks(marks: &LetterMarks) {
    println!("  {}", alphabet_line(marks).bright_black());
}

/// Celebration banner for a win
pub fn print_win(attempts: usize) {
    println!("\n{}", "═".repeat(60).bright_cyan());
    println!(
        "{}",
        "          🎉  C O R R E C T !  🎉          "
            .bright_green()
            .bold()
    );
    println!("{}", "═".repeat(60).bright_cyan());

    let verdict = match attempts {
        1 => "First try. Unbelievable!",
        2..=4 => "Outstanding deduction!",
        5..=7 => "Well played!",
        _ => "Got there in the end!",
    };

    println!("\n  {}", verdict.bright_yellow().bold());
    println!(
        "  Solved in {} {}\n",
        attempts.to_string().bright_cyan().bold(),
        if attempts == 1 { "guess" } else { "guesses" }
    );
}

/// Loss banner, revealing the answer
pub fn print_loss(answer: &Word) {
    println!("\n{}", "═".repeat(60).bright_cyan());
    println!(
        "{}",
        "            Out of guesses            ".bright_red().bold()
    );
    println!("{}", "═".repeat(60).bright_cyan());
    println!(
        "\n  The answer was {}\n",
        answer.text().to_uppercase().bright_yellow().bold()
    );
}

/// Print the full breakdown of one scored guess
pub fn print_eval_result(result: &EvalResult) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Guess {} against {}",
        result.guess.text().to_uppercase().bright_white().bold(),
        result.answer.text().to_uppercase().bright_yellow().bold()
    );
    println!("{}", "─".repeat(60).cyan());

    println!("\n  Positions: {}", positions_emoji(&result.score));
    println!("  Counts:    {}", count_badges(&result.score));
    println!(
        "  Totals:    {} green, {} yellow, {} grey",
        result.score.correct(),
        result.score.present(),
        result.score.absent()
    );

    if result.score.is_winning() {
        println!("\n  {}", "Winning guess!".bright_green().bold());
    }
    println!();
}
