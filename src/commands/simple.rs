//! Simple interactive CLI mode
//!
//! Text-based game loop without TUI

use crate::game::{Session, Status, SubmitError};
use crate::output::display::{print_guess_result, print_loss, print_marks, print_win};
use crate::seed::Seed;
use crate::wordlists::Dictionary;
use crate::core::{Word, WordError};
use crate::NUM_ROWS;
use colored::Colorize;
use std::io::{self, Write};

/// Run the plain CLI game
///
/// # Errors
///
/// Returns an error if reading user input fails.
pub fn run_simple(seed: Seed, answers: &[Word], dictionary: &Dictionary) -> Result<(), String> {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                 Hardle - count-only Wordle                   ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    println!("Guess the secret word in {NUM_ROWS} tries. After each guess you only");
    println!("learn how many letters are placed right (🟩) and how many occur");
    println!("elsewhere (🟨) - never which ones.\n");
    println!("Commands: 'mark <letter>' to cycle a letter note, 'marks' to list");
    println!("them, 'seed <value>' for a new puzzle, 'quit' to exit\n");

    let mut session = Session::new(seed, answers);
    announce_seed(&session);

    loop {
        let input = get_user_input(&format!(
            "Guess {}/{NUM_ROWS}",
            session.history().len() + 1
        ))?;
        let input = input.trim();
        let lowered = input.to_lowercase();

        match lowered.as_str() {
            "quit" | "q" | "exit" => {
                println!("\n👋 Thanks for playing!\n");
                return Ok(());
            }
            "marks" => {
                print_marks(session.marks());
                continue;
            }
            "" => continue,
            _ => {}
        }

        if let Some(letter) = lowered.strip_prefix("mark ") {
            cycle_mark(&mut session, letter.trim());
            continue;
        }

        if let Some(value) = input.strip_prefix("seed ") {
            session = Session::new(Seed::parse(value), answers);
            println!("\n🔄 New puzzle started!");
            announce_seed(&session);
            continue;
        }

        match session.submit(input, dictionary) {
            Ok(score) => {
                if let Some((word, _)) = session.history().last() {
                    print_guess_result(session.history().len(), word, &score);
                }

                match session.status() {
                    Status::Won => {
                        print_win(session.history().len());
                        if !play_again()? {
                            return Ok(());
                        }
                        session = Session::new(Seed::random(), answers);
                        announce_seed(&session);
                    }
                    Status::Lost => {
                        print_loss(session.answer());
                        if !play_again()? {
                            return Ok(());
                        }
                        session = Session::new(Seed::random(), answers);
                        announce_seed(&session);
                    }
                    Status::InProgress => {}
                }
            }
            Err(SubmitError::InvalidWord(WordError::InvalidLength(_))) => {
                println!("{}", "Not enough letters".yellow());
            }
            Err(SubmitError::InvalidWord(_)) => {
                println!("{}", "Letters only, please".yellow());
            }
            Err(SubmitError::NotInWordList) => {
                println!("{}", "Not in word list".yellow());
            }
            Err(SubmitError::GameOver) => {
                println!("{}", "The puzzle is over - start a new seed".yellow());
            }
        }
    }
}

fn announce_seed(session: &Session) {
    println!(
        "Puzzle seed: {} {}",
        session.seed().to_string().bright_cyan().bold(),
        "(share it to share this puzzle)".bright_black()
    );
    println!();
}

fn cycle_mark(session: &mut Session, letter: &str) {
    let Some(&byte) = letter.as_bytes().first() else {
        println!("{}", "Which letter?".yellow());
        return;
    };
    if letter.len() != 1 || !byte.is_ascii_alphabetic() {
        println!("{}", "Marks take a single letter, e.g. 'mark e'".yellow());
        return;
    }

    if session.cycle_mark(byte).is_some() {
        print_marks(session.marks());
    } else {
        println!(
            "{}",
            "Only letters from submitted guesses can be marked".yellow()
        );
    }
}

fn play_again() -> Result<bool, String> {
    Ok(matches!(
        get_user_input("Play a random puzzle? (yes/no)")?
            .to_lowercase()
            .as_str(),
        "yes" | "y"
    ))
}

/// Get user input with a prompt
fn get_user_input(prompt: &str) -> Result<String, String> {
    print!("{prompt}: ");
    io::stdout().flush().map_err(|e| e.to_string())?;

    let mut input = String::new();
    io::stdin()
        .read_line(&mut input)
        .map_err(|e| e.to_string())?;

    Ok(input.trim().to_string())
}
