//! Hardle - CLI
//!
//! Count-only Wordle variant with deterministic, shareable puzzle seeds.

use anyhow::{Result, bail};
use clap::{Parser, Subcommand};
use hardle::{
    commands::{eval_guess, run_simple},
    core::Word,
    output::display::print_eval_result,
    seed::Seed,
    wordlists::{
        ALLOWED, ANSWERS, Dictionary,
        loader::{load_from_file, words_from_slice},
    },
};

#[derive(Parser)]
#[command(
    name = "hardle",
    about = "Count-only Wordle: ten guesses, feedback is just how many greens and yellows",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Puzzle seed: a number, any text, or 'random' (default: today's date)
    #[arg(short, long, global = true)]
    seed: Option<String>,

    /// Wordlist: 'all' (default), 'answers' (answers only), or path to an extra-guesses file
    #[arg(short = 'w', long, global = true, default_value = "all")]
    wordlist: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Plain CLI mode (same game without TUI)
    Simple,

    /// Score a guess against an answer and show the full breakdown
    Eval {
        /// The guessed word
        guess: String,

        /// The secret answer to score against
        answer: String,
    },
}

/// Load wordlists based on the -w flag
///
/// Returns (`answers`, `extra_allowed`). The answers list is always the
/// embedded one: the seed indexes into it positionally, so swapping it out
/// would silently break shared seeds.
fn load_wordlists(wordlist_mode: &str) -> Result<(Vec<Word>, Vec<Word>)> {
    let answers = words_from_slice(ANSWERS);

    let allowed = match wordlist_mode {
        "all" => words_from_slice(ALLOWED),
        "answers" => Vec::new(),
        path => load_from_file(path)?,
    };

    Ok((answers, allowed))
}

/// Resolve the --seed flag
fn resolve_seed(flag: Option<&str>) -> Seed {
    match flag {
        None => Seed::today(),
        Some("random") => Seed::random(),
        Some(value) => Seed::parse(value),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let (answers, allowed) = load_wordlists(&cli.wordlist)?;
    if answers.is_empty() {
        bail!("answers list has no valid entries; cannot start a puzzle");
    }
    let dictionary = Dictionary::new(&answers, &allowed);

    let seed = resolve_seed(cli.seed.as_deref());

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    match command {
        Commands::Play => run_play_command(seed, &answers, &dictionary),
        Commands::Simple => {
            run_simple(seed, &answers, &dictionary).map_err(|e| anyhow::anyhow!(e))
        }
        Commands::Eval { guess, answer } => {
            let result = eval_guess(&guess, &answer).map_err(|e| anyhow::anyhow!(e))?;
            print_eval_result(&result);
            Ok(())
        }
    }
}

fn run_play_command(seed: Seed, answers: &[Word], dictionary: &Dictionary) -> Result<()> {
    use hardle::interactive::{App, run_tui};

    let app = App::new(seed, answers, dictionary);
    run_tui(app)
}
