//! TUI application state and logic

use crate::core::Word;
use crate::game::{Session, Status, SubmitError};
use crate::seed::Seed;
use crate::wordlists::Dictionary;
use crate::WORD_LEN;
use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind, KeyModifiers,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;

/// Application state
pub struct App<'a> {
    pub session: Session,
    pub answers: &'a [Word],
    pub dictionary: &'a Dictionary,
    pub input_mode: InputMode,
    pub input_buffer: String,
    pub seed_buffer: String,
    pub messages: Vec<Message>,
    pub should_quit: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputMode {
    /// Typing a guess
    Guess,
    /// Typed letters cycle that letter's mark
    MarkLetter,
    /// Typing a new seed
    SeedEntry,
    /// Terminal state reached; only meta keys work
    GameOver,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

impl<'a> App<'a> {
    #[must_use]
    pub fn new(seed: Seed, answers: &'a [Word], dictionary: &'a Dictionary) -> Self {
        let session = Session::new(seed, answers);

        let mut app = Self {
            session,
            answers,
            dictionary,
            input_mode: InputMode::Guess,
            input_buffer: String::new(),
            seed_buffer: String::new(),
            messages: Vec::new(),
            should_quit: false,
        };
        app.add_message("Type your guess and press Enter.", MessageStyle::Info);
        app.add_message(
            "Tab marks letters, Ctrl-S changes the seed.",
            MessageStyle::Info,
        );
        app
    }

    /// Append a letter to the in-progress guess
    pub fn push_letter(&mut self, c: char) {
        if self.input_buffer.len() < WORD_LEN && c.is_ascii_alphabetic() {
            self.input_buffer.push(c.to_ascii_lowercase());
        }
    }

    /// Remove the last letter of the in-progress guess
    pub fn pop_letter(&mut self) {
        self.input_buffer.pop();
    }

    /// Submit the in-progress guess
    pub fn submit_guess(&mut self) {
        let guess = self.input_buffer.clone();

        match self.session.submit(&guess, self.dictionary) {
            Ok(_) => {
                self.input_buffer.clear();
                match self.session.status() {
                    Status::Won => {
                        self.input_mode = InputMode::GameOver;
                        self.add_message("Correct! You win!", MessageStyle::Success);
                        self.add_message(
                            "Press 'n' for a random puzzle, 's' for a seed, 'q' to quit.",
                            MessageStyle::Info,
                        );
                    }
                    Status::Lost => {
                        self.input_mode = InputMode::GameOver;
                        let reveal = format!(
                            "Out of guesses. Answer: {}",
                            self.session.answer().text().to_uppercase()
                        );
                        self.add_message(&reveal, MessageStyle::Error);
                        self.add_message(
                            "Press 'n' for a random puzzle, 's' for a seed, 'q' to quit.",
                            MessageStyle::Info,
                        );
                    }
                    Status::InProgress => {}
                }
            }
            Err(SubmitError::InvalidWord(_)) => {
                self.add_message("Not enough letters", MessageStyle::Error);
            }
            Err(SubmitError::NotInWordList) => {
                self.add_message("Not in word list", MessageStyle::Error);
            }
            Err(SubmitError::GameOver) => {
                self.input_mode = InputMode::GameOver;
            }
        }
    }

    /// Cycle the mark of a letter (mark mode)
    pub fn cycle_mark(&mut self, c: char) {
        if !c.is_ascii_alphabetic() {
            return;
        }
        if self.session.cycle_mark(c as u8).is_none() {
            self.add_message(
                "Only letters from submitted guesses can be marked",
                MessageStyle::Error,
            );
        }
    }

    /// Apply the seed typed in seed-entry mode
    ///
    /// Blank input means today's puzzle.
    pub fn apply_seed_buffer(&mut self) {
        let seed = Seed::parse(&self.seed_buffer);
        self.apply_seed(seed);
    }

    /// Start a new puzzle from a seed
    pub fn apply_seed(&mut self, seed: Seed) {
        self.session = Session::new(seed, self.answers);
        self.input_buffer.clear();
        self.seed_buffer.clear();
        self.messages.clear();
        self.input_mode = InputMode::Guess;
        self.add_message("New seed applied. Good luck!", MessageStyle::Success);
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        // Keep only last 5 messages
        if self.messages.len() > 5 {
            self.messages.remove(0);
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui(app: App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {err}");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }

            // Ctrl-C always quits
            if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
                app.should_quit = true;
            } else {
                handle_key(&mut app, key.code, key.modifiers);
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

fn handle_key(app: &mut App, code: KeyCode, modifiers: KeyModifiers) {
    match app.input_mode {
        InputMode::Guess => match code {
            KeyCode::Char('s') if modifiers.contains(KeyModifiers::CONTROL) => {
                app.input_mode = InputMode::SeedEntry;
                app.add_message(
                    "Type a seed and press Enter (blank for today's)",
                    MessageStyle::Info,
                );
            }
            KeyCode::Char('r') if modifiers.contains(KeyModifiers::CONTROL) => {
                app.apply_seed(Seed::random());
            }
            KeyCode::Tab => {
                app.input_mode = InputMode::MarkLetter;
                app.add_message(
                    "Mark mode: letters cycle their mark, Esc returns",
                    MessageStyle::Info,
                );
            }
            KeyCode::Char(c) => {
                app.push_letter(c);
            }
            KeyCode::Backspace => {
                app.pop_letter();
            }
            KeyCode::Enter => {
                app.submit_guess();
            }
            _ => {}
        },
        InputMode::MarkLetter => match code {
            KeyCode::Esc | KeyCode::Tab => {
                app.input_mode = InputMode::Guess;
            }
            KeyCode::Char(c) => {
                app.cycle_mark(c);
            }
            _ => {}
        },
        InputMode::SeedEntry => match code {
            KeyCode::Esc => {
                app.seed_buffer.clear();
                app.input_mode = InputMode::Guess;
                app.add_message("Seed change cancelled", MessageStyle::Info);
            }
            KeyCode::Char(c) => {
                app.seed_buffer.push(c);
            }
            KeyCode::Backspace => {
                app.seed_buffer.pop();
            }
            KeyCode::Enter => {
                app.apply_seed_buffer();
            }
            _ => {}
        },
        InputMode::GameOver => match code {
            KeyCode::Char('q') => {
                app.should_quit = true;
            }
            KeyCode::Char('n') => {
                app.apply_seed(Seed::random());
            }
            KeyCode::Char('s') => {
                app.input_mode = InputMode::SeedEntry;
                app.add_message(
                    "Type a seed and press Enter (blank for today's)",
                    MessageStyle::Info,
                );
            }
            _ => {}
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::loader::words_from_slice;
    use crate::seed::select_answer;

    struct Fixture {
        answers: Vec<Word>,
        dictionary: Dictionary,
    }

    fn fixture() -> Fixture {
        let answers = words_from_slice(&["sweet", "allot", "world", "crane", "slate"]);
        let allowed = words_from_slice(&["peels", "lolly", "aisle", "arose"]);
        let dictionary = Dictionary::new(&answers, &allowed);
        Fixture {
            answers,
            dictionary,
        }
    }

    fn seed_for(target: &str, answers: &[Word]) -> Seed {
        (0u32..10_000)
            .map(Seed::Number)
            .find(|s| select_answer(s, answers).text() == target)
            .expect("some seed maps to every index")
    }

    #[test]
    fn typing_respects_word_len() {
        let fx = fixture();
        let mut app = App::new(Seed::Number(1), &fx.answers, &fx.dictionary);

        for c in "sweets".chars() {
            app.push_letter(c);
        }
        assert_eq!(app.input_buffer, "sweet"); // sixth letter dropped

        app.pop_letter();
        assert_eq!(app.input_buffer, "swee");
    }

    #[test]
    fn short_guess_leaves_input_editable() {
        let fx = fixture();
        let mut app = App::new(Seed::Number(1), &fx.answers, &fx.dictionary);

        app.push_letter('s');
        app.submit_guess();

        // Rejected, buffer untouched, still guessing
        assert_eq!(app.input_buffer, "s");
        assert_eq!(app.input_mode, InputMode::Guess);
        assert_eq!(app.session.row(), 0);
    }

    #[test]
    fn winning_enters_game_over() {
        let fx = fixture();
        let seed = seed_for("sweet", &fx.answers);
        let mut app = App::new(seed, &fx.answers, &fx.dictionary);

        for c in "sweet".chars() {
            app.push_letter(c);
        }
        app.submit_guess();

        assert_eq!(app.session.status(), Status::Won);
        assert_eq!(app.input_mode, InputMode::GameOver);
        assert!(app.input_buffer.is_empty());
    }

    #[test]
    fn mark_mode_gates_unguessed_letters() {
        let fx = fixture();
        let seed = seed_for("sweet", &fx.answers);
        let mut app = App::new(seed, &fx.answers, &fx.dictionary);

        for c in "peels".chars() {
            app.push_letter(c);
        }
        app.submit_guess();

        app.cycle_mark('p');
        assert_ne!(
            app.session.marks().mark(b'p'),
            crate::core::Mark::Unmarked
        );

        app.cycle_mark('z');
        assert_eq!(app.session.marks().mark(b'z'), crate::core::Mark::Unmarked);
    }

    #[test]
    fn applying_seed_resets_the_board() {
        let fx = fixture();
        let seed = seed_for("sweet", &fx.answers);
        let mut app = App::new(seed, &fx.answers, &fx.dictionary);

        for c in "peels".chars() {
            app.push_letter(c);
        }
        app.submit_guess();
        app.cycle_mark('p');

        app.seed_buffer = "shared-puzzle".to_string();
        app.apply_seed_buffer();

        assert_eq!(app.session.row(), 0);
        assert!(app.session.history().is_empty());
        assert_eq!(app.session.marks().mark(b'p'), crate::core::Mark::Unmarked);
        assert_eq!(app.input_mode, InputMode::Guess);
        assert_eq!(
            app.session.seed(),
            &Seed::Text("shared-puzzle".to_string())
        );
    }

    #[test]
    fn message_list_is_bounded() {
        let fx = fixture();
        let mut app = App::new(Seed::Number(1), &fx.answers, &fx.dictionary);

        for i in 0..12 {
            app.add_message(&format!("message {i}"), MessageStyle::Info);
        }
        assert_eq!(app.messages.len(), 5);
        assert_eq!(app.messages.last().unwrap().text, "message 11");
    }
}
