//! TUI rendering with ratatui
//!
//! The board and keyboard views for the game.

use super::app::{App, InputMode, MessageStyle};
use crate::core::Mark;
use crate::game::Status;
use crate::{NUM_ROWS, WORD_LEN};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, Paragraph},
};

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),                 // Header
            Constraint::Min(NUM_ROWS as u16 + 2),  // Main content
            Constraint::Length(3),                 // Input area
            Constraint::Length(3),                 // Status bar
        ])
        .split(f.area());

    render_header(f, app, chunks[0]);

    // Main content area - split horizontally
    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(55), // Board
            Constraint::Percentage(45), // Keyboard + messages
        ])
        .split(chunks[1]);

    render_board(f, app, main_chunks[0]);
    render_side_panel(f, app, main_chunks[1]);

    render_input(f, app, chunks[2]);
    render_status(f, app, chunks[3]);
}

fn render_header(f: &mut Frame, app: &App, area: Rect) {
    let header = Paragraph::new(format!("HARDLE  •  seed: {}", app.session.seed()))
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

fn mark_style(mark: Mark) -> Style {
    match mark {
        Mark::Unmarked => Style::default().fg(Color::White),
        Mark::MarkedAbsent => Style::default().fg(Color::DarkGray),
        Mark::MarkedCorrect => Style::default()
            .fg(Color::Green)
            .add_modifier(Modifier::BOLD),
        Mark::MarkedPresent => Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
    }
}

fn render_board(f: &mut Frame, app: &App, area: Rect) {
    let mut lines: Vec<Line> = Vec::with_capacity(NUM_ROWS);
    let history = app.session.history();
    let marks = app.session.marks();

    for row in 0..NUM_ROWS {
        let line = if let Some((word, score)) = history.get(row) {
            // Submitted row: letters tinted by the player's marks, then
            // the green/yellow count squares
            let mut spans: Vec<Span> = Vec::with_capacity(WORD_LEN + 3);
            for &letter in word.chars() {
                spans.push(Span::styled(
                    format!(" {} ", letter.to_ascii_uppercase() as char),
                    mark_style(marks.mark(letter)),
                ));
            }
            spans.push(Span::raw("  "));
            spans.push(Span::styled(
                format!(" {} ", score.correct()),
                Style::default().bg(Color::Green).fg(Color::Black),
            ));
            spans.push(Span::raw(" "));
            spans.push(Span::styled(
                format!(" {} ", score.present()),
                Style::default().bg(Color::Yellow).fg(Color::Black),
            ));
            Line::from(spans)
        } else if row == history.len() && !app.session.is_over() {
            // Active row: typed letters plus blanks
            let mut spans: Vec<Span> = Vec::with_capacity(WORD_LEN);
            let typed: Vec<char> = app.input_buffer.chars().collect();
            for col in 0..WORD_LEN {
                if let Some(&c) = typed.get(col) {
                    spans.push(Span::styled(
                        format!(" {} ", c.to_ascii_uppercase()),
                        Style::default()
                            .fg(Color::White)
                            .add_modifier(Modifier::BOLD),
                    ));
                } else {
                    spans.push(Span::styled(" _ ", Style::default().fg(Color::DarkGray)));
                }
            }
            Line::from(spans)
        } else {
            Line::from(Span::styled(
                " · ".repeat(WORD_LEN),
                Style::default().fg(Color::DarkGray),
            ))
        };
        lines.push(line);
    }

    let board = Paragraph::new(lines).block(
        Block::default()
            .title(" Board ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );

    f.render_widget(board, area);
}

fn render_side_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(5), // Keyboard
            Constraint::Min(3),    // Messages
        ])
        .split(area);

    render_keyboard(f, app, chunks[0]);
    render_messages(f, app, chunks[1]);
}

fn render_keyboard(f: &mut Frame, app: &App, area: Rect) {
    let marks = app.session.marks();

    let rows = ["QWERTYUIOP", "ASDFGHJKL", "ZXCVBNM"];
    let lines: Vec<Line> = rows
        .iter()
        .enumerate()
        .map(|(i, row)| {
            let mut spans: Vec<Span> = vec![Span::raw(" ".repeat(i))];
            for ch in row.chars() {
                let letter = ch.to_ascii_lowercase() as u8;
                let style = if app.session.guessed_letter(letter) {
                    mark_style(marks.mark(letter))
                } else {
                    // Not seen in any guess yet
                    Style::default().fg(Color::Gray)
                };
                spans.push(Span::styled(format!("{ch} "), style));
            }
            Line::from(spans)
        })
        .collect();

    let keyboard = Paragraph::new(lines).block(
        Block::default()
            .title(" Keyboard ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );

    f.render_widget(keyboard, area);
}

fn render_messages(f: &mut Frame, app: &App, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default().fg(Color::Green),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let messages_list =
        List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));

    f.render_widget(messages_list, area);
}

fn render_input(f: &mut Frame, app: &App, area: Rect) {
    let (title, content, color) = match app.input_mode {
        InputMode::Guess => (
            " Type a guess | Tab: mark letters | Ctrl-S: seed | Ctrl-R: random ",
            app.input_buffer.as_str(),
            Color::Yellow,
        ),
        InputMode::MarkLetter => (
            " Mark mode: letters cycle grey → green → yellow → off | Esc: back ",
            "",
            Color::Magenta,
        ),
        InputMode::SeedEntry => (
            " New seed (blank = today) | Enter: apply | Esc: cancel ",
            app.seed_buffer.as_str(),
            Color::Cyan,
        ),
        InputMode::GameOver => (
            " Game over | n: random puzzle | s: pick seed | q: quit ",
            "",
            Color::Green,
        ),
    };

    let input = Paragraph::new(content)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .style(Style::default().fg(color)),
        );

    f.render_widget(input, area);
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(33),
            Constraint::Percentage(33),
            Constraint::Percentage(34),
        ])
        .split(area);

    let attempts_text = format!(
        "Guesses: {}/{NUM_ROWS}",
        app.session.history().len()
    );
    let attempts = Paragraph::new(attempts_text).alignment(Alignment::Center);
    f.render_widget(attempts, chunks[0]);

    let status_text = match app.session.status() {
        Status::InProgress => "In progress".to_string(),
        Status::Won => "Won!".to_string(),
        Status::Lost => "Lost".to_string(),
    };
    let status = Paragraph::new(format!("Status: {status_text}")).alignment(Alignment::Center);
    f.render_widget(status, chunks[1]);

    let help = Paragraph::new("Ctrl-C: quit")
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[2]);
}
