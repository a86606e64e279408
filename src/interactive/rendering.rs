//! TUI rendering with ratatui
//!
//! Side-by-side boards for the human and the solver.

use super::app::{App, MessageStyle};
use crate::core::{Feedback, LetterStatus, WORD_LENGTH, Word};
use crate::solver::{MAX_ATTEMPTS, SolverSnapshot, Strategy};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Gauge, List, ListItem, Paragraph},
};

/// Main UI rendering function
pub fn ui<S: Strategy>(f: &mut Frame, app: &App<S>) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),  // Header
            Constraint::Min(16),    // Boards
            Constraint::Length(3),  // Input area
            Constraint::Length(3),  // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(30), // Human board
            Constraint::Percentage(30), // Solver board
            Constraint::Percentage(40), // Info panel
        ])
        .split(chunks[1]);

    let snapshot = app.session.solver().snapshot();
    render_human_board(f, app, main_chunks[0]);
    render_solver_board(f, app, &snapshot, main_chunks[1]);
    render_info_panel(f, app, &snapshot, main_chunks[2]);

    render_input(f, app, chunks[2]);
    render_status(f, app, chunks[3]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("🎯 WORDLE DUEL - You vs. Solver")
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

const fn status_color(status: LetterStatus) -> Color {
    match status {
        LetterStatus::Correct => Color::Green,
        LetterStatus::Present => Color::Yellow,
        LetterStatus::Absent => Color::DarkGray,
    }
}

/// One scored row; `None` hides the letters
fn feedback_line(word: Option<Word>, feedback: Feedback) -> Line<'static> {
    let spans = feedback
        .statuses()
        .iter()
        .enumerate()
        .flat_map(|(i, &status)| {
            let letter = word.map_or('?', |w| char::from(w.letter_at(i)));
            [
                Span::styled(
                    format!(" {letter} "),
                    Style::default()
                        .fg(Color::Black)
                        .bg(status_color(status))
                        .add_modifier(Modifier::BOLD),
                ),
                Span::raw(" "),
            ]
        })
        .collect::<Vec<_>>();
    Line::from(spans)
}

/// A row still being typed, or an empty one
fn pending_line(text: &str) -> Line<'static> {
    let spans = (0..WORD_LENGTH)
        .flat_map(|i| {
            let letter = text.chars().nth(i).unwrap_or(' ');
            [
                Span::styled(
                    format!("[{letter}]"),
                    Style::default().fg(Color::White),
                ),
                Span::raw(" "),
            ]
        })
        .collect::<Vec<_>>();
    Line::from(spans)
}

/// Pad a board to the full number of rows with blank lines
fn pad_board(mut lines: Vec<Line<'static>>) -> Vec<Line<'static>> {
    while lines.len() < MAX_ATTEMPTS {
        lines.push(pending_line(""));
    }
    lines
        .into_iter()
        .flat_map(|line| [line, Line::from("")])
        .collect()
}

fn render_human_board<S: Strategy>(f: &mut Frame, app: &App<S>, area: Rect) {
    let human = app.session.human();
    let mut lines: Vec<Line> = human
        .rows()
        .iter()
        .map(|&(word, feedback)| feedback_line(Some(word), feedback))
        .collect();
    if !human.status().is_terminal() {
        lines.push(pending_line(&app.input_buffer));
    }

    let board = Paragraph::new(pad_board(lines))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .title(format!(" You ({}) ", human.status()))
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Yellow)),
        );
    f.render_widget(board, area);
}

fn render_solver_board<S: Strategy>(
    f: &mut Frame,
    app: &App<S>,
    snapshot: &SolverSnapshot,
    area: Rect,
) {
    let reveal = app.reveal_solver();
    let lines = snapshot
        .history
        .iter()
        .map(|record| feedback_line(reveal.then_some(record.guess), record.feedback))
        .collect();

    let board = Paragraph::new(pad_board(lines))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .title(format!(" Solver ({}) ", snapshot.status))
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Magenta)),
        );
    f.render_widget(board, area);
}

fn render_info_panel<S: Strategy>(
    f: &mut Frame,
    app: &App<S>,
    snapshot: &SolverSnapshot,
    area: Rect,
) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),      // Search space gauge
            Constraint::Percentage(50), // Candidates
            Constraint::Min(5),         // Messages
        ])
        .split(area);

    render_search_progress(f, app, snapshot, chunks[0]);
    render_candidates(f, app, snapshot, chunks[1]);
    render_messages(f, app, chunks[2]);
}

fn render_search_progress<S: Strategy>(
    f: &mut Frame,
    app: &App<S>,
    snapshot: &SolverSnapshot,
    area: Rect,
) {
    let total = app.session.solver().dictionary().len().max(1);
    let eliminated = total.saturating_sub(snapshot.remaining);
    // Cast is safe: ratio is in [0, 100]
    let progress_pct = (eliminated * 100 / total) as u16;

    let gauge = Gauge::default()
        .block(
            Block::default()
                .title(" Solver Search Space ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .gauge_style(Style::default().fg(Color::Cyan))
        .percent(progress_pct)
        .label(format!("{} of {total} candidates remain", snapshot.remaining));

    f.render_widget(gauge, area);
}

fn render_candidates<S: Strategy>(
    f: &mut Frame,
    app: &App<S>,
    snapshot: &SolverSnapshot,
    area: Rect,
) {
    let content = match &snapshot.preview {
        _ if !app.reveal_solver() => vec![
            Line::from(format!("{} candidates remaining", snapshot.remaining)),
            Line::from(Span::styled(
                "Word list hidden until you finish",
                Style::default().fg(Color::DarkGray),
            )),
        ],
        Some(words) if !words.is_empty() => words
            .iter()
            .map(|word| Line::from(format!("  {word}")))
            .collect(),
        _ => vec![Line::from(format!(
            "{} candidates remaining",
            snapshot.remaining
        ))],
    };

    let paragraph = Paragraph::new(content).block(
        Block::default()
            .title(" Solver Candidates ")
            .borders(Borders::ALL)
            .style(Style::default().fg(Color::Green)),
    );

    f.render_widget(paragraph, area);
}

fn render_messages<S: Strategy>(f: &mut Frame, app: &App<S>, area: Rect) {
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

fn render_input<S: Strategy>(f: &mut Frame, app: &App<S>, area: Rect) {
    let (title, content, color) = if app.is_over() {
        (
            " Game over | Press 'n' for new game or 'q' to quit ",
            "",
            Color::Green,
        )
    } else if app.reveal_solver() {
        (" Waiting for the solver to finish ", "", Color::Magenta)
    } else {
        (
            " Type your guess | Enter to submit ",
            app.input_buffer.as_str(),
            Color::Yellow,
        )
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

fn render_status<S: Strategy>(f: &mut Frame, app: &App<S>, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
        ])
        .split(area);

    let games = Paragraph::new(format!("Games: {}", app.stats.total_games))
        .alignment(Alignment::Center);
    f.render_widget(games, chunks[0]);

    let score_text = format!(
        "You {} | Solver {} | Ties {}",
        app.stats.human_wins, app.stats.solver_wins, app.stats.ties
    );
    let score = Paragraph::new(score_text).alignment(Alignment::Center);
    f.render_widget(score, chunks[1]);

    let solves = Paragraph::new(format!("Solver solves: {}", app.solver_solves()))
        .alignment(Alignment::Center);
    f.render_widget(solves, chunks[2]);

    let help = Paragraph::new("Esc: Quit | Ctrl-N: New Game | Enter: Submit")
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[3]);
}
