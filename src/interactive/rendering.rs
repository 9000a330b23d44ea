//! TUI rendering with ratatui
//!
//! Board, budget and session panels for the codebreaker game.

use super::app::{App, MessageStyle};
use crate::core::{Clue, Color as Peg, Mark};
use crate::output::formatters::mark_symbol;
use crate::solver::Strategy;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Gauge, List, ListItem, Paragraph},
};

/// Terminal color for a code peg
const fn peg_color(peg: Peg) -> Color {
    match peg {
        Peg::Red => Color::Red,
        Peg::Orange => Color::Rgb(255, 140, 0),
        Peg::Yellow => Color::Yellow,
        Peg::Green => Color::Green,
        Peg::Blue => Color::Blue,
        Peg::Violet => Color::Magenta,
    }
}

fn peg_spans(pegs: &[Peg]) -> Vec<Span<'static>> {
    pegs.iter()
        .map(|&peg| {
            Span::styled(
                format!("{} ", peg.letter()),
                Style::default()
                    .fg(peg_color(peg))
                    .add_modifier(Modifier::BOLD),
            )
        })
        .collect()
}

fn clue_spans(clue: Clue) -> Vec<Span<'static>> {
    clue.marks()
        .iter()
        .map(|&mark| {
            let color = match mark {
                Mark::Exact => Color::White,
                Mark::WrongPosition => Color::Gray,
                Mark::WrongColor => Color::DarkGray,
            };
            Span::styled(format!("{} ", mark_symbol(mark)), Style::default().fg(color))
        })
        .collect()
}

/// Main UI rendering function
pub fn ui<S: Strategy>(f: &mut Frame, app: &App<S>) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Main content
            Constraint::Length(3), // Input area
            Constraint::Length(3), // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(chunks[1]);

    render_board(f, app, main_chunks[0]);
    render_info_panel(f, app, main_chunks[1]);

    render_input(f, app, chunks[2]);
    render_status(f, app, chunks[3]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("MASTERMIND - Break the Code")
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

fn render_board<S: Strategy>(f: &mut Frame, app: &App<S>, area: Rect) {
    let mut rows: Vec<ListItem> = app
        .game
        .history()
        .iter()
        .enumerate()
        .map(|(i, turn)| {
            let mut spans = vec![Span::raw(format!("{:2}. ", i + 1))];
            spans.extend(peg_spans(turn.guess.colors()));
            spans.push(Span::raw("  "));
            spans.extend(clue_spans(turn.clue));
            ListItem::new(Line::from(spans))
        })
        .collect();

    if app.game.is_over() && !app.game.is_solved() {
        let mut spans = vec![Span::styled(
            "Secret: ",
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        )];
        spans.extend(peg_spans(app.game.secret().colors()));
        rows.push(ListItem::new(Line::from("")));
        rows.push(ListItem::new(Line::from(spans)));
    }

    let board = List::new(rows).block(
        Block::default()
            .title(" Board ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(board, area);
}

fn render_info_panel<S: Strategy>(f: &mut Frame, app: &App<S>, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Budget gauge
            Constraint::Length(4), // Hint
            Constraint::Min(3),    // Messages
        ])
        .split(area);

    render_budget(f, app, chunks[0]);
    render_hint(f, app, chunks[1]);
    render_messages(f, app, chunks[2]);
}

fn render_budget<S: Strategy>(f: &mut Frame, app: &App<S>, area: Rect) {
    let used = app.game.tries();
    let total = app.game.max_guesses();
    let percent = (used * 100 / total.max(1)).min(100) as u16;

    let gauge = Gauge::default()
        .block(
            Block::default()
                .title(" Guesses Used ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .gauge_style(Style::default().fg(Color::Cyan))
        .percent(percent)
        .label(format!("{used}/{total} | {} left", app.game.guesses_remaining()));

    f.render_widget(gauge, area);
}

fn render_hint<S: Strategy>(f: &mut Frame, app: &App<S>, area: Rect) {
    let content = match app.hint {
        None => vec![Line::from("Press 'h' for a hint")],
        Some(hint) => {
            let mut suggestion = vec![Span::raw("Try: ")];
            match hint.suggestion {
                Some(code) => suggestion.extend(peg_spans(code.colors())),
                None => suggestion.push(Span::raw("-")),
            }
            vec![
                Line::from(format!("{} codes still possible", hint.candidates)),
                Line::from(suggestion),
            ]
        }
    };

    let paragraph = Paragraph::new(content).block(
        Block::default()
            .title(" Hint ")
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
    let (title, color) = if app.game.is_over() {
        (" Game over | 'n' new game, 'q' quit ", Color::Green)
    } else {
        (
            " Your guess | 1-6 or r/o/y/g/b/v, Backspace, Enter ",
            Color::Yellow,
        )
    };

    let mut spans = peg_spans(&app.input);
    for _ in app.input.len()..crate::core::CODE_LENGTH {
        spans.push(Span::styled("_ ", Style::default().fg(Color::DarkGray)));
    }

    let input = Paragraph::new(Line::from(spans)).block(
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
            Constraint::Percentage(30),
            Constraint::Percentage(35),
            Constraint::Percentage(35),
        ])
        .split(area);

    let stats_text = format!(
        "Games: {} | Win Rate: {:.0}%",
        app.stats.total_games,
        app.stats.win_rate()
    );
    f.render_widget(
        Paragraph::new(stats_text).alignment(Alignment::Center),
        chunks[0],
    );

    let distribution: Vec<String> = app
        .stats
        .guess_distribution
        .iter()
        .enumerate()
        .filter(|&(_, &count)| count > 0)
        .map(|(tries, count)| format!("{tries}:{count}"))
        .collect();
    let distribution_text = if distribution.is_empty() {
        "Wins by guesses: -".to_string()
    } else {
        format!("Wins by guesses: {}", distribution.join(" "))
    };
    f.render_widget(
        Paragraph::new(distribution_text).alignment(Alignment::Center),
        chunks[1],
    );

    let help = Paragraph::new("q: Quit | n: New | h: Hint | Enter: Guess")
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[2]);
}
