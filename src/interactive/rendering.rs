//! TUI rendering with ratatui
//!
//! Visualizations for the Wordle assistant interface.

use super::app::{App, InputMode, MessageStyle};
use crate::core::{Mark, Outcome, Word};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Gauge, List, ListItem, Paragraph},
};

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
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
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(chunks[1]);

    render_main_panel(f, app, main_chunks[0]);
    render_info_panel(f, app, main_chunks[1]);

    render_input(f, app, chunks[2]);
    render_status(f, app, chunks[3]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("🎯 WORDLE ASSISTANT - Interactive Mode")
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

fn render_main_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(45), // Suggestions
            Constraint::Percentage(55), // History
        ])
        .split(area);

    render_suggestions(f, app, chunks[0]);
    render_history(f, app, chunks[1]);
}

fn render_suggestions(f: &mut Frame, app: &App, area: Rect) {
    let items: Vec<ListItem> = app
        .suggestions
        .iter()
        .enumerate()
        .map(|(i, entry)| {
            let chosen = app.selected.is_some_and(|w| w == entry.word);
            let style = if chosen {
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::White)
            };

            ListItem::new(Line::from(vec![
                Span::styled(format!("{:>2}. ", i + 1), Style::default().fg(Color::DarkGray)),
                Span::styled(entry.word.text().to_uppercase(), style),
                Span::styled(
                    format!("  {}", entry.score),
                    Style::default().fg(Color::Cyan),
                ),
            ]))
        })
        .collect();

    let title = format!(" Suggestions - round {} ", app.game.round());
    let list = List::new(items).block(
        Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(list, area);
}

/// Coloured letter tiles for one played round
fn tiles(word: &Word, outcome: &Outcome) -> Vec<Span<'static>> {
    word.text()
        .chars()
        .zip(outcome.marks())
        .map(|(letter, mark)| {
            let bg = match mark {
                Mark::Green => Color::Green,
                Mark::Yellow => Color::Yellow,
                Mark::None => Color::DarkGray,
            };
            Span::styled(
                format!(" {} ", letter.to_ascii_uppercase()),
                Style::default()
                    .fg(Color::Black)
                    .bg(bg)
                    .add_modifier(Modifier::BOLD),
            )
        })
        .collect()
}

fn render_history(f: &mut Frame, app: &App, area: Rect) {
    let items: Vec<ListItem> = app
        .history
        .iter()
        .enumerate()
        .map(|(i, entry)| {
            let mut spans = vec![Span::raw(format!("{}: ", i + 1))];
            spans.extend(tiles(&entry.guess, &entry.outcome));
            spans.push(Span::raw(format!(
                "  {} → {}",
                entry.candidates_before, entry.candidates_after
            )));
            ListItem::new(Line::from(spans))
        })
        .collect();

    let history =
        List::new(items).block(Block::default().title(" History ").borders(Borders::ALL));
    f.render_widget(history, area);
}

fn render_info_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),      // Pool gauge
            Constraint::Percentage(50), // Candidates
            Constraint::Min(5),         // Messages
        ])
        .split(area);

    render_pool_progress(f, app, chunks[0]);
    render_candidates(f, app, chunks[1]);
    render_messages(f, app, chunks[2]);
}

fn render_pool_progress(f: &mut Frame, app: &App, area: Rect) {
    let total = app.solver.words().len();
    let remaining = app.candidates().len();
    let eliminated = total.saturating_sub(remaining);
    let percent = if total == 0 {
        0
    } else {
        (eliminated * 100 / total) as u16
    };

    let gauge = Gauge::default()
        .block(
            Block::default()
                .title(" Words Eliminated ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .gauge_style(Style::default().fg(Color::Cyan))
        .percent(percent)
        .label(format!("{remaining}/{total} remain"));

    f.render_widget(gauge, area);
}

fn render_candidates(f: &mut Frame, app: &App, area: Rect) {
    let candidates = app.candidates();
    let rows = usize::from(area.height.saturating_sub(3));

    let mut lines = vec![Line::from(vec![
        Span::styled("🟢", Style::default().fg(Color::Green)),
        Span::raw(" = answer  "),
        Span::styled("⚪", Style::default().fg(Color::White)),
        Span::raw(" = guess only"),
    ])];

    for candidate in candidates.iter().take(rows) {
        let (prefix, style) = if app.is_solution(candidate) {
            ("🟢", Style::default().fg(Color::Green))
        } else {
            ("⚪", Style::default().fg(Color::DarkGray))
        };
        lines.push(Line::from(vec![
            Span::raw(format!("  {prefix} ")),
            Span::styled(candidate.text().to_uppercase(), style),
        ]));
    }
    if candidates.len() > rows {
        lines.push(Line::from(format!(
            "  ... {} more",
            candidates.len() - rows
        )));
    }

    let paragraph = Paragraph::new(lines).block(
        Block::default()
            .title(format!(" Candidates ({}) ", candidates.len()))
            .borders(Borders::ALL)
            .style(Style::default().fg(Color::Green)),
    );
    f.render_widget(paragraph, area);
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
    let selected = app
        .selected
        .map(|w| w.text().to_uppercase())
        .unwrap_or_default();

    let (title, color) = match app.input_mode {
        InputMode::GameOver => (
            " 🎉 Game over | 'n' new game, 'u' undo, 'q' quit ".to_string(),
            Color::Green,
        ),
        InputMode::Guess => (
            " Word played: number or word | TAB top suggestion | ESC quit ".to_string(),
            Color::Cyan,
        ),
        InputMode::Feedback => (
            format!(" Feedback for {selected} (G=Green Y=Yellow -=None) | ESC back "),
            Color::Yellow,
        ),
    };

    let content = if app.input_mode == InputMode::GameOver {
        ""
    } else {
        app.input_buffer.as_str()
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
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
        ])
        .split(area);

    let round_text = format!(
        "Round {}/{}",
        app.game.round(),
        app.solver.config().max_rounds
    );
    f.render_widget(
        Paragraph::new(round_text).alignment(Alignment::Center),
        chunks[0],
    );

    let stats_text = format!(
        "Games: {} | Win Rate: {:.0}%",
        app.stats.total_games,
        app.stats.win_rate()
    );
    f.render_widget(
        Paragraph::new(stats_text).alignment(Alignment::Center),
        chunks[1],
    );

    let candidates_text = format!("Candidates: {}", app.candidates().len());
    f.render_widget(
        Paragraph::new(candidates_text).alignment(Alignment::Center),
        chunks[2],
    );

    let help = Paragraph::new("^C: Quit | ^U: Undo | ^N: New Game")
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[3]);
}
