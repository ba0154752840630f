//! TUI rendering with ratatui
//!
//! Panels for the word ladder game.

use super::app::{App, InputMode, MessageStyle};
use crate::game::{PERFECT_SCORE, SessionStatus};
use crate::output::formatters::{format_duration, format_restrictions, format_slowdown};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Gauge, List, ListItem, Paragraph, Wrap},
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

    render_header(f, app, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(55), // Puzzle and ladder
            Constraint::Percentage(45), // Progress and messages
        ])
        .split(chunks[1]);

    render_main_panel(f, app, main_chunks[0]);
    render_info_panel(f, app, main_chunks[1]);

    render_input(f, app, chunks[2]);
    render_status(f, app, chunks[3]);
}

fn render_header(f: &mut Frame, app: &App, area: Rect) {
    let title = format!("🪜 WORD LADDER - {} Mode", app.session.mode());
    let header = Paragraph::new(title)
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
            Constraint::Length(7), // Puzzle
            Constraint::Min(5),    // Ladder so far
        ])
        .split(area);

    render_puzzle(f, app, chunks[0]);
    render_ladder(f, app, chunks[1]);
}

fn render_puzzle(f: &mut Frame, app: &App, area: Rect) {
    let session = &app.session;
    let bold_yellow = Style::default()
        .fg(Color::Yellow)
        .add_modifier(Modifier::BOLD);

    let mut content = vec![
        Line::from(vec![
            Span::raw("Start: "),
            Span::styled(session.start_word().text().to_uppercase(), bold_yellow),
            Span::raw("   End: "),
            Span::styled(session.end_word().text().to_uppercase(), bold_yellow),
        ]),
        Line::from(format!(
            "Optimal: {} moves | Allowed: {} moves",
            session.min_tries(),
            session.max_tries()
        )),
        Line::from(format!("Solver:  {}", session.algorithm())),
    ];

    if let Some(restrictions) = format_restrictions(session.config()) {
        content.push(Line::styled(restrictions, Style::default().fg(Color::Magenta)));
    }

    let paragraph = Paragraph::new(content)
        .block(
            Block::default()
                .title(" Puzzle ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .wrap(Wrap { trim: false });

    f.render_widget(paragraph, area);
}

fn render_ladder(f: &mut Frame, app: &App, area: Rect) {
    let session = &app.session;
    let mut items = vec![ListItem::new(format!("0: {}", session.start_word().text().to_uppercase()))
        .style(Style::default().fg(Color::DarkGray))];

    items.extend(session.tries().iter().enumerate().map(|(i, word)| {
        let style = if *word == *session.end_word() {
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::White)
        };
        ListItem::new(format!("{}: {}", i + 1, word.text().to_uppercase())).style(style)
    }));

    if session.is_over() {
        items.push(ListItem::new(""));
        items.push(
            ListItem::new(format!("Optimal: {}", session.optimal_ladder()))
                .style(Style::default().fg(Color::Cyan)),
        );
    }

    let ladder = List::new(items).block(
        Block::default()
            .title(" Ladder ")
            .borders(Borders::ALL),
    );

    f.render_widget(ladder, area);
}

fn render_info_panel(f: &mut Frame, app: &App, area: Rect) {
    let comparison_height = if app.comparison.is_some() { 6 } else { 0 };
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),                 // Tries gauge
            Constraint::Length(3),                 // Score gauge
            Constraint::Length(comparison_height), // Comparison
            Constraint::Min(4),                    // Messages
        ])
        .split(area);

    render_tries(f, app, chunks[0]);
    render_score(f, app, chunks[1]);
    if app.comparison.is_some() {
        render_comparison(f, app, chunks[2]);
    }
    render_messages(f, app, chunks[3]);
}

fn render_tries(f: &mut Frame, app: &App, area: Rect) {
    let used = app.session.tries().len();
    let max = app.session.max_tries();
    let percent = if max == 0 {
        100
    } else {
        (used * 100 / max).min(100) as u16
    };
    let color = if app.session.status() == SessionStatus::OutOfTries {
        Color::Red
    } else {
        Color::Cyan
    };

    let gauge = Gauge::default()
        .block(
            Block::default()
                .title(" Tries ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .gauge_style(Style::default().fg(color))
        .percent(percent)
        .label(format!(
            "{used}/{max} used | {} left",
            app.session.remaining_tries()
        ));

    f.render_widget(gauge, area);
}

fn render_score(f: &mut Frame, app: &App, area: Rect) {
    let score = app.session.score();
    let percent = ((score / PERFECT_SCORE * 100.0).clamp(0.0, 100.0)) as u16;

    let gauge = Gauge::default()
        .block(
            Block::default()
                .title(" Score ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .gauge_style(Style::default().fg(Color::Green))
        .percent(percent)
        .label(format!("{score:.1}/{PERFECT_SCORE:.0}"));

    f.render_widget(gauge, area);
}

fn render_comparison(f: &mut Frame, app: &App, area: Rect) {
    let Some(report) = &app.comparison else {
        return;
    };

    let slowdowns = report.slowdowns();
    let items: Vec<ListItem> = report
        .runs
        .iter()
        .map(|run| {
            let relative = slowdowns
                .iter()
                .find(|(algorithm, _)| *algorithm == run.algorithm)
                .map(|&(_, slowdown)| format_slowdown(slowdown))
                .unwrap_or_default();
            let moves = run
                .moves()
                .map_or_else(|| "no ladder".to_string(), |m| format!("{m} moves"));
            ListItem::new(format!(
                "{:<4} {:>10} | {} | {}",
                run.algorithm.name(),
                format_duration(run.average),
                moves,
                relative
            ))
        })
        .collect();

    let list = List::new(items).block(
        Block::default()
            .title(" Algorithms ")
            .borders(Borders::ALL),
    );

    f.render_widget(list, area);
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
        InputMode::WinCelebration => (
            " 🎉 CONGRATULATIONS! 🎉 | Press 'n' for new game or 'q' to quit ",
            "",
            Color::Green,
        ),
        InputMode::Finished => (
            " Game over | Press 'n' for new game, Ctrl-U to undo or 'q' to quit ",
            "",
            Color::Red,
        ),
        InputMode::Playing => (
            " Next word, or a move number to undo from | Enter to submit, TAB for a hint ",
            app.input_buffer.as_str(),
            Color::Yellow,
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
            Constraint::Percentage(15),
            Constraint::Percentage(35),
            Constraint::Percentage(50),
        ])
        .split(area);

    let mode = Paragraph::new(format!("Hints: {}", app.game.hint_policy())).alignment(Alignment::Center);
    f.render_widget(mode, chunks[0]);

    let best = app
        .stats
        .best_score
        .map_or_else(|| "-".to_string(), |score| format!("{score:.1}"));
    let stats_text = format!(
        "Games: {} | Won: {} | Avg: {:.1} | Best: {best}",
        app.stats.total_games,
        app.stats.games_won,
        app.stats.average_score()
    );
    let stats = Paragraph::new(stats_text).alignment(Alignment::Center);
    f.render_widget(stats, chunks[1]);

    let help = Paragraph::new("^U Undo | ^R Reset | ^S Solve | ^B Compare | ^N New | F1-F3 Mode | Esc Quit")
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[2]);
}
