//! TUI application state and logic

use crate::commands::{CompareConfig, ComparisonReport, compare_algorithms};
use crate::game::{Game, GameMode, Hint, MoveOutcome, Session, SessionStatus};
use crate::output::formatters::format_hint;
use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use tracing::warn;

/// Messages kept on screen
const MAX_MESSAGES: usize = 5;

/// Application state
pub struct App {
    pub game: Game,
    pub session: Session,
    pub input_buffer: String,
    pub messages: Vec<Message>,
    pub stats: Statistics,
    pub comparison: Option<ComparisonReport>,
    pub should_quit: bool,
    pub input_mode: InputMode,
    /// The current session already counts towards the statistics
    recorded: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Playing,
    WinCelebration,
    /// Out of tries, or solved by the computer
    Finished,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

#[derive(Debug, Default, Clone)]
pub struct Statistics {
    pub total_games: usize,
    pub games_won: usize,
    pub total_score: f64,
    pub best_score: Option<f64>,
}

impl Statistics {
    #[must_use]
    pub fn average_score(&self) -> f64 {
        if self.games_won == 0 {
            0.0
        } else {
            self.total_score / self.games_won as f64
        }
    }
}

impl App {
    /// Start the first session
    ///
    /// # Errors
    ///
    /// Returns an error if no session can be started for the game's mode.
    pub fn new(mut game: Game) -> Result<Self> {
        let session = game.new_session()?;
        let mut app = Self {
            game,
            session,
            input_buffer: String::new(),
            messages: Vec::new(),
            stats: Statistics::default(),
            comparison: None,
            should_quit: false,
            input_mode: InputMode::Playing,
            recorded: false,
        };
        app.announce_session();
        Ok(app)
    }

    fn announce_session(&mut self) {
        let text = format!(
            "Turn '{}' into '{}' in {} moves or fewer",
            self.session.start_word(),
            self.session.end_word(),
            self.session.max_tries()
        );
        self.add_message(&text, MessageStyle::Info);
        self.add_message("Tab for a hint, Ctrl-S to give up", MessageStyle::Info);
    }

    /// Handle one key press
    pub fn handle_key(&mut self, key: KeyEvent) {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        match key.code {
            KeyCode::Esc => self.should_quit = true,
            KeyCode::Char('c') if ctrl => self.should_quit = true,
            KeyCode::Char('n') if ctrl => self.new_game(),
            KeyCode::Char('u') if ctrl => self.undo_last(),
            KeyCode::Char('r') if ctrl => self.reset(),
            KeyCode::Char('s') if ctrl => self.auto_solve(),
            KeyCode::Char('b') if ctrl => self.compare(),
            KeyCode::F(1) => self.switch_mode(GameMode::Beginner),
            KeyCode::F(2) => self.switch_mode(GameMode::Advanced),
            KeyCode::F(3) => self.switch_mode(GameMode::Challenge),
            _ if self.input_mode != InputMode::Playing => match key.code {
                KeyCode::Char('q') => self.should_quit = true,
                KeyCode::Char('n') | KeyCode::Enter => self.new_game(),
                _ => {}
            },
            KeyCode::Tab => self.request_hint(),
            KeyCode::Enter => self.submit_input(),
            KeyCode::Backspace => {
                self.input_buffer.pop();
            }
            KeyCode::Char(c) if c.is_ascii_alphanumeric() && !ctrl => {
                self.input_buffer.push(c.to_ascii_lowercase());
            }
            _ => {}
        }
    }

    pub fn submit_input(&mut self) {
        let input = std::mem::take(&mut self.input_buffer);
        if input.is_empty() {
            return;
        }
        // A number removes that move and everything after it
        if let Ok(number) = input.parse::<usize>() {
            if number == 0 || number > self.session.tries().len() {
                self.add_message(&format!("There is no move {number}"), MessageStyle::Error);
            } else {
                self.remove_from(number - 1);
            }
            return;
        }

        match self.session.submit_move(&input) {
            Ok(MoveOutcome::Advanced {
                word,
                remaining_tries,
            }) => {
                if self.session.status() == SessionStatus::OutOfTries {
                    self.record_result();
                    self.input_mode = InputMode::Finished;
                    let text = format!("Out of tries! Optimal: {}", self.session.optimal_ladder());
                    self.add_message(&text, MessageStyle::Error);
                    self.add_message("Ctrl-U to undo, n for a new game", MessageStyle::Info);
                } else {
                    let text = format!("'{word}' accepted, {remaining_tries} tries left");
                    self.add_message(&text, MessageStyle::Success);
                }
            }
            Ok(MoveOutcome::Won { moves, score, .. }) => {
                self.record_result();
                self.input_mode = InputMode::WinCelebration;
                let celebration = if moves == self.session.min_tries() {
                    "🏆 PERFECT LADDER! 🏆"
                } else {
                    "🎉 LADDER COMPLETE! 🎉"
                };
                self.add_message(celebration, MessageStyle::Success);
                let text = format!("{moves} moves, score {score:.1}/10");
                self.add_message(&text, MessageStyle::Success);
            }
            Err(reason) => self.add_message(&reason.to_string(), MessageStyle::Error),
        }
    }

    pub fn request_hint(&mut self) {
        let hint = self.session.hint(self.game.hint_policy());
        let style = match hint {
            Hint::Next(_) => MessageStyle::Info,
            Hint::AtGoal | Hint::Unreachable => MessageStyle::Error,
        };
        self.add_message(&format!("💡 {}", format_hint(&hint)), style);
    }

    pub fn undo_last(&mut self) {
        if let Some(word) = self.session.undo() {
            self.input_mode = InputMode::Playing;
            self.add_message(&format!("Removed '{word}'"), MessageStyle::Info);
        } else {
            self.add_message("Nothing to undo!", MessageStyle::Error);
        }
    }

    /// Undo the move at `index` and everything after it
    pub fn remove_from(&mut self, index: usize) {
        let removed = self.session.remove_from_index(index);
        if !removed.is_empty() {
            self.input_mode = InputMode::Playing;
            let text = format!("Removed {} moves", removed.len());
            self.add_message(&text, MessageStyle::Info);
        }
    }

    pub fn reset(&mut self) {
        self.session.reset();
        self.input_mode = InputMode::Playing;
        self.add_message("Ladder cleared", MessageStyle::Info);
    }

    pub fn auto_solve(&mut self) {
        self.session.auto_solve();
        if !self.recorded {
            self.recorded = true;
            self.stats.total_games += 1;
        }
        self.input_mode = InputMode::Finished;
        let text = format!("Solved: {}", self.session.optimal_ladder());
        self.add_message(&text, MessageStyle::Info);
    }

    pub fn compare(&mut self) {
        match compare_algorithms(
            self.session.start_word().text(),
            self.session.end_word().text(),
            self.session.config().playable_dictionary(),
            CompareConfig::default(),
        ) {
            Ok(report) => {
                if let Some(fastest) = report.fastest() {
                    let text = format!("{} was fastest", fastest.algorithm);
                    self.add_message(&text, MessageStyle::Info);
                }
                self.comparison = Some(report);
            }
            Err(err) => self.add_message(&err.to_string(), MessageStyle::Error),
        }
    }

    /// Switch mode and start a new game in it, keeping the old mode if that fails
    pub fn switch_mode(&mut self, mode: GameMode) {
        let previous = self.game.mode();
        self.game.set_mode(mode);
        self.new_game();
        if self.session.mode() != mode {
            self.game.set_mode(previous);
        }
    }

    pub fn new_game(&mut self) {
        match self.game.new_session() {
            Ok(session) => {
                if !self.recorded && !self.session.tries().is_empty() {
                    self.stats.total_games += 1;
                }
                self.session = session;
                self.recorded = false;
                self.comparison = None;
                self.input_buffer.clear();
                self.messages.clear();
                self.input_mode = InputMode::Playing;
                self.announce_session();
            }
            Err(err) => {
                warn!(error = %err, "Could not start a new session");
                self.add_message(&err.to_string(), MessageStyle::Error);
            }
        }
    }

    fn record_result(&mut self) {
        if self.recorded {
            return;
        }
        self.recorded = true;
        self.stats.total_games += 1;
        if self.session.is_won() {
            let score = self.session.score();
            self.stats.games_won += 1;
            self.stats.total_score += score;
            self.stats.best_score = Some(self.stats.best_score.map_or(score, |best| best.max(score)));
        }
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        if self.messages.len() > MAX_MESSAGES {
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

    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    res
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }
            app.handle_key(key);
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
