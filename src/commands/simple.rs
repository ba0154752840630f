//! Simple interactive CLI mode
//!
//! Text-based game loop without TUI

use super::compare::{CompareConfig, compare_algorithms};
use crate::game::{Game, GameMode, MoveOutcome, Session, SessionStatus};
use crate::output::formatters::{
    format_duration, format_hint, format_restrictions, format_slowdown, format_words, score_bar,
};
use anyhow::Result;
use colored::Colorize;
use std::io::{self, BufRead, Write};

/// A line typed by the player
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlayCommand {
    /// A word to add to the ladder
    Move(String),
    Hint,
    /// Undo the last move, or everything from the given move number on
    Undo(Option<usize>),
    Reset,
    Solve,
    Compare,
    New,
    /// Switch mode and start a new puzzle
    Mode(GameMode),
    Help,
    Quit,
}

impl PlayCommand {
    /// Parse a line; commands start with `:`, anything else is a move
    ///
    /// Returns `None` for blank lines and unknown commands.
    #[must_use]
    pub fn parse(input: &str) -> Option<Self> {
        let input = input.trim();
        if input.is_empty() {
            return None;
        }
        let Some(command) = input.strip_prefix(':') else {
            return Some(Self::Move(input.to_string()));
        };

        let mut parts = command.split_whitespace();
        let name = parts.next()?.to_lowercase();
        let argument = parts.next();
        if parts.next().is_some() {
            return None;
        }

        match (name.as_str(), argument) {
            ("hint" | "h", None) => Some(Self::Hint),
            ("undo" | "u", None) => Some(Self::Undo(None)),
            ("undo" | "u", Some(n)) => n.parse().ok().filter(|&n| n > 0).map(|n| Self::Undo(Some(n))),
            ("reset" | "r", None) => Some(Self::Reset),
            ("solve" | "s", None) => Some(Self::Solve),
            ("compare" | "c", None) => Some(Self::Compare),
            ("new" | "n", None) => Some(Self::New),
            ("mode" | "m", Some(mode)) => mode.parse().ok().map(Self::Mode),
            ("help" | "?", None) => Some(Self::Help),
            ("quit" | "q" | "exit", None) => Some(Self::Quit),
            _ => None,
        }
    }
}

/// Run the simple interactive CLI mode on stdin and stdout
///
/// # Errors
///
/// Returns an error if reading input or writing output fails, or if no session can be
/// started for the selected mode.
pub fn run_simple(game: &mut Game) -> Result<()> {
    let stdin = io::stdin();
    run_simple_with(game, stdin.lock(), io::stdout())
}

/// Run the game loop over arbitrary input and output streams
///
/// # Errors
///
/// See [`run_simple`].
pub fn run_simple_with<R: BufRead, W: Write>(game: &mut Game, mut input: R, mut out: W) -> Result<()> {
    writeln!(out, "\n╔══════════════════════════════════════════════════════════════╗")?;
    writeln!(out, "║                 Word Ladder - Interactive Mode               ║")?;
    writeln!(out, "╚══════════════════════════════════════════════════════════════╝\n")?;
    writeln!(out, "Change one letter at a time to turn the start word into the end word.")?;
    write_help(&mut out)?;

    let mut session = game.new_session()?;
    write_intro(&mut out, &session)?;

    loop {
        write!(out, "{} > ", session.current().text().bright_cyan())?;
        out.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            writeln!(out, "\n👋 Thanks for playing!\n")?;
            return Ok(());
        }
        if line.trim().is_empty() {
            continue;
        }

        let Some(command) = PlayCommand::parse(&line) else {
            writeln!(out, "❌ Unknown command. Type :help for the list.\n")?;
            continue;
        };

        match command {
            PlayCommand::Quit => {
                writeln!(out, "\n👋 Thanks for playing!\n")?;
                return Ok(());
            }
            PlayCommand::Move(word) => match session.submit_move(&word) {
                Ok(MoveOutcome::Advanced { remaining_tries, .. }) => {
                    writeln!(out, "✓ {}", ladder_so_far(&session))?;
                    if session.status() == SessionStatus::OutOfTries {
                        writeln!(out, "{}", "❌ Out of tries!".red().bold())?;
                        writeln!(out, "   Optimal ladder: {}", session.optimal_ladder())?;
                        writeln!(out, "   Use :undo, :reset or :new to keep going.\n")?;
                    } else {
                        writeln!(out, "   {remaining_tries} tries left\n")?;
                    }
                }
                Ok(MoveOutcome::Won { moves, score, .. }) => {
                    write_victory(&mut out, &session, moves, score)?;
                }
                Err(reason) => writeln!(out, "✗ {reason}\n")?,
            },
            PlayCommand::Hint => {
                let hint = session.hint(game.hint_policy());
                writeln!(out, "💡 {}\n", format_hint(&hint))?;
            }
            PlayCommand::Undo(None) => match session.undo() {
                Some(word) => writeln!(out, "✓ Removed '{word}'. {}\n", ladder_so_far(&session))?,
                None => writeln!(out, "Nothing to undo!\n")?,
            },
            PlayCommand::Undo(Some(from)) => {
                let removed = session.remove_from_index(from - 1);
                if removed.is_empty() {
                    writeln!(out, "There is no move {from}.\n")?;
                } else {
                    writeln!(out, "✓ Removed {}. {}\n", format_words(&removed), ladder_so_far(&session))?;
                }
            }
            PlayCommand::Reset => {
                session.reset();
                writeln!(out, "🔄 Back to '{}'\n", session.start_word())?;
            }
            PlayCommand::Solve => {
                session.auto_solve();
                writeln!(out, "🤖 {}\n", session.optimal_ladder())?;
            }
            PlayCommand::Compare => write_comparison(&mut out, &session)?,
            PlayCommand::New => {
                session = game.new_session()?;
                write_intro(&mut out, &session)?;
            }
            PlayCommand::Mode(mode) => {
                let previous = game.mode();
                game.set_mode(mode);
                match game.new_session() {
                    Ok(next) => {
                        session = next;
                        write_intro(&mut out, &session)?;
                    }
                    Err(err) => {
                        game.set_mode(previous);
                        writeln!(out, "✗ {err}\n")?;
                    }
                }
            }
            PlayCommand::Help => write_help(&mut out)?,
        }
    }
}

fn ladder_so_far(session: &Session) -> String {
    format_words(std::iter::once(session.start_word()).chain(session.tries()))
}

fn write_help<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "Type a word to make a move, or a command:")?;
    writeln!(out, "  :hint          suggest the next word")?;
    writeln!(out, "  :undo [n]      remove the last move, or move n and everything after it")?;
    writeln!(out, "  :reset         start the ladder over")?;
    writeln!(out, "  :solve         show the optimal ladder")?;
    writeln!(out, "  :compare       time BFS, UCS and A* on this puzzle")?;
    writeln!(out, "  :new           play a new puzzle")?;
    writeln!(out, "  :mode <name>   switch to beginner, advanced or challenge")?;
    writeln!(out, "  :quit          exit\n")
}

fn write_intro<W: Write>(out: &mut W, session: &Session) -> io::Result<()> {
    writeln!(out, "────────────────────────────────────────────────────────────")?;
    writeln!(
        out,
        "{} mode: {} → {}",
        session.mode(),
        session.start_word().text().bright_yellow().bold(),
        session.end_word().text().bright_yellow().bold()
    )?;
    writeln!(
        out,
        "Best possible: {} moves | Allowed: {} moves",
        session.min_tries(),
        session.max_tries()
    )?;
    if let Some(restrictions) = format_restrictions(session.config()) {
        writeln!(out, "{}", restrictions.yellow())?;
    }
    writeln!(out, "────────────────────────────────────────────────────────────\n")
}

fn write_victory<W: Write>(out: &mut W, session: &Session, moves: usize, score: f64) -> io::Result<()> {
    writeln!(out, "\n{}", "═".repeat(60).bright_cyan())?;
    writeln!(out, "{}", "    🎉  L A D D E R   C O M P L E T E !  🎉    ".bright_green().bold())?;
    writeln!(out, "{}", "═".repeat(60).bright_cyan())?;
    writeln!(out, "\n  {}", ladder_so_far(session).bright_white().bold())?;
    writeln!(
        out,
        "  Solved in {} {} (best possible: {})",
        moves.to_string().bright_cyan().bold(),
        if moves == 1 { "move" } else { "moves" },
        session.min_tries()
    )?;
    writeln!(out, "  Score: [{}] {score:.1}/10", score_bar(score, 20).green())?;
    if moves > session.min_tries() {
        writeln!(out, "  Optimal: {}", session.optimal_ladder())?;
    }
    writeln!(out, "\n  Type :new for another puzzle or :quit to exit.\n")
}

fn write_comparison<W: Write>(out: &mut W, session: &Session) -> Result<()> {
    let report = compare_algorithms(
        session.start_word().text(),
        session.end_word().text(),
        session.config().playable_dictionary(),
        CompareConfig::default(),
    )?;

    writeln!(out, "⏱  {} → {}", report.start, report.end)?;
    for (run, (_, slowdown)) in report.runs.iter().zip(report.slowdowns()) {
        writeln!(
            out,
            "   {:<4} {:>10}  {:>6} expanded  {}",
            run.algorithm.name(),
            format_duration(run.average),
            run.expanded,
            format_slowdown(slowdown)
        )?;
    }
    if let Some(shortest) = report.shortest() {
        writeln!(
            out,
            "   Shortest: {} ({} moves)",
            shortest.algorithm,
            shortest.moves().unwrap_or_default()
        )?;
    }
    writeln!(out)?;
    Ok(())
}
