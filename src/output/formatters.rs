//! Formatting utilities for terminal output

use crate::commands::Slowdown;
use crate::core::Word;
use crate::game::{Hint, ModeConfig, PERFECT_SCORE};
use std::time::Duration;

/// Join words with arrows, the way ladders are shown everywhere
#[must_use]
pub fn format_words<'a>(words: impl IntoIterator<Item = &'a Word>) -> String {
    words
        .into_iter()
        .map(Word::text)
        .collect::<Vec<_>>()
        .join(" → ")
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max).max(0.0) * width as f64) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Score as a bar out of ten
#[must_use]
pub fn score_bar(score: f64, width: usize) -> String {
    create_progress_bar(score, PERFECT_SCORE, width)
}

/// Human-scale duration with a unit suited to its size
#[must_use]
pub fn format_duration(duration: Duration) -> String {
    let secs = duration.as_secs_f64();
    if secs >= 1.0 {
        format!("{secs:.2} s")
    } else if secs >= 1e-3 {
        format!("{:.2} ms", secs * 1e3)
    } else {
        format!("{:.1} µs", secs * 1e6)
    }
}

#[must_use]
pub fn format_slowdown(slowdown: Slowdown) -> String {
    match slowdown {
        Slowdown::Baseline => "fastest".to_string(),
        Slowdown::Percent(percent) => format!("{percent:.1}% slower"),
        Slowdown::BelowResolution => "too fast to compare".to_string(),
    }
}

#[must_use]
pub fn format_hint(hint: &Hint) -> String {
    match hint {
        Hint::Next(word) => format!("Try '{word}'"),
        Hint::AtGoal => "You are already at the end word".to_string(),
        Hint::Unreachable => "No ladder leads from here to the end word".to_string(),
    }
}

/// Challenge restrictions in one line, `None` outside Challenge
#[must_use]
pub fn format_restrictions(config: &ModeConfig) -> Option<String> {
    if config.banned_words().is_empty() && config.restricted_letters().is_empty() {
        return None;
    }
    let banned = format_list(config.banned_words().iter().map(Word::text));
    let letters = format_list(config.restricted_letters().iter().map(char::to_string));
    Some(format!("Banned words: {banned} | Restricted letters: {letters}"))
}

fn format_list<S: AsRef<str>>(items: impl Iterator<Item = S>) -> String {
    let items: Vec<S> = items.collect();
    if items.is_empty() {
        return "none".to_string();
    }
    items
        .iter()
        .map(AsRef::as_ref)
        .collect::<Vec<&str>>()
        .join(", ")
}
