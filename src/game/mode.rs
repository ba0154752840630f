//! Game modes and per-game configuration

use crate::core::Word;
use crate::dictionary::Dictionary;
use crate::error::LadderError;
use crate::solver::ALPHABET;
use rand::Rng;
use rand::seq::IndexedRandom;
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;
use tracing::debug;

/// Words banned from play in Challenge mode
pub const BANNED_WORD_COUNT: usize = 5;

/// Letters that may not be used in Challenge mode
pub const RESTRICTED_LETTER_COUNT: usize = 3;

/// Tries allowed beyond the optimal ladder
pub const EXTRA_TRIES: usize = 3;

/// Difficulty level
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum GameMode {
    #[default]
    Beginner,
    Advanced,
    Challenge,
}

/// Fixed parameters of a game mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModeSettings {
    pub word_length: usize,
    pub baseline_tries: usize,
    /// Smallest acceptable ladder for a random puzzle, counting both endpoints
    pub min_ladder_words: usize,
    /// Known-solvable pair used when random selection gives up
    pub fallback_pair: (&'static str, &'static str),
}

impl GameMode {
    pub const ALL: [Self; 3] = [Self::Beginner, Self::Advanced, Self::Challenge];

    #[must_use]
    pub const fn settings(self) -> ModeSettings {
        match self {
            Self::Beginner => ModeSettings {
                word_length: 3,
                baseline_tries: 5,
                min_ladder_words: 3,
                fallback_pair: ("cat", "dog"),
            },
            Self::Advanced => ModeSettings {
                word_length: 5,
                baseline_tries: 8,
                min_ladder_words: 4,
                fallback_pair: ("stone", "smart"),
            },
            Self::Challenge => ModeSettings {
                word_length: 5,
                baseline_tries: 10,
                min_ladder_words: 4,
                fallback_pair: ("stone", "shark"),
            },
        }
    }

    #[must_use]
    pub const fn word_length(self) -> usize {
        self.settings().word_length
    }

    #[must_use]
    pub const fn min_ladder_words(self) -> usize {
        self.settings().min_ladder_words
    }

    /// Upper bound on a session's try budget
    #[must_use]
    pub const fn try_ceiling(self) -> usize {
        self.settings().baseline_tries + EXTRA_TRIES
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Beginner => "Beginner",
            Self::Advanced => "Advanced",
            Self::Challenge => "Challenge",
        }
    }
}

impl FromStr for GameMode {
    type Err = LadderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "beginner" => Ok(Self::Beginner),
            "advanced" => Ok(Self::Advanced),
            "challenge" => Ok(Self::Challenge),
            _ => Err(LadderError::UnknownMode(s.to_string())),
        }
    }
}

impl fmt::Display for GameMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Dictionary and restrictions in force for one game
#[derive(Debug, Clone)]
pub struct ModeConfig {
    mode: GameMode,
    active: Dictionary,
    playable: Dictionary,
    banned_words: BTreeSet<Word>,
    restricted_letters: BTreeSet<char>,
}

impl ModeConfig {
    /// Configuration without restrictions, filtered to the mode's word length
    #[must_use]
    pub fn new(mode: GameMode, dictionary: &Dictionary) -> Self {
        Self::from_active(
            mode,
            dictionary.with_length(mode.word_length()),
            BTreeSet::new(),
            BTreeSet::new(),
        )
    }

    /// Challenge configuration with explicit banned words and restricted letters
    #[must_use]
    pub fn challenge(
        dictionary: &Dictionary,
        banned_words: impl IntoIterator<Item = Word>,
        restricted_letters: impl IntoIterator<Item = char>,
    ) -> Self {
        let mode = GameMode::Challenge;
        Self::from_active(
            mode,
            dictionary.with_length(mode.word_length()),
            banned_words.into_iter().collect(),
            restricted_letters
                .into_iter()
                .map(|c| c.to_ascii_lowercase())
                .collect(),
        )
    }

    /// The same restrictions over this dictionary plus the built-in words of the mode's
    /// length, which always hold the mode's fallback ladder
    #[must_use]
    pub fn with_builtin_words(&self) -> Self {
        let mut filtered = Dictionary::builtin().with_length(self.mode.word_length());
        filtered.extend(self.active.iter().cloned());
        Self::from_active(
            self.mode,
            filtered,
            self.banned_words.clone(),
            self.restricted_letters.clone(),
        )
    }

    fn from_active(
        mode: GameMode,
        filtered: Dictionary,
        banned_words: BTreeSet<Word>,
        restricted_letters: BTreeSet<char>,
    ) -> Self {
        let active = filtered.filtered(|w| !banned_words.contains(w));
        let playable = active.filtered(|w| !w.text().chars().any(|c| restricted_letters.contains(&c)));
        Self {
            mode,
            active,
            playable,
            banned_words,
            restricted_letters,
        }
    }

    #[must_use]
    pub const fn mode(&self) -> GameMode {
        self.mode
    }

    /// Words of the mode's length, minus banned words
    #[must_use]
    pub const fn active_dictionary(&self) -> &Dictionary {
        &self.active
    }

    /// Active words that avoid every restricted letter
    ///
    /// Puzzles, optimal ladders and hints come from here, so everything the game
    /// suggests can actually be submitted.
    #[must_use]
    pub const fn playable_dictionary(&self) -> &Dictionary {
        &self.playable
    }

    #[must_use]
    pub const fn banned_words(&self) -> &BTreeSet<Word> {
        &self.banned_words
    }

    #[must_use]
    pub const fn restricted_letters(&self) -> &BTreeSet<char> {
        &self.restricted_letters
    }

    #[must_use]
    pub fn is_banned(&self, word: &str) -> bool {
        self.banned_words.contains(word)
    }

    /// First restricted letter used by `word`, if any
    #[must_use]
    pub fn restricted_letter_in(&self, word: &str) -> Option<char> {
        word.chars().find(|c| self.restricted_letters.contains(c))
    }
}

/// Build the configuration for a new game in `mode`
///
/// Challenge mode draws its banned words from the sorted length-filtered list and its
/// restricted letters from a to z, so a seeded `rng` always yields the same game.
///
/// # Errors
/// Returns `LadderError::EmptyDictionary` if the dictionary has no words of the mode's
/// length.
pub fn configure_mode<R: Rng + ?Sized>(
    mode: GameMode,
    dictionary: &Dictionary,
    rng: &mut R,
) -> Result<ModeConfig, LadderError> {
    let length = mode.word_length();
    if dictionary.count_of_length(length) == 0 {
        return Err(LadderError::EmptyDictionary { length });
    }
    let filtered = dictionary.with_length(length);

    if mode != GameMode::Challenge {
        return Ok(ModeConfig::from_active(
            mode,
            filtered,
            BTreeSet::new(),
            BTreeSet::new(),
        ));
    }

    let banned_words: BTreeSet<Word> = filtered
        .sorted_words()
        .choose_multiple(rng, BANNED_WORD_COUNT)
        .map(|&w| w.clone())
        .collect();
    let restricted_letters: BTreeSet<char> = ALPHABET
        .choose_multiple(rng, RESTRICTED_LETTER_COUNT)
        .map(|&b| char::from(b))
        .collect();

    debug!(
        banned = ?banned_words.iter().map(Word::text).collect::<Vec<_>>(),
        restricted = ?restricted_letters,
        "Configured challenge restrictions"
    );

    Ok(ModeConfig::from_active(
        mode,
        filtered,
        banned_words,
        restricted_letters,
    ))
}
