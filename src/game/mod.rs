//! Game rules
//!
//! Modes, puzzle selection, the move validator and scoring, plus [`Game`], which ties
//! them together for the front-ends.

mod mode;
mod pair;
mod score;
mod session;

pub use mode::{
    BANNED_WORD_COUNT, EXTRA_TRIES, GameMode, ModeConfig, ModeSettings, RESTRICTED_LETTER_COUNT,
    configure_mode,
};
pub use pair::{MAX_PAIR_ATTEMPTS, WordPair, load_word_pair, select_pair};
pub use score::{BUDGET_SCORE, PERFECT_SCORE, calculate_score};
pub use session::{
    Hint, HintPolicy, InvalidMove, MoveOutcome, Session, SessionStatus, max_tries_for,
};

use crate::dictionary::Dictionary;
use crate::error::LadderError;
use crate::solver::Algorithm;
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::{debug, warn};

/// Fresh Challenge draws tried when restrictions leave the pair unsolvable
pub const MAX_SESSION_ATTEMPTS: usize = 10;

/// Settings chosen by the player
#[derive(Debug, Clone, Default)]
pub struct GameOptions {
    pub mode: GameMode,
    pub algorithm: Algorithm,
    pub hint_policy: HintPolicy,
    /// Seed for reproducible games; entropy from the OS otherwise
    pub seed: Option<u64>,
    /// Play this pair instead of a random one
    pub fixed_pair: Option<WordPair>,
}

/// Owns the dictionary and random source and hands out sessions
pub struct Game {
    dictionary: Dictionary,
    options: GameOptions,
    rng: StdRng,
}

impl Game {
    #[must_use]
    pub fn new(dictionary: Dictionary, options: GameOptions) -> Self {
        let rng = options
            .seed
            .map_or_else(StdRng::from_os_rng, StdRng::seed_from_u64);
        Self {
            dictionary,
            options,
            rng,
        }
    }

    #[must_use]
    pub const fn dictionary(&self) -> &Dictionary {
        &self.dictionary
    }

    #[must_use]
    pub const fn mode(&self) -> GameMode {
        self.options.mode
    }

    #[must_use]
    pub const fn algorithm(&self) -> Algorithm {
        self.options.algorithm
    }

    #[must_use]
    pub const fn hint_policy(&self) -> HintPolicy {
        self.options.hint_policy
    }

    /// Switch mode; takes effect from the next session
    pub fn set_mode(&mut self, mode: GameMode) {
        self.options.mode = mode;
    }

    /// Configure the current mode with this game's random source
    ///
    /// # Errors
    /// See [`configure_mode`].
    pub fn configure(&mut self) -> Result<ModeConfig, LadderError> {
        configure_mode(self.options.mode, &self.dictionary, &mut self.rng)
    }

    /// A random solvable pair for the current mode
    ///
    /// Falls back to the mode's fixed pair when the dictionary is too small to draw from.
    /// The fallback pair comes with the built-in words of the mode's length merged into
    /// its configuration, since the fixed ladder is only guaranteed to exist there.
    ///
    /// # Errors
    /// See [`configure_mode`].
    pub fn random_pair(&mut self) -> Result<(WordPair, ModeConfig), LadderError> {
        let config = self.configure()?;
        let fallback = WordPair::fallback(config.mode());
        let pair = match select_pair(&config, self.options.algorithm, &mut self.rng) {
            Ok(pair) => pair,
            Err(err @ LadderError::InsufficientDictionary { .. }) => {
                warn!(error = %err, "Using fallback pair");
                fallback.clone()
            }
            Err(err) => return Err(err),
        };

        if pair == fallback {
            Ok((pair, config.with_builtin_words()))
        } else {
            Ok((pair, config))
        }
    }

    /// Start a new session
    ///
    /// A fixed pair is used when it is playable in the current mode and its words differ.
    /// Challenge mode
    /// redraws its restrictions up to [`MAX_SESSION_ATTEMPTS`] times when they cut
    /// the chosen pair off.
    ///
    /// # Errors
    /// Returns `LadderError::EmptyDictionary` when the mode has no words.
    pub fn new_session(&mut self) -> Result<Session, LadderError> {
        let algorithm = self.options.algorithm;

        if let Some(pair) = self.options.fixed_pair.clone()
            && pair.start != pair.end
        {
            let config = self.configure()?;
            match Session::start(pair, config, algorithm) {
                Ok(session) => return Ok(session),
                Err(err) => warn!(error = %err, "Fixed word pair is not playable, choosing another"),
            }
        }

        for attempt in 1..=MAX_SESSION_ATTEMPTS {
            let (pair, config) = self.random_pair()?;
            match Session::start(pair, config, algorithm) {
                Ok(session) => return Ok(session),
                Err(err) if self.options.mode == GameMode::Challenge => {
                    debug!(attempt, error = %err, "Redrawing challenge restrictions");
                }
                Err(err) => {
                    warn!(error = %err, "Random pair is not playable");
                    break;
                }
            }
        }

        self.fallback_session()
    }

    /// The mode's fallback pair over the built-in words, without Challenge restrictions
    fn fallback_session(&self) -> Result<Session, LadderError> {
        let mode = self.options.mode;
        let pair = WordPair::fallback(mode);
        warn!(%pair, "Starting the fallback puzzle");
        let config = ModeConfig::new(mode, &self.dictionary).with_builtin_words();
        Session::start(pair, config, self.options.algorithm)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::fixtures::small_dictionary;

    fn seeded(mode: GameMode, seed: u64) -> GameOptions {
        GameOptions {
            mode,
            seed: Some(seed),
            ..GameOptions::default()
        }
    }

    #[test]
    fn default_options() {
        let options = GameOptions::default();
        assert_eq!(options.mode, GameMode::Beginner);
        assert_eq!(options.algorithm, Algorithm::AStar);
        assert_eq!(options.hint_policy, HintPolicy::FromStart);
    }

    #[test]
    fn new_session_starts_a_playable_puzzle() {
        let mut game = Game::new(small_dictionary(), seeded(GameMode::Beginner, 1));
        let session = game.new_session().unwrap();
        assert_eq!(session.mode(), GameMode::Beginner);
        assert!(session.min_tries() >= 2);
        assert!(session.max_tries() <= GameMode::Beginner.try_ceiling());
    }

    #[test]
    fn seeded_games_repeat() {
        let mut first = Game::new(Dictionary::builtin(), seeded(GameMode::Advanced, 99));
        let mut second = Game::new(Dictionary::builtin(), seeded(GameMode::Advanced, 99));
        assert_eq!(first.new_session().unwrap().pair(), second.new_session().unwrap().pair());
    }

    #[test]
    fn fixed_pair_is_used_when_playable() {
        let options = GameOptions {
            fixed_pair: Some(WordPair::new("hit", "dog").unwrap()),
            ..seeded(GameMode::Beginner, 3)
        };
        let mut game = Game::new(small_dictionary(), options);
        let session = game.new_session().unwrap();
        assert_eq!(session.pair().to_string(), "hit → dog");
    }

    #[test]
    fn unplayable_fixed_pair_is_replaced() {
        let options = GameOptions {
            fixed_pair: Some(WordPair::new("stone", "shark").unwrap()),
            ..seeded(GameMode::Beginner, 3)
        };
        let mut game = Game::new(small_dictionary(), options);
        let session = game.new_session().unwrap();
        assert_eq!(session.start_word().len(), 3);
    }

    #[test]
    fn fixed_pair_with_equal_words_is_replaced() {
        let options = GameOptions {
            fixed_pair: Some(WordPair::new("cat", "cat").unwrap()),
            ..seeded(GameMode::Beginner, 3)
        };
        let mut game = Game::new(small_dictionary(), options);
        let session = game.new_session().unwrap();
        assert_ne!(session.start_word(), session.end_word());
        assert!(!session.is_won());
    }

    #[test]
    fn tiny_dictionary_gets_the_fallback_puzzle() {
        let dictionary = Dictionary::from_words(["cat", "stone", "shone", "shore"]);

        for mode in [GameMode::Beginner, GameMode::Advanced, GameMode::Challenge] {
            let mut game = Game::new(dictionary.clone(), seeded(mode, 1));
            let session = game.new_session().unwrap();
            assert_eq!(session.pair(), &WordPair::fallback(mode), "{mode}");
            assert!(session.optimal_ladder().is_within(session.config().playable_dictionary()));
            assert!(session.optimal_ladder().len() >= mode.min_ladder_words());
            assert_eq!(session.status(), SessionStatus::InProgress);
        }
    }

    #[test]
    fn fallback_puzzle_drops_challenge_restrictions_that_block_it() {
        let dictionary = Dictionary::from_words(["stone", "shone", "shore"]);
        let mut game = Game::new(dictionary, seeded(GameMode::Challenge, 5));
        let session = game.new_session().unwrap();
        assert_eq!(session.pair(), &WordPair::fallback(GameMode::Challenge));
        for word in session.optimal_ladder() {
            assert!(!session.config().is_banned(word.text()));
            assert_eq!(session.config().restricted_letter_in(word.text()), None);
        }
    }

    #[test]
    fn challenge_sessions_avoid_restrictions() {
        let mut game = Game::new(Dictionary::builtin(), seeded(GameMode::Challenge, 8));
        let session = game.new_session().unwrap();
        let config = session.config();
        assert_eq!(config.banned_words().len(), BANNED_WORD_COUNT);
        for word in session.optimal_ladder() {
            assert!(!config.is_banned(word.text()));
            assert_eq!(config.restricted_letter_in(word.text()), None);
        }
    }

    #[test]
    fn mode_without_words_is_fatal() {
        let mut game = Game::new(small_dictionary(), seeded(GameMode::Advanced, 1));
        assert!(matches!(
            game.new_session(),
            Err(LadderError::EmptyDictionary { length: 5 })
        ));
    }
}
