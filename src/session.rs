//! Session module - owns the mutable state of one round
//!
//! The session sequences the pure core functions (answer generation,
//! evaluation, termination) in response to player actions. Every action is
//! a synchronous, total state transition: malformed input is a silent
//! no-op, mirroring the host UI where such actions are disabled. Only
//! `submit_guess` can end the round.

use std::fmt;
use std::mem;

use chrono::Utc;
use tracing::{debug, info};

use crate::core::{check_guess, generate_answer, is_game_finished};
use crate::error::EngineError;
use crate::modes::ModeConfig;
use crate::types::{GameMode, GameResult, GuessRecord, PlayType, Tile};

/// Receives the terminal summary of a round
///
/// Subscribers are registered on the session explicitly; there is no
/// global registry. Notification fires exactly once per round, on the
/// transition into game over.
pub trait SessionObserver {
    fn on_game_over(&mut self, result: &GameResult);
}

/// One round of Hit and Blow
pub struct GameSession {
    mode: GameMode,
    play_type: PlayType,
    config: &'static ModeConfig,
    answer: Vec<Tile>,
    guesses: Vec<GuessRecord>,
    current_guess: Vec<Tile>,
    is_game_over: bool,
    is_won: bool,
    result_emitted: bool,
    observers: Vec<Box<dyn SessionObserver>>,
}

impl GameSession {
    /// Start a round
    ///
    /// Daily play always runs the normal mode configuration regardless of
    /// the requested mode; the caller supplies the date-derived seed. Free
    /// play ignores `seed` being `None` and draws a fresh random answer.
    pub fn new(
        mode: GameMode,
        play_type: PlayType,
        seed: Option<&str>,
    ) -> Result<Self, EngineError> {
        let effective = match play_type {
            PlayType::Daily => GameMode::Normal,
            PlayType::Free => mode,
        };
        let config = ModeConfig::of(effective);
        config.validate()?;

        let answer = generate_answer(config.length, config.allow_duplicates, seed)?;
        info!(
            mode = effective.as_str(),
            play_type = play_type.as_str(),
            seeded = seed.is_some(),
            "round started"
        );

        Ok(Self {
            mode: effective,
            play_type,
            config,
            answer,
            guesses: Vec::new(),
            current_guess: Vec::new(),
            is_game_over: false,
            is_won: false,
            result_emitted: false,
            observers: Vec::new(),
        })
    }

    /// Register an observer for the end-of-round result
    pub fn subscribe(&mut self, observer: Box<dyn SessionObserver>) {
        self.observers.push(observer);
    }

    pub fn mode(&self) -> GameMode {
        self.mode
    }

    pub fn play_type(&self) -> PlayType {
        self.play_type
    }

    pub fn answer(&self) -> &[Tile] {
        &self.answer
    }

    pub fn guesses(&self) -> &[GuessRecord] {
        &self.guesses
    }

    pub fn current_guess(&self) -> &[Tile] {
        &self.current_guess
    }

    pub fn attempts(&self) -> u32 {
        self.guesses.len() as u32
    }

    pub fn max_attempts(&self) -> u32 {
        self.config.max_attempts
    }

    pub fn answer_length(&self) -> usize {
        self.config.length
    }

    pub fn is_game_over(&self) -> bool {
        self.is_game_over
    }

    /// Only meaningful once `is_game_over` is true
    pub fn is_won(&self) -> bool {
        self.is_won
    }

    /// Append a tile to the in-progress guess
    ///
    /// No-op when the guess is already full, or when the tile is already
    /// placed and the mode disallows duplicates.
    pub fn add_tile(&mut self, tile: Tile) {
        if self.current_guess.len() >= self.config.length {
            return;
        }
        if !self.config.allow_duplicates && self.current_guess.contains(&tile) {
            return;
        }
        self.current_guess.push(tile);
    }

    /// Remove the tile at `index` from the in-progress guess
    ///
    /// Out-of-range indices are ignored.
    pub fn remove_tile(&mut self, index: usize) {
        if index < self.current_guess.len() {
            self.current_guess.remove(index);
        }
    }

    /// Clear the in-progress guess
    pub fn reset_current_guess(&mut self) {
        self.current_guess.clear();
    }

    /// Submit the in-progress guess for evaluation
    ///
    /// No-op unless the guess is exactly `length` tiles and the round is
    /// still live. On success the scored record is appended to history,
    /// the in-progress guess is cleared, and the termination check runs.
    pub fn submit_guess(&mut self) {
        if self.is_game_over || self.current_guess.len() != self.config.length {
            return;
        }

        let Ok(score) = check_guess(&self.current_guess, &self.answer) else {
            return;
        };

        let record = GuessRecord {
            tiles: mem::take(&mut self.current_guess),
            hits: score.hits,
            blows: score.blows,
            timestamp: Utc::now().timestamp_millis(),
        };
        debug!(
            attempt = self.guesses.len() + 1,
            hits = score.hits,
            blows = score.blows,
            "guess submitted"
        );
        self.guesses.push(record);

        let outcome = is_game_finished(&self.guesses, self.config.max_attempts, self.config.length);
        if outcome.is_finished {
            self.is_game_over = true;
            self.is_won = outcome.is_won;
            info!(
                mode = self.mode.as_str(),
                is_won = outcome.is_won,
                attempts = self.guesses.len(),
                "round over"
            );
            let result = self.build_result();
            for observer in &mut self.observers {
                observer.on_game_over(&result);
            }
        }
    }

    /// Take the terminal result, at most once per round
    ///
    /// Returns `None` while the round is live and on every call after the
    /// first successful one, so re-rendering hosts cannot double-record.
    pub fn take_result(&mut self) -> Option<GameResult> {
        if !self.is_game_over || self.result_emitted {
            return None;
        }
        self.result_emitted = true;
        Some(self.build_result())
    }

    /// Discard all round state and draw a fresh answer
    ///
    /// Daily play passes the (unchanged or new) date seed; free play
    /// passes `None`.
    pub fn reset_game(&mut self, seed: Option<&str>) -> Result<(), EngineError> {
        self.answer = generate_answer(self.config.length, self.config.allow_duplicates, seed)?;
        self.guesses.clear();
        self.current_guess.clear();
        self.is_game_over = false;
        self.is_won = false;
        self.result_emitted = false;
        info!(mode = self.mode.as_str(), "round reset");
        Ok(())
    }

    fn build_result(&self) -> GameResult {
        // Timestamp of the terminal guess, falling back to now for safety
        let timestamp = self
            .guesses
            .last()
            .map(|record| record.timestamp)
            .unwrap_or_else(|| Utc::now().timestamp_millis());
        GameResult {
            mode: self.mode,
            play_type: self.play_type,
            is_won: self.is_won,
            attempts: self.guesses.len() as u32,
            timestamp,
        }
    }
}

impl fmt::Debug for GameSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GameSession")
            .field("mode", &self.mode)
            .field("play_type", &self.play_type)
            .field("attempts", &self.guesses.len())
            .field("current_guess", &self.current_guess)
            .field("is_game_over", &self.is_game_over)
            .field("is_won", &self.is_won)
            .field("observers", &self.observers.len())
            .finish()
    }
}
