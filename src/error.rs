//! Engine error types

use crate::types::GameMode;
use thiserror::Error;

/// Errors raised by the game-logic engine
///
/// Session actions never return these; malformed player input is a silent
/// no-op (the host pre-validates via disabled affordances). Errors surface
/// only from configuration-time calls: answer generation against an
/// incompatible mode, direct evaluator misuse, and unlock-graph validation.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EngineError {
    /// Answer generation is impossible for this mode configuration
    #[error("invalid configuration: cannot draw {length} distinct tiles from an alphabet of {alphabet}")]
    InvalidConfiguration { length: usize, alphabet: usize },

    /// Guess and answer sequences must have equal length
    #[error("guess length {guess} does not match answer length {answer}")]
    LengthMismatch { guess: usize, answer: usize },

    /// The unlock graph contains a prerequisite cycle
    #[error("unlock graph has a cycle through mode {0:?}")]
    CyclicUnlockGraph(GameMode),
}
