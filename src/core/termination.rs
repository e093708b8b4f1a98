//! Game termination detection
//!
//! A round ends won when the latest submission scores a perfect hit, or
//! lost when the attempt budget is exhausted without one. Only the most
//! recently appended record is inspected: a win can only be detected on
//! the submission that achieves it, and the history is append-only, so a
//! scan over earlier records would never change the answer.

use crate::types::GuessRecord;

/// Result of the termination check
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Outcome {
    pub is_finished: bool,
    pub is_won: bool,
}

/// Decide whether the round has ended, from the guess history
///
/// The win check takes priority over attempt exhaustion: a perfect guess
/// on the final attempt is a win, not a loss.
pub fn is_game_finished(
    guesses: &[GuessRecord],
    max_attempts: u32,
    answer_length: usize,
) -> Outcome {
    let Some(last) = guesses.last() else {
        return Outcome::default();
    };

    if last.hits as usize == answer_length {
        return Outcome {
            is_finished: true,
            is_won: true,
        };
    }

    if guesses.len() as u32 >= max_attempts {
        return Outcome {
            is_finished: true,
            is_won: false,
        };
    }

    Outcome::default()
}
