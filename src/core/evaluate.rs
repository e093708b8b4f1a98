//! Guess evaluation - hit and blow scoring
//!
//! A hit is a tile matching the answer at the same position. A blow is a
//! tile present in the answer at a different position, counted with
//! multiplicity: positions already scored as hits are removed from both
//! sides, then each tile contributes `min(count in answer, count in guess)`.

use crate::error::EngineError;
use crate::types::{Tile, ALPHABET_SIZE};

/// Evaluation of one guess against the answer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Score {
    pub hits: u32,
    pub blows: u32,
}

/// Score a guess against the answer
///
/// Errors if the sequences have different lengths; the session never
/// submits such a guess.
pub fn check_guess(guess: &[Tile], answer: &[Tile]) -> Result<Score, EngineError> {
    if guess.len() != answer.len() {
        return Err(EngineError::LengthMismatch {
            guess: guess.len(),
            answer: answer.len(),
        });
    }

    let mut hits = 0u32;
    let mut answer_counts = [0u32; ALPHABET_SIZE];
    let mut guess_counts = [0u32; ALPHABET_SIZE];

    for (g, a) in guess.iter().zip(answer) {
        if g == a {
            hits += 1;
        } else {
            // Non-hit positions feed the blow multisets
            answer_counts[a.index()] += 1;
            guess_counts[g.index()] += 1;
        }
    }

    let blows = answer_counts
        .iter()
        .zip(&guess_counts)
        .map(|(a, g)| a.min(g))
        .sum();

    Ok(Score { hits, blows })
}
