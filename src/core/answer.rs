//! Answer generation
//!
//! Produces the secret tile sequence for a round. Seeded generation is the
//! backbone of the daily challenge: every player with the same date seed
//! must receive the same answer, so the draw order below is fixed.

use crate::core::rng::Mulberry32;
use crate::error::EngineError;
use crate::types::{Tile, ALPHABET_SIZE};

/// Generate the secret answer for a round
///
/// With duplicates disallowed, Fisher-Yates shuffles the full alphabet and
/// takes the first `length` tiles (uniform permutation prefix, no repeats).
/// With duplicates allowed, each slot is an independent uniform draw.
///
/// A `seed` makes the output fully deterministic; without one the generator
/// is seeded from OS entropy.
pub fn generate_answer(
    length: usize,
    allow_duplicates: bool,
    seed: Option<&str>,
) -> Result<Vec<Tile>, EngineError> {
    if length == 0 || (!allow_duplicates && length > ALPHABET_SIZE) {
        return Err(EngineError::InvalidConfiguration {
            length,
            alphabet: ALPHABET_SIZE,
        });
    }

    let mut rng = match seed {
        Some(s) => Mulberry32::from_seed_str(s),
        None => Mulberry32::from_entropy(),
    };

    if allow_duplicates {
        return Ok((0..length)
            .map(|_| Tile::ALL[rng.next_index(ALPHABET_SIZE)])
            .collect());
    }

    let mut alphabet = Tile::ALL;
    rng.shuffle(&mut alphabet);
    Ok(alphabet[..length].to_vec())
}
