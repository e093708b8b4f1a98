//! Core module - pure game logic with no I/O
//!
//! Everything in here is a deterministic function of its inputs (plus the
//! PRNG state it is handed). Session bookkeeping lives in `crate::session`.

pub mod answer;
pub mod evaluate;
pub mod rng;
pub mod termination;

// Re-export commonly used items
pub use answer::generate_answer;
pub use evaluate::{check_guess, Score};
pub use rng::Mulberry32;
pub use termination::{is_game_finished, Outcome};
