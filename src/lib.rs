//! Hit and Blow - tile deduction game engine
//!
//! The engine covers answer generation (seeded or random), hit/blow guess
//! evaluation, termination detection, and the session orchestrator that
//! composes them into one round. Rendering, persistence backends, and
//! date-of-today handling belong to the host; they talk to the engine
//! through the plain data records in `types` and the ports in `storage`.

pub mod core;
pub mod daily;
pub mod error;
pub mod modes;
pub mod session;
pub mod stats;
pub mod storage;
pub mod types;

pub use crate::core::{check_guess, generate_answer, is_game_finished, Mulberry32, Outcome, Score};
pub use crate::error::EngineError;
pub use crate::modes::{ModeConfig, UnlockGraph, MODE_TABLE};
pub use crate::session::{GameSession, SessionObserver};
pub use crate::stats::{DailyRecord, ModeStats, Stats};
pub use crate::storage::{load_stats, MemoryStore, Store, StoreError};
pub use crate::types::{GameMode, GameResult, GuessRecord, PlayType, Tile};
