//! Mode configuration table and unlock graph
//!
//! Five difficulty tiers fix the answer length, duplicate policy, and
//! attempt budget. Expert and master are gated behind wins in earlier
//! modes; the gating is modeled as an explicit directed graph (mode ->
//! prerequisite) so unlock-chain validation and cycle detection can be
//! tested in isolation.

use crate::error::EngineError;
use crate::types::{GameMode, ALPHABET_SIZE};

/// Immutable description of one difficulty tier
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModeConfig {
    pub mode: GameMode,
    /// Number of tile slots in the answer
    pub length: usize,
    /// Whether the same tile may occupy multiple slots
    pub allow_duplicates: bool,
    /// Cap on submitted guesses per round
    pub max_attempts: u32,
    /// Mode that must be won before this one unlocks
    pub unlock_condition: Option<GameMode>,
}

/// The fixed difficulty table
pub const MODE_TABLE: [ModeConfig; 5] = [
    ModeConfig {
        mode: GameMode::Beginner,
        length: 3,
        allow_duplicates: false,
        max_attempts: 6,
        unlock_condition: None,
    },
    ModeConfig {
        mode: GameMode::Normal,
        length: 4,
        allow_duplicates: false,
        max_attempts: 8,
        unlock_condition: None,
    },
    ModeConfig {
        mode: GameMode::Hard,
        length: 4,
        allow_duplicates: true,
        max_attempts: 10,
        unlock_condition: None,
    },
    ModeConfig {
        mode: GameMode::Expert,
        length: 8,
        allow_duplicates: false,
        max_attempts: 12,
        unlock_condition: Some(GameMode::Normal),
    },
    ModeConfig {
        mode: GameMode::Master,
        length: 8,
        allow_duplicates: true,
        max_attempts: 15,
        unlock_condition: Some(GameMode::Expert),
    },
];

impl ModeConfig {
    /// Look up the configuration for a mode
    pub fn of(mode: GameMode) -> &'static ModeConfig {
        // MODE_TABLE is ordered like GameMode::ALL
        &MODE_TABLE[mode as usize]
    }

    /// Check this configuration is playable against the tile alphabet
    pub fn validate(&self) -> Result<(), EngineError> {
        if self.length == 0
            || self.max_attempts == 0
            || (!self.allow_duplicates && self.length > ALPHABET_SIZE)
        {
            return Err(EngineError::InvalidConfiguration {
                length: self.length,
                alphabet: ALPHABET_SIZE,
            });
        }
        Ok(())
    }

    /// Modes unlocked from the start
    pub fn default_unlocked() -> Vec<GameMode> {
        MODE_TABLE
            .iter()
            .filter(|config| config.unlock_condition.is_none())
            .map(|config| config.mode)
            .collect()
    }
}

/// Directed graph of unlock prerequisites (mode -> prerequisite)
///
/// The observed table is a linear chain, but nothing here assumes a single
/// predecessor per mode.
#[derive(Debug, Clone)]
pub struct UnlockGraph {
    edges: Vec<(GameMode, GameMode)>,
}

impl UnlockGraph {
    /// Build the graph from the fixed mode table
    pub fn from_table() -> Self {
        let edges = MODE_TABLE
            .iter()
            .filter_map(|config| config.unlock_condition.map(|pre| (config.mode, pre)))
            .collect();
        Self { edges }
    }

    /// Build a graph from explicit edges (used by validation tests)
    pub fn new(edges: Vec<(GameMode, GameMode)>) -> Self {
        Self { edges }
    }

    /// Prerequisites that must be won before `mode` unlocks
    pub fn prerequisites(&self, mode: GameMode) -> Vec<GameMode> {
        self.edges
            .iter()
            .filter(|(m, _)| *m == mode)
            .map(|(_, pre)| *pre)
            .collect()
    }

    /// Modes whose unlock condition is satisfied by winning `won`
    pub fn unlocked_by(&self, won: GameMode) -> Vec<GameMode> {
        self.edges
            .iter()
            .filter(|(_, pre)| *pre == won)
            .map(|(m, _)| *m)
            .collect()
    }

    /// Verify the prerequisite graph is acyclic
    ///
    /// Walks every mode's prerequisite closure; revisiting a mode already
    /// on the current path is a cycle.
    pub fn validate(&self) -> Result<(), EngineError> {
        for start in GameMode::ALL {
            let mut path = Vec::new();
            self.walk(start, &mut path)?;
        }
        Ok(())
    }

    fn walk(&self, mode: GameMode, path: &mut Vec<GameMode>) -> Result<(), EngineError> {
        if path.contains(&mode) {
            return Err(EngineError::CyclicUnlockGraph(mode));
        }
        path.push(mode);
        for pre in self.prerequisites(mode) {
            self.walk(pre, path)?;
        }
        path.pop();
        Ok(())
    }
}
