//! Statistics aggregation
//!
//! Folds terminal game results into a versioned, serializable summary:
//! global and per-mode play/win counts, win rate, attempt averages, best
//! attempts, the unlocked mode set, and a capped daily-challenge history.
//! The record is a plain data shape; persisting it is the storage port's
//! job.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::modes::{ModeConfig, UnlockGraph};
use crate::types::{GameMode, GameResult, PlayType, DAILY_HISTORY_LIMIT};

/// Schema version written into every stats record
pub const STATS_VERSION: &str = "1.0";

/// Aggregates for a single mode
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ModeStats {
    pub plays: u32,
    pub wins: u32,
    /// Percentage in `[0, 100]`
    pub win_rate: f64,
    /// Mean attempts across won rounds only
    pub average_attempts: f64,
    /// Fewest attempts in any won round
    pub best_attempts: Option<u32>,
}

impl Default for ModeStats {
    fn default() -> Self {
        Self {
            plays: 0,
            wins: 0,
            win_rate: 0.0,
            average_attempts: 0.0,
            best_attempts: None,
        }
    }
}

/// One daily-challenge outcome
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyRecord {
    /// Calendar date, `YYYY-MM-DD`
    pub date: String,
    pub mode: GameMode,
    pub is_won: bool,
    pub attempts: u32,
}

/// Player statistics across all rounds
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Stats {
    pub version: String,
    pub total_plays: u32,
    pub total_wins: u32,
    pub win_rate: f64,
    pub average_attempts: f64,
    pub best_attempts: Option<u32>,
    pub mode_stats: HashMap<GameMode, ModeStats>,
    pub unlocked_modes: Vec<GameMode>,
    pub daily_history: Vec<DailyRecord>,
    /// RFC 3339 timestamp of the most recent recorded round
    pub last_played: String,
}

impl Default for Stats {
    fn default() -> Self {
        Self {
            version: STATS_VERSION.to_string(),
            total_plays: 0,
            total_wins: 0,
            win_rate: 0.0,
            average_attempts: 0.0,
            best_attempts: None,
            mode_stats: HashMap::new(),
            unlocked_modes: ModeConfig::default_unlocked(),
            daily_history: Vec::new(),
            last_played: String::new(),
        }
    }
}

fn fold_attempt_stats(
    wins_before: u32,
    average_before: f64,
    best_before: Option<u32>,
    is_won: bool,
    attempts: u32,
) -> (f64, Option<u32>) {
    if !is_won {
        return (average_before, best_before);
    }
    let wins_after = wins_before + 1;
    let average = (average_before * f64::from(wins_before) + f64::from(attempts))
        / f64::from(wins_after);
    let best = match best_before {
        Some(best) if best <= attempts => Some(best),
        _ => Some(attempts),
    };
    (average, best)
}

impl Stats {
    /// Fold one terminal result into the aggregates
    ///
    /// Wins additionally unlock every mode whose prerequisite in `graph`
    /// is the mode just won.
    pub fn record(&mut self, result: &GameResult, graph: &UnlockGraph) {
        let GameResult {
            mode,
            play_type,
            is_won,
            attempts,
            timestamp,
        } = *result;

        self.total_plays += 1;
        if is_won {
            self.total_wins += 1;
        }
        self.win_rate = f64::from(self.total_wins) / f64::from(self.total_plays) * 100.0;
        let (average, best) = fold_attempt_stats(
            self.total_wins.saturating_sub(u32::from(is_won)),
            self.average_attempts,
            self.best_attempts,
            is_won,
            attempts,
        );
        self.average_attempts = average;
        self.best_attempts = best;

        let per_mode = self.mode_stats.entry(mode).or_default();
        per_mode.plays += 1;
        if is_won {
            per_mode.wins += 1;
        }
        per_mode.win_rate = f64::from(per_mode.wins) / f64::from(per_mode.plays) * 100.0;
        let (average, best) = fold_attempt_stats(
            per_mode.wins.saturating_sub(u32::from(is_won)),
            per_mode.average_attempts,
            per_mode.best_attempts,
            is_won,
            attempts,
        );
        per_mode.average_attempts = average;
        per_mode.best_attempts = best;

        let played_at = DateTime::<Utc>::from_timestamp_millis(timestamp).unwrap_or_else(Utc::now);
        if play_type == PlayType::Daily {
            self.daily_history.push(DailyRecord {
                date: played_at.format("%Y-%m-%d").to_string(),
                mode,
                is_won,
                attempts,
            });
            if self.daily_history.len() > DAILY_HISTORY_LIMIT {
                let excess = self.daily_history.len() - DAILY_HISTORY_LIMIT;
                self.daily_history.drain(..excess);
            }
        }
        self.last_played = played_at.to_rfc3339();

        if is_won {
            for unlocked in graph.unlocked_by(mode) {
                self.unlock(unlocked);
            }
        }
        debug!(
            mode = mode.as_str(),
            is_won,
            total_plays = self.total_plays,
            "result recorded"
        );
    }

    /// Mark a mode as unlocked (idempotent)
    pub fn unlock(&mut self, mode: GameMode) {
        if !self.unlocked_modes.contains(&mode) {
            self.unlocked_modes.push(mode);
        }
    }

    pub fn is_unlocked(&self, mode: GameMode) -> bool {
        self.unlocked_modes.contains(&mode)
    }

    /// Migrate a raw persisted value to the current schema
    ///
    /// Only schema 1.0 exists; records with a missing or unknown version
    /// tag are read as 1.0, and unparseable data falls back to defaults
    /// rather than failing the load. New versions add their upgrade steps
    /// here.
    pub fn migrate(raw: serde_json::Value) -> Stats {
        serde_json::from_value(raw).unwrap_or_default()
    }
}
