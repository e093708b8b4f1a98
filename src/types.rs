//! Core types shared across the engine
//! This module contains pure data types with no game logic attached

use serde::{Deserialize, Serialize};

/// Number of distinct tile symbols a player can choose from
pub const ALPHABET_SIZE: usize = 8;

/// Daily challenge history is capped to the most recent entries
pub const DAILY_HISTORY_LIMIT: usize = 30;

/// Tile symbols
///
/// Equality is by identifier only; presentation attributes (color, icon)
/// belong to the host and are keyed off `as_str`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tile {
    Star,
    Circle,
    Triangle,
    Square,
    Diamond,
    Spade,
    Heart,
    Club,
}

impl Tile {
    /// The full tile alphabet, in canonical order
    pub const ALL: [Tile; ALPHABET_SIZE] = [
        Tile::Star,
        Tile::Circle,
        Tile::Triangle,
        Tile::Square,
        Tile::Diamond,
        Tile::Spade,
        Tile::Heart,
        Tile::Club,
    ];

    /// Position of this tile within the canonical alphabet
    pub fn index(self) -> usize {
        self as usize
    }

    /// Parse tile from string (case-insensitive)
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "star" => Some(Tile::Star),
            "circle" => Some(Tile::Circle),
            "triangle" => Some(Tile::Triangle),
            "square" => Some(Tile::Square),
            "diamond" => Some(Tile::Diamond),
            "spade" => Some(Tile::Spade),
            "heart" => Some(Tile::Heart),
            "club" => Some(Tile::Club),
            _ => None,
        }
    }

    /// Convert to lowercase string
    pub fn as_str(&self) -> &'static str {
        match self {
            Tile::Star => "star",
            Tile::Circle => "circle",
            Tile::Triangle => "triangle",
            Tile::Square => "square",
            Tile::Diamond => "diamond",
            Tile::Spade => "spade",
            Tile::Heart => "heart",
            Tile::Club => "club",
        }
    }
}

/// Difficulty tiers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GameMode {
    Beginner,
    Normal,
    Hard,
    Expert,
    Master,
}

impl GameMode {
    /// Every mode, in unlock-table order
    pub const ALL: [GameMode; 5] = [
        GameMode::Beginner,
        GameMode::Normal,
        GameMode::Hard,
        GameMode::Expert,
        GameMode::Master,
    ];

    /// Parse mode from string (case-insensitive)
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "beginner" => Some(GameMode::Beginner),
            "normal" => Some(GameMode::Normal),
            "hard" => Some(GameMode::Hard),
            "expert" => Some(GameMode::Expert),
            "master" => Some(GameMode::Master),
            _ => None,
        }
    }

    /// Convert to lowercase string
    pub fn as_str(&self) -> &'static str {
        match self {
            GameMode::Beginner => "beginner",
            GameMode::Normal => "normal",
            GameMode::Hard => "hard",
            GameMode::Expert => "expert",
            GameMode::Master => "master",
        }
    }
}

/// How a round was started
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlayType {
    /// Player-chosen mode, fresh random answer
    Free,
    /// Fixed mode, answer seeded from the calendar date
    Daily,
}

impl PlayType {
    pub fn as_str(&self) -> &'static str {
        match self {
            PlayType::Free => "free",
            PlayType::Daily => "daily",
        }
    }
}

/// One submitted guess together with its evaluation
///
/// Appended to the session history at submission time and never mutated
/// afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GuessRecord {
    pub tiles: Vec<Tile>,
    pub hits: u32,
    pub blows: u32,
    /// Milliseconds since the Unix epoch
    pub timestamp: i64,
}

/// Terminal summary of one round, handed to the statistics sink
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameResult {
    pub mode: GameMode,
    pub play_type: PlayType,
    pub is_won: bool,
    pub attempts: u32,
    /// Milliseconds since the Unix epoch
    pub timestamp: i64,
}
