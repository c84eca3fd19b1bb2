//! Error types
//!
//! Configuration problems are detected when levels are loaded or a level is
//! started. The per-tick simulation has no failure path.

use thiserror::Error;

/// Invalid authored data or tuning, fatal to starting the affected level
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("level {level}: {part} has invalid dimensions {w}x{h}")]
    InvalidRect {
        level: u32,
        part: String,
        w: f32,
        h: f32,
    },

    #[error("level {level}: hazard {index} has invalid {field} ({value})")]
    InvalidHazard {
        level: u32,
        index: usize,
        field: &'static str,
        value: f32,
    },

    #[error("level {level}: coin {index} has a non-finite position")]
    InvalidCoin { level: u32, index: usize },

    #[error("level {level}: spawn point ({x}, {y}) {reason}")]
    InvalidSpawn {
        level: u32,
        x: f32,
        y: f32,
        reason: &'static str,
    },

    #[error("level table is empty")]
    EmptyLevelTable,

    #[error("level index {index} out of range (table has {count} levels)")]
    LevelIndexOutOfRange { index: usize, count: usize },

    #[error("invalid sim config: {0}")]
    InvalidSimConfig(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Host-level misuse of the session controller
#[derive(Debug, Error)]
pub enum SessionError {
    #[error("no game in progress to resume")]
    NoGameInProgress,

    #[error(transparent)]
    Config(#[from] ConfigError),
}
