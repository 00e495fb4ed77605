//! Error types for the Color Wars engine
//!
//! Budget exhaustion is never an error: the search degrades to a fallback
//! move. These types cover the conditions a caller must react to.

use std::path::PathBuf;

use thiserror::Error;

use crate::board::{Color, Pos};

/// Errors raised by the decision engine and the rules layer
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    /// The acting color has nothing to play (eliminated or full board)
    #[error("no legal move for {0:?}")]
    NoLegalMove(Color),

    /// Move violates the placement/growth rules for this color
    #[error("illegal move at {pos} for {color:?}")]
    IllegalMove { pos: Pos, color: Color },

    /// The position is already decided
    #[error("game is already over")]
    GameOver,
}

/// Errors while loading or validating an engine configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("invalid config: {0}")]
    Invalid(String),
}

/// Errors parsing a textual board layout
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BoardParseError {
    #[error("expected {expected} cells, found {found}")]
    CellCount { expected: usize, found: usize },

    #[error("bad cell token {token:?} at index {index}")]
    BadToken { index: usize, token: String },
}

/// Result type alias for engine operations
pub type EngineResult<T> = Result<T, EngineError>;
