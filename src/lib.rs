//! Color Wars AI Engine
//!
//! A decision engine for Color Wars, a two-player chain-reaction game:
//! - 5x5 board, each cell empty or owned by Red or Blue with 1-3 dots
//! - First move places 3 dots on an empty cell, later moves add one dot
//!   to an owned cell
//! - Four dots explode into the orthogonal neighbors, converting them
//! - A player with no pieces left (after both have moved) loses
//!
//! # Architecture
//!
//! The engine is organized into several modules:
//! - [`board`]: Compact board representation
//! - [`rules`]: Move legality, explosion cascades, terminal detection
//! - [`eval`]: Position evaluation
//! - [`search`]: Move generation and alpha-beta search
//! - [`engine`]: Main AI engine integrating all components
//! - [`ui`]: egui front end and game session
//!
//! # Quick Start
//!
//! ```
//! use color_wars::{AIEngine, Board, Color, EngineConfig, Pos};
//!
//! let mut board = Board::new();
//! let mut engine = AIEngine::with_config(EngineConfig { max_depth: 2, ..Default::default() });
//!
//! color_wars::rules::apply_move(&mut board, Pos::center(), Color::Red);
//!
//! // AI responds as Blue
//! if let Some(pos) = engine.get_move(&board, Color::Blue) {
//!     color_wars::rules::apply_move(&mut board, pos, Color::Blue);
//!     println!("AI plays at ({}, {})", pos.row, pos.col);
//! }
//! ```
//!
//! # Search Priority
//!
//! 1. Immediate winning move
//! 2. Optional random opening placement
//! 3. Alpha-beta search under time and node budgets

pub mod board;
pub mod config;
pub mod engine;
pub mod error;
pub mod eval;
pub mod rules;
pub mod search;
pub mod ui;

// Re-export commonly used types for convenience
pub use board::{Board, Cell, Color, Pos, BOARD_SIZE};
pub use config::{EngineConfig, MovePolicy};
pub use engine::{AIEngine, MoveResult, SearchType};
pub use error::{ConfigError, EngineError};
