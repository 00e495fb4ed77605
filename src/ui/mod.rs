//! GUI module for the Color Wars game
//!
//! This module provides a native Rust GUI using egui/eframe.

mod app;
mod board_view;
mod game_state;
mod theme;

pub use app::ColorWarsApp;
pub use game_state::{AiState, GameError, GameMode, GameState, RoundTally};
