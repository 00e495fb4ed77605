//! Game rules for Color Wars
//!
//! This module implements the rule set:
//! - Placement and growth legality
//! - Explosion cascades
//! - Terminal detection and winner

pub mod cascade;
pub mod win;

// Re-exports for convenient access
pub use cascade::{applied, apply_move, is_legal_move, try_apply_move, MoveOutcome};
pub use win::{is_terminal, winner};
