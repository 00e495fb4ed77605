//! Search module for the Color Wars AI
//!
//! Contains:
//! - Candidate move generation with ready-first ordering
//! - Budget-aware minimax with alpha-beta pruning

pub mod alphabeta;
pub mod movegen;

pub use alphabeta::{SearchLimits, SearchOutcome, SearchResult, SearchStats, Searcher, INF};
pub use movegen::legal_moves;
