//! Position evaluation

pub mod heuristic;
pub mod weights;

pub use heuristic::{evaluate, SideFeatures};
pub use weights::Weights;
