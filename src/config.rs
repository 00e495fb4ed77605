//! Engine configuration
//!
//! All knobs of the decision engine live in [`EngineConfig`]. The struct is
//! `serde`-friendly so the binary can load it from a JSON file, and every
//! field has a default so partial files are accepted.
//!
//! ```
//! use color_wars::config::{EngineConfig, MovePolicy};
//!
//! let config = EngineConfig::from_json_str(r#"{ "max_depth": 4 }"#).unwrap();
//! assert_eq!(config.max_depth, 4);
//! assert_eq!(config.move_policy, MovePolicy::Complete);
//! ```

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Deepest search the engine accepts
pub const MAX_SEARCH_DEPTH: u8 = 6;

/// Which candidate moves the generator hands to the search.
///
/// The same policy is used at the root and at every internal node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MovePolicy {
    /// Every legal move, explosion-ready cells first
    #[default]
    Complete,
    /// Only explosion-ready cells when any exist
    ExplosiveOnly,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Plies searched by minimax
    pub max_depth: u8,
    /// Wall-clock budget per decision
    pub time_limit_ms: u64,
    /// Optional cap on minimax invocations per decision
    pub node_budget: Option<u64>,
    pub move_policy: MovePolicy,
    /// Chance of a random opening move while fewer than six pieces are on the board
    pub opening_randomness: f64,
    /// Delay before the session starts an AI turn
    pub think_delay_ms: u64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            max_depth: 3,
            time_limit_ms: 2000,
            node_budget: None,
            move_policy: MovePolicy::Complete,
            opening_randomness: 0.0,
            think_delay_ms: 200,
        }
    }
}

impl EngineConfig {
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: EngineConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&text)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(1..=MAX_SEARCH_DEPTH).contains(&self.max_depth) {
            return Err(ConfigError::Invalid(format!(
                "max_depth must be in 1..={MAX_SEARCH_DEPTH}, got {}",
                self.max_depth
            )));
        }
        if self.time_limit_ms == 0 {
            return Err(ConfigError::Invalid("time_limit_ms must be positive".into()));
        }
        if self.node_budget == Some(0) {
            return Err(ConfigError::Invalid("node_budget must be positive".into()));
        }
        if !(0.0..=1.0).contains(&self.opening_randomness) {
            return Err(ConfigError::Invalid(format!(
                "opening_randomness must be in 0..=1, got {}",
                self.opening_randomness
            )));
        }
        Ok(())
    }

    #[inline]
    pub fn time_limit(&self) -> Duration {
        Duration::from_millis(self.time_limit_ms)
    }

    #[inline]
    pub fn think_delay(&self) -> Duration {
        Duration::from_millis(self.think_delay_ms)
    }
}
