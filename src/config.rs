//! Runtime configuration parsed from environment variables.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::path::PathBuf;

use crate::consts::{GRID_SIZE, MAX_HISTORY};

pub const DEFAULT_DATA_DIR: &str = ".sketchboard";

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid {var}: {reason}")]
    Invalid { var: &'static str, reason: String },
}

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Directory used by file-backed storage.
    pub data_dir: PathBuf,
    /// Maximum number of retained history snapshots.
    pub history_limit: usize,
    /// Grid interval used when snap-to-grid is on.
    pub grid_size: f64,
}

impl Default for Config {
    fn default() -> Self {
        Self { data_dir: PathBuf::from(DEFAULT_DATA_DIR), history_limit: MAX_HISTORY, grid_size: GRID_SIZE }
    }
}

impl Config {
    /// Build typed config from environment variables.
    ///
    /// Optional:
    /// - `SKETCHBOARD_DATA_DIR`: default `.sketchboard`
    /// - `SKETCHBOARD_HISTORY_LIMIT`: default 60, must be positive
    /// - `SKETCHBOARD_GRID_SIZE`: default 20, must be positive
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] when a limit is zero.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| match std::env::var(key) {
            Ok(v) => Some(v),
            Err(_) => None,
        })
    }

    /// Build config from an arbitrary variable lookup.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] when a limit is zero.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = Self::default();
        let data_dir = lookup("SKETCHBOARD_DATA_DIR")
            .filter(|v| !v.trim().is_empty())
            .map_or(defaults.data_dir, PathBuf::from);

        let history_limit = parse_or("SKETCHBOARD_HISTORY_LIMIT", lookup("SKETCHBOARD_HISTORY_LIMIT"), MAX_HISTORY);
        if history_limit == 0 {
            return Err(ConfigError::Invalid { var: "SKETCHBOARD_HISTORY_LIMIT", reason: "must be at least 1".into() });
        }

        let grid = parse_or("SKETCHBOARD_GRID_SIZE", lookup("SKETCHBOARD_GRID_SIZE"), 20_u32);
        if grid == 0 {
            return Err(ConfigError::Invalid { var: "SKETCHBOARD_GRID_SIZE", reason: "must be at least 1".into() });
        }

        Ok(Self { data_dir, history_limit, grid_size: f64::from(grid) })
    }
}

fn parse_or<T: std::str::FromStr>(key: &str, raw: Option<String>, default: T) -> T {
    let Some(raw) = raw else {
        return default;
    };
    match raw.trim().parse::<T>() {
        Ok(v) => v,
        Err(_) => {
            tracing::warn!(key, value = %raw, "unparseable config value; using default");
            default
        }
    }
}
