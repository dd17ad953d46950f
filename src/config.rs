//! Game tuning: defaults, presets and JSON loading.

use crate::core::barrier::BarrierPolicy;
use crate::core::constants::{DRIFT_STD, INITIAL_SPOT, TICK_INTERVAL_MS, WIN_TICKS};
use crate::core::random_walk::RandomWalk;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;

pub const CONFIG_FILENAME: &str = "config.json";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("could not read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid config JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("invalid config: {0}")]
    Invalid(String),
}

pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

/// Tuning constants for one game. Missing JSON fields take the defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Seed price at the start of every game.
    pub initial_spot: f64,
    /// Standard deviation of each price step.
    pub drift_std: f64,
    pub tick_interval_ms: u64,
    /// Ticks to survive for a win.
    pub win_ticks: u32,
    pub barrier: BarrierPolicy,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            initial_spot: INITIAL_SPOT,
            drift_std: DRIFT_STD,
            tick_interval_ms: TICK_INTERVAL_MS,
            win_ticks: WIN_TICKS,
            barrier: BarrierPolicy::absolute(),
        }
    }
}

impl GameConfig {
    /// Fixed-gap barriers shrinking by a constant amount.
    pub fn absolute() -> Self {
        Self::default()
    }

    /// Barriers at a shrinking percentage of spot.
    pub fn percentage() -> Self {
        Self {
            barrier: BarrierPolicy::percentage(),
            ..Default::default()
        }
    }

    pub fn with_barrier(mut self, barrier: BarrierPolicy) -> Self {
        self.barrier = barrier;
        self
    }

    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_interval_ms)
    }

    pub fn random_walk(&self) -> RandomWalk {
        RandomWalk::new(self.drift_std)
    }

    pub fn from_json(json: &str) -> ConfigResult<Self> {
        let config: GameConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: &Path) -> ConfigResult<Self> {
        let json = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&json)
    }

    /// Loads `path` if given; otherwise the per-user config file when it
    /// exists, falling back to defaults.
    pub fn load_or_default(path: Option<&Path>) -> ConfigResult<Self> {
        if let Some(path) = path {
            return Self::load(path);
        }
        match default_config_path() {
            Some(path) if path.exists() => Self::load(&path),
            _ => Ok(Self::default()),
        }
    }

    pub fn validate(&self) -> ConfigResult<()> {
        let finite = [self.initial_spot, self.drift_std]
            .into_iter()
            .chain(policy_values(&self.barrier))
            .all(f64::is_finite);
        if !finite {
            return Err(ConfigError::Invalid("values must be finite".to_string()));
        }
        if self.initial_spot <= 0.0 {
            return Err(ConfigError::Invalid("initial_spot must be positive".to_string()));
        }
        if self.drift_std <= 0.0 {
            return Err(ConfigError::Invalid("drift_std must be positive".to_string()));
        }
        if self.tick_interval_ms == 0 {
            return Err(ConfigError::Invalid(
                "tick_interval_ms must be positive".to_string(),
            ));
        }
        if self.win_ticks == 0 {
            return Err(ConfigError::Invalid("win_ticks must be positive".to_string()));
        }
        match self.barrier {
            BarrierPolicy::Absolute { gap, shrink } => {
                if gap <= 0.0 {
                    return Err(ConfigError::Invalid("barrier gap must be positive".to_string()));
                }
                if shrink < 0.0 {
                    return Err(ConfigError::Invalid(
                        "barrier shrink must not be negative".to_string(),
                    ));
                }
            }
            BarrierPolicy::Percentage {
                initial_pct,
                step,
                floor,
            } => {
                if floor <= 0.0 || initial_pct < floor {
                    return Err(ConfigError::Invalid(format!(
                        "band percentages need 0 < floor ({}) <= initial_pct ({})",
                        floor, initial_pct
                    )));
                }
                if step < 0.0 {
                    return Err(ConfigError::Invalid(
                        "band step must not be negative".to_string(),
                    ));
                }
            }
        }
        Ok(())
    }
}

fn policy_values(policy: &BarrierPolicy) -> Vec<f64> {
    match *policy {
        BarrierPolicy::Absolute { gap, shrink } => vec![gap, shrink],
        BarrierPolicy::Percentage {
            initial_pct,
            step,
            floor,
        } => vec![initial_pct, step, floor],
    }
}

/// Per-user data directory (also holds the log file).
pub fn data_dir() -> Option<PathBuf> {
    ProjectDirs::from("", "", "converge").map(|dirs| dirs.data_dir().to_path_buf())
}

pub fn default_config_path() -> Option<PathBuf> {
    ProjectDirs::from("", "", "converge").map(|dirs| dirs.config_dir().join(CONFIG_FILENAME))
}
