//! Simulation configuration.

use crate::config::GameConfig;

/// Configuration for a batch of simulated games.
#[derive(Debug, Clone)]
pub struct SimConfig {
    /// Number of games to play
    pub num_runs: u32,

    /// Random seed for reproducibility (None = random)
    pub seed: Option<u64>,

    /// Sell at this tick instead of playing to the end
    pub sell_at_tick: Option<u32>,

    /// Tuning for every game
    pub game: GameConfig,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            num_runs: 1000,
            seed: None,
            sell_at_tick: None,
            game: GameConfig::default(),
        }
    }
}

impl SimConfig {
    /// Quick check of the percentage-shrink preset
    pub fn percentage_test(num_runs: u32) -> Self {
        Self {
            num_runs,
            game: GameConfig::percentage(),
            ..Default::default()
        }
    }
}
