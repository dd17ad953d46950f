//! Monte Carlo runner for tuning the game constants.
//!
//! Plays many headless games through [`GameController`](crate::core::GameController)
//! so the numbers match what the interactive game does, and aggregates
//! win rate, survival time and breach sides.

mod config;
mod report;
mod runner;

pub use config::SimConfig;
pub use report::{RunStats, SimReport};
pub use runner::{run_simulation, simulate_single_run};
