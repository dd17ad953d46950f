//! Converge - survive a random price walk between shrinking barriers.
//!
//! The simulation core lives in [`core`]; [`ui`] renders it with ratatui and
//! [`simulator`] plays it headless for tuning.

pub mod build_info;
pub mod config;
pub mod core;
pub mod input;
pub mod logging;
pub mod simulator;
pub mod ui;

pub use crate::config::GameConfig;
pub use crate::core::{GameController, GameResult, GameState};
