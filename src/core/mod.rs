//! Simulation core: price walk, barriers, clock, game state and controller.

pub mod barrier;
pub mod clock;
pub mod constants;
pub mod controller;
pub mod game_state;
pub mod random_walk;
pub mod session;

pub use barrier::{Barrier, BarrierPolicy, BreachSide};
pub use clock::TickClock;
pub use constants::*;
pub use controller::{GameController, TickOutcome};
pub use game_state::{GameResult, GameState};
pub use random_walk::RandomWalk;
pub use session::{LogEntry, LogTone, Session};
