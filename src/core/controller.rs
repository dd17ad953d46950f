//! Owns one game and drives it: start, per-tick transition, early stop.

use super::barrier::BreachSide;
use super::clock::TickClock;
use super::game_state::{GameResult, GameState};
use super::random_walk::RandomWalk;
use crate::config::GameConfig;
use log::{debug, info};
use rand::Rng;
use std::time::Instant;

/// What a single tick did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// No game running; nothing changed.
    Idle,
    /// Price stayed inside the barriers and the win threshold is not reached.
    Continued,
    /// Survived the configured number of ticks.
    Won,
    /// Price touched a barrier.
    Lost(BreachSide),
}

impl TickOutcome {
    pub fn is_terminal(self) -> bool {
        matches!(self, TickOutcome::Won | TickOutcome::Lost(_))
    }
}

/// Game controller: the single owner of [`GameState`] and its clock.
#[derive(Debug, Clone)]
pub struct GameController {
    config: GameConfig,
    walk: RandomWalk,
    clock: TickClock,
    state: GameState,
}

impl GameController {
    pub fn new(config: GameConfig) -> Self {
        Self {
            walk: config.random_walk(),
            clock: TickClock::new(config.tick_interval()),
            state: GameState::default(),
            config,
        }
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn clock(&self) -> &TickClock {
        &self.clock
    }

    pub fn is_running(&self) -> bool {
        self.state.running
    }

    /// Swaps the tuning. Refused while a game is running.
    pub fn set_config(&mut self, config: GameConfig) -> bool {
        if self.state.running {
            return false;
        }
        self.walk = config.random_walk();
        self.clock = TickClock::new(config.tick_interval());
        self.config = config;
        true
    }

    /// Resets to a fresh running game without arming the clock.
    /// Headless callers drive it with [`GameController::tick`].
    pub fn begin(&mut self) {
        let price = self.config.initial_spot;
        let (barrier, band_percent) = self.config.barrier.initial(price);
        self.state = GameState::new(price, barrier, band_percent);
        info!(
            "game started: spot {:.2}, barriers {:.2}/{:.2} ({})",
            price,
            barrier.upper,
            barrier.lower,
            self.config.barrier.name()
        );
    }

    /// Starts a new game and arms the tick clock.
    pub fn start(&mut self, now: Instant) {
        self.begin();
        self.clock.start(now);
    }

    /// Runs the tick transition if the clock has fired.
    pub fn update<R: Rng + ?Sized>(&mut self, now: Instant, rng: &mut R) -> Option<TickOutcome> {
        if self.clock.poll(now) {
            Some(self.tick(rng))
        } else {
            None
        }
    }

    /// One transition: new price, barrier update, breach and win checks.
    pub fn tick<R: Rng + ?Sized>(&mut self, rng: &mut R) -> TickOutcome {
        if !self.state.running {
            return TickOutcome::Idle;
        }
        let (Some(previous_price), Some(previous_barrier)) =
            (self.state.current_price(), self.state.current_barrier())
        else {
            return TickOutcome::Idle;
        };

        let price = self.walk.next(previous_price, rng);
        let step = self
            .config
            .barrier
            .advance(previous_barrier, self.state.band_percent, price);
        self.state.record_tick(price, step.barrier, step.band_percent);

        debug!(
            "tick {}: spot {:.4}, upper {:.4}, lower {:.4}",
            self.state.tick_count, price, step.barrier.upper, step.barrier.lower
        );

        if let Some(side) = step.breach {
            self.state.breach = Some(side);
            self.end(GameResult::Lose);
            TickOutcome::Lost(side)
        } else if self.state.tick_count >= self.config.win_ticks {
            self.end(GameResult::Win);
            TickOutcome::Won
        } else {
            TickOutcome::Continued
        }
    }

    /// Stops the running game with `result`. Returns false when no game is
    /// running, leaving idle and finished states untouched.
    pub fn force_end(&mut self, result: GameResult) -> bool {
        if !self.state.running {
            return false;
        }
        self.end(result);
        true
    }

    /// The manual "Sell" action. Ending early is reported as a win.
    pub fn stop_early(&mut self) -> bool {
        self.force_end(GameResult::Win)
    }

    fn end(&mut self, result: GameResult) {
        self.clock.cancel();
        self.state.finish(result);
        info!("game over after {} ticks: {:?}", self.state.tick_count, result);
    }
}
