//! Per-game state: the price path, barrier history and outcome.

use super::barrier::{Barrier, BreachSide};
use serde::{Deserialize, Serialize};

/// Terminal outcome of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameResult {
    Win,
    Lose,
}

/// One game's sequences. The chart and info panel read these directly.
///
/// After every completed tick the three sequences have equal length
/// (`tick_count + 1`, counting the seed entry). Once `result` is set the
/// state is frozen.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GameState {
    pub tick_count: u32,
    pub prices: Vec<f64>,
    pub upper_barriers: Vec<f64>,
    pub lower_barriers: Vec<f64>,
    pub running: bool,
    pub result: Option<GameResult>,
    /// Current band percentage when the percentage policy is active.
    pub band_percent: Option<f64>,
    /// Which side ended a lost game.
    pub breach: Option<BreachSide>,
}

impl GameState {
    /// Fresh running game seeded with `price` and its initial barrier.
    pub fn new(price: f64, barrier: Barrier, band_percent: Option<f64>) -> Self {
        Self {
            tick_count: 0,
            prices: vec![price],
            upper_barriers: vec![barrier.upper],
            lower_barriers: vec![barrier.lower],
            running: true,
            result: None,
            band_percent,
            breach: None,
        }
    }

    /// True before the first game has been started.
    pub fn is_idle(&self) -> bool {
        self.prices.is_empty()
    }

    pub fn is_finished(&self) -> bool {
        self.result.is_some()
    }

    pub fn current_price(&self) -> Option<f64> {
        self.prices.last().copied()
    }

    pub fn current_barrier(&self) -> Option<Barrier> {
        match (self.upper_barriers.last(), self.lower_barriers.last()) {
            (Some(&upper), Some(&lower)) => Some(Barrier::new(upper, lower)),
            _ => None,
        }
    }

    /// Appends one tick's price and barrier.
    pub fn record_tick(&mut self, price: f64, barrier: Barrier, band_percent: Option<f64>) {
        self.tick_count += 1;
        self.prices.push(price);
        self.upper_barriers.push(barrier.upper);
        self.lower_barriers.push(barrier.lower);
        self.band_percent = band_percent;
    }

    /// Stops the game with `result`. Has no effect once a result is set.
    pub fn finish(&mut self, result: GameResult) {
        if self.result.is_some() {
            return;
        }
        self.running = false;
        self.result = Some(result);
    }

    /// Status line shown under the chart.
    pub fn status_text(&self) -> String {
        match self.result {
            Some(GameResult::Win) => "You Win!".to_string(),
            Some(GameResult::Lose) => "You Lose!".to_string(),
            None if self.is_idle() => "Press Buy to start".to_string(),
            None if self.tick_count == 0 => "Game started!".to_string(),
            None => format!("Survived {} ticks", self.tick_count),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seeded() -> GameState {
        GameState::new(100.0, Barrier::new(105.0, 95.0), None)
    }

    #[test]
    fn test_default_is_idle() {
        let state = GameState::default();
        assert!(state.is_idle());
        assert!(!state.running);
        assert!(state.result.is_none());
        assert!(state.current_price().is_none());
        assert!(state.current_barrier().is_none());
        assert_eq!(state.status_text(), "Press Buy to start");
    }

    #[test]
    fn test_new_game_has_seed_entries() {
        let state = seeded();
        assert!(state.running);
        assert_eq!(state.tick_count, 0);
        assert_eq!(state.prices, vec![100.0]);
        assert_eq!(state.upper_barriers, vec![105.0]);
        assert_eq!(state.lower_barriers, vec![95.0]);
        assert_eq!(state.status_text(), "Game started!");
    }

    #[test]
    fn test_record_tick_keeps_lengths_equal() {
        let mut state = seeded();
        state.record_tick(101.0, Barrier::new(104.8, 95.2), None);
        assert_eq!(state.tick_count, 1);
        assert_eq!(state.prices.len(), 2);
        assert_eq!(state.upper_barriers.len(), 2);
        assert_eq!(state.lower_barriers.len(), 2);
        assert_eq!(state.current_price(), Some(101.0));
        assert_eq!(state.status_text(), "Survived 1 ticks");
    }

    #[test]
    fn test_finish_is_final() {
        let mut state = seeded();
        state.finish(GameResult::Lose);
        assert!(!state.running);
        assert_eq!(state.result, Some(GameResult::Lose));

        state.finish(GameResult::Win);
        assert_eq!(state.result, Some(GameResult::Lose));
        assert_eq!(state.status_text(), "You Lose!");
    }
}
