//! In-memory session tally and event log. Nothing here outlives the process.

use super::constants::MAX_LOG_ENTRIES;
use super::controller::TickOutcome;
use super::game_state::GameState;
use std::collections::VecDeque;

/// Colouring hint for a log line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogTone {
    Info,
    Good,
    Bad,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LogEntry {
    pub message: String,
    pub tone: LogTone,
}

/// Results across the games played in this session.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Session {
    pub games_played: u32,
    pub wins: u32,
    pub losses: u32,
    /// Wins that came from the manual stop rather than surviving.
    pub early_stops: u32,
    pub current_streak: u32,
    pub best_streak: u32,
    pub log: VecDeque<LogEntry>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_log_entry(&mut self, message: String, tone: LogTone) {
        self.log.push_back(LogEntry { message, tone });
        while self.log.len() > MAX_LOG_ENTRIES {
            self.log.pop_front();
        }
    }

    pub fn record_start(&mut self, state: &GameState, policy_name: &str) {
        self.games_played += 1;
        let message = match state.current_price() {
            Some(price) => format!(
                "Game {} started at {:.2} ({})",
                self.games_played, price, policy_name
            ),
            None => format!("Game {} started ({})", self.games_played, policy_name),
        };
        self.add_log_entry(message, LogTone::Info);
    }

    /// Logs the tick and updates the tally on terminal outcomes.
    pub fn record_tick(&mut self, outcome: TickOutcome, state: &GameState) {
        match outcome {
            TickOutcome::Idle => {}
            TickOutcome::Continued => {
                if let Some(price) = state.current_price() {
                    self.add_log_entry(
                        format!("Tick {}: spot {:.2}", state.tick_count, price),
                        LogTone::Info,
                    );
                }
            }
            TickOutcome::Won => {
                self.record_win();
                self.add_log_entry(
                    format!("Survived {} ticks. You Win!", state.tick_count),
                    LogTone::Good,
                );
            }
            TickOutcome::Lost(side) => {
                self.record_loss();
                self.add_log_entry(
                    format!(
                        "Breached the {} barrier on tick {}. You Lose!",
                        side.name(),
                        state.tick_count
                    ),
                    LogTone::Bad,
                );
            }
        }
    }

    pub fn record_early_stop(&mut self, state: &GameState) {
        self.early_stops += 1;
        self.record_win();
        self.add_log_entry(
            format!("Sold after {} ticks. You Win!", state.tick_count),
            LogTone::Good,
        );
    }

    pub fn win_rate(&self) -> f64 {
        let finished = self.wins + self.losses;
        if finished == 0 {
            0.0
        } else {
            self.wins as f64 / finished as f64
        }
    }

    fn record_win(&mut self) {
        self.wins += 1;
        self.current_streak += 1;
        self.best_streak = self.best_streak.max(self.current_streak);
    }

    fn record_loss(&mut self) {
        self.losses += 1;
        self.current_streak = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::barrier::{Barrier, BreachSide};

    fn running_state() -> GameState {
        GameState::new(100.0, Barrier::new(105.0, 95.0), None)
    }

    #[test]
    fn test_log_is_capped() {
        let mut session = Session::new();
        for i in 0..(MAX_LOG_ENTRIES + 10) {
            session.add_log_entry(format!("entry {}", i), LogTone::Info);
        }
        assert_eq!(session.log.len(), MAX_LOG_ENTRIES);
        assert_eq!(session.log.front().unwrap().message, "entry 10");
    }

    #[test]
    fn test_streaks() {
        let mut session = Session::new();
        let state = running_state();
        session.record_tick(TickOutcome::Won, &state);
        session.record_tick(TickOutcome::Won, &state);
        session.record_tick(TickOutcome::Lost(BreachSide::Upper), &state);
        session.record_tick(TickOutcome::Won, &state);

        assert_eq!(session.wins, 3);
        assert_eq!(session.losses, 1);
        assert_eq!(session.current_streak, 1);
        assert_eq!(session.best_streak, 2);
        assert!((session.win_rate() - 0.75).abs() < 1e-9);
    }

    #[test]
    fn test_early_stop_counts_as_win() {
        let mut session = Session::new();
        session.record_early_stop(&running_state());
        assert_eq!(session.wins, 1);
        assert_eq!(session.early_stops, 1);
        assert_eq!(session.log.back().unwrap().tone, LogTone::Good);
    }

    #[test]
    fn test_idle_and_continued_do_not_change_tally() {
        let mut session = Session::new();
        let state = running_state();
        session.record_tick(TickOutcome::Idle, &state);
        session.record_tick(TickOutcome::Continued, &state);
        assert_eq!(session.wins + session.losses, 0);
        assert_eq!(session.log.len(), 1);
        assert_eq!(session.win_rate(), 0.0);
    }

    #[test]
    fn test_record_start_counts_games() {
        let mut session = Session::new();
        session.record_start(&running_state(), "Absolute shrink");
        assert_eq!(session.games_played, 1);
        assert!(session.log[0].message.contains("100.00"));
    }
}
