//! Repeating tick scheduler polled by the host loop.

use std::time::{Duration, Instant};

/// Fires at most once per `interval` while armed.
///
/// The host calls [`TickClock::poll`] from its event loop; a firing is
/// consumed by the poll that observes it, so ticks never overlap.
#[derive(Debug, Clone)]
pub struct TickClock {
    interval: Duration,
    next_fire: Option<Instant>,
}

impl TickClock {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            next_fire: None,
        }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Arms the clock; the first firing is one interval after `now`.
    pub fn start(&mut self, now: Instant) {
        self.next_fire = Some(now + self.interval);
    }

    pub fn cancel(&mut self) {
        self.next_fire = None;
    }

    pub fn is_armed(&self) -> bool {
        self.next_fire.is_some()
    }

    /// Returns true if the clock fired since the last poll.
    pub fn poll(&mut self, now: Instant) -> bool {
        match self.next_fire {
            Some(due) if now >= due => {
                self.next_fire = Some(now + self.interval);
                true
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECOND: Duration = Duration::from_millis(1000);

    #[test]
    fn test_unarmed_clock_never_fires() {
        let mut clock = TickClock::new(SECOND);
        let now = Instant::now();
        assert!(!clock.is_armed());
        assert!(!clock.poll(now + SECOND * 5));
    }

    #[test]
    fn test_fires_after_interval() {
        let mut clock = TickClock::new(SECOND);
        let t0 = Instant::now();
        clock.start(t0);
        assert!(!clock.poll(t0 + Duration::from_millis(999)));
        assert!(clock.poll(t0 + SECOND));
        // Consumed: polling again at the same instant does not refire
        assert!(!clock.poll(t0 + SECOND));
        assert!(clock.poll(t0 + SECOND * 2));
    }

    #[test]
    fn test_late_poll_fires_once() {
        let mut clock = TickClock::new(SECOND);
        let t0 = Instant::now();
        clock.start(t0);
        let late = t0 + SECOND * 3;
        assert!(clock.poll(late));
        assert!(!clock.poll(late + Duration::from_millis(10)));
    }

    #[test]
    fn test_cancel_stops_firing() {
        let mut clock = TickClock::new(SECOND);
        let t0 = Instant::now();
        clock.start(t0);
        clock.cancel();
        assert!(!clock.is_armed());
        assert!(!clock.poll(t0 + SECOND * 2));
    }
}
