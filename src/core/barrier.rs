//! Barrier policies: where the upper/lower thresholds start and how they
//! close in on the spot price each tick.

use super::constants::{
    BAND_PCT_STEP, INITIAL_BAND_PCT, INITIAL_BARRIER_GAP, MIN_BAND_PCT, SHRINK_RATE,
};
use serde::{Deserialize, Serialize};

/// Which barrier the price touched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BreachSide {
    Upper,
    Lower,
}

impl BreachSide {
    pub fn name(self) -> &'static str {
        match self {
            BreachSide::Upper => "upper",
            BreachSide::Lower => "lower",
        }
    }
}

/// Upper and lower thresholds for a single tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Barrier {
    pub upper: f64,
    pub lower: f64,
}

impl Barrier {
    pub fn new(upper: f64, lower: f64) -> Self {
        Self { upper, lower }
    }

    /// Symmetric band of `pct` percent around `price`.
    pub fn around(price: f64, pct: f64) -> Self {
        Self {
            upper: price * (1.0 + pct / 100.0),
            lower: price * (1.0 - pct / 100.0),
        }
    }

    pub fn width(&self) -> f64 {
        self.upper - self.lower
    }

    /// Inclusive on both bounds: touching a barrier is a breach.
    pub fn breach(&self, price: f64) -> Option<BreachSide> {
        if price >= self.upper {
            Some(BreachSide::Upper)
        } else if price <= self.lower {
            Some(BreachSide::Lower)
        } else {
            None
        }
    }
}

/// Outcome of advancing the barrier by one tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BarrierStep {
    /// Barrier to record for this tick.
    pub barrier: Barrier,
    /// Current band percentage (percentage policy only).
    pub band_percent: Option<f64>,
    /// Set when this tick's price breached the barrier it is checked against.
    pub breach: Option<BreachSide>,
}

/// How barriers are placed and shrunk.
///
/// The two variants check breaches at different points:
/// - `Absolute` shrinks first, then checks the new price against the
///   barrier computed on the same tick.
/// - `Percentage` checks the new price against the previous tick's barrier,
///   then recentres the band on the new price.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum BarrierPolicy {
    Absolute {
        /// Initial distance from the seed price to each barrier.
        gap: f64,
        /// Per-tick move of each barrier towards the other.
        shrink: f64,
    },
    Percentage {
        /// Band half-width at start, in percent of spot.
        initial_pct: f64,
        /// Per-tick reduction of the band, in percentage points.
        step: f64,
        /// The band never narrows past this.
        floor: f64,
    },
}

impl Default for BarrierPolicy {
    fn default() -> Self {
        Self::absolute()
    }
}

impl BarrierPolicy {
    pub fn absolute() -> Self {
        BarrierPolicy::Absolute {
            gap: INITIAL_BARRIER_GAP,
            shrink: SHRINK_RATE,
        }
    }

    pub fn percentage() -> Self {
        BarrierPolicy::Percentage {
            initial_pct: INITIAL_BAND_PCT,
            step: BAND_PCT_STEP,
            floor: MIN_BAND_PCT,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            BarrierPolicy::Absolute { .. } => "Absolute shrink",
            BarrierPolicy::Percentage { .. } => "Percentage shrink",
        }
    }

    /// Barrier (and band percentage) for the seed price.
    pub fn initial(&self, price: f64) -> (Barrier, Option<f64>) {
        match *self {
            BarrierPolicy::Absolute { gap, .. } => (Barrier::new(price + gap, price - gap), None),
            BarrierPolicy::Percentage { initial_pct, .. } => {
                (Barrier::around(price, initial_pct), Some(initial_pct))
            }
        }
    }

    /// Computes this tick's barrier and breach status for the new `price`.
    pub fn advance(&self, previous: Barrier, previous_pct: Option<f64>, price: f64) -> BarrierStep {
        match *self {
            BarrierPolicy::Absolute { shrink, .. } => {
                let barrier = Barrier::new(previous.upper - shrink, previous.lower + shrink);
                BarrierStep {
                    barrier,
                    band_percent: None,
                    breach: barrier.breach(price),
                }
            }
            BarrierPolicy::Percentage {
                initial_pct,
                step,
                floor,
            } => {
                let breach = previous.breach(price);
                let pct = next_band_percent(previous_pct.unwrap_or(initial_pct), step, floor);
                BarrierStep {
                    barrier: Barrier::around(price, pct),
                    band_percent: Some(pct),
                    breach,
                }
            }
        }
    }
}

/// Linear decay clamped at `floor`.
pub fn next_band_percent(pct: f64, step: f64, floor: f64) -> f64 {
    (pct - step).max(floor)
}
