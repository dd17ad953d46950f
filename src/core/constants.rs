// Tick and timing
pub const TICK_INTERVAL_MS: u64 = 1000;
pub const INPUT_POLL_MS: u64 = 50;
pub const WIN_TICKS: u32 = 10;

// Price walk
pub const INITIAL_SPOT: f64 = 100.0;
pub const DRIFT_STD: f64 = 1.0;

// Absolute-shrink barriers
pub const INITIAL_BARRIER_GAP: f64 = 5.0;
pub const SHRINK_RATE: f64 = 0.2;

// Percentage-shrink barriers (percentage points)
pub const INITIAL_BAND_PCT: f64 = 2.5;
pub const BAND_PCT_STEP: f64 = 0.3;
pub const MIN_BAND_PCT: f64 = 0.1;

// Session event log
pub const MAX_LOG_ENTRIES: usize = 50;
