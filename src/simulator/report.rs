//! Simulation report generation.

use crate::core::{BreachSide, GameResult};
use serde::Serialize;
use std::collections::BTreeMap;

/// Outcome of one simulated game.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RunStats {
    pub result: GameResult,
    pub ticks_survived: u32,
    pub breach: Option<BreachSide>,
    pub stopped_early: bool,
    pub final_price: f64,
    pub final_width: f64,
}

/// Aggregated results from a batch of games.
#[derive(Debug, Clone, Serialize)]
pub struct SimReport {
    pub num_runs: u32,
    pub wins: u32,
    pub losses: u32,
    pub early_stops: u32,
    pub win_rate: f64,
    pub upper_breaches: u32,
    pub lower_breaches: u32,
    pub avg_ticks_survived: f64,
    pub avg_final_width: f64,
    /// Losses keyed by the tick on which the breach happened
    pub losses_by_tick: BTreeMap<u32, u32>,
    #[serde(skip)]
    pub run_stats: Vec<RunStats>,
}

impl SimReport {
    pub fn from_runs(runs: Vec<RunStats>) -> Self {
        let num_runs = runs.len() as u32;
        let denom = num_runs.max(1) as f64;

        let wins = runs.iter().filter(|r| r.result == GameResult::Win).count() as u32;
        let losses = num_runs - wins;
        let early_stops = runs.iter().filter(|r| r.stopped_early).count() as u32;
        let upper_breaches = runs
            .iter()
            .filter(|r| r.breach == Some(BreachSide::Upper))
            .count() as u32;
        let lower_breaches = runs
            .iter()
            .filter(|r| r.breach == Some(BreachSide::Lower))
            .count() as u32;

        let avg_ticks_survived =
            runs.iter().map(|r| r.ticks_survived as f64).sum::<f64>() / denom;
        let avg_final_width = runs.iter().map(|r| r.final_width).sum::<f64>() / denom;

        let mut losses_by_tick = BTreeMap::new();
        for run in runs.iter().filter(|r| r.result == GameResult::Lose) {
            *losses_by_tick.entry(run.ticks_survived).or_insert(0) += 1;
        }

        Self {
            num_runs,
            wins,
            losses,
            early_stops,
            win_rate: wins as f64 / denom,
            upper_breaches,
            lower_breaches,
            avg_ticks_survived,
            avg_final_width,
            losses_by_tick,
            run_stats: runs,
        }
    }

    /// Generate a text report.
    pub fn to_text(&self) -> String {
        let mut report = String::new();

        report.push_str("═══════════════════════════════════════════════════════════════\n");
        report.push_str("                    SIMULATION REPORT\n");
        report.push_str("═══════════════════════════════════════════════════════════════\n\n");

        report.push_str(&format!(
            "Games: {} total, {} won, {} lost",
            self.num_runs, self.wins, self.losses
        ));
        if self.early_stops > 0 {
            report.push_str(&format!(" ({} sold early)", self.early_stops));
        }
        report.push_str("\n\n");

        report.push_str(&format!("Win rate:            {:>6.1}%\n", self.win_rate * 100.0));
        report.push_str(&format!("Avg ticks survived:  {:>6.2}\n", self.avg_ticks_survived));
        report.push_str(&format!("Avg final width:     {:>6.2}\n", self.avg_final_width));
        report.push_str(&format!(
            "Breaches:            {} upper / {} lower\n",
            self.upper_breaches, self.lower_breaches
        ));

        if !self.losses_by_tick.is_empty() {
            report.push_str("\n─── Losses by tick ─────────────────────────────────────────────\n");
            let max = self.losses_by_tick.values().copied().max().unwrap_or(1).max(1);
            for (tick, count) in &self.losses_by_tick {
                let bar_len = (*count as f64 / max as f64 * 40.0).round() as usize;
                report.push_str(&format!(
                    "  tick {:>3}: {:>6}  {}\n",
                    tick,
                    count,
                    "█".repeat(bar_len)
                ));
            }
        }

        report
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
