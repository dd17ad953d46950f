//! Plays simulated games through the real controller.

use super::config::SimConfig;
use super::report::{RunStats, SimReport};
use crate::core::{GameController, GameResult, TickOutcome};
use log::debug;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Run the full simulation and return a report.
pub fn run_simulation(config: &SimConfig) -> SimReport {
    let mut controller = GameController::new(config.game.clone());
    let mut all_runs = Vec::with_capacity(config.num_runs as usize);

    for run_idx in 0..config.num_runs {
        let mut rng = match config.seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed.wrapping_add(run_idx as u64)),
            None => ChaCha8Rng::from_entropy(),
        };

        let stats = simulate_single_run(&mut controller, config.sell_at_tick, &mut rng);
        debug!(
            "run {}/{}: {:?} after {} ticks{}",
            run_idx + 1,
            config.num_runs,
            stats.result,
            stats.ticks_survived,
            stats
                .breach
                .map(|side| format!(" ({} breach)", side.name()))
                .unwrap_or_default()
        );
        all_runs.push(stats);
    }

    SimReport::from_runs(all_runs)
}

/// Plays one game to completion, selling at `sell_at_tick` if set.
pub fn simulate_single_run<R: Rng + ?Sized>(
    controller: &mut GameController,
    sell_at_tick: Option<u32>,
    rng: &mut R,
) -> RunStats {
    controller.begin();
    let mut stopped_early = false;

    loop {
        if sell_at_tick.is_some_and(|tick| controller.state().tick_count >= tick) {
            stopped_early = controller.stop_early();
            break;
        }
        match controller.tick(rng) {
            TickOutcome::Continued => {}
            TickOutcome::Won | TickOutcome::Lost(_) | TickOutcome::Idle => break,
        }
    }

    let state = controller.state();
    RunStats {
        // A finished game always has a result
        result: state.result.unwrap_or(GameResult::Lose),
        ticks_survived: state.tick_count,
        breach: state.breach,
        stopped_early,
        final_price: state.current_price().unwrap_or_default(),
        final_width: state.current_barrier().map(|b| b.width()).unwrap_or_default(),
    }
}
