//! Integration test: tick loop mechanics
//!
//! Drives GameController through whole games with seeded and constant RNGs
//! and checks the sequence invariants, terminal states and win/lose rules.

use converge::config::GameConfig;
use converge::core::{BreachSide, GameController, GameResult, TickOutcome};
use rand::rngs::mock::StepRng;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::time::{Duration, Instant};

const EPS: f64 = 1e-9;

/// RNG whose every uniform draw is 0.25, giving a normal sample of ~0.
fn flat_rng() -> StepRng {
    StepRng::new(1 << 62, 0)
}

/// Every uniform draw is 2^-53, giving a normal sample of about +8.57.
fn spike_up_rng() -> StepRng {
    StepRng::new(1 << 11, 0)
}

/// Every uniform draw is 0.5, giving a normal sample of about -1.18.
fn dip_rng() -> StepRng {
    StepRng::new(1 << 63, 0)
}

/// Play until the game ends, checking invariants after every tick.
fn play_out(controller: &mut GameController, rng: &mut ChaCha8Rng) -> TickOutcome {
    loop {
        let outcome = controller.tick(rng);
        let state = controller.state();
        assert_eq!(state.prices.len(), state.tick_count as usize + 1);
        assert_eq!(state.prices.len(), state.upper_barriers.len());
        assert_eq!(state.prices.len(), state.lower_barriers.len());
        if state.result.is_some() {
            assert!(!state.running);
        }
        if outcome != TickOutcome::Continued {
            return outcome;
        }
    }
}

// =============================================================================
// Absolute-shrink games
// =============================================================================

#[test]
fn test_flat_walk_survives_ten_ticks() {
    let mut controller = GameController::new(GameConfig::absolute());
    let mut rng = flat_rng();
    controller.begin();

    let mut outcome = TickOutcome::Continued;
    while outcome == TickOutcome::Continued {
        outcome = controller.tick(&mut rng);
    }

    let state = controller.state();
    assert_eq!(outcome, TickOutcome::Won);
    assert_eq!(state.result, Some(GameResult::Win));
    assert_eq!(state.tick_count, 10);
    assert_eq!(state.prices.len(), 11);
    let final_gap = state.upper_barriers[10] - state.lower_barriers[10];
    assert!((final_gap - 6.0).abs() < EPS, "final gap {}", final_gap);
}

#[test]
fn test_gap_shrinks_by_twice_the_rate_each_tick() {
    let mut controller = GameController::new(GameConfig::absolute());
    let mut rng = flat_rng();
    controller.begin();
    while controller.tick(&mut rng) == TickOutcome::Continued {}

    let state = controller.state();
    for i in 1..state.prices.len() {
        let before = state.upper_barriers[i - 1] - state.lower_barriers[i - 1];
        let after = state.upper_barriers[i] - state.lower_barriers[i];
        assert!((before - after - 0.4).abs() < EPS, "tick {}", i);
    }
}

#[test]
fn test_upper_breach_on_first_tick_ends_game() {
    let mut controller = GameController::new(GameConfig::absolute());
    let mut rng = spike_up_rng();
    controller.begin();

    assert_eq!(controller.tick(&mut rng), TickOutcome::Lost(BreachSide::Upper));
    assert_eq!(controller.state().result, Some(GameResult::Lose));
    assert_eq!(controller.state().breach, Some(BreachSide::Upper));

    // No tick 2
    assert_eq!(controller.tick(&mut rng), TickOutcome::Idle);
    assert_eq!(controller.state().tick_count, 1);
    assert_eq!(controller.state().prices.len(), 2);
}

#[test]
fn test_lower_breach() {
    let config = GameConfig {
        drift_std: 10.0,
        ..GameConfig::absolute()
    };
    let mut controller = GameController::new(config);
    let mut rng = dip_rng();
    controller.begin();

    assert_eq!(controller.tick(&mut rng), TickOutcome::Lost(BreachSide::Lower));
    assert!(controller.state().current_price().unwrap() <= 95.2);
}

#[test]
fn test_steady_drift_eventually_touches_shrinking_barrier() {
    // Price falls ~1.18 per tick while the lower barrier rises 0.2 per tick:
    // 100 - 1.18k <= 95 + 0.2k first holds at k = 4.
    let mut controller = GameController::new(GameConfig::absolute());
    let mut rng = dip_rng();
    controller.begin();

    let mut outcome = TickOutcome::Continued;
    while outcome == TickOutcome::Continued {
        outcome = controller.tick(&mut rng);
    }
    assert_eq!(outcome, TickOutcome::Lost(BreachSide::Lower));
    assert_eq!(controller.state().tick_count, 4);
}

// =============================================================================
// Percentage-shrink games
// =============================================================================

#[test]
fn test_percentage_band_stops_at_floor() {
    let config = GameConfig {
        win_ticks: 30,
        ..GameConfig::percentage()
    };
    let mut controller = GameController::new(config);
    let mut rng = flat_rng();
    controller.begin();
    assert_eq!(controller.state().band_percent, Some(2.5));

    let mut outcome = TickOutcome::Continued;
    while outcome == TickOutcome::Continued {
        outcome = controller.tick(&mut rng);
        let pct = controller.state().band_percent.unwrap();
        assert!(pct >= 0.1 - EPS, "band fell to {}", pct);
    }

    assert_eq!(outcome, TickOutcome::Won);
    assert!((controller.state().band_percent.unwrap() - 0.1).abs() < EPS);
}

#[test]
fn test_percentage_checks_against_previous_barrier() {
    // Each step is about +1.442 * drift_std.
    let survive = GameConfig {
        drift_std: 1.7,
        ..GameConfig::percentage()
    };
    let mut controller = GameController::new(survive);
    let mut rng = StepRng::new(1 << 61, 0);
    controller.begin();
    assert_eq!(controller.tick(&mut rng), TickOutcome::Continued);
    let state = controller.state();
    let price = state.current_price().unwrap();
    assert!(price > 102.2 && price < 102.5);
    // Band recentred on the new price
    assert!((state.upper_barriers[1] - price * 1.022).abs() < EPS);

    let breach = GameConfig {
        drift_std: 1.8,
        ..GameConfig::percentage()
    };
    let mut controller = GameController::new(breach);
    let mut rng = StepRng::new(1 << 61, 0);
    controller.begin();
    assert_eq!(controller.tick(&mut rng), TickOutcome::Lost(BreachSide::Upper));
    assert_eq!(controller.state().prices.len(), 2);
    assert_eq!(controller.state().upper_barriers.len(), 2);
}

// =============================================================================
// Invariants over many seeded games
// =============================================================================

#[test]
fn test_invariants_hold_for_seeded_games() {
    for config in [GameConfig::absolute(), GameConfig::percentage()] {
        let mut controller = GameController::new(config);
        for seed in 0..200 {
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            controller.begin();
            let outcome = play_out(&mut controller, &mut rng);
            assert!(outcome.is_terminal());

            // Frozen once finished
            let frozen = controller.state().clone();
            for _ in 0..3 {
                assert_eq!(controller.tick(&mut rng), TickOutcome::Idle);
            }
            assert_eq!(controller.state(), &frozen);
        }
    }
}

#[test]
fn test_lost_games_end_on_a_touching_price() {
    let mut controller = GameController::new(GameConfig::absolute());
    for seed in 0..200 {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        controller.begin();
        if let TickOutcome::Lost(side) = play_out(&mut controller, &mut rng) {
            let state = controller.state();
            let price = state.current_price().unwrap();
            let barrier = state.current_barrier().unwrap();
            match side {
                BreachSide::Upper => assert!(price >= barrier.upper),
                BreachSide::Lower => assert!(price <= barrier.lower),
            }
        }
    }
}

// =============================================================================
// Clock-driven play and manual stop
// =============================================================================

#[test]
fn test_clock_drives_one_tick_per_interval() {
    let mut controller = GameController::new(GameConfig::absolute());
    let mut rng = flat_rng();
    let t0 = Instant::now();
    controller.start(t0);

    let mut ticks = 0;
    for ms in (50..=20_000).step_by(50) {
        if controller.update(t0 + Duration::from_millis(ms), &mut rng).is_some() {
            ticks += 1;
        }
    }
    // Ten firings to win, then the clock is cancelled
    assert_eq!(ticks, 10);
    assert_eq!(controller.state().result, Some(GameResult::Win));
    assert!(!controller.clock().is_armed());
}

#[test]
fn test_manual_stop_mid_game_is_a_win() {
    let mut controller = GameController::new(GameConfig::absolute());
    let mut rng = flat_rng();
    let t0 = Instant::now();
    controller.start(t0);
    controller.update(t0 + Duration::from_secs(1), &mut rng);
    controller.update(t0 + Duration::from_secs(2), &mut rng);

    assert!(controller.stop_early());
    let state = controller.state();
    assert!(!state.running);
    assert_eq!(state.result, Some(GameResult::Win));
    assert_eq!(state.tick_count, 2);

    assert_eq!(controller.update(t0 + Duration::from_secs(10), &mut rng), None);
    assert_eq!(controller.state().tick_count, 2);
}
