//! Barrier tuning simulator CLI.
//!
//! Plays many headless games and reports how often they are won.
//!
//! Usage:
//!   cargo run --bin simulate -- [OPTIONS]
//!
//! Examples:
//!   cargo run --bin simulate                       # 1000 games, absolute barriers
//!   cargo run --bin simulate -- --percentage       # percentage-of-spot barriers
//!   cargo run --bin simulate -- -n 100 --seed 42   # reproducible run

use converge::build_info;
use converge::config::GameConfig;
use converge::core::BarrierPolicy;
use converge::logging;
use converge::simulator::{run_simulation, SimConfig};
use std::env;
use std::path::PathBuf;

struct Options {
    config: SimConfig,
    config_path: Option<PathBuf>,
    percentage: bool,
    json: bool,
    verbose: bool,
}

fn main() {
    let args: Vec<String> = env::args().collect();
    let mut options = parse_args(&args);
    logging::init_stderr(options.verbose);

    if let Some(path) = &options.config_path {
        match GameConfig::load(path) {
            Ok(game) => options.config.game = game,
            Err(e) => {
                eprintln!("Error: {}", e);
                std::process::exit(1);
            }
        }
    }
    if options.percentage {
        options.config.game.barrier = BarrierPolicy::percentage();
    }
    let config = options.config;

    println!("╔═══════════════════════════════════════════════════════════════╗");
    println!("║              CONVERGE BARRIER SIMULATOR                       ║");
    println!("╚═══════════════════════════════════════════════════════════════╝");
    println!();
    println!("Configuration:");
    println!("  Runs:           {}", config.num_runs);
    println!("  Barriers:       {}", config.game.barrier.name());
    println!("  Win ticks:      {}", config.game.win_ticks);
    println!("  Drift std:      {}", config.game.drift_std);
    if let Some(tick) = config.sell_at_tick {
        println!("  Sell at tick:   {}", tick);
    }
    if let Some(seed) = config.seed {
        println!("  Seed:           {}", seed);
    }
    println!();

    let report = run_simulation(&config);
    println!("{}", report.to_text());

    if options.json {
        match report.to_json() {
            Ok(json) => {
                let filename = format!(
                    "sim_report_{}.json",
                    chrono::Utc::now().format("%Y%m%d_%H%M%S")
                );
                if let Err(e) = std::fs::write(&filename, json) {
                    eprintln!("Failed to write JSON report: {}", e);
                    std::process::exit(1);
                }
                println!("JSON report saved to: {}", filename);
            }
            Err(e) => {
                eprintln!("Failed to serialize report: {}", e);
                std::process::exit(1);
            }
        }
    }
}

fn parse_args(args: &[String]) -> Options {
    let mut options = Options {
        config: SimConfig::default(),
        config_path: None,
        percentage: false,
        json: false,
        verbose: false,
    };

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "-n" | "--runs" => {
                if i + 1 < args.len() {
                    options.config.num_runs = args[i + 1].parse().unwrap_or(1000);
                    i += 1;
                }
            }
            "-s" | "--seed" => {
                if i + 1 < args.len() {
                    options.config.seed = args[i + 1].parse().ok();
                    i += 1;
                }
            }
            "--sell-at" => {
                if i + 1 < args.len() {
                    options.config.sell_at_tick = args[i + 1].parse().ok();
                    i += 1;
                }
            }
            "-c" | "--config" => {
                if i + 1 < args.len() {
                    options.config_path = Some(PathBuf::from(&args[i + 1]));
                    i += 1;
                }
            }
            "--percentage" => {
                options.percentage = true;
            }
            "--json" => {
                options.json = true;
            }
            "-v" | "--verbose" => {
                options.verbose = true;
            }
            "--version" => {
                println!("{}", build_info::version_line("simulate"));
                std::process::exit(0);
            }
            "-h" | "--help" => {
                print_help();
                std::process::exit(0);
            }
            _ => {}
        }
        i += 1;
    }

    options
}

fn print_help() {
    println!("Converge Barrier Simulator");
    println!();
    println!("USAGE:");
    println!("    cargo run --bin simulate -- [OPTIONS]");
    println!();
    println!("OPTIONS:");
    println!("    -n, --runs <N>        Number of games (default: 1000)");
    println!("    -s, --seed <S>        Random seed for reproducibility");
    println!("    --sell-at <T>         Sell at tick T instead of playing on");
    println!("    -c, --config <PATH>   Load game tuning from a JSON file");
    println!("    --percentage          Use percentage-of-spot barriers");
    println!("    --json                Save JSON report");
    println!("    -v, --verbose         Log every run to stderr");
    println!("    --version             Show version information");
    println!("    -h, --help            Show this help");
}
