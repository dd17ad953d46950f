use converge::build_info;
use converge::config::{self, GameConfig};
use converge::core::{BarrierPolicy, GameController, Session, INPUT_POLL_MS};
use converge::input::{map_key, GameInput};
use converge::logging;
use converge::ui::draw_ui;
use crossterm::event::{self, Event};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use log::warn;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::path::PathBuf;
use std::time::{Duration, Instant};

struct CliOptions {
    config_path: Option<PathBuf>,
    percentage: bool,
}

fn print_help() {
    println!("Converge - survive the shrinking barriers\n");
    println!("Usage: converge [options]\n");
    println!("Options:");
    println!("  -c, --config <PATH>  Load tuning from a JSON file");
    println!("  --percentage         Use percentage-of-spot barriers");
    println!("  --version            Show version information");
    println!("  --help               Show this help message\n");
    println!("Keys: [B] buy/start  [S] sell/stop  [P] switch barriers  [Q] quit");
}

fn parse_args(args: &[String]) -> CliOptions {
    let mut options = CliOptions {
        config_path: None,
        percentage: false,
    };

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "-c" | "--config" => {
                if i + 1 < args.len() {
                    options.config_path = Some(PathBuf::from(&args[i + 1]));
                    i += 1;
                }
            }
            "--percentage" => {
                options.percentage = true;
            }
            "--version" | "-v" => {
                println!("{}", build_info::version_line("converge"));
                std::process::exit(0);
            }
            "--help" | "-h" => {
                print_help();
                std::process::exit(0);
            }
            other => {
                eprintln!("Unknown option: {}", other);
                eprintln!("Run 'converge --help' for usage.");
                std::process::exit(1);
            }
        }
        i += 1;
    }

    options
}

fn main() -> io::Result<()> {
    let args: Vec<String> = std::env::args().collect();
    let options = parse_args(&args);

    if let Some(dir) = config::data_dir() {
        if let Err(e) = logging::init_file(&dir) {
            eprintln!("Warning: logging disabled ({})", e);
        }
    }

    let mut game_config = match GameConfig::load_or_default(options.config_path.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };
    if options.percentage {
        game_config = game_config.with_barrier(BarrierPolicy::percentage());
    }

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    stdout.execute(EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run(&mut terminal, game_config);

    // Restore the terminal even if the loop failed
    disable_raw_mode()?;
    terminal.backend_mut().execute(LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn run(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    game_config: GameConfig,
) -> io::Result<()> {
    let mut controller = GameController::new(game_config);
    let mut session = Session::new();
    let mut rng = rand::thread_rng();
    // `P` flips between these two, keeping the rest of the loaded tuning
    let base_config = controller.config().clone();
    let (absolute, percentage) = match base_config.barrier {
        policy @ BarrierPolicy::Absolute { .. } => (policy, BarrierPolicy::percentage()),
        policy @ BarrierPolicy::Percentage { .. } => (BarrierPolicy::absolute(), policy),
    };

    loop {
        terminal.draw(|frame| draw_ui(frame, &controller, &session))?;

        if event::poll(Duration::from_millis(INPUT_POLL_MS))? {
            if let Event::Key(key_event) = event::read()? {
                match map_key(key_event) {
                    GameInput::Start => {
                        if !controller.is_running() {
                            controller.start(Instant::now());
                            let policy_name = controller.config().barrier.name();
                            session.record_start(controller.state(), policy_name);
                        }
                    }
                    GameInput::Stop => {
                        if controller.stop_early() {
                            session.record_early_stop(controller.state());
                        }
                    }
                    GameInput::TogglePolicy => {
                        let next = match controller.config().barrier {
                            BarrierPolicy::Absolute { .. } => percentage,
                            BarrierPolicy::Percentage { .. } => absolute,
                        };
                        if !controller.set_config(base_config.clone().with_barrier(next)) {
                            warn!("barrier switch ignored while a game is running");
                        }
                    }
                    GameInput::Quit => break,
                    GameInput::Other => {}
                }
            }
        }

        if let Some(outcome) = controller.update(Instant::now(), &mut rng) {
            session.record_tick(outcome, controller.state());
        }
    }

    Ok(())
}
