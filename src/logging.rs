//! `env_logger` setup for the two binaries.
//!
//! The terminal game owns stdout/stderr while the alternate screen is up, so
//! its log goes to a file; the simulator logs to stderr. `RUST_LOG` picks the
//! level (default `warn`).

use env_logger::{Builder, Env, Target};
use log::LevelFilter;
use std::fs::{self, OpenOptions};
use std::io;
use std::path::{Path, PathBuf};

pub const LOG_FILENAME: &str = "converge.log";

fn builder() -> Builder {
    Builder::from_env(Env::default().default_filter_or("warn"))
}

/// Logs to stderr. `verbose` turns on per-run simulator detail.
/// Safe to call more than once.
pub fn init_stderr(verbose: bool) {
    let mut builder = builder();
    if verbose {
        builder.filter_module("converge::simulator", LevelFilter::Debug);
    }
    let _ = builder.target(Target::Stderr).try_init();
}

/// Appends log output to `dir/converge.log`, creating `dir` if needed.
pub fn init_file(dir: &Path) -> io::Result<PathBuf> {
    fs::create_dir_all(dir)?;
    let path = dir.join(LOG_FILENAME);
    let file = OpenOptions::new().create(true).append(true).open(&path)?;
    let _ = builder()
        .target(Target::Pipe(Box::new(file)))
        .format_timestamp_millis()
        .try_init();
    Ok(path)
}
