//! Logging setup
//!
//! The library emits `tracing` events; the binary installs a stderr
//! subscriber here. Stdout stays reserved for command output.

use tracing::Level;
use tracing_subscriber::{filter::Targets, fmt, prelude::*};

/// Map the `-v` count to a level: warn, info, debug, trace
pub fn level_for_verbosity(verbose: u8) -> Level {
    match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    }
}

pub fn setup_logging(verbose: u8) {
    let level = level_for_verbosity(verbose);

    let filter = Targets::new()
        .with_target("expense_tracker", level)
        .with_target("expenses", level)
        .with_default(Level::WARN);

    let stderr_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(verbose >= 2)
        .without_time();

    // A second call (e.g. from tests) finds a subscriber already installed
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(stderr_layer)
        .try_init();
}
