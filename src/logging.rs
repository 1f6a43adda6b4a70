#![cfg(feature = "std")]

use std::env;
use log::{self, LevelFilter, Metadata, Record};

use crate::config::LOG_ENV_VAR;

/// Writes records to stderr so they never interleave with the board on stdout.
struct StderrLogger;

impl log::Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            eprintln!("{} - {}", record.level(), record.args());
        }
    }

    fn flush(&self) {}
}

static LOGGER: StderrLogger = StderrLogger;

/// Level from the `TICTACTOE_LOG` environment variable, `warn` if unset or invalid.
pub fn env_level() -> LevelFilter {
    env::var(LOG_ENV_VAR)
        .ok()
        .and_then(|lvl| lvl.parse().ok())
        .unwrap_or(LevelFilter::Warn)
}

/// Install the logger. An explicit `level` wins over the environment.
/// Calling this more than once keeps the first logger but updates the level.
pub fn init_logging(level: Option<LevelFilter>) {
    let level = level.unwrap_or_else(env_level);
    let _ = log::set_logger(&LOGGER);
    log::set_max_level(level);
}
