//! Diagnostic logging setup
//!
//! Results go to stdout; everything emitted through `tracing` goes to stderr
//! so piping `solidkit area` output stays clean.

use tracing::Level;

use crate::config::LogLevel;

impl From<LogLevel> for Level {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Error => Level::ERROR,
            LogLevel::Warn => Level::WARN,
            LogLevel::Info => Level::INFO,
            LogLevel::Debug => Level::DEBUG,
            LogLevel::Trace => Level::TRACE,
        }
    }
}

/// Effective level from the configured base and the `-v` count
pub fn effective_level(base: LogLevel, verbose: u8) -> LogLevel {
    base.raised_by(verbose)
}

/// Install the global stderr subscriber. Calling it twice is harmless.
pub fn init(level: LogLevel, ansi: bool) {
    let _ = tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(Level::from(level))
        .with_target(false)
        .with_ansi(ansi)
        .try_init();
}
