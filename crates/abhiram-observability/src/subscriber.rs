//! Bridge from the commerce crate's `tracing` events to stderr.

use tracing_subscriber::filter::LevelFilter;

use crate::{LogFormat, LogLevel};

/// Install a global fmt subscriber writing to stderr.
///
/// Returns false if a subscriber was already installed.
pub fn init_tracing(level: LogLevel, format: LogFormat) -> bool {
    let filter = match level {
        LogLevel::Trace => LevelFilter::TRACE,
        LogLevel::Debug => LevelFilter::DEBUG,
        LogLevel::Info => LevelFilter::INFO,
        LogLevel::Warn => LevelFilter::WARN,
        LogLevel::Error => LevelFilter::ERROR,
    };

    let builder = tracing_subscriber::fmt()
        .with_max_level(filter)
        .with_writer(std::io::stderr)
        .with_target(false);

    match format {
        LogFormat::Json => builder.json().try_init().is_ok(),
        LogFormat::Human => builder.compact().try_init().is_ok(),
    }
}
