//! Logging setup
//!
//! Installs a `tracing` fmt subscriber. `log` records from the repository and
//! commands are forwarded through the subscriber's log bridge.

use tracing::Level;

/// Environment variable selecting the maximum log level
pub const LOG_LEVEL_ENV: &str = "TODO_SYNC_LOG";

/// Parse a level name, falling back to INFO
pub fn parse_level(value: Option<&str>) -> Level {
    match value.map(|v| v.trim().to_ascii_lowercase()).as_deref() {
        Some("error") => Level::ERROR,
        Some("warn") => Level::WARN,
        Some("debug") => Level::DEBUG,
        Some("trace") => Level::TRACE,
        _ => Level::INFO,
    }
}

/// Install the global subscriber. Later calls are ignored.
pub fn init_logging() {
    let level = parse_level(std::env::var(LOG_LEVEL_ENV).ok().as_deref());
    let _ = tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .try_init();
}
