//! log4rs setup.

use log::LevelFilter;
use log4rs::append::console::{ConsoleAppender, Target};
use log4rs::config::{Appender, Config, Root};
use log4rs::encode::pattern::PatternEncoder;
use std::error::Error;
use std::path::Path;

/// Environment variable holding the fallback log level.
pub const LOG_LEVEL_ENV: &str = "CIDR_GLOB_LOG";

const STDERR_PATTERN: &str = "{d(%Y-%m-%d %H:%M:%S)} {h({l})} {M} - {m}{n}";

/// Initialise logging from `path`, or log to stderr when it does not exist.
///
/// Without a configuration file the level comes from [`LOG_LEVEL_ENV`] and
/// defaults to `warn`.
pub fn init_logging(path: &Path) -> Result<(), Box<dyn Error>> {
    if path.exists() {
        log4rs::init_file(path, Default::default())
            .map_err(|e| format!("Error initializing log4rs from {}: {e}", path.display()))?;
        log::debug!("logging configured from {}", path.display());
        return Ok(());
    }

    let level = level_from_env(std::env::var(LOG_LEVEL_ENV).ok().as_deref());
    log4rs::init_config(stderr_config(level)?)?;
    log::debug!("no {}, logging to stderr at {level}", path.display());
    Ok(())
}

/// Parse a level name, falling back to `warn`.
pub fn level_from_env(value: Option<&str>) -> LevelFilter {
    value
        .and_then(|v| v.trim().parse().ok())
        .unwrap_or(LevelFilter::Warn)
}

/// A single stderr console appender at `level`.
pub fn stderr_config(level: LevelFilter) -> Result<Config, Box<dyn Error>> {
    let stderr = ConsoleAppender::builder()
        .target(Target::Stderr)
        .encoder(Box::new(PatternEncoder::new(STDERR_PATTERN)))
        .build();

    let config = Config::builder()
        .appender(Appender::builder().build("stderr", Box::new(stderr)))
        .build(Root::builder().appender("stderr").build(level))?;
    Ok(config)
}
