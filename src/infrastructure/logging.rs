//! Logger bootstrap for the command-line binary
//!
//! The library only emits records through the `log` facade; this module
//! wires them to stderr. Level precedence: explicit `--log-level`, then
//! `RUST_LOG`, then the configured default.

use crate::error::{OrgcalError, Result};
use crate::infrastructure::Config;
use flexi_logger::{Logger, LoggerHandle};

/// Start the stderr logger. Keep the returned handle alive for the
/// lifetime of the process.
pub fn init_logging(requested: Option<&str>, config: &Config) -> Result<LoggerHandle> {
    let logger = match requested {
        Some(level) => Logger::try_with_str(level),
        None => Logger::try_with_env_or_str(&config.log_level),
    }
    .map_err(|e| OrgcalError::Config(format!("Invalid log level: {}", e)))?;

    logger
        .log_to_stderr()
        .start()
        .map_err(|e| OrgcalError::Config(format!("Failed to start logger: {}", e)))
}
