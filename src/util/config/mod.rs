//! bigfib run configuration
//!
//! # Configuration hierarchy
//!
//! ```text
//! Priority (high → low):
//! 1. CLI arguments
//! 2. Environment variables (BIGFIB_LOG)
//! 3. Default values
//! ```
//!
//! # Usage
//!
//! ```rust
//! use bigfib::util::config::{RunConfig, DEFAULT_INDEX};
//!
//! let config = RunConfig::default();
//! assert_eq!(config.index, DEFAULT_INDEX);
//! assert_eq!(config.max_digits, None);
//! ```

use std::num::NonZeroU64;

use thiserror::Error;

use crate::fibonacci::Arithmetic;
use crate::util::logger::{LogLevel, ParseLogLevelError};


/// Environment variable holding the log level
pub const LOG_ENV: &str = "BIGFIB_LOG";

/// Index printed when none is given
pub const DEFAULT_INDEX: NonZeroU64 = match NonZeroU64::new(1_000_000) {
    Some(n) => n,
    None => panic!("default index must be non-zero"),
};

/// Everything one run needs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunConfig {
    /// Which Fibonacci term to print
    pub index: NonZeroU64,
    /// Integer implementation to compute with
    pub arithmetic: Arithmetic,
    /// Refuse to print results longer than this; `None` is unlimited
    pub max_digits: Option<usize>,
    pub log_level: LogLevel,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            index: DEFAULT_INDEX,
            arithmetic: Arithmetic::default(),
            max_digits: None,
            log_level: LogLevel::default(),
        }
    }
}

/// Configuration errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("invalid BIGFIB_LOG: {0}")]
    InvalidLogLevel(#[from] ParseLogLevelError),
}

/// Pick the log level: `--verbose` wins, then the environment, then the default
pub fn resolve_log_level(
    verbose: bool,
    env_value: Option<&str>,
) -> Result<LogLevel, ConfigError> {
    if verbose {
        return Ok(LogLevel::Debug);
    }
    match env_value.map(str::trim) {
        None | Some("") => Ok(LogLevel::default()),
        Some(value) => Ok(value.parse()?),
    }
}

/// Current value of `BIGFIB_LOG`, if set
pub fn env_log_level() -> Option<String> {
    std::env::var(LOG_ENV).ok()
}
