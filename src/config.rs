//! Application configuration.
//!
//! Settings come from defaults, then `RUSTY_ROBOTS_*` environment
//! variables, then command-line overrides.

use crate::error::RobotsError;
use crate::robots::{DEFAULT_VALUE_MAX_LENGTH_BYTES, ParserConfig};
use std::env;
use std::str::FromStr;
use tracing_subscriber::filter::LevelFilter;

pub const LOG_LEVEL_ENV: &str = "RUSTY_ROBOTS_LOG_LEVEL";
pub const MAX_VALUE_LENGTH_ENV: &str = "RUSTY_ROBOTS_MAX_VALUE_LENGTH";

// Values are stored with room for two terminator bytes.
const MIN_VALUE_MAX_LENGTH_BYTES: usize = 2;

/// Verbosity of the diagnostics written to stderr.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    #[default]
    Warn,
    Error,
}

const LOG_LEVEL_NAMES: [(&str, LogLevel); 6] = [
    ("trace", LogLevel::Trace),
    ("debug", LogLevel::Debug),
    ("info", LogLevel::Info),
    ("warn", LogLevel::Warn),
    ("warning", LogLevel::Warn),
    ("error", LogLevel::Error),
];

impl FromStr for LogLevel {
    type Err = RobotsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();
        LOG_LEVEL_NAMES
            .iter()
            .find(|(known, _)| known.eq_ignore_ascii_case(name))
            .map(|&(_, level)| level)
            .ok_or_else(|| {
                RobotsError::InvalidConfig(format!(
                    "log level '{s}' is not one of trace, debug, info, warn or error"
                ))
            })
    }
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Trace => LevelFilter::TRACE,
            LogLevel::Debug => LevelFilter::DEBUG,
            LogLevel::Info => LevelFilter::INFO,
            LogLevel::Warn => LevelFilter::WARN,
            LogLevel::Error => LevelFilter::ERROR,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub log_level: LogLevel,
    /// Longest directive value kept, in bytes.
    pub value_max_length_bytes: usize,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            log_level: LogLevel::default(),
            value_max_length_bytes: DEFAULT_VALUE_MAX_LENGTH_BYTES,
        }
    }
}

impl AppConfig {
    /// Reads `RUSTY_ROBOTS_LOG_LEVEL` and `RUSTY_ROBOTS_MAX_VALUE_LENGTH`,
    /// falling back to defaults for unset variables.
    ///
    /// # Errors
    ///
    /// Returns [`RobotsError::InvalidConfig`] if a variable is set to an
    /// unusable value.
    pub fn from_env() -> Result<Self, RobotsError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, RobotsError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let log_level = match lookup(LOG_LEVEL_ENV) {
            Some(val) => val.parse()?,
            None => LogLevel::default(),
        };

        let value_max_length_bytes = match lookup(MAX_VALUE_LENGTH_ENV) {
            Some(val) => parse_max_value_length(&val)?,
            None => DEFAULT_VALUE_MAX_LENGTH_BYTES,
        };

        Ok(Self {
            log_level,
            value_max_length_bytes,
        })
    }

    /// Command-line values win over whatever the environment provided.
    pub fn apply_overrides(
        mut self,
        log_level: Option<LogLevel>,
        value_max_length_bytes: Option<usize>,
    ) -> Self {
        if let Some(level) = log_level {
            self.log_level = level;
        }
        if let Some(max_length) = value_max_length_bytes {
            self.value_max_length_bytes = max_length;
        }
        self
    }

    /// # Errors
    ///
    /// Returns [`RobotsError::InvalidConfig`] if the value length limit is too
    /// small to hold any value.
    pub fn validate(self) -> Result<Self, RobotsError> {
        if self.value_max_length_bytes <= MIN_VALUE_MAX_LENGTH_BYTES {
            return Err(invalid_max_value_length(&self.value_max_length_bytes.to_string()));
        }
        Ok(self)
    }

    pub fn parser_config(&self) -> ParserConfig {
        ParserConfig::new(self.value_max_length_bytes)
    }
}

fn parse_max_value_length(val: &str) -> Result<usize, RobotsError> {
    match val.trim().parse::<usize>() {
        Ok(max_length) if max_length > MIN_VALUE_MAX_LENGTH_BYTES => Ok(max_length),
        _ => Err(invalid_max_value_length(val)),
    }
}

fn invalid_max_value_length(val: &str) -> RobotsError {
    RobotsError::InvalidConfig(format!(
        "invalid maximum value length '{val}', expected an integer greater than {MIN_VALUE_MAX_LENGTH_BYTES}"
    ))
}
