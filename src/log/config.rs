use std::env::{self, VarError};
use std::sync::Arc;

use crate::log::logging::{LogBridge, SharedLogger};
use crate::log::{facade, LogLevel};
use crate::NeutrinoError;

/// Environment variable holding the default log level, e.g. `debug`.
pub const LOG_LEVEL_ENV: &str = "NEUTRINO_LOG";
/// Environment variable overriding the `log` target messages are emitted under.
pub const LOG_TARGET_ENV: &str = "NEUTRINO_LOG_TARGET";

pub const DEFAULT_TARGET: &str = "neutrino";

/// Settings for the [`LogBridge`] the library installs when asked to log
/// through the [`log`] crate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogConfig {
    pub level: LogLevel,
    pub target: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        LogConfig {
            level: LogLevel::Info,
            target: DEFAULT_TARGET.to_string(),
        }
    }
}

impl LogConfig {
    /// Reads the configuration from [`LOG_LEVEL_ENV`] and [`LOG_TARGET_ENV`].
    /// Unset variables keep their defaults. A level that does not parse, or
    /// either variable holding non-unicode data, is an error.
    pub fn from_env() -> Result<LogConfig, NeutrinoError> {
        Self::from_vars(env::var(LOG_LEVEL_ENV), env::var(LOG_TARGET_ENV))
    }

    fn from_vars(
        level: Result<String, VarError>,
        target: Result<String, VarError>,
    ) -> Result<LogConfig, NeutrinoError> {
        let mut config = LogConfig::default();
        match level {
            Ok(level) => config.level = Self::parse_level(&level)?,
            Err(VarError::NotPresent) => {}
            Err(VarError::NotUnicode(raw)) => {
                return Err(NeutrinoError::InvalidLevel(
                    raw.to_string_lossy().into_owned(),
                ))
            }
        }
        match target {
            Ok(target) if !target.trim().is_empty() => {
                config.target = target.trim().to_string();
            }
            Ok(_) | Err(VarError::NotPresent) => {}
            Err(VarError::NotUnicode(raw)) => {
                return Err(NeutrinoError::InvalidTarget(
                    raw.to_string_lossy().into_owned(),
                ))
            }
        }
        Ok(config)
    }

    pub fn parse_level(level: &str) -> Result<LogLevel, NeutrinoError> {
        level.parse()
    }

    pub fn with_level(mut self, level: LogLevel) -> Self {
        self.level = level;
        self
    }

    pub fn with_target(mut self, target: impl Into<String>) -> Self {
        self.target = target.into();
        self
    }

    pub fn build(&self) -> SharedLogger {
        Arc::new(LogBridge::new(self.target.clone(), self.level))
    }

    /// Builds the logger and hands it to the library via
    /// [`use_logger`](crate::log::use_logger). Returns the installed logger.
    pub fn install(&self) -> SharedLogger {
        let logger = self.build();
        facade::use_logger(SharedLogger::clone(&logger));
        logger
    }
}
