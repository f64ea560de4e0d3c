use std::fmt;

pub mod log;
pub mod subsystems;

/// A collection of errors emitted by this library
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NeutrinoError {
    InvalidLevel(String),
    UnknownSubsystem(String),
    InvalidTarget(String),
}

impl fmt::Display for NeutrinoError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NeutrinoError::InvalidLevel(level) => write!(f, "Invalid log level: {}", level),
            NeutrinoError::UnknownSubsystem(name) => write!(f, "Unknown subsystem: {}", name),
            NeutrinoError::InvalidTarget(target) => write!(f, "Invalid log target: {}", target),
        }
    }
}

impl std::error::Error for NeutrinoError {}

pub use crate::log::{
    disable_log, disabled, logger, use_logger, use_optional_logger, Disabled, LogBridge,
    LogConfig, LogLevel, LogRecord, LogSlot, Logger, LoggerFacade, MemoryLogger, SharedLogger,
};

pub use crate::subsystems::{Registrant, Subsystem, REGISTRANTS};
