pub mod config;
pub mod facade;
pub mod level;
pub mod logging;
pub mod slot;

pub use config::LogConfig;
pub use facade::{
    disable_log, facade, logger, use_logger, use_optional_logger, LoggerFacade, TAG,
};
pub use level::LogLevel;
pub use logging::{
    disabled, is_disabled, Disabled, LogBridge, LogRecord, Logger, MemoryLogger, SharedLogger,
};
pub use slot::LogSlot;
