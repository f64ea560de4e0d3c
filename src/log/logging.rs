use std::fmt;
use std::sync::atomic::{AtomicU8, Ordering};
use std::sync::{Arc, LazyLock, Mutex, MutexGuard, PoisonError};

use crate::log::LogLevel;

/// A sink for leveled log messages produced by the library and its subsystems.
///
/// Implementations must be safe to call from any thread; the library shares a
/// single instance between every subsystem that has been handed it.
pub trait Logger: Send + Sync {
    /// Handles a single message. Implementations drop messages below
    /// [`Logger::level`].
    fn log(&self, level: LogLevel, args: fmt::Arguments<'_>);

    /// The minimum level this logger emits.
    fn level(&self) -> LogLevel;

    fn set_level(&self, level: LogLevel);

    fn enabled(&self, level: LogLevel) -> bool {
        level != LogLevel::Off && level >= self.level()
    }

    fn trace(&self, args: fmt::Arguments<'_>) {
        self.log(LogLevel::Trace, args);
    }

    fn debug(&self, args: fmt::Arguments<'_>) {
        self.log(LogLevel::Debug, args);
    }

    fn info(&self, args: fmt::Arguments<'_>) {
        self.log(LogLevel::Info, args);
    }

    fn warn(&self, args: fmt::Arguments<'_>) {
        self.log(LogLevel::Warn, args);
    }

    fn error(&self, args: fmt::Arguments<'_>) {
        self.log(LogLevel::Error, args);
    }

    fn critical(&self, args: fmt::Arguments<'_>) {
        self.log(LogLevel::Critical, args);
    }
}

/// A shared handle to a [`Logger`]. This is the reference that gets stored and
/// handed to every subsystem.
pub type SharedLogger = Arc<dyn Logger>;

/// A logger that discards every message.
#[derive(Debug, Clone, Copy, Default)]
pub struct Disabled;

impl Logger for Disabled {
    fn log(&self, _level: LogLevel, _args: fmt::Arguments<'_>) {}

    fn level(&self) -> LogLevel {
        LogLevel::Off
    }

    fn set_level(&self, _level: LogLevel) {}

    fn enabled(&self, _level: LogLevel) -> bool {
        false
    }
}

static DISABLED: LazyLock<SharedLogger> = LazyLock::new(|| Arc::new(Disabled));

/// Returns the process-wide [`Disabled`] logger.
///
/// Every call returns a handle to the same instance, so `Arc::ptr_eq` can be
/// used to tell whether a slot currently holds it.
pub fn disabled() -> SharedLogger {
    Arc::clone(&DISABLED)
}

/// Returns true if `logger` emits nothing at all, i.e. its level is
/// [`LogLevel::Off`]. Any [`Disabled`] instance qualifies, as does a logger
/// whose level has been set to `Off`.
pub fn is_disabled(logger: &SharedLogger) -> bool {
    logger.level() == LogLevel::Off
}

/// Forwards messages into the [`log`] crate under a fixed target, so that
/// any `log` backend (e.g. `env_logger`) can be used to render them.
#[derive(Debug)]
pub struct LogBridge {
    target: String,
    level: AtomicU8,
}

impl LogBridge {
    pub fn new(target: impl Into<String>, level: LogLevel) -> LogBridge {
        LogBridge {
            target: target.into(),
            level: AtomicU8::new(level as u8),
        }
    }

    pub fn target(&self) -> &str {
        &self.target
    }
}

impl Logger for LogBridge {
    fn log(&self, level: LogLevel, args: fmt::Arguments<'_>) {
        if !self.enabled(level) {
            return;
        }
        if let Some(lvl) = Option::<log::Level>::from(level) {
            log::log!(target: self.target.as_str(), lvl, "{}", args);
        }
    }

    fn level(&self) -> LogLevel {
        LogLevel::from_u8(self.level.load(Ordering::Relaxed))
    }

    fn set_level(&self, level: LogLevel) {
        self.level.store(level as u8, Ordering::Relaxed);
    }
}

/// A message captured by a [`MemoryLogger`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogRecord {
    pub level: LogLevel,
    pub message: String,
}

/// Keeps every emitted message in memory.
#[derive(Debug, Default)]
pub struct MemoryLogger {
    records: Mutex<Vec<LogRecord>>,
    level: AtomicU8,
}

impl MemoryLogger {
    pub fn new(level: LogLevel) -> MemoryLogger {
        MemoryLogger {
            records: Mutex::new(Vec::new()),
            level: AtomicU8::new(level as u8),
        }
    }

    // A panic while holding the lock leaves the vector intact.
    fn lock(&self) -> MutexGuard<'_, Vec<LogRecord>> {
        self.records.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn records(&self) -> Vec<LogRecord> {
        self.lock().clone()
    }

    pub fn messages(&self) -> Vec<String> {
        self.lock().iter().map(|r| r.message.clone()).collect()
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    pub fn clear(&self) {
        self.lock().clear();
    }
}

impl Logger for MemoryLogger {
    fn log(&self, level: LogLevel, args: fmt::Arguments<'_>) {
        if !self.enabled(level) {
            return;
        }
        let record = LogRecord {
            level,
            message: args.to_string(),
        };
        self.lock().push(record);
    }

    fn level(&self) -> LogLevel {
        LogLevel::from_u8(self.level.load(Ordering::Relaxed))
    }

    fn set_level(&self, level: LogLevel) {
        self.level.store(level as u8, Ordering::Relaxed);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn disabled_drops_everything() {
        let logger = disabled();
        logger.set_level(LogLevel::Trace);
        assert_eq!(logger.level(), LogLevel::Off);
        for level in LogLevel::ALL {
            assert!(!logger.enabled(level));
        }
        logger.critical(format_args!("dropped"));
    }

    #[test]
    fn disabled_handle_is_shared() {
        assert!(Arc::ptr_eq(&disabled(), &disabled()));
        assert!(is_disabled(&disabled()));

        let other: SharedLogger = Arc::new(Disabled);
        assert!(!Arc::ptr_eq(&other, &disabled()));
        assert!(is_disabled(&other));
    }

    #[test]
    fn logger_set_to_off_counts_as_disabled() {
        let memory: SharedLogger = Arc::new(MemoryLogger::new(LogLevel::Info));
        assert!(!is_disabled(&memory));

        memory.set_level(LogLevel::Off);
        assert!(is_disabled(&memory));
    }

    #[test]
    fn memory_logger_filters_by_level() {
        let logger = MemoryLogger::new(LogLevel::Warn);
        logger.info(format_args!("quiet"));
        logger.warn(format_args!("height {}", 42));
        logger.critical(format_args!("boom"));

        assert_eq!(
            logger.records(),
            vec![
                LogRecord {
                    level: LogLevel::Warn,
                    message: "height 42".to_string(),
                },
                LogRecord {
                    level: LogLevel::Critical,
                    message: "boom".to_string(),
                },
            ]
        );

        logger.set_level(LogLevel::Trace);
        logger.trace(format_args!("loud"));
        assert_eq!(logger.len(), 3);

        logger.clear();
        assert!(logger.is_empty());
    }

    #[test]
    fn memory_logger_never_records_off() {
        let logger = MemoryLogger::new(LogLevel::Trace);
        logger.log(LogLevel::Off, format_args!("nothing"));
        assert!(logger.is_empty());
    }

    #[test]
    fn bridge_tracks_level_changes() {
        let bridge = LogBridge::new("neutrino", LogLevel::Info);
        assert_eq!(bridge.target(), "neutrino");
        assert!(!bridge.enabled(LogLevel::Debug));

        bridge.set_level(LogLevel::Debug);
        assert_eq!(bridge.level(), LogLevel::Debug);
        assert!(bridge.enabled(LogLevel::Debug));
        bridge.debug(format_args!("no backend installed, goes nowhere"));
    }
}
