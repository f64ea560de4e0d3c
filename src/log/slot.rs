use std::fmt;
use std::sync::Arc;

use arc_swap::ArcSwap;

use crate::log::logging::{disabled, is_disabled, SharedLogger};

/// Holds the logger currently in use by one component.
///
/// The stored handle is swapped atomically: a reader racing a `store` sees
/// either the previous logger or the new one in full.
pub struct LogSlot {
    inner: ArcSwap<SharedLogger>,
}

impl LogSlot {
    /// Creates a slot holding the [`Disabled`](crate::log::Disabled) logger.
    pub fn disabled() -> LogSlot {
        LogSlot {
            inner: ArcSwap::from_pointee(disabled()),
        }
    }

    pub fn store(&self, logger: SharedLogger) {
        self.inner.store(Arc::new(logger));
    }

    pub fn disable(&self) {
        self.store(disabled());
    }

    /// Returns the logger currently held by the slot.
    pub fn load(&self) -> SharedLogger {
        let current = self.inner.load();
        Arc::clone(&**current)
    }

    pub fn is_disabled(&self) -> bool {
        is_disabled(&self.inner.load())
    }
}

impl Default for LogSlot {
    fn default() -> Self {
        LogSlot::disabled()
    }
}

impl fmt::Debug for LogSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LogSlot")
            .field("disabled", &self.is_disabled())
            .field("level", &self.load().level())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use std::thread;

    use super::*;
    use crate::log::{LogLevel, MemoryLogger};

    #[test]
    fn starts_disabled() {
        let slot = LogSlot::disabled();
        assert!(slot.is_disabled());
        assert_eq!(slot.load().level(), LogLevel::Off);
    }

    #[test]
    fn store_then_disable() {
        let slot = LogSlot::default();
        let memory: SharedLogger = Arc::new(MemoryLogger::new(LogLevel::Info));

        slot.store(Arc::clone(&memory));
        assert!(!slot.is_disabled());
        assert!(Arc::ptr_eq(&slot.load(), &memory));

        slot.disable();
        assert!(slot.is_disabled());
    }

    #[test]
    fn concurrent_readers_see_whole_loggers() {
        let slot = Arc::new(LogSlot::disabled());
        let first: SharedLogger = Arc::new(MemoryLogger::new(LogLevel::Info));
        let second: SharedLogger = Arc::new(MemoryLogger::new(LogLevel::Debug));

        let readers: Vec<_> = (0..4)
            .map(|_| {
                let slot = Arc::clone(&slot);
                thread::spawn(move || {
                    for _ in 0..1000 {
                        let level = slot.load().level();
                        assert!(matches!(
                            level,
                            LogLevel::Off | LogLevel::Info | LogLevel::Debug
                        ));
                    }
                })
            })
            .collect();

        for _ in 0..1000 {
            slot.store(Arc::clone(&first));
            slot.store(Arc::clone(&second));
            slot.disable();
        }

        for reader in readers {
            reader.join().unwrap();
        }
        assert!(slot.is_disabled());
    }
}
