use std::sync::LazyLock;

use crate::log::logging::SharedLogger;
use crate::log::slot::LogSlot;
use crate::subsystems::{Registrant, REGISTRANTS};

/// Tag of the library's own log output.
pub const TAG: &str = "BTCN";

/// The single point of control for where the library's log output goes.
///
/// The facade keeps its own logger and, when handed a new one, passes it on to
/// a fixed list of [`Registrant`]s. A freshly created facade is disabled.
#[derive(Debug)]
pub struct LoggerFacade {
    active: LogSlot,
    registrants: &'static [Registrant],
}

impl LoggerFacade {
    pub fn new(registrants: &'static [Registrant]) -> LoggerFacade {
        LoggerFacade {
            active: LogSlot::disabled(),
            registrants,
        }
    }

    /// Silences the facade's own output.
    ///
    /// Loggers already handed to the registrants stay in place. To silence
    /// them as well, pass [`disabled()`](crate::log::disabled) to
    /// [`LoggerFacade::use_logger`].
    pub fn disable_log(&self) {
        self.active.disable();
    }

    /// Makes `logger` the facade's logger and hands it to every registrant.
    ///
    /// Registrants are called in list order, each exactly once.
    pub fn use_logger(&self, logger: SharedLogger) {
        self.active.store(SharedLogger::clone(&logger));
        for registrant in self.registrants {
            registrant.install(SharedLogger::clone(&logger));
        }
    }

    /// Like [`LoggerFacade::use_logger`], with `None` behaving exactly like
    /// [`LoggerFacade::disable_log`].
    pub fn use_optional_logger(&self, logger: Option<SharedLogger>) {
        match logger {
            Some(logger) => self.use_logger(logger),
            None => self.disable_log(),
        }
    }

    /// The logger the facade currently emits its own messages through.
    pub fn logger(&self) -> SharedLogger {
        self.active.load()
    }

    pub fn is_disabled(&self) -> bool {
        self.active.is_disabled()
    }

    pub fn registrants(&self) -> &'static [Registrant] {
        self.registrants
    }
}

static FACADE: LazyLock<LoggerFacade> = LazyLock::new(|| LoggerFacade::new(REGISTRANTS));

/// The process-wide facade, wired to every subsystem in [`REGISTRANTS`].
pub fn facade() -> &'static LoggerFacade {
    &FACADE
}

/// Disables all library log output.
///
/// Logging is disabled by default until [`use_logger`] is called.
pub fn disable_log() {
    FACADE.disable_log();
}

/// Uses `logger` for the library's output and hands it to every subsystem.
pub fn use_logger(logger: SharedLogger) {
    FACADE.use_logger(logger);
}

pub fn use_optional_logger(logger: Option<SharedLogger>) {
    FACADE.use_optional_logger(logger);
}

/// The logger the library currently emits its own messages through.
pub fn logger() -> SharedLogger {
    FACADE.logger()
}
