//! The subsystems that route their diagnostics through the logger handed out
//! by [`use_logger`](crate::log::use_logger).
//!
//! Each subsystem module owns one [`LogSlot`](crate::log::LogSlot), starts out
//! disabled and exposes the same three functions: `use_logger`, `disable_log`
//! and `log`.

use std::fmt;
use std::str::FromStr;

use crate::log::SharedLogger;
use crate::NeutrinoError;

macro_rules! subsystem_log {
    ($(#[$doc:meta])* $name:ident, $tag:literal) => {
        $(#[$doc])*
        pub mod $name {
            use std::sync::LazyLock;

            use crate::log::{LogSlot, SharedLogger};

            pub const TAG: &str = $tag;

            static LOG: LazyLock<LogSlot> = LazyLock::new(LogSlot::disabled);

            /// Routes this subsystem's output through `logger`.
            pub fn use_logger(logger: SharedLogger) {
                LOG.store(logger);
            }

            pub fn disable_log() {
                LOG.disable();
            }

            /// The logger this subsystem currently writes to.
            pub fn log() -> SharedLogger {
                LOG.load()
            }
        }
    };
}

subsystem_log!(
    /// Block header and chain validation.
    blockchain,
    "CHAN"
);
subsystem_log!(
    /// Script interpretation.
    txscript,
    "SCRP"
);
subsystem_log!(
    /// Peer protocol handling.
    peer,
    "PEER"
);
subsystem_log!(
    /// Known peer address bookkeeping.
    addrmgr,
    "AMGR"
);
subsystem_log!(
    /// Block connected/disconnected notifications.
    blockntfns,
    "NTFN"
);
subsystem_log!(
    /// Transaction broadcast.
    pushtx,
    "PUSH"
);
subsystem_log!(
    /// Outbound connection management.
    connmgr,
    "CMGR"
);
subsystem_log!(
    /// Query dispatch to peers.
    query,
    "QURY"
);

/// Identifies one of the library's subsystems.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Subsystem {
    Chain,
    TxScript,
    Peer,
    AddrMgr,
    BlockNtfns,
    PushTx,
    ConnMgr,
    Query,
}

impl Subsystem {
    pub const ALL: [Subsystem; 8] = [
        Subsystem::Chain,
        Subsystem::TxScript,
        Subsystem::Peer,
        Subsystem::AddrMgr,
        Subsystem::BlockNtfns,
        Subsystem::PushTx,
        Subsystem::ConnMgr,
        Subsystem::Query,
    ];

    pub fn tag(self) -> &'static str {
        match self {
            Subsystem::Chain => blockchain::TAG,
            Subsystem::TxScript => txscript::TAG,
            Subsystem::Peer => peer::TAG,
            Subsystem::AddrMgr => addrmgr::TAG,
            Subsystem::BlockNtfns => blockntfns::TAG,
            Subsystem::PushTx => pushtx::TAG,
            Subsystem::ConnMgr => connmgr::TAG,
            Subsystem::Query => query::TAG,
        }
    }

    /// Name of the module holding the subsystem's logger.
    pub fn module(self) -> &'static str {
        match self {
            Subsystem::Chain => "blockchain",
            Subsystem::TxScript => "txscript",
            Subsystem::Peer => "peer",
            Subsystem::AddrMgr => "addrmgr",
            Subsystem::BlockNtfns => "blockntfns",
            Subsystem::PushTx => "pushtx",
            Subsystem::ConnMgr => "connmgr",
            Subsystem::Query => "query",
        }
    }

    /// The logger the subsystem currently writes to.
    pub fn logger(self) -> SharedLogger {
        match self {
            Subsystem::Chain => blockchain::log(),
            Subsystem::TxScript => txscript::log(),
            Subsystem::Peer => peer::log(),
            Subsystem::AddrMgr => addrmgr::log(),
            Subsystem::BlockNtfns => blockntfns::log(),
            Subsystem::PushTx => pushtx::log(),
            Subsystem::ConnMgr => connmgr::log(),
            Subsystem::Query => query::log(),
        }
    }
}

impl fmt::Display for Subsystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for Subsystem {
    type Err = NeutrinoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Subsystem::ALL
            .into_iter()
            .find(|sub| {
                sub.tag().eq_ignore_ascii_case(wanted) || sub.module().eq_ignore_ascii_case(wanted)
            })
            .ok_or_else(|| NeutrinoError::UnknownSubsystem(s.to_string()))
    }
}

/// A subsystem together with the function that installs a logger into it.
#[derive(Clone, Copy)]
pub struct Registrant {
    subsystem: Subsystem,
    install: fn(SharedLogger),
}

impl Registrant {
    pub const fn new(subsystem: Subsystem, install: fn(SharedLogger)) -> Registrant {
        Registrant { subsystem, install }
    }

    pub fn subsystem(&self) -> Subsystem {
        self.subsystem
    }

    pub fn install(&self, logger: SharedLogger) {
        (self.install)(logger);
    }
}

impl fmt::Debug for Registrant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Registrant")
            .field("subsystem", &self.subsystem)
            .finish()
    }
}

/// Every subsystem the library hands its logger to.
pub static REGISTRANTS: &[Registrant] = &[
    Registrant::new(Subsystem::Chain, blockchain::use_logger),
    Registrant::new(Subsystem::TxScript, txscript::use_logger),
    Registrant::new(Subsystem::Peer, peer::use_logger),
    Registrant::new(Subsystem::AddrMgr, addrmgr::use_logger),
    Registrant::new(Subsystem::BlockNtfns, blockntfns::use_logger),
    Registrant::new(Subsystem::PushTx, pushtx::use_logger),
    Registrant::new(Subsystem::ConnMgr, connmgr::use_logger),
    Registrant::new(Subsystem::Query, query::use_logger),
];
