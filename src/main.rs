use env_logger::Builder;
use log::LevelFilter;

use rust_neutrino::log::{self as neutrino_log, LogConfig, LogLevel, Logger};
use rust_neutrino::subsystems::{self, Subsystem};

fn setup_logging() -> LogConfig {
    let mut builder = Builder::from_default_env();
    builder.filter(None, LevelFilter::Info).init();

    match LogConfig::from_env() {
        Ok(config) => config,
        Err(err) => {
            log::warn!("{}, falling back to defaults", err);
            LogConfig::default()
        }
    }
}

fn main() {
    let config = setup_logging();

    // Nothing configured yet, this goes nowhere.
    neutrino_log::logger().info(format_args!("dropped before configuration"));

    let logger = config.install();
    log::info!(
        "library logging enabled at {} for {} subsystems",
        logger.level(),
        subsystems::REGISTRANTS.len()
    );

    neutrino_log::logger().info(format_args!("{}: starting up", neutrino_log::TAG));
    for sub in Subsystem::ALL {
        sub.logger().info(format_args!("{}: logger installed", sub.tag()));
    }
    subsystems::peer::log().debug(format_args!(
        "{}: only shown at debug",
        subsystems::peer::TAG
    ));

    logger.set_level(LogLevel::Warn);
    subsystems::blockchain::log().info(format_args!("suppressed after raising the level"));
    subsystems::blockchain::log().warn(format_args!(
        "{}: level raised to {}",
        subsystems::blockchain::TAG,
        logger.level()
    ));

    neutrino_log::disable_log();
    neutrino_log::logger().warn(format_args!("dropped after disable_log"));
    subsystems::query::log().warn(format_args!(
        "{}: subsystems keep their logger after disable_log",
        subsystems::query::TAG
    ));
}
