#[cfg(test)]
mod tests {
    use std::env;
    use std::sync::{Mutex, MutexGuard, PoisonError};

    use rust_neutrino::log::config::{DEFAULT_TARGET, LOG_LEVEL_ENV, LOG_TARGET_ENV};
    use rust_neutrino::{LogConfig, LogLevel, NeutrinoError};

    // The environment is shared by every test in this binary.
    static SERIAL: Mutex<()> = Mutex::new(());

    fn serial() -> MutexGuard<'static, ()> {
        let guard = SERIAL.lock().unwrap_or_else(PoisonError::into_inner);
        env::remove_var(LOG_LEVEL_ENV);
        env::remove_var(LOG_TARGET_ENV);
        guard
    }

    #[test]
    fn unset_environment_gives_defaults() {
        let _guard = serial();

        assert_eq!(LogConfig::from_env().unwrap(), LogConfig::default());
    }

    #[test]
    fn environment_sets_level_and_target() {
        let _guard = serial();
        env::set_var(LOG_LEVEL_ENV, "trace");
        env::set_var(LOG_TARGET_ENV, "spv-wallet");

        let config = LogConfig::from_env().unwrap();
        assert_eq!(config.level, LogLevel::Trace);
        assert_eq!(config.target, "spv-wallet");
    }

    #[test]
    fn blank_target_keeps_default() {
        let _guard = serial();
        env::set_var(LOG_TARGET_ENV, "   ");

        assert_eq!(LogConfig::from_env().unwrap().target, DEFAULT_TARGET);
    }

    #[test]
    fn unknown_level_name_is_rejected() {
        let _guard = serial();
        env::set_var(LOG_LEVEL_ENV, "shouty");

        assert_eq!(
            LogConfig::from_env(),
            Err(NeutrinoError::InvalidLevel("shouty".to_string()))
        );
    }

    #[cfg(unix)]
    #[test]
    fn non_unicode_level_is_rejected() {
        use std::ffi::OsStr;
        use std::os::unix::ffi::OsStrExt;

        let _guard = serial();
        env::set_var(LOG_LEVEL_ENV, OsStr::from_bytes(&[0x64, 0xff, 0x62]));

        assert!(matches!(
            LogConfig::from_env(),
            Err(NeutrinoError::InvalidLevel(_))
        ));
    }

    #[cfg(unix)]
    #[test]
    fn non_unicode_target_is_rejected() {
        use std::ffi::OsStr;
        use std::os::unix::ffi::OsStrExt;

        let _guard = serial();
        env::set_var(LOG_TARGET_ENV, OsStr::from_bytes(&[0x6e, 0xfe]));

        assert!(matches!(
            LogConfig::from_env(),
            Err(NeutrinoError::InvalidTarget(_))
        ));
    }
}
