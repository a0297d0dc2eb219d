use super::*;
use clap::ValueEnum;

#[test]
fn test_default_filter_scopes_crate_level() {
    assert_eq!(
        Logger::default_filter(LogLevel::Debug),
        "modsort=debug,modsort_lib=debug,warn"
    );
    assert_eq!(
        Logger::default_filter(LogLevel::Error),
        "modsort=error,modsort_lib=error,warn"
    );
}

#[test]
fn test_default_filter_is_valid_directive() {
    for level in LogLevel::value_variants() {
        let filter = Logger::default_filter(*level);
        assert!(
            EnvFilter::try_new(&filter).is_ok(),
            "Filter '{}' should parse",
            filter
        );
    }
}

#[test]
fn test_init_is_single_shot() {
    // The only test that installs a global subscriber in this binary
    let config = LoggerConfig {
        level: LogLevel::Error,
        format: LogFormat::Text,
        output: LogOutput::Stderr,
        ansi: false,
    };

    let logger = Logger::init(config).unwrap();
    assert_eq!(logger.config(), &config);
    assert!(Logger::is_initialized());
    assert!(Logger::global().is_some());

    assert!(matches!(
        Logger::init(config),
        Err(LoggerError::AlreadyInitialized)
    ));
}
