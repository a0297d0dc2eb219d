use modsort_lib::application::config::AppConfig;
use modsort_lib::primitives::{ColorChoice, ConfigError, LogLevel, OutputFormat};
use std::path::PathBuf;

#[test]
fn test_config_default_creation() {
    // Simple test for config creation without loading
    let config = AppConfig::default();

    // Just verify the config has reasonable defaults
    assert!(config.log_level <= 4);
    assert_eq!(config.synthetic_prefix, modsort_lib::deps::MODULE_NAME_PREFIX);
    assert_eq!(config.color, ColorChoice::Auto);
}

#[test]
fn test_config_merging_integration() {
    let base_config = AppConfig::default();
    let override_config = AppConfig {
        log_level: 3,
        output: OutputFormat::Json,
        color: ColorChoice::Never,
        ..AppConfig::default()
    };

    let merged = base_config.merge_with(override_config);

    // Override values should be preserved
    assert_eq!(merged.log_level, 3);
    assert_eq!(merged.output, OutputFormat::Json);
    assert_eq!(merged.color, ColorChoice::Never);

    // Default values should remain for non-overridden fields
    assert_eq!(merged.synthetic_prefix, "module$");
    assert_eq!(merged.manifest, None);
}

#[test]
fn test_logger_config_follows_app_config() {
    let config = AppConfig {
        log_level: 3,
        color: ColorChoice::Never,
        ..AppConfig::default()
    };

    let logger_config = config.to_logger_config();
    assert_eq!(logger_config.level, LogLevel::Debug);
    assert!(!logger_config.ansi);
}

#[test]
fn test_manifest_path_required() {
    let config = AppConfig::default();
    assert!(matches!(
        config.manifest_path(),
        Err(ConfigError::MissingManifest)
    ));

    let config = AppConfig {
        manifest: Some(PathBuf::from("units.yaml")),
        ..AppConfig::default()
    };
    assert_eq!(
        config.manifest_path().unwrap(),
        PathBuf::from("units.yaml").as_path()
    );
}
