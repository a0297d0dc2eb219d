use super::*;

#[test]
fn test_config_defaults() {
    let config = AppConfig::default();
    assert_eq!(config.manifest, None);
    assert_eq!(config.synthetic_prefix, "module$");
    assert_eq!(config.output, OutputFormat::Text);
    assert_eq!(config.log_level, 0);
    assert_eq!(config.color, ColorChoice::Auto);
}

#[test]
fn test_defaults_match_parser_defaults() {
    let parsed = AppConfig::try_parse_from(["modsort"]).unwrap();
    assert_eq!(parsed, AppConfig::default());
}

#[test]
fn test_config_merging() {
    let base = AppConfig {
        color: ColorChoice::Never,
        ..AppConfig::default()
    };
    let override_config = AppConfig {
        manifest: Some(PathBuf::from("units.json")),
        log_level: 3,
        output: OutputFormat::Json,
        ..AppConfig::default()
    };

    let merged = base.merge_with(override_config);
    assert_eq!(merged.manifest, Some(PathBuf::from("units.json")));
    assert_eq!(merged.log_level, 3);
    assert_eq!(merged.output, OutputFormat::Json);
    // default-valued fields in `other` do not clobber `self`
    assert_eq!(merged.color, ColorChoice::Never);
}

#[test]
fn test_validate_rejects_empty_prefix() {
    let config = AppConfig {
        synthetic_prefix: String::new(),
        ..AppConfig::default()
    };
    assert!(matches!(
        config.validate(),
        Err(ConfigError::ValidationFailed { .. })
    ));
    assert!(AppConfig::default().validate().is_ok());
}

#[test]
fn test_manifest_path_required() {
    let config = AppConfig::default();
    assert!(matches!(
        config.manifest_path(),
        Err(ConfigError::MissingManifest)
    ));

    let config = AppConfig {
        manifest: Some(PathBuf::from("deps.toml")),
        ..AppConfig::default()
    };
    assert_eq!(config.manifest_path().unwrap(), Path::new("deps.toml"));
}

#[test]
fn test_logger_config_from_app_config() {
    let config = AppConfig {
        log_level: 2,
        log_format: LogFormat::Json,
        color: ColorChoice::Never,
        ..AppConfig::default()
    };

    let logger_config = config.to_logger_config();
    assert_eq!(logger_config.level, LogLevel::Info);
    assert_eq!(logger_config.format, LogFormat::Json);
    assert_eq!(logger_config.output, LogOutput::Stderr);
    assert!(!logger_config.ansi);
}
