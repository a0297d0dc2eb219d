use super::*;
use crate::primitives::OutputFormat;
use std::path::PathBuf;

#[test]
fn test_resolve_keeps_cli_values() {
    let cli = AppConfig {
        manifest: Some(PathBuf::from("units.toml")),
        output: OutputFormat::Json,
        log_level: 2,
        ..AppConfig::default()
    };

    let config = AppConfig::resolve(cli).unwrap();
    assert_eq!(config.manifest, Some(PathBuf::from("units.toml")));
    assert_eq!(config.output, OutputFormat::Json);
    assert_eq!(config.log_level, 2);
    assert_eq!(config.synthetic_prefix, "module$");
}

#[test]
fn test_resolve_rejects_invalid_cli_values() {
    let cli = AppConfig {
        synthetic_prefix: String::new(),
        ..AppConfig::default()
    };

    assert!(matches!(
        AppConfig::resolve(cli),
        Err(ConfigError::ValidationFailed { .. })
    ));
}

#[test]
fn test_env_file_names() {
    assert_eq!(ENV_FILES, [".env.local", ".env"]);
}
