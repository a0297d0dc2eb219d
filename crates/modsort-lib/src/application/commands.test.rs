use super::*;
use crate::primitives::ConfigError;
use std::path::PathBuf;
use tempfile::TempDir;

const MANIFEST: &str = r#"{
  "units": [
    { "name": "app.js", "provides": ["app"], "requires": ["ui", "util"] },
    { "name": "ui.js", "provides": ["ui"], "requires": ["util"] },
    { "name": "util.js", "provides": ["util"] },
    { "name": "polyfill.js" },
    { "name": "b.js", "provides": ["b"], "requires": ["a"] },
    { "name": "a.js", "provides": ["a"], "requires": ["b"] }
  ]
}"#;

fn write_manifest(dir: &TempDir, file_name: &str, content: &str) -> PathBuf {
    let path = dir.path().join(file_name);
    std::fs::write(&path, content).unwrap();
    path
}

fn config_for(path: PathBuf, output: OutputFormat) -> AppConfig {
    AppConfig {
        manifest: Some(path),
        output,
        ..AppConfig::default()
    }
}

fn run(command: Commands, config: &AppConfig) -> Result<String> {
    let mut out = Vec::new();
    execute_command_with_output(command, config, &mut out)?;
    Ok(String::from_utf8(out).unwrap())
}

fn text_config() -> (TempDir, AppConfig) {
    let dir = TempDir::new().unwrap();
    let path = write_manifest(&dir, "units.json", MANIFEST);
    (dir, config_for(path, OutputFormat::Text))
}

mod handle_sort_tests {
    use super::*;

    #[test]
    fn it_prints_units_in_import_order() {
        let (_dir, config) = text_config();
        let output = run(Commands::Sort, &config).unwrap();
        assert_eq!(
            output,
            "util.js\nui.js\napp.js\npolyfill.js\na.js\nb.js\n"
        );
    }

    #[test]
    fn it_prints_a_json_array() {
        let (_dir, mut config) = text_config();
        config.output = OutputFormat::Json;
        let output = run(Commands::Sort, &config).unwrap();
        let names: Vec<String> = serde_json::from_str(&output).unwrap();
        assert_eq!(
            names,
            ["util.js", "ui.js", "app.js", "polyfill.js", "a.js", "b.js"]
        );
    }

    #[test]
    fn it_reads_yaml_manifests() {
        let dir = TempDir::new().unwrap();
        let path = write_manifest(
            &dir,
            "units.yaml",
            "units:\n  - name: main.js\n    requires: [lib]\n  - name: lib.js\n    provides: [lib]\n",
        );
        let output = run(Commands::Sort, &config_for(path, OutputFormat::Text)).unwrap();
        assert_eq!(output, "lib.js\nmain.js\n");
    }

    #[test]
    fn it_requires_a_manifest() {
        let err = run(Commands::Sort, &AppConfig::default()).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<ConfigError>(),
            Some(ConfigError::MissingManifest)
        ));
    }

    #[test]
    fn it_reports_unreadable_manifests_with_context() {
        let dir = TempDir::new().unwrap();
        let config = config_for(dir.path().join("missing.json"), OutputFormat::Text);
        let err = run(Commands::Sort, &config).unwrap_err();
        assert!(err.to_string().starts_with("Failed to load"));
    }
}

mod handle_deps_tests {
    use super::*;

    #[test]
    fn it_prints_the_closure_in_import_order() {
        let (_dir, config) = text_config();
        let command = Commands::Deps {
            roots: vec!["app.js".to_string()],
            unsorted: false,
        };
        assert_eq!(run(command, &config).unwrap(), "util.js\nui.js\napp.js\n");
    }

    #[test]
    fn it_keeps_manifest_order_when_unsorted() {
        let (_dir, config) = text_config();
        let command = Commands::Deps {
            roots: vec!["app.js".to_string()],
            unsorted: true,
        };
        assert_eq!(run(command, &config).unwrap(), "app.js\nui.js\nutil.js\n");
    }

    #[test]
    fn it_rejects_unknown_roots() {
        let (_dir, config) = text_config();
        let command = Commands::Deps {
            roots: vec!["nope.js".to_string()],
            unsorted: false,
        };
        let err = run(command, &config).unwrap_err();
        assert_eq!(err.to_string(), "Unknown unit: nope.js");
    }
}

mod handle_provider_tests {
    use super::*;

    #[test]
    fn it_prints_the_provider() {
        let (_dir, config) = text_config();
        let command = Commands::Provider {
            symbol: "ui".to_string(),
            optional: false,
        };
        assert_eq!(run(command, &config).unwrap(), "ui.js\n");
    }

    #[test]
    fn it_finds_exportless_units_by_file_name() {
        let (_dir, config) = text_config();
        let command = Commands::Provider {
            symbol: "./polyfill.js".to_string(),
            optional: false,
        };
        assert_eq!(run(command, &config).unwrap(), "polyfill.js\n");
    }

    #[test]
    fn it_fails_on_a_missing_provider() {
        let (_dir, config) = text_config();
        let command = Commands::Provider {
            symbol: "nothing".to_string(),
            optional: false,
        };
        let err = run(command, &config).unwrap_err();
        assert_eq!(
            err.downcast_ref::<crate::deps::DependencySortError>(),
            Some(&crate::deps::DependencySortError::MissingProvider {
                symbol: "nothing".to_string()
            })
        );
    }

    #[test]
    fn it_prints_nothing_for_an_optional_miss() {
        let (_dir, mut config) = text_config();
        let command = Commands::Provider {
            symbol: "nothing".to_string(),
            optional: true,
        };
        assert_eq!(run(command.clone(), &config).unwrap(), "");

        config.output = OutputFormat::Json;
        assert_eq!(run(command, &config).unwrap(), "null\n");
    }
}

mod handle_exportless_tests {
    use super::*;

    #[test]
    fn it_lists_units_without_provides() {
        let (_dir, config) = text_config();
        assert_eq!(run(Commands::Exportless, &config).unwrap(), "polyfill.js\n");
    }
}

mod handle_version_tests {
    use super::*;

    #[test]
    fn it_displays_version_information() {
        let output = run(Commands::Version, &AppConfig::default()).unwrap();
        assert_eq!(output, format!("modsort {}\n", env!("CARGO_PKG_VERSION")));
    }

    #[test]
    fn it_does_not_need_a_manifest() {
        let config = AppConfig {
            output: OutputFormat::Json,
            ..AppConfig::default()
        };
        let output = run(Commands::Version, &config).unwrap();
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(value["name"], "modsort");
    }
}
