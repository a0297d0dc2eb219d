use super::*;
use std::fs;
use tempfile::TempDir;

const JSON_MANIFEST: &str = r#"
{
  "units": [
    { "name": "app.js", "provides": ["app"], "requires": ["base"] },
    { "name": "base.js", "provides": ["base"] },
    { "name": "main.js" }
  ]
}
"#;

const TOML_MANIFEST: &str = r#"
[[units]]
name = "app.js"
provides = ["app"]
requires = ["base"]

[[units]]
name = "base.js"
provides = ["base"]

[[units]]
name = "main.js"
"#;

const YAML_MANIFEST: &str = r#"
units:
  - name: app.js
    provides: [app]
    requires: [base]
  - name: base.js
    provides: [base]
  - name: main.js
"#;

fn expected_units() -> Vec<SimpleDependencyInfo> {
    vec![
        SimpleDependencyInfo::new("app.js")
            .with_provides(["app"])
            .with_requires(["base"]),
        SimpleDependencyInfo::new("base.js").with_provides(["base"]),
        SimpleDependencyInfo::new("main.js"),
    ]
}

#[test]
fn test_format_from_path() {
    assert_eq!(
        ManifestFormat::from_path(Path::new("units.json")),
        Some(ManifestFormat::Json)
    );
    assert_eq!(
        ManifestFormat::from_path(Path::new("dir/units.toml")),
        Some(ManifestFormat::Toml)
    );
    assert_eq!(
        ManifestFormat::from_path(Path::new("units.yml")),
        Some(ManifestFormat::Yaml)
    );
    assert_eq!(
        ManifestFormat::from_path(Path::new("units.yaml")),
        Some(ManifestFormat::Yaml)
    );
    assert_eq!(ManifestFormat::from_path(Path::new("units.txt")), None);
    assert_eq!(ManifestFormat::from_path(Path::new("units")), None);
}

#[test]
fn test_parse_json() {
    let manifest = Manifest::parse(JSON_MANIFEST, ManifestFormat::Json).unwrap();
    assert_eq!(manifest.units, expected_units());
}

#[test]
fn test_parse_toml() {
    let manifest = Manifest::parse(TOML_MANIFEST, ManifestFormat::Toml).unwrap();
    assert_eq!(manifest.units, expected_units());
}

#[test]
fn test_parse_yaml() {
    let manifest = Manifest::parse(YAML_MANIFEST, ManifestFormat::Yaml).unwrap();
    assert_eq!(manifest.units, expected_units());
}

#[test]
fn test_parse_empty_document() {
    let manifest = Manifest::parse("{}", ManifestFormat::Json).unwrap();
    assert!(manifest.units.is_empty());
}

#[test]
fn test_parse_invalid_json() {
    let result = Manifest::parse("{ units: ", ManifestFormat::Json);
    assert!(matches!(
        result,
        Err(ManifestError::ParseFailed {
            format: ManifestFormat::Json,
            ..
        })
    ));
}

#[test]
fn test_duplicate_names_rejected() {
    let content = r#"{ "units": [ { "name": "a.js" }, { "name": "a.js" } ] }"#;
    let result = Manifest::parse(content, ManifestFormat::Json);

    match result {
        Err(ManifestError::DuplicateName { name }) => assert_eq!(name, "a.js"),
        other => panic!("Expected DuplicateName, got {:?}", other),
    }
}

#[test]
fn test_load_from_file() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("units.toml");
    fs::write(&path, TOML_MANIFEST).unwrap();

    let manifest = Manifest::load(&path).unwrap();
    assert_eq!(manifest.units.len(), 3);
    assert_eq!(
        manifest.unit_named("base.js").map(|u| u.provides.clone()),
        Some(vec!["base".to_string()])
    );
    assert!(manifest.unit_named("missing.js").is_none());
}

#[test]
fn test_load_missing_file() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("absent.json");

    let result = Manifest::load(&path);
    assert!(matches!(result, Err(ManifestError::ReadFailed { .. })));
}

#[test]
fn test_load_unsupported_extension() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("units.ini");
    fs::write(&path, "units=").unwrap();

    let result = Manifest::load(&path);
    assert!(matches!(
        result,
        Err(ManifestError::UnsupportedFormat { .. })
    ));
}
