//! End-to-end tests against the built binary

use assert_cmd::Command;
use predicates::prelude::*;
use std::path::PathBuf;
use tempfile::TempDir;

const UNITS: &str = r#"{
  "units": [
    { "name": "app.js", "provides": ["app"], "requires": ["ui"] },
    { "name": "ui.js", "provides": ["ui"], "requires": ["app"] },
    { "name": "reset.css.js" }
  ]
}"#;

fn manifest(dir: &TempDir) -> PathBuf {
    let path = dir.path().join("units.json");
    std::fs::write(&path, UNITS).unwrap();
    path
}

/// Binary with a clean environment so host settings cannot leak in
fn modsort(dir: &TempDir) -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_modsort"));
    cmd.current_dir(dir.path())
        .env_remove("MODSORT_MANIFEST")
        .env_remove("MODSORT_OUTPUT")
        .env_remove("MODSORT_SYNTHETIC_PREFIX")
        .env_remove("RUST_LOG");
    cmd
}

#[test]
fn test_sort() {
    let dir = TempDir::new().unwrap();
    let path = manifest(&dir);

    modsort(&dir)
        .arg("sort")
        .arg("--manifest")
        .arg(&path)
        .assert()
        .success()
        .stdout("ui.js\napp.js\nreset.css.js\n");
}

#[test]
fn test_sort_json() {
    let dir = TempDir::new().unwrap();
    let path = manifest(&dir);

    modsort(&dir)
        .args(["sort", "--output", "json", "-m"])
        .arg(&path)
        .assert()
        .success()
        .stdout("[\"ui.js\",\"app.js\",\"reset.css.js\"]\n");
}

#[test]
fn test_manifest_from_environment() {
    let dir = TempDir::new().unwrap();
    let path = manifest(&dir);

    modsort(&dir)
        .arg("exportless")
        .env("MODSORT_MANIFEST", &path)
        .assert()
        .success()
        .stdout("reset.css.js\n");
}

#[test]
fn test_manifest_from_env_file() {
    let dir = TempDir::new().unwrap();
    manifest(&dir);
    std::fs::write(dir.path().join(".env"), "MODSORT_MANIFEST=units.json\n").unwrap();

    modsort(&dir)
        .arg("sort")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("ui.js\n"));
}

#[test]
fn test_deps_unsorted() {
    let dir = TempDir::new().unwrap();
    let path = manifest(&dir);

    modsort(&dir)
        .args(["deps", "app.js", "--unsorted", "-m"])
        .arg(&path)
        .assert()
        .success()
        .stdout("app.js\nui.js\n");
}

#[test]
fn test_deps_unknown_root_fails() {
    let dir = TempDir::new().unwrap();
    let path = manifest(&dir);

    modsort(&dir)
        .args(["deps", "nope.js", "-m"])
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown unit: nope.js"));
}

#[test]
fn test_provider_missing_fails() {
    let dir = TempDir::new().unwrap();
    let path = manifest(&dir);

    modsort(&dir)
        .args(["provider", "router", "-m"])
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("No input provides symbol: router"));
}

#[test]
fn test_provider_optional_miss_succeeds() {
    let dir = TempDir::new().unwrap();
    let path = manifest(&dir);

    modsort(&dir)
        .args(["provider", "router", "--optional", "-m"])
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
}

#[test]
fn test_provider_by_file_name() {
    let dir = TempDir::new().unwrap();
    let path = manifest(&dir);

    modsort(&dir)
        .args(["provider", "./reset.css.js", "-m"])
        .arg(&path)
        .assert()
        .success()
        .stdout("reset.css.js\n");
}

#[test]
fn test_missing_manifest_fails() {
    let dir = TempDir::new().unwrap();

    modsort(&dir)
        .arg("sort")
        .assert()
        .failure()
        .stderr(predicate::str::contains("No manifest given"));
}

#[test]
fn test_version() {
    let dir = TempDir::new().unwrap();

    modsort(&dir)
        .arg("version")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("modsort "));
}
