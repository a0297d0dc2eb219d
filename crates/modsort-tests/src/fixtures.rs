//! Fixture infrastructure for workflow tests
//!
//! Manifests are written into a temporary directory that lives as long as
//! the fixture, and commands run against an in-memory output buffer.

use anyhow::Result;
use modsort_lib::application::commands::execute_command_with_output;
use modsort_lib::application::{AppConfig, Commands};
use modsort_lib::primitives::OutputFormat;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A small web application: entry point, components, utilities, a
/// side-effect-only polyfill and a generated module.
pub const WEB_APP_JSON: &str = r#"{
  "units": [
    { "name": "src/main.js", "provides": ["app.main"], "requires": ["app.ui", "app.util"] },
    { "name": "src/ui.js", "provides": ["app.ui"], "requires": ["app.util", "module$src$theme"] },
    { "name": "src/util.js", "provides": ["app.util"] },
    { "name": "src/theme.js", "provides": ["module$src$theme"] },
    { "name": "src/polyfill.js" }
  ]
}"#;

/// Two units requiring each other, listed before a unit that needs both
pub const CYCLE_TOML: &str = r#"
[[units]]
name = "b.js"
provides = ["b"]
requires = ["a"]

[[units]]
name = "a.js"
provides = ["a"]
requires = ["b"]

[[units]]
name = "main.js"
requires = ["a", "b"]
"#;

/// Diamond: top requires left and right, both require bottom
pub const DIAMOND_YAML: &str = "units:
  - name: top.js
    provides: [top]
    requires: [left, right]
  - name: left.js
    provides: [left]
    requires: [bottom]
  - name: right.js
    provides: [right]
    requires: [bottom]
  - name: bottom.js
    provides: [bottom]
";

/// A manifest file inside its own temporary directory
pub struct ManifestFixture {
    _dir: TempDir,
    path: PathBuf,
}

impl ManifestFixture {
    /// Write `content` to `file_name`; the extension picks the format
    pub fn new(file_name: &str, content: &str) -> Result<Self> {
        let dir = TempDir::new()?;
        let path = dir.path().join(file_name);
        std::fs::write(&path, content)?;
        Ok(Self { _dir: dir, path })
    }

    pub fn web_app() -> Result<Self> {
        Self::new("units.json", WEB_APP_JSON)
    }

    pub fn cycle() -> Result<Self> {
        Self::new("units.toml", CYCLE_TOML)
    }

    pub fn diamond() -> Result<Self> {
        Self::new("units.yaml", DIAMOND_YAML)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Configuration pointing at this manifest
    pub fn config(&self, output: OutputFormat) -> AppConfig {
        AppConfig {
            manifest: Some(self.path.clone()),
            output,
            ..AppConfig::default()
        }
    }
}

/// Run a command and capture what it writes
pub fn run_command(command: Commands, config: &AppConfig) -> Result<String> {
    let mut out = Vec::new();
    execute_command_with_output(command, config, &mut out)?;
    Ok(String::from_utf8(out)?)
}

/// Split text output into unit names
pub fn lines(output: &str) -> Vec<&str> {
    output.lines().collect()
}
