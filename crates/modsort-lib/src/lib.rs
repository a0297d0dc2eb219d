//! # modsort Library
//!
//! Deterministic, cycle-tolerant import ordering for units that provide and
//! require named symbols.
//!
//! ## Core Modules
//!
//! - [`deps`] - Symbol index, dependency edges, import ordering and queries
//! - [`manifest`] - Unit lists read from JSON, TOML or YAML
//! - [`primitives`] - Shared enums and error types
//! - [`logger`] - Structured logging setup
//! - [`application`] - CLI interface and configuration management
//!
//! ## Quick Start
//!
//! ```
//! use modsort_lib::{ImportOrderedDependencies, SimpleDependencyInfo};
//!
//! let units = [
//!     SimpleDependencyInfo::new("app.js").with_requires(["ui"]),
//!     SimpleDependencyInfo::new("ui.js").with_provides(["ui"]),
//! ];
//! let sorted = ImportOrderedDependencies::new(&units);
//! let names: Vec<_> = sorted.sorted_list().iter().map(|unit| unit.name.as_str()).collect();
//! assert_eq!(names, ["ui.js", "app.js"]);
//! ```

pub mod application;
pub mod deps;
pub mod logger;
pub mod manifest;
pub mod primitives;

// Re-export commonly used types for convenience
pub use application::{AppConfig, Cli, Commands, execute_command};
pub use deps::{
    DependencyInfo, DependencySortError, ImportOrderedDependencies, ModuleNames, ModulePrefix,
    SimpleDependencyInfo,
};
pub use logger::Logger;
pub use manifest::{Manifest, ManifestError, ManifestFormat};
pub use primitives::{
    ColorChoice, ConfigError, LogFormat, LogLevel, LogOutput, LoggerError, OutputFormat,
};

// Private imports for the main function
use anyhow::Result;
use application::CliConfig;

pub fn main() -> Result<()> {
    // Load CLI configuration
    let config = CliConfig::load()?;

    // Install the subscriber before any command logs
    Logger::init(config.app_config.to_logger_config())?;

    // Execute the command
    execute_command(config)
}
