//! Application configuration management
//!
//! Handles config loading, validation, and environment variable processing
//! following the precedence: defaults -> .env -> env vars -> CLI args.

use crate::primitives::*;
use clap::Parser;
use std::path::{Path, PathBuf};

/// Default configuration values
pub mod defaults {
    pub const LOG_LEVEL: &str = "0"; // Error-only logging by default
    pub const LOG_FORMAT: &str = "text";
    pub const LOG_OUTPUT: &str = "stderr";
    pub const OUTPUT: &str = "text";
    pub const COLOR: &str = "auto";
    pub const SYNTHETIC_PREFIX: &str = crate::deps::MODULE_NAME_PREFIX;
}

/// Default value functions for configuration fields
mod default_fns {
    use crate::primitives::{ColorChoice, LogFormat, LogOutput, OutputFormat};

    pub fn log_level() -> u8 {
        0
    }

    pub fn log_format() -> LogFormat {
        LogFormat::Text
    }

    pub fn log_output() -> LogOutput {
        LogOutput::Stderr
    }

    pub fn output() -> OutputFormat {
        OutputFormat::Text
    }

    pub fn color() -> ColorChoice {
        ColorChoice::Auto
    }

    pub fn synthetic_prefix() -> String {
        super::defaults::SYNTHETIC_PREFIX.to_string()
    }
}

/// Application configuration structure
#[derive(Debug, Clone, PartialEq, Parser)]
pub struct AppConfig {
    /// Unit manifest (.json, .toml, .yaml)
    #[arg(short, long, global = true, env = "MODSORT_MANIFEST")]
    pub manifest: Option<PathBuf>,

    /// Prefix marking generated module names and synthetic provides
    #[arg(long, env = "MODSORT_SYNTHETIC_PREFIX", default_value = defaults::SYNTHETIC_PREFIX)]
    pub synthetic_prefix: String,

    /// Result format (text, json)
    #[arg(short, long, global = true, env = "MODSORT_OUTPUT", default_value = defaults::OUTPUT)]
    pub output: OutputFormat,

    /// Verbosity level (0=error, 1=warn, 2=info, 3=debug, 4=trace)
    #[arg(long, env = "MODSORT_LOG_LEVEL", default_value = defaults::LOG_LEVEL)]
    pub log_level: u8,

    /// Log format (text, json, pretty)
    #[arg(long, env = "MODSORT_LOG_FORMAT", default_value = defaults::LOG_FORMAT)]
    pub log_format: LogFormat,

    /// Log output stream (stderr, stdout)
    #[arg(long, env = "MODSORT_LOG_OUTPUT", default_value = defaults::LOG_OUTPUT)]
    pub log_output: LogOutput,

    /// Color output control (auto, always, never)
    #[arg(short, long, env = "MODSORT_COLOR", default_value = defaults::COLOR)]
    pub color: ColorChoice,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            manifest: None,
            synthetic_prefix: default_fns::synthetic_prefix(),
            output: default_fns::output(),
            log_level: default_fns::log_level(),
            log_format: default_fns::log_format(),
            log_output: default_fns::log_output(),
            color: default_fns::color(),
        }
    }
}

impl AppConfig {
    /// Create LoggerConfig, resolving `auto` color against the log stream
    pub fn to_logger_config(&self) -> LoggerConfig {
        let is_terminal = match self.log_output {
            LogOutput::Stderr => console::Term::stderr().is_term(),
            LogOutput::Stdout => console::Term::stdout().is_term(),
        };

        LoggerConfig {
            level: LogLevel::from_verbosity(self.log_level),
            format: self.log_format,
            output: self.log_output,
            ansi: self.color.resolve(is_terminal),
        }
    }

    /// Merge this config with another, taking non-default values from other
    pub fn merge_with(mut self, other: Self) -> Self {
        if other.manifest.is_some() {
            self.manifest = other.manifest;
        }
        if other.synthetic_prefix != default_fns::synthetic_prefix() {
            self.synthetic_prefix = other.synthetic_prefix;
        }
        if other.log_level != default_fns::log_level() {
            self.log_level = other.log_level;
        }
        if other.output != default_fns::output() {
            self.output = other.output;
        }
        if other.log_format != default_fns::log_format() {
            self.log_format = other.log_format;
        }
        if other.log_output != default_fns::log_output() {
            self.log_output = other.log_output;
        }
        if other.color != default_fns::color() {
            self.color = other.color;
        }

        self
    }

    /// Validate the final configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.synthetic_prefix.is_empty() {
            return Err(ConfigError::ValidationFailed {
                reason: "synthetic prefix must not be empty".to_string(),
            });
        }

        Ok(())
    }

    /// Manifest path, required by every sorting command
    pub fn manifest_path(&self) -> Result<&Path, ConfigError> {
        self.manifest.as_deref().ok_or(ConfigError::MissingManifest)
    }
}

#[cfg(test)]
mod tests {
    include!("config.test.rs");
}
