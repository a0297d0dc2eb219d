use crate::primitives::ConfigError;
use clap::{Parser, Subcommand};

use super::config::AppConfig;

/// modsort CLI - import-order sorting for dependency units
#[derive(Debug, Clone, Parser)]
#[command(name = "modsort")]
#[command(about = "Sort units so every unit follows the units it requires")]
#[command(version)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Global configuration options
    #[command(flatten)]
    pub config: AppConfig,

    /// modsort commands
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Configuration loaded from CLI
#[derive(Debug, Clone)]
pub struct CliConfig {
    pub app_config: AppConfig,
    pub command: Option<Commands>,
}

impl CliConfig {
    /// Load configuration from command line arguments
    ///
    /// Env files are read first so their `MODSORT_*` values reach clap, then
    /// the parsed flags are resolved against the standard environment.
    pub fn load() -> Result<Self, ConfigError> {
        AppConfig::load_env_files()?;
        let cli = Cli::parse();
        Ok(Self {
            app_config: AppConfig::resolve(cli.config)?,
            command: cli.command,
        })
    }
}

/// Available modsort commands
#[derive(Debug, Clone, PartialEq, Eq, Subcommand)]
pub enum Commands {
    /// Print every unit in import order
    Sort,

    /// Print the transitive dependencies of the named units
    Deps {
        /// Root unit names
        #[arg(required = true, help = "Names of the units to start from")]
        roots: Vec<String>,

        /// Keep the manifest order instead of import order
        #[arg(long, help = "List dependencies in manifest order")]
        unsorted: bool,
    },

    /// Print the unit providing a symbol
    Provider {
        /// Symbol to look up
        symbol: String,

        /// Succeed with no output when nothing provides the symbol
        #[arg(long, help = "Do not fail when no unit provides the symbol")]
        optional: bool,
    },

    /// Print units that provide nothing, in manifest order
    Exportless,

    /// Show version information
    Version,
}

#[cfg(test)]
mod tests {
    include!("cli.test.rs");
}
