//! Configuration loading
//!
//! Coordinates loading configuration from env files, standard environment
//! variables and the command line.

use crate::primitives::ConfigError;

use super::{config::AppConfig, env::EnvironmentConfig};

/// Env files read before CLI parsing, most specific first
const ENV_FILES: [&str; 2] = [".env.local", ".env"];

impl AppConfig {
    /// Load `.env.local` and `.env` into the process environment
    ///
    /// Runs before CLI parsing so that `MODSORT_*` values from these files
    /// reach clap's `env` fallbacks. Missing files are not an error.
    pub fn load_env_files() -> Result<(), ConfigError> {
        for env_file in ENV_FILES {
            if let Err(e) = dotenvy::from_filename(env_file) {
                if !e.not_found() {
                    return Err(ConfigError::EnvFileError {
                        file: env_file.to_string(),
                        source: e,
                    });
                }
            }
        }

        Ok(())
    }

    /// Resolve config: defaults -> standard env vars -> CLI (with MODSORT_* env)
    pub fn resolve(cli_config: AppConfig) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        let env_config = EnvironmentConfig::load()?;
        config.color = env_config.apply_color_config(config.color);

        let config = config.merge_with(cli_config);
        config.validate()?;

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    include!("loader.test.rs");
}
