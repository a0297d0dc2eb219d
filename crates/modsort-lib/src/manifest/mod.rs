//! Unit manifests
//!
//! A manifest lists units in user order:
//!
//! ```json
//! { "units": [ { "name": "app.js", "provides": ["app"], "requires": ["ui"] } ] }
//! ```
//!
//! JSON, TOML (`[[units]]` tables) and YAML encodings are read, chosen by
//! file extension.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, trace};

use crate::deps::SimpleDependencyInfo;

/// Errors that can occur while loading a manifest
#[derive(Debug, Error)]
pub enum ManifestError {
    #[error("Failed to read manifest: {path}: {source}")]
    ReadFailed {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse {format} manifest: {reason}")]
    ParseFailed {
        format: ManifestFormat,
        reason: String,
    },

    #[error("Unsupported manifest format: {path}")]
    UnsupportedFormat { path: PathBuf },

    #[error("Duplicate unit name in manifest: {name}")]
    DuplicateName { name: String },
}

/// Manifest encodings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ManifestFormat {
    Json,
    Toml,
    Yaml,
}

impl ManifestFormat {
    /// Pick the encoding from a file extension
    pub fn from_path(path: &Path) -> Option<Self> {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => Some(Self::Json),
            Some("toml") => Some(Self::Toml),
            Some("yaml" | "yml") => Some(Self::Yaml),
            _ => None,
        }
    }
}

impl std::fmt::Display for ManifestFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Json => write!(f, "JSON"),
            Self::Toml => write!(f, "TOML"),
            Self::Yaml => write!(f, "YAML"),
        }
    }
}

/// Units in user order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Manifest {
    #[serde(default)]
    pub units: Vec<SimpleDependencyInfo>,
}

impl Manifest {
    /// Read and parse a manifest file
    pub fn load(path: &Path) -> Result<Self, ManifestError> {
        debug!("Loading manifest: {}", path.display());

        let format = ManifestFormat::from_path(path).ok_or_else(|| {
            ManifestError::UnsupportedFormat {
                path: path.to_path_buf(),
            }
        })?;

        let content =
            std::fs::read_to_string(path).map_err(|e| ManifestError::ReadFailed {
                path: path.to_path_buf(),
                source: e,
            })?;

        Self::parse(&content, format)
    }

    /// Parse manifest content in the given encoding
    pub fn parse(content: &str, format: ManifestFormat) -> Result<Self, ManifestError> {
        let parse_failed = |reason: String| ManifestError::ParseFailed { format, reason };

        let manifest: Self = match format {
            ManifestFormat::Json => {
                serde_json::from_str(content).map_err(|e| parse_failed(e.to_string()))?
            }
            ManifestFormat::Toml => {
                toml::from_str(content).map_err(|e| parse_failed(e.to_string()))?
            }
            ManifestFormat::Yaml => {
                serde_saphyr::from_str(content).map_err(|e| parse_failed(e.to_string()))?
            }
        };

        manifest.validate()?;
        trace!("Parsed {} units from {} manifest", manifest.units.len(), format);
        Ok(manifest)
    }

    /// Unit names must be unique so units can be addressed by name
    fn validate(&self) -> Result<(), ManifestError> {
        let mut seen = HashSet::new();
        for unit in &self.units {
            if !seen.insert(unit.name.as_str()) {
                return Err(ManifestError::DuplicateName {
                    name: unit.name.clone(),
                });
            }
        }
        Ok(())
    }

    /// Unit with the given name
    pub fn unit_named(&self, name: &str) -> Option<&SimpleDependencyInfo> {
        self.units.iter().find(|unit| unit.name == name)
    }
}

#[cfg(test)]
mod tests {
    include!("mod.test.rs");
}
