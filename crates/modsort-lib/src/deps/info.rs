//! Unit contract consumed by the sorter
//!
//! A unit is anything with a name, a list of symbols it provides, and a list
//! of symbols it requires. The sorter never looks past these three accessors.

use serde::{Deserialize, Serialize};

/// Read-only view of a unit's name and its provided/required symbols
pub trait DependencyInfo {
    /// Stable identity string, usually a file path
    fn name(&self) -> &str;

    /// Symbols this unit exports, in declaration order
    fn provides(&self) -> &[String];

    /// Symbols this unit depends on, in declaration order
    fn requires(&self) -> &[String];
}

impl<T: DependencyInfo + ?Sized> DependencyInfo for &T {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn provides(&self) -> &[String] {
        (**self).provides()
    }

    fn requires(&self) -> &[String] {
        (**self).requires()
    }
}

/// Owned unit record, as read from a manifest
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SimpleDependencyInfo {
    pub name: String,
    #[serde(default)]
    pub provides: Vec<String>,
    #[serde(default)]
    pub requires: Vec<String>,
}

impl SimpleDependencyInfo {
    /// Create a unit with no provides and no requires
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            provides: Vec::new(),
            requires: Vec::new(),
        }
    }

    /// Replace the provided symbols
    pub fn with_provides<I, S>(mut self, provides: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.provides = provides.into_iter().map(Into::into).collect();
        self
    }

    /// Replace the required symbols
    pub fn with_requires<I, S>(mut self, requires: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.requires = requires.into_iter().map(Into::into).collect();
        self
    }
}

impl DependencyInfo for SimpleDependencyInfo {
    fn name(&self) -> &str {
        &self.name
    }

    fn provides(&self) -> &[String] {
        &self.provides
    }

    fn requires(&self) -> &[String] {
        &self.requires
    }
}

#[cfg(test)]
mod tests {
    include!("info.test.rs");
}
