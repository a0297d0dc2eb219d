//! Module name normalization and the synthetic-provide heuristic
//!
//! Both are collaborators of the sorter rather than part of it, so each is a
//! trait with a stock implementation. Closures implement either trait.

/// Reserved prefix of generated module names and synthetic provides
pub const MODULE_NAME_PREFIX: &str = "module$";

/// Extensions stripped from file names before they become module names
const STRIPPED_EXTENSIONS: &[&str] = &[".js", ".mjs", ".cjs", ".ts"];

/// Maps a file-like name or a symbol onto a canonical module-name key
pub trait ModuleNameNormalizer {
    fn module_name(&self, name_or_symbol: &str) -> String;
}

impl<F> ModuleNameNormalizer for F
where
    F: Fn(&str) -> String,
{
    fn module_name(&self, name_or_symbol: &str) -> String {
        self(name_or_symbol)
    }
}

/// Decides whether a provided symbol was generated for the unit rather than
/// declared by it
pub trait SyntheticProvide {
    fn is_synthetic(&self, symbol: &str) -> bool;
}

impl<F> SyntheticProvide for F
where
    F: Fn(&str) -> bool,
{
    fn is_synthetic(&self, symbol: &str) -> bool {
        self(symbol)
    }
}

/// Stock normalizer: `./lib/ui-kit.js` becomes `module$lib$ui_kit`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModuleNames {
    prefix: String,
}

impl ModuleNames {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
        }
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Convert a file path into a module name
    pub fn file_to_module_name(&self, filename: &str) -> String {
        if filename.starts_with(&self.prefix) {
            return filename.to_string();
        }

        let trimmed = filename.strip_prefix("./").unwrap_or(filename);
        let trimmed = STRIPPED_EXTENSIONS
            .iter()
            .find_map(|ext| trimmed.strip_suffix(ext))
            .unwrap_or(trimmed);

        let mut name = String::with_capacity(self.prefix.len() + trimmed.len());
        name.push_str(&self.prefix);
        name.extend(trimmed.chars().map(|c| match c {
            '/' | '\\' | '@' => '$',
            '-' | ':' | '.' => '_',
            other => other,
        }));
        name
    }
}

impl Default for ModuleNames {
    fn default() -> Self {
        Self::new(MODULE_NAME_PREFIX)
    }
}

impl ModuleNameNormalizer for ModuleNames {
    fn module_name(&self, name_or_symbol: &str) -> String {
        self.file_to_module_name(name_or_symbol)
    }
}

/// Stock heuristic: a provide is synthetic when it starts with the reserved
/// prefix. Approximate; a hand-written `module$x` provide is misclassified.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModulePrefix {
    prefix: String,
}

impl ModulePrefix {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
        }
    }
}

impl Default for ModulePrefix {
    fn default() -> Self {
        Self::new(MODULE_NAME_PREFIX)
    }
}

impl SyntheticProvide for ModulePrefix {
    fn is_synthetic(&self, symbol: &str) -> bool {
        symbol.starts_with(&self.prefix)
    }
}

#[cfg(test)]
mod tests {
    include!("module_names.test.rs");
}
