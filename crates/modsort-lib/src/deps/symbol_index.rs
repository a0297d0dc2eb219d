//! Symbol index: which unit exports which symbol, and which units export
//! nothing real
//!
//! Units are addressed by their position in user order.

use indexmap::IndexMap;
use tracing::trace;

use super::info::DependencyInfo;
use super::module_names::{ModuleNameNormalizer, SyntheticProvide};

/// Exporting and exportless lookups built from the user-ordered units
#[derive(Debug, Clone, Default)]
pub struct SymbolIndex {
    /// symbol -> exporting unit; the last declaring unit wins
    exporting: IndexMap<String, usize>,
    /// normalized module name -> exportless unit, in user order
    exportless: IndexMap<String, usize>,
}

impl SymbolIndex {
    /// Index the units in user order
    pub fn build<U, N, S>(units: &[&U], normalizer: &N, synthetic: &S) -> Self
    where
        U: DependencyInfo + ?Sized,
        N: ModuleNameNormalizer + ?Sized,
        S: SyntheticProvide + ?Sized,
    {
        let mut index = Self::default();

        for (position, unit) in units.iter().enumerate() {
            let provides = unit.provides();
            let exportless = match provides {
                [] => true,
                [only] => synthetic.is_synthetic(only),
                _ => false,
            };

            if exportless {
                let module_name = normalizer.module_name(unit.name());
                trace!("Exportless unit: {} as {}", unit.name(), module_name);
                index.exportless.insert(module_name, position);
            }

            for symbol in provides {
                if let Some(previous) = index.exporting.insert(symbol.clone(), position) {
                    trace!(
                        "Symbol {} re-provided by {} (was unit #{})",
                        symbol,
                        unit.name(),
                        previous
                    );
                }
            }
        }

        index
    }

    /// Unit exporting `symbol`, if any
    pub fn provider_of(&self, symbol: &str) -> Option<usize> {
        self.exporting.get(symbol).copied()
    }

    /// Exportless unit registered under `module_name`, if any
    pub fn exportless_named(&self, module_name: &str) -> Option<usize> {
        self.exportless.get(module_name).copied()
    }

    /// Exportless units in registration order
    pub fn exportless(&self) -> impl Iterator<Item = usize> + '_ {
        self.exportless.values().copied()
    }

    /// Number of distinct exported symbols
    pub fn symbol_count(&self) -> usize {
        self.exporting.len()
    }
}

#[cfg(test)]
mod tests {
    include!("symbol_index.test.rs");
}
