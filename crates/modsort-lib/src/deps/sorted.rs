//! Import-ordered view over a fixed list of units
//!
//! Orders units so each comes after the units it depends on. Cycles are
//! tolerated: the unit through which a cycle is first entered is emitted
//! after the rest of the cycle. The result is influenced by the user order,
//! since traversals start from the first user-supplied unit and continue
//! from there.
//!
//! All work happens in the constructor; every query afterwards is a read.

use std::collections::VecDeque;

use thiserror::Error;
use tracing::debug;

use super::edges::DependencyEdges;
use super::info::DependencyInfo;
use super::module_names::{ModuleNameNormalizer, ModuleNames, ModulePrefix, SyntheticProvide};
use super::orderer::import_order;
use super::symbol_index::SymbolIndex;

/// Errors raised by the query layer
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DependencySortError {
    #[error("No input provides symbol: {symbol}")]
    MissingProvider { symbol: String },

    #[error("Root input is not one of the sorted inputs: {name}")]
    InvalidArgument { name: String },
}

/// Units in user order and in import order, plus provider lookups
#[derive(Debug)]
pub struct ImportOrderedDependencies<'a, U: ?Sized, N = ModuleNames> {
    user_ordered: Vec<&'a U>,
    import_ordered: Vec<&'a U>,
    /// user-order position of each import-ordered unit
    import_positions: Vec<usize>,
    symbols: SymbolIndex,
    module_names: N,
}

impl<'a, U> ImportOrderedDependencies<'a, U, ModuleNames>
where
    U: DependencyInfo + ?Sized,
{
    /// Sort with the stock module naming and synthetic-provide heuristic
    pub fn new<I>(units: I) -> Self
    where
        I: IntoIterator<Item = &'a U>,
    {
        Self::with_naming(units, ModuleNames::default(), &ModulePrefix::default())
    }
}

impl<'a, U, N> ImportOrderedDependencies<'a, U, N>
where
    U: DependencyInfo + ?Sized,
    N: ModuleNameNormalizer,
{
    /// Sort with caller-supplied naming collaborators
    pub fn with_naming<I, S>(units: I, module_names: N, synthetic: &S) -> Self
    where
        I: IntoIterator<Item = &'a U>,
        S: SyntheticProvide + ?Sized,
    {
        let user_ordered: Vec<&'a U> = units.into_iter().collect();

        let symbols = SymbolIndex::build(&user_ordered, &module_names, synthetic);
        let edges = DependencyEdges::build(&user_ordered, &symbols);
        let import_positions = import_order(&edges, user_ordered.len());
        let import_ordered = import_positions
            .iter()
            .map(|&position| user_ordered[position])
            .collect();

        debug!(
            units = user_ordered.len(),
            symbols = symbols.symbol_count(),
            edges = edges.edge_count(),
            "Sorted inputs into import order"
        );

        Self {
            user_ordered,
            import_ordered,
            import_positions,
            symbols,
            module_names,
        }
    }

    /// Units in import order
    pub fn sorted_list(&self) -> &[&'a U] {
        &self.import_ordered
    }

    /// Units in the order they were supplied
    pub fn user_ordered(&self) -> &[&'a U] {
        &self.user_ordered
    }

    pub fn len(&self) -> usize {
        self.user_ordered.len()
    }

    pub fn is_empty(&self) -> bool {
        self.user_ordered.is_empty()
    }

    /// Transitive dependencies of `roots`, roots included
    ///
    /// Requires are re-resolved through the symbol index. The result follows
    /// import order when `sorted`, user order otherwise. Fails if any root is
    /// not one of the sorted units (compared by identity).
    pub fn dependencies_of(
        &self,
        roots: &[&U],
        sorted: bool,
    ) -> Result<Vec<&'a U>, DependencySortError> {
        let mut worklist = roots
            .iter()
            .map(|root| {
                self.position_of(root)
                    .ok_or_else(|| DependencySortError::InvalidArgument {
                        name: root.name().to_string(),
                    })
            })
            .collect::<Result<VecDeque<_>, _>>()?;

        let mut included = vec![false; self.user_ordered.len()];
        while let Some(position) = worklist.pop_front() {
            if included[position] {
                continue;
            }
            included[position] = true;

            for symbol in self.user_ordered[position].requires() {
                if let Some(provider) = self.symbols.provider_of(symbol) {
                    worklist.push_back(provider);
                }
            }
        }

        let result = if sorted {
            self.import_positions
                .iter()
                .zip(&self.import_ordered)
                .filter(|(position, _)| included[**position])
                .map(|(_, unit)| *unit)
                .collect()
        } else {
            self.user_ordered
                .iter()
                .enumerate()
                .filter(|(position, _)| included[*position])
                .map(|(_, unit)| *unit)
                .collect()
        };

        Ok(result)
    }

    /// Transitive dependencies of `roots` in import order
    pub fn sorted_dependencies_of(&self, roots: &[&U]) -> Result<Vec<&'a U>, DependencySortError> {
        self.dependencies_of(roots, true)
    }

    /// Unit providing `symbol`, failing when there is none
    pub fn input_providing(&self, symbol: &str) -> Result<&'a U, DependencySortError> {
        self.maybe_input_providing(symbol)
            .ok_or_else(|| DependencySortError::MissingProvider {
                symbol: symbol.to_string(),
            })
    }

    /// Unit providing `symbol`
    ///
    /// Falls back to an exportless unit whose normalized name matches the
    /// normalized symbol, so `./lib/main.js` finds the exportless `lib/main.js`.
    pub fn maybe_input_providing(&self, symbol: &str) -> Option<&'a U> {
        self.symbols
            .provider_of(symbol)
            .or_else(|| {
                self.symbols
                    .exportless_named(&self.module_names.module_name(symbol))
            })
            .map(|position| self.user_ordered[position])
    }

    /// Units without a real provide, in user order
    pub fn inputs_without_provides(&self) -> Vec<&'a U> {
        self.symbols
            .exportless()
            .map(|position| self.user_ordered[position])
            .collect()
    }

    fn position_of(&self, unit: &U) -> Option<usize> {
        self.user_ordered
            .iter()
            .position(|candidate| std::ptr::eq(*candidate, unit))
    }
}

#[cfg(test)]
mod tests {
    include!("sorted.test.rs");
}
