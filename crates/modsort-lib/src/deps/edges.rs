//! Unit-to-unit dependency edges derived from required symbols
//!
//! Edge direction is from the requiring unit TO the providing unit, so the
//! outgoing neighbours of a unit are the units it depends on.

use petgraph::Direction;
use petgraph::graphmap::DiGraphMap;
use tracing::trace;

use super::info::DependencyInfo;
use super::symbol_index::SymbolIndex;

/// Dependency multimap over user-order positions
///
/// `DiGraphMap` keeps each node's adjacency in insertion order and collapses
/// repeated edges, which is exactly the ordered-set-per-key shape needed here.
#[derive(Debug, Clone, Default)]
pub struct DependencyEdges {
    graph: DiGraphMap<usize, ()>,
}

impl DependencyEdges {
    /// Resolve every unit's requires through the index
    pub fn build<U>(units: &[&U], index: &SymbolIndex) -> Self
    where
        U: DependencyInfo + ?Sized,
    {
        let mut graph = DiGraphMap::with_capacity(units.len(), units.len());

        for position in 0..units.len() {
            graph.add_node(position);
        }

        for (position, unit) in units.iter().enumerate() {
            for symbol in unit.requires() {
                match index.provider_of(symbol) {
                    Some(provider) => {
                        if graph.add_edge(position, provider, ()).is_none() {
                            trace!("Edge: {} -> unit #{} via {}", unit.name(), provider, symbol);
                        }
                    }
                    None => trace!("Unresolved require {} in {}", symbol, unit.name()),
                }
            }
        }

        Self { graph }
    }

    /// Units `unit` depends on, in the order the edges were recorded
    pub fn dependencies(&self, unit: usize) -> impl Iterator<Item = usize> + '_ {
        self.graph.neighbors_directed(unit, Direction::Outgoing)
    }

    pub fn contains_edge(&self, from: usize, to: usize) -> bool {
        self.graph.contains_edge(from, to)
    }

    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }
}

#[cfg(test)]
mod tests {
    include!("edges.test.rs");
}
