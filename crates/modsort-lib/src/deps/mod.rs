//! # Dependency Sorting
//!
//! Orders units that provide and require named symbols so that each unit
//! comes after the units it depends on, tolerating cycles.
//!
//! ## Modules
//!
//! - [`info`] - Unit contract and the stock owned unit
//! - [`module_names`] - Module name normalization and the synthetic-provide heuristic
//! - [`symbol_index`] - Symbol to exporting unit lookup, exportless units
//! - [`edges`] - Unit to unit dependency edges
//! - [`orderer`] - Cycle-tolerant import ordering
//! - [`sorted`] - Import-ordered view and queries

pub mod edges;
pub mod info;
pub mod module_names;
pub mod orderer;
pub mod sorted;
pub mod symbol_index;

pub use info::{DependencyInfo, SimpleDependencyInfo};
pub use module_names::{
    MODULE_NAME_PREFIX, ModuleNameNormalizer, ModuleNames, ModulePrefix, SyntheticProvide,
};
pub use sorted::{DependencySortError, ImportOrderedDependencies};
