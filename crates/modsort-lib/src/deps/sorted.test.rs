// Tests for the import-ordered query layer

use super::*;
use crate::deps::info::SimpleDependencyInfo;

// ============================================================================
// Test Utilities
// ============================================================================

fn unit(name: &str, provides: &[&str], requires: &[&str]) -> SimpleDependencyInfo {
    SimpleDependencyInfo::new(name)
        .with_provides(provides.iter().copied())
        .with_requires(requires.iter().copied())
}

fn names<'a>(units: &[&'a SimpleDependencyInfo]) -> Vec<&'a str> {
    units.iter().map(|unit| unit.name.as_str()).collect()
}

/// app -> (ui, net), ui -> base, net -> base, plus an unrelated tool
fn app_units() -> Vec<SimpleDependencyInfo> {
    vec![
        unit("tool.js", &["tool"], &[]),
        unit("app.js", &["app"], &["ui", "net"]),
        unit("net.js", &["net"], &["base"]),
        unit("ui.js", &["ui"], &["base"]),
        unit("base.js", &["base"], &[]),
    ]
}

// ============================================================================
// Sorted List
// ============================================================================

#[test]
fn test_sorted_list_orders_dependencies_first() {
    let units = app_units();
    let sorted = ImportOrderedDependencies::new(&units);

    assert_eq!(
        names(sorted.sorted_list()),
        vec!["tool.js", "base.js", "ui.js", "net.js", "app.js"]
    );
}

#[test]
fn test_sorted_list_is_stable_across_calls() {
    let units = app_units();
    let sorted = ImportOrderedDependencies::new(&units);

    assert_eq!(names(sorted.sorted_list()), names(sorted.sorted_list()));
}

#[test]
fn test_two_unit_cycle() {
    let units = vec![unit("A", &["a"], &["b"]), unit("B", &["b"], &["a"])];
    let sorted = ImportOrderedDependencies::new(&units);

    assert_eq!(names(sorted.sorted_list()), vec!["B", "A"]);
}

#[test]
fn test_user_order_is_preserved() {
    let units = app_units();
    let sorted = ImportOrderedDependencies::new(&units);

    assert_eq!(sorted.len(), 5);
    assert!(!sorted.is_empty());
    assert_eq!(
        names(sorted.user_ordered()),
        vec!["tool.js", "app.js", "net.js", "ui.js", "base.js"]
    );
}

#[test]
fn test_empty_input() {
    let units: Vec<SimpleDependencyInfo> = Vec::new();
    let sorted = ImportOrderedDependencies::new(&units);

    assert!(sorted.is_empty());
    assert!(sorted.sorted_list().is_empty());
    assert!(sorted.inputs_without_provides().is_empty());
}

#[test]
fn test_structurally_equal_units_are_distinct() {
    let units = vec![unit("same.js", &["s"], &[]), unit("same.js", &["s"], &[])];
    let sorted = ImportOrderedDependencies::new(&units);

    assert_eq!(sorted.sorted_list().len(), 2);
    assert!(std::ptr::eq(sorted.sorted_list()[0], &units[0]));
    assert!(std::ptr::eq(sorted.sorted_list()[1], &units[1]));
}

#[test]
fn test_same_unit_supplied_twice_keeps_both_positions() {
    let shared = unit("shared.js", &["shared"], &[]);
    let main = unit("main.js", &[], &["shared"]);
    let sorted = ImportOrderedDependencies::new([&main, &shared, &shared]);

    assert_eq!(
        names(sorted.sorted_list()),
        vec!["shared.js", "main.js", "shared.js"]
    );
    // roots resolve to the first position holding the unit
    assert_eq!(
        names(&sorted.sorted_dependencies_of(&[&shared]).unwrap()),
        vec!["shared.js"]
    );
}

// ============================================================================
// Dependency Queries
// ============================================================================

#[test]
fn test_dependencies_of_sorted() {
    let units = app_units();
    let sorted = ImportOrderedDependencies::new(&units);

    let deps = sorted.dependencies_of(&[&units[1]], true).unwrap();
    assert_eq!(names(&deps), vec!["base.js", "ui.js", "net.js", "app.js"]);
}

#[test]
fn test_dependencies_of_unsorted_follows_user_order() {
    let units = app_units();
    let sorted = ImportOrderedDependencies::new(&units);

    let deps = sorted.dependencies_of(&[&units[1]], false).unwrap();
    assert_eq!(names(&deps), vec!["app.js", "net.js", "ui.js", "base.js"]);
}

#[test]
fn test_sorted_dependencies_of_matches_sorted_flag() {
    let units = app_units();
    let sorted = ImportOrderedDependencies::new(&units);

    let roots = [&units[2], &units[0]];
    assert_eq!(
        sorted.sorted_dependencies_of(&roots).unwrap(),
        sorted.dependencies_of(&roots, true).unwrap()
    );
    assert_eq!(
        names(&sorted.sorted_dependencies_of(&roots).unwrap()),
        vec!["tool.js", "base.js", "net.js"]
    );
}

#[test]
fn test_dependencies_of_leaf_is_itself() {
    let units = vec![unit("x.js", &["x"], &["unknown"]), unit("y.js", &["y"], &["x"])];
    let sorted = ImportOrderedDependencies::new(&units);

    let deps = sorted.dependencies_of(&[&units[0]], true).unwrap();
    assert_eq!(deps.len(), 1);
    assert!(std::ptr::eq(deps[0], &units[0]));
}

#[test]
fn test_dependencies_of_no_roots_is_empty() {
    let units = app_units();
    let sorted = ImportOrderedDependencies::new(&units);

    assert!(sorted.dependencies_of(&[], true).unwrap().is_empty());
}

#[test]
fn test_dependencies_of_cycle_includes_all_members() {
    let units = vec![
        unit("A", &["a"], &["b"]),
        unit("B", &["b"], &["a"]),
        unit("C", &["c"], &[]),
    ];
    let sorted = ImportOrderedDependencies::new(&units);

    let deps = sorted.dependencies_of(&[&units[1]], true).unwrap();
    assert_eq!(names(&deps), vec!["B", "A"]);
}

#[test]
fn test_dependencies_of_foreign_root_fails() {
    let units = app_units();
    let sorted = ImportOrderedDependencies::new(&units);
    let stranger = unit("app.js", &["app"], &["ui", "net"]);

    let err = sorted.dependencies_of(&[&stranger], true).unwrap_err();
    assert_eq!(
        err,
        DependencySortError::InvalidArgument {
            name: "app.js".to_string()
        }
    );
}

#[test]
fn test_dependencies_of_fails_if_any_root_is_foreign() {
    let units = app_units();
    let sorted = ImportOrderedDependencies::new(&units);
    let stranger = unit("stranger.js", &[], &[]);

    let result = sorted.sorted_dependencies_of(&[&units[0], &stranger]);
    assert!(matches!(
        result,
        Err(DependencySortError::InvalidArgument { .. })
    ));
}

// ============================================================================
// Provider Lookup
// ============================================================================

#[test]
fn test_input_providing_finds_exporter() {
    let units = app_units();
    let sorted = ImportOrderedDependencies::new(&units);

    let provider = sorted.input_providing("ui").unwrap();
    assert!(std::ptr::eq(provider, &units[3]));
}

#[test]
fn test_input_providing_missing_fails() {
    let units = app_units();
    let sorted = ImportOrderedDependencies::new(&units);

    let err = sorted.input_providing("nonexistent").unwrap_err();
    assert_eq!(
        err,
        DependencySortError::MissingProvider {
            symbol: "nonexistent".to_string()
        }
    );
    assert_eq!(err.to_string(), "No input provides symbol: nonexistent");
    assert!(sorted.maybe_input_providing("nonexistent").is_none());
}

#[test]
fn test_symbol_collision_last_wins() {
    let units = vec![unit("P1", &["x"], &[]), unit("P2", &["x"], &[])];
    let sorted = ImportOrderedDependencies::new(&units);

    assert!(std::ptr::eq(sorted.input_providing("x").unwrap(), &units[1]));
}

#[test]
fn test_exportless_unit_found_by_module_name() {
    let units = vec![
        unit("lib/main.js", &[], &["util"]),
        unit("lib/util.js", &["util"], &[]),
    ];
    let sorted = ImportOrderedDependencies::new(&units);

    let by_path = sorted.maybe_input_providing("./lib/main.js").unwrap();
    assert!(std::ptr::eq(by_path, &units[0]));

    let by_module_name = sorted.maybe_input_providing("module$lib$main").unwrap();
    assert!(std::ptr::eq(by_module_name, &units[0]));

    // util.js exports a real symbol, so it is not reachable by file name
    assert!(sorted.maybe_input_providing("lib/util.js").is_none());
}

#[test]
fn test_real_provide_beats_exportless_fallback() {
    let units = vec![
        unit("main.js", &[], &[]),
        unit("shadow.js", &["module$main"], &[]),
    ];
    let sorted = ImportOrderedDependencies::new(&units);

    let provider = sorted.input_providing("module$main").unwrap();
    assert!(std::ptr::eq(provider, &units[1]));
}

// ============================================================================
// Exportless Units
// ============================================================================

#[test]
fn test_inputs_without_provides_in_user_order() {
    let units = vec![
        unit("z.js", &[], &[]),
        unit("lib.js", &["lib"], &[]),
        unit("es6.js", &["module$es6"], &[]),
        unit("two.js", &["module$two", "two"], &[]),
        unit("a.js", &[], &["lib"]),
    ];
    let sorted = ImportOrderedDependencies::new(&units);

    assert_eq!(
        names(&sorted.inputs_without_provides()),
        vec!["z.js", "es6.js", "a.js"]
    );
}

#[test]
fn test_custom_collaborators() {
    let units = vec![
        unit("Gen", &["__gen"], &[]),
        unit("Main", &["main"], &["__gen"]),
    ];
    let sorted = ImportOrderedDependencies::with_naming(
        &units,
        |name: &str| name.to_lowercase(),
        &|symbol: &str| symbol.starts_with("__"),
    );

    assert_eq!(names(&sorted.inputs_without_provides()), vec!["Gen"]);
    assert!(std::ptr::eq(sorted.maybe_input_providing("GEN").unwrap(), &units[0]));
    assert_eq!(names(sorted.sorted_list()), vec!["Gen", "Main"]);
}

#[test]
fn test_trait_object_units() {
    let a = unit("a.js", &["a"], &["b"]);
    let b = unit("b.js", &["b"], &[]);
    let units: Vec<&dyn DependencyInfo> = vec![&a, &b];
    let sorted = ImportOrderedDependencies::new(units.iter().copied());

    let order: Vec<&str> = sorted.sorted_list().iter().map(|u| u.name()).collect();
    assert_eq!(order, vec!["b.js", "a.js"]);
}

#[test]
fn test_shared_across_threads() {
    let units = app_units();
    let sorted = ImportOrderedDependencies::new(&units);

    std::thread::scope(|scope| {
        for _ in 0..4 {
            scope.spawn(|| {
                assert_eq!(sorted.sorted_list().len(), 5);
                assert!(sorted.input_providing("base").is_ok());
            });
        }
    });
}

// ============================================================================
// Properties
// ============================================================================

mod properties {
    use super::*;
    use proptest::collection::vec;
    use proptest::prelude::*;
    use std::collections::{HashMap, HashSet, VecDeque};

    const SYMBOLS: usize = 8;

    /// Each unit provides symbols from `s0..s7`; requires may also name
    /// `s8`/`s9`, which nothing provides.
    fn arb_units() -> impl Strategy<Value = Vec<SimpleDependencyInfo>> {
        vec(
            (vec(0..SYMBOLS, 0..3), vec(0..SYMBOLS + 2, 0..4)),
            0..14,
        )
        .prop_map(|specs| {
            specs
                .into_iter()
                .enumerate()
                .map(|(i, (provides, requires))| {
                    SimpleDependencyInfo::new(format!("u{}", i))
                        .with_provides(provides.into_iter().map(|s| format!("s{}", s)))
                        .with_requires(requires.into_iter().map(|s| format!("s{}", s)))
                })
                .collect()
        })
    }

    fn position(units: &[SimpleDependencyInfo], unit: &SimpleDependencyInfo) -> usize {
        units
            .iter()
            .position(|candidate| std::ptr::eq(candidate, unit))
            .unwrap()
    }

    /// Direct dependency lists, resolved independently of the crate's index
    fn adjacency(units: &[SimpleDependencyInfo]) -> Vec<Vec<usize>> {
        let mut providers = HashMap::new();
        for (i, unit) in units.iter().enumerate() {
            for symbol in &unit.provides {
                providers.insert(symbol.as_str(), i);
            }
        }
        units
            .iter()
            .map(|unit| {
                unit.requires
                    .iter()
                    .filter_map(|symbol| providers.get(symbol.as_str()).copied())
                    .collect()
            })
            .collect()
    }

    fn reachable(adjacency: &[Vec<usize>], from: usize) -> HashSet<usize> {
        let mut seen = HashSet::from([from]);
        let mut queue = VecDeque::from([from]);
        while let Some(next) = queue.pop_front() {
            for &dep in &adjacency[next] {
                if seen.insert(dep) {
                    queue.push_back(dep);
                }
            }
        }
        seen
    }

    proptest! {
        #[test]
        fn sorted_list_is_a_permutation(units in arb_units()) {
            let sorted = ImportOrderedDependencies::new(&units);
            let mut positions: Vec<usize> = sorted
                .sorted_list()
                .iter()
                .map(|unit| position(&units, unit))
                .collect();
            positions.sort_unstable();
            prop_assert_eq!(positions, (0..units.len()).collect::<Vec<_>>());
        }

        #[test]
        fn providers_precede_requirers_outside_cycles(units in arb_units()) {
            let sorted = ImportOrderedDependencies::new(&units);
            let order: Vec<usize> = sorted
                .sorted_list()
                .iter()
                .map(|unit| position(&units, unit))
                .collect();
            let rank: HashMap<usize, usize> =
                order.iter().enumerate().map(|(rank, &pos)| (pos, rank)).collect();
            let adjacency = adjacency(&units);

            for (requirer, deps) in adjacency.iter().enumerate() {
                for &provider in deps {
                    let mutual = provider == requirer
                        || reachable(&adjacency, provider).contains(&requirer);
                    if !mutual {
                        prop_assert!(rank[&provider] < rank[&requirer]);
                    }
                }
            }
        }

        #[test]
        fn dependency_closure_is_closed(units in arb_units(), pick in 0usize..14) {
            prop_assume!(!units.is_empty());
            let sorted = ImportOrderedDependencies::new(&units);
            let root = &units[pick % units.len()];

            let closure = sorted.sorted_dependencies_of(&[root]).unwrap();
            let included: HashSet<usize> =
                closure.iter().map(|unit| position(&units, unit)).collect();
            let expected = reachable(&adjacency(&units), position(&units, root));
            prop_assert_eq!(&included, &expected);

            // subsequence of the import order
            let order: Vec<usize> = sorted
                .sorted_list()
                .iter()
                .map(|unit| position(&units, unit))
                .filter(|pos| included.contains(pos))
                .collect();
            let closure_order: Vec<usize> =
                closure.iter().map(|unit| position(&units, unit)).collect();
            prop_assert_eq!(order, closure_order);
        }

        #[test]
        fn all_roots_unsorted_is_user_order(units in arb_units()) {
            let sorted = ImportOrderedDependencies::new(&units);
            let roots: Vec<&SimpleDependencyInfo> = units.iter().collect();
            let all = sorted.dependencies_of(&roots, false).unwrap();
            prop_assert_eq!(all, roots);
        }
    }
}
