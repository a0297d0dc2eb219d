// Tests for import ordering

use super::*;
use crate::deps::info::SimpleDependencyInfo;
use crate::deps::module_names::{ModuleNames, ModulePrefix};
use crate::deps::symbol_index::SymbolIndex;

fn unit(name: &str, provides: &[&str], requires: &[&str]) -> SimpleDependencyInfo {
    SimpleDependencyInfo::new(name)
        .with_provides(provides.iter().copied())
        .with_requires(requires.iter().copied())
}

fn order_of(units: &[SimpleDependencyInfo]) -> Vec<&str> {
    let refs: Vec<&SimpleDependencyInfo> = units.iter().collect();
    let index = SymbolIndex::build(&refs, &ModuleNames::default(), &ModulePrefix::default());
    let edges = DependencyEdges::build(&refs, &index);
    import_order(&edges, refs.len())
        .into_iter()
        .map(|position| units[position].name.as_str())
        .collect()
}

#[test]
fn test_empty_input() {
    assert!(order_of(&[]).is_empty());
}

#[test]
fn test_independent_units_keep_user_order() {
    let units = vec![
        unit("c.js", &["c"], &[]),
        unit("a.js", &["a"], &[]),
        unit("b.js", &["b"], &[]),
    ];
    assert_eq!(order_of(&units), vec!["c.js", "a.js", "b.js"]);
}

#[test]
fn test_dependency_precedes_dependent() {
    let units = vec![
        unit("app.js", &["app"], &["lib"]),
        unit("lib.js", &["lib"], &["base"]),
        unit("base.js", &["base"], &[]),
    ];
    assert_eq!(order_of(&units), vec!["base.js", "lib.js", "app.js"]);
}

#[test]
fn test_two_unit_cycle_emits_entry_last() {
    let units = vec![unit("A", &["a"], &["b"]), unit("B", &["b"], &["a"])];
    assert_eq!(order_of(&units), vec!["B", "A"]);
}

#[test]
fn test_three_unit_cycle_is_post_order_from_entry() {
    let units = vec![
        unit("B", &["b"], &["c"]),
        unit("A", &["a"], &["b"]),
        unit("C", &["c"], &["a"]),
    ];
    // B -> C -> A -> (B, already entered)
    assert_eq!(order_of(&units), vec!["A", "C", "B"]);
}

#[test]
fn test_self_cycle_is_harmless() {
    let units = vec![unit("A", &["a"], &["a"]), unit("B", &["b"], &[])];
    assert_eq!(order_of(&units), vec!["A", "B"]);
}

#[test]
fn test_diamond_visits_shared_dependency_once() {
    let units = vec![
        unit("top", &["top"], &["left", "right"]),
        unit("left", &["left"], &["base"]),
        unit("right", &["right"], &["base"]),
        unit("base", &["base"], &[]),
    ];
    assert_eq!(order_of(&units), vec!["base", "left", "right", "top"]);
}

#[test]
fn test_unresolved_requires_do_not_affect_order() {
    let units = vec![
        unit("a.js", &["a"], &["nowhere"]),
        unit("b.js", &["b"], &["a", "elsewhere"]),
    ];
    assert_eq!(order_of(&units), vec!["a.js", "b.js"]);
}

#[test]
fn test_deep_chain_does_not_overflow() {
    let depth = 50_000;
    let units: Vec<SimpleDependencyInfo> = (0..depth)
        .map(|i| {
            let provide = format!("s{}", i);
            let requires: Vec<String> = if i + 1 < depth {
                vec![format!("s{}", i + 1)]
            } else {
                Vec::new()
            };
            SimpleDependencyInfo::new(format!("u{}", i))
                .with_provides([provide])
                .with_requires(requires)
        })
        .collect();

    let order = order_of(&units);
    assert_eq!(order.len(), depth);
    assert_eq!(order.first(), Some(&format!("u{}", depth - 1).as_str()));
    assert_eq!(order.last(), Some(&"u0"));
}
