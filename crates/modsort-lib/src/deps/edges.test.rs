// Tests for dependency edge derivation

use super::*;
use crate::deps::info::SimpleDependencyInfo;
use crate::deps::module_names::{ModuleNames, ModulePrefix};

fn unit(name: &str, provides: &[&str], requires: &[&str]) -> SimpleDependencyInfo {
    SimpleDependencyInfo::new(name)
        .with_provides(provides.iter().copied())
        .with_requires(requires.iter().copied())
}

fn edges_of(units: &[SimpleDependencyInfo]) -> DependencyEdges {
    let refs: Vec<&SimpleDependencyInfo> = units.iter().collect();
    let index = SymbolIndex::build(&refs, &ModuleNames::default(), &ModulePrefix::default());
    DependencyEdges::build(&refs, &index)
}

#[test]
fn test_every_unit_is_a_node() {
    let units = vec![unit("a.js", &[], &[]), unit("b.js", &[], &[])];
    let edges = edges_of(&units);

    assert_eq!(edges.node_count(), 2);
    assert_eq!(edges.edge_count(), 0);
}

#[test]
fn test_require_resolves_to_provider() {
    let units = vec![unit("a.js", &["a"], &["b"]), unit("b.js", &["b"], &[])];
    let edges = edges_of(&units);

    assert!(edges.contains_edge(0, 1));
    assert!(!edges.contains_edge(1, 0));
    assert_eq!(edges.dependencies(0).collect::<Vec<_>>(), vec![1]);
    assert_eq!(edges.dependencies(1).count(), 0);
}

#[test]
fn test_repeated_resolution_collapses() {
    let units = vec![
        unit("a.js", &[], &["b", "b.more", "b"]),
        unit("b.js", &["b", "b.more"], &[]),
    ];
    let edges = edges_of(&units);

    assert_eq!(edges.edge_count(), 1);
    assert_eq!(edges.dependencies(0).collect::<Vec<_>>(), vec![1]);
}

#[test]
fn test_unresolved_requires_are_skipped() {
    let units = vec![unit("a.js", &["a"], &["missing", "b"]), unit("b.js", &["b"], &[])];
    let edges = edges_of(&units);

    assert_eq!(edges.edge_count(), 1);
    assert!(edges.contains_edge(0, 1));
}

#[test]
fn test_dependencies_follow_require_order() {
    let units = vec![
        unit("main.js", &[], &["c", "a", "b"]),
        unit("a.js", &["a"], &[]),
        unit("b.js", &["b"], &[]),
        unit("c.js", &["c"], &[]),
    ];
    let edges = edges_of(&units);

    assert_eq!(edges.dependencies(0).collect::<Vec<_>>(), vec![3, 1, 2]);
}

#[test]
fn test_incoming_edges_do_not_leak_into_dependencies() {
    let units = vec![
        unit("a.js", &["a"], &["b"]),
        unit("b.js", &["b"], &["c"]),
        unit("c.js", &["c"], &[]),
    ];
    let edges = edges_of(&units);

    assert_eq!(edges.dependencies(1).collect::<Vec<_>>(), vec![2]);
}

#[test]
fn test_self_require_is_a_self_edge() {
    let units = vec![unit("a.js", &["a"], &["a"])];
    let edges = edges_of(&units);

    assert!(edges.contains_edge(0, 0));
    assert_eq!(edges.dependencies(0).collect::<Vec<_>>(), vec![0]);
}

#[test]
fn test_overwritten_provider_receives_the_edge() {
    let units = vec![
        unit("p1.js", &["x"], &[]),
        unit("user.js", &[], &["x"]),
        unit("p2.js", &["x"], &[]),
    ];
    let edges = edges_of(&units);

    assert!(edges.contains_edge(1, 2));
    assert!(!edges.contains_edge(1, 0));
}
