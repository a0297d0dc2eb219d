// Tests for symbol indexing

use super::*;
use crate::deps::info::SimpleDependencyInfo;
use crate::deps::module_names::{ModuleNames, ModulePrefix};

fn unit(name: &str, provides: &[&str]) -> SimpleDependencyInfo {
    SimpleDependencyInfo::new(name).with_provides(provides.iter().copied())
}

fn index_of(units: &[SimpleDependencyInfo]) -> SymbolIndex {
    let refs: Vec<&SimpleDependencyInfo> = units.iter().collect();
    SymbolIndex::build(&refs, &ModuleNames::default(), &ModulePrefix::default())
}

#[test]
fn test_provides_map_to_their_unit() {
    let units = vec![unit("a.js", &["a", "a.extra"]), unit("b.js", &["b"])];
    let index = index_of(&units);

    assert_eq!(index.provider_of("a"), Some(0));
    assert_eq!(index.provider_of("a.extra"), Some(0));
    assert_eq!(index.provider_of("b"), Some(1));
    assert_eq!(index.provider_of("c"), None);
    assert_eq!(index.symbol_count(), 3);
}

#[test]
fn test_last_provider_wins() {
    let units = vec![unit("p1.js", &["x"]), unit("p2.js", &["x"])];
    let index = index_of(&units);

    assert_eq!(index.provider_of("x"), Some(1));
    assert_eq!(index.symbol_count(), 1);
}

#[test]
fn test_empty_provides_is_exportless() {
    let units = vec![unit("a.js", &["a"]), unit("lib/main.js", &[])];
    let index = index_of(&units);

    assert_eq!(index.exportless().collect::<Vec<_>>(), vec![1]);
    assert_eq!(index.exportless_named("module$lib$main"), Some(1));
}

#[test]
fn test_sole_synthetic_provide_is_exportless_and_indexed() {
    let units = vec![unit("es6.js", &["module$es6"])];
    let index = index_of(&units);

    assert_eq!(index.exportless_named("module$es6"), Some(0));
    assert_eq!(index.provider_of("module$es6"), Some(0));
}

#[test]
fn test_synthetic_among_real_provides_is_not_exportless() {
    let units = vec![unit("mixed.js", &["module$mixed", "real"])];
    let index = index_of(&units);

    assert_eq!(index.exportless().count(), 0);
    assert_eq!(index.provider_of("real"), Some(0));
}

#[test]
fn test_exportless_keeps_user_order() {
    let units = vec![
        unit("z.js", &[]),
        unit("a.js", &["a"]),
        unit("m.js", &["module$m"]),
        unit("b.js", &[]),
    ];
    let index = index_of(&units);

    assert_eq!(index.exportless().collect::<Vec<_>>(), vec![0, 2, 3]);
}

#[test]
fn test_exportless_name_collision_keeps_first_position() {
    let units = vec![
        unit("./dup.js", &[]),
        unit("other.js", &[]),
        unit("dup.js", &[]),
    ];
    let index = index_of(&units);

    assert_eq!(index.exportless().collect::<Vec<_>>(), vec![2, 1]);
}

#[test]
fn test_custom_predicate_is_used() {
    let units = vec![unit("gen.js", &["__generated__"])];
    let refs: Vec<&SimpleDependencyInfo> = units.iter().collect();
    let index = SymbolIndex::build(&refs, &ModuleNames::default(), &|s: &str| {
        s.starts_with("__")
    });

    assert_eq!(index.exportless_named("module$gen"), Some(0));
}
