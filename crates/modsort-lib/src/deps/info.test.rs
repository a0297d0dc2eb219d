// Tests for the unit contract

use super::*;

#[test]
fn test_builder_sets_all_fields() {
    let unit = SimpleDependencyInfo::new("lib/util.js")
        .with_provides(["util", "util.strings"])
        .with_requires(vec!["base".to_string()]);

    assert_eq!(unit.name(), "lib/util.js");
    assert_eq!(unit.provides(), ["util", "util.strings"]);
    assert_eq!(unit.requires(), ["base"]);
}

#[test]
fn test_new_unit_is_empty() {
    let unit = SimpleDependencyInfo::new("empty.js");
    assert!(unit.provides().is_empty());
    assert!(unit.requires().is_empty());
}

#[test]
fn test_reference_forwards_to_unit() {
    let unit = SimpleDependencyInfo::new("a.js").with_provides(["a"]);
    let by_ref: &SimpleDependencyInfo = &unit;

    assert_eq!(DependencyInfo::name(&by_ref), "a.js");
    assert_eq!(DependencyInfo::provides(&by_ref), ["a"]);
}

#[test]
fn test_deserialize_defaults_missing_lists() {
    let unit: SimpleDependencyInfo = serde_json::from_str(r#"{ "name": "main.js" }"#).unwrap();
    assert_eq!(unit, SimpleDependencyInfo::new("main.js"));
}
