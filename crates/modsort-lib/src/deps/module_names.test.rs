// Tests for module naming and the synthetic-provide heuristic

use super::*;

#[test]
fn test_file_to_module_name_basic() {
    let names = ModuleNames::default();
    assert_eq!(names.module_name("lib/util.js"), "module$lib$util");
    assert_eq!(names.module_name("main"), "module$main");
}

#[test]
fn test_file_to_module_name_strips_dot_slash_and_extension() {
    let names = ModuleNames::default();
    assert_eq!(names.module_name("./lib/util.js"), "module$lib$util");
    assert_eq!(names.module_name("./app.mjs"), "module$app");
    assert_eq!(names.module_name("src/index.ts"), "module$src$index");
}

#[test]
fn test_file_to_module_name_escapes_separators() {
    let names = ModuleNames::default();
    assert_eq!(
        names.module_name("node_modules/@scope/ui-kit/v1.2/index.js"),
        "module$node_modules$$scope$ui_kit$v1_2$index"
    );
    assert_eq!(names.module_name("C:\\src\\a.js"), "module$C_$src$a");
}

#[test]
fn test_file_to_module_name_is_idempotent() {
    let names = ModuleNames::default();
    let once = names.module_name("lib/util.js");
    assert_eq!(names.module_name(&once), once);
}

#[test]
fn test_custom_prefix() {
    let names = ModuleNames::new("mod:");
    assert_eq!(names.prefix(), "mod:");
    assert_eq!(names.module_name("a/b.js"), "mod:a$b");
}

#[test]
fn test_module_prefix_heuristic() {
    let heuristic = ModulePrefix::default();
    assert!(heuristic.is_synthetic("module$lib$util"));
    assert!(!heuristic.is_synthetic("goog.string"));
    assert!(!heuristic.is_synthetic("my_module$x"));
}

#[test]
fn test_closures_implement_collaborator_traits() {
    let normalizer = |s: &str| s.to_uppercase();
    let synthetic = |s: &str| s.ends_with('!');

    assert_eq!(normalizer.module_name("abc"), "ABC");
    assert!(synthetic.is_synthetic("gen!"));
    assert!(!synthetic.is_synthetic("real"));
}
