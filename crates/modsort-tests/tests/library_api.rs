//! Using the sorter directly on caller-owned unit types

use modsort_lib::deps::{DependencyInfo, DependencySortError, ImportOrderedDependencies};
use modsort_lib::manifest::{Manifest, ManifestFormat};

/// Caller-side unit record that is not the stock manifest type
#[derive(Debug)]
struct SourceFile {
    path: String,
    exports: Vec<String>,
    imports: Vec<String>,
}

impl SourceFile {
    fn new(path: &str, exports: &[&str], imports: &[&str]) -> Self {
        Self {
            path: path.to_string(),
            exports: exports.iter().map(|s| s.to_string()).collect(),
            imports: imports.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl DependencyInfo for SourceFile {
    fn name(&self) -> &str {
        &self.path
    }

    fn provides(&self) -> &[String] {
        &self.exports
    }

    fn requires(&self) -> &[String] {
        &self.imports
    }
}

fn names<U: DependencyInfo + ?Sized>(units: &[&U]) -> Vec<String> {
    units.iter().map(|unit| unit.name().to_string()).collect()
}

#[test]
fn sorts_caller_owned_units() {
    let files = vec![
        SourceFile::new("app.ts", &["app"], &["store", "view"]),
        SourceFile::new("view.ts", &["view"], &["store"]),
        SourceFile::new("store.ts", &["store"], &[]),
    ];

    let sorted = ImportOrderedDependencies::new(&files);
    assert_eq!(names(sorted.sorted_list()), ["store.ts", "view.ts", "app.ts"]);
    assert_eq!(names(sorted.user_ordered()), ["app.ts", "view.ts", "store.ts"]);
}

#[test]
fn closures_replace_the_naming_collaborators() {
    let files = vec![
        SourceFile::new("Lib/Core", &["_generated"], &[]),
        SourceFile::new("main", &["main"], &["core"]),
    ];

    let normalize = |name: &str| name.rsplit('/').next().unwrap_or(name).to_lowercase();
    let synthetic = |symbol: &str| symbol.starts_with('_');
    let sorted = ImportOrderedDependencies::with_naming(&files, normalize, &synthetic);

    // "Lib/Core" only provides a synthetic symbol, so it is exportless
    assert_eq!(names(&sorted.inputs_without_provides()), ["Lib/Core"]);
    // and is found under its normalized name
    assert_eq!(
        sorted.maybe_input_providing("CORE").map(|unit| unit.name()),
        Some("Lib/Core")
    );
    // requires are never resolved through the exportless fallback
    assert_eq!(names(sorted.sorted_list()), ["Lib/Core", "main"]);
}

#[test]
fn dependencies_of_a_unit_outside_the_sort() {
    let files = vec![SourceFile::new("a.ts", &["a"], &[])];
    let stranger = SourceFile::new("a.ts", &["a"], &[]);

    let sorted = ImportOrderedDependencies::new(&files);
    let err = sorted.dependencies_of(&[&stranger], true).unwrap_err();

    // Identity, not name, decides membership
    assert_eq!(
        err,
        DependencySortError::InvalidArgument {
            name: "a.ts".to_string()
        }
    );
}

#[test]
fn manifest_units_feed_the_sorter() {
    let manifest = Manifest::parse(
        r#"
[[units]]
name = "z.js"
requires = ["y"]

[[units]]
name = "y.js"
provides = ["y"]
"#,
        ManifestFormat::Toml,
    )
    .unwrap();

    let sorted = ImportOrderedDependencies::new(&manifest.units);
    let root = manifest.unit_named("z.js").unwrap();
    let closure = sorted.sorted_dependencies_of(&[root]).unwrap();

    assert_eq!(names(&closure), ["y.js", "z.js"]);
}
