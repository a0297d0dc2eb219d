//! Workflow tests for the sort command
//!
//! Each test writes a manifest to a temporary directory and runs the command
//! the way the binary would, capturing its output.

use anyhow::Result;
use modsort_lib::application::cli::Commands;
use modsort_lib::primitives::OutputFormat;
use modsort_tests::fixtures::{ManifestFixture, lines, run_command};

#[test]
fn e2e_sort_places_providers_first() -> Result<()> {
    let fixture = ManifestFixture::web_app()?;
    let output = run_command(Commands::Sort, &fixture.config(OutputFormat::Text))?;

    assert_eq!(
        lines(&output),
        [
            "src/util.js",
            "src/theme.js",
            "src/ui.js",
            "src/main.js",
            "src/polyfill.js"
        ]
    );
    Ok(())
}

#[test]
fn e2e_sort_emits_cycle_entry_last() -> Result<()> {
    let fixture = ManifestFixture::cycle()?;
    let output = run_command(Commands::Sort, &fixture.config(OutputFormat::Text))?;

    // b.js is listed first, so the cycle is entered through it
    assert_eq!(lines(&output), ["a.js", "b.js", "main.js"]);
    Ok(())
}

#[test]
fn e2e_sort_diamond_from_yaml() -> Result<()> {
    let fixture = ManifestFixture::diamond()?;
    let output = run_command(Commands::Sort, &fixture.config(OutputFormat::Text))?;

    assert_eq!(lines(&output), ["bottom.js", "left.js", "right.js", "top.js"]);
    Ok(())
}

#[test]
fn e2e_sort_json_output() -> Result<()> {
    let fixture = ManifestFixture::diamond()?;
    let output = run_command(Commands::Sort, &fixture.config(OutputFormat::Json))?;

    let names: Vec<String> = serde_json::from_str(&output)?;
    assert_eq!(names, ["bottom.js", "left.js", "right.js", "top.js"]);
    Ok(())
}

#[test]
fn e2e_sort_is_stable_across_runs() -> Result<()> {
    let fixture = ManifestFixture::web_app()?;
    let config = fixture.config(OutputFormat::Text);

    let first = run_command(Commands::Sort, &config)?;
    let second = run_command(Commands::Sort, &config)?;
    assert_eq!(first, second);
    Ok(())
}

#[test]
fn e2e_sort_empty_manifest() -> Result<()> {
    let fixture = ManifestFixture::new("units.json", r#"{ "units": [] }"#)?;
    let output = run_command(Commands::Sort, &fixture.config(OutputFormat::Json))?;

    assert_eq!(output, "[]\n");
    Ok(())
}

#[test]
fn e2e_sort_custom_synthetic_prefix() -> Result<()> {
    let fixture = ManifestFixture::new(
        "units.json",
        r#"{ "units": [
            { "name": "gen.js", "provides": ["gen$gen"] },
            { "name": "plain.js", "provides": ["module$plain"] }
        ] }"#,
    )?;
    let mut config = fixture.config(OutputFormat::Text);
    config.synthetic_prefix = "gen$".to_string();

    // Only the provide carrying the configured prefix counts as synthetic
    let output = run_command(Commands::Exportless, &config)?;
    assert_eq!(lines(&output), ["gen.js"]);
    Ok(())
}

#[test]
fn e2e_duplicate_unit_names_are_rejected() -> Result<()> {
    let fixture = ManifestFixture::new(
        "units.json",
        r#"{ "units": [ { "name": "a.js" }, { "name": "a.js" } ] }"#,
    )?;

    let err = run_command(Commands::Sort, &fixture.config(OutputFormat::Text)).unwrap_err();
    assert!(format!("{:#}", err).contains("Duplicate unit name in manifest: a.js"));
    Ok(())
}

#[test]
fn e2e_unsupported_manifest_extension() -> Result<()> {
    let fixture = ManifestFixture::new("units.xml", "<units/>")?;

    let err = run_command(Commands::Sort, &fixture.config(OutputFormat::Text)).unwrap_err();
    assert!(format!("{:#}", err).contains("Unsupported manifest format"));
    Ok(())
}
