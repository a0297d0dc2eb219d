//! Workflow tests for the deps, provider and exportless commands

use anyhow::Result;
use modsort_lib::DependencySortError;
use modsort_lib::application::cli::Commands;
use modsort_lib::primitives::OutputFormat;
use modsort_tests::fixtures::{ManifestFixture, lines, run_command};

fn deps(roots: &[&str], unsorted: bool) -> Commands {
    Commands::Deps {
        roots: roots.iter().map(|root| root.to_string()).collect(),
        unsorted,
    }
}

fn provider(symbol: &str, optional: bool) -> Commands {
    Commands::Provider {
        symbol: symbol.to_string(),
        optional,
    }
}

#[test]
fn e2e_deps_in_import_order() -> Result<()> {
    let fixture = ManifestFixture::web_app()?;
    let output = run_command(
        deps(&["src/ui.js"], false),
        &fixture.config(OutputFormat::Text),
    )?;

    assert_eq!(lines(&output), ["src/util.js", "src/theme.js", "src/ui.js"]);
    Ok(())
}

#[test]
fn e2e_deps_in_manifest_order() -> Result<()> {
    let fixture = ManifestFixture::web_app()?;
    let output = run_command(
        deps(&["src/ui.js"], true),
        &fixture.config(OutputFormat::Text),
    )?;

    assert_eq!(lines(&output), ["src/ui.js", "src/util.js", "src/theme.js"]);
    Ok(())
}

#[test]
fn e2e_deps_through_a_cycle() -> Result<()> {
    let fixture = ManifestFixture::cycle()?;
    let output = run_command(deps(&["a.js"], false), &fixture.config(OutputFormat::Text))?;

    assert_eq!(lines(&output), ["a.js", "b.js"]);
    Ok(())
}

#[test]
fn e2e_deps_of_several_roots() -> Result<()> {
    let fixture = ManifestFixture::diamond()?;
    let output = run_command(
        deps(&["right.js", "left.js"], false),
        &fixture.config(OutputFormat::Json),
    )?;

    let names: Vec<String> = serde_json::from_str(&output)?;
    assert_eq!(names, ["bottom.js", "left.js", "right.js"]);
    Ok(())
}

#[test]
fn e2e_deps_unknown_root() -> Result<()> {
    let fixture = ManifestFixture::diamond()?;
    let err = run_command(
        deps(&["missing.js"], false),
        &fixture.config(OutputFormat::Text),
    )
    .unwrap_err();

    assert_eq!(err.to_string(), "Unknown unit: missing.js");
    Ok(())
}

#[test]
fn e2e_provider_of_exported_symbol() -> Result<()> {
    let fixture = ManifestFixture::web_app()?;
    let output = run_command(
        provider("app.util", false),
        &fixture.config(OutputFormat::Text),
    )?;

    assert_eq!(output, "src/util.js\n");
    Ok(())
}

#[test]
fn e2e_provider_by_relative_file_name() -> Result<()> {
    let fixture = ManifestFixture::web_app()?;
    let config = fixture.config(OutputFormat::Text);

    assert_eq!(
        run_command(provider("./src/polyfill.js", false), &config)?,
        "src/polyfill.js\n"
    );
    assert_eq!(
        run_command(provider("./src/theme.js", false), &config)?,
        "src/theme.js\n"
    );
    Ok(())
}

#[test]
fn e2e_provider_missing() -> Result<()> {
    let fixture = ManifestFixture::web_app()?;
    let err = run_command(
        provider("app.missing", false),
        &fixture.config(OutputFormat::Text),
    )
    .unwrap_err();

    assert_eq!(
        err.downcast_ref::<DependencySortError>(),
        Some(&DependencySortError::MissingProvider {
            symbol: "app.missing".to_string()
        })
    );
    Ok(())
}

#[test]
fn e2e_provider_optional_miss() -> Result<()> {
    let fixture = ManifestFixture::web_app()?;

    let text = run_command(
        provider("app.missing", true),
        &fixture.config(OutputFormat::Text),
    )?;
    assert!(text.is_empty());

    let json = run_command(
        provider("app.missing", true),
        &fixture.config(OutputFormat::Json),
    )?;
    assert_eq!(json.trim(), "null");
    Ok(())
}

#[test]
fn e2e_exportless_in_manifest_order() -> Result<()> {
    let fixture = ManifestFixture::web_app()?;
    let output = run_command(Commands::Exportless, &fixture.config(OutputFormat::Text))?;

    assert_eq!(lines(&output), ["src/theme.js", "src/polyfill.js"]);
    Ok(())
}

#[test]
fn e2e_exportless_none() -> Result<()> {
    let fixture = ManifestFixture::diamond()?;
    let output = run_command(Commands::Exportless, &fixture.config(OutputFormat::Json))?;

    assert_eq!(output.trim(), "[]");
    Ok(())
}
