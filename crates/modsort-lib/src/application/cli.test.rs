use super::*;
use crate::primitives::OutputFormat;
use clap::CommandFactory;
use std::path::PathBuf;

#[test]
fn test_cli_definition_is_consistent() {
    Cli::command().debug_assert();
}

#[test]
fn test_no_subcommand() {
    let cli = Cli::try_parse_from(["modsort"]).unwrap();
    assert_eq!(cli.command, None);
}

#[test]
fn test_sort_with_global_flags_after_subcommand() {
    let cli =
        Cli::try_parse_from(["modsort", "sort", "-m", "units.json", "-o", "json"]).unwrap();
    assert_eq!(cli.command, Some(Commands::Sort));
    assert_eq!(cli.config.manifest, Some(PathBuf::from("units.json")));
    assert_eq!(cli.config.output, OutputFormat::Json);
}

#[test]
fn test_deps_roots_and_unsorted() {
    let cli = Cli::try_parse_from(["modsort", "deps", "app.js", "ui.js", "--unsorted"]).unwrap();
    assert_eq!(
        cli.command,
        Some(Commands::Deps {
            roots: vec!["app.js".to_string(), "ui.js".to_string()],
            unsorted: true,
        })
    );
}

#[test]
fn test_deps_requires_a_root() {
    assert!(Cli::try_parse_from(["modsort", "deps"]).is_err());
}

#[test]
fn test_provider_optional() {
    let cli = Cli::try_parse_from(["modsort", "provider", "ui", "--optional"]).unwrap();
    assert_eq!(
        cli.command,
        Some(Commands::Provider {
            symbol: "ui".to_string(),
            optional: true,
        })
    );

    let cli = Cli::try_parse_from(["modsort", "provider", "ui"]).unwrap();
    assert_eq!(
        cli.command,
        Some(Commands::Provider {
            symbol: "ui".to_string(),
            optional: false,
        })
    );
}

#[test]
fn test_unknown_output_format_is_rejected() {
    assert!(Cli::try_parse_from(["modsort", "sort", "--output", "xml"]).is_err());
}

#[test]
fn test_synthetic_prefix_flag() {
    let cli =
        Cli::try_parse_from(["modsort", "--synthetic-prefix", "gen$", "exportless"]).unwrap();
    assert_eq!(cli.config.synthetic_prefix, "gen$");
    assert_eq!(cli.command, Some(Commands::Exportless));
}
