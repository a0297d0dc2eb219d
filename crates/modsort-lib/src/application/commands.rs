//! Command execution handlers
//!
//! Each handler loads the manifest named by the configuration, sorts it and
//! writes its result to the given output.

use crate::application::{AppConfig, CliConfig, Commands};
use crate::deps::{
    DependencyInfo, ImportOrderedDependencies, ModuleNames, ModulePrefix, SimpleDependencyInfo,
};
use crate::manifest::Manifest;
use crate::primitives::OutputFormat;
use anyhow::{Context, Result, anyhow};
use std::io::Write;
use tracing::{debug, info};

/// Execute CLI commands, writing results to stdout
pub fn execute_command(config: CliConfig) -> Result<()> {
    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    let command = match config.command {
        Some(cmd) => cmd,
        None => {
            writeln!(out, "modsort - import-order sorting for dependency units")?;
            writeln!(out, "Run 'modsort --help' for usage information")?;
            return Ok(());
        }
    };

    execute_command_with_output(command, &config.app_config, &mut out)
}

/// Execute a specific command against a provided output (for testing)
pub fn execute_command_with_output(
    command: Commands,
    config: &AppConfig,
    out: &mut dyn Write,
) -> Result<()> {
    match command {
        Commands::Version => handle_version(config, out),
        Commands::Sort => handle_sort(config, out),
        Commands::Deps { roots, unsorted } => handle_deps(config, out, &roots, unsorted),
        Commands::Provider { symbol, optional } => {
            handle_provider(config, out, &symbol, optional)
        }
        Commands::Exportless => handle_exportless(config, out),
    }
}

fn handle_version(config: &AppConfig, out: &mut dyn Write) -> Result<()> {
    let version = env!("CARGO_PKG_VERSION");
    match config.output {
        OutputFormat::Text => writeln!(out, "modsort {}", version)?,
        OutputFormat::Json => writeln!(
            out,
            "{}",
            serde_json::json!({ "name": "modsort", "version": version })
        )?,
    }
    Ok(())
}

fn handle_sort(config: &AppConfig, out: &mut dyn Write) -> Result<()> {
    let manifest = load_manifest(config)?;
    let sorted = sort_manifest(&manifest, config);

    info!("Sorted {} units", sorted.len());
    write_units(out, config.output, sorted.sorted_list())
}

fn handle_deps(
    config: &AppConfig,
    out: &mut dyn Write,
    roots: &[String],
    unsorted: bool,
) -> Result<()> {
    let manifest = load_manifest(config)?;

    let roots = roots
        .iter()
        .map(|name| {
            manifest
                .unit_named(name)
                .ok_or_else(|| anyhow!("Unknown unit: {}", name))
        })
        .collect::<Result<Vec<_>>>()?;

    let sorted = sort_manifest(&manifest, config);
    let dependencies = sorted.dependencies_of(&roots, !unsorted)?;

    debug!(
        "Resolved {} dependencies for {} roots",
        dependencies.len(),
        roots.len()
    );
    write_units(out, config.output, &dependencies)
}

fn handle_provider(
    config: &AppConfig,
    out: &mut dyn Write,
    symbol: &str,
    optional: bool,
) -> Result<()> {
    let manifest = load_manifest(config)?;
    let sorted = sort_manifest(&manifest, config);

    let provider = if optional {
        sorted.maybe_input_providing(symbol)
    } else {
        Some(sorted.input_providing(symbol)?)
    };

    let name = provider.map(|unit| unit.name());
    match config.output {
        OutputFormat::Text => {
            if let Some(name) = name {
                writeln!(out, "{}", name)?;
            }
        }
        OutputFormat::Json => writeln!(out, "{}", serde_json::to_string(&name)?)?,
    }
    Ok(())
}

fn handle_exportless(config: &AppConfig, out: &mut dyn Write) -> Result<()> {
    let manifest = load_manifest(config)?;
    let sorted = sort_manifest(&manifest, config);

    write_units(out, config.output, &sorted.inputs_without_provides())
}

fn load_manifest(config: &AppConfig) -> Result<Manifest> {
    let path = config.manifest_path()?;
    Manifest::load(path).with_context(|| format!("Failed to load {}", path.display()))
}

fn sort_manifest<'a>(
    manifest: &'a Manifest,
    config: &AppConfig,
) -> ImportOrderedDependencies<'a, SimpleDependencyInfo> {
    let prefix = config.synthetic_prefix.as_str();
    ImportOrderedDependencies::with_naming(
        &manifest.units,
        ModuleNames::new(prefix),
        &ModulePrefix::new(prefix),
    )
}

fn write_units<U: DependencyInfo>(
    out: &mut dyn Write,
    format: OutputFormat,
    units: &[&U],
) -> Result<()> {
    match format {
        OutputFormat::Text => {
            for unit in units {
                writeln!(out, "{}", unit.name())?;
            }
        }
        OutputFormat::Json => {
            let names: Vec<&str> = units.iter().map(|unit| unit.name()).collect();
            writeln!(out, "{}", serde_json::to_string(&names)?)?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    include!("commands.test.rs");
}
