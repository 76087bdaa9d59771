//! Command-line interface for the exporter.

use std::path::{Path, PathBuf};

use clap::Parser;
use console::style;

use crate::config::{validate_base_iri, DEFAULT_BASE_IRI};
use crate::error::Result;
use crate::exporter::export_rules;
use crate::json::save_json;

/// DDS Conventie Export - Convert the naming convention workbook to JSON rules.
#[derive(Parser)]
#[command(name = "dds-conventie-export")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Path to the convention workbook (.xlsx)
    pub input: PathBuf,

    /// Path of the JSON rules file to write
    pub output: PathBuf,

    /// Base IRI prepended to every identifier suffix
    #[arg(long, default_value = DEFAULT_BASE_IRI)]
    pub base_iri: String,
}

/// Run the CLI.
pub fn run() -> Result<()> {
    let cli = Cli::parse();
    export_command(&cli.input, &cli.output, &cli.base_iri)
}

/// Execute the export command.
fn export_command(input: &Path, output: &Path, base_iri: &str) -> Result<()> {
    // Validate the base IRI before opening the workbook
    validate_base_iri(base_iri)?;

    println!(
        "{} {}",
        style("Exporting").bold(),
        style(input.display()).cyan()
    );
    println!();

    let rule_set = export_rules(input, base_iri)?;

    for warning in &rule_set.warnings {
        tracing::warn!("{warning}");
    }

    let version = if rule_set.latest_rule_version.is_empty() {
        "(none)"
    } else {
        rule_set.latest_rule_version.as_str()
    };
    println!("  Version: {}", style(version).green());
    println!("  Rules: {}", rule_set.rules.len());
    if rule_set.skipped_rows > 0 {
        println!("  Skipped rows: {}", rule_set.skipped_rows);
    }
    if !rule_set.warnings.is_empty() {
        println!(
            "  Warnings: {}",
            style(rule_set.warnings.len()).yellow().bold()
        );
    }

    let output_path = save_json(&rule_set, output)?;

    println!();
    println!(
        "{} {}",
        style("Saved to:").green().bold(),
        output_path.display()
    );

    Ok(())
}
