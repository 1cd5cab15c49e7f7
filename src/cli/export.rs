//! CLI commands for data export
//!
//! Writes the store snapshot as CSV, JSON or YAML to a file or stdout.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use clap::{Args, ValueEnum};

use crate::error::{ExpenseError, ExpenseResult};
use crate::export::{export_expenses_csv, export_full_json, export_full_yaml};
use crate::services::ExpenseStore;
use crate::storage::KeyValueStore;

/// Export format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    /// CSV format (expenses only)
    Csv,
    /// JSON format (budget, categories and expenses)
    Json,
    /// YAML format (same as JSON, human-readable)
    Yaml,
}

/// Arguments for `export`
#[derive(Args, Debug)]
pub struct ExportArgs {
    /// Export format
    #[arg(value_enum)]
    pub format: ExportFormat,

    /// Output file path (default: stdout)
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Handle the export command
pub fn handle_export_command<S: KeyValueStore>(
    store: &ExpenseStore<S>,
    args: ExportArgs,
) -> ExpenseResult<()> {
    match &args.output {
        Some(path) => {
            let file = File::create(path).map_err(|e| {
                ExpenseError::Export(format!("Failed to create file {}: {}", path.display(), e))
            })?;
            let mut writer = BufWriter::new(file);
            write_export(store, args.format, &mut writer)?;
            writer
                .flush()
                .map_err(|e| ExpenseError::Export(e.to_string()))?;

            match args.format {
                ExportFormat::Csv => println!(
                    "Exported {} expenses to: {}",
                    store.expenses().len(),
                    path.display()
                ),
                _ => println!("Full export written to: {}", path.display()),
            }
        }
        None => {
            let stdout = io::stdout();
            let mut writer = stdout.lock();
            write_export(store, args.format, &mut writer)?;
        }
    }

    Ok(())
}

fn write_export<S: KeyValueStore, W: Write>(
    store: &ExpenseStore<S>,
    format: ExportFormat,
    writer: &mut W,
) -> ExpenseResult<()> {
    match format {
        ExportFormat::Csv => export_expenses_csv(store.expenses(), writer),
        ExportFormat::Json => export_full_json(store.snapshot(), writer),
        ExportFormat::Yaml => export_full_yaml(store.snapshot(), writer),
    }
}
