//! CLI commands for data export

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use clap::{Subcommand, ValueEnum};

use crate::error::{FinanceError, FinanceResult};
use crate::export::{csv, json, yaml};
use crate::storage::Storage;

/// Export format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    /// CSV (one collection per file)
    Csv,
    Json,
    /// YAML (human-readable)
    Yaml,
}

/// Export subcommands
#[derive(Subcommand, Debug)]
pub enum ExportCommands {
    /// Export transactions and budgets together
    All {
        #[arg(short, long, value_enum, default_value = "json")]
        format: ExportFormat,
        /// Output file path (stdout when omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Export transactions
    Transactions {
        #[arg(short, long, value_enum, default_value = "csv")]
        format: ExportFormat,
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Export budgets
    Budgets {
        #[arg(short, long, value_enum, default_value = "csv")]
        format: ExportFormat,
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

/// Handle export commands
pub fn handle_export_command(storage: &Storage, cmd: ExportCommands) -> FinanceResult<()> {
    match cmd {
        ExportCommands::All { format, output } => {
            let mut writer = open_output(output.as_ref())?;
            match format {
                ExportFormat::Csv => {
                    let transactions = storage.transactions.get_all()?;
                    csv::export_transactions_csv(&transactions, &mut writer)?;
                    eprintln!("Note: CSV exports transactions only. Use JSON or YAML for both collections.");
                }
                ExportFormat::Json => json::export_full_json(storage, &mut writer)?,
                ExportFormat::Yaml => yaml::export_full_yaml(storage, &mut writer)?,
            }
            finish(writer, output.as_ref(), "Full export")
        }

        ExportCommands::Transactions { format, output } => {
            let transactions = storage.transactions.get_all()?;
            let mut writer = open_output(output.as_ref())?;
            match format {
                ExportFormat::Csv => csv::export_transactions_csv(&transactions, &mut writer)?,
                ExportFormat::Json => json::export_json(&transactions, &mut writer)?,
                ExportFormat::Yaml => yaml::export_yaml(&transactions, &mut writer)?,
            }
            finish(
                writer,
                output.as_ref(),
                &format!("Exported {} transactions", transactions.len()),
            )
        }

        ExportCommands::Budgets { format, output } => {
            let budgets = storage.budgets.get_all()?;
            let mut writer = open_output(output.as_ref())?;
            match format {
                ExportFormat::Csv => csv::export_budgets_csv(&budgets, &mut writer)?,
                ExportFormat::Json => json::export_json(&budgets, &mut writer)?,
                ExportFormat::Yaml => yaml::export_yaml(&budgets, &mut writer)?,
            }
            finish(
                writer,
                output.as_ref(),
                &format!("Exported {} budgets", budgets.len()),
            )
        }
    }
}

fn open_output(output: Option<&PathBuf>) -> FinanceResult<Box<dyn Write>> {
    match output {
        Some(path) => {
            let file = File::create(path).map_err(|e| {
                FinanceError::Export(format!("Failed to create file {}: {}", path.display(), e))
            })?;
            Ok(Box::new(BufWriter::new(file)))
        }
        None => Ok(Box::new(io::stdout().lock())),
    }
}

fn finish(mut writer: Box<dyn Write>, output: Option<&PathBuf>, summary: &str) -> FinanceResult<()> {
    writer
        .flush()
        .map_err(|e| FinanceError::Export(e.to_string()))?;

    if let Some(path) = output {
        println!("{} to: {}", summary, path.display());
    }
    Ok(())
}
