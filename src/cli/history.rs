//! Change history command

use clap::Args;

use crate::config::Settings;
use crate::error::FinanceResult;
use crate::storage::Storage;

/// Show recent changes to transactions and budgets
#[derive(Args, Debug)]
pub struct HistoryArgs {
    /// Number of changes to show
    #[arg(short = 'n', long, default_value = "20")]
    pub limit: usize,
}

/// Print the most recent changes, newest first
pub fn handle_history_command(
    storage: &Storage,
    settings: &Settings,
    args: HistoryArgs,
) -> FinanceResult<()> {
    let Some(log) = storage.audit() else {
        println!("Change history is disabled (audit_enabled = false in config.json).");
        return Ok(());
    };

    let records = log.recent(args.limit)?;
    if records.is_empty() {
        println!("No changes recorded yet.");
        return Ok(());
    }

    for record in records.iter().rev() {
        println!("{}", record.format(&settings.currency_symbol));
    }

    Ok(())
}
