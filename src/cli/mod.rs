//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the service layer.

pub mod budget;
pub mod export;
pub mod history;
pub mod report;
pub mod transaction;

pub use budget::{handle_budget_command, BudgetCommands};
pub use export::{handle_export_command, ExportCommands, ExportFormat};
pub use history::{handle_history_command, HistoryArgs};
pub use report::{handle_report_command, ReportCommands};
pub use transaction::{handle_transaction_command, TransactionCommands};

use crate::error::{FinanceError, FinanceResult};
use crate::models::Month;

/// Parse a `--month` option, defaulting to the current month
pub fn resolve_month(month: Option<String>) -> FinanceResult<Month> {
    match month {
        Some(value) => Month::parse(&value).map_err(|e| FinanceError::Validation(e.to_string())),
        None => Ok(Month::current()),
    }
}
