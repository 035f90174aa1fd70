//! CSV export functionality

use std::io::Write;

use serde::Serialize;

use crate::error::{FinanceError, FinanceResult};
use crate::models::{Budget, Transaction};

#[derive(Serialize)]
struct TransactionRecord<'a> {
    #[serde(rename = "ID")]
    id: &'a str,
    #[serde(rename = "Date")]
    date: String,
    #[serde(rename = "Description")]
    description: &'a str,
    #[serde(rename = "Category")]
    category: &'a str,
    #[serde(rename = "Type")]
    kind: &'a str,
    #[serde(rename = "Amount")]
    amount: String,
}

#[derive(Serialize)]
struct BudgetRecord<'a> {
    #[serde(rename = "ID")]
    id: &'a str,
    #[serde(rename = "Month")]
    month: String,
    #[serde(rename = "Category")]
    category: &'a str,
    #[serde(rename = "Amount")]
    amount: String,
}

fn export_error(e: impl std::fmt::Display) -> FinanceError {
    FinanceError::Export(e.to_string())
}

/// Write transactions as CSV, in stored order
pub fn export_transactions_csv<W: Write>(
    transactions: &[Transaction],
    writer: W,
) -> FinanceResult<()> {
    let mut csv_writer = ::csv::Writer::from_writer(writer);

    for txn in transactions {
        csv_writer
            .serialize(TransactionRecord {
                id: txn.id.as_str(),
                date: txn.date.format("%Y-%m-%d").to_string(),
                description: &txn.description,
                category: txn.category.label(),
                kind: txn.kind.as_str(),
                amount: format!("{:.2}", txn.amount.as_units()),
            })
            .map_err(export_error)?;
    }

    csv_writer.flush().map_err(export_error)?;
    Ok(())
}

/// Write budgets as CSV, in stored order
pub fn export_budgets_csv<W: Write>(budgets: &[Budget], writer: W) -> FinanceResult<()> {
    let mut csv_writer = ::csv::Writer::from_writer(writer);

    for budget in budgets {
        csv_writer
            .serialize(BudgetRecord {
                id: budget.id.as_str(),
                month: budget.month.to_string(),
                category: budget.category.label(),
                amount: format!("{:.2}", budget.amount.as_units()),
            })
            .map_err(export_error)?;
    }

    csv_writer.flush().map_err(export_error)?;
    Ok(())
}
