//! JSON export functionality
//!
//! Exports both collections with a schema version and summary metadata.

use std::io::Write;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{FinanceError, FinanceResult};
use crate::models::{Budget, Transaction};
use crate::storage::Storage;

/// Current export schema version
pub const EXPORT_SCHEMA_VERSION: &str = "1.0.0";

/// Full export structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FullExport {
    /// Schema version for compatibility checking
    pub schema_version: String,

    pub exported_at: DateTime<Utc>,

    /// Application version that created the export
    pub app_version: String,

    pub transactions: Vec<Transaction>,

    pub budgets: Vec<Budget>,

    pub metadata: ExportMetadata,
}

/// Export metadata for reference
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportMetadata {
    pub transaction_count: usize,
    pub budget_count: usize,
    /// Date range of transactions (earliest)
    pub earliest_transaction: Option<String>,
    /// Date range of transactions (latest)
    pub latest_transaction: Option<String>,
}

impl FullExport {
    /// Create a new full export from storage
    pub fn from_storage(storage: &Storage) -> FinanceResult<Self> {
        let transactions = storage.transactions.get_all()?;
        let budgets = storage.budgets.get_all()?;

        let metadata = ExportMetadata {
            transaction_count: transactions.len(),
            budget_count: budgets.len(),
            earliest_transaction: transactions
                .iter()
                .map(|t| t.date)
                .min()
                .map(|d| d.to_string()),
            latest_transaction: transactions
                .iter()
                .map(|t| t.date)
                .max()
                .map(|d| d.to_string()),
        };

        Ok(Self {
            schema_version: EXPORT_SCHEMA_VERSION.to_string(),
            exported_at: Utc::now(),
            app_version: env!("CARGO_PKG_VERSION").to_string(),
            transactions,
            budgets,
            metadata,
        })
    }
}

/// Export both collections to JSON
pub fn export_full_json<W: Write>(storage: &Storage, writer: W) -> FinanceResult<()> {
    let export = FullExport::from_storage(storage)?;
    export_json(&export, writer)
}

/// Pretty-print any serializable value as JSON
pub fn export_json<T, W>(value: &T, mut writer: W) -> FinanceResult<()>
where
    T: Serialize + ?Sized,
    W: Write,
{
    serde_json::to_writer_pretty(&mut writer, value)
        .map_err(|e| FinanceError::Export(e.to_string()))?;
    writeln!(writer).map_err(|e| FinanceError::Export(e.to_string()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{FinancePaths, Settings};
    use crate::models::{Category, Money, NewTransaction, TransactionType};
    use crate::services::TransactionService;
    use chrono::NaiveDate;
    use tempfile::TempDir;

    #[test]
    fn test_full_export() {
        let temp_dir = TempDir::new().unwrap();
        let paths = FinancePaths::with_base_dir(temp_dir.path().to_path_buf());
        let storage = Storage::open(paths, &Settings::default()).unwrap();

        for day in [3, 9] {
            TransactionService::new(&storage)
                .add(NewTransaction {
                    amount: Money::from_cents(500),
                    description: "Coffee".into(),
                    date: NaiveDate::from_ymd_opt(2024, 6, day).unwrap(),
                    category: Category::FoodAndDining,
                    kind: TransactionType::Expense,
                })
                .unwrap();
        }

        let mut output = Vec::new();
        export_full_json(&storage, &mut output).unwrap();

        let parsed: FullExport = serde_json::from_slice(&output).unwrap();
        assert_eq!(parsed.schema_version, EXPORT_SCHEMA_VERSION);
        assert_eq!(parsed.metadata.transaction_count, 2);
        assert_eq!(parsed.metadata.budget_count, 0);
        assert_eq!(parsed.metadata.earliest_transaction.as_deref(), Some("2024-06-03"));
        assert_eq!(parsed.metadata.latest_transaction.as_deref(), Some("2024-06-09"));
    }

    #[test]
    fn test_export_slice_matches_storage_format() {
        let mut output = Vec::new();
        let empty: Vec<Transaction> = Vec::new();
        export_json(&empty, &mut output).unwrap();
        assert_eq!(String::from_utf8(output).unwrap(), "[]\n");
    }
}
