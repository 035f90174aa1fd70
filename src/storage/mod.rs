//! Storage layer for the finance visualizer
//!
//! Each collection lives in its own JSON array file inside the data
//! directory. Files are written atomically after every mutation, and an
//! absent file loads as an empty collection.

pub mod budget;
pub mod file_io;
pub mod transactions;

pub use budget::BudgetRepository;
pub use file_io::{load_collection, store_collection};
pub use transactions::TransactionRepository;

use std::fmt::Display;

use tracing::warn;

use crate::audit::{AuditLog, ChangeEvent};
use crate::config::{FinancePaths, Settings};
use crate::error::{FinanceError, FinanceResult};

pub(crate) fn lock_error<E: Display>(e: E) -> FinanceError {
    FinanceError::Storage(format!("Failed to acquire lock: {}", e))
}

/// Main storage coordinator that provides access to all repositories
pub struct Storage {
    paths: FinancePaths,
    pub transactions: TransactionRepository,
    pub budgets: BudgetRepository,
    audit: Option<AuditLog>,
}

impl Storage {
    /// Create a new Storage instance
    ///
    /// Nothing is read until [`Storage::load_all`] is called.
    pub fn new(paths: FinancePaths, settings: &Settings) -> FinanceResult<Self> {
        paths.ensure_directories()?;

        let audit = settings
            .audit_enabled
            .then(|| AuditLog::new(paths.audit_log()));

        Ok(Self {
            transactions: TransactionRepository::new(paths.transactions_file()),
            budgets: BudgetRepository::new(paths.budgets_file()),
            audit,
            paths,
        })
    }

    /// Open storage and load both collections
    pub fn open(paths: FinancePaths, settings: &Settings) -> FinanceResult<Self> {
        let storage = Self::new(paths, settings)?;
        storage.load_all()?;
        Ok(storage)
    }

    pub fn paths(&self) -> &FinancePaths {
        &self.paths
    }

    /// Load all data from disk
    pub fn load_all(&self) -> FinanceResult<()> {
        self.transactions.load()?;
        self.budgets.load()?;
        Ok(())
    }

    /// Save all data to disk
    pub fn save_all(&self) -> FinanceResult<()> {
        self.transactions.save()?;
        self.budgets.save()?;
        Ok(())
    }

    /// The change log, when auditing is enabled
    pub fn audit(&self) -> Option<&AuditLog> {
        self.audit.as_ref()
    }

    /// Append a change to the history
    ///
    /// Called after the affected collection has been saved. A failed append
    /// is logged and otherwise ignored: the mutation itself already
    /// succeeded and stays on disk.
    pub fn record(&self, change: ChangeEvent) {
        let Some(log) = &self.audit else {
            return;
        };
        let subject = change.subject_id();
        if let Err(e) = log.append(change) {
            warn!(error = %e, subject = %subject, path = %log.path().display(), "failed to record change");
        }
    }
}
