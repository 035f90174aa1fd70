//! Transaction repository for JSON storage
//!
//! Manages loading and saving the transaction array. Order is significant:
//! new transactions are prepended, so the array reads most-recent-first.

use std::path::PathBuf;
use std::sync::RwLock;

use tracing::debug;

use crate::error::FinanceError;
use crate::models::{Transaction, TransactionId};

use super::file_io::{load_collection, store_collection};
use super::lock_error;

/// Repository for transaction persistence
pub struct TransactionRepository {
    path: PathBuf,
    data: RwLock<Vec<Transaction>>,
}

impl TransactionRepository {
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            data: RwLock::new(Vec::new()),
        }
    }

    /// Load transactions from disk, replacing anything in memory
    pub fn load(&self) -> Result<(), FinanceError> {
        let transactions: Vec<Transaction> = load_collection(&self.path)?;
        debug!(count = transactions.len(), path = %self.path.display(), "loaded transactions");

        let mut data = self.data.write().map_err(lock_error)?;
        *data = transactions;
        Ok(())
    }

    /// Save transactions to disk
    pub fn save(&self) -> Result<(), FinanceError> {
        let data = self.data.read().map_err(lock_error)?;
        store_collection(&self.path, data.as_slice())?;
        debug!(count = data.len(), path = %self.path.display(), "saved transactions");
        Ok(())
    }

    /// Get a transaction by exact ID
    pub fn get(&self, id: &TransactionId) -> Result<Option<Transaction>, FinanceError> {
        let data = self.data.read().map_err(lock_error)?;
        Ok(data.iter().find(|t| &t.id == id).cloned())
    }

    /// All transactions whose id matches user input (full id or prefix)
    pub fn find_matching(&self, input: &str) -> Result<Vec<Transaction>, FinanceError> {
        let data = self.data.read().map_err(lock_error)?;
        Ok(data.iter().filter(|t| t.id.matches(input)).cloned().collect())
    }

    /// Get all transactions in stored order
    pub fn get_all(&self) -> Result<Vec<Transaction>, FinanceError> {
        let data = self.data.read().map_err(lock_error)?;
        Ok(data.clone())
    }

    /// Insert a transaction at the front of the collection
    pub fn prepend(&self, txn: Transaction) -> Result<(), FinanceError> {
        let mut data = self.data.write().map_err(lock_error)?;
        data.insert(0, txn);
        Ok(())
    }

    /// Replace the entry with the same id in place
    ///
    /// Returns the previous value, or `None` (leaving the collection
    /// untouched) if no entry has that id.
    pub fn replace(&self, txn: Transaction) -> Result<Option<Transaction>, FinanceError> {
        let mut data = self.data.write().map_err(lock_error)?;
        Ok(data
            .iter_mut()
            .find(|t| t.id == txn.id)
            .map(|slot| std::mem::replace(slot, txn)))
    }

    /// Delete a transaction, returning it if it existed
    pub fn delete(&self, id: &TransactionId) -> Result<Option<Transaction>, FinanceError> {
        let mut data = self.data.write().map_err(lock_error)?;
        Ok(data
            .iter()
            .position(|t| &t.id == id)
            .map(|index| data.remove(index)))
    }

    pub fn count(&self) -> Result<usize, FinanceError> {
        let data = self.data.read().map_err(lock_error)?;
        Ok(data.len())
    }
}
