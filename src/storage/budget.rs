//! Budget repository for JSON storage
//!
//! Manages loading and saving the budget array.

use std::path::PathBuf;
use std::sync::RwLock;

use tracing::debug;

use crate::error::FinanceError;
use crate::models::{Budget, Category, Month};

use super::file_io::{load_collection, store_collection};
use super::lock_error;

/// Repository for budget persistence
pub struct BudgetRepository {
    path: PathBuf,
    budgets: RwLock<Vec<Budget>>,
}

impl BudgetRepository {
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            budgets: RwLock::new(Vec::new()),
        }
    }

    /// Load budgets from disk, replacing anything in memory
    pub fn load(&self) -> Result<(), FinanceError> {
        let loaded: Vec<Budget> = load_collection(&self.path)?;
        debug!(count = loaded.len(), path = %self.path.display(), "loaded budgets");

        let mut budgets = self.budgets.write().map_err(lock_error)?;
        *budgets = loaded;
        Ok(())
    }

    /// Save budgets to disk
    pub fn save(&self) -> Result<(), FinanceError> {
        let budgets = self.budgets.read().map_err(lock_error)?;
        store_collection(&self.path, budgets.as_slice())?;
        debug!(count = budgets.len(), path = %self.path.display(), "saved budgets");
        Ok(())
    }

    /// Get all budgets in stored order
    pub fn get_all(&self) -> Result<Vec<Budget>, FinanceError> {
        let budgets = self.budgets.read().map_err(lock_error)?;
        Ok(budgets.clone())
    }

    /// Get all budgets for a month
    pub fn get_for_month(&self, month: Month) -> Result<Vec<Budget>, FinanceError> {
        let budgets = self.budgets.read().map_err(lock_error)?;
        Ok(budgets.iter().filter(|b| b.month == month).cloned().collect())
    }

    /// Remove every budget for `budget.category` (any month), then append it
    ///
    /// Returns the budgets that were replaced.
    pub fn replace_category(&self, budget: Budget) -> Result<Vec<Budget>, FinanceError> {
        let mut budgets = self.budgets.write().map_err(lock_error)?;
        let (replaced, kept): (Vec<Budget>, Vec<Budget>) = budgets
            .drain(..)
            .partition(|b| b.category == budget.category);
        *budgets = kept;
        budgets.push(budget);
        Ok(replaced)
    }

    /// Get the budget currently set for a category, if any
    pub fn get_for_category(&self, category: Category) -> Result<Option<Budget>, FinanceError> {
        let budgets = self.budgets.read().map_err(lock_error)?;
        Ok(budgets.iter().find(|b| b.category == category).cloned())
    }

    pub fn count(&self) -> Result<usize, FinanceError> {
        let budgets = self.budgets.read().map_err(lock_error)?;
        Ok(budgets.len())
    }
}
