//! Path management for the finance visualizer
//!
//! ## Path Resolution Order
//!
//! 1. `FINVIZ_DATA_DIR` environment variable (if set)
//! 2. The platform config directory joined with `finance-visualizer`
//!    (`~/.config/finance-visualizer` on Linux, `%APPDATA%\finance-visualizer`
//!    on Windows)

use std::path::PathBuf;

use directories::BaseDirs;

use crate::error::FinanceError;

/// Environment variable overriding the data directory
pub const DATA_DIR_ENV: &str = "FINVIZ_DATA_DIR";

/// Storage key for the transaction collection
pub const TRANSACTIONS_KEY: &str = "finance-transactions";

/// Storage key for the budget collection
pub const BUDGETS_KEY: &str = "finance-budgets";

/// Manages all paths used by the finance visualizer
#[derive(Debug, Clone)]
pub struct FinancePaths {
    base_dir: PathBuf,
}

impl FinancePaths {
    /// Resolve paths from the environment
    ///
    /// # Errors
    ///
    /// Returns an error if no home/config directory can be determined.
    pub fn new() -> Result<Self, FinanceError> {
        let base_dir = if let Ok(custom) = std::env::var(DATA_DIR_ENV) {
            PathBuf::from(custom)
        } else {
            resolve_default_path()?
        };

        Ok(Self { base_dir })
    }

    /// Create FinancePaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Get the path to the audit log
    pub fn audit_log(&self) -> PathBuf {
        self.base_dir.join("audit.log")
    }

    /// File backing a storage key
    pub fn store_file(&self, key: &str) -> PathBuf {
        self.base_dir.join(format!("{}.json", key))
    }

    pub fn transactions_file(&self) -> PathBuf {
        self.store_file(TRANSACTIONS_KEY)
    }

    pub fn budgets_file(&self) -> PathBuf {
        self.store_file(BUDGETS_KEY)
    }

    /// Ensure the base directory exists
    pub fn ensure_directories(&self) -> Result<(), FinanceError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| FinanceError::Io(format!("Failed to create data directory: {}", e)))
    }
}

fn resolve_default_path() -> Result<PathBuf, FinanceError> {
    let dirs = BaseDirs::new()
        .ok_or_else(|| FinanceError::Config("Could not determine home directory".into()))?;
    Ok(dirs.config_dir().join("finance-visualizer"))
}
