//! Finance Visualizer - personal finance tracking from the terminal
//!
//! Record income and expense transactions, set monthly per-category budgets,
//! and summarise the data as dashboards, category breakdowns, monthly trends,
//! budget-vs-actual comparisons and spending insights.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Data directory resolution and user settings
//! - `error`: Custom error types
//! - `models`: Core data models (transactions, budgets, categories, money)
//! - `storage`: JSON file storage layer
//! - `audit`: Change history of every mutation
//! - `services`: Business logic layer
//! - `reports`: Pure aggregation functions over the stored collections
//! - `display`: Terminal tables
//! - `export`: CSV, JSON and YAML export
//! - `cli`: clap command definitions and handlers
//!
//! # Example
//!
//! ```rust,ignore
//! use finance_visualizer::config::{FinancePaths, Settings};
//! use finance_visualizer::storage::Storage;
//!
//! let paths = FinancePaths::new()?;
//! let settings = Settings::load_or_create(&paths)?;
//! let storage = Storage::open(paths, &settings)?;
//! ```

pub mod audit;
pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod models;
pub mod reports;
pub mod services;
pub mod storage;

pub use error::{FinanceError, FinanceResult};
