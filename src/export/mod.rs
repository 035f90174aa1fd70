//! Export module for the finance visualizer
//!
//! - CSV: one collection per file (spreadsheet-compatible)
//! - JSON: machine-readable export of both collections
//! - YAML: human-readable export of both collections

pub mod csv;
pub mod json;
pub mod yaml;

pub use csv::{export_budgets_csv, export_transactions_csv};
pub use json::{export_full_json, export_json, FullExport, EXPORT_SCHEMA_VERSION};
pub use yaml::{export_full_yaml, export_yaml};
