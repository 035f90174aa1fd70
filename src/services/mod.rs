//! Service layer for the finance visualizer
//!
//! The service layer provides business logic on top of the storage layer:
//! validation, id assignment, persistence after every mutation and audit
//! logging.

pub mod budget;
pub mod transaction;

pub use budget::BudgetService;
pub use transaction::{TransactionFilter, TransactionService};
