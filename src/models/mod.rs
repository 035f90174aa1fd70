//! Core data models for the finance visualizer
//!
//! This module contains the data structures of the tracking domain:
//! transactions, budgets, categories, months and money.

pub mod budget;
pub mod category;
pub mod ids;
pub mod money;
pub mod month;
pub mod transaction;

pub use budget::{Budget, BudgetForm, NewBudget};
pub use category::{Category, UnknownCategory};
pub use ids::{BudgetId, TransactionId};
pub use money::Money;
pub use month::Month;
pub use transaction::{
    NewTransaction, Transaction, TransactionForm, TransactionPatch, TransactionType,
};
