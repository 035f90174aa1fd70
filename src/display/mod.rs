//! Display formatting for terminal output
//!
//! Tables and detail views for the stored collections. Reports format
//! themselves; see [`crate::reports`].

pub mod budget;
pub mod category;
pub mod transaction;

pub use budget::format_budget_list;
pub use category::format_category_list;
pub use transaction::{format_transaction_details, format_transaction_list};
