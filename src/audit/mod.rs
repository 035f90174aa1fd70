//! Change history
//!
//! Every mutation of the stored collections is appended to `audit.log` as a
//! [`ChangeRecord`], one JSON object per line. Records carry the full
//! domain values involved, so an edit keeps both versions of the
//! transaction and a budget change keeps the budgets it displaced.

mod event;
mod log;

pub use event::{ChangeEvent, ChangeRecord, FieldChange};
pub use log::AuditLog;
