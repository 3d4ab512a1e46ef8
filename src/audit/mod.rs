//! Mutation journal for the budget planner
//!
//! Every successful add or remove is appended to a line-delimited JSON log
//! with the record as it was added or removed. The journal is an activity
//! log only; it is never replayed into a session.
//!
//! - `AuditEntry`: a single entry with timestamp, operation, record kind and
//!   the serialized record.
//! - `AuditLogger`: appends entries to the log file and reads them back.

mod entry;
mod logger;

pub use entry::{AuditEntry, Operation};
pub use logger::AuditLogger;
