//! Session storage for the budget planner
//!
//! Holds the four record sets in memory for the lifetime of a session and
//! journals every add and remove to the audit log when one is attached.
//! Nothing here is written back to disk; closing the session discards the
//! records.

pub mod repository;

pub use repository::RecordRepository;

use serde::Serialize;

use crate::audit::{AuditEntry, AuditLogger};
use crate::error::PlannerResult;
use crate::models::{
    IncomeRecord, OneTimeExpense, RecordKind, RecurringExpense, SavingsAllocation,
};

/// Main storage coordinator that provides access to all record sets
#[derive(Debug, Default)]
pub struct Storage {
    pub incomes: RecordRepository<IncomeRecord>,
    pub expenses: RecordRepository<RecurringExpense>,
    pub one_time: RecordRepository<OneTimeExpense>,
    pub savings: RecordRepository<SavingsAllocation>,
    audit: Option<AuditLogger>,
}

impl Storage {
    /// Create empty storage with no journal
    pub fn new() -> Self {
        Self::default()
    }

    /// Create empty storage that journals mutations through `logger`
    pub fn with_audit(logger: AuditLogger) -> Self {
        Self {
            audit: Some(logger),
            ..Self::default()
        }
    }

    /// The attached journal, if any
    pub fn audit_logger(&self) -> Option<&AuditLogger> {
        self.audit.as_ref()
    }

    /// Journal an added record
    pub fn log_create<T: Serialize>(
        &self,
        kind: RecordKind,
        id: impl Into<String>,
        name: Option<String>,
        record: &T,
    ) -> PlannerResult<()> {
        match &self.audit {
            Some(logger) => logger.log(&AuditEntry::create(kind, id, name, record)),
            None => Ok(()),
        }
    }

    /// Journal a removed record
    pub fn log_delete<T: Serialize>(
        &self,
        kind: RecordKind,
        id: impl Into<String>,
        name: Option<String>,
        record: &T,
    ) -> PlannerResult<()> {
        match &self.audit {
            Some(logger) => logger.log(&AuditEntry::delete(kind, id, name, record)),
            None => Ok(()),
        }
    }
}
