//! Validated add and remove shared by every record service

use crate::error::{PlannerError, PlannerResult};
use crate::models::BudgetRecord;
use crate::storage::{RecordRepository, Storage};

/// Validate `record`, journal the addition and store it
///
/// A record that fails validation, or whose journal entry cannot be written,
/// is never stored.
pub(crate) fn add_record<T: BudgetRecord>(
    storage: &Storage,
    repo: &RecordRepository<T>,
    record: T,
) -> PlannerResult<T> {
    record
        .validate()
        .map_err(|e| PlannerError::Validation(e.to_string()))?;

    storage.log_create(
        T::KIND,
        record.id().to_string(),
        Some(record.label()),
        &record,
    )?;

    repo.insert(record.clone())?;

    Ok(record)
}

/// Journal and remove the record with `id`
///
/// Returns `None` without touching the set when no record has that ID. The
/// record stays in the set if its journal entry cannot be written.
pub(crate) fn remove_record<T: BudgetRecord>(
    storage: &Storage,
    repo: &RecordRepository<T>,
    id: T::Id,
) -> PlannerResult<Option<T>> {
    let Some(record) = repo.get(id)? else {
        return Ok(None);
    };

    storage.log_delete(
        T::KIND,
        record.id().to_string(),
        Some(record.label()),
        &record,
    )?;

    repo.remove(id)
}
