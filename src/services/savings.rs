//! Savings allocation service

use crate::error::{PlannerError, PlannerResult};
use crate::models::{Money, SavingsAllocation, SavingsId};
use crate::storage::Storage;

use super::records::{add_record, remove_record};

/// Service for monthly savings allocations
pub struct SavingsService<'a> {
    storage: &'a Storage,
}

impl<'a> SavingsService<'a> {
    /// Create a new savings service
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Add a monthly savings allocation
    pub fn add(&self, category: &str, monthly_amount: Money) -> PlannerResult<SavingsAllocation> {
        add_record(
            self.storage,
            &self.storage.savings,
            SavingsAllocation::new(category, monthly_amount),
        )
    }

    /// Add a savings allocation from raw user input
    pub fn add_from_input(&self, category: &str, amount: &str) -> PlannerResult<SavingsAllocation> {
        let amount = Money::parse(amount).map_err(|e| PlannerError::Validation(e.to_string()))?;
        self.add(category, amount)
    }

    /// Remove an allocation; returns false if the ID is unknown
    pub fn remove(&self, id: SavingsId) -> PlannerResult<bool> {
        Ok(remove_record(self.storage, &self.storage.savings, id)?.is_some())
    }

    /// All allocations in the order they were added
    pub fn list(&self) -> PlannerResult<Vec<SavingsAllocation>> {
        self.storage.savings.get_all()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audit::{AuditLogger, Operation};
    use crate::models::RecordKind;
    use tempfile::TempDir;

    #[test]
    fn test_add_and_remove() {
        let storage = Storage::new();
        let service = SavingsService::new(&storage);
        let crypto = service.add("Crypto", Money::from_dollars(50)).unwrap();

        assert_eq!(service.list().unwrap().len(), 1);
        assert!(service.remove(crypto.id).unwrap());
        assert!(service.list().unwrap().is_empty());
    }

    #[test]
    fn test_rejects_empty_category() {
        let storage = Storage::new();
        let service = SavingsService::new(&storage);
        assert!(service.add_from_input("  ", "50").unwrap_err().is_validation());
        assert!(service.list().unwrap().is_empty());
    }

    #[test]
    fn test_mutations_are_journaled() {
        let temp_dir = TempDir::new().unwrap();
        let logger = AuditLogger::new(temp_dir.path().join("audit.log"));
        let storage = Storage::with_audit(logger);
        let service = SavingsService::new(&storage);

        let crypto = service.add("Crypto", Money::from_dollars(50)).unwrap();
        service.add_from_input("", "50").unwrap_err();
        service.remove(crypto.id).unwrap();
        service.remove(crypto.id).unwrap();

        let entries = storage.audit_logger().unwrap().read_all().unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].operation, Operation::Create);
        assert_eq!(entries[0].entity_type, RecordKind::Savings);
        assert_eq!(entries[0].entity_id, crypto.id.to_string());
        assert_eq!(entries[1].operation, Operation::Delete);
    }
}
