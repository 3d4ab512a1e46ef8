//! Generic in-memory repository for one record set
//!
//! Insertion order is preserved for display. Records are never updated in
//! place: they are inserted whole and removed by ID.

use std::sync::RwLock;

use crate::error::{PlannerError, PlannerResult};
use crate::models::BudgetRecord;

/// Repository holding one kind of budget record
#[derive(Debug)]
pub struct RecordRepository<T: BudgetRecord> {
    records: RwLock<Vec<T>>,
}

impl<T: BudgetRecord> Default for RecordRepository<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: BudgetRecord> RecordRepository<T> {
    /// Create an empty repository
    pub fn new() -> Self {
        Self {
            records: RwLock::new(Vec::new()),
        }
    }

    /// Append a record
    pub fn insert(&self, record: T) -> PlannerResult<()> {
        let mut records = self
            .records
            .write()
            .map_err(|e| PlannerError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        records.push(record);
        Ok(())
    }

    /// Get a record by ID
    pub fn get(&self, id: T::Id) -> PlannerResult<Option<T>> {
        let records = self
            .records
            .read()
            .map_err(|e| PlannerError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(records.iter().find(|r| r.id() == id).cloned())
    }

    /// Remove the record with this ID, returning it if it existed
    pub fn remove(&self, id: T::Id) -> PlannerResult<Option<T>> {
        let mut records = self
            .records
            .write()
            .map_err(|e| PlannerError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        Ok(records
            .iter()
            .position(|r| r.id() == id)
            .map(|index| records.remove(index)))
    }

    /// Get all records in insertion order
    pub fn get_all(&self) -> PlannerResult<Vec<T>> {
        let records = self
            .records
            .read()
            .map_err(|e| PlannerError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(records.clone())
    }

    /// Number of records held
    pub fn count(&self) -> PlannerResult<usize> {
        let records = self
            .records
            .read()
            .map_err(|e| PlannerError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(records.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ExpenseId, Money, RecurringExpense};

    fn expense(category: &str, dollars: i64) -> RecurringExpense {
        RecurringExpense::new(category, Money::from_dollars(dollars))
    }

    #[test]
    fn test_insert_preserves_order() {
        let repo = RecordRepository::new();
        repo.insert(expense("Housing", 2000)).unwrap();
        repo.insert(expense("Car", 500)).unwrap();
        repo.insert(expense("Housing", 100)).unwrap();

        let categories: Vec<_> = repo
            .get_all()
            .unwrap()
            .into_iter()
            .map(|e| e.category)
            .collect();
        assert_eq!(categories, vec!["Housing", "Car", "Housing"]);
    }

    #[test]
    fn test_remove_only_target() {
        let repo = RecordRepository::new();
        let housing = expense("Housing", 2000);
        let car = expense("Car", 500);
        repo.insert(housing.clone()).unwrap();
        repo.insert(car.clone()).unwrap();

        let removed = repo.remove(housing.id).unwrap();
        assert_eq!(removed, Some(housing));
        assert_eq!(repo.get_all().unwrap(), vec![car]);
    }

    #[test]
    fn test_remove_missing_is_noop() {
        let repo = RecordRepository::new();
        repo.insert(expense("Housing", 2000)).unwrap();

        assert_eq!(repo.remove(ExpenseId::new()).unwrap(), None);
        assert_eq!(repo.count().unwrap(), 1);
    }

    #[test]
    fn test_get() {
        let repo = RecordRepository::new();
        let car = expense("Car", 500);
        repo.insert(car.clone()).unwrap();

        assert_eq!(repo.get(car.id).unwrap(), Some(car));
        assert_eq!(repo.get(ExpenseId::new()).unwrap(), None);
    }
}
