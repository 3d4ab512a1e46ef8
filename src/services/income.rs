//! Income service
//!
//! Adds and removes salaries.

use crate::error::{PlannerError, PlannerResult};
use crate::models::{IncomeId, IncomeRecord, Money, TaxRate};
use crate::storage::Storage;

use super::records::{add_record, remove_record};

/// Service for salary management
pub struct IncomeService<'a> {
    storage: &'a Storage,
}

impl<'a> IncomeService<'a> {
    /// Create a new income service
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Add a salary from its gross annual amount and tax rate
    pub fn add(&self, gross_annual: Money, tax_rate: TaxRate) -> PlannerResult<IncomeRecord> {
        add_record(
            self.storage,
            &self.storage.incomes,
            IncomeRecord::new(gross_annual, tax_rate),
        )
    }

    /// Add a salary from raw user input
    pub fn add_from_input(&self, gross: &str, tax: &str) -> PlannerResult<IncomeRecord> {
        let gross_annual =
            Money::parse(gross).map_err(|e| PlannerError::Validation(e.to_string()))?;
        let tax_rate = TaxRate::parse(tax).map_err(|e| PlannerError::Validation(e.to_string()))?;
        self.add(gross_annual, tax_rate)
    }

    /// Remove a salary; returns false if the ID is unknown
    pub fn remove(&self, id: IncomeId) -> PlannerResult<bool> {
        Ok(remove_record(self.storage, &self.storage.incomes, id)?.is_some())
    }

    /// All salaries in the order they were added
    pub fn list(&self) -> PlannerResult<Vec<IncomeRecord>> {
        self.storage.incomes.get_all()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_income() {
        let storage = Storage::new();
        let service = IncomeService::new(&storage);

        let income = service.add_from_input("120000", "20").unwrap();
        assert_eq!(income.monthly_net(), Money::from_dollars(8000));
        assert_eq!(service.list().unwrap().len(), 1);
    }

    #[test]
    fn test_rejects_bad_input() {
        let storage = Storage::new();
        let service = IncomeService::new(&storage);

        assert!(service.add_from_input("abc", "20").unwrap_err().is_validation());
        assert!(service.add_from_input("1000", "120").unwrap_err().is_validation());
        assert!(service.add_from_input("1000", "").unwrap_err().is_validation());
        assert!(service
            .add(Money::from_dollars(-5), TaxRate::zero())
            .unwrap_err()
            .is_validation());
        assert!(service.list().unwrap().is_empty());
    }

    #[test]
    fn test_remove() {
        let storage = Storage::new();
        let service = IncomeService::new(&storage);
        let first = service.add(Money::from_dollars(50_000), TaxRate::zero()).unwrap();
        let second = service.add(Money::from_dollars(60_000), TaxRate::zero()).unwrap();

        assert!(service.remove(first.id).unwrap());
        assert!(!service.remove(first.id).unwrap());
        assert_eq!(service.list().unwrap(), vec![second]);
    }
}
