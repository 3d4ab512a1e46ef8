//! One-time expense service

use crate::error::{PlannerError, PlannerResult};
use crate::models::{Money, Month, OneTimeExpense, OneTimeExpenseId};
use crate::storage::Storage;

use super::records::{add_record, remove_record};

/// Service for annual one-time expenses
pub struct OneTimeExpenseService<'a> {
    storage: &'a Storage,
}

impl<'a> OneTimeExpenseService<'a> {
    /// Create a new one-time expense service
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Add a one-time expense tagged to a calendar month
    pub fn add(&self, category: &str, amount: Money, month: Month) -> PlannerResult<OneTimeExpense> {
        add_record(
            self.storage,
            &self.storage.one_time,
            OneTimeExpense::new(category, amount, month),
        )
    }

    /// Add a one-time expense from raw user input
    ///
    /// The month is required; `None` is rejected like any other invalid field.
    pub fn add_from_input(
        &self,
        category: &str,
        amount: &str,
        month: Option<Month>,
    ) -> PlannerResult<OneTimeExpense> {
        let amount = Money::parse(amount).map_err(|e| PlannerError::Validation(e.to_string()))?;
        let month = month.ok_or_else(|| PlannerError::Validation("Month is required".into()))?;
        self.add(category, amount, month)
    }

    /// Remove an expense; returns false if the ID is unknown
    pub fn remove(&self, id: OneTimeExpenseId) -> PlannerResult<bool> {
        Ok(remove_record(self.storage, &self.storage.one_time, id)?.is_some())
    }

    /// All one-time expenses in the order they were added
    pub fn list(&self) -> PlannerResult<Vec<OneTimeExpense>> {
        self.storage.one_time.get_all()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_requires_month() {
        let storage = Storage::new();
        let service = OneTimeExpenseService::new(&storage);

        let err = service.add_from_input("Gifts", "300", None).unwrap_err();
        assert!(err.is_validation());
        assert!(service.list().unwrap().is_empty());

        service
            .add_from_input("Gifts", "300", Some(Month::Dec))
            .unwrap();
        assert_eq!(service.list().unwrap().len(), 1);
    }

    #[test]
    fn test_remove() {
        let storage = Storage::new();
        let service = OneTimeExpenseService::new(&storage);
        let gifts = service.add("Gifts", Money::from_dollars(300), Month::Dec).unwrap();
        let taxes = service.add("Taxes", Money::from_dollars(1200), Month::Apr).unwrap();

        assert!(service.remove(gifts.id).unwrap());
        assert!(!service.remove(gifts.id).unwrap());
        assert_eq!(service.list().unwrap(), vec![taxes]);
    }
}
