//! Recurring expense service

use crate::error::{PlannerError, PlannerResult};
use crate::models::{ExpenseId, Money, RecurringExpense};
use crate::storage::Storage;

use super::records::{add_record, remove_record};

/// Service for monthly recurring expenses
pub struct ExpenseService<'a> {
    storage: &'a Storage,
}

impl<'a> ExpenseService<'a> {
    /// Create a new expense service
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Add a recurring expense
    pub fn add(&self, category: &str, monthly_amount: Money) -> PlannerResult<RecurringExpense> {
        add_record(
            self.storage,
            &self.storage.expenses,
            RecurringExpense::new(category, monthly_amount),
        )
    }

    /// Add a recurring expense from raw user input
    pub fn add_from_input(&self, category: &str, amount: &str) -> PlannerResult<RecurringExpense> {
        let amount = Money::parse(amount).map_err(|e| PlannerError::Validation(e.to_string()))?;
        self.add(category, amount)
    }

    /// Remove an expense; returns false if the ID is unknown
    pub fn remove(&self, id: ExpenseId) -> PlannerResult<bool> {
        Ok(remove_record(self.storage, &self.storage.expenses, id)?.is_some())
    }

    /// All recurring expenses in the order they were added
    pub fn list(&self) -> PlannerResult<Vec<RecurringExpense>> {
        self.storage.expenses.get_all()
    }
}
