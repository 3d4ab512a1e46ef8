//! Recurring expense model
//!
//! A cost incurred identically every month.

use serde::{Deserialize, Serialize};

use super::ids::ExpenseId;
use super::money::Money;
use super::validation::{validate_amount, validate_category, RecordValidationError};

/// A monthly recurring expense
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecurringExpense {
    pub id: ExpenseId,
    pub category: String,
    pub monthly_amount: Money,
}

impl RecurringExpense {
    /// Create a new recurring expense with a fresh ID
    pub fn new(category: impl Into<String>, monthly_amount: Money) -> Self {
        Self {
            id: ExpenseId::new(),
            category: category.into().trim().to_string(),
            monthly_amount,
        }
    }

    /// Validate the record
    pub fn validate(&self) -> Result<(), RecordValidationError> {
        validate_category(&self.category)?;
        validate_amount(self.monthly_amount)
    }

    /// Cost over a full year
    pub fn annual_amount(&self) -> Money {
        self.monthly_amount * 12
    }
}
