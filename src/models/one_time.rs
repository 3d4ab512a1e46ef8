//! One-time expense model
//!
//! A cost incurred once a year in a specific calendar month, recurring in the
//! same month every following year.

use serde::{Deserialize, Serialize};

use super::ids::OneTimeExpenseId;
use super::money::Money;
use super::month::Month;
use super::validation::{validate_amount, validate_category, RecordValidationError};

/// An annual expense tagged to a calendar month
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OneTimeExpense {
    pub id: OneTimeExpenseId,
    pub category: String,
    pub amount: Money,
    pub month: Month,
}

impl OneTimeExpense {
    /// Create a new one-time expense with a fresh ID
    pub fn new(category: impl Into<String>, amount: Money, month: Month) -> Self {
        Self {
            id: OneTimeExpenseId::new(),
            category: category.into().trim().to_string(),
            amount,
            month,
        }
    }

    /// Validate the record
    pub fn validate(&self) -> Result<(), RecordValidationError> {
        validate_category(&self.category)?;
        validate_amount(self.amount)
    }
}
