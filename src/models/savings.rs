//! Savings allocation model
//!
//! Same shape as a recurring expense but kept in its own ledger: it reduces
//! the remaining budget without counting as spending.

use serde::{Deserialize, Serialize};

use super::ids::SavingsId;
use super::money::Money;
use super::validation::{validate_amount, validate_category, RecordValidationError};

/// A monthly amount set aside for savings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavingsAllocation {
    pub id: SavingsId,
    pub category: String,
    pub monthly_amount: Money,
}

impl SavingsAllocation {
    /// Create a new savings allocation with a fresh ID
    pub fn new(category: impl Into<String>, monthly_amount: Money) -> Self {
        Self {
            id: SavingsId::new(),
            category: category.into().trim().to_string(),
            monthly_amount,
        }
    }

    /// Validate the record
    pub fn validate(&self) -> Result<(), RecordValidationError> {
        validate_category(&self.category)?;
        validate_amount(self.monthly_amount)
    }

    /// Amount saved over a full year
    pub fn annual_amount(&self) -> Money {
        self.monthly_amount * 12
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_annual_amount() {
        let saving = SavingsAllocation::new("Investment", Money::from_dollars(750));
        assert_eq!(saving.annual_amount(), Money::from_dollars(9000));
    }

    #[test]
    fn test_validation() {
        assert!(SavingsAllocation::new("Crypto", Money::zero())
            .validate()
            .is_ok());
        assert_eq!(
            SavingsAllocation::new("", Money::from_dollars(10)).validate(),
            Err(RecordValidationError::EmptyCategory)
        );
    }
}
