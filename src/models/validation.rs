//! Shared validation rules for budget records

use super::money::Money;

/// Longest category label accepted
pub const MAX_CATEGORY_LEN: usize = 50;

/// Largest amount a single record may carry
///
/// Keeps annual figures and sums over thousands of records inside `i64` cents.
pub const MAX_AMOUNT: Money = Money::from_dollars(1_000_000_000_000);

/// Validation errors for budget records
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordValidationError {
    EmptyCategory,
    CategoryTooLong(usize),
    NegativeAmount,
    AmountTooLarge,
}

impl std::fmt::Display for RecordValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyCategory => write!(f, "Category cannot be empty"),
            Self::CategoryTooLong(len) => write!(
                f,
                "Category too long ({} chars, max {})",
                len, MAX_CATEGORY_LEN
            ),
            Self::NegativeAmount => write!(f, "Amount cannot be negative"),
            Self::AmountTooLarge => write!(f, "Amount cannot exceed {}", MAX_AMOUNT),
        }
    }
}

impl std::error::Error for RecordValidationError {}

/// Check a category label (after trimming)
pub fn validate_category(category: &str) -> Result<(), RecordValidationError> {
    let trimmed = category.trim();
    if trimmed.is_empty() {
        return Err(RecordValidationError::EmptyCategory);
    }
    let len = trimmed.chars().count();
    if len > MAX_CATEGORY_LEN {
        return Err(RecordValidationError::CategoryTooLong(len));
    }
    Ok(())
}

/// Check that an amount is neither negative nor above [`MAX_AMOUNT`]
pub fn validate_amount(amount: Money) -> Result<(), RecordValidationError> {
    if amount.is_negative() {
        return Err(RecordValidationError::NegativeAmount);
    }
    if amount > MAX_AMOUNT {
        return Err(RecordValidationError::AmountTooLarge);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_rules() {
        assert!(validate_category("Housing").is_ok());
        assert_eq!(
            validate_category("   "),
            Err(RecordValidationError::EmptyCategory)
        );
        let long = "x".repeat(MAX_CATEGORY_LEN + 1);
        assert_eq!(
            validate_category(&long),
            Err(RecordValidationError::CategoryTooLong(MAX_CATEGORY_LEN + 1))
        );
    }

    #[test]
    fn test_amount_rules() {
        assert!(validate_amount(Money::zero()).is_ok());
        assert!(validate_amount(Money::from_cents(1)).is_ok());
        assert_eq!(
            validate_amount(Money::from_cents(-1)),
            Err(RecordValidationError::NegativeAmount)
        );
        assert!(validate_amount(MAX_AMOUNT).is_ok());
        assert_eq!(
            validate_amount(MAX_AMOUNT + Money::from_cents(1)),
            Err(RecordValidationError::AmountTooLarge)
        );
    }
}
