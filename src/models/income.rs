//! Income record model
//!
//! A salary entered as a gross annual amount with an effective tax rate.

use serde::{Deserialize, Serialize};

use super::ids::IncomeId;
use super::money::Money;
use super::tax_rate::TaxRate;
use super::validation::{validate_amount, RecordValidationError};

/// A salary contributing net income to the budget
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IncomeRecord {
    pub id: IncomeId,
    pub gross_annual: Money,
    pub tax_rate: TaxRate,
}

impl IncomeRecord {
    /// Create a new income record with a fresh ID
    pub fn new(gross_annual: Money, tax_rate: TaxRate) -> Self {
        Self {
            id: IncomeId::new(),
            gross_annual,
            tax_rate,
        }
    }

    /// Validate the record
    pub fn validate(&self) -> Result<(), RecordValidationError> {
        validate_amount(self.gross_annual)
    }

    /// Net income per year after tax, rounded to the cent
    pub fn annual_net(&self) -> Money {
        Money::from_cents(div_round(
            self.gross_annual.cents() as i128 * self.tax_rate.retained_basis_points() as i128,
            10_000,
        ))
    }

    /// Net income per month: `gross * (1 - rate/100) / 12`, rounded to the cent
    pub fn monthly_net(&self) -> Money {
        Money::from_cents(div_round(
            self.gross_annual.cents() as i128 * self.tax_rate.retained_basis_points() as i128,
            12 * 10_000,
        ))
    }

    /// Short description for lists and logs
    pub fn describe(&self) -> String {
        format!("{} (tax {})", self.gross_annual, self.tax_rate)
    }
}

/// Integer division rounding half away from zero
fn div_round(numerator: i128, denominator: i128) -> i64 {
    let half = denominator / 2;
    let rounded = if numerator >= 0 {
        (numerator + half) / denominator
    } else {
        (numerator - half) / denominator
    };
    rounded as i64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_monthly_net() {
        let income = IncomeRecord::new(
            Money::from_dollars(120_000),
            TaxRate::from_percent(20).unwrap(),
        );
        assert_eq!(income.monthly_net(), Money::from_dollars(8000));
        assert_eq!(income.annual_net(), Money::from_dollars(96_000));
    }

    #[test]
    fn test_monthly_net_rounds_to_cent() {
        // 100000 * 0.775 / 12 = 6458.3333...
        let income = IncomeRecord::new(
            Money::from_dollars(100_000),
            TaxRate::parse("22.5").unwrap(),
        );
        assert_eq!(income.monthly_net().cents(), 645_833);

        // 50 / 12 = 4.1666...
        let small = IncomeRecord::new(Money::from_dollars(50), TaxRate::zero());
        assert_eq!(small.monthly_net().cents(), 417);
    }

    #[test]
    fn test_full_tax_yields_zero() {
        let income = IncomeRecord::new(
            Money::from_dollars(50_000),
            TaxRate::from_percent(100).unwrap(),
        );
        assert!(income.monthly_net().is_zero());
    }

    #[test]
    fn test_validation_negative_amount() {
        let income = IncomeRecord::new(Money::from_cents(-100), TaxRate::zero());
        assert_eq!(
            income.validate(),
            Err(RecordValidationError::NegativeAmount)
        );
    }

    #[test]
    fn test_serialization() {
        let income = IncomeRecord::new(Money::from_dollars(60_000), TaxRate::from_percent(25).unwrap());
        let json = serde_json::to_string(&income).unwrap();
        let deserialized: IncomeRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(income, deserialized);
    }
}
