//! Common behaviour shared by the four record kinds
//!
//! Lets the storage layer and services handle every record set with one
//! generic implementation.

use std::fmt;

use serde::Serialize;

use super::category::RecordKind;
use super::expense::RecurringExpense;
use super::ids::{ExpenseId, IncomeId, OneTimeExpenseId, SavingsId};
use super::income::IncomeRecord;
use super::one_time::OneTimeExpense;
use super::savings::SavingsAllocation;
use super::validation::RecordValidationError;

/// A value record living in one of the session's record sets
pub trait BudgetRecord: Clone + Serialize {
    type Id: Copy + Eq + fmt::Display;

    /// Which record set this type belongs to
    const KIND: RecordKind;

    fn id(&self) -> Self::Id;

    /// Short human-readable label for lists, dialogs and the audit log
    fn label(&self) -> String;

    fn validate(&self) -> Result<(), RecordValidationError>;
}

impl BudgetRecord for IncomeRecord {
    type Id = IncomeId;
    const KIND: RecordKind = RecordKind::Income;

    fn id(&self) -> IncomeId {
        self.id
    }

    fn label(&self) -> String {
        self.describe()
    }

    fn validate(&self) -> Result<(), RecordValidationError> {
        IncomeRecord::validate(self)
    }
}

impl BudgetRecord for RecurringExpense {
    type Id = ExpenseId;
    const KIND: RecordKind = RecordKind::RecurringExpense;

    fn id(&self) -> ExpenseId {
        self.id
    }

    fn label(&self) -> String {
        self.category.clone()
    }

    fn validate(&self) -> Result<(), RecordValidationError> {
        RecurringExpense::validate(self)
    }
}

impl BudgetRecord for OneTimeExpense {
    type Id = OneTimeExpenseId;
    const KIND: RecordKind = RecordKind::OneTimeExpense;

    fn id(&self) -> OneTimeExpenseId {
        self.id
    }

    fn label(&self) -> String {
        format!("{} ({})", self.category, self.month)
    }

    fn validate(&self) -> Result<(), RecordValidationError> {
        OneTimeExpense::validate(self)
    }
}

impl BudgetRecord for SavingsAllocation {
    type Id = SavingsId;
    const KIND: RecordKind = RecordKind::Savings;

    fn id(&self) -> SavingsId {
        self.id
    }

    fn label(&self) -> String {
        self.category.clone()
    }

    fn validate(&self) -> Result<(), RecordValidationError> {
        SavingsAllocation::validate(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Money, Month, TaxRate};

    fn kind_of<T: BudgetRecord>(_: &T) -> RecordKind {
        T::KIND
    }

    #[test]
    fn test_kinds() {
        let income = IncomeRecord::new(Money::from_dollars(1000), TaxRate::zero());
        let gifts = OneTimeExpense::new("Gifts", Money::from_dollars(300), Month::Dec);
        assert_eq!(kind_of(&income), RecordKind::Income);
        assert_eq!(kind_of(&gifts), RecordKind::OneTimeExpense);
    }

    #[test]
    fn test_labels() {
        let gifts = OneTimeExpense::new("Gifts", Money::from_dollars(300), Month::Dec);
        assert_eq!(gifts.label(), "Gifts (Dec)");

        let crypto = SavingsAllocation::new("Crypto", Money::from_dollars(50));
        assert_eq!(BudgetRecord::label(&crypto), "Crypto");
    }
}
