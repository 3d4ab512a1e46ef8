//! Budget projection engine
//!
//! Pure functions over the record collections. Nothing here mutates its
//! inputs or touches I/O; callers recompute from scratch whenever a record
//! set changes.
//!
//! - `totals`: monthly and annual income, expense, savings and remaining figures
//! - `projection`: the rolling twelve-month calendar

pub mod projection;
pub mod totals;

pub use projection::{
    project_twelve_months, slot_for, CategoryAmounts, MonthProjection, PROJECTION_MONTHS,
};
pub use totals::{compute_totals, total_monthly_income, BudgetTotals};

use serde::{Deserialize, Serialize};

use crate::models::{IncomeRecord, Month, OneTimeExpense, RecurringExpense, SavingsAllocation};

/// Totals plus projection derived from one state of the records
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BudgetSnapshot {
    pub start_month: Month,
    pub totals: BudgetTotals,
    pub months: Vec<MonthProjection>,
}

impl BudgetSnapshot {
    /// Derive totals and the projection in one pass
    pub fn derive(
        start_month: Month,
        incomes: &[IncomeRecord],
        recurring_expenses: &[RecurringExpense],
        one_time_expenses: &[OneTimeExpense],
        savings: &[SavingsAllocation],
    ) -> Self {
        let totals = compute_totals(incomes, recurring_expenses, one_time_expenses, savings);
        let months = project_twelve_months(
            start_month,
            totals.total_monthly_income,
            recurring_expenses,
            one_time_expenses,
            savings,
        );
        Self {
            start_month,
            totals,
            months,
        }
    }

    /// An all-zero snapshot for an empty budget
    pub fn empty(start_month: Month) -> Self {
        Self::derive(start_month, &[], &[], &[], &[])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Money, TaxRate};

    #[test]
    fn test_snapshot_projection_uses_total_income() {
        let incomes = vec![IncomeRecord::new(
            Money::from_dollars(120_000),
            TaxRate::from_percent(20).unwrap(),
        )];
        let snapshot = BudgetSnapshot::derive(Month::Apr, &incomes, &[], &[], &[]);

        assert_eq!(snapshot.months.len(), PROJECTION_MONTHS);
        assert!(snapshot
            .months
            .iter()
            .all(|m| m.income == snapshot.totals.total_monthly_income));
        assert_eq!(snapshot.months[0].month, Month::Apr);
    }

    #[test]
    fn test_projection_sums_match_annual_totals() {
        let recurring = vec![RecurringExpense::new("Housing", Money::from_dollars(2000))];
        let one_time = vec![OneTimeExpense::new("Gifts", Money::from_dollars(300), Month::Dec)];
        let savings = vec![SavingsAllocation::new("Crypto", Money::from_dollars(50))];
        let snapshot = BudgetSnapshot::derive(Month::Jul, &[], &recurring, &one_time, &savings);

        let projected_expenses: Money = snapshot.months.iter().map(|m| m.total_expenses()).sum();
        let projected_savings: Money = snapshot.months.iter().map(|m| m.total_savings()).sum();
        assert_eq!(projected_expenses, snapshot.totals.total_annual_expenses);
        assert_eq!(projected_savings, snapshot.totals.total_annual_savings);
    }

    #[test]
    fn test_empty_snapshot() {
        let snapshot = BudgetSnapshot::empty(Month::Jan);
        assert_eq!(snapshot.totals, BudgetTotals::default());
        assert!(snapshot.months.iter().all(|m| m.net().is_zero()));
    }
}
