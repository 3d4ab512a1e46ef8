//! Monthly and annual budget totals

use serde::{Deserialize, Serialize};

use crate::models::{IncomeRecord, Money, OneTimeExpense, RecurringExpense, SavingsAllocation};

/// Every headline figure shown on the dashboard
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct BudgetTotals {
    pub total_monthly_income: Money,
    pub total_annual_income: Money,
    pub total_monthly_expenses: Money,
    pub total_monthly_savings: Money,
    pub remaining_monthly_budget: Money,
    pub total_annual_expenses: Money,
    pub total_annual_savings: Money,
    pub remaining_annual_budget: Money,
}

/// Sum of net monthly income over all salaries
pub fn total_monthly_income(incomes: &[IncomeRecord]) -> Money {
    incomes.iter().map(IncomeRecord::monthly_net).sum()
}

/// Compute all totals from the current record sets
///
/// One-time expenses count once toward the annual expense total and never
/// toward the monthly figures. Remaining budgets are not clamped at zero.
pub fn compute_totals(
    incomes: &[IncomeRecord],
    recurring_expenses: &[RecurringExpense],
    one_time_expenses: &[OneTimeExpense],
    savings: &[SavingsAllocation],
) -> BudgetTotals {
    let total_monthly_income = total_monthly_income(incomes);
    let total_annual_income = total_monthly_income * 12;

    let total_monthly_expenses: Money = recurring_expenses.iter().map(|e| e.monthly_amount).sum();
    let total_monthly_savings: Money = savings.iter().map(|s| s.monthly_amount).sum();
    let remaining_monthly_budget =
        total_monthly_income - total_monthly_expenses - total_monthly_savings;

    let one_time_total: Money = one_time_expenses.iter().map(|e| e.amount).sum();
    let total_annual_expenses = total_monthly_expenses * 12 + one_time_total;
    let total_annual_savings = total_monthly_savings * 12;
    let remaining_annual_budget =
        total_annual_income - total_annual_expenses - total_annual_savings;

    BudgetTotals {
        total_monthly_income,
        total_annual_income,
        total_monthly_expenses,
        total_monthly_savings,
        remaining_monthly_budget,
        total_annual_expenses,
        total_annual_savings,
        remaining_annual_budget,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Month, TaxRate};

    fn salary(gross: i64, tax: u32) -> IncomeRecord {
        IncomeRecord::new(Money::from_dollars(gross), TaxRate::from_percent(tax).unwrap())
    }

    #[test]
    fn test_empty_collections_yield_zero() {
        let totals = compute_totals(&[], &[], &[], &[]);
        assert_eq!(totals, BudgetTotals::default());
    }

    #[test]
    fn test_reference_scenario() {
        let incomes = vec![salary(120_000, 20)];
        let recurring = vec![
            RecurringExpense::new("Housing", Money::from_dollars(2000)),
            RecurringExpense::new("Car", Money::from_dollars(500)),
        ];
        let one_time = vec![OneTimeExpense::new(
            "Gifts",
            Money::from_dollars(300),
            Month::Dec,
        )];

        let totals = compute_totals(&incomes, &recurring, &one_time, &[]);

        assert_eq!(totals.total_monthly_income, Money::from_dollars(8000));
        assert_eq!(totals.total_annual_income, Money::from_dollars(96_000));
        assert_eq!(totals.total_monthly_expenses, Money::from_dollars(2500));
        assert_eq!(totals.remaining_monthly_budget, Money::from_dollars(5500));
        assert_eq!(totals.total_annual_expenses, Money::from_dollars(30_300));
        assert_eq!(totals.remaining_annual_budget, Money::from_dollars(65_700));
    }

    #[test]
    fn test_savings_reduce_remaining_but_are_not_expenses() {
        let incomes = vec![salary(60_000, 0)];
        let savings = vec![
            SavingsAllocation::new("Cash Saving", Money::from_dollars(300)),
            SavingsAllocation::new("Investment", Money::from_dollars(200)),
        ];

        let totals = compute_totals(&incomes, &[], &[], &savings);

        assert_eq!(totals.total_monthly_expenses, Money::zero());
        assert_eq!(totals.total_monthly_savings, Money::from_dollars(500));
        assert_eq!(totals.total_annual_savings, Money::from_dollars(6000));
        assert_eq!(totals.remaining_monthly_budget, Money::from_dollars(4500));
        assert_eq!(totals.remaining_annual_budget, Money::from_dollars(54_000));
    }

    #[test]
    fn test_identities_hold_with_negative_remaining() {
        let incomes = vec![
            IncomeRecord::new(Money::from_cents(3_333_333), TaxRate::parse("17.5").unwrap()),
            salary(1_000, 33),
        ];
        let recurring = vec![RecurringExpense::new("Housing", Money::from_cents(987_654))];
        let one_time = vec![
            OneTimeExpense::new("Travel", Money::from_cents(123_456), Month::Aug),
            OneTimeExpense::new("Travel", Money::from_cents(1), Month::Feb),
        ];
        let savings = vec![SavingsAllocation::new("Crypto", Money::from_cents(1_000_001))];

        let t = compute_totals(&incomes, &recurring, &one_time, &savings);

        assert!(t.remaining_monthly_budget.is_negative());
        assert_eq!(t.total_annual_income, t.total_monthly_income * 12);
        assert_eq!(
            t.total_annual_expenses,
            t.total_monthly_expenses * 12 + Money::from_cents(123_457)
        );
        assert_eq!(
            t.remaining_monthly_budget + t.total_monthly_expenses + t.total_monthly_savings,
            t.total_monthly_income
        );
        assert_eq!(
            t.remaining_annual_budget + t.total_annual_expenses + t.total_annual_savings,
            t.total_annual_income
        );
    }

    #[test]
    fn test_multiple_incomes_sum_per_record_net() {
        let incomes = vec![salary(120_000, 20), salary(36_000, 0)];
        assert_eq!(
            total_monthly_income(&incomes),
            Money::from_dollars(8000 + 3000)
        );
    }
}
