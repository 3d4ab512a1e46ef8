//! Dashboard report
//!
//! Monthly and annual summaries of the budget with each figure's share of
//! income.

use serde::Serialize;

use crate::display::report::{format_bar, format_percentage};
use crate::engine::BudgetTotals;
use crate::models::Money;

/// One summary period on the dashboard
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BudgetSummary {
    /// "Monthly" or "Annual"
    pub label: &'static str,
    /// Net income for the period
    pub budget: Money,
    pub expenses: Money,
    pub savings: Money,
    pub remaining: Money,
    /// Expenses as a share of the budget (0 when the budget is zero)
    pub expense_pct: f64,
    /// Savings as a share of the budget (0 when the budget is zero)
    pub savings_pct: f64,
    /// `100 - expense_pct - savings_pct`, or 0 when the budget is zero
    pub available_pct: f64,
}

impl BudgetSummary {
    /// Summarize a budget/expenses/savings/remaining quadruple
    pub fn new(
        label: &'static str,
        budget: Money,
        expenses: Money,
        savings: Money,
        remaining: Money,
    ) -> Self {
        let expense_pct = expenses.percent_of(budget);
        let savings_pct = savings.percent_of(budget);
        let available_pct = if budget.is_zero() {
            0.0
        } else {
            100.0 - expense_pct - savings_pct
        };

        Self {
            label,
            budget,
            expenses,
            savings,
            remaining,
            expense_pct,
            savings_pct,
            available_pct,
        }
    }

    /// Whether expenses and savings exceed the budget
    pub fn is_over_budget(&self) -> bool {
        self.remaining.is_negative()
    }
}

/// Dashboard Report
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardReport {
    pub monthly: BudgetSummary,
    pub annual: BudgetSummary,
}

impl DashboardReport {
    /// Generate the dashboard from derived totals
    pub fn generate(totals: &BudgetTotals) -> Self {
        Self {
            monthly: BudgetSummary::new(
                "Monthly",
                totals.total_monthly_income,
                totals.total_monthly_expenses,
                totals.total_monthly_savings,
                totals.remaining_monthly_budget,
            ),
            annual: BudgetSummary::new(
                "Annual",
                totals.total_annual_income,
                totals.total_annual_expenses,
                totals.total_annual_savings,
                totals.remaining_annual_budget,
            ),
        }
    }

    /// Format the report for terminal display
    pub fn format_terminal(&self, currency_symbol: &str) -> String {
        let mut output = String::new();
        for summary in [&self.monthly, &self.annual] {
            output.push_str(&format_summary(summary, currency_symbol));
            output.push('\n');
        }
        output
    }
}

fn format_summary(summary: &BudgetSummary, symbol: &str) -> String {
    let mut output = String::new();

    output.push_str(&format!("{} Budget Summary\n", summary.label));
    output.push_str(&"=".repeat(50));
    output.push('\n');

    let rows = [
        (format!("{} Budget:", summary.label), summary.budget),
        ("Total Expenses:".to_string(), summary.expenses),
        ("Total Savings:".to_string(), summary.savings),
        ("Remaining Budget:".to_string(), summary.remaining),
    ];
    for (label, amount) in rows {
        output.push_str(&format!(
            "{:<24} {:>18}\n",
            label,
            amount.format_with_symbol(symbol)
        ));
    }

    output.push('\n');
    let shares = [
        ("Available", summary.available_pct),
        ("Spent", summary.expense_pct),
        ("Saved", summary.savings_pct),
    ];
    for (label, pct) in shares {
        output.push_str(&format!(
            "  {:<10} {} {:>6}\n",
            label,
            format_bar(pct, 100.0, 30),
            format_percentage(pct)
        ));
    }

    if summary.is_over_budget() {
        output.push_str("\n  Over budget!\n");
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::compute_totals;
    use crate::models::{IncomeRecord, Month, OneTimeExpense, RecurringExpense, SavingsAllocation, TaxRate};

    fn sample_totals() -> BudgetTotals {
        let incomes = vec![IncomeRecord::new(
            Money::from_dollars(120_000),
            TaxRate::from_percent(20).unwrap(),
        )];
        let recurring = vec![
            RecurringExpense::new("Housing", Money::from_dollars(2000)),
            RecurringExpense::new("Car", Money::from_dollars(400)),
        ];
        let one_time = vec![OneTimeExpense::new("Gifts", Money::from_dollars(1200), Month::Dec)];
        let savings = vec![SavingsAllocation::new("Investment", Money::from_dollars(800))];
        compute_totals(&incomes, &recurring, &one_time, &savings)
    }

    #[test]
    fn test_monthly_percentages() {
        let report = DashboardReport::generate(&sample_totals());

        assert_eq!(report.monthly.budget, Money::from_dollars(8000));
        assert!((report.monthly.expense_pct - 30.0).abs() < 1e-9);
        assert!((report.monthly.savings_pct - 10.0).abs() < 1e-9);
        assert!((report.monthly.available_pct - 60.0).abs() < 1e-9);
    }

    #[test]
    fn test_annual_percentages() {
        let report = DashboardReport::generate(&sample_totals());

        // 2400 * 12 + 1200 = 30000 of 96000
        assert_eq!(report.annual.expenses, Money::from_dollars(30_000));
        assert!((report.annual.expense_pct - 31.25).abs() < 1e-9);
        assert!((report.annual.savings_pct - 10.0).abs() < 1e-9);
        assert!((report.annual.available_pct - 58.75).abs() < 1e-9);
    }

    #[test]
    fn test_zero_budget_has_zero_shares() {
        let totals = compute_totals(
            &[],
            &[RecurringExpense::new("Housing", Money::from_dollars(2000))],
            &[],
            &[],
        );
        let report = DashboardReport::generate(&totals);

        assert_eq!(report.monthly.expense_pct, 0.0);
        assert_eq!(report.monthly.available_pct, 0.0);
        assert!(report.monthly.expense_pct.is_finite());
        assert!(report.monthly.is_over_budget());
    }

    #[test]
    fn test_terminal_format() {
        let report = DashboardReport::generate(&sample_totals());
        let output = report.format_terminal("$");

        assert!(output.contains("Monthly Budget Summary"));
        assert!(output.contains("Annual Budget Summary"));
        assert!(output.contains("$8000.00"));
        assert!(output.contains("Available"));
        assert!(!output.contains("Over budget"));
    }
}
