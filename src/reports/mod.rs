//! Reports for the budget planner
//!
//! Each report is generated from a [`BudgetSnapshot`](crate::engine::BudgetSnapshot)
//! and can be rendered as plain text for the terminal.
//!
//! - `dashboard`: monthly and annual summaries with percentage shares
//! - `chart`: stacked expenses per projected month against the budget
//! - `breakdown`: the twelve-month table

pub mod breakdown;
pub mod chart;
pub mod dashboard;

pub use breakdown::{BreakdownRow, MonthlyBreakdown, RowKind};
pub use chart::{ChartBar, ExpenseChart};
pub use dashboard::{BudgetSummary, DashboardReport};

use crate::models::{OneTimeExpense, RecurringExpense};

/// Expense categories in display order
///
/// Recurring categories by first appearance, then one-time categories not
/// already listed, by first appearance.
pub fn expense_category_order(
    recurring: &[RecurringExpense],
    one_time: &[OneTimeExpense],
) -> Vec<String> {
    let mut categories: Vec<String> = Vec::new();
    let names = recurring
        .iter()
        .map(|e| &e.category)
        .chain(one_time.iter().map(|e| &e.category));
    for name in names {
        if !categories.contains(name) {
            categories.push(name.clone());
        }
    }
    categories
}
