//! Rolling twelve-month projection
//!
//! Spreads recurring expenses, savings allocations and one-time expenses over
//! the twelve months starting at a given calendar month.

use serde::{Deserialize, Serialize};

use crate::models::{Money, Month, OneTimeExpense, RecurringExpense, SavingsAllocation};

/// Number of months in the projection window
pub const PROJECTION_MONTHS: usize = 12;

/// Amounts keyed by category, in first-appearance order
///
/// Several records may share a category; their amounts are summed under a
/// single key. Looking up an absent category yields zero.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CategoryAmounts(Vec<(String, Money)>);

impl CategoryAmounts {
    /// Create an empty set
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `amount` to `category`, creating the key at zero if absent
    pub fn add(&mut self, category: &str, amount: Money) {
        match self.0.iter_mut().find(|(name, _)| name == category) {
            Some((_, total)) => *total += amount,
            None => self.0.push((category.to_string(), amount)),
        }
    }

    /// Amount for a category (zero when absent)
    pub fn get(&self, category: &str) -> Money {
        self.0
            .iter()
            .find(|(name, _)| name == category)
            .map(|(_, amount)| *amount)
            .unwrap_or_default()
    }

    /// Whether the category has a key (even one holding zero)
    pub fn contains(&self, category: &str) -> bool {
        self.0.iter().any(|(name, _)| name == category)
    }

    /// Sum over all categories
    pub fn total(&self) -> Money {
        self.0.iter().map(|(_, amount)| *amount).sum()
    }

    /// Iterate category/amount pairs in first-appearance order
    pub fn iter(&self) -> impl Iterator<Item = (&str, Money)> {
        self.0.iter().map(|(name, amount)| (name.as_str(), *amount))
    }

    /// Category names in first-appearance order
    pub fn categories(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(|(name, _)| name.as_str())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// One month in the projection window
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthProjection {
    pub month: Month,
    pub income: Money,
    pub expenses_by_category: CategoryAmounts,
    pub savings_by_category: CategoryAmounts,
}

impl MonthProjection {
    /// Sum of all expense categories this month
    pub fn total_expenses(&self) -> Money {
        self.expenses_by_category.total()
    }

    /// Sum of all savings categories this month
    pub fn total_savings(&self) -> Money {
        self.savings_by_category.total()
    }

    /// Income left after expenses and savings (may be negative)
    pub fn net(&self) -> Money {
        self.income - self.total_expenses() - self.total_savings()
    }
}

/// Project twelve months starting at `start`
///
/// Slot `i` covers `start + i` (wrapping past December). Income is the same
/// flat figure in every slot. Each one-time expense lands in exactly one slot,
/// the one whose calendar month matches its tag.
pub fn project_twelve_months(
    start: Month,
    total_monthly_income: Money,
    recurring_expenses: &[RecurringExpense],
    one_time_expenses: &[OneTimeExpense],
    savings: &[SavingsAllocation],
) -> Vec<MonthProjection> {
    let mut base_expenses = CategoryAmounts::new();
    for expense in recurring_expenses {
        base_expenses.add(&expense.category, expense.monthly_amount);
    }

    let mut base_savings = CategoryAmounts::new();
    for saving in savings {
        base_savings.add(&saving.category, saving.monthly_amount);
    }

    let mut months: Vec<MonthProjection> = (0..PROJECTION_MONTHS)
        .map(|offset| MonthProjection {
            month: start.plus(offset),
            income: total_monthly_income,
            expenses_by_category: base_expenses.clone(),
            savings_by_category: base_savings.clone(),
        })
        .collect();

    for expense in one_time_expenses {
        let slot = slot_for(start, expense.month);
        months[slot]
            .expenses_by_category
            .add(&expense.category, expense.amount);
    }

    months
}

/// Index of `month` within a window starting at `start`
pub fn slot_for(start: Month, month: Month) -> usize {
    (month.index() + PROJECTION_MONTHS - start.index()) % PROJECTION_MONTHS
}
