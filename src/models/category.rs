//! Standard category suggestions
//!
//! Categories are free-form labels; these lists only seed the pickers in the
//! terminal UI and the `categories` command. Savings are tracked exclusively
//! as [`SavingsAllocation`](super::SavingsAllocation) records, so the
//! recurring-expense list deliberately has no "Savings" entry.

use std::fmt;

use serde::{Deserialize, Serialize};

/// The four kinds of budget record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecordKind {
    Income,
    RecurringExpense,
    OneTimeExpense,
    Savings,
}

impl RecordKind {
    /// Get all record kinds in display order
    pub fn all() -> &'static [Self] {
        &[
            Self::Income,
            Self::RecurringExpense,
            Self::OneTimeExpense,
            Self::Savings,
        ]
    }

    /// Standard categories offered for this kind (income has none)
    pub fn standard_categories(&self) -> &'static [&'static str] {
        match self {
            Self::Income => &[],
            Self::RecurringExpense => RECURRING_EXPENSE_CATEGORIES,
            Self::OneTimeExpense => ONE_TIME_EXPENSE_CATEGORIES,
            Self::Savings => SAVINGS_CATEGORIES,
        }
    }

    /// Human-readable name
    pub fn name(&self) -> &'static str {
        match self {
            Self::Income => "Income",
            Self::RecurringExpense => "Monthly Expenses",
            Self::OneTimeExpense => "One-Time Expenses",
            Self::Savings => "Savings",
        }
    }
}

impl fmt::Display for RecordKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

pub const RECURRING_EXPENSE_CATEGORIES: &[&str] = &[
    "Housing",
    "Car",
    "Utilities",
    "Groceries",
    "Healthcare",
    "Insurance",
    "Entertainment",
    "Debt Repayment",
    "Other",
];

pub const ONE_TIME_EXPENSE_CATEGORIES: &[&str] = &[
    "Travel",
    "School",
    "Gifts",
    "Donations",
    "Camp",
    "Insurance",
    "Taxes",
];

pub const SAVINGS_CATEGORIES: &[&str] = &["Cash Saving", "Investment", "Crypto"];
