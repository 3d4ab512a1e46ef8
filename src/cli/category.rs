//! Category CLI command
//!
//! Lists the standard categories offered for each record kind.

use clap::ValueEnum;

use crate::models::RecordKind;

/// Record kinds that carry a category
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum CategoryKind {
    /// Monthly recurring expenses
    Expense,
    /// One-time annual expenses
    OneTime,
    /// Savings allocations
    Savings,
}

impl From<CategoryKind> for RecordKind {
    fn from(kind: CategoryKind) -> Self {
        match kind {
            CategoryKind::Expense => RecordKind::RecurringExpense,
            CategoryKind::OneTime => RecordKind::OneTimeExpense,
            CategoryKind::Savings => RecordKind::Savings,
        }
    }
}

/// Format the standard categories for one kind, or all kinds
pub fn format_categories(kind: Option<CategoryKind>) -> String {
    let kinds: Vec<RecordKind> = match kind {
        Some(kind) => vec![kind.into()],
        None => RecordKind::all()
            .iter()
            .copied()
            .filter(|k| !k.standard_categories().is_empty())
            .collect(),
    };

    let mut output = String::new();
    for kind in kinds {
        output.push_str(&format!("{}\n", kind));
        for category in kind.standard_categories() {
            output.push_str(&format!("  {}\n", category));
        }
        output.push_str("  (or any custom category)\n");
    }
    output
}

/// Print the standard categories
pub fn handle_categories(kind: Option<CategoryKind>) {
    print!("{}", format_categories(kind));
}
