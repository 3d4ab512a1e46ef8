//! Monthly breakdown table
//!
//! One column per projected month. Rows: income, every expense category,
//! every savings category, then the expense, savings and net totals.

use serde::Serialize;
use tabled::builder::Builder;
use tabled::settings::object::Columns;
use tabled::settings::{Alignment, Modify, Style};

use crate::engine::BudgetSnapshot;
use crate::error::PlannerResult;
use crate::models::{Money, Month};
use crate::session::BudgetSession;

use super::expense_category_order;

/// What a breakdown row represents
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RowKind {
    Income,
    Expense,
    Savings,
    TotalExpenses,
    TotalSavings,
    Net,
}

/// A single row of the breakdown table
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BreakdownRow {
    pub label: String,
    pub kind: RowKind,
    /// One value per projected month
    pub values: Vec<Money>,
}

impl BreakdownRow {
    /// Sum across the window
    pub fn total(&self) -> Money {
        self.values.iter().sum()
    }
}

/// Twelve-month breakdown
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MonthlyBreakdown {
    pub months: Vec<Month>,
    pub rows: Vec<BreakdownRow>,
}

impl MonthlyBreakdown {
    /// Build the table from a snapshot and the expense category order
    pub fn generate(snapshot: &BudgetSnapshot, expense_categories: &[String]) -> Self {
        let months: Vec<Month> = snapshot.months.iter().map(|m| m.month).collect();
        let mut rows = Vec::new();

        rows.push(BreakdownRow {
            label: "Income".to_string(),
            kind: RowKind::Income,
            values: snapshot.months.iter().map(|m| m.income).collect(),
        });

        for category in expense_categories {
            rows.push(BreakdownRow {
                label: category.clone(),
                kind: RowKind::Expense,
                values: snapshot
                    .months
                    .iter()
                    .map(|m| m.expenses_by_category.get(category))
                    .collect(),
            });
        }

        // Savings categories are identical in every slot
        if let Some(first) = snapshot.months.first() {
            for category in first.savings_by_category.categories() {
                rows.push(BreakdownRow {
                    label: category.to_string(),
                    kind: RowKind::Savings,
                    values: snapshot
                        .months
                        .iter()
                        .map(|m| m.savings_by_category.get(category))
                        .collect(),
                });
            }
        }

        rows.push(BreakdownRow {
            label: "Total Expenses".to_string(),
            kind: RowKind::TotalExpenses,
            values: snapshot.months.iter().map(|m| m.total_expenses()).collect(),
        });
        rows.push(BreakdownRow {
            label: "Total Savings".to_string(),
            kind: RowKind::TotalSavings,
            values: snapshot.months.iter().map(|m| m.total_savings()).collect(),
        });
        rows.push(BreakdownRow {
            label: "Net".to_string(),
            kind: RowKind::Net,
            values: snapshot.months.iter().map(|m| m.net()).collect(),
        });

        Self { months, rows }
    }

    /// Build the table for the current state of a session
    pub fn from_session(session: &BudgetSession) -> PlannerResult<Self> {
        let categories =
            expense_category_order(&session.expenses()?, &session.one_time_expenses()?);
        Ok(Self::generate(session.snapshot(), &categories))
    }

    /// Find a row by label and kind
    pub fn row(&self, kind: RowKind, label: &str) -> Option<&BreakdownRow> {
        self.rows.iter().find(|r| r.kind == kind && r.label == label)
    }

    /// The net row
    pub fn net(&self) -> Option<&BreakdownRow> {
        self.rows.iter().find(|r| r.kind == RowKind::Net)
    }

    /// Header labels: "Category" followed by the month labels
    pub fn header(&self) -> Vec<String> {
        std::iter::once("Category".to_string())
            .chain(self.months.iter().map(|m| m.label().to_string()))
            .collect()
    }

    /// Format a cell the way the table shows it
    pub fn format_cell(amount: Money, currency_symbol: &str, whole_units: bool) -> String {
        if whole_units {
            amount.format_whole(currency_symbol)
        } else {
            amount.format_with_symbol(currency_symbol)
        }
    }

    /// Format the report for terminal display
    pub fn format_terminal(&self, currency_symbol: &str, whole_units: bool) -> String {
        let mut builder = Builder::default();
        builder.push_record(self.header());

        for row in &self.rows {
            let cells = std::iter::once(row.label.clone()).chain(
                row.values
                    .iter()
                    .map(|v| Self::format_cell(*v, currency_symbol, whole_units)),
            );
            builder.push_record(cells);
        }

        let mut table = builder.build();
        table
            .with(Style::modern())
            .with(Modify::new(Columns::new(1..)).with(Alignment::right()));

        format!("Monthly Breakdown\n{}\n", table)
    }
}
