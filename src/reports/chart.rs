//! Expense chart
//!
//! Stacked expenses per projected month against the monthly budget. Savings
//! are not plotted.

use serde::Serialize;

use crate::engine::BudgetSnapshot;
use crate::error::PlannerResult;
use crate::models::{Money, Month};
use crate::session::BudgetSession;

use super::expense_category_order;

/// Glyphs cycled through for successive categories in text output
const SEGMENT_GLYPHS: [char; 8] = ['█', '▓', '▒', '░', '#', '=', '+', '*'];

/// Marker for the monthly budget reference line
const BUDGET_MARKER: char = '│';

/// One stacked bar
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChartBar {
    pub month: Month,
    /// Amount per category in legend order (zero when absent this month)
    pub segments: Vec<Money>,
    pub total: Money,
}

impl ChartBar {
    /// Whether this month's expenses exceed the budget line
    pub fn exceeds(&self, budget: Money) -> bool {
        self.total > budget
    }
}

/// Expenses vs. budget chart data
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExpenseChart {
    /// Reference line: total monthly income
    pub monthly_budget: Money,
    /// Legend: recurring categories first, then one-time categories
    pub categories: Vec<String>,
    pub bars: Vec<ChartBar>,
}

impl ExpenseChart {
    /// Build the chart from a snapshot and the legend order
    pub fn generate(snapshot: &BudgetSnapshot, categories: Vec<String>) -> Self {
        let bars = snapshot
            .months
            .iter()
            .map(|month| ChartBar {
                month: month.month,
                segments: categories
                    .iter()
                    .map(|c| month.expenses_by_category.get(c))
                    .collect(),
                total: month.total_expenses(),
            })
            .collect();

        Self {
            monthly_budget: snapshot.totals.total_monthly_income,
            categories,
            bars,
        }
    }

    /// Build the chart for the current state of a session
    pub fn from_session(session: &BudgetSession) -> PlannerResult<Self> {
        let categories =
            expense_category_order(&session.expenses()?, &session.one_time_expenses()?);
        Ok(Self::generate(session.snapshot(), categories))
    }

    /// Largest value on the axis (highest bar or the budget line)
    pub fn axis_max(&self) -> Money {
        self.bars
            .iter()
            .map(|b| b.total)
            .chain(std::iter::once(self.monthly_budget))
            .max()
            .unwrap_or_default()
    }

    /// Cells taken by `amount` when the axis spans `width` cells
    pub fn cell_span(&self, amount: Money, width: usize) -> usize {
        scale(amount, self.axis_max(), width)
    }

    /// Render the chart as text bars of at most `width` cells
    pub fn format_terminal(&self, currency_symbol: &str, width: usize) -> String {
        let mut output = String::new();
        output.push_str("Expenses vs Budget Target\n");
        output.push_str(&"=".repeat(width + 24));
        output.push('\n');

        let max = self.axis_max();
        let marker = scale(self.monthly_budget, max, width).min(width.saturating_sub(1));

        for bar in &self.bars {
            let mut cells: Vec<char> = Vec::with_capacity(width);
            let mut running = Money::zero();
            for (index, amount) in bar.segments.iter().enumerate() {
                let start = scale(running, max, width);
                running += *amount;
                let end = scale(running, max, width);
                let glyph = SEGMENT_GLYPHS[index % SEGMENT_GLYPHS.len()];
                cells.extend(std::iter::repeat(glyph).take(end.saturating_sub(start)));
            }
            cells.resize(width, ' ');
            if width > 0 && self.monthly_budget.is_positive() && cells[marker] == ' ' {
                cells[marker] = BUDGET_MARKER;
            }

            let flag = if bar.exceeds(self.monthly_budget) { " !" } else { "" };
            output.push_str(&format!(
                "{:<4} {} {:>14}{}\n",
                bar.month.label(),
                cells.into_iter().collect::<String>(),
                bar.total.format_whole(currency_symbol),
                flag
            ));
        }

        output.push('\n');
        output.push_str(&format!(
            "{} Monthly Budget: {}\n",
            BUDGET_MARKER,
            self.monthly_budget.format_whole(currency_symbol)
        ));
        for (index, category) in self.categories.iter().enumerate() {
            output.push_str(&format!(
                "{} {}\n",
                SEGMENT_GLYPHS[index % SEGMENT_GLYPHS.len()],
                category
            ));
        }

        output
    }
}

/// Number of cells `amount` occupies on an axis of `max` over `width` cells
fn scale(amount: Money, max: Money, width: usize) -> usize {
    if !max.is_positive() || !amount.is_positive() {
        return 0;
    }
    let cells = (amount.cents() as i128 * width as i128 + max.cents() as i128 / 2)
        / max.cents() as i128;
    (cells as usize).min(width)
}
