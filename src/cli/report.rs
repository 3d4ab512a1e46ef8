//! Report CLI commands
//!
//! Dashboard summary, monthly breakdown and expense chart for the records
//! given on the command line.

use crate::display::{
    format_expense_list, format_income_list, format_one_time_list, format_savings_list,
};
use crate::error::PlannerResult;
use crate::reports::{DashboardReport, ExpenseChart, MonthlyBreakdown};
use crate::session::BudgetSession;

/// Print the dashboard, optionally preceded by the record tables
pub fn handle_summary(session: &BudgetSession, list: bool) -> PlannerResult<()> {
    let symbol = session.settings().currency_symbol.as_str();

    if list {
        println!("Income");
        println!("{}\n", format_income_list(&session.incomes()?, symbol));
        println!("Monthly Expenses");
        println!("{}\n", format_expense_list(&session.expenses()?, symbol));
        println!("One-Time Expenses");
        println!("{}\n", format_one_time_list(&session.one_time_expenses()?, symbol));
        println!("Savings");
        println!("{}\n", format_savings_list(&session.savings()?, symbol));
    }

    let report = DashboardReport::generate(session.totals());
    print!("{}", report.format_terminal(symbol));

    Ok(())
}

/// Print the twelve-month breakdown table
pub fn handle_breakdown(session: &BudgetSession, cents: bool) -> PlannerResult<()> {
    let settings = session.settings();
    let whole_units = settings.whole_currency_tables && !cents;

    let breakdown = MonthlyBreakdown::from_session(session)?;
    print!(
        "{}",
        breakdown.format_terminal(&settings.currency_symbol, whole_units)
    );

    Ok(())
}

/// Print the stacked expense chart
pub fn handle_chart(session: &BudgetSession, width: usize) -> PlannerResult<()> {
    let chart = ExpenseChart::from_session(session)?;
    print!(
        "{}",
        chart.format_terminal(&session.settings().currency_symbol, width)
    );

    Ok(())
}
