//! Record list formatting
//!
//! Tables of the records entered in a session, used by the one-shot CLI
//! commands.

use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::models::{IncomeRecord, OneTimeExpense, RecurringExpense, SavingsAllocation};

#[derive(Tabled)]
struct IncomeRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Gross Annual")]
    gross: String,
    #[tabled(rename = "Tax")]
    tax: String,
    #[tabled(rename = "Monthly Net")]
    monthly_net: String,
}

#[derive(Tabled)]
struct MonthlyRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Monthly")]
    monthly: String,
    #[tabled(rename = "Annual")]
    annual: String,
}

#[derive(Tabled)]
struct OneTimeRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Amount")]
    amount: String,
    #[tabled(rename = "Month")]
    month: String,
}

/// Format salaries as a table
pub fn format_income_list(incomes: &[IncomeRecord], symbol: &str) -> String {
    if incomes.is_empty() {
        return "No income added.".to_string();
    }

    let rows = incomes.iter().map(|i| IncomeRow {
        id: i.id.to_string(),
        gross: i.gross_annual.format_with_symbol(symbol),
        tax: i.tax_rate.to_string(),
        monthly_net: i.monthly_net().format_with_symbol(symbol),
    });
    Table::new(rows).with(Style::rounded()).to_string()
}

/// Format recurring expenses as a table
pub fn format_expense_list(expenses: &[RecurringExpense], symbol: &str) -> String {
    if expenses.is_empty() {
        return "No monthly expenses added.".to_string();
    }

    let rows = expenses.iter().map(|e| MonthlyRow {
        id: e.id.to_string(),
        category: e.category.clone(),
        monthly: e.monthly_amount.format_with_symbol(symbol),
        annual: e.annual_amount().format_with_symbol(symbol),
    });
    Table::new(rows).with(Style::rounded()).to_string()
}

/// Format one-time expenses as a table
pub fn format_one_time_list(expenses: &[OneTimeExpense], symbol: &str) -> String {
    if expenses.is_empty() {
        return "No one-time expenses added.".to_string();
    }

    let rows = expenses.iter().map(|e| OneTimeRow {
        id: e.id.to_string(),
        category: e.category.clone(),
        amount: e.amount.format_with_symbol(symbol),
        month: e.month.full_name().to_string(),
    });
    Table::new(rows).with(Style::rounded()).to_string()
}

/// Format savings allocations as a table
pub fn format_savings_list(savings: &[SavingsAllocation], symbol: &str) -> String {
    if savings.is_empty() {
        return "No savings added.".to_string();
    }

    let rows = savings.iter().map(|s| MonthlyRow {
        id: s.id.to_string(),
        category: s.category.clone(),
        monthly: s.monthly_amount.format_with_symbol(symbol),
        annual: s.annual_amount().format_with_symbol(symbol),
    });
    Table::new(rows).with(Style::rounded()).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Money, Month, TaxRate};

    #[test]
    fn test_empty_lists() {
        assert_eq!(format_income_list(&[], "$"), "No income added.");
        assert_eq!(format_savings_list(&[], "$"), "No savings added.");
    }

    #[test]
    fn test_income_table() {
        let incomes = vec![IncomeRecord::new(
            Money::from_dollars(120_000),
            TaxRate::from_percent(20).unwrap(),
        )];
        let output = format_income_list(&incomes, "$");

        assert!(output.contains("Monthly Net"));
        assert!(output.contains("$8000.00"));
        assert!(output.contains("20%"));
        assert!(output.contains(&incomes[0].id.to_string()));
    }

    #[test]
    fn test_expense_tables() {
        let expenses = vec![RecurringExpense::new("Housing", Money::from_dollars(2000))];
        let output = format_expense_list(&expenses, "€");
        assert!(output.contains("Housing"));
        assert!(output.contains("€24000.00"));

        let one_time = vec![OneTimeExpense::new("Gifts", Money::from_dollars(300), Month::Dec)];
        assert!(format_one_time_list(&one_time, "$").contains("December"));
    }
}
