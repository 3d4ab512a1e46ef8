//! Core data models for the budget planner
//!
//! This module contains the value records the user enters (salaries,
//! recurring and one-time expenses, savings allocations) and the small
//! value types they are built from.

pub mod category;
pub mod expense;
pub mod ids;
pub mod income;
pub mod money;
pub mod month;
pub mod one_time;
pub mod record;
pub mod savings;
pub mod tax_rate;
pub mod validation;

pub use category::RecordKind;
pub use expense::RecurringExpense;
pub use ids::{ExpenseId, IncomeId, OneTimeExpenseId, SavingsId};
pub use income::IncomeRecord;
pub use money::{Money, MoneyParseError};
pub use month::{Month, MonthParseError};
pub use one_time::OneTimeExpense;
pub use record::BudgetRecord;
pub use savings::SavingsAllocation;
pub use tax_rate::{TaxRate, TaxRateError};
pub use validation::RecordValidationError;
