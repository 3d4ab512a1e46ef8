//! Service layer for the budget planner
//!
//! The service layer sits on top of the in-memory storage and handles input
//! parsing, validation and journaling. A rejected add never leaves a partial
//! record behind.

mod records;

pub mod expense;
pub mod income;
pub mod one_time;
pub mod savings;

pub use expense::ExpenseService;
pub use income::IncomeService;
pub use one_time::OneTimeExpenseService;
pub use savings::SavingsService;
