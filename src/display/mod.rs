//! Display formatting for terminal output
//!
//! Record tables and small text helpers shared by the reports and the CLI.

pub mod records;
pub mod report;

pub use records::{
    format_expense_list, format_income_list, format_one_time_list, format_savings_list,
};
pub use report::{format_bar, format_percentage};
