//! Budget Planner - terminal budget planner with a rolling 12-month projection
//!
//! Salaries, monthly expenses, one-time annual expenses and savings
//! allocations are entered for a session. From them the planner derives
//! monthly and annual totals and a twelve-month projection that starts at a
//! chosen month and wraps around the calendar year.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `models`: Money, months, tax rates and the four record types
//! - `engine`: Pure totals and projection calculations
//! - `storage`: In-memory record sets
//! - `services`: Validation and add/remove per record type
//! - `session`: Records plus an always-current derived snapshot
//! - `audit`: Mutation journal
//! - `reports`: Dashboard, expense chart and monthly breakdown
//! - `export`: CSV, JSON and YAML export
//! - `config`: Configuration and path management
//! - `cli`, `display`, `tui`: Command-line and terminal interfaces
//!
//! # Example
//!
//! ```rust
//! use budget_planner::models::{Money, Month, TaxRate};
//! use budget_planner::session::BudgetSession;
//!
//! let mut session = BudgetSession::new(Month::Jan);
//! session
//!     .add_income(Money::from_dollars(120_000), TaxRate::from_percent(20).unwrap())
//!     .unwrap();
//! session.add_expense("Housing", Money::from_dollars(2000)).unwrap();
//!
//! assert_eq!(
//!     session.totals().remaining_monthly_budget,
//!     Money::from_dollars(6000)
//! );
//! ```

pub mod audit;
pub mod cli;
pub mod config;
pub mod display;
pub mod engine;
pub mod error;
pub mod export;
pub mod models;
pub mod reports;
pub mod services;
pub mod session;
pub mod storage;
pub mod tui;

pub use error::{PlannerError, PlannerResult};
