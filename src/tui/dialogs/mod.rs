//! Dialog modules for the TUI
//!
//! Contains modal dialogs for adding and removing records

pub mod category;
pub mod confirm;
pub mod help;
pub mod income;
pub mod one_time;
