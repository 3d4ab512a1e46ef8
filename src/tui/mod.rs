//! Terminal User Interface module
//!
//! Interactive planner built on ratatui: a dashboard with the summaries and
//! expense chart, income and expense lists with add/remove dialogs, and the
//! twelve-month breakdown table.

pub mod app;
pub mod event;
pub mod handler;
pub mod terminal;

// Views
pub mod views;

// Widgets
pub mod widgets;

// Dialogs
pub mod dialogs;

// Layout
pub mod layout;

// Keybindings
pub mod keybindings;

pub use app::App;
pub use terminal::run_tui;
