//! CLI command handlers
//!
//! This module contains the implementation of CLI commands, bridging the
//! clap argument parsing with the session, reports and exports.

pub mod args;
pub mod audit;
pub mod category;
pub mod config;
pub mod export;
pub mod report;

pub use args::RecordArgs;
pub use audit::handle_audit;
pub use category::{handle_categories, CategoryKind};
pub use config::{handle_config_command, ConfigCommands};
pub use export::{handle_export, ExportFormat};
pub use report::{handle_breakdown, handle_chart, handle_summary};
