//! Configuration CLI commands

use clap::Subcommand;

use crate::config::{PlannerPaths, Settings};
use crate::error::PlannerResult;
use crate::models::Month;

use super::args::parse_month;

/// Config subcommands
#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Show paths and current settings
    Show,

    /// Fix the first month of the projection window
    StartMonth {
        /// Month name, label or number
        #[arg(value_parser = parse_month, conflicts_with = "current")]
        month: Option<Month>,
        /// Follow the current calendar month
        #[arg(long)]
        current: bool,
    },

    /// Set the currency symbol
    Currency {
        symbol: String,
    },

    /// Enable or disable the audit log
    Audit {
        #[arg(action = clap::ArgAction::Set)]
        enabled: bool,
    },

    /// Show breakdown tables in whole currency units or with cents
    WholeUnits {
        #[arg(action = clap::ArgAction::Set)]
        enabled: bool,
    },
}

/// Handle config commands
pub fn handle_config_command(
    paths: &PlannerPaths,
    settings: &mut Settings,
    cmd: ConfigCommands,
) -> PlannerResult<()> {
    match cmd {
        ConfigCommands::Show => {
            print!("{}", format_config(paths, settings));
            return Ok(());
        }
        ConfigCommands::StartMonth { month, current } => {
            settings.start_month = if current { None } else { month };
        }
        ConfigCommands::Currency { symbol } => {
            settings.currency_symbol = symbol;
        }
        ConfigCommands::Audit { enabled } => {
            settings.audit_enabled = enabled;
        }
        ConfigCommands::WholeUnits { enabled } => {
            settings.whole_currency_tables = enabled;
        }
    }

    settings.save(paths)?;
    println!("Settings saved to: {}", paths.settings_file().display());
    Ok(())
}

/// Paths and settings as text
pub fn format_config(paths: &PlannerPaths, settings: &Settings) -> String {
    let start = match settings.start_month {
        Some(month) => month.full_name().to_string(),
        None => format!("current month ({})", Month::current().full_name()),
    };

    let mut output = String::new();
    output.push_str("Budget Planner Configuration\n");
    output.push_str("============================\n");
    output.push_str(&format!("Base directory:   {}\n", paths.base_dir().display()));
    output.push_str(&format!("Settings file:    {}\n", paths.settings_file().display()));
    output.push_str(&format!("Audit log:        {}\n", paths.audit_log().display()));
    output.push_str(&format!("Exports:          {}\n", paths.exports_dir().display()));
    output.push('\n');
    output.push_str("Settings:\n");
    output.push_str(&format!("  Currency symbol:      {}\n", settings.currency_symbol));
    output.push_str(&format!("  Projection start:     {}\n", start));
    output.push_str(&format!("  Audit log enabled:    {}\n", settings.audit_enabled));
    output.push_str(&format!("  Whole-unit tables:    {}\n", settings.whole_currency_tables));
    output
}
