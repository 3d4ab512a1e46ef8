use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use budget_planner::cli::{
    handle_audit, handle_breakdown, handle_categories, handle_chart, handle_config_command,
    handle_export, handle_summary, CategoryKind, ConfigCommands, ExportFormat, RecordArgs,
};
use budget_planner::config::{PlannerPaths, Settings};
use budget_planner::session::BudgetSession;

#[derive(Parser)]
#[command(
    name = "budget",
    author = "Kaylee Beyene",
    version,
    about = "Terminal budget planner with a rolling 12-month projection",
    long_about = "Budget Planner turns salaries, monthly expenses, one-time annual \
                  expenses and savings into monthly and annual totals and a \
                  twelve-month projection. Run without a subcommand to open the \
                  interactive planner."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Launch the interactive TUI
    #[command(alias = "ui")]
    Tui {
        #[command(flatten)]
        records: RecordArgs,
    },

    /// Show monthly and annual totals with percentage shares
    Summary {
        #[command(flatten)]
        records: RecordArgs,
        /// Also list the records
        #[arg(short, long)]
        list: bool,
    },

    /// Show the twelve-month breakdown table
    Breakdown {
        #[command(flatten)]
        records: RecordArgs,
        /// Show cents instead of whole currency units
        #[arg(long)]
        cents: bool,
    },

    /// Chart monthly expenses against the monthly budget
    Chart {
        #[command(flatten)]
        records: RecordArgs,
        /// Width of the bars in characters
        #[arg(short, long, default_value = "40")]
        width: usize,
    },

    /// Export the budget and its projection
    Export {
        #[command(flatten)]
        records: RecordArgs,
        /// Export format
        #[arg(short, long, value_enum, default_value = "json")]
        format: ExportFormat,
        /// Output file (stdout when omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// Pretty-print JSON
        #[arg(long)]
        pretty: bool,
    },

    /// List the standard categories
    Categories {
        /// Only this record kind
        #[arg(short, long, value_enum)]
        kind: Option<CategoryKind>,
    },

    /// Show or change preferences
    #[command(subcommand)]
    Config(ConfigCommands),

    /// Show recent entries of the audit log
    Audit {
        /// Number of entries to show
        #[arg(short = 'n', long, default_value = "20")]
        limit: usize,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let paths = PlannerPaths::new()?;
    let mut settings = Settings::load_or_create(&paths)?;

    match cli.command {
        None => run_interactive(&paths, settings, &RecordArgs::default())?,
        Some(Commands::Tui { records }) => run_interactive(&paths, settings, &records)?,
        Some(Commands::Summary { records, list }) => {
            let session = records.build_session(&settings)?;
            handle_summary(&session, list)?;
        }
        Some(Commands::Breakdown { records, cents }) => {
            let session = records.build_session(&settings)?;
            handle_breakdown(&session, cents)?;
        }
        Some(Commands::Chart { records, width }) => {
            let session = records.build_session(&settings)?;
            handle_chart(&session, width)?;
        }
        Some(Commands::Export {
            records,
            format,
            output,
            pretty,
        }) => {
            let session = records.build_session(&settings)?;
            handle_export(&session, format, output, pretty)?;
        }
        Some(Commands::Categories { kind }) => handle_categories(kind),
        Some(Commands::Config(cmd)) => handle_config_command(&paths, &mut settings, cmd)?,
        Some(Commands::Audit { limit }) => handle_audit(&paths, limit)?,
    }

    Ok(())
}

/// Open the TUI on a journaled session seeded with any records given as flags
fn run_interactive(paths: &PlannerPaths, settings: Settings, records: &RecordArgs) -> Result<()> {
    let mut session = BudgetSession::from_settings(settings, paths);
    records.populate(&mut session)?;
    budget_planner::tui::run_tui(&mut session)
}
