//! CLI command for data export

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::PathBuf;

use clap::ValueEnum;

use crate::error::{PlannerError, PlannerResult};
use crate::export::{export_breakdown_csv, export_snapshot_json, export_snapshot_yaml};
use crate::reports::MonthlyBreakdown;
use crate::session::BudgetSession;

/// Export format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    /// CSV format (twelve-month breakdown)
    Csv,
    /// JSON format (records, totals and projection)
    Json,
    /// YAML format (records, totals and projection, human-readable)
    Yaml,
}

/// Write an export to `output`, or stdout when no path is given
pub fn handle_export(
    session: &BudgetSession,
    format: ExportFormat,
    output: Option<PathBuf>,
    pretty: bool,
) -> PlannerResult<()> {
    match &output {
        Some(path) => {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                std::fs::create_dir_all(parent).map_err(|e| {
                    PlannerError::Export(format!(
                        "Failed to create directory {}: {}",
                        parent.display(),
                        e
                    ))
                })?;
            }
            let file = File::create(path).map_err(|e| {
                PlannerError::Export(format!("Failed to create file {}: {}", path.display(), e))
            })?;
            let mut writer = BufWriter::new(file);
            write_export(session, format, &mut writer, pretty)?;
            writer
                .flush()
                .map_err(|e| PlannerError::Export(e.to_string()))?;
            eprintln!("Exported {:?} to: {}", format, path.display());
        }
        None => {
            let stdout = std::io::stdout();
            let mut writer = stdout.lock();
            write_export(session, format, &mut writer, pretty)?;
        }
    }

    Ok(())
}

fn write_export<W: Write>(
    session: &BudgetSession,
    format: ExportFormat,
    writer: &mut W,
    pretty: bool,
) -> PlannerResult<()> {
    match format {
        ExportFormat::Csv => {
            let breakdown = MonthlyBreakdown::from_session(session)?;
            export_breakdown_csv(&breakdown, writer)
        }
        ExportFormat::Json => export_snapshot_json(session, writer, pretty),
        ExportFormat::Yaml => export_snapshot_yaml(session, writer),
    }
}
