//! YAML Export functionality
//!
//! Same content as the JSON export, in a human-readable layout.

use std::io::Write;

use crate::error::{PlannerError, PlannerResult};
use crate::export::json::SnapshotExport;
use crate::session::BudgetSession;

/// Export a session snapshot to YAML
pub fn export_snapshot_yaml<W: Write>(session: &BudgetSession, writer: &mut W) -> PlannerResult<()> {
    let export = SnapshotExport::from_session(session)?;
    export.validate().map_err(PlannerError::Export)?;

    writeln!(writer, "# Budget Planner Export")
        .map_err(|e| PlannerError::Export(e.to_string()))?;
    writeln!(writer, "# Generated: {}", export.exported_at)
        .map_err(|e| PlannerError::Export(e.to_string()))?;
    writeln!(writer, "# App Version: {}", export.app_version)
        .map_err(|e| PlannerError::Export(e.to_string()))?;
    writeln!(writer, "# Amounts are in cents.")
        .map_err(|e| PlannerError::Export(e.to_string()))?;
    writeln!(writer).map_err(|e| PlannerError::Export(e.to_string()))?;

    serde_yaml::to_writer(writer, &export).map_err(|e| PlannerError::Export(e.to_string()))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Money, Month};

    #[test]
    fn test_yaml_export() {
        let mut session = BudgetSession::new(Month::Jan);
        session.add_expense("Groceries", Money::from_dollars(600)).unwrap();

        let mut output = Vec::new();
        export_snapshot_yaml(&session, &mut output).unwrap();

        let yaml_str = String::from_utf8(output).unwrap();
        assert!(yaml_str.starts_with("# Budget Planner Export"));
        assert!(yaml_str.contains("schema_version"));
        assert!(yaml_str.contains("Groceries"));
    }

    #[test]
    fn test_yaml_parses_back() {
        let session = BudgetSession::new(Month::Jul);
        let mut output = Vec::new();
        export_snapshot_yaml(&session, &mut output).unwrap();

        let parsed: SnapshotExport = serde_yaml::from_slice(&output).unwrap();
        assert_eq!(parsed.start_month, Month::Jul);
        assert!(parsed.validate().is_ok());
    }
}
