//! CSV Export functionality
//!
//! Writes the twelve-month breakdown in a spreadsheet-friendly layout: one
//! row per breakdown line, one column per projected month, plus a total.

use std::io::Write;

use crate::error::{PlannerError, PlannerResult};
use crate::models::Money;
use crate::reports::MonthlyBreakdown;

/// Export the monthly breakdown to CSV
pub fn export_breakdown_csv<W: Write>(
    breakdown: &MonthlyBreakdown,
    writer: W,
) -> PlannerResult<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);

    let mut header = vec!["Category".to_string(), "Kind".to_string()];
    header.extend(breakdown.months.iter().map(|m| m.label().to_string()));
    header.push("Total".to_string());
    csv_writer.write_record(&header)?;

    for row in &breakdown.rows {
        let kind = serde_json::to_value(row.kind)?
            .as_str()
            .unwrap_or_default()
            .to_string();

        let mut record = vec![row.label.clone(), kind];
        record.extend(row.values.iter().map(|v| decimal(*v)));
        record.push(decimal(row.total()));
        csv_writer.write_record(&record)?;
    }

    csv_writer
        .flush()
        .map_err(|e| PlannerError::Export(e.to_string()))?;

    Ok(())
}

/// Plain decimal amount without a currency symbol, e.g. "-1234.50"
fn decimal(amount: Money) -> String {
    amount.format_with_symbol("")
}
