//! Export module for the budget planner
//!
//! - CSV: the twelve-month breakdown (spreadsheet-compatible)
//! - JSON: records, totals and projection (machine-readable)
//! - YAML: the same content as JSON (human-readable)

pub mod csv;
pub mod json;
pub mod yaml;

pub use self::csv::export_breakdown_csv;
pub use json::{export_snapshot_json, SnapshotExport, EXPORT_SCHEMA_VERSION};
pub use yaml::export_snapshot_yaml;
