//! Audit log CLI command

use crate::audit::AuditLogger;
use crate::config::PlannerPaths;
use crate::error::PlannerResult;

/// Print the most recent journal entries, oldest first
pub fn handle_audit(paths: &PlannerPaths, limit: usize) -> PlannerResult<()> {
    let logger = AuditLogger::new(paths.audit_log());
    if !logger.exists() {
        println!("No audit log at {}", logger.path().display());
        return Ok(());
    }

    let entries = logger.read_recent(limit)?;
    if entries.is_empty() {
        println!("Audit log is empty.");
        return Ok(());
    }

    for entry in &entries {
        println!("{}", entry.format_human_readable());
    }
    println!();
    println!(
        "Showing {} of {} entries",
        entries.len(),
        logger.entry_count()?
    );

    Ok(())
}
