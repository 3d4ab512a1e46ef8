//! Journal entry data structures
//!
//! Records are never edited in place, so the journal only knows two
//! operations: a record was added or a record was removed.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::RecordKind;

/// Types of operations that can be journaled
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operation {
    /// Record was added
    Create,
    /// Record was removed
    Delete,
}

impl std::fmt::Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Operation::Create => write!(f, "ADD"),
            Operation::Delete => write!(f, "REMOVE"),
        }
    }
}

/// A single journal entry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditEntry {
    /// When the operation occurred (UTC)
    pub timestamp: DateTime<Utc>,

    /// Type of operation performed
    pub operation: Operation,

    /// Kind of record affected
    pub entity_type: RecordKind,

    /// ID of the affected record
    pub entity_id: String,

    /// Human-readable description (category or salary summary)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entity_name: Option<String>,

    /// The record as it was before removal
    #[serde(skip_serializing_if = "Option::is_none")]
    pub before: Option<serde_json::Value>,

    /// The record as it was added
    #[serde(skip_serializing_if = "Option::is_none")]
    pub after: Option<serde_json::Value>,
}

impl AuditEntry {
    /// Create a new entry for an added record
    pub fn create<T: Serialize>(
        entity_type: RecordKind,
        entity_id: impl Into<String>,
        entity_name: Option<String>,
        entity: &T,
    ) -> Self {
        Self {
            timestamp: Utc::now(),
            operation: Operation::Create,
            entity_type,
            entity_id: entity_id.into(),
            entity_name,
            before: None,
            after: serde_json::to_value(entity).ok(),
        }
    }

    /// Create a new entry for a removed record
    pub fn delete<T: Serialize>(
        entity_type: RecordKind,
        entity_id: impl Into<String>,
        entity_name: Option<String>,
        entity: &T,
    ) -> Self {
        Self {
            timestamp: Utc::now(),
            operation: Operation::Delete,
            entity_type,
            entity_id: entity_id.into(),
            entity_name,
            before: serde_json::to_value(entity).ok(),
            after: None,
        }
    }

    /// Format the entry for human-readable output
    pub fn format_human_readable(&self) -> String {
        let mut output = format!(
            "[{}] {} {} {}",
            self.timestamp.format("%Y-%m-%d %H:%M:%S UTC"),
            self.operation,
            self.entity_type,
            self.entity_id
        );

        if let Some(name) = &self.entity_name {
            output.push_str(&format!(" ({})", name));
        }

        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_operation_display() {
        assert_eq!(Operation::Create.to_string(), "ADD");
        assert_eq!(Operation::Delete.to_string(), "REMOVE");
    }

    #[test]
    fn test_create_entry() {
        let data = json!({"category": "Housing", "monthly_amount": 200000});
        let entry = AuditEntry::create(
            RecordKind::RecurringExpense,
            "exp-12345678",
            Some("Housing".to_string()),
            &data,
        );

        assert_eq!(entry.operation, Operation::Create);
        assert_eq!(entry.entity_type, RecordKind::RecurringExpense);
        assert!(entry.before.is_none());
        assert!(entry.after.is_some());
    }

    #[test]
    fn test_delete_entry() {
        let data = json!({"category": "Gifts"});
        let entry = AuditEntry::delete(RecordKind::OneTimeExpense, "one-1", None, &data);

        assert_eq!(entry.operation, Operation::Delete);
        assert!(entry.before.is_some());
        assert!(entry.after.is_none());
    }

    #[test]
    fn test_serialization() {
        let entry = AuditEntry::create(RecordKind::Savings, "sav-1", None, &json!({}));
        let json = serde_json::to_string(&entry).unwrap();
        assert!(json.contains("\"entity_type\":\"savings\""));
        assert!(json.contains("\"operation\":\"create\""));

        let deserialized: AuditEntry = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized.entity_type, RecordKind::Savings);
    }

    #[test]
    fn test_human_readable_format() {
        let entry = AuditEntry::create(
            RecordKind::Income,
            "inc-12345678",
            Some("$120000.00 (tax 20%)".to_string()),
            &json!({}),
        );

        let formatted = entry.format_human_readable();
        assert!(formatted.contains("ADD"));
        assert!(formatted.contains("Income"));
        assert!(formatted.contains("inc-12345678"));
        assert!(formatted.contains("tax 20%"));
    }
}
