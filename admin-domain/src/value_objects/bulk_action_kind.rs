// Bulk action value object

use serde::{Deserialize, Serialize};

/// Bulk actions the dispatcher knows how to execute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BulkActionKind {
    /// Removes every matching record.
    Delete,
    /// Read-only: returns the matching records.
    TestBulk,
}

impl BulkActionKind {
    pub const ALL: [BulkActionKind; 2] = [BulkActionKind::Delete, BulkActionKind::TestBulk];

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim() {
            "delete" => Some(BulkActionKind::Delete),
            "test_bulk" => Some(BulkActionKind::TestBulk),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            BulkActionKind::Delete => "delete",
            BulkActionKind::TestBulk => "test_bulk",
        }
    }

    pub fn is_destructive(&self) -> bool {
        matches!(self, BulkActionKind::Delete)
    }

    /// Permission action a non-superuser must hold on the model.
    pub fn required_permission(&self) -> &'static str {
        match self {
            BulkActionKind::Delete => "delete",
            BulkActionKind::TestBulk => "read",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_accepts_known_names_only() {
        assert_eq!(BulkActionKind::parse("delete"), Some(BulkActionKind::Delete));
        assert_eq!(BulkActionKind::parse(" test_bulk "), Some(BulkActionKind::TestBulk));
        assert_eq!(BulkActionKind::parse("archive"), None);
        for kind in BulkActionKind::ALL {
            assert_eq!(BulkActionKind::parse(kind.as_str()), Some(kind));
        }
    }

    #[test]
    fn only_delete_is_destructive() {
        assert!(BulkActionKind::Delete.is_destructive());
        assert!(!BulkActionKind::TestBulk.is_destructive());
        assert_eq!(BulkActionKind::TestBulk.required_permission(), "read");
    }
}
