// Bulk action entities

use serde::{Deserialize, Serialize};

use crate::value_objects::{PrimaryKey, Record};

/// Inbound payload of a bulk action call.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct BulkIn {
    pub pk_list: Vec<PrimaryKey>,
}

#[derive(Debug, Clone)]
pub struct BulkActionRequest {
    pub action_name: String,
    pub pk_list: Vec<PrimaryKey>,
}

impl BulkActionRequest {
    pub fn new(action_name: impl Into<String>, payload: BulkIn) -> Self {
        Self {
            action_name: action_name.into(),
            pk_list: payload.pk_list,
        }
    }

    /// Keys in first-seen order with duplicates removed.
    pub fn unique_keys(&self) -> Vec<PrimaryKey> {
        let mut seen = std::collections::HashSet::new();
        self.pk_list
            .iter()
            .copied()
            .filter(|key| seen.insert(*key))
            .collect()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum BulkOutcome {
    Records { data: Vec<Record> },
    Deleted { deleted: u64 },
}
