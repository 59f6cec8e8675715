// Identifier value objects

use serde_json::{Map, Value};

/// Primary key type shared by every admin-managed model.
pub type PrimaryKey = i64;

/// A serialized row keyed by column name.
pub type Record = Map<String, Value>;
