//! JSON serialization of block-average tables.

use crate::result::BlockTable;

/// Serialize a table to compact JSON.
///
/// Undefined standard errors serialize as `null`.
pub fn to_json(table: &BlockTable) -> Result<String, serde_json::Error> {
    serde_json::to_string(table)
}

/// Serialize a table to pretty-printed JSON.
pub fn to_json_pretty(table: &BlockTable) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(table)
}
