use serde::{Deserialize, Serialize};

/// One node of the allocation trace tree
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Stack {
    /// Trace node id
    pub id: String,

    /// Ids of the direct children, in encoded order
    pub frame_ids: Vec<String>,

    pub function_name: String,

    pub script_name: String,

    pub line_number: i64,

    pub column_number: i64,
}
