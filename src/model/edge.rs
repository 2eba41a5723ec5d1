use serde::{Deserialize, Serialize};

/// A reference from one heap object to another
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Edge {
    /// Sequential id, scoped to the decode that produced it
    pub id: String,

    pub from_node_id: String,

    pub to_node_id: String,

    /// Property name, or `[index]` for element edges
    pub name: String,

    /// Engine edge type (e.g. "property", "element", "internal")
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub edge_type: Option<String>,
}
