use super::energy::AccessMetric;
use serde::{Deserialize, Serialize};

/// One heap object
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Node {
    /// Snapshot object id, unique within a runtime
    pub id: String,

    /// Ids of the edges owned by this node, in discovery order
    pub edge_ids: Vec<String>,

    /// Engine type name (e.g. "object", "closure", "synthetic")
    #[serde(rename = "type")]
    pub node_type: String,

    /// Whether this is a synthetic GC root
    #[serde(default)]
    pub root: bool,

    /// Resolved name of the object
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,

    /// Allocation trace node that created this object
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trace_id: Option<String>,

    /// Access metrics merged from an energy overlay
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub energy: Option<AccessMetric>,
}

impl Node {
    /// Create a node without edges or energy
    pub fn new(id: impl Into<String>, node_type: impl Into<String>, root: bool) -> Self {
        Self {
            id: id.into(),
            edge_ids: Vec::new(),
            node_type: node_type.into(),
            root,
            value: None,
            trace_id: None,
            energy: None,
        }
    }

    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.value = Some(value.into());
        self
    }

    pub fn with_trace_id(mut self, trace_id: Option<String>) -> Self {
        self.trace_id = trace_id;
        self
    }
}
