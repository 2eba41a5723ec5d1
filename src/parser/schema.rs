//! Input schema of a V8 heap snapshot (`.heapsnapshot`).
//!
//! The snapshot is self-describing: `snapshot.meta` lists the field names
//! of every flat array, and records are laid out with that stride.
//! Extra top-level keys (samples, locations, ...) are ignored.

use serde::Deserialize;

/// Top-level heap snapshot document
#[derive(Debug, Clone, Deserialize)]
pub struct V8RuntimeSchema {
    /// Layout metadata and record counts
    pub snapshot: V8SnapshotMeta,

    /// Flat node records, `node_fields.len()` values each
    #[serde(default)]
    pub nodes: Vec<i64>,

    /// Flat edge records, grouped by owning node
    #[serde(default)]
    pub edges: Vec<i64>,

    /// Flat trace function records
    #[serde(default)]
    pub trace_function_infos: Vec<i64>,

    /// Nested allocation trace tree (absent when allocation tracking was off)
    #[serde(default)]
    pub trace_tree: Option<Vec<TraceValue>>,

    /// Shared string pool
    #[serde(default)]
    pub strings: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct V8SnapshotMeta {
    pub meta: V8Meta,

    #[serde(default)]
    pub node_count: Option<usize>,

    #[serde(default)]
    pub edge_count: Option<usize>,
}

/// Field names and type catalogs for each flat array
#[derive(Debug, Clone, Deserialize)]
pub struct V8Meta {
    pub node_fields: Vec<String>,

    /// First entry is the node type catalog, the rest describe other fields
    #[serde(default)]
    pub node_types: Vec<serde_json::Value>,

    pub edge_fields: Vec<String>,

    /// First entry is the edge type catalog
    #[serde(default)]
    pub edge_types: Vec<serde_json::Value>,

    #[serde(default)]
    pub trace_function_info_fields: Vec<String>,

    #[serde(default)]
    pub trace_node_fields: Vec<String>,
}

impl V8Meta {
    /// Node type names, indexed by the `type` field of a node record
    pub fn node_type_names(&self) -> Vec<&str> {
        type_catalog(&self.node_types)
    }

    /// Edge type names, indexed by the `type` field of an edge record
    pub fn edge_type_names(&self) -> Vec<&str> {
        type_catalog(&self.edge_types)
    }
}

/// Extract the enum catalog (first entry) of a `*_types` descriptor
fn type_catalog(types: &[serde_json::Value]) -> Vec<&str> {
    types
        .first()
        .and_then(|catalog| catalog.as_array())
        .map(|names| names.iter().map(|name| name.as_str().unwrap_or_default()).collect())
        .unwrap_or_default()
}

/// One value of the nested trace tree: either a scalar field or the
/// flat array of child records
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum TraceValue {
    Number(i64),
    Nested(Vec<TraceValue>),
}

impl TraceValue {
    pub fn as_number(&self) -> Option<i64> {
        match self {
            Self::Number(n) => Some(*n),
            Self::Nested(_) => None,
        }
    }

    pub fn as_nested(&self) -> Option<&[TraceValue]> {
        match self {
            Self::Number(_) => None,
            Self::Nested(children) => Some(children),
        }
    }
}

/// Function metadata referenced by trace tree nodes
#[derive(Debug, Clone, PartialEq)]
pub struct TraceFunctionInfo {
    pub function_id: String,
    pub name: String,
    pub script_name: String,
    pub script_id: String,
    pub line: i64,
    pub column: i64,
}
