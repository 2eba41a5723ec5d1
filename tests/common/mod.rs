//! Snapshot fixtures shared by the integration tests.

#![allow(dead_code)]

use serde_json::{json, Value};

/// Layout metadata as emitted by V8
pub fn v8_meta() -> Value {
    json!({
        "node_fields": ["type", "name", "id", "self_size", "edge_count", "trace_node_id", "detachedness"],
        "node_types": [
            ["hidden", "array", "string", "object", "code", "closure", "regexp", "number",
             "native", "synthetic", "concatenated string", "sliced string", "symbol", "bigint", "object shape"],
            "string", "number", "number", "number", "number", "number"
        ],
        "edge_fields": ["type", "name_or_index", "to_node"],
        "edge_types": [
            ["context", "element", "property", "internal", "hidden", "shortcut", "weak"],
            "string_or_number", "node"
        ],
        "trace_function_info_fields": ["function_id", "name", "script_name", "script_id", "line", "column"],
        "trace_node_fields": ["id", "function_info_index", "count", "size", "children"]
    })
}

/// Three nodes, five encoded edges (one dangling), a four-node trace tree
///
/// Node offsets: "1" → 0, "3" → 7, "5" → 14.
pub fn sample_snapshot() -> Value {
    json!({
        "snapshot": {
            "meta": v8_meta(),
            "node_count": 3,
            "edge_count": 5
        },
        "nodes": [
            9, 1, 1, 0, 2, 0, 0,
            3, 2, 3, 32, 3, 2, 0,
            2, 3, 5, 16, 0, 0, 0
        ],
        "edges": [
            2, 3, 7,
            1, 0, 14,
            2, 4, 14,
            3, 99, 0,
            2, 3, 21
        ],
        "trace_function_infos": [
            0, 5, 6, 1, 10, 4,
            1, 7, 6, 1, 20, 2
        ],
        "trace_tree": [1, 0, 1, 32, [
            2, 1, 1, 16, [4, 1, 0, 0, []],
            3, 0, 0, 0, []
        ]],
        "samples": [],
        "locations": [],
        "strings": ["", "(GC roots)", "Window", "foo", "bar", "main", "app.js", "helper"]
    })
}

/// A snapshot with no nodes, edges or trace tree
pub fn empty_snapshot() -> Value {
    json!({
        "snapshot": {"meta": v8_meta(), "node_count": 0, "edge_count": 0},
        "nodes": [],
        "edges": [],
        "trace_function_infos": [],
        "trace_tree": [],
        "strings": []
    })
}
