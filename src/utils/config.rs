//! Configuration and constants shared by the decoder and the CLI.

/// Extension appended to converted runtime files (`<stem>.runtime.json`)
pub const RUNTIME_FILE_SUFFIX: &str = "runtime.json";

/// Extension used for snapshots extracted from capture reports
pub const SNAPSHOT_FILE_EXTENSION: &str = "heapsnapshot";

/// Type name used when a catalog index is out of range
pub const UNKNOWN_TYPE_NAME: &str = "unknown";

// Node/edge markers of the V8 heap snapshot format
pub const SYNTHETIC_NODE_TYPE: &str = "synthetic";
pub const ROOT_NAME_MARKER: &str = "root";
pub const ELEMENT_EDGE_TYPE: &str = "element";

/// Human readable description of the runtime JSON written by `convert`
pub const RUNTIME_SCHEMA_LINES: &[&str] = &[
    "nodes: array",
    "  id: string              - Heap object id",
    "  edgeIds: string[]       - Outgoing edges, discovery order",
    "  type: string            - V8 node type",
    "  root: bool              - Synthetic root marker",
    "  value: string?          - Resolved node name",
    "  traceId: string?        - Allocation trace node id",
    "  energy: object?         - Access metric (nodeId, readCounter, writeCounter, allocationTime?)",
    "edges: array",
    "  id: string              - Sequential edge id",
    "  fromNodeId: string      - Owning node",
    "  toNodeId: string        - Referenced node",
    "  name: string            - Property name or [index]",
    "  type: string?           - V8 edge type",
    "stacks: array",
    "  id: string              - Trace node id",
    "  frameIds: string[]      - Direct child trace nodes",
    "  functionName: string",
    "  scriptName: string",
    "  lineNumber: number",
    "  columnNumber: number",
];
