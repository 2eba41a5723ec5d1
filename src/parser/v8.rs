//! V8 heap snapshot decoder.
//!
//! Turns the flat `nodes` / `edges` / `trace_tree` arrays of a
//! `.heapsnapshot` into the normalized [`Runtime`] graph.
//!
//! Node and edge decoding is tolerant: dangling edge targets are dropped and
//! out-of-range string indices fall back to the index itself. Trace
//! function metadata is strict: any missing field aborts the decode.

use super::layout::FieldLayout;
use super::orchestrator::RuntimeParser;
use super::schema::{TraceFunctionInfo, TraceValue, V8Meta, V8RuntimeSchema, V8SnapshotMeta};
use crate::model::{Edge, Node, Runtime, Stack};
use crate::utils::config::{
    ELEMENT_EDGE_TYPE, ROOT_NAME_MARKER, SYNTHETIC_NODE_TYPE, UNKNOWN_TYPE_NAME,
};
use crate::utils::error::ParseError;
use log::{debug, warn};
use serde::Deserialize;
use std::collections::HashMap;

/// Decoder for V8 heap snapshots
///
/// Caches the last converted runtime until the next [`V8Parser::load`].
#[derive(Debug, Default)]
pub struct V8Parser {
    source: Option<serde_json::Value>,
    runtime: Option<Runtime>,
}

impl V8Parser {
    pub fn new() -> Self {
        Self::default()
    }
}

impl RuntimeParser for V8Parser {
    fn name(&self) -> &'static str {
        "v8"
    }

    /// Every input is handed to the V8 decoder; it is the only format today
    fn is_compatible(&self, _input: &serde_json::Value) -> bool {
        true
    }

    fn load(&mut self, input: serde_json::Value) {
        self.source = Some(input);
        self.runtime = None;
    }

    fn convert(&mut self) -> Result<&Runtime, ParseError> {
        let source = self.source.as_ref().ok_or(ParseError::InvalidState)?;

        let runtime = match self.runtime.take() {
            Some(cached) => cached,
            None => {
                let schema = V8RuntimeSchema::deserialize(serde_stacker::Deserializer::new(source))?;
                decode_snapshot(&schema)?
            }
        };

        Ok(self.runtime.insert(runtime))
    }
}

/// Pending bookkeeping for one decoded node, keyed by its provisional index
#[derive(Debug, Clone, Copy)]
struct PendingNode {
    edge_count: usize,
}

/// Positions of the node fields the decoder requires
struct NodeFields {
    node_type: usize,
    name: usize,
    id: usize,
    self_size: usize,
    edge_count: usize,
    trace_node_id: usize,
}

impl NodeFields {
    fn resolve(layout: &FieldLayout) -> Result<Self, ParseError> {
        Ok(Self {
            node_type: layout.require("type")?,
            name: layout.require("name")?,
            id: layout.require("id")?,
            self_size: layout.require("self_size")?,
            edge_count: layout.require("edge_count")?,
            trace_node_id: layout.require("trace_node_id")?,
        })
    }
}

/// Positions of the edge fields the decoder requires
struct EdgeFields {
    edge_type: usize,
    name_or_index: usize,
    to_node: usize,
}

impl EdgeFields {
    fn resolve(layout: &FieldLayout) -> Result<Self, ParseError> {
        Ok(Self {
            edge_type: layout.require("type")?,
            name_or_index: layout.require("name_or_index")?,
            to_node: layout.require("to_node")?,
        })
    }
}

/// Decoded nodes plus the transient tables edges are resolved against
struct NodeTable {
    nodes: Vec<Node>,
    pending: Vec<PendingNode>,
    by_offset: HashMap<i64, usize>,
}

/// Decode a deserialized snapshot into a runtime graph
///
/// **Public** - main entry point for typed input
///
/// # Errors
/// * `ParseError::Schema` - zero stride, missing node/edge field, or
///   incomplete trace function metadata
pub fn decode_snapshot(schema: &V8RuntimeSchema) -> Result<Runtime, ParseError> {
    let meta = &schema.snapshot.meta;
    let node_layout = FieldLayout::new("node", &meta.node_fields);
    let edge_layout = FieldLayout::new("edge", &meta.edge_fields);

    if node_layout.stride() == 0 || edge_layout.stride() == 0 {
        return Err(ParseError::Schema(
            "node_fields and edge_fields must not be empty".to_string(),
        ));
    }

    let strings = &schema.strings;
    let NodeTable {
        mut nodes,
        pending,
        by_offset,
    } = decode_nodes(schema, &node_layout, strings)?;

    let edges = decode_edges(
        &schema.snapshot,
        &schema.edges,
        &edge_layout,
        strings,
        &mut nodes,
        &pending,
        &by_offset,
    )?;

    let stacks = decode_stacks(schema)?;

    debug!(
        "Decoded {} nodes, {} edges, {} stacks",
        nodes.len(),
        edges.len(),
        stacks.len()
    );

    Ok(Runtime::new(nodes, edges, stacks))
}

/// Decode every node record and index it by its array offset
///
/// **Private** - internal helper for decode_snapshot
fn decode_nodes(
    schema: &V8RuntimeSchema,
    layout: &FieldLayout,
    strings: &[String],
) -> Result<NodeTable, ParseError> {
    let stride = layout.stride();
    let values = &schema.nodes;
    let record_count = values.len().div_ceil(stride);

    let count = match schema.snapshot.node_count {
        Some(declared) => {
            if declared != record_count {
                warn!(
                    "node_count is {} but the node array holds {} records",
                    declared, record_count
                );
            }
            declared
        }
        None => record_count,
    };

    let mut table = NodeTable {
        nodes: Vec::with_capacity(count.min(record_count)),
        pending: Vec::with_capacity(count.min(record_count)),
        by_offset: HashMap::with_capacity(count.min(record_count)),
    };

    if count == 0 {
        return Ok(table);
    }

    let fields = NodeFields::resolve(layout)?;
    let type_names = schema.snapshot.meta.node_type_names();

    for index in 0..count {
        let record = layout.record(values, index);

        let type_index = layout.read(record, fields.node_type, index)?;
        let name_index = layout.read(record, fields.name, index)?;
        let id = layout.read(record, fields.id, index)?;
        layout.read(record, fields.self_size, index)?;
        let edge_count = layout.read(record, fields.edge_count, index)?;
        let trace_node_id = layout.read(record, fields.trace_node_id, index)?;

        let type_name = catalog_name(&type_names, type_index);
        let name = global_string(strings, name_index);
        let root = is_root(type_name, &name);
        let trace_id = (trace_node_id > 0).then(|| trace_node_id.to_string());

        let node = Node::new(id.to_string(), type_name, root)
            .with_value(name)
            .with_trace_id(trace_id);

        let offset = (index * stride) as i64;
        table.by_offset.insert(offset, table.nodes.len());
        table.pending.push(PendingNode {
            edge_count: usize::try_from(edge_count).unwrap_or(0),
        });
        table.nodes.push(node);
    }

    Ok(table)
}

/// Walk the edge array, `edge_count` records per node in node order
///
/// **Private** - internal helper for decode_snapshot
fn decode_edges(
    snapshot: &V8SnapshotMeta,
    values: &[i64],
    layout: &FieldLayout,
    strings: &[String],
    nodes: &mut [Node],
    pending: &[PendingNode],
    by_offset: &HashMap<i64, usize>,
) -> Result<Vec<Edge>, ParseError> {
    let total = pending
        .iter()
        .try_fold(0usize, |sum, p| sum.checked_add(p.edge_count))
        .ok_or_else(|| ParseError::Schema("node edge counts overflow".to_string()))?;

    if let Some(declared) = snapshot.edge_count {
        if declared != total {
            warn!(
                "edge_count is {} but nodes own {} edges in total",
                declared, total
            );
        }
    }

    let mut edges = Vec::with_capacity(total.min(values.len() / layout.stride()));

    if total == 0 {
        return Ok(edges);
    }

    let fields = EdgeFields::resolve(layout)?;
    let type_names = snapshot.meta.edge_type_names();
    let mut cursor = 0usize;
    let mut dropped = 0usize;

    for (owner, pending_node) in pending.iter().enumerate() {
        for _ in 0..pending_node.edge_count {
            let record = layout.record(values, cursor);
            let type_index = layout.read(record, fields.edge_type, cursor)?;
            let name_or_index = layout.read(record, fields.name_or_index, cursor)?;
            let to_node = layout.read(record, fields.to_node, cursor)?;
            cursor += 1;

            // Snapshots may reference objects outside the decoded set
            let Some(&target) = by_offset.get(&to_node) else {
                dropped += 1;
                continue;
            };

            let type_name = catalog_name(&type_names, type_index);
            let name = if type_name == ELEMENT_EDGE_TYPE {
                format!("[{}]", name_or_index)
            } else {
                global_string(strings, name_or_index)
            };

            let edge = Edge {
                id: edges.len().to_string(),
                from_node_id: nodes[owner].id.clone(),
                to_node_id: nodes[target].id.clone(),
                name,
                edge_type: Some(type_name.to_string()),
            };

            nodes[owner].edge_ids.push(edge.id.clone());
            edges.push(edge);
        }
    }

    if dropped > 0 {
        debug!("Dropped {} edges with unresolved targets", dropped);
    }

    Ok(edges)
}

/// Build one stack per trace tree node, parents before children
///
/// **Private** - internal helper for decode_snapshot
fn decode_stacks(schema: &V8RuntimeSchema) -> Result<Vec<Stack>, ParseError> {
    let tree = match schema.trace_tree.as_deref() {
        Some(tree) if !tree.is_empty() => tree,
        _ => {
            debug!("No trace tree in snapshot, skipping stacks");
            return Ok(Vec::new());
        }
    };

    let meta = &schema.snapshot.meta;
    let functions = decode_trace_functions(meta, &schema.trace_function_infos, &schema.strings)?;

    let stride = meta.trace_node_fields.len();
    if stride == 0 {
        return Err(ParseError::Schema(
            "trace_node_fields must not be empty when a trace tree is present".to_string(),
        ));
    }

    let layout = FieldLayout::new("trace node", &meta.trace_node_fields);
    let id_position = layout.position("id");
    let function_position = layout.position("function_info_index");
    let children_position = layout.position("children");

    let record_id = |record: &[TraceValue]| -> String {
        id_position
            .and_then(|position| record.get(position))
            .and_then(TraceValue::as_number)
            .map(|id| id.to_string())
            .unwrap_or_default()
    };

    let mut stacks = Vec::new();
    let mut work: Vec<&[TraceValue]> = tree.chunks(stride).rev().collect();

    while let Some(record) = work.pop() {
        let children: Vec<&[TraceValue]> = children_position
            .and_then(|position| record.get(position))
            .and_then(TraceValue::as_nested)
            .map(|nested| nested.chunks(stride).collect())
            .unwrap_or_default();

        let frame_ids = children.iter().map(|&child| record_id(child)).collect();

        let function = function_position
            .and_then(|position| record.get(position))
            .and_then(TraceValue::as_number)
            .and_then(|index| usize::try_from(index).ok())
            .and_then(|index| functions.get(index));

        stacks.push(Stack {
            id: record_id(record),
            frame_ids,
            function_name: function.map(|f| f.name.clone()).unwrap_or_default(),
            script_name: function.map(|f| f.script_name.clone()).unwrap_or_default(),
            line_number: function.map_or(0, |f| f.line),
            column_number: function.map_or(0, |f| f.column),
        });

        // Reversed so the leftmost child is popped first
        work.extend(children.into_iter().rev());
    }

    Ok(stacks)
}

/// Parse the flat trace function array
///
/// **Private** - internal helper for decode_stacks
fn decode_trace_functions(
    meta: &V8Meta,
    values: &[i64],
    strings: &[String],
) -> Result<Vec<TraceFunctionInfo>, ParseError> {
    if values.is_empty() {
        return Ok(Vec::new());
    }

    let layout = FieldLayout::new("trace function", &meta.trace_function_info_fields);
    if layout.stride() == 0 {
        return Err(ParseError::Schema(
            "trace_function_info_fields is empty but trace_function_infos is not".to_string(),
        ));
    }

    let function_id = layout.require("function_id")?;
    let name = layout.require("name")?;
    let script_name = layout.require("script_name")?;
    let script_id = layout.require("script_id")?;
    let line = layout.require("line")?;
    let column = layout.require("column")?;

    values
        .chunks(layout.stride())
        .enumerate()
        .map(|(index, record)| -> Result<TraceFunctionInfo, ParseError> {
            Ok(TraceFunctionInfo {
                function_id: layout.read(record, function_id, index)?.to_string(),
                name: global_string(strings, layout.read(record, name, index)?),
                script_name: global_string(strings, layout.read(record, script_name, index)?),
                script_id: layout.read(record, script_id, index)?.to_string(),
                line: layout.read(record, line, index)?,
                column: layout.read(record, column, index)?,
            })
        })
        .collect()
}

/// Look up a string pool entry, falling back to the decimal index
///
/// **Private** - internal utility
fn global_string(strings: &[String], index: i64) -> String {
    usize::try_from(index)
        .ok()
        .and_then(|i| strings.get(i))
        .cloned()
        .unwrap_or_else(|| index.to_string())
}

/// Resolve a type catalog entry
///
/// **Private** - internal utility
fn catalog_name<'a>(names: &[&'a str], index: i64) -> &'a str {
    usize::try_from(index)
        .ok()
        .and_then(|i| names.get(i))
        .copied()
        .unwrap_or(UNKNOWN_TYPE_NAME)
}

/// Synthetic nodes whose name mentions "root" are GC roots
fn is_root(type_name: &str, name: &str) -> bool {
    type_name == SYNTHETIC_NODE_TYPE && name.to_lowercase().contains(ROOT_NAME_MARKER)
}
