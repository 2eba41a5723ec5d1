//! Access-energy overlay.
//!
//! An instrumented engine can embed per-object load/store counters next to
//! the snapshot under a top-level `metrics` key:
//!
//! ```json
//! { "metrics": { "nodes": [{ "id": 7, "load_count": 3, "store_count": 1 }] } }
//! ```
//!
//! The overlay is optional. An unrecognized payload is not an error, it
//! simply yields no metrics.

use crate::model::{AccessMetric, Runtime};
use log::{debug, warn};
use serde::de::Error as _;
use serde::{Deserialize, Deserializer};
use serde_json::Number;
use std::collections::HashMap;

/// Largest magnitude at which every integer is exactly representable as f64
const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_991.0;

/// Counters recorded for one node by the instrumented engine
#[derive(Debug, Clone, Deserialize)]
struct NodeAccessParameters {
    id: Number,
    #[serde(deserialize_with = "whole_count")]
    load_count: u64,
    #[serde(deserialize_with = "whole_count")]
    store_count: u64,
    #[serde(default)]
    allocation_time_ms: Option<f64>,
}

/// Accept `3` and `3.0` alike; fractions and negatives are rejected
fn whole_count<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u64, D::Error> {
    let number = Number::deserialize(deserializer)?;
    if let Some(count) = number.as_u64() {
        return Ok(count);
    }

    match number.as_f64() {
        Some(value) if value >= 0.0 && value.fract() == 0.0 && value <= MAX_SAFE_INTEGER => {
            Ok(value as u64)
        }
        _ => Err(D::Error::custom(format!("{} is not a counter", number))),
    }
}

/// Render a node id the way the snapshot renders it: `7.0` becomes "7"
fn node_id(id: &Number) -> String {
    match id.as_f64() {
        Some(value) if id.is_f64() && value.fract() == 0.0 && value.abs() <= MAX_SAFE_INTEGER => {
            (value as i64).to_string()
        }
        _ => id.to_string(),
    }
}

/// The custom `metrics` payload
#[derive(Debug, Clone, Deserialize)]
struct CustomV8Metrics {
    nodes: Vec<NodeAccessParameters>,
}

/// Converts the optional `metrics` overlay into access metrics
#[derive(Debug, Default, Clone, Copy)]
pub struct EnergyParser;

impl EnergyParser {
    pub fn new() -> Self {
        Self
    }

    /// Convert the `metrics` member of `input` into access metrics
    ///
    /// **Public** - main entry point for overlays
    ///
    /// # Returns
    /// One metric per entry, in input order, or `None` when `metrics` is
    /// absent or any entry does not match the expected shape
    pub fn convert(&self, input: &serde_json::Value) -> Option<Vec<AccessMetric>> {
        let metrics = input.get("metrics")?;

        let payload = match CustomV8Metrics::deserialize(metrics) {
            Ok(payload) => payload,
            Err(e) => {
                debug!("Metrics overlay not recognized: {}", e);
                return None;
            }
        };

        let result: Vec<AccessMetric> = payload
            .nodes
            .into_iter()
            .map(|entry| AccessMetric {
                node_id: node_id(&entry.id),
                read_counter: entry.load_count,
                write_counter: entry.store_count,
                allocation_time: entry.allocation_time_ms,
            })
            .collect();

        debug!("Parsed {} access metrics", result.len());
        Some(result)
    }
}

/// Attach access metrics to the matching nodes of `runtime`
///
/// **Public** - used by the convert command after decoding
///
/// Returns a new runtime; when several metrics share a node id the last one
/// wins. Metrics for unknown nodes are skipped.
pub fn merge_energy(runtime: &Runtime, metrics: &[AccessMetric]) -> Runtime {
    let by_node: HashMap<&str, &AccessMetric> = metrics
        .iter()
        .map(|metric| (metric.node_id.as_str(), metric))
        .collect();

    let mut merged = runtime.clone();
    let mut attached = 0usize;

    for node in &mut merged.nodes {
        if let Some(metric) = by_node.get(node.id.as_str()) {
            node.energy = Some((*metric).clone());
            attached += 1;
        }
    }

    let unmatched = by_node.len().saturating_sub(attached);
    if unmatched > 0 {
        warn!("{} access metrics reference nodes missing from the runtime", unmatched);
    }

    merged
}
