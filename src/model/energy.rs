//! Per-object access metrics.

use serde::{Deserialize, Serialize};

/// Read/write counters recorded for a single heap object
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccessMetric {
    /// Id of the node the counters belong to
    pub node_id: String,

    /// Number of loads observed
    pub read_counter: u64,

    /// Number of stores observed
    pub write_counter: u64,

    /// Allocation timestamp in milliseconds (if recorded)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub allocation_time: Option<f64>,
}
