//! Performance-reporter run file schema.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Runs in file order; run id → step name → test case, in key order
pub type PerformanceReport = Vec<IndexMap<String, IndexMap<String, TestCase>>>;

/// Metrics captured for one test step
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TestCase {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_measurement: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_measurement_offset: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_measurement: Option<f64>,

    /// Metrics taken when the step started
    #[serde(default)]
    pub start_metrics: Vec<LifecycleMetric>,

    /// Metrics taken when the step stopped
    #[serde(default)]
    pub stop_metrics: Vec<LifecycleMetric>,

    /// Metrics sampled while the step ran
    #[serde(default)]
    pub sampling_metrics: Vec<LifecycleMetric>,
}

impl TestCase {
    /// All metrics in start, stop, sampling order
    pub fn metrics(&self) -> impl Iterator<Item = &LifecycleMetric> + '_ {
        self.start_metrics
            .iter()
            .chain(&self.stop_metrics)
            .chain(&self.sampling_metrics)
    }
}

/// One metric sample plus the DevTools target it was taken from
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LifecycleMetric {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub target_type: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub devtools_frontend_url: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub web_socket_debugger_url: Option<String>,

    #[serde(default)]
    pub metric: PerformanceMetric,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PerformanceMetric {
    /// Raw heap snapshot JSON captured by the reporter
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub heap_objects_tracking: Option<String>,
}
