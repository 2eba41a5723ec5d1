//! Performance-reporter capture extraction.
//!
//! A reporter run file is a list of runs, each mapping run ids to test
//! steps, each step holding lifecycle metrics. Some metrics embed a raw heap
//! snapshot (`metric.heapObjectsTracking`) which we pull out in document
//! order, ready for the snapshot decoder.

pub mod report;

pub use report::{LifecycleMetric, PerformanceMetric, PerformanceReport, TestCase};

use crate::utils::error::CaptureError;
use log::debug;

/// Deserialize a reporter run file
///
/// Run ids and step names keep the key order of the document.
pub fn parse_report(json: &str) -> Result<PerformanceReport, CaptureError> {
    let report: PerformanceReport = serde_json::from_str(json)?;
    debug!("Loaded performance report with {} runs", report.len());
    Ok(report)
}

/// Flatten every embedded snapshot payload of `report`
///
/// **Public** - main entry point for capture extraction
///
/// # Order
/// runs, then run ids, then test steps, then start/stop/sampling metrics,
/// then entries within each category
pub fn extract_snapshots(report: &PerformanceReport) -> Vec<String> {
    let snapshots: Vec<String> = report
        .iter()
        .flat_map(|run| run.values())
        .flat_map(|steps| steps.values())
        .flat_map(|case| case.metrics())
        .filter_map(|lifecycle| lifecycle.metric.heap_objects_tracking.clone())
        .collect();

    debug!("Found {} heap snapshots", snapshots.len());
    snapshots
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn metric(payload: Option<&str>) -> serde_json::Value {
        match payload {
            Some(p) => json!({"id": "m", "metric": {"heapObjectsTracking": p}}),
            None => json!({"id": "m", "metric": {}}),
        }
    }

    #[test]
    fn test_category_order_within_step() {
        let report = json!([{
            "run": {
                "step": {
                    "samplingMetrics": [metric(Some("sampling"))],
                    "stopMetrics": [metric(Some("stop"))],
                    "startMetrics": [metric(Some("start-1")), metric(None), metric(Some("start-2"))]
                }
            }
        }]);

        let report = parse_report(&report.to_string()).unwrap();
        assert_eq!(
            extract_snapshots(&report),
            vec!["start-1", "start-2", "stop", "sampling"]
        );
    }

    #[test]
    fn test_key_order_is_document_order() {
        let text = r#"[{
            "zeta": {"b": {"startMetrics": [{"metric": {"heapObjectsTracking": "1"}}]},
                     "a": {"startMetrics": [{"metric": {"heapObjectsTracking": "2"}}]}},
            "alpha": {"only": {"stopMetrics": [{"metric": {"heapObjectsTracking": "3"}}]}}
        }]"#;

        let report = parse_report(text).unwrap();
        assert_eq!(extract_snapshots(&report), vec!["1", "2", "3"]);
    }

    #[test]
    fn test_missing_categories_contribute_nothing() {
        let report = parse_report(r#"[{"run": {"step": {"name": "idle"}}}, {}]"#).unwrap();
        assert!(extract_snapshots(&report).is_empty());
    }

    #[test]
    fn test_malformed_report() {
        assert!(parse_report(r#"{"not": "a list"}"#).is_err());
    }
}
