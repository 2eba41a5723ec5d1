use heap_inspector::capture::{extract_snapshots, parse_report, PerformanceReport};
use pretty_assertions::assert_eq;
use serde_json::json;

fn lifecycle(payload: &str) -> serde_json::Value {
    json!({
        "description": "",
        "devtoolsFrontendUrl": "devtools://devtools/bundled/inspector.html",
        "id": "target-1",
        "metric": {"heapObjectsTracking": payload},
        "title": "app",
        "type": "page",
        "url": "http://localhost:3000",
        "webSocketDebuggerUrl": "ws://localhost:9222/devtools/page/1"
    })
}

fn test_case(start: Vec<serde_json::Value>) -> serde_json::Value {
    json!({
        "name": "step",
        "startMeasurement": 0,
        "startMeasurementOffset": 0,
        "endMeasurement": 120,
        "startMetrics": start,
        "stopMetrics": [],
        "samplingMetrics": []
    })
}

#[test]
fn test_two_runs_keep_order() {
    let report = json!([
        {"run-1": {"open page": test_case(vec![lifecycle("first")])}},
        {"run-2": {"open page": test_case(vec![lifecycle("second")])}}
    ]);

    let report = parse_report(&report.to_string()).unwrap();
    assert_eq!(extract_snapshots(&report), vec!["first", "second"]);
}

#[test]
fn test_steps_and_categories() {
    // raw text: step names must keep document order, not sorted order
    let text = r#"[{
        "run-1": {
            "login": {
                "startMetrics": [{"metric": {"heapObjectsTracking": "a"}}],
                "stopMetrics": [{"metric": {"heapObjectsTracking": "b"}}],
                "samplingMetrics": [
                    {"metric": {"heapObjectsTracking": "c"}},
                    {"metric": {"heapObjectsTracking": "d"}}
                ]
            },
            "checkout": {"stopMetrics": [{"metric": {"heapObjectsTracking": "e"}}]}
        }
    }]"#;

    let report = parse_report(text).unwrap();
    assert_eq!(extract_snapshots(&report), vec!["a", "b", "c", "d", "e"]);
}

#[test]
fn test_report_fields_survive_round_trip() {
    let original = json!([{"run-1": {"open page": test_case(vec![lifecycle("x")])}}]);

    let report = parse_report(&original.to_string()).unwrap();
    let case = &report[0]["run-1"]["open page"];

    assert_eq!(case.name.as_deref(), Some("step"));
    assert_eq!(case.end_measurement, Some(120.0));
    assert_eq!(case.start_metrics[0].target_type.as_deref(), Some("page"));

    let serialized = serde_json::to_value(&report).unwrap();
    assert_eq!(
        serialized[0]["run-1"]["open page"]["startMetrics"][0]["metric"],
        json!({"heapObjectsTracking": "x"})
    );
}

#[test]
fn test_empty_report() {
    let report: PerformanceReport = Vec::new();
    assert!(extract_snapshots(&report).is_empty());
}
