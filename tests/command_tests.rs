mod common;

use common::{sample_snapshot, v8_meta};
use heap_inspector::commands::{execute_convert, execute_extract, ConvertArgs, ExtractArgs};
use heap_inspector::output::read_runtime;
use serde_json::json;
use std::path::Path;
use tempfile::TempDir;

fn write_json(dir: &TempDir, name: &str, value: &serde_json::Value) -> std::path::PathBuf {
    let path = dir.path().join(name);
    std::fs::write(&path, value.to_string()).unwrap();
    path
}

#[test]
fn test_convert_writes_runtime() {
    let dir = tempfile::tempdir().unwrap();
    let mut snapshot = sample_snapshot();
    snapshot["metrics"] = json!({"nodes": [{"id": 5, "load_count": 2, "store_count": 1}]});
    let input = write_json(&dir, "app.heapsnapshot", &snapshot);
    let output = dir.path().join("out/app.runtime.json");

    let args = ConvertArgs {
        input,
        output: Some(output.clone()),
        ..Default::default()
    };
    let (written, stats) = execute_convert(&args).unwrap();

    assert_eq!(written, output);
    assert_eq!((stats.nodes, stats.edges, stats.stacks, stats.energy), (3, 4, 4, 1));

    let runtime = read_runtime(&output).unwrap();
    assert_eq!(runtime.node("5").unwrap().energy.as_ref().unwrap().read_counter, 2);
}

#[test]
fn test_convert_without_energy() {
    let dir = tempfile::tempdir().unwrap();
    let mut snapshot = sample_snapshot();
    snapshot["metrics"] = json!({"nodes": [{"id": 5, "load_count": 2, "store_count": 1}]});
    let input = write_json(&dir, "app.heapsnapshot", &snapshot);

    let args = ConvertArgs {
        input,
        output: Some(dir.path().join("app.runtime.json")),
        skip_energy: true,
    };
    let (_, stats) = execute_convert(&args).unwrap();

    assert_eq!(stats.energy, 0);
}

#[test]
fn test_convert_deep_allocation_chain() {
    let dir = tempfile::tempdir().unwrap();
    let depth = 200;

    let mut tree = String::from("[");
    for id in 1..=depth {
        tree.push_str(&format!("{},0,0,0,[", id));
    }
    tree.push_str(&"]".repeat(depth + 1));

    let text = format!(
        r#"{{"snapshot":{{"meta":{},"node_count":0,"edge_count":0}},"nodes":[],"edges":[],"trace_function_infos":[0,0,0,0,1,1],"trace_tree":{},"strings":["fn"]}}"#,
        v8_meta(),
        tree
    );
    let input = dir.path().join("deep.heapsnapshot");
    std::fs::write(&input, text).unwrap();
    let output = dir.path().join("deep.runtime.json");

    let args = ConvertArgs {
        input,
        output: Some(output.clone()),
        ..Default::default()
    };
    let (_, stats) = execute_convert(&args).unwrap();
    assert_eq!(stats.stacks, depth);

    let runtime = read_runtime(&output).unwrap();
    assert_eq!(runtime.stacks[0].frame_ids, vec!["2"]);
    assert_eq!(runtime.stacks[depth - 1].id, depth.to_string());
    assert!(runtime.stacks[depth - 1].frame_ids.is_empty());
}

#[test]
fn test_convert_missing_input() {
    let args = ConvertArgs {
        input: Path::new("does/not/exist.heapsnapshot").to_path_buf(),
        ..Default::default()
    };

    assert!(execute_convert(&args).is_err());
}

#[test]
fn test_convert_malformed_json() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("broken.heapsnapshot");
    std::fs::write(&input, "{ nope").unwrap();

    let args = ConvertArgs {
        input,
        output: Some(dir.path().join("broken.runtime.json")),
        ..Default::default()
    };

    assert!(execute_convert(&args).is_err());
}

#[test]
fn test_extract_latest_snapshot() {
    let dir = tempfile::tempdir().unwrap();
    let report = json!([
        {"run-1": {"step": {"startMetrics": [{"metric": {"heapObjectsTracking": "{\"first\":1}"}}]}}},
        {"run-2": {"step": {"stopMetrics": [{"metric": {"heapObjectsTracking": "{\"second\":2}"}}]}}}
    ]);
    let report = write_json(&dir, "report.json", &report);
    let output = dir.path().join("latest.heapsnapshot");

    let args = ExtractArgs {
        report,
        output: Some(output.clone()),
        all: false,
    };
    let written = execute_extract(&args).unwrap();

    assert_eq!(written, vec![output.clone()]);
    assert_eq!(std::fs::read_to_string(&output).unwrap(), "{\"second\":2}");
}

#[test]
fn test_extract_all_snapshots() {
    let dir = tempfile::tempdir().unwrap();
    let report = json!([{"run-1": {"step": {
        "startMetrics": [{"metric": {"heapObjectsTracking": "a"}}],
        "samplingMetrics": [{"metric": {"heapObjectsTracking": "b"}}]
    }}}]);
    let report = write_json(&dir, "report.json", &report);

    let args = ExtractArgs {
        report,
        output: Some(dir.path().join("run.heapsnapshot")),
        all: true,
    };
    let written = execute_extract(&args).unwrap();

    assert_eq!(
        written,
        vec![
            dir.path().join("run.0.heapsnapshot"),
            dir.path().join("run.1.heapsnapshot")
        ]
    );
    assert_eq!(std::fs::read_to_string(&written[1]).unwrap(), "b");
}

#[test]
fn test_extract_without_snapshots_fails() {
    let dir = tempfile::tempdir().unwrap();
    let report = write_json(&dir, "report.json", &json!([{"run-1": {"step": {}}}]));

    let args = ExtractArgs {
        report,
        ..Default::default()
    };

    assert!(execute_extract(&args).is_err());
}
