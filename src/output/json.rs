//! JSON runtime output writer.
//!
//! Writes Runtime graphs to JSON files and reads JSON inputs back.

use crate::model::Runtime;
use crate::utils::error::OutputError;
use log::{debug, info};
use serde::Deserialize;
use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;

/// Write a runtime graph to a JSON file
///
/// **Public** - main entry point for JSON output
///
/// # Errors
/// * `OutputError::Io` - I/O error during write
/// * `OutputError::SerializationFailed` - JSON serialization error
/// * `OutputError::InvalidPath` - Path cannot be created or is invalid
///
/// # Example
/// ```ignore
/// let runtime = orchestrator.select(snapshot)?.unwrap();
/// write_runtime(runtime, "app.runtime.json")?;
/// ```
pub fn write_runtime(runtime: &Runtime, output_path: impl AsRef<Path>) -> Result<(), OutputError> {
    let output_path = output_path.as_ref();

    info!("Writing runtime to: {}", output_path.display());

    super::prepare_output(output_path)?;

    let file = File::create(output_path)?;
    let writer = BufWriter::new(file);

    serde_json::to_writer_pretty(writer, runtime)?;

    info!(
        "Runtime written successfully ({} bytes)",
        calculate_file_size(output_path)
    );

    Ok(())
}

/// Read a runtime graph written by [`write_runtime`]
pub fn read_runtime(input_path: impl AsRef<Path>) -> Result<Runtime, OutputError> {
    let input_path = input_path.as_ref();

    debug!("Reading runtime from: {}", input_path.display());

    let file = File::open(input_path)?;
    let runtime: Runtime = serde_json::from_reader(BufReader::new(file))?;

    debug!(
        "Runtime loaded: {} nodes, {} edges, {} stacks",
        runtime.nodes.len(),
        runtime.edges.len(),
        runtime.stacks.len()
    );

    Ok(runtime)
}

/// Read any JSON document (snapshots are handed to the orchestrator untyped)
///
/// Nesting depth is unbounded: every trace tree level adds one array.
pub fn read_json(input_path: impl AsRef<Path>) -> Result<serde_json::Value, OutputError> {
    let input_path = input_path.as_ref();

    debug!("Reading JSON from: {}", input_path.display());

    let file = File::open(input_path)?;
    let mut json = serde_json::Deserializer::from_reader(BufReader::new(file));
    json.disable_recursion_limit();

    let value = serde_json::Value::deserialize(serde_stacker::Deserializer::new(&mut json))?;
    json.end()?;

    Ok(value)
}

/// Calculate file size in bytes
///
/// **Private** - internal utility
fn calculate_file_size(path: &Path) -> u64 {
    std::fs::metadata(path).map(|m| m.len()).unwrap_or(0)
}
