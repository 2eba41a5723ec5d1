//! Convert command implementation.
//!
//! The convert command:
//! 1. Reads the heap snapshot JSON
//! 2. Decodes it with the first compatible parser
//! 3. Merges the energy overlay (if present)
//! 4. Writes the runtime JSON

use super::models::{ConvertArgs, ConvertStats};
use super::utils::default_output_path;
use crate::energy::{merge_energy, EnergyParser};
use crate::output::{read_json, write_runtime};
use crate::parser::RuntimeParserOrchestrator;
use crate::utils::config::RUNTIME_FILE_SUFFIX;
use anyhow::{Context, Result};
use log::{debug, info};
use std::path::PathBuf;
use std::time::Instant;

/// Execute the convert command
///
/// **Public** - main entry point called from main.rs
///
/// # Returns
/// The output path and the statistics of the written runtime
///
/// # Errors
/// * Missing or malformed input file
/// * No compatible parser, or a schema error while decoding
/// * File write errors
pub fn execute_convert(args: &ConvertArgs) -> Result<(PathBuf, ConvertStats)> {
    let start_time = Instant::now();

    if !args.input.exists() {
        anyhow::bail!("Input file not found: {}", args.input.display());
    }

    info!("Step 1/3: Reading heap snapshot {}...", args.input.display());
    let snapshot = read_json(&args.input).context("Malformed JSON in heap snapshot file")?;

    let metrics = if args.skip_energy {
        None
    } else {
        EnergyParser::new().convert(&snapshot)
    };

    info!("Step 2/3: Parsing runtime...");
    let mut orchestrator = RuntimeParserOrchestrator::new();
    let runtime = orchestrator
        .select(snapshot)
        .context("Failed to parse heap snapshot")?
        .context("Failed to parse heap snapshot. It might be malformed or an unsupported version")?;

    let runtime = match metrics {
        Some(metrics) => {
            debug!("Merging {} access metrics", metrics.len());
            merge_energy(runtime, &metrics)
        }
        None => runtime.clone(),
    };

    let stats = ConvertStats {
        nodes: runtime.nodes.len(),
        edges: runtime.edges.len(),
        stacks: runtime.stacks.len(),
        energy: runtime.energy_count(),
    };

    info!("Step 3/3: Writing output file...");
    let output = args
        .output
        .clone()
        .unwrap_or_else(|| default_output_path(&args.input, RUNTIME_FILE_SUFFIX));

    write_runtime(&runtime, &output).context("Failed to write runtime JSON")?;

    info!(
        "Converted {} in {:.2}s",
        args.input.display(),
        start_time.elapsed().as_secs_f64()
    );

    Ok((output, stats))
}

/// Print conversion statistics to stdout
pub fn print_stats(args: &ConvertArgs, output: &std::path::Path, stats: &ConvertStats) {
    println!("Runtime Converter Statistics");
    println!("Nodes: {}", stats.nodes);
    println!("Edges: {}", stats.edges);
    println!("Stacks: {}", stats.stacks);
    println!("Energy: {}", stats.energy);
    println!();
    println!("Input file: {}", args.input.display());
    println!("Output file: {}", output.display());
}
