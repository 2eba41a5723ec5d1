//! Extract command implementation.
//!
//! Pulls raw heap snapshots out of a performance-reporter run file.

use super::models::ExtractArgs;
use super::utils::default_output_path;
use crate::capture::{extract_snapshots, parse_report};
use crate::output::write_snapshot;
use crate::utils::config::SNAPSHOT_FILE_EXTENSION;
use anyhow::{Context, Result};
use log::info;
use std::path::PathBuf;

/// Execute the extract command
///
/// **Public** - main entry point called from main.rs
///
/// # Returns
/// Paths of the written snapshot files
///
/// # Errors
/// * Missing or malformed report
/// * Report without any embedded snapshot
pub fn execute_extract(args: &ExtractArgs) -> Result<Vec<PathBuf>> {
    if !args.report.exists() {
        anyhow::bail!("Input file not found: {}", args.report.display());
    }

    let text = std::fs::read_to_string(&args.report)
        .with_context(|| format!("Failed to read {}", args.report.display()))?;
    let report = parse_report(&text).context("Failed to parse performance report")?;

    let snapshots = extract_snapshots(&report);
    info!("Found {} heap snapshots", snapshots.len());

    let Some(latest) = snapshots.last() else {
        anyhow::bail!(
            "No heap snapshot in {}. It might be malformed or an unsupported version",
            args.report.display()
        );
    };

    let base = args
        .output
        .clone()
        .unwrap_or_else(|| default_output_path(&args.report, SNAPSHOT_FILE_EXTENSION));

    if !args.all {
        write_snapshot(latest, &base).context("Failed to write heap snapshot")?;
        return Ok(vec![base]);
    }

    let mut written = Vec::with_capacity(snapshots.len());
    for (index, payload) in snapshots.iter().enumerate() {
        let path = numbered_path(&base, index);
        write_snapshot(payload, &path)
            .with_context(|| format!("Failed to write heap snapshot {}", index))?;
        written.push(path);
    }

    Ok(written)
}

/// `dir/name.heapsnapshot` → `dir/name.<index>.heapsnapshot`
///
/// **Private** - internal helper for execute_extract
fn numbered_path(base: &std::path::Path, index: usize) -> PathBuf {
    let stem = base
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    let extension = base
        .extension()
        .map(|e| e.to_string_lossy().into_owned())
        .unwrap_or_else(|| SNAPSHOT_FILE_EXTENSION.to_string());

    base.with_file_name(format!("{}.{}.{}", stem, index, extension))
}
