use std::path::PathBuf;

/// Arguments for the convert command
///
/// **Public** - used by main.rs to construct from CLI args
#[derive(Debug, Clone, Default)]
pub struct ConvertArgs {
    /// Path to the V8 heap snapshot
    pub input: PathBuf,

    /// Output path for the runtime JSON (None = `<stem>.runtime.json`)
    pub output: Option<PathBuf>,

    /// Skip merging the `metrics` energy overlay
    pub skip_energy: bool,
}

/// Arguments for the extract command
#[derive(Debug, Clone, Default)]
pub struct ExtractArgs {
    /// Path to the performance-reporter run file
    pub report: PathBuf,

    /// Output path (None = `<stem>.heapsnapshot`)
    pub output: Option<PathBuf>,

    /// Write every snapshot instead of only the latest one
    pub all: bool,
}

/// Counts reported after a conversion
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConvertStats {
    pub nodes: usize,
    pub edges: usize,
    pub stacks: usize,
    pub energy: usize,
}
