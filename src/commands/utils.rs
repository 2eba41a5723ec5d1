use crate::parser::RuntimeParserOrchestrator;
use crate::utils::config::RUNTIME_SCHEMA_LINES;
use std::path::{Path, PathBuf};

/// `<input-stem>.<suffix>` in the current directory
pub fn default_output_path(input: &Path, suffix: &str) -> PathBuf {
    let stem = input
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "output".to_string());

    PathBuf::from(format!("{}.{}", stem, suffix))
}

/// Display the runtime output schema
pub fn display_schema() {
    println!("JS Heap Inspector Runtime Schema");
    println!(
        "Parsers: {}",
        RuntimeParserOrchestrator::new().parser_names().join(", ")
    );
    println!();

    for line in RUNTIME_SCHEMA_LINES {
        println!("  {}", line);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_output_path() {
        assert_eq!(
            default_output_path(Path::new("/tmp/captures/app.heapsnapshot"), "runtime.json"),
            PathBuf::from("app.runtime.json")
        );
        assert_eq!(
            default_output_path(Path::new("report.json"), "heapsnapshot"),
            PathBuf::from("report.heapsnapshot")
        );
    }
}
