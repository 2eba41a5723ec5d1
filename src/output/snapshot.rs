//! Raw snapshot writer for payloads extracted from capture reports.

use crate::utils::error::OutputError;
use log::info;
use std::path::Path;

/// Write a raw snapshot payload verbatim
pub fn write_snapshot(payload: &str, output_path: impl AsRef<Path>) -> Result<(), OutputError> {
    let output_path = output_path.as_ref();

    super::prepare_output(output_path)?;
    std::fs::write(output_path, payload)?;

    info!(
        "Snapshot written to: {} ({} bytes)",
        output_path.display(),
        payload.len()
    );

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_snapshot_verbatim() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("out.heapsnapshot");

        write_snapshot(r#"{"snapshot":{}}"#, &path).unwrap();

        assert_eq!(std::fs::read_to_string(&path).unwrap(), r#"{"snapshot":{}}"#);
    }

    #[test]
    fn test_write_snapshot_to_directory_fails() {
        let temp_dir = tempfile::tempdir().unwrap();
        assert!(write_snapshot("{}", temp_dir.path()).is_err());
    }
}
