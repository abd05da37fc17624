//! Export collaborators for leave calculation results.
//!
//! Both exporters consume the labelled tables produced by
//! [`LeaveCalculationResult::report_tables`](crate::models::LeaveCalculationResult::report_tables).
//! File exports are rendered completely in memory first and then moved into
//! place through a temporary file in the target directory, so a failed
//! export never leaves a partially written file behind.

mod csv_export;
mod document;

use std::io::Write;
use std::path::Path;

use tempfile::NamedTempFile;

use crate::error::{EngineError, EngineResult};

pub use csv_export::CsvExporter;
pub use document::DocumentRenderer;

fn export_error(target: &Path, err: impl std::fmt::Display) -> EngineError {
    EngineError::ExportError {
        target: target.display().to_string(),
        message: err.to_string(),
    }
}

/// Writes `bytes` to `path` atomically.
pub(crate) fn write_atomically(path: &Path, bytes: &[u8]) -> EngineResult<()> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut file = NamedTempFile::new_in(dir).map_err(|e| export_error(path, e))?;
    file.write_all(bytes).map_err(|e| export_error(path, e))?;
    file.flush().map_err(|e| export_error(path, e))?;
    file.persist(path).map_err(|e| export_error(path, e.error))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_write_atomically_creates_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("out.txt");

        write_atomically(&path, "연차".as_bytes()).unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "연차");
    }

    #[test]
    fn test_write_atomically_replaces_existing_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("out.txt");
        fs::write(&path, "old").unwrap();

        write_atomically(&path, b"new").unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "new");
    }

    #[test]
    fn test_write_into_missing_directory_fails_cleanly() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("missing").join("out.txt");

        match write_atomically(&path, b"data") {
            Err(EngineError::ExportError { target, .. }) => {
                assert!(target.ends_with("out.txt"));
            }
            other => panic!("Expected ExportError, got {:?}", other),
        }
        assert!(!path.exists());
    }
}
