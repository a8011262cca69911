#![forbid(unsafe_code)]

//! Pre-flight checks on input paths
//!
//! Paths are checked in the order given and the first failure wins. Nothing
//! is opened here; only existence is queried.

use crate::error::ReportError;
use std::path::Path;

const CSV_SUFFIX: &str = ".csv";

/// Check that every path exists and carries a `.csv` extension
///
/// The extension comparison is case-insensitive, so `DATA.CSV` passes.
///
/// # Errors
///
/// * [`ReportError::FileNotFound`] for the first path that does not exist
/// * [`ReportError::InvalidFileType`] for the first existing path that is not CSV
pub fn validate_files<S: AsRef<str>>(paths: &[S]) -> Result<(), ReportError> {
    for path in paths {
        let path = path.as_ref();
        log::debug!("validating {}", path);

        if !Path::new(path).exists() {
            return Err(ReportError::FileNotFound {
                path: path.to_string(),
            });
        }

        if !path.to_lowercase().ends_with(CSV_SUFFIX) {
            return Err(ReportError::InvalidFileType {
                path: path.to_string(),
            });
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn create_test_file(dir: &TempDir, name: &str, content: &str) -> String {
        let path = dir.path().join(name);
        fs::write(&path, content).unwrap();
        path.to_string_lossy().to_string()
    }

    #[test]
    fn test_existing_csv_passes() {
        let temp_dir = TempDir::new().unwrap();
        let csv = create_test_file(&temp_dir, "test.csv", "name,age\nJohn,30");

        assert!(validate_files(&[csv]).is_ok());
    }

    #[test]
    fn test_uppercase_extension_passes() {
        let temp_dir = TempDir::new().unwrap();
        let csv = create_test_file(&temp_dir, "REPORT.CSV", "a\n1");

        assert!(validate_files(&[csv]).is_ok());
    }

    #[test]
    fn test_empty_list_passes() {
        let paths: [&str; 0] = [];
        assert!(validate_files(&paths).is_ok());
    }

    #[test]
    fn test_missing_file() {
        let err = validate_files(&["nonexistent.csv"]).unwrap_err();

        assert!(matches!(
            &err,
            ReportError::FileNotFound { path } if path == "nonexistent.csv"
        ));
        assert_eq!(err.to_string(), "Файл не найден: nonexistent.csv");
    }

    #[test]
    fn test_non_csv_file() {
        let temp_dir = TempDir::new().unwrap();
        let txt = create_test_file(&temp_dir, "test.txt", "some text");

        let err = validate_files(&[txt.clone()]).unwrap_err();

        assert!(matches!(&err, ReportError::InvalidFileType { path } if *path == txt));
        assert!(err.to_string().starts_with("Файл не является CSV: "));
        assert!(err.to_string().ends_with("test.txt"));
    }

    #[test]
    fn test_first_missing_file_is_reported() {
        let temp_dir = TempDir::new().unwrap();
        let good = create_test_file(&temp_dir, "good.csv", "a\n1");
        let missing_a = temp_dir.path().join("a.csv").to_string_lossy().to_string();
        let missing_b = temp_dir.path().join("b.csv").to_string_lossy().to_string();

        let err = validate_files(&[good, missing_a.clone(), missing_b]).unwrap_err();

        assert!(matches!(err, ReportError::FileNotFound { path } if path == missing_a));
    }

    #[test]
    fn test_checks_stop_at_first_failure() {
        let temp_dir = TempDir::new().unwrap();
        let txt = create_test_file(&temp_dir, "notes.txt", "x");

        // The wrong extension comes first, so the missing file is never reached
        let err = validate_files(&[txt.as_str(), "missing.csv"]).unwrap_err();

        assert!(matches!(err, ReportError::InvalidFileType { path } if path == txt));
    }
}
