//! Data-file discovery for the leaderboard data directory.

use std::path::{Path, PathBuf};

/// Canonical CSV data file name.
pub const CSV_FILE_NAME: &str = "leaderboard.csv";

/// XLSX name the upload layer also writes; decoding it is out of scope
/// here, so finding only this file counts as no data.
pub const XLSX_FILE_NAME: &str = "leaderboard.xlsx";

/// Locate the readable data file in `dir`, if any.
///
/// Returns `None` for a missing directory or a directory without the
/// CSV file; callers translate that into an empty input collection.
pub fn discover_data_file(dir: &Path) -> Option<PathBuf> {
    let csv_path = dir.join(CSV_FILE_NAME);
    if csv_path.is_file() {
        return Some(csv_path);
    }
    if dir.join(XLSX_FILE_NAME).is_file() {
        tracing::warn!(
            dir = %dir.display(),
            "found only {XLSX_FILE_NAME}; XLSX decoding is not supported, treating as no data"
        );
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_directory_is_no_data() {
        assert!(discover_data_file(Path::new("/nonexistent/data")).is_none());
    }

    #[test]
    fn finds_the_csv_file() {
        let dir = std::env::temp_dir().join("jam-ingest-discovery-test");
        std::fs::create_dir_all(&dir).expect("create temp dir");
        let csv_path = dir.join(CSV_FILE_NAME);
        std::fs::write(&csv_path, "name\nAda\n").expect("write csv");
        assert_eq!(discover_data_file(&dir), Some(csv_path.clone()));
        std::fs::remove_file(csv_path).ok();
    }
}
