//! Spreadsheet ingestion: file discovery, CSV decoding, and the
//! raw-row to member loading path used by adapters.
//!
//! The core pipeline never opens files; this crate is the adapter that
//! materializes in-memory rows for it, and that translates "no data
//! file" into an empty input per the error-handling policy.

pub mod discovery;
pub mod error;
pub mod reader;

use std::path::Path;

use jam_model::Member;

pub use discovery::{CSV_FILE_NAME, XLSX_FILE_NAME, discover_data_file};
pub use error::{IngestError, Result};
pub use reader::{read_csv, read_csv_from};

/// Load normalized members from a data directory.
///
/// An absent directory or data file yields `Ok(vec![])`, a valid
/// zero-member collection giving zero stats and an empty ranking.
/// Only an unreadable or unparsable existing file is an error.
pub fn load_members(dir: &Path) -> Result<Vec<Member>> {
    let Some(path) = discover_data_file(dir) else {
        tracing::info!(dir = %dir.display(), "no data file found, loading empty leaderboard");
        return Ok(Vec::new());
    };
    let rows = read_csv(&path)?;
    Ok(jam_normalize::normalize(&rows))
}
