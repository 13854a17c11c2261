//! Error types for spreadsheet ingestion.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while decoding a data file.
///
/// An absent data file is deliberately NOT an error: the loader
/// translates it into an empty row collection, which the core treats
/// as a valid zero-member input.
#[derive(Debug, Error)]
pub enum IngestError {
    /// Failed to read the data file.
    #[error("failed to read file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to parse the CSV document.
    #[error("failed to parse CSV {path}: {source}")]
    CsvParse {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
}

/// Result type for ingestion operations.
pub type Result<T> = std::result::Result<T, IngestError>;
