use thiserror::Error;

/// Errors for caller mistakes only.
///
/// Data-quality problems (malformed cells, missing columns, duplicate
/// ids) are never errors; they degrade to defaults or sentinels.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LeaderboardError {
    #[error("unknown sort field: {0}")]
    UnknownSortField(String),
    #[error("unknown sort direction: {0} (expected 'asc' or 'desc')")]
    UnknownDirection(String),
}

pub type Result<T> = std::result::Result<T, LeaderboardError>;
