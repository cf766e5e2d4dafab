use thiserror::Error;

/// User-input validation failures, surfaced to the caller before any
/// aggregation runs. Distinct from an empty or missing data set.
#[derive(Debug, Error)]
pub(crate) enum AppError {
    #[error("Invalid date \"{input}\" (expected YYYYMMDD or YYYY-MM-DD)")]
    InvalidDate { input: String },

    #[error("Invalid timezone: {input}")]
    InvalidTimezone { input: String },
}

/// Failures while loading the activity log snapshot. None of these are
/// fatal: the query surface degrades them to empty results.
#[derive(Debug, Error)]
pub(crate) enum StoreError {
    #[error("activity log not found")]
    Missing,

    #[error("failed to read activity log: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed activity log: {0}")]
    Parse(String),
}
