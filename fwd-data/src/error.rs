//! Error types for dataset loading.

use thiserror::Error;

/// The only failure a dataset explorer recognizes: the dataset could not
/// be fetched or parsed.
#[derive(Error, Debug)]
pub enum LoadError {
    /// The request never produced a response (network, CORS, bad URL, I/O).
    #[error("Failed to fetch dataset: {0}")]
    Fetch(String),

    /// The server answered with a non-success status.
    #[error("Dataset request returned HTTP {status}")]
    Status { status: u16 },

    /// The body was not a JSON array of records.
    #[error("Failed to parse dataset: {0}")]
    Parse(#[from] serde_json::Error),

    /// A record carried a year that is not an integer.
    #[error("Invalid year value: {0}")]
    InvalidYear(String),
}

/// Type alias for Results using LoadError
pub type Result<T> = std::result::Result<T, LoadError>;
