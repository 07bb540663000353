use thiserror::Error;

/// Errors surfaced at the edges of the index: configuration and WKT input.
///
/// The tree algorithms themselves are infallible once a valid configuration
/// exists.
#[derive(Debug, Error, PartialEq)]
pub enum RTreeError {
    #[error("invalid configuration: min_entries {min_entries} must be at least 2 and at most half of max_entries {max_entries}")]
    InvalidConfig {
        max_entries: usize,
        min_entries: usize,
    },

    #[error("WKT parse error: {0}")]
    Wkt(String),
}

pub type RTreeResult<T> = Result<T, RTreeError>;
