//! Top-level query errors.
//! Aggregates subsystem errors via `From` conversions.

use super::error_code::{self, DegreesErrorCode};
use super::{ConfigError, LoadError, SearchError};

/// Errors that can occur while answering one degrees query end to end:
/// configuration, dataset load, search, and interface I/O.
#[derive(Debug, thiserror::Error)]
pub enum QueryError {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("dataset error: {0}")]
    Load(#[from] LoadError),

    #[error("search error: {0}")]
    Search(#[from] SearchError),

    #[error("input/output error: {0}")]
    Io(#[from] std::io::Error),
}

impl DegreesErrorCode for QueryError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Config(e) => e.error_code(),
            Self::Load(e) => e.error_code(),
            Self::Search(e) => e.error_code(),
            Self::Io(_) => error_code::IO,
        }
    }
}
