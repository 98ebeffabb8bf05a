//! Dataset loading errors.

use super::error_code::{self, DegreesErrorCode};

/// Errors raised while loading the CSV dataset into a graph store.
///
/// Credits referencing unknown people or movies are NOT errors; they are
/// skipped and counted in the load report.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("dataset file not found: {path}")]
    MissingFile { path: String },

    #[error("malformed record in {path}: {source}")]
    Malformed {
        path: String,
        #[source]
        source: csv::Error,
    },
}

impl DegreesErrorCode for LoadError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::MissingFile { .. } => error_code::LOAD_MISSING_FILE,
            Self::Malformed { .. } => error_code::LOAD_MALFORMED,
        }
    }
}
