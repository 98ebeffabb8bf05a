//! Search engine errors.
//!
//! Both variants are internal invariant violations, never ordinary
//! outcomes: "not connected" is `Ok(None)` from the path finder, not an
//! error. Callers should surface these loudly instead of swallowing them.

use crate::types::PersonId;

use super::error_code::{self, DegreesErrorCode};

/// Internal defects detectable by the search engine.
#[derive(Debug, thiserror::Error)]
pub enum SearchError {
    /// `remove()` was called on an empty frontier. The driver loop must
    /// check `is_empty()` first.
    #[error("remove() called on an empty frontier")]
    EmptyFrontier,

    /// Path reconstruction could not find the explored node for a parent
    /// state. The explored set was not populated correctly.
    #[error("no explored node records a parent for state {state:?}")]
    BrokenParentChain { state: PersonId },
}

impl DegreesErrorCode for SearchError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::EmptyFrontier => error_code::SEARCH_EMPTY_FRONTIER,
            Self::BrokenParentChain { .. } => error_code::SEARCH_BROKEN_PARENT_CHAIN,
        }
    }
}
