//! Display-name to identifier resolution.
//!
//! Resolution is a pluggable strategy so the search core never blocks on
//! user input: the store answers with an identifier or an ambiguity set,
//! and whoever owns the interface decides how to narrow the set down.

use crate::graph::GraphStore;
use crate::types::PersonId;

/// Outcome of resolving a typed display name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NameResolution {
    /// Exactly one person carries this name.
    Match(PersonId),
    /// Several people share this name; candidates are ordered by dataset
    /// key, so the set is deterministic.
    Ambiguous(Vec<PersonId>),
    /// No person carries this name.
    NotFound,
}

/// Strategy resolving a display name to a person identifier.
pub trait NameResolver {
    fn resolve(&self, store: &GraphStore, name: &str) -> NameResolution;
}

/// Case-insensitive lookup against the store's name index.
#[derive(Debug, Clone, Copy, Default)]
pub struct CaseInsensitiveResolver;

impl NameResolver for CaseInsensitiveResolver {
    fn resolve(&self, store: &GraphStore, name: &str) -> NameResolution {
        let ids = store.lookup_name(&name.trim().to_lowercase());
        match ids {
            [] => NameResolution::NotFound,
            [id] => NameResolution::Match(*id),
            many => NameResolution::Ambiguous(many.to_vec()),
        }
    }
}

/// Non-interactive policy: an ambiguous name resolves to the candidate
/// with the smallest dataset key.
#[derive(Debug, Clone, Copy, Default)]
pub struct FirstMatchResolver;

impl NameResolver for FirstMatchResolver {
    fn resolve(&self, store: &GraphStore, name: &str) -> NameResolution {
        match CaseInsensitiveResolver.resolve(store, name) {
            NameResolution::Ambiguous(candidates) => NameResolution::Match(candidates[0]),
            other => other,
        }
    }
}
