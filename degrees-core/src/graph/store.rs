//! The immutable, query-side graph store.

use lasso::RodeoReader;

use crate::types::collections::SmallVec4;
use crate::types::{FxHashMap, MovieId, PersonId};

use super::types::{CoStar, Movie, Person};

/// Read-only co-star graph.
///
/// Holds entities, the lower-cased name index, and adjacency precomputed at
/// build time: for every person, the deduplicated `(movie, person)` pairs of
/// everyone they shared a movie with, sorted by `(movie key, person key)` so
/// tie-breaks among equally short paths are deterministic.
///
/// All accessors are total: absent identifiers yield `None` or the empty
/// slice instead of panicking.
#[derive(Debug)]
pub struct GraphStore {
    pub(super) interner: RodeoReader,
    pub(super) people: FxHashMap<PersonId, Person>,
    pub(super) movies: FxHashMap<MovieId, Movie>,
    pub(super) name_index: FxHashMap<String, SmallVec4<PersonId>>,
    pub(super) adjacency: FxHashMap<PersonId, Vec<CoStar>>,
    pub(super) costar_edges: usize,
}

impl GraphStore {
    /// Every co-star of `person`, one entry per `(movie, person)` pair.
    /// Absent identifiers yield the empty slice.
    pub fn neighbors(&self, person: PersonId) -> &[CoStar] {
        self.adjacency
            .get(&person)
            .map(|v| v.as_slice())
            .unwrap_or(&[])
    }

    pub fn person(&self, id: PersonId) -> Option<&Person> {
        self.people.get(&id)
    }

    pub fn movie(&self, id: MovieId) -> Option<&Movie> {
        self.movies.get(&id)
    }

    pub fn contains_person(&self, id: PersonId) -> bool {
        self.people.contains_key(&id)
    }

    /// Resolve a person identifier back to its dataset key.
    pub fn person_key(&self, id: PersonId) -> &str {
        self.interner.resolve(&id.inner())
    }

    /// Resolve a movie identifier back to its dataset key.
    pub fn movie_key(&self, id: MovieId) -> &str {
        self.interner.resolve(&id.inner())
    }

    /// Ids registered under a lower-cased display name.
    /// More than one id means the name is ambiguous.
    pub fn lookup_name(&self, lowercased: &str) -> &[PersonId] {
        self.name_index
            .get(lowercased)
            .map(|v| v.as_slice())
            .unwrap_or(&[])
    }

    pub fn person_count(&self) -> usize {
        self.people.len()
    }

    pub fn movie_count(&self) -> usize {
        self.movies.len()
    }

    /// Total directed co-star edges across all adjacency lists.
    pub fn costar_edge_count(&self) -> usize {
        self.costar_edges
    }
}
