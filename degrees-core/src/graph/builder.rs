//! Build-phase graph construction.
//!
//! Uses a mutable `ThreadedRodeo` while entities are added, then freezes it
//! into a read-only `RodeoReader` when `finish()` produces the store.

use lasso::ThreadedRodeo;

use crate::types::collections::SmallVec4;
use crate::types::{FxHashMap, MovieId, PersonId};

use super::store::GraphStore;
use super::types::{CoStar, Movie, Person};

/// Mutable builder for [`GraphStore`].
pub struct GraphStoreBuilder {
    interner: ThreadedRodeo,
    people: FxHashMap<PersonId, Person>,
    movies: FxHashMap<MovieId, Movie>,
    skipped_credits: usize,
}

impl GraphStoreBuilder {
    pub fn new() -> Self {
        Self {
            interner: ThreadedRodeo::default(),
            people: FxHashMap::default(),
            movies: FxHashMap::default(),
            skipped_credits: 0,
        }
    }

    /// Register a person under their dataset key. Re-registering a key
    /// keeps the first entry.
    pub fn add_person(&mut self, key: &str, name: &str, birth: Option<u16>) -> PersonId {
        let id = PersonId::new(self.interner.get_or_intern(key));
        self.people.entry(id).or_insert_with(|| Person {
            name: name.to_string(),
            birth,
            movies: Default::default(),
        });
        id
    }

    /// Register a movie under its dataset key. Re-registering a key keeps
    /// the first entry.
    pub fn add_movie(&mut self, key: &str, title: &str, year: Option<u16>) -> MovieId {
        let id = MovieId::new(self.interner.get_or_intern(key));
        self.movies.entry(id).or_insert_with(|| Movie {
            title: title.to_string(),
            year,
            stars: Default::default(),
        });
        id
    }

    /// Record that a person starred in a movie. Credits referencing unknown
    /// people or movies are skipped and counted; duplicates are ignored.
    /// Returns whether the credit was recorded.
    pub fn add_credit(&mut self, person_key: &str, movie_key: &str) -> bool {
        let person_id = self.interner.get(person_key).map(PersonId::new);
        let movie_id = self.interner.get(movie_key).map(MovieId::new);

        let recorded = match (person_id, movie_id) {
            (Some(person_id), Some(movie_id)) => {
                match (
                    self.people.contains_key(&person_id),
                    self.movies.get_mut(&movie_id),
                ) {
                    (true, Some(movie)) => {
                        if !movie.stars.contains(&person_id) {
                            movie.stars.push(person_id);
                        }
                        if let Some(person) = self.people.get_mut(&person_id) {
                            if !person.movies.contains(&movie_id) {
                                person.movies.push(movie_id);
                            }
                        }
                        true
                    }
                    _ => false,
                }
            }
            _ => false,
        };

        if !recorded {
            self.skipped_credits += 1;
        }
        recorded
    }

    /// Credits skipped so far because they referenced unknown ids.
    pub fn skipped_credits(&self) -> usize {
        self.skipped_credits
    }

    /// Build the name index and adjacency lists, freeze the interner, and
    /// produce the immutable store.
    pub fn finish(self) -> GraphStore {
        let Self {
            interner,
            people,
            movies,
            ..
        } = self;

        // Lower-cased display name -> ids, candidates ordered by dataset key.
        let mut name_index: FxHashMap<String, SmallVec4<PersonId>> = FxHashMap::default();
        for (&id, person) in &people {
            name_index
                .entry(person.name.to_lowercase())
                .or_default()
                .push(id);
        }
        for ids in name_index.values_mut() {
            ids.sort_by(|a, b| interner.resolve(&a.inner()).cmp(interner.resolve(&b.inner())));
            ids.dedup();
        }

        // Precomputed co-star adjacency: deduplicated (movie, person) pairs,
        // self-pairs excluded, sorted by (movie key, person key).
        let mut adjacency: FxHashMap<PersonId, Vec<CoStar>> = FxHashMap::default();
        let mut costar_edges = 0usize;
        for (&id, person) in &people {
            let mut edges: Vec<CoStar> = Vec::new();
            for &movie_id in &person.movies {
                let movie = &movies[&movie_id];
                for &costar in &movie.stars {
                    if costar != id {
                        edges.push(CoStar {
                            movie: movie_id,
                            person: costar,
                        });
                    }
                }
            }
            edges.sort_by(|a, b| {
                let a_key = (
                    interner.resolve(&a.movie.inner()),
                    interner.resolve(&a.person.inner()),
                );
                let b_key = (
                    interner.resolve(&b.movie.inner()),
                    interner.resolve(&b.person.inner()),
                );
                a_key.cmp(&b_key)
            });
            edges.dedup();
            costar_edges += edges.len();
            if !edges.is_empty() {
                adjacency.insert(id, edges);
            }
        }

        GraphStore {
            interner: interner.into_reader(),
            people,
            movies,
            name_index,
            adjacency,
            costar_edges,
        }
    }
}

impl Default for GraphStoreBuilder {
    fn default() -> Self {
        Self::new()
    }
}
