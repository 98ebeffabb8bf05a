//! Graph node and edge types.

use crate::types::collections::SmallVec8;
use crate::types::{MovieId, PersonId};

/// A person and the movies they appeared in.
#[derive(Debug, Clone)]
pub struct Person {
    pub name: String,
    pub birth: Option<u16>,
    pub movies: SmallVec8<MovieId>,
}

/// A movie and the people who starred in it.
#[derive(Debug, Clone)]
pub struct Movie {
    pub title: String,
    pub year: Option<u16>,
    pub stars: SmallVec8<PersonId>,
}

/// One co-star edge: `person` appeared together with the owner of the
/// adjacency list in `movie`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CoStar {
    pub movie: MovieId,
    pub person: PersonId,
}
