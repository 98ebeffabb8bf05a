//! Raw CSV row shapes.

use serde::Deserialize;

/// Row of `people.csv`. `birth` may be empty.
#[derive(Debug, Clone, Deserialize)]
pub struct PersonRecord {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub birth: String,
}

/// Row of `movies.csv`. `year` may be empty.
#[derive(Debug, Clone, Deserialize)]
pub struct MovieRecord {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub year: String,
}

/// Row of `stars.csv`.
#[derive(Debug, Clone, Deserialize)]
pub struct StarRecord {
    pub person_id: String,
    pub movie_id: String,
}
