//! CSV dataset loading.
//!
//! A dataset directory holds three header-bearing CSV files:
//! `people.csv` (id, name, birth), `movies.csv` (id, title, year) and
//! `stars.csv` (person_id, movie_id).

pub mod loader;
pub mod records;

pub use loader::{load_dataset, LoadReport};
pub use records::{MovieRecord, PersonRecord, StarRecord};
