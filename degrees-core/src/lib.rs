//! degrees-core: co-star graph engine
//!
//! This crate provides everything behind the `degrees` CLI:
//! - Types: interned `PersonId`/`MovieId` identifiers and fast collections
//! - Graph: immutable `GraphStore` with precomputed co-star adjacency
//! - Dataset: CSV loader for `people.csv` / `movies.csv` / `stars.csv`
//! - Resolve: display-name to identifier resolution with ambiguity sets
//! - Search: breadth-first shortest-path engine and path reconstruction

pub mod config;
pub mod dataset;
pub mod errors;
pub mod graph;
pub mod resolve;
pub mod search;
pub mod tracing;
pub mod types;

// Re-exports for convenience
pub use config::{CliOverrides, DataConfig, DegreesConfig, SearchConfig};
pub use dataset::{load_dataset, LoadReport};
pub use errors::{ConfigError, DegreesErrorCode, LoadError, QueryError, SearchError};
pub use graph::{CoStar, GraphStore, GraphStoreBuilder, Movie, Person};
pub use resolve::{CaseInsensitiveResolver, FirstMatchResolver, NameResolution, NameResolver};
pub use search::{
    reconstruct, CostarPath, ExploredSet, Frontier, PathFinder, PathStep, SearchNode,
    SearchOptions,
};
pub use types::{MovieId, PersonId};
