//! The co-star graph: people, movies, and precomputed adjacency.
//!
//! The store is built once through [`GraphStoreBuilder`] (the only mutable
//! phase) and is immutable afterwards; queries never lock.

pub mod builder;
pub mod store;
pub mod types;

pub use builder::GraphStoreBuilder;
pub use store::GraphStore;
pub use types::{CoStar, Movie, Person};
