//! Data structures for the co-star graph.
//! FxHashMap, SmallVec, and Spur-based ID types.

pub mod collections;
pub mod identifiers;

pub use collections::{FxHashMap, FxHashSet};
pub use identifiers::{MovieId, PersonId};
