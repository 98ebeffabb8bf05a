//! Breadth-first shortest-path search over the co-star graph.

pub mod engine;
pub mod frontier;
pub mod node;
pub mod path;

pub use engine::{PathFinder, SearchOptions};
pub use frontier::{ExploredSet, Frontier};
pub use node::SearchNode;
pub use path::{reconstruct, CostarPath, PathStep};
