//! Re-exports of performance-oriented collection types.

pub use rustc_hash::{FxHashMap, FxHashSet};
pub use smallvec::SmallVec;

/// SmallVec optimized for ambiguity sets (usually 1 id per name).
pub type SmallVec4<T> = SmallVec<[T; 4]>;

/// SmallVec optimized for credit lists (casts in `stars.csv` are small).
pub type SmallVec8<T> = SmallVec<[T; 8]>;
