//! Balanced k-d tree with exact k-nearest-neighbor queries.
//!
//! The tree partitions normalized samples on rotating feature axes
//! (`axis = depth % dims`), choosing the median at every level so the depth
//! stays logarithmic. Queries keep a bounded worst-first candidate set and
//! prune any subtree whose splitting hyperplane already lies further away
//! than the worst candidate — a pruning rule that trades nothing for speed:
//! the reported neighbors are always the true k nearest.
//!
//! ```text
//! KdTree::build()
//!   └─ recursive median split   (tree.rs)
//! KdTree::k_nearest()
//!   ├─ CandidateSet             (candidates.rs)
//!   ├─ euclidean()              (distance.rs)
//!   └─ near-first descent + hyperplane pruning
//! ```
//!
//! The tree is built once from the full training set and is immutable
//! afterward; queries are read-only, so a built tree can be shared freely
//! across threads.

pub mod error;
pub mod tree;

pub(crate) mod candidates;
pub(crate) mod distance;

pub use error::KdTreeError;
pub use tree::{KdTree, Neighbor};
