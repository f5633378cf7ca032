//! B-tree index implementation.
//!
//! # Components
//! - [`BTree`] - Owns the root and the minimum degree; search and insert
//! - [`Node`] - Keys plus owned children, read-only from outside the crate
//! - [`Iter`] - Lazy in-order walk over all keys
//! - [`TreeStats`] - Split and insert counters
//!
//! # Insertion
//! Insertion is top-down: any full node is split before the descent enters
//! it, so the node being inserted into always has room. Splitting the root
//! is the only way the tree grows taller, which keeps every leaf at the
//! same depth.

mod iter;
mod node;
mod stats;
mod tree;

pub use iter::Iter;
pub use node::Node;
pub use stats::TreeStats;
pub use tree::BTree;
