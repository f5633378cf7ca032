//! interchange-btree - An in-memory B-tree index.
//!
//! # Architecture
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                            BTree<K>                             │
//! │        min_degree (t) + root + len + stats                      │
//! ├─────────────────────────────────────────────────────────────────┤
//! │  insert(k) ──► root full? ──► grow: new root, split old root    │
//! │                    │                                            │
//! │                    ▼                                            │
//! │            insert_non_full ──► split full child, then descend   │
//! │                                                                 │
//! │  search(k) ──► read-only descent, (node, index) or None         │
//! │  keys_in_order() ──► lazy stack-driven in-order walk            │
//! ├─────────────────────────────────────────────────────────────────┤
//! │                           Node<K>                               │
//! │     keys: t-1 ..= 2t-1 (root: 0 ..= 2t-1)                       │
//! │     children: keys + 1 (internal) or 0 (leaf)                   │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//! - [`common`] - Shared primitives (MinDegree, Error, config)
//! - [`index`] - Index structures (B-tree)
//!
//! # Quick Start
//! ```
//! use interchange_btree::BTree;
//!
//! let mut tree = BTree::new(3).unwrap();
//! tree.extend([40, 10, 30, 20, 50, 60]);
//!
//! assert!(tree.contains(&30));
//! let keys: Vec<_> = tree.keys_in_order().copied().collect();
//! assert_eq!(keys, vec![10, 20, 30, 40, 50, 60]);
//! ```

pub mod common;
pub mod error;
pub mod index;

// Re-export commonly used items at crate root for convenience
pub use common::config::DEFAULT_MIN_DEGREE;
pub use common::MinDegree;
pub use error::{Error, Result};

pub use index::btree::{BTree, Iter, Node, TreeStats};
