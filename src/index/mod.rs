//! Index structures.
//!
//! - [`btree`] - In-memory B-tree with proactive splitting

pub mod btree;
