//! Error types for the B-tree index.

use thiserror::Error;

/// Result of the fallible constructors ([`BTree::new`](crate::BTree::new),
/// [`MinDegree::new`](crate::MinDegree::new)).
pub type Result<T> = std::result::Result<T, Error>;

/// All possible errors raised by the index.
///
/// The tree itself never fails once built: a search miss is `None` and
/// duplicate keys are stored like any other key. The only failure is
/// handing the constructor a configuration it cannot honor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Error {
    /// The minimum degree is below 2.
    ///
    /// With `t < 2` a split would leave nodes with zero keys, so the
    /// value is rejected rather than clamped.
    #[error("invalid minimum degree {0}: must be at least 2")]
    InvalidMinDegree(usize),
}
