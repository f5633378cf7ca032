//! Configuration constants for the B-tree index.

/// Smallest legal minimum degree.
///
/// A split leaves `t - 1` keys on each side of the median, so anything
/// below 2 would produce empty nodes.
pub const MIN_DEGREE_FLOOR: usize = 2;

/// Minimum degree used by `BTree::default()`.
///
/// # Node Capacity
/// With `t = 3`:
/// - Max keys per node: `2t - 1 = 5`
/// - Min keys per non-root node: `t - 1 = 2`
/// - Max children per internal node: `2t = 6`
pub const DEFAULT_MIN_DEGREE: usize = 3;
