//! Minimum degree (branching parameter) type.

use std::fmt;

use super::config::{DEFAULT_MIN_DEGREE, MIN_DEGREE_FLOOR};
use crate::error::{Error, Result};

/// The minimum degree `t` of a B-tree.
///
/// Every non-root node holds between `t - 1` and `2t - 1` keys and, if
/// internal, between `t` and `2t` children. A `MinDegree` can only be
/// built through [`MinDegree::new`], so holding one means `t >= 2`.
///
/// # Example
/// ```
/// use interchange_btree::MinDegree;
///
/// let t = MinDegree::new(3).unwrap();
/// assert_eq!(t.max_keys(), 5);
/// assert_eq!(t.min_keys(), 2);
/// assert!(MinDegree::new(1).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MinDegree(usize);

impl MinDegree {
    /// Validate and wrap a minimum degree.
    ///
    /// # Errors
    /// Returns [`Error::InvalidMinDegree`] if `t < 2`.
    pub fn new(t: usize) -> Result<Self> {
        if t < MIN_DEGREE_FLOOR {
            return Err(Error::InvalidMinDegree(t));
        }
        Ok(MinDegree(t))
    }

    /// The raw value of `t`.
    #[inline]
    pub fn get(&self) -> usize {
        self.0
    }

    /// Maximum keys in any node (`2t - 1`). A node at this size is full.
    #[inline]
    pub fn max_keys(&self) -> usize {
        2 * self.0 - 1
    }

    /// Minimum keys in a non-root node (`t - 1`).
    #[inline]
    pub fn min_keys(&self) -> usize {
        self.0 - 1
    }

    /// Maximum children of an internal node (`2t`).
    #[inline]
    pub fn max_children(&self) -> usize {
        2 * self.0
    }

    /// Minimum children of a non-root internal node (`t`).
    #[inline]
    pub fn min_children(&self) -> usize {
        self.0
    }
}

impl Default for MinDegree {
    fn default() -> Self {
        MinDegree(DEFAULT_MIN_DEGREE)
    }
}

impl TryFrom<usize> for MinDegree {
    type Error = Error;

    fn try_from(t: usize) -> Result<Self> {
        MinDegree::new(t)
    }
}

impl fmt::Display for MinDegree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "t={}", self.0)
    }
}
