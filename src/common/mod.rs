//! Common types shared across the index.
//!
//! This module contains the primitives the tree is configured with:
//! - Configuration constants
//! - Error types
//! - The validated [`MinDegree`] branching parameter

pub mod config;
mod min_degree;

pub use crate::error::{Error, Result};
pub use min_degree::MinDegree;
