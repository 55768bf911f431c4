//! Prelude module for convenient imports
//!
//! This module re-exports the most commonly used types from the crate.
//! Users can import everything they need with:
//!
//! ```
//! use kdpoint::prelude::*;
//! ```

pub use crate::{Axis, KdTree, KdTreeError, NeighborGatherer, NodeView, Point};
