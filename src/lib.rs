//! # kdpoint - Incremental 2D point KD-tree
//!
//! A Rust library providing an incrementally built KD-tree over 2D points,
//! with radius-bounded, count-limited nearest-neighbor queries.
//!
//! ## Features
//!
//! - **Incremental Insertion**: No build step; insert points at any time
//! - **Multi-Value Leaves**: Values inserted at identical coordinates share one leaf
//! - **Bounded Neighbor Queries**: Radius cutoff plus a cap on the number of leaves returned
//! - **Bounded Work**: Dense regions stop the search early once enough candidates are found
//! - **Generic Values**: Store any `T` alongside each point
//!
//! ## Quick Start
//!
//! ```rust
//! use kdpoint::prelude::*;
//!
//! // Create a new tree
//! let mut tree = KdTree::new();
//!
//! // Insert values at 2D points (x, y, value)
//! tree.insert(0.0, 0.0, "A");
//! tree.insert(10.0, 0.0, "B");
//! tree.insert(0.0, 10.0, "C");
//!
//! // Values strictly within radius 5 of the origin, at most 10 leaves
//! let near = tree.query(0.0, 0.0, 5.0, 10);
//! assert_eq!(near, vec![&"A"]);
//!
//! // A wider radius finds all three, closest first
//! let near = tree.query(0.0, 0.0, 15.0, 10);
//! assert_eq!(near.len(), 3);
//! assert_eq!(near[0], &"A");
//! ```
//!
//! ## How It Works
//!
//! Internal nodes split on X at even depths and on Y at odd depths. The split
//! axis is never stored; it follows from the depth. A new point descends to an
//! empty slot and becomes a leaf there. When it lands on an existing leaf with
//! different coordinates, the leaf is replaced by a new internal node splitting
//! at the midpoint of the two points on the next axis, and both points go
//! below it. When the coordinates are identical the value joins the leaf.
//!
//! Queries search the near side of every split first. The far side is only
//! visited while no more than [`DEFAULT_GATHER_LIMIT`] values (configurable with
//! [`KdTree::with_gather_limit`]) have been collected and the split line lies
//! within the radius. In very dense regions a query can thus miss some points
//! across a split. The limit bounds the work per query.
//!
//! The tree is designed for the rebuild-per-frame pattern of simulations:
//! insert every entity, run one query per entity, then [`KdTree::clear`] and
//! start over.

pub mod error;
pub mod gatherer;
pub mod kdtree;
pub mod node;
pub mod point;
pub mod prelude;
mod queries;

#[cfg(test)]
mod integration_test;
#[cfg(test)]
mod property_tests;

pub use error::KdTreeError;
pub use gatherer::{DEFAULT_GATHER_LIMIT, NeighborGatherer};
pub use kdtree::KdTree;
pub use node::NodeView;
pub use point::{Axis, Point};
