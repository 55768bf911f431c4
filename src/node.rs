//! Node storage for the kd-tree.
//!
//! Nodes live in a flat arena owned by the tree and refer to their children
//! through [`NodeId`] handles. Replacing a leaf with a new internal node only
//! rewires one child handle; the leaf itself never moves.

use crate::point::{Axis, Point};

/// Handle of a node inside the tree's arena
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub(crate) struct NodeId(usize);

impl NodeId {
    #[inline]
    pub(crate) const fn new(index: usize) -> Self {
        Self(index)
    }

    #[inline]
    pub(crate) const fn index(self) -> usize {
        self.0
    }
}

/// Side of an internal node a coordinate falls on
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Side {
    Left,
    Right,
}

impl Side {
    /// Strictly less than the split goes left, everything else goes right.
    #[inline]
    pub(crate) fn of(coord: f64, split: f64) -> Self {
        if coord < split { Self::Left } else { Self::Right }
    }
}

/// A node of the tree: either a split or a bucket of values at one point.
#[derive(Clone, Debug)]
pub(crate) enum Node<T> {
    Internal {
        split: f64,
        left: Option<NodeId>,
        right: Option<NodeId>,
    },
    Leaf {
        point: Point,
        values: Leaf<T>,
    },
}

impl<T> Node<T> {
    pub(crate) const fn internal(split: f64) -> Self {
        Self::Internal { split, left: None, right: None }
    }

    pub(crate) fn leaf(point: Point, value: T) -> Self {
        Self::Leaf { point, values: Leaf::Single(value) }
    }

    pub(crate) fn child(&self, side: Side) -> Option<NodeId> {
        match self {
            Self::Internal { left, right, .. } => match side {
                Side::Left => *left,
                Side::Right => *right,
            },
            Self::Leaf { .. } => None,
        }
    }

    /// Read-only view of this node; `depth` fixes the split axis.
    pub(crate) fn view(&self, depth: usize) -> NodeView<'_, T> {
        match self {
            Self::Internal { split, left, right } => NodeView::Internal {
                split: *split,
                axis: Axis::at_depth(depth),
                has_left: left.is_some(),
                has_right: right.is_some(),
            },
            Self::Leaf { point, values } => NodeView::Leaf {
                point: *point,
                values: values.as_slice(),
            },
        }
    }
}

/// Values bundled at one exact coordinate.
///
/// A leaf only becomes multi-valued once a second value lands on its point.
#[derive(Clone, Debug)]
pub(crate) enum Leaf<T> {
    Single(T),
    Multi(Vec<T>),
}

impl<T> Leaf<T> {
    pub(crate) fn push(&mut self, value: T) {
        *self = match std::mem::replace(self, Self::Multi(Vec::new())) {
            Self::Single(first) => Self::Multi(vec![first, value]),
            Self::Multi(mut values) => {
                values.push(value);
                Self::Multi(values)
            }
        };
    }

    pub(crate) fn as_slice(&self) -> &[T] {
        match self {
            Self::Single(value) => std::slice::from_ref(value),
            Self::Multi(values) => values,
        }
    }
}

/// Borrowed view of a node, handed to [`KdTree::traverse`](crate::KdTree::traverse) visitors.
#[derive(Debug)]
#[non_exhaustive]
pub enum NodeView<'a, T> {
    /// A split node
    Internal {
        /// Split value: coordinates strictly below it are on the left
        split: f64,
        /// Axis compared at this node, derived from its depth
        axis: Axis,
        /// Whether a left child exists
        has_left: bool,
        /// Whether a right child exists
        has_right: bool,
    },
    /// A leaf holding every value inserted at `point`
    Leaf {
        /// Exact stored coordinates
        point: Point,
        /// One value, or several for a multi-value leaf
        values: &'a [T],
    },
}

impl<T> NodeView<'_, T> {
    /// Returns true for leaf nodes
    pub const fn is_leaf(&self) -> bool {
        matches!(self, Self::Leaf { .. })
    }

    /// Returns true for leaves holding more than one value
    pub fn is_multi_value(&self) -> bool {
        matches!(self, Self::Leaf { values, .. } if values.len() > 1)
    }
}

impl<T> Clone for NodeView<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for NodeView<'_, T> {}
