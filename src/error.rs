//! Error types for kd-tree operations.
//!
//! Input is never rejected: every coordinate and value is accepted. The only
//! error is an internal invariant violation, which means the insertion
//! algorithm itself is broken.

use thiserror::Error;

/// Internal invariant violations detected while mutating the tree.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum KdTreeError {
    /// A value was dispatched onto an occupied single-value leaf outside the
    /// collision path.
    #[error("internal kd-tree invariant violated: insertion into occupied leaf at depth {depth}")]
    OccupiedLeaf {
        /// Depth of the leaf that was hit.
        depth: usize,
    },

    /// A node handle pointed outside the node arena.
    #[error("internal kd-tree invariant violated: dangling node handle {index}")]
    DanglingNode {
        /// Raw index of the handle.
        index: usize,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages_are_distinguishable() {
        let occupied = KdTreeError::OccupiedLeaf { depth: 3 };
        assert_eq!(
            occupied.to_string(),
            "internal kd-tree invariant violated: insertion into occupied leaf at depth 3"
        );
        let dangling = KdTreeError::DanglingNode { index: 9 };
        assert!(dangling.to_string().contains("dangling node handle 9"));
        assert_ne!(occupied, dangling);
    }
}
