//! Incrementally built 2D point kd-tree.
//!
//! Points are inserted one at a time; there is no build step. Internal nodes
//! split on X at even depths and on Y at odd depths. A leaf only turns into a
//! split when a point with different coordinates lands on it; a point with the
//! same coordinates joins the leaf instead.
//!
//! The tree never removes or rebalances nodes. Split values come from the
//! midpoint of the two colliding points, so sorted insertion orders can give
//! deep trees. Insertion, queries and traversal therefore walk the tree with
//! explicit stacks rather than recursion.

use crate::error::KdTreeError;
use crate::gatherer::DEFAULT_GATHER_LIMIT;
use crate::node::{Node, NodeId, NodeView, Side};
use crate::point::{split_between, Axis, Point};

/// Incremental 2D point kd-tree storing values of type `T`.
///
/// Nodes are stored in a single arena vector and linked by index. The tree
/// only grows; use [`clear`](Self::clear) to start over while keeping the
/// allocation.
///
/// # Examples
/// ```
/// use kdpoint::KdTree;
///
/// let mut tree = KdTree::new();
/// tree.insert(0.0, 0.0, "A");
/// tree.insert(10.0, 0.0, "B");
/// tree.insert(0.0, 10.0, "C");
///
/// assert_eq!(tree.query(0.0, 0.0, 5.0, 10), vec![&"A"]);
/// assert_eq!(tree.query(0.0, 0.0, 15.0, 10).len(), 3);
/// ```
#[derive(Clone, Debug)]
pub struct KdTree<T> {
    /// Arena of all nodes
    pub(crate) nodes: Vec<Node<T>>,
    /// Root node, always internal once set
    pub(crate) root: Option<NodeId>,
    /// Number of inserted values
    pub(crate) num_values: usize,
    /// Running value count above which a query stops crossing splits
    pub(crate) gather_limit: usize,
}

impl<T> KdTree<T> {
    /// Creates a new empty tree
    ///
    /// # Example
    /// ```
    /// use kdpoint::KdTree;
    /// let tree: KdTree<u32> = KdTree::new();
    /// assert!(tree.is_empty());
    /// ```
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    /// Creates a new empty tree with node storage preallocated for `capacity` insertions
    ///
    /// This reserves room for `2 * capacity` nodes, which covers typical
    /// input. It is only a hint: a collision that the next axis cannot
    /// separate adds one extra split node per level, and storage grows as
    /// needed.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            nodes: Vec::with_capacity(capacity.saturating_mul(2)),
            root: None,
            num_values: 0,
            gather_limit: DEFAULT_GATHER_LIMIT,
        }
    }

    /// Replaces the gather limit used by queries.
    ///
    /// A query stops exploring far-side subtrees once it has collected more
    /// than `limit` values. Pass `usize::MAX` for an exact radius search.
    ///
    /// # Example
    /// ```
    /// use kdpoint::KdTree;
    /// let tree: KdTree<u32> = KdTree::new().with_gather_limit(usize::MAX);
    /// assert_eq!(tree.gather_limit(), usize::MAX);
    /// ```
    #[must_use]
    pub fn with_gather_limit(mut self, limit: usize) -> Self {
        self.gather_limit = limit;
        self
    }

    /// Returns the gather limit used by queries
    pub fn gather_limit(&self) -> usize {
        self.gather_limit
    }

    /// Returns the number of inserted values, duplicates included
    pub fn len(&self) -> usize {
        self.num_values
    }

    /// Returns whether the tree is empty
    pub fn is_empty(&self) -> bool {
        self.num_values == 0
    }

    /// Returns the number of nodes, internal and leaf
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Number of levels on the longest path from the root; 0 for an empty tree
    pub fn height(&self) -> usize {
        let mut height = 0;
        self.traverse(|_, depth| {
            height = height.max(depth + 1);
            true
        });
        height
    }

    /// Removes every node, keeping the allocation and the gather limit
    pub fn clear(&mut self) {
        self.nodes.clear();
        self.root = None;
        self.num_values = 0;
    }

    /// Inserts `value` at `(x, y)`.
    ///
    /// Coordinates are not validated. Inserting at coordinates that already
    /// hold a value adds the new value to the same leaf.
    ///
    /// # Panics
    /// Panics only if the tree's internal invariants are broken, which
    /// indicates a bug in this crate. See [`try_insert`](Self::try_insert).
    ///
    /// # Example
    /// ```
    /// use kdpoint::KdTree;
    /// let mut tree = KdTree::new();
    /// tree.insert(5.0, 5.0, "X1");
    /// tree.insert(5.0, 5.0, "X2");
    /// assert_eq!(tree.len(), 2);
    /// assert_eq!(tree.query(5.0, 5.0, 1.0, 10).len(), 2);
    /// ```
    pub fn insert(&mut self, x: f64, y: f64, value: T) {
        if let Err(err) = self.try_insert(x, y, value) {
            panic!("{err}");
        }
    }

    /// Inserts `value` at `(x, y)`, reporting internal invariant violations as errors.
    ///
    /// The first insertion into an empty tree creates an internal root split
    /// at `x`, then descends from it like every later insertion.
    ///
    /// # Errors
    /// Returns a [`KdTreeError`] if the node graph is found in a state the
    /// insertion algorithm can never produce. The tree may then be left with
    /// an unattached node, and the value is dropped.
    pub fn try_insert(&mut self, x: f64, y: f64, value: T) -> Result<(), KdTreeError> {
        let point = Point::new(x, y);
        let root = match self.root {
            Some(root) => root,
            None => {
                let root = self.push_node(Node::internal(x));
                self.root = Some(root);
                root
            }
        };
        self.insert_below(root, 0, point, value)?;
        self.num_values += 1;
        Ok(())
    }

    /// Descends from the internal node `start` at `depth` and stores the point.
    fn insert_below(
        &mut self,
        start: NodeId,
        depth: usize,
        point: Point,
        value: T,
    ) -> Result<(), KdTreeError> {
        let mut node = start;
        let mut depth = depth;

        loop {
            let split = self.split_of(node, depth)?;
            let side = Side::of(point.coord(Axis::at_depth(depth)), split);

            let Some(child) = self.node(node)?.child(side) else {
                let leaf = self.push_node(Node::leaf(point, value));
                self.attach(node, side, leaf, depth)?;
                return Ok(());
            };

            match self.node_mut(child)? {
                Node::Internal { .. } => {
                    node = child;
                    depth += 1;
                }
                Node::Leaf { point: stored, values } if stored.coincides(point) => {
                    values.push(value);
                    return Ok(());
                }
                Node::Leaf { point: stored, .. } => {
                    // Split on the axis of the level below, between the two points
                    let stored = *stored;
                    let axis = Axis::at_depth(depth + 1);
                    let fork = self.push_node(Node::internal(split_between(
                        stored.coord(axis),
                        point.coord(axis),
                    )));
                    self.replace_child(node, side, fork, depth)?;

                    let stored_side = Side::of(stored.coord(axis), self.split_of(fork, depth + 1)?);
                    self.attach(fork, stored_side, child, depth + 1)?;

                    node = fork;
                    depth += 1;
                }
            }
        }
    }

    /// Pre-order walk over every node: a node, then its left subtree, then its right.
    ///
    /// The visitor receives a [`NodeView`] and the node depth (the root is at
    /// depth 0). Returning `false` skips the children of that node; the walk
    /// continues with the remaining nodes.
    ///
    /// # Example
    /// ```
    /// use kdpoint::{KdTree, NodeView};
    ///
    /// let mut tree = KdTree::new();
    /// tree.insert(1.0, 1.0, 'a');
    /// tree.insert(2.0, 3.0, 'b');
    ///
    /// let mut leaves = Vec::new();
    /// tree.traverse(|node, depth| {
    ///     if let NodeView::Leaf { values, .. } = node {
    ///         leaves.push((depth, values.to_vec()));
    ///     }
    ///     true
    /// });
    /// assert_eq!(leaves, vec![(2, vec!['a']), (2, vec!['b'])]);
    /// ```
    pub fn traverse<F>(&self, mut visitor: F)
    where
        F: FnMut(NodeView<'_, T>, usize) -> bool,
    {
        let mut stack: Vec<(NodeId, usize)> = self.root.map(|root| (root, 0)).into_iter().collect();

        while let Some((id, depth)) = stack.pop() {
            let node = &self.nodes[id.index()];
            if !visitor(node.view(depth), depth) {
                continue;
            }
            if let Node::Internal { left, right, .. } = node {
                if let Some(right) = right {
                    stack.push((*right, depth + 1));
                }
                if let Some(left) = left {
                    stack.push((*left, depth + 1));
                }
            }
        }
    }

    // --- Private helpers ---

    fn push_node(&mut self, node: Node<T>) -> NodeId {
        let id = NodeId::new(self.nodes.len());
        self.nodes.push(node);
        id
    }

    fn node(&self, id: NodeId) -> Result<&Node<T>, KdTreeError> {
        self.nodes
            .get(id.index())
            .ok_or(KdTreeError::DanglingNode { index: id.index() })
    }

    fn node_mut(&mut self, id: NodeId) -> Result<&mut Node<T>, KdTreeError> {
        self.nodes
            .get_mut(id.index())
            .ok_or(KdTreeError::DanglingNode { index: id.index() })
    }

    /// Split value of a node that must be internal
    fn split_of(&self, id: NodeId, depth: usize) -> Result<f64, KdTreeError> {
        match self.node(id)? {
            Node::Internal { split, .. } => Ok(*split),
            Node::Leaf { .. } => Err(KdTreeError::OccupiedLeaf { depth }),
        }
    }

    /// Fills an empty child slot of an internal node
    fn attach(
        &mut self,
        parent: NodeId,
        side: Side,
        child: NodeId,
        depth: usize,
    ) -> Result<(), KdTreeError> {
        let slot = self.child_slot(parent, side, depth)?;
        if slot.is_some() {
            return Err(KdTreeError::OccupiedLeaf { depth: depth + 1 });
        }
        *slot = Some(child);
        Ok(())
    }

    /// Overwrites an occupied child slot of an internal node
    fn replace_child(
        &mut self,
        parent: NodeId,
        side: Side,
        child: NodeId,
        depth: usize,
    ) -> Result<(), KdTreeError> {
        let slot = self.child_slot(parent, side, depth)?;
        *slot = Some(child);
        Ok(())
    }

    fn child_slot(
        &mut self,
        parent: NodeId,
        side: Side,
        depth: usize,
    ) -> Result<&mut Option<NodeId>, KdTreeError> {
        match self.node_mut(parent)? {
            Node::Internal { left, right, .. } => Ok(match side {
                Side::Left => left,
                Side::Right => right,
            }),
            Node::Leaf { .. } => Err(KdTreeError::OccupiedLeaf { depth }),
        }
    }
}

impl<T> Default for KdTree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Extend<(f64, f64, T)> for KdTree<T> {
    fn extend<I: IntoIterator<Item = (f64, f64, T)>>(&mut self, iter: I) {
        for (x, y, value) in iter {
            self.insert(x, y, value);
        }
    }
}

impl<T> FromIterator<(f64, f64, T)> for KdTree<T> {
    fn from_iter<I: IntoIterator<Item = (f64, f64, T)>>(iter: I) -> Self {
        let mut tree = Self::new();
        tree.extend(iter);
        tree
    }
}
