//! Radius-bounded nearest-neighbor queries for [`KdTree`].
//!
//! A query runs in two phases. The search phase walks the tree near side
//! first and offers every leaf strictly inside the radius to a
//! [`NeighborGatherer`]. The extraction phase drains the gatherer's leaves in
//! ascending distance order.

use crate::gatherer::NeighborGatherer;
use crate::kdtree::KdTree;
use crate::node::{Node, NodeId};
use crate::point::{Axis, Point};

/// Pending work in the search phase
enum Step {
    /// Evaluate a node
    Visit { node: NodeId, depth: usize },
    /// Decide on the far child of an internal node once its near side is done
    Far { node: NodeId, depth: usize, gap: f64 },
}

impl<T> KdTree<T> {
    /// Runs the search phase and returns the collector holding the candidates.
    ///
    /// Every leaf whose squared distance to `(x, y)` is strictly below
    /// `radius²` is collected. After the near side of a split has been
    /// searched, the far side is searched only if the gatherer is not yet
    /// full and the split line is within `radius` of the query point. The
    /// search is therefore approximate once more than
    /// [`gather_limit`](Self::gather_limit) values have been collected.
    ///
    /// The radius is not validated.
    pub fn gather(&self, x: f64, y: f64, radius: f64) -> NeighborGatherer<'_, T> {
        let query = Point::new(x, y);
        let mut gatherer = NeighborGatherer::new(radius, self.gather_limit);
        let mut stack: Vec<Step> = self
            .root
            .map(|node| Step::Visit { node, depth: 0 })
            .into_iter()
            .collect();

        while let Some(step) = stack.pop() {
            match step {
                Step::Visit { node, depth } => match &self.nodes[node.index()] {
                    Node::Leaf { point, values } => {
                        gatherer.offer(point.distance_sq(query), values.as_slice());
                    }
                    Node::Internal { split, left, right } => {
                        let coord = query.coord(Axis::at_depth(depth));
                        let (near, far) = if coord < *split { (left, right) } else { (right, left) };
                        if let Some(far) = far {
                            stack.push(Step::Far { node: *far, depth: depth + 1, gap: (coord - split).abs() });
                        }
                        if let Some(near) = near {
                            stack.push(Step::Visit { node: *near, depth: depth + 1 });
                        }
                    }
                },
                Step::Far { node, depth, gap } => {
                    if !gatherer.is_full() && gap <= radius {
                        stack.push(Step::Visit { node, depth });
                    }
                }
            }
        }

        gatherer
    }

    /// Queries for values near `(x, y)`, closest first.
    ///
    /// Only values strictly within `radius` are returned. At most `max_count`
    /// leaves are drained from the candidates; every value of a drained leaf is
    /// returned, so values inserted at the same coordinates come back together
    /// and the result can be longer than `max_count`.
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
    /// let near = tree.query(0.0, 0.0, 15.0, 10);
    /// assert_eq!(near.len(), 3);
    /// assert_eq!(near[0], &"A"); // closest first, B and C tie
    /// ```
    pub fn query(&self, x: f64, y: f64, radius: f64, max_count: usize) -> Vec<&T> {
        let mut results = Vec::new();
        self.query_into(x, y, radius, max_count, &mut results);
        results
    }

    /// Queries for values near `(x, y)`, appending them to `results`.
    ///
    /// Same as [`query`](Self::query); results are appended to the output
    /// vector (not cleared first), so one vector can serve many queries.
    ///
    /// # Examples
    /// ```
    /// use kdpoint::KdTree;
    ///
    /// let tree: KdTree<u32> = (0..10).map(|i| (f64::from(i), 0.0, i)).collect();
    ///
    /// let mut results = Vec::new();
    /// for i in 0..10 {
    ///     results.clear();
    ///     tree.query_into(f64::from(i), 0.0, 1.5, 3, &mut results);
    ///     assert_eq!(results[0], &i);
    /// }
    /// ```
    pub fn query_into<'a>(
        &'a self,
        x: f64,
        y: f64,
        radius: f64,
        max_count: usize,
        results: &mut Vec<&'a T>,
    ) {
        if max_count == 0 || self.root.is_none() {
            return;
        }
        self.gather(x, y, radius).drain_into(max_count, results);
    }

    /// Queries for the value closest to `(x, y)` strictly within `radius`.
    ///
    /// If the closest leaf holds several values, the first inserted one is
    /// returned.
    ///
    /// # Examples
    /// ```
    /// use kdpoint::KdTree;
    ///
    /// let mut tree = KdTree::new();
    /// tree.insert(0.0, 0.0, 'a');
    /// tree.insert(2.0, 2.0, 'b');
    ///
    /// assert_eq!(tree.query_nearest(1.8, 1.9, 5.0), Some(&'b'));
    /// assert_eq!(tree.query_nearest(9.0, 9.0, 1.0), None);
    /// ```
    pub fn query_nearest(&self, x: f64, y: f64, radius: f64) -> Option<&T> {
        self.query(x, y, radius, 1).into_iter().next()
    }
}
