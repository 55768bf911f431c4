//! Bounded collector for nearest-neighbor candidates.
//!
//! The gatherer keeps candidate leaves in a min-priority queue keyed by
//! squared distance, and counts the values those leaves carry. Once that
//! count exceeds the gather limit the gatherer reports itself full and the
//! search stops exploring far-side subtrees. This makes dense queries cheap
//! at the price of exactness: a full gatherer may miss closer points that sit
//! across a split it never crossed.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

/// Default running value count above which a gatherer is full
pub const DEFAULT_GATHER_LIMIT: usize = 50;

/// Heap entry: one leaf and its squared distance to the query point
#[derive(Debug)]
struct Candidate<'a, T> {
    distance_sq: f64,
    values: &'a [T],
}

impl<T> PartialEq for Candidate<'_, T> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<T> Eq for Candidate<'_, T> {}

impl<T> PartialOrd for Candidate<'_, T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T> Ord for Candidate<'_, T> {
    // Reversed so that BinaryHeap pops the closest leaf first
    fn cmp(&self, other: &Self) -> Ordering {
        other.distance_sq.total_cmp(&self.distance_sq)
    }
}

/// Result collector for a radius-bounded nearest-neighbor search.
///
/// Obtained from [`KdTree::gather`](crate::KdTree::gather). The search phase
/// has already run; the remaining work is draining leaves in ascending
/// distance order with [`into_values`](Self::into_values) or
/// [`drain_into`](Self::drain_into).
///
/// # Examples
/// ```
/// use kdpoint::KdTree;
///
/// let mut tree = KdTree::new();
/// tree.insert(0.0, 0.0, 'a');
/// tree.insert(3.0, 4.0, 'b');
/// tree.insert(3.0, 4.0, 'c');
///
/// let gatherer = tree.gather(0.0, 0.0, 10.0);
/// assert_eq!(gatherer.leaf_count(), 2);
/// assert_eq!(gatherer.value_count(), 3);
/// assert_eq!(gatherer.max_distance_sq(), Some(25.0));
///
/// // One leaf drained: only the closest value comes back
/// assert_eq!(gatherer.into_values(1), vec![&'a']);
/// ```
#[derive(Debug)]
pub struct NeighborGatherer<'a, T> {
    heap: BinaryHeap<Candidate<'a, T>>,
    radius_sq: f64,
    value_count: usize,
    max_distance_sq: Option<f64>,
    limit: usize,
}

impl<'a, T> NeighborGatherer<'a, T> {
    pub(crate) fn new(radius: f64, limit: usize) -> Self {
        Self {
            heap: BinaryHeap::new(),
            radius_sq: radius * radius,
            value_count: 0,
            max_distance_sq: None,
            limit,
        }
    }

    /// Offers a leaf at `distance_sq`; it is kept only when strictly inside the radius.
    pub(crate) fn offer(&mut self, distance_sq: f64, values: &'a [T]) {
        if !(distance_sq < self.radius_sq) {
            return;
        }
        self.value_count += values.len();
        self.max_distance_sq = Some(match self.max_distance_sq {
            Some(max) if max >= distance_sq => max,
            _ => distance_sq,
        });
        self.heap.push(Candidate { distance_sq, values });
    }

    /// Returns true once the running value count exceeds the gather limit.
    ///
    /// A full gatherer stops the search from crossing into far-side subtrees.
    #[inline]
    pub fn is_full(&self) -> bool {
        self.value_count > self.limit
    }

    /// Number of candidate leaves collected
    pub fn leaf_count(&self) -> usize {
        self.heap.len()
    }

    /// Total number of values carried by the candidate leaves
    pub fn value_count(&self) -> usize {
        self.value_count
    }

    /// Largest squared distance among the candidates, or `None` when nothing was found
    pub fn max_distance_sq(&self) -> Option<f64> {
        self.max_distance_sq
    }

    /// Returns true when no leaf fell inside the radius
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Drains up to `max_leaves` leaves, closest first, appending every value
    /// of each drained leaf to `results`.
    ///
    /// `max_leaves` bounds leaves, not values: a multi-value leaf contributes
    /// all of its values, so `results` may grow by more than `max_leaves`.
    /// Results are appended to the output vector (not cleared first).
    pub fn drain_into(mut self, max_leaves: usize, results: &mut Vec<&'a T>) {
        for _ in 0..max_leaves {
            let Some(candidate) = self.heap.pop() else {
                break;
            };
            results.extend(candidate.values);
        }
    }

    /// Drains up to `max_leaves` leaves into a new vector, closest first.
    ///
    /// See [`drain_into`](Self::drain_into) for how multi-value leaves count.
    pub fn into_values(self, max_leaves: usize) -> Vec<&'a T> {
        let mut results = Vec::new();
        self.drain_into(max_leaves, &mut results);
        results
    }
}
