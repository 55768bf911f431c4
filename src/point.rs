//! Point coordinates and the depth-based split axis.

/// A 2D point stored in the tree.
///
/// Coordinates are not validated: NaN, infinities and negative values are
/// accepted as-is.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Point {
    /// X coordinate
    pub x: f64,
    /// Y coordinate
    pub y: f64,
}

impl Point {
    /// Creates a point from its coordinates
    #[inline]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Returns the coordinate on the given axis
    #[inline]
    pub const fn coord(&self, axis: Axis) -> f64 {
        match axis {
            Axis::X => self.x,
            Axis::Y => self.y,
        }
    }

    /// Squared Euclidean distance to another point
    #[inline]
    pub fn distance_sq(&self, other: Point) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        dx * dx + dy * dy
    }

    /// Returns true when no split on either axis can tell the two points apart.
    ///
    /// For non-NaN coordinates this is plain equality (`-0.0` and `0.0` coincide).
    /// Splits send NaN right, so a NaN coordinate only fails to separate from
    /// another NaN or from `+inf`.
    #[inline]
    pub fn coincides(&self, other: Point) -> bool {
        !separable(self.x, other.x) && !separable(self.y, other.y)
    }
}

/// Returns true when a split on this axis can put `a` and `b` on different sides.
#[inline]
pub(crate) fn separable(a: f64, b: f64) -> bool {
    match (a.is_nan(), b.is_nan()) {
        (false, false) => a < b || b < a,
        (true, true) => false,
        (true, false) => b < f64::INFINITY,
        (false, true) => a < f64::INFINITY,
    }
}

/// Split value for two colliding coordinates on one axis.
///
/// Normally the midpoint. When rounding or overflow makes the midpoint
/// unable to separate two distinct coordinates, the larger one is used:
/// the smaller then compares strictly less and the larger compares equal.
/// Against a NaN the split is the next float above the other coordinate,
/// which then goes left while the NaN goes right.
pub(crate) fn split_between(a: f64, b: f64) -> f64 {
    match (a.is_nan(), b.is_nan()) {
        (true, false) => return b.next_up(),
        (false, true) => return a.next_up(),
        _ => {}
    }
    let mid = (a + b) / 2.0;
    if !separable(a, b) {
        return mid;
    }
    let (lo, hi) = if a < b { (a, b) } else { (b, a) };
    if lo < mid && !(hi < mid) { mid } else { hi }
}

/// Coordinate dimension compared at an internal node.
///
/// The axis is never stored in the tree. It follows from the node depth:
/// even depths split on X, odd depths on Y.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Axis {
    /// Horizontal axis (even depths)
    X,
    /// Vertical axis (odd depths)
    Y,
}

impl Axis {
    /// Axis used by a node at `depth` from the root
    #[inline]
    pub const fn at_depth(depth: usize) -> Self {
        if depth % 2 == 0 { Self::X } else { Self::Y }
    }
}
