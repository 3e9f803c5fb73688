pub use kurbo::{Affine, BezPath, PathEl, Point, Rect, Vec2};

/// Closed numeric interval `[lo, hi]` sampled by linear interpolation.
///
/// `lo > hi` is accepted and simply samples the same interval in reverse.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Span {
    /// Value at `t = 0`.
    pub lo: f64,
    /// Value at `t = 1`.
    pub hi: f64,
}

impl Span {
    /// Create a span.
    pub const fn new(lo: f64, hi: f64) -> Self {
        Self { lo, hi }
    }

    /// Map `t` in `[0, 1)` onto the span.
    pub fn at(self, t: f64) -> f64 {
        self.lo + t * (self.hi - self.lo)
    }

    /// Return `true` if `v` lies inside the span (bounds inclusive, orientation-agnostic).
    pub fn contains(self, v: f64) -> bool {
        let (a, b) = if self.lo <= self.hi {
            (self.lo, self.hi)
        } else {
            (self.hi, self.lo)
        };
        a <= v && v <= b
    }
}

impl From<(f64, f64)> for Span {
    fn from((lo, hi): (f64, f64)) -> Self {
        Self { lo, hi }
    }
}
