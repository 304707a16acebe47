use std::fmt;

use serde::{Deserialize, Serialize};
use zng_unit::{euclid, Px, PxSize};

pub use euclid::BoolVector2D;

/// Pixel length constraints.
///
/// These constraints can express lower and upper bounds and unbounded upper.
///
/// Lengths are never negative, negative bounds are clamped to zero, also when deserializing.
///
/// See also the [`PxConstraints2d`].
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "PxConstraintsData")]
pub struct PxConstraints {
    max: Px,
    min: Px,
}
impl PxConstraints {
    /// New unbounded constraint.
    pub fn new_unbounded() -> Self {
        PxConstraints { max: Px::MAX, min: Px(0) }
    }

    /// New bounded between zero and `max`.
    pub fn new_bounded(max: Px) -> Self {
        PxConstraints {
            max: max.max(Px(0)),
            min: Px(0),
        }
    }

    /// New bounded to only allow the `length`.
    pub fn new_exact(length: Px) -> Self {
        let length = length.max(Px(0));
        PxConstraints { max: length, min: length }
    }

    /// New bounded to a inclusive range.
    ///
    /// # Panics
    ///
    /// Panics if `min` is not <= `max` after both are clamped to zero.
    pub fn new_range(min: Px, max: Px) -> Self {
        let min = min.max(Px(0));
        let max = max.max(Px(0));
        assert!(min <= max);

        PxConstraints { max, min }
    }

    /// Returns a copy of the current constraints that has `min` as the lower bound and max adjusted to be >= `min`.
    pub fn with_min(mut self, min: Px) -> Self {
        self.min = min.max(Px(0));
        self.max = self.max.max(self.min);
        self
    }

    /// Returns a copy of the current constraints that has `max` as the upper bound and min adjusted to be <= `max`.
    pub fn with_max(mut self, max: Px) -> Self {
        self.max = max.max(Px(0));
        self.min = self.min.min(self.max);
        self
    }

    /// Returns a copy of the current constraints that has `min` as the lower bound, the `min` is clamped
    /// by the current maximum.
    pub fn with_new_min(mut self, min: Px) -> Self {
        self.min = min.max(Px(0)).min(self.max);
        self
    }

    /// Returns a copy of the current constraints without a lower bound.
    pub fn loose(self) -> Self {
        self.with_new_min(Px(0))
    }

    /// Returns a copy of the current constraints without upper bound.
    pub fn with_unbounded(mut self) -> Self {
        self.max = Px::MAX;
        self
    }

    /// Gets if the constraints have no upper bound.
    pub fn is_unbounded(self) -> bool {
        self.max == Px::MAX
    }

    /// Gets if the constraints only allow one length.
    pub fn is_exact(self) -> bool {
        self.max == self.min
    }

    /// Gets the fixed length if the constraints only allow one length.
    pub fn exact(self) -> Option<Px> {
        if self.is_exact() {
            Some(self.max)
        } else {
            None
        }
    }

    /// Gets the maximum allowed length, or `None` if is unbounded.
    ///
    /// The maximum is inclusive.
    pub fn max(self) -> Option<Px> {
        if self.max < Px::MAX {
            Some(self.max)
        } else {
            None
        }
    }

    /// Gets the minimum allowed length.
    //
    /// The minimum is inclusive.
    pub fn min(self) -> Px {
        self.min
    }

    /// Clamp the `px` by min and max.
    pub fn clamp(self, px: Px) -> Px {
        self.min.max(px).min(self.max)
    }

    /// Returns exact constraints at the maximum length.
    ///
    /// If the constraints are unbounded the exact length is the minimum and the second value is `true`.
    pub fn tight_max(self) -> (Self, bool) {
        match self.max() {
            Some(max) => (PxConstraints::new_exact(max), false),
            None => (PxConstraints::new_exact(self.min), true),
        }
    }
}
impl fmt::Debug for PxConstraints {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PxConstraints")
            .field("max", &self.max())
            .field("min", &self.min)
            .finish()
    }
}
impl Default for PxConstraints {
    fn default() -> Self {
        Self::new_unbounded()
    }
}
#[derive(Deserialize)]
struct PxConstraintsData {
    max: Px,
    min: Px,
}
impl From<PxConstraintsData> for PxConstraints {
    fn from(c: PxConstraintsData) -> Self {
        let min = c.min.max(Px(0));
        PxConstraints { max: c.max.max(min), min }
    }
}
impl From<Px> for PxConstraints {
    /// New exact.
    fn from(length: Px) -> Self {
        PxConstraints::new_exact(length)
    }
}

/// Pixel *size* constraints.
///
/// These constraints can express lower and upper bounds and unbounded upper for
/// both the ***x*** and ***y*** axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PxConstraints2d {
    /// Constraints of lengths in the *x* or *width* dimension.
    pub x: PxConstraints,
    /// Constraints of lengths in the *y* or *height* dimension.
    pub y: PxConstraints,
}
impl PxConstraints2d {
    /// New unbounded constraint.
    pub fn new_unbounded() -> Self {
        Self {
            x: PxConstraints::new_unbounded(),
            y: PxConstraints::new_unbounded(),
        }
    }

    /// New bounded between zero and `max_x`, `max_y`.
    pub fn new_bounded(max_x: Px, max_y: Px) -> Self {
        Self {
            x: PxConstraints::new_bounded(max_x),
            y: PxConstraints::new_bounded(max_y),
        }
    }

    /// New bounded between zero and `max`.
    pub fn new_bounded_size(max: PxSize) -> Self {
        Self::new_bounded(max.width, max.height)
    }

    /// New bounded to only allow the *size*.
    ///
    /// The type [`PxSize`] can also be converted into exact constraints.
    pub fn new_exact(x: Px, y: Px) -> Self {
        Self {
            x: PxConstraints::new_exact(x),
            y: PxConstraints::new_exact(y),
        }
    }

    /// New bounded to only allow the `size`.
    pub fn new_exact_size(size: PxSize) -> Self {
        Self::new_exact(size.width, size.height)
    }

    /// New bounded to a inclusive range.
    ///
    /// A tuple of two [`PxSize`] values can also be converted to these constraints.
    pub fn new_range(min_x: Px, max_x: Px, min_y: Px, max_y: Px) -> Self {
        Self {
            x: PxConstraints::new_range(min_x, max_x),
            y: PxConstraints::new_range(min_y, max_y),
        }
    }

    /// Returns a copy of the current constraints that has `min_x` and `min_y` as the lower bound and max adjusted to be >= min in both axis.
    pub fn with_min(mut self, min_x: Px, min_y: Px) -> Self {
        self.x = self.x.with_min(min_x);
        self.y = self.y.with_min(min_y);
        self
    }

    /// Returns a copy of the current constraints that has `min` as the lower bound and max adjusted to be >= min in both axis.
    pub fn with_min_size(self, min: PxSize) -> Self {
        self.with_min(min.width, min.height)
    }

    /// Returns a copy of the current constraints that has `max_x` and `max_y` as the upper bound and min adjusted to be <= max in both axis.
    pub fn with_max(mut self, max_x: Px, max_y: Px) -> Self {
        self.x = self.x.with_max(max_x);
        self.y = self.y.with_max(max_y);
        self
    }

    /// Returns a copy of the current constraints that has `max` as the upper bound and min adjusted to be <= max in both axis.
    pub fn with_max_size(self, max: PxSize) -> Self {
        self.with_max(max.width, max.height)
    }

    /// Returns a copy of the current constraints that has `min_x` and `min_y` as the lower bound, clamped by the current maximum.
    pub fn with_new_min(mut self, min_x: Px, min_y: Px) -> Self {
        self.x = self.x.with_new_min(min_x);
        self.y = self.y.with_new_min(min_y);
        self
    }

    /// Returns a copy of the current constraints without a lower bound in both axis.
    pub fn loose(self) -> Self {
        self.with_new_min(Px(0), Px(0))
    }

    /// Returns a copy of the current constraints without upper bound in both axis.
    pub fn with_unbounded(mut self) -> Self {
        self.x = self.x.with_unbounded();
        self.y = self.y.with_unbounded();
        self
    }

    /// Returns a copy of the current constraints with [`x`] modified by the closure.
    ///
    /// [`x`]: Self::x
    pub fn with_x(mut self, x: impl FnOnce(PxConstraints) -> PxConstraints) -> Self {
        self.x = x(self.x);
        self
    }

    /// Returns a copy of the current constraints with [`y`] modified by the closure.
    ///
    /// [`y`]: Self::y
    pub fn with_y(mut self, y: impl FnOnce(PxConstraints) -> PxConstraints) -> Self {
        self.y = y(self.y);
        self
    }

    /// Gets if the constraints have no upper bound.
    pub fn is_unbounded(self) -> BoolVector2D {
        BoolVector2D {
            x: self.x.is_unbounded(),
            y: self.y.is_unbounded(),
        }
    }

    /// Gets if the constraints only allow one length.
    pub fn is_exact(self) -> BoolVector2D {
        BoolVector2D {
            x: self.x.is_exact(),
            y: self.y.is_exact(),
        }
    }

    /// Gets the fixed size if the constraints only allow one length in both axis.
    pub fn exact_size(self) -> Option<PxSize> {
        Some(PxSize::new(self.x.exact()?, self.y.exact()?))
    }

    /// Gets the maximum allowed size, or `None` if is unbounded in any of the axis.
    ///
    /// The maximum is inclusive.
    pub fn max_size(self) -> Option<PxSize> {
        Some(PxSize::new(self.x.max()?, self.y.max()?))
    }

    /// Gets the minimum allowed size.
    //
    /// The minimum is inclusive.
    pub fn min_size(self) -> PxSize {
        PxSize::new(self.x.min(), self.y.min())
    }

    /// Clamp the `size` by min and max.
    pub fn clamp_size(self, size: PxSize) -> PxSize {
        PxSize::new(self.x.clamp(size.width), self.y.clamp(size.height))
    }

    /// Returns exact constraints at the biggest allowed size.
    ///
    /// Axis without upper bound degrade to their minimum length, the second value flags these axis.
    pub fn tight_max(self) -> (Self, BoolVector2D) {
        let (x, degraded_x) = self.x.tight_max();
        let (y, degraded_y) = self.y.tight_max();
        (Self { x, y }, BoolVector2D { x: degraded_x, y: degraded_y })
    }
}
impl Default for PxConstraints2d {
    fn default() -> Self {
        Self::new_unbounded()
    }
}
impl From<PxSize> for PxConstraints2d {
    /// New exact.
    fn from(size: PxSize) -> Self {
        PxConstraints2d::new_exact(size.width, size.height)
    }
}
impl From<(PxSize, PxSize)> for PxConstraints2d {
    /// New range, the minimum and maximum is computed.
    fn from((a, b): (PxSize, PxSize)) -> Self {
        PxConstraints2d {
            x: if a.width > b.width {
                PxConstraints::new_range(b.width, a.width)
            } else {
                PxConstraints::new_range(a.width, b.width)
            },
            y: if a.height > b.height {
                PxConstraints::new_range(b.height, a.height)
            } else {
                PxConstraints::new_range(a.height, b.height)
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn loose_removes_min() {
        let c = PxConstraints2d::new_exact(Px(100), Px(50)).loose();

        assert_eq!(Px(0), c.x.min());
        assert_eq!(Some(Px(100)), c.x.max());
        assert_eq!(PxSize::new(Px(0), Px(0)), c.min_size());
        assert_eq!(Some(PxSize::new(Px(100), Px(50))), c.max_size());
    }

    #[test]
    fn tight_max_bounded() {
        let (c, degraded) = PxConstraints2d::new_bounded(Px(200), Px(100)).tight_max();

        assert_eq!(Some(PxSize::new(Px(200), Px(100))), c.exact_size());
        assert!(!degraded.x);
        assert!(!degraded.y);
    }

    #[test]
    fn tight_max_unbounded_degrades_to_min() {
        let c = PxConstraints2d::new_unbounded().with_min(Px(30), Px(0)).with_y(|y| y.with_max(Px(40)));
        let (c, degraded) = c.tight_max();

        assert_eq!(Some(PxSize::new(Px(30), Px(40))), c.exact_size());
        assert!(degraded.x);
        assert!(!degraded.y);
    }

    #[test]
    fn with_new_min_clamps_to_max() {
        let c = PxConstraints::new_bounded(Px(10)).with_new_min(Px(20));
        assert_eq!(Px(10), c.min());
        assert!(c.is_exact());
    }

    #[test]
    fn negative_lengths_clamp_to_zero() {
        assert_eq!(Some(Px(0)), PxConstraints::new_exact(Px(-5)).exact());
        assert_eq!(Some(Px(0)), PxConstraints::new_bounded(Px(-5)).max());
    }

    #[test]
    fn negative_bounds_clamp_to_zero() {
        let c = PxConstraints2d::new_unbounded().with_max(Px(-5), Px(-5));
        assert_eq!(Some(PxSize::zero()), c.max_size());
        assert_eq!(PxSize::zero(), c.clamp_size(PxSize::new(Px(10), Px(10))));

        let c = PxConstraints::new_bounded(Px(10)).with_min(Px(-3));
        assert_eq!(Px(0), c.min());
        assert_eq!(Px(0), PxConstraints::new_bounded(Px(10)).with_new_min(Px(-3)).min());
        assert_eq!(Some(Px(0)), PxConstraints::new_range(Px(-4), Px(-2)).exact());
    }

    #[test]
    fn deserialize_clamps_negative_bounds() {
        let c: PxConstraints = serde_json::from_str(r#"{ "max": -5, "min": -10 }"#).unwrap();
        assert_eq!(Some(Px(0)), c.exact());

        let c: PxConstraints = serde_json::from_str(r#"{ "max": 5, "min": 10 }"#).unwrap();
        assert_eq!(Px(10), c.min());
        assert_eq!(Some(Px(10)), c.max());
    }

    #[test]
    fn range_from_sizes() {
        let c: PxConstraints2d = (PxSize::new(Px(10), Px(50)), PxSize::new(Px(40), Px(20))).into();

        assert_eq!(PxSize::new(Px(10), Px(20)), c.min_size());
        assert_eq!(Some(PxSize::new(Px(40), Px(50))), c.max_size());
        assert_eq!(PxSize::new(Px(40), Px(20)), c.clamp_size(PxSize::new(Px(100), Px(0))));
    }
}
