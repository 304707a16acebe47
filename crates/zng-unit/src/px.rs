use std::{fmt, ops};

use serde::{Deserialize, Serialize};

/// Device pixel.
///
/// Represents an exact pixel length in the rendered output, all computed layout values are in `Px`.
///
/// Arithmetic saturates, [`Px::MAX`] is also used to represent an unbounded length.
#[derive(Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, bytemuck::Zeroable, bytemuck::Pod)]
#[repr(transparent)]
#[serde(transparent)]
pub struct Px(pub i32);
impl Px {
    /// Maximum representable length, also used to represent *unbounded*.
    pub const MAX: Px = Px(i32::MAX);
    /// Minimum representable length.
    pub const MIN: Px = Px(i32::MIN);

    /// Returns the maximum of two lengths.
    pub fn max(self, other: Px) -> Px {
        Px(self.0.max(other.0))
    }

    /// Returns the minimum of two lengths.
    pub fn min(self, other: Px) -> Px {
        Px(self.0.min(other.0))
    }
}
impl fmt::Debug for Px {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if f.alternate() {
            f.debug_tuple("Px").field(&self.0).finish()
        } else {
            write!(f, "{}px", self.0)
        }
    }
}
impl fmt::Display for Px {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}px", self.0)
    }
}
impl num_traits::Zero for Px {
    fn zero() -> Self {
        Px(0)
    }

    fn is_zero(&self) -> bool {
        self.0 == 0
    }
}
impl ops::Add for Px {
    type Output = Px;

    fn add(self, rhs: Px) -> Px {
        Px(self.0.saturating_add(rhs.0))
    }
}
impl ops::AddAssign for Px {
    fn add_assign(&mut self, rhs: Px) {
        *self = *self + rhs;
    }
}
impl ops::Sub for Px {
    type Output = Px;

    fn sub(self, rhs: Px) -> Px {
        Px(self.0.saturating_sub(rhs.0))
    }
}
impl ops::SubAssign for Px {
    fn sub_assign(&mut self, rhs: Px) {
        *self = *self - rhs;
    }
}
impl ops::Neg for Px {
    type Output = Px;

    fn neg(self) -> Px {
        Px(self.0.saturating_neg())
    }
}
impl ops::Mul<f32> for Px {
    type Output = Px;

    fn mul(self, rhs: f32) -> Px {
        Px((self.0 as f32 * rhs).round() as i32)
    }
}
impl From<i32> for Px {
    fn from(px: i32) -> Self {
        Px(px)
    }
}

/// A point in device pixels.
pub type PxPoint = euclid::Point2D<Px, Px>;

/// A vector in device pixels.
pub type PxVector = euclid::Vector2D<Px, Px>;

/// A size in device pixels.
pub type PxSize = euclid::Size2D<Px, Px>;

/// A rectangle in device pixels.
pub type PxRect = euclid::Rect<Px, Px>;

/// Extension methods for [`PxRect`].
pub trait PxRectExt {
    /// If `point` is inside the rectangle, the start edges are inclusive and the end edges exclusive.
    fn contains_px(&self, point: PxPoint) -> bool;

    /// If `self` fully contains `other`, empty rectangles are only contained if their origin is inside the bounds.
    fn contains_rect_px(&self, other: &PxRect) -> bool;
}
impl PxRectExt for PxRect {
    fn contains_px(&self, point: PxPoint) -> bool {
        point.x >= self.origin.x
            && point.y >= self.origin.y
            && point.x < self.origin.x + self.size.width
            && point.y < self.origin.y + self.size.height
    }

    fn contains_rect_px(&self, other: &PxRect) -> bool {
        other.origin.x >= self.origin.x
            && other.origin.y >= self.origin.y
            && other.origin.x + other.size.width <= self.origin.x + self.size.width
            && other.origin.y + other.size.height <= self.origin.y + self.size.height
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn saturating_ops() {
        assert_eq!(Px::MAX, Px::MAX + Px(10));
        assert_eq!(Px::MIN, Px::MIN - Px(10));
        assert_eq!(Px(i32::MAX), -Px::MIN);
    }

    #[test]
    fn scale_rounds() {
        assert_eq!(Px(10), Px(20) * 0.5);
        assert_eq!(Px(-10), Px(-20) * 0.5);
        assert_eq!(Px(8), Px(15) * 0.5);
    }

    #[test]
    fn rect_contains() {
        let r = PxRect::new(PxPoint::new(Px(10), Px(10)), PxSize::new(Px(20), Px(20)));

        assert!(r.contains_px(PxPoint::new(Px(10), Px(10))));
        assert!(r.contains_px(PxPoint::new(Px(29), Px(29))));
        assert!(!r.contains_px(PxPoint::new(Px(30), Px(15))));
        assert!(!r.contains_px(PxPoint::new(Px(9), Px(15))));

        assert!(r.contains_rect_px(&r));
        let outside = PxRect::new(PxPoint::new(Px(20), Px(20)), PxSize::new(Px(20), Px(5)));
        assert!(!r.contains_rect_px(&outside));
    }

    #[test]
    fn debug_format() {
        assert_eq!("5px", format!("{:?}", Px(5)));
        assert_eq!("-3px", Px(-3).to_string());
    }
}
