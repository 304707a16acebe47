//! Layout context, direction and metrics.

use std::fmt;

use bitflags::bitflags;
use zng_unit::Px;

use crate::unit::{PxConstraints, PxConstraints2d};

/// Defines the layout flow direction.
///
/// This affects some [`AlignDirectional`] options, the start edge is the left edge in [`LTR`] and the right edge in [`RTL`].
///
/// Note that this does not affect the layout origin, all points are offsets from the top-left corner independent of this value.
///
/// [`AlignDirectional`]: crate::unit::AlignDirectional
/// [`LTR`]: LayoutDirection::LTR
/// [`RTL`]: LayoutDirection::RTL
#[derive(Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum LayoutDirection {
    /// left-to-right.
    LTR,
    /// Right-to-left.
    RTL,
}
impl LayoutDirection {
    /// Matches `LTR`.
    pub fn is_ltr(self) -> bool {
        matches!(self, Self::LTR)
    }

    /// Matches `RTL`.
    pub fn is_rtl(self) -> bool {
        matches!(self, Self::RTL)
    }
}
impl Default for LayoutDirection {
    /// Default is `LTR`.
    fn default() -> Self {
        Self::LTR
    }
}
impl fmt::Debug for LayoutDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if f.alternate() {
            write!(f, "LayoutDirection::")?;
        }
        match self {
            Self::LTR => write!(f, "LTR"),
            Self::RTL => write!(f, "RTL"),
        }
    }
}

/// Identifies a 2D layout axis.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum LayoutAxis {
    /// Horizontal.
    X,
    /// Vertical.
    Y,
}
impl LayoutAxis {
    /// Gets the `axis` constraints.
    pub fn constraints(self, constraints: PxConstraints2d) -> PxConstraints {
        match self {
            LayoutAxis::X => constraints.x,
            LayoutAxis::Y => constraints.y,
        }
    }
}
impl fmt::Display for LayoutAxis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LayoutAxis::X => write!(f, "x"),
            LayoutAxis::Y => write!(f, "y"),
        }
    }
}

/// Inputs of a layout pass.
///
/// The incoming size constraints and the layout direction, if known. Layout results are a pure function
/// of the metrics and the children, so a node can skip layout if the metrics it used are unchanged, see [`masked_eq`].
///
/// [`masked_eq`]: LayoutMetrics::masked_eq
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct LayoutMetrics {
    /// Size constraints.
    pub constraints: PxConstraints2d,
    /// Layout direction, `None` if the context does not define one.
    pub direction: Option<LayoutDirection>,
}
impl LayoutMetrics {
    /// New metrics with unknown direction.
    pub fn new(constraints: PxConstraints2d) -> Self {
        LayoutMetrics {
            constraints,
            direction: None,
        }
    }

    /// New metrics with exact size constraints.
    pub fn new_exact(size: zng_unit::PxSize) -> Self {
        Self::new(PxConstraints2d::new_exact_size(size))
    }

    /// Sets the [`constraints`].
    ///
    /// [`constraints`]: Self::constraints
    pub fn with_constraints(mut self, constraints: PxConstraints2d) -> Self {
        self.constraints = constraints;
        self
    }

    /// Sets the [`direction`].
    ///
    /// [`direction`]: Self::direction
    pub fn with_direction(mut self, direction: LayoutDirection) -> Self {
        self.direction = Some(direction);
        self
    }

    /// Maximum width and height allowed, `Px::MAX` if unbounded.
    pub fn max_size(&self) -> zng_unit::PxSize {
        zng_unit::PxSize::new(self.constraints.x.max().unwrap_or(Px::MAX), self.constraints.y.max().unwrap_or(Px::MAX))
    }

    /// Gets if all of the fields in `mask` are equal between `self` and `other`.
    pub fn masked_eq(&self, other: &Self, mask: LayoutMask) -> bool {
        (!mask.contains(LayoutMask::CONSTRAINTS) || self.constraints == other.constraints)
            && (!mask.contains(LayoutMask::DIRECTION) || self.direction == other.direction)
    }
}

bitflags! {
    /// Mask of values that can affect the layout operation of a value.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
    #[serde(transparent)]
    pub struct LayoutMask: u32 {
        /// The [`LayoutMetrics::constraints`].
        const CONSTRAINTS = 1 << 30;
        /// The [`LayoutMetrics::direction`].
        const DIRECTION = 1 << 5;
    }
}
impl Default for LayoutMask {
    /// Empty.
    fn default() -> Self {
        LayoutMask::empty()
    }
}
