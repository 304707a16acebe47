use std::fmt;

use serde::{Deserialize, Serialize};
use zng_unit::{Factor, FactorUnits as _, PxSize, PxVector};

use crate::{context::LayoutDirection, LayoutError};

/// `x` and `y` alignment.
///
/// The values indicate where the content is placed within a larger available space. An `x` value of `-1.0`
/// means the content left border touches the container left border, a value of `1.0` means the content right
/// border touches the container right border and `0.0` centers the content.
///
/// There is a constant for each of the usual alignment values, the alignment is defined as two factors like this
/// primarily for animating transition between alignments.
///
/// Values outside of the `[-1.0..=1.0]` range places the content outside of the container bounds.
///
/// See [`AlignDirectional`] for an alignment that flips in right-to-left contexts.
#[derive(Clone, Copy, PartialEq, Hash, Serialize, Deserialize)]
pub struct Align {
    /// *x* alignment in a `[-1.0..=1.0]` range.
    pub x: Factor,
    /// *y* alignment in a `[-1.0..=1.0]` range.
    pub y: Factor,
}
impl Align {
    /// New alignment.
    pub fn new(x: impl Into<Factor>, y: impl Into<Factor>) -> Self {
        Align { x: x.into(), y: y.into() }
    }

    /// Computes the offset of content inside a container that has `free_space` left over.
    ///
    /// The `[-1.0..=1.0]` range maps to `[0..=free_space]` on each axis, negative free space
    /// produces a negative offset, the content overflows on both sides when centered.
    pub fn offset(self, free_space: PxSize) -> PxVector {
        PxVector::new(free_space.width * self.x.to_normal(), free_space.height * self.y.to_normal())
    }

    /// Computes the offset of a `child` size aligned inside a `parent` size.
    pub fn child_offset(self, parent: PxSize, child: PxSize) -> PxVector {
        self.offset(PxSize::new(parent.width - child.width, parent.height - child.height))
    }
}
macro_rules! named_aligns {
    ( $Align:ident { $($NAME:ident = ($x:expr, $y:expr);)+ } ) => {
        impl $Align {
            $(
            #[doc=concat!("`(", stringify!($x), ", ", stringify!($y), ")`")]
            pub const $NAME: $Align = $Align::from_raw(Factor($x), Factor($y));
            )+

            /// Returns the alignment `const` name if `self` is equal to one of then.
            pub fn name(self) -> Option<&'static str> {
                $(
                    if self == Self::$NAME {
                        Some(stringify!($NAME))
                    }
                )else+
                else {
                    None
                }
            }
        }
    };
}
impl Align {
    const fn from_raw(x: Factor, y: Factor) -> Self {
        Align { x, y }
    }
}
named_aligns! {
    Align {
        TOP_LEFT = (-1.0, -1.0);
        TOP = (0.0, -1.0);
        TOP_RIGHT = (1.0, -1.0);

        LEFT = (-1.0, 0.0);
        CENTER = (0.0, 0.0);
        RIGHT = (1.0, 0.0);

        BOTTOM_LEFT = (-1.0, 1.0);
        BOTTOM = (0.0, 1.0);
        BOTTOM_RIGHT = (1.0, 1.0);
    }
}
impl fmt::Debug for Align {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(name) = self.name() {
            if f.alternate() {
                write!(f, "Align::{name}")
            } else {
                f.write_str(name)
            }
        } else {
            f.debug_struct("Align").field("x", &self.x).field("y", &self.y).finish()
        }
    }
}
impl fmt::Display for Align {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(name) = self.name() {
            f.write_str(name)
        } else {
            write!(f, "({}, {})", self.x, self.y)
        }
    }
}
impl<X: Into<Factor>, Y: Into<Factor>> From<(X, Y)> for Align {
    fn from((x, y): (X, Y)) -> Self {
        Align::new(x, y)
    }
}

/// Alignment where the horizontal component depends on the [`LayoutDirection`].
///
/// The `start` value is the *x* alignment in left-to-right contexts and is negated in right-to-left contexts,
/// so `start = -1.0` aligns content to the left in [`LTR`] and to the right in [`RTL`].
///
/// [`LTR`]: LayoutDirection::LTR
/// [`RTL`]: LayoutDirection::RTL
#[derive(Clone, Copy, PartialEq, Hash, Serialize, Deserialize)]
pub struct AlignDirectional {
    /// Start alignment in a `[-1.0..=1.0]` range, `-1.0` is the start edge.
    pub start: Factor,
    /// *y* alignment in a `[-1.0..=1.0]` range.
    pub y: Factor,
}
impl AlignDirectional {
    /// New directional alignment.
    pub fn new(start: impl Into<Factor>, y: impl Into<Factor>) -> Self {
        AlignDirectional {
            start: start.into(),
            y: y.into(),
        }
    }

    const fn from_raw(start: Factor, y: Factor) -> Self {
        AlignDirectional { start, y }
    }

    /// Resolve to an absolute alignment in the `direction` context.
    pub fn resolve(self, direction: LayoutDirection) -> Align {
        let x = match direction {
            LayoutDirection::LTR => self.start,
            LayoutDirection::RTL => -self.start,
        };
        Align { x, y: self.y }
    }
}
named_aligns! {
    AlignDirectional {
        TOP_START = (-1.0, -1.0);
        TOP_CENTER = (0.0, -1.0);
        TOP_END = (1.0, -1.0);

        CENTER_START = (-1.0, 0.0);
        CENTER = (0.0, 0.0);
        CENTER_END = (1.0, 0.0);

        BOTTOM_START = (-1.0, 1.0);
        BOTTOM_CENTER = (0.0, 1.0);
        BOTTOM_END = (1.0, 1.0);
    }
}
impl fmt::Debug for AlignDirectional {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(name) = self.name() {
            if f.alternate() {
                write!(f, "AlignDirectional::{name}")
            } else {
                f.write_str(name)
            }
        } else {
            f.debug_struct("AlignDirectional")
                .field("start", &self.start)
                .field("y", &self.y)
                .finish()
        }
    }
}

/// Absolute or direction dependent alignment.
///
/// Resolved to an absolute [`Align`] during layout, see [`resolve`] for details.
///
/// [`resolve`]: AlignGeometry::resolve
#[derive(Clone, Copy, PartialEq, Hash, Serialize, Deserialize)]
pub enum AlignGeometry {
    /// Alignment that does not depend on the layout direction.
    Absolute(Align),
    /// Alignment that flips horizontally in right-to-left contexts.
    Directional(AlignDirectional),
}
impl AlignGeometry {
    /// If the alignment needs a layout direction to resolve.
    pub fn is_directional(self) -> bool {
        matches!(self, AlignGeometry::Directional(_))
    }

    /// Resolve to an absolute alignment.
    ///
    /// Directional alignments require a `direction`, returns [`LayoutError::MissingDirection`] if `None`.
    pub fn resolve(self, direction: Option<LayoutDirection>) -> Result<Align, LayoutError> {
        match (self, direction) {
            (AlignGeometry::Absolute(a), _) => Ok(a),
            (AlignGeometry::Directional(a), Some(d)) => Ok(a.resolve(d)),
            (AlignGeometry::Directional(align), None) => {
                tracing::error!("cannot resolve directional alignment {align:?} without a layout direction");
                Err(LayoutError::MissingDirection { align })
            }
        }
    }
}
impl Default for AlignGeometry {
    /// `TOP_START`.
    fn default() -> Self {
        AlignGeometry::Directional(AlignDirectional::TOP_START)
    }
}
impl fmt::Debug for AlignGeometry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AlignGeometry::Absolute(a) => fmt::Debug::fmt(a, f),
            AlignGeometry::Directional(a) => fmt::Debug::fmt(a, f),
        }
    }
}
impl From<Align> for AlignGeometry {
    fn from(align: Align) -> Self {
        AlignGeometry::Absolute(align)
    }
}
impl From<AlignDirectional> for AlignGeometry {
    fn from(align: AlignDirectional) -> Self {
        AlignGeometry::Directional(align)
    }
}
impl From<Factor> for AlignGeometry {
    /// Uniform absolute alignment.
    fn from(xy: Factor) -> Self {
        AlignGeometry::Absolute(Align { x: xy, y: xy })
    }
}
impl From<f32> for AlignGeometry {
    /// Uniform absolute alignment.
    fn from(xy: f32) -> Self {
        xy.fct().into()
    }
}
