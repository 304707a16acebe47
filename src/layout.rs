//! Constraints, alignment and layout context.
//!
//! # Full API
//!
//! See [`zng_layout`] for the full API.

pub use zng_layout::{
    context::{LayoutAxis, LayoutDirection, LayoutMask, LayoutMetrics},
    unit::{Align, AlignDirectional, AlignGeometry, BoolVector2D, PxConstraints, PxConstraints2d},
    LayoutError,
};
