//! Pixel and factor units.
//!
//! # Full API
//!
//! See [`zng_unit`] for the full API.

pub use zng_unit::{about_eq, euclid, Factor, FactorUnits, Px, PxPoint, PxRect, PxRectExt, PxSize, PxVector, EQ_EPSILON};
