//! Layout units.
//!
//! The pixel and factor primitives are re-exported from `zng-unit`, this module adds the size
//! constraints and alignment types used during layout.

mod align;
mod constraints;

pub use align::*;
pub use constraints::*;

pub use zng_unit::*;
