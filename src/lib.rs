#![doc(html_favicon_url = "https://zng-ui.github.io/res/zng-logo-icon.png")]
#![doc(html_logo_url = "https://zng-ui.github.io/res/zng-logo.png")]
//!
//! Overlapping stack layout engine.
//!
//! Computes the size of a stack and the frame of each item, renders the items back-to-front into a
//! [`FrameSurface`] and routes hits front-to-back. The [`IndexedStack`] shows only one item while keeping
//! all items layout.
//!
//! ```
//! use zng_stack::prelude::*;
//!
//! let mut items = vec![
//!     StackItem::aligned(SizedNode::new(1, PxSize::new(Px(50), Px(50)))),
//!     StackItem::positioned(SizedNode::new(2, PxSize::zero()), EdgeOffsets::fill()),
//!     StackItem::aligned(SizedNode::new(3, PxSize::new(Px(30), Px(30)))),
//! ];
//! let metrics = LayoutMetrics::new(PxConstraints2d::new_bounded(Px(200), Px(200)));
//! let config = StackConfig::default().with_alignment(Align::CENTER);
//!
//! let r = zng_stack::stack::layout(&mut items, &metrics, &config).unwrap();
//! assert_eq!(PxSize::new(Px(50), Px(50)), r.size);
//! assert_eq!(PxVector::new(Px(10), Px(10)), r.frames[2].offset);
//! ```
//!
//! [`FrameSurface`]: stack::FrameSurface
//! [`IndexedStack`]: stack::IndexedStack
//!
//! # Crates
//!
//! This crate re-exports `zng-unit` as [`unit`], `zng-layout` as [`layout`] and `zng-wgt-stack` as [`stack`].
#![warn(unused_extern_crates)]
#![warn(missing_docs)]

pub mod layout;
pub mod stack;
pub mod unit;

/// Types for building and using stacks.
pub mod prelude {
    #[doc(no_inline)]
    pub use crate::__prelude::*;
}
mod __prelude {
    pub use zng_layout::{
        context::{LayoutAxis, LayoutDirection, LayoutMetrics},
        unit::{Align, AlignDirectional, AlignGeometry, PxConstraints, PxConstraints2d},
        LayoutError,
    };
    pub use zng_unit::{Factor, FactorUnits as _, Px, PxPoint, PxRect, PxSize, PxVector};
    pub use zng_wgt_stack::{
        ClipBehavior, DisplayList, EdgeOffsets, FrameSurface, HitTestMode, IndexedStack, IndexedStackConfig, SizedNode, Stack,
        StackConfig, StackFit, StackItem, StackLayout, StackNode, StackPlacement,
    };
}
