#![doc(html_favicon_url = "https://zng-ui.github.io/res/zng-logo-icon.png")]
#![doc(html_logo_url = "https://zng-ui.github.io/res/zng-logo.png")]
//!
//! Stack layout, compositing and hit-test routing.
//!
//! The stack overlaps its items, the first item is at the bottom and the last at the top. Aligned items
//! define the stack size and are placed by the stack alignment, positioned items are placed by offsets
//! from the stack edges. See [`layout`](fn@layout) for details.
//!
//! The [`IndexedStack`] shows only one of the items, while keeping all items layout.
//!
//! # Crate
//!
#![doc = include_str!(concat!("../", std::env!("CARGO_PKG_README")))]
#![warn(unused_extern_crates)]
#![warn(missing_docs)]

mod hit;
mod indexed;
mod layout;
mod nodes;
mod render;
mod types;

pub use hit::hit_test;
pub use indexed::*;
pub use layout::{layout, Stack, StackUpdates};
pub use nodes::*;
pub use render::{render, DisplayItem, DisplayList, FrameSurface};
pub use types::*;
