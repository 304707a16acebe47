//! Stack layout, indexed stack, compositing and hit-test.
//!
//! # Full API
//!
//! See [`zng_wgt_stack`] for the full API.

pub use zng_wgt_stack::{
    hit_test, layout, render, ClipBehavior, DisplayItem, DisplayList, EdgeOffsets, FrameSurface, HitTestMode, IndexChange, IndexedStack,
    IndexedStackConfig, LayoutWarning, SizedNode, Stack, StackConfig, StackFit, StackFrame, StackItem, StackLayout, StackNode,
    StackPlacement, StackUpdates,
};
