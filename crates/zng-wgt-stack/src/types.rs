use std::fmt;

use serde::{Deserialize, Serialize};
use zng_layout::{
    context::LayoutAxis,
    unit::{AlignGeometry, Px, PxConstraints2d, PxPoint, PxRect, PxRectExt as _, PxSize, PxVector},
};

use crate::FrameSurface;

/// Edge offsets and explicit size of a positioned stack item.
///
/// Offsets are relative to the stack's own resolved size, `left` and `right` are the distances from
/// the respective stack edges to the item edges. When both opposing offsets are set on an axis the
/// explicit size on that axis is ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct EdgeOffsets {
    /// Distance from the stack left edge to the item left edge.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub left: Option<Px>,
    /// Distance from the stack top edge to the item top edge.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top: Option<Px>,
    /// Distance from the stack right edge to the item right edge.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub right: Option<Px>,
    /// Distance from the stack bottom edge to the item bottom edge.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bottom: Option<Px>,
    /// Explicit width.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<Px>,
    /// Explicit height.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<Px>,
}
impl EdgeOffsets {
    /// Offsets with all edges at zero, the item fills the stack.
    pub fn fill() -> Self {
        Self::inset(Px(0))
    }

    /// Offsets with all edges at `inset` distance.
    pub fn inset(inset: Px) -> Self {
        EdgeOffsets {
            left: Some(inset),
            top: Some(inset),
            right: Some(inset),
            bottom: Some(inset),
            width: None,
            height: None,
        }
    }

    /// Sets the [`left`](Self::left) offset.
    pub fn with_left(mut self, left: Px) -> Self {
        self.left = Some(left);
        self
    }

    /// Sets the [`top`](Self::top) offset.
    pub fn with_top(mut self, top: Px) -> Self {
        self.top = Some(top);
        self
    }

    /// Sets the [`right`](Self::right) offset.
    pub fn with_right(mut self, right: Px) -> Self {
        self.right = Some(right);
        self
    }

    /// Sets the [`bottom`](Self::bottom) offset.
    pub fn with_bottom(mut self, bottom: Px) -> Self {
        self.bottom = Some(bottom);
        self
    }

    /// Sets the explicit [`width`](Self::width).
    pub fn with_width(mut self, width: Px) -> Self {
        self.width = Some(width);
        self
    }

    /// Sets the explicit [`height`](Self::height).
    pub fn with_height(mut self, height: Px) -> Self {
        self.height = Some(height);
        self
    }

    /// Sets both explicit dimensions.
    pub fn with_size(self, size: PxSize) -> Self {
        self.with_width(size.width).with_height(size.height)
    }

    /// If none of the six fields is set.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Convert to a placement, empty offsets are [`StackPlacement::Aligned`].
    pub fn placement(self) -> StackPlacement {
        if self.is_empty() {
            StackPlacement::Aligned
        } else {
            StackPlacement::Positioned(self)
        }
    }

    /// Gets the `(start, end, length)` fields for the `axis`.
    pub(crate) fn axis(&self, axis: LayoutAxis) -> (Option<Px>, Option<Px>, Option<Px>) {
        match axis {
            LayoutAxis::X => (self.left, self.right, self.width),
            LayoutAxis::Y => (self.top, self.bottom, self.height),
        }
    }
}

/// How a stack item is sized and placed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum StackPlacement {
    /// Item is sized by the fit constraints and placed by the stack alignment.
    ///
    /// The bounding size of all aligned items defines the stack size.
    #[default]
    Aligned,
    /// Item is sized and placed by offsets from the stack edges.
    ///
    /// Positioned items do not affect the stack size.
    Positioned(EdgeOffsets),
}
impl StackPlacement {
    /// If is [`Positioned`](Self::Positioned).
    pub fn is_positioned(&self) -> bool {
        matches!(self, StackPlacement::Positioned(_))
    }

    /// Gets the positioned offsets.
    pub fn offsets(&self) -> Option<&EdgeOffsets> {
        match self {
            StackPlacement::Aligned => None,
            StackPlacement::Positioned(o) => Some(o),
        }
    }
}
impl From<EdgeOffsets> for StackPlacement {
    fn from(offsets: EdgeOffsets) -> Self {
        offsets.placement()
    }
}

/// Represents a stack child.
///
/// The stack does not own the child internals, it only asks the child to layout with constraints and
/// then renders and hit-tests the child in its computed frame.
pub trait StackNode {
    /// Hit-test result reported by the child.
    type Hit;

    /// Layout the child with the `constraints`, returns the desired size.
    ///
    /// The stack clamps the returned size into the `constraints`.
    fn layout(&mut self, constraints: PxConstraints2d) -> PxSize;

    /// Render the child in its own space, `size` is the computed frame size.
    ///
    /// The stack has already translated the `frame` to the child offset.
    fn render(&self, size: PxSize, frame: &mut dyn FrameSurface);

    /// Hit-test a `point` in the child space, pushes hits into `hits`, innermost first.
    ///
    /// Returns `true` if the child was hit, a child that returns `false` declines the hit and the stack
    /// continues testing the items below it.
    fn hit_test(&self, size: PxSize, point: PxPoint, hits: &mut Vec<Self::Hit>) -> bool;
}
impl<N: StackNode + ?Sized> StackNode for Box<N> {
    type Hit = N::Hit;

    fn layout(&mut self, constraints: PxConstraints2d) -> PxSize {
        (**self).layout(constraints)
    }

    fn render(&self, size: PxSize, frame: &mut dyn FrameSurface) {
        (**self).render(size, frame)
    }

    fn hit_test(&self, size: PxSize, point: PxPoint, hits: &mut Vec<Self::Hit>) -> bool {
        (**self).hit_test(size, point, hits)
    }
}

/// A stack child and its placement.
#[derive(Debug, Clone, PartialEq)]
pub struct StackItem<N> {
    /// The child.
    pub node: N,
    /// Placement of the child.
    pub placement: StackPlacement,
}
impl<N> StackItem<N> {
    /// New aligned item.
    pub fn aligned(node: N) -> Self {
        StackItem {
            node,
            placement: StackPlacement::Aligned,
        }
    }

    /// New item placed by `offsets`, empty offsets create an aligned item.
    pub fn positioned(node: N, offsets: EdgeOffsets) -> Self {
        StackItem {
            node,
            placement: offsets.placement(),
        }
    }
}

/// Defines the constraints given to the aligned items of a stack.
///
/// Positioned items always derive their constraints from the stack size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum StackFit {
    /// The minimum constraints are removed, items can be any size up to the maximum.
    #[default]
    Loose,
    /// The constraints are tight at the maximum size.
    ///
    /// Unbounded axis degrade to the minimum, this is logged as a [`LayoutWarning::UnboundedExpand`].
    Expand,
}

/// Defines if and how the stack clips items that overflow its bounds.
///
/// The anti-alias variants are forwarded to the [`FrameSurface`], the stack does not rasterize.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ClipBehavior {
    /// No clip, overflowing items render outside of the stack bounds.
    None,
    /// Clip without anti-aliasing.
    #[default]
    HardEdge,
    /// Clip with anti-aliasing.
    AntiAlias,
    /// Clip with anti-aliasing and an intermediary layer.
    AntiAliasWithSaveLayer,
}
impl ClipBehavior {
    /// If is not [`None`](Self::None).
    pub fn clips(self) -> bool {
        !matches!(self, ClipBehavior::None)
    }
}

/// Defines how hits are routed to overlapping items.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum HitTestMode {
    /// Only the topmost item that reports a hit receives it.
    #[default]
    Opaque,
    /// All items that report a hit are collected, topmost first.
    Translucent,
}

/// Stack configuration.
///
/// Deserializes from partial documents, missing fields are the default.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct StackConfig {
    /// Alignment of the aligned items and of positioned items on axis without offsets.
    ///
    /// Default is `TOP_START`.
    pub alignment: AlignGeometry,
    /// Constraints mode for aligned items.
    pub fit: StackFit,
    /// Overflow clip.
    ///
    /// Default is `HardEdge`.
    pub clip: ClipBehavior,
    /// Hit routing.
    pub hit_test_mode: HitTestMode,
}
impl StackConfig {
    /// Sets the [`alignment`](Self::alignment).
    pub fn with_alignment(mut self, alignment: impl Into<AlignGeometry>) -> Self {
        self.alignment = alignment.into();
        self
    }

    /// Sets the [`fit`](Self::fit).
    pub fn with_fit(mut self, fit: StackFit) -> Self {
        self.fit = fit;
        self
    }

    /// Sets the [`clip`](Self::clip).
    pub fn with_clip(mut self, clip: ClipBehavior) -> Self {
        self.clip = clip;
        self
    }

    /// Sets the [`hit_test_mode`](Self::hit_test_mode).
    pub fn with_hit_test_mode(mut self, mode: HitTestMode) -> Self {
        self.hit_test_mode = mode;
        self
    }
}

/// Computed offset and size of a stack item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct StackFrame {
    /// Offset from the stack origin.
    pub offset: PxVector,
    /// Item size.
    pub size: PxSize,
}
impl StackFrame {
    /// New frame.
    pub fn new(offset: PxVector, size: PxSize) -> Self {
        StackFrame { offset, size }
    }

    /// Frame rectangle in the stack space.
    pub fn rect(&self) -> PxRect {
        PxRect::new(self.offset.to_point(), self.size)
    }

    /// If the `point` in the stack space is inside the frame.
    pub fn contains(&self, point: PxPoint) -> bool {
        self.rect().contains_px(point)
    }
}

/// Degenerate geometry found during layout.
///
/// Warnings are logged and the layout proceeds with clamped values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LayoutWarning {
    /// [`StackFit::Expand`] with constraints unbounded on the `axis`, the aligned items got the minimum length.
    UnboundedExpand {
        /// Unbounded axis.
        axis: LayoutAxis,
    },
    /// Positioned item resolved to a negative `length` on the `axis`, the length was clamped to zero.
    NegativeSize {
        /// Item index.
        index: usize,
        /// Axis with negative length.
        axis: LayoutAxis,
        /// Length before clamping.
        length: Px,
    },
}
impl fmt::Display for LayoutWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LayoutWarning::UnboundedExpand { axis } => {
                write!(f, "expand fit with unbounded {axis} constraints, using minimum")
            }
            LayoutWarning::NegativeSize { index, axis, length } => {
                write!(f, "item #{index} resolved to negative {axis} length {length}, clamped to zero")
            }
        }
    }
}

/// Result of a stack layout pass.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct StackLayout {
    /// Stack size.
    pub size: PxSize,
    /// Item frames, in the items order.
    pub frames: Vec<StackFrame>,
    /// Warnings found during layout.
    pub warnings: Vec<LayoutWarning>,
}
impl StackLayout {
    /// Stack bounds in its own space.
    pub fn rect(&self) -> PxRect {
        PxRect::from_size(self.size)
    }

    /// If any item frame extends outside of the stack bounds.
    ///
    /// Only the frame geometry is considered, content an item renders outside of its own frame is not overflow.
    pub fn has_overflow(&self) -> bool {
        let bounds = self.rect();
        self.frames.iter().any(|f| !bounds.contains_rect_px(&f.rect()))
    }

    /// Gets the item frame.
    pub fn frame(&self, index: usize) -> Option<&StackFrame> {
        self.frames.get(index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_offsets_are_aligned() {
        assert_eq!(StackPlacement::Aligned, EdgeOffsets::default().placement());
        assert!(EdgeOffsets::default().with_width(Px(0)).placement().is_positioned());
        assert!(StackItem::positioned((), EdgeOffsets::fill()).placement.is_positioned());
        assert!(!StackItem::positioned((), EdgeOffsets::default()).placement.is_positioned());
    }

    #[test]
    fn overflow_is_frame_geometry() {
        let mut layout = StackLayout {
            size: PxSize::new(Px(50), Px(50)),
            frames: vec![StackFrame::new(PxVector::new(Px(10), Px(10)), PxSize::new(Px(40), Px(40)))],
            warnings: vec![],
        };
        assert!(!layout.has_overflow());

        layout.frames.push(StackFrame::new(PxVector::new(Px(-1), Px(0)), PxSize::new(Px(10), Px(10))));
        assert!(layout.has_overflow());
    }

    #[test]
    fn config_from_partial_json() {
        let cfg: StackConfig = serde_json::from_str(r#"{ "fit": "Expand" }"#).unwrap();
        assert_eq!(StackConfig::default().with_fit(StackFit::Expand), cfg);
        assert_eq!(ClipBehavior::HardEdge, cfg.clip);
        assert_eq!(HitTestMode::Opaque, cfg.hit_test_mode);
    }

    #[test]
    fn offsets_json_skips_unset() {
        let json = serde_json::to_string(&EdgeOffsets::default().with_left(Px(5))).unwrap();
        assert_eq!(r#"{"left":5}"#, json);
    }

    #[test]
    fn warning_display() {
        let w = LayoutWarning::NegativeSize {
            index: 2,
            axis: LayoutAxis::X,
            length: Px(-20),
        };
        assert_eq!("item #2 resolved to negative x length -20px, clamped to zero", w.to_string());
    }
}
