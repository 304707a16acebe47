use bitflags::bitflags;
use zng_layout::{
    context::{LayoutAxis, LayoutMask, LayoutMetrics},
    unit::{Align, Px, PxConstraints, PxConstraints2d, PxPoint, PxSize, PxVector},
    LayoutError,
};

use crate::{
    hit::hit_test_where, render::render_where, ClipBehavior, EdgeOffsets, FrameSurface, HitTestMode, LayoutWarning, StackConfig,
    StackFit, StackFrame, StackItem, StackLayout, StackNode, StackPlacement,
};

/// Layout the stack `items`.
///
/// Aligned items are layout first with the `config.fit` constraints, the stack size is their bounding size
/// clamped by the `metrics` constraints. Positioned items are then layout with constraints derived from the stack size.
///
/// Returns an error if the alignment is directional and the `metrics` has no direction. Degenerate geometry is
/// not an error, it is logged and recorded in [`StackLayout::warnings`].
pub fn layout<N: StackNode>(items: &mut [StackItem<N>], metrics: &LayoutMetrics, config: &StackConfig) -> Result<StackLayout, LayoutError> {
    let align = config.alignment.resolve(metrics.direction)?;
    let constraints = metrics.constraints;

    let mut warnings = vec![];
    let mut frames = vec![StackFrame::default(); items.len()];

    let has_aligned = items.iter().any(|i| !i.placement.is_positioned());
    let child_constraints = match config.fit {
        StackFit::Loose => constraints.loose(),
        StackFit::Expand => {
            let (tight, degraded) = constraints.tight_max();
            if has_aligned {
                for (axis, degraded) in [(LayoutAxis::X, degraded.x), (LayoutAxis::Y, degraded.y)] {
                    if degraded {
                        warn(&mut warnings, LayoutWarning::UnboundedExpand { axis });
                    }
                }
            }
            tight
        }
    };

    let mut bounds = PxSize::zero();
    for (item, frame) in items.iter_mut().zip(frames.iter_mut()) {
        if let StackPlacement::Aligned = item.placement {
            frame.size = child_constraints.clamp_size(item.node.layout(child_constraints));
            bounds = bounds.max(frame.size);
        }
    }
    let size = constraints.clamp_size(bounds);

    for (i, (item, frame)) in items.iter_mut().zip(frames.iter_mut()).enumerate() {
        match item.placement {
            StackPlacement::Aligned => {
                frame.offset = align.child_offset(size, frame.size);
            }
            StackPlacement::Positioned(offsets) => {
                *frame = layout_positioned(i, &mut item.node, &offsets, size, align, &mut warnings);
            }
        }
    }

    tracing::trace!("stack layout, {} items in {:?}", items.len(), size);

    Ok(StackLayout { size, frames, warnings })
}

/// How a positioned item is placed on one axis.
enum AxisAnchor {
    Start(Px),
    End(Px),
    Align,
}

fn positioned_axis(
    index: usize,
    axis: LayoutAxis,
    offsets: &EdgeOffsets,
    stack: Px,
    warnings: &mut Vec<LayoutWarning>,
) -> (PxConstraints, AxisAnchor) {
    let (start, end, length) = offsets.axis(axis);

    // exact or bounded by `length`, negative lengths are zero
    let mut constrain = |length: Px, exact: bool| {
        if length < Px(0) {
            warn(warnings, LayoutWarning::NegativeSize { index, axis, length });
        }
        if exact {
            PxConstraints::new_exact(length)
        } else {
            PxConstraints::new_bounded(length)
        }
    };

    match (start, end) {
        (Some(s), Some(e)) => (constrain(stack - s - e, true), AxisAnchor::Start(s)),
        (Some(s), None) => (constrain(length.unwrap_or(stack - s), length.is_some()), AxisAnchor::Start(s)),
        (None, Some(e)) => (constrain(length.unwrap_or(stack - e), length.is_some()), AxisAnchor::End(e)),
        (None, None) => (constrain(length.unwrap_or(stack), length.is_some()), AxisAnchor::Align),
    }
}

fn layout_positioned<N: StackNode>(
    index: usize,
    node: &mut N,
    offsets: &EdgeOffsets,
    stack: PxSize,
    align: Align,
    warnings: &mut Vec<LayoutWarning>,
) -> StackFrame {
    let (x, anchor_x) = positioned_axis(index, LayoutAxis::X, offsets, stack.width, warnings);
    let (y, anchor_y) = positioned_axis(index, LayoutAxis::Y, offsets, stack.height, warnings);

    let constraints = PxConstraints2d { x, y };
    let size = constraints.clamp_size(node.layout(constraints));

    let aligned = align.child_offset(stack, size);
    let place = |anchor: AxisAnchor, stack: Px, length: Px, aligned: Px| match anchor {
        AxisAnchor::Start(s) => s,
        AxisAnchor::End(e) => stack - e - length,
        AxisAnchor::Align => aligned,
    };

    let offset = PxVector::new(
        place(anchor_x, stack.width, size.width, aligned.x),
        place(anchor_y, stack.height, size.height, aligned.y),
    );
    StackFrame::new(offset, size)
}

fn warn(warnings: &mut Vec<LayoutWarning>, warning: LayoutWarning) {
    tracing::warn!("{warning}");
    warnings.push(warning);
}

bitflags! {
    /// Pending stack updates.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct StackUpdates: u8 {
        /// Layout must run again.
        const LAYOUT = 1;
        /// Render must run again.
        const RENDER = 1 << 1;
    }
}

#[derive(Debug)]
struct LayoutCache {
    metrics: LayoutMetrics,
    mask: LayoutMask,
    layout: StackLayout,
}

/// Stack layout with a previous-frame cache.
///
/// Owns the [`StackConfig`] and the last [`StackLayout`], the layout is reused while the metrics
/// it used are unchanged and no update is requested. Config changes request the updates they affect,
/// the [`updates`] can be used by the host to schedule a new frame.
///
/// The items are not owned, call [`invalidate`] when the items change.
///
/// [`updates`]: Stack::updates
/// [`invalidate`]: Stack::invalidate
#[derive(Debug)]
pub struct Stack {
    config: StackConfig,
    updates: StackUpdates,
    cache: Option<LayoutCache>,
}
impl Stack {
    /// New stack, requests layout and render.
    pub fn new(config: StackConfig) -> Self {
        Stack {
            config,
            updates: StackUpdates::all(),
            cache: None,
        }
    }

    /// Current config.
    pub fn config(&self) -> &StackConfig {
        &self.config
    }

    /// Replace the config, requests the updates affected by the changed fields.
    pub fn set_config(&mut self, config: StackConfig) {
        if self.config.alignment != config.alignment || self.config.fit != config.fit {
            self.updates |= StackUpdates::LAYOUT;
        }
        if self.config.clip != config.clip {
            self.updates |= StackUpdates::RENDER;
        }
        self.config = config;
    }

    /// Set the [`StackConfig::alignment`].
    pub fn set_alignment(&mut self, alignment: impl Into<zng_layout::unit::AlignGeometry>) {
        self.set_config(self.config.with_alignment(alignment));
    }

    /// Set the [`StackConfig::fit`].
    pub fn set_fit(&mut self, fit: StackFit) {
        self.set_config(self.config.with_fit(fit));
    }

    /// Set the [`StackConfig::clip`].
    pub fn set_clip(&mut self, clip: ClipBehavior) {
        self.set_config(self.config.with_clip(clip));
    }

    /// Set the [`StackConfig::hit_test_mode`].
    ///
    /// Hit-test reads the mode directly, no update is requested.
    pub fn set_hit_test_mode(&mut self, mode: HitTestMode) {
        self.set_config(self.config.with_hit_test_mode(mode));
    }

    /// Pending updates.
    pub fn updates(&self) -> StackUpdates {
        self.updates
    }

    /// Request updates.
    pub fn request(&mut self, updates: StackUpdates) {
        self.updates |= updates;
    }

    /// Request layout, must be called when items are added, removed, moved or change size.
    pub fn invalidate(&mut self) {
        self.request(StackUpdates::LAYOUT);
    }

    /// Drop the cached layout.
    pub fn clear_cache(&mut self) {
        self.cache = None;
        self.updates |= StackUpdates::LAYOUT;
    }

    /// Last layout result.
    pub fn last_layout(&self) -> Option<&StackLayout> {
        self.cache.as_ref().map(|c| &c.layout)
    }

    /// Layout the `items` or reuse the cached layout.
    ///
    /// Requests render if the new layout is different from the previous one.
    pub fn layout<N: StackNode>(&mut self, items: &mut [StackItem<N>], metrics: &LayoutMetrics) -> Result<&StackLayout, LayoutError> {
        let cache = match self.cache.take() {
            Some(c) if !self.updates.contains(StackUpdates::LAYOUT) && c.layout.frames.len() == items.len() && c.metrics.masked_eq(metrics, c.mask) => {
                tracing::trace!("stack layout cache hit");
                c
            }
            prev => {
                tracing::debug!("stack layout cache miss");

                let layout = layout(items, metrics, &self.config)?;
                if prev.as_ref().map(|p| &p.layout) != Some(&layout) {
                    self.updates |= StackUpdates::RENDER;
                }
                self.updates.remove(StackUpdates::LAYOUT);

                let mut mask = LayoutMask::CONSTRAINTS;
                if self.config.alignment.is_directional() {
                    mask |= LayoutMask::DIRECTION;
                }
                LayoutCache {
                    metrics: *metrics,
                    mask,
                    layout,
                }
            }
        };
        Ok(&self.cache.insert(cache).layout)
    }

    /// Render the `items` using the last layout.
    ///
    /// Does nothing if the stack was never layout.
    ///
    /// # Panics
    ///
    /// Panics in debug builds if `items` is not the same count of items as the last layout, see [`render`](fn@crate::render).
    pub fn render<N: StackNode>(&mut self, items: &[StackItem<N>], frame: &mut dyn FrameSurface) {
        self.render_where(items, frame, |_| true)
    }

    pub(crate) fn render_where<N: StackNode>(&mut self, items: &[StackItem<N>], frame: &mut dyn FrameSurface, visible: impl Fn(usize) -> bool) {
        match &self.cache {
            Some(c) => {
                render_where(items, &c.layout, self.config.clip, frame, visible);
                self.updates.remove(StackUpdates::RENDER);
            }
            None => tracing::error!("cannot render stack, not layout"),
        }
    }

    /// Hit-test the `items` using the last layout, `point` is in the stack space.
    ///
    /// Returns the hits innermost first, empty if the stack was never layout.
    ///
    /// # Panics
    ///
    /// Panics in debug builds if `items` is not the same count of items as the last layout, see [`hit_test`](fn@crate::hit_test).
    pub fn hit_test<N: StackNode>(&self, items: &[StackItem<N>], point: PxPoint) -> Vec<N::Hit> {
        self.hit_test_where(items, point, |_| true)
    }

    pub(crate) fn hit_test_where<N: StackNode>(&self, items: &[StackItem<N>], point: PxPoint, interactive: impl Fn(usize) -> bool) -> Vec<N::Hit> {
        let mut hits = vec![];
        if let Some(c) = &self.cache {
            hit_test_where(items, &c.layout, self.config.clip, self.config.hit_test_mode, point, &mut hits, interactive);
        }
        hits
    }
}
impl Default for Stack {
    fn default() -> Self {
        Self::new(StackConfig::default())
    }
}
