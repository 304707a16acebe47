use zng_layout::unit::{PxRect, PxVector};

use crate::{ClipBehavior, StackItem, StackLayout, StackNode};

/// Host paint surface.
///
/// The stack only pushes transforms and clips, item content is pushed by the items.
pub trait FrameSurface {
    /// Push a translation, all items pushed until the matching [`pop_translate`] are offset.
    ///
    /// [`pop_translate`]: FrameSurface::pop_translate
    fn push_translate(&mut self, offset: PxVector);

    /// Pop the last translation.
    fn pop_translate(&mut self);

    /// Push a clip rectangle in the current space, using the `clip` mode.
    fn push_clip_rect(&mut self, rect: PxRect, clip: ClipBehavior);

    /// Pop the last clip.
    fn pop_clip(&mut self);

    /// Push a content rectangle in the current space, the `key` identifies the content.
    fn push_rect(&mut self, rect: PxRect, key: u64);
}

/// Display item recorded by [`DisplayList`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DisplayItem {
    /// [`FrameSurface::push_translate`].
    PushTranslate(PxVector),
    /// [`FrameSurface::pop_translate`].
    PopTranslate,
    /// [`FrameSurface::push_clip_rect`].
    PushClip {
        /// Clip rectangle.
        rect: PxRect,
        /// Clip mode.
        clip: ClipBehavior,
    },
    /// [`FrameSurface::pop_clip`].
    PopClip,
    /// [`FrameSurface::push_rect`].
    Rect {
        /// Content rectangle.
        rect: PxRect,
        /// Content key.
        key: u64,
    },
}

/// Recording [`FrameSurface`].
///
/// Retained scene hosts can replay the items into their own scene.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DisplayList {
    items: Vec<DisplayItem>,
}
impl DisplayList {
    /// New empty list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Recorded items.
    pub fn items(&self) -> &[DisplayItem] {
        &self.items
    }

    /// Number of recorded items.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// If no item was recorded.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Remove all items.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Take the recorded items.
    pub fn into_items(self) -> Vec<DisplayItem> {
        self.items
    }

    /// Content rectangles in the root space, in paint order.
    ///
    /// Each entry is the content `key`, the rectangle translated to the root space and the
    /// intersection of all active clips, `None` if not clipped.
    pub fn content(&self) -> Vec<(u64, PxRect, Option<PxRect>)> {
        let mut r = vec![];
        let mut offset = PxVector::zero();
        let mut offsets = vec![];
        let mut clips: Vec<PxRect> = vec![];

        for item in &self.items {
            match *item {
                DisplayItem::PushTranslate(o) => {
                    offsets.push(offset);
                    offset += o;
                }
                DisplayItem::PopTranslate => {
                    offset = offsets.pop().unwrap_or_else(PxVector::zero);
                }
                DisplayItem::PushClip { rect, .. } => {
                    let rect = rect.translate(offset);
                    let rect = match clips.last() {
                        Some(c) => c.intersection(&rect).unwrap_or_else(|| PxRect::new(rect.origin, Default::default())),
                        None => rect,
                    };
                    clips.push(rect);
                }
                DisplayItem::PopClip => {
                    clips.pop();
                }
                DisplayItem::Rect { rect, key } => {
                    r.push((key, rect.translate(offset), clips.last().copied()));
                }
            }
        }

        r
    }
}
impl FrameSurface for DisplayList {
    fn push_translate(&mut self, offset: PxVector) {
        self.items.push(DisplayItem::PushTranslate(offset));
    }

    fn pop_translate(&mut self) {
        self.items.push(DisplayItem::PopTranslate);
    }

    fn push_clip_rect(&mut self, rect: PxRect, clip: ClipBehavior) {
        self.items.push(DisplayItem::PushClip { rect, clip });
    }

    fn pop_clip(&mut self) {
        self.items.push(DisplayItem::PopClip);
    }

    fn push_rect(&mut self, rect: PxRect, key: u64) {
        self.items.push(DisplayItem::Rect { rect, key });
    }
}

/// Render the stack `items` back-to-front.
///
/// Items are rendered in their order, the first item is at the bottom. If `clip` is not `None` and
/// any item frame overflows the stack bounds all items are clipped to the stack bounds.
///
/// The `layout` must be the result of the last layout of the same `items`.
///
/// # Panics
///
/// Panics in debug builds if the `layout` frames count does not match the `items` count. Release builds
/// do not check, only the items that have a frame are rendered.
pub fn render<N: StackNode>(items: &[StackItem<N>], layout: &StackLayout, clip: ClipBehavior, frame: &mut dyn FrameSurface) {
    render_where(items, layout, clip, frame, |_| true)
}

pub(crate) fn render_where<N: StackNode>(
    items: &[StackItem<N>],
    layout: &StackLayout,
    clip: ClipBehavior,
    frame: &mut dyn FrameSurface,
    visible: impl Fn(usize) -> bool,
) {
    debug_assert_eq!(items.len(), layout.frames.len(), "layout is not for the items");

    let clip_active = clip.clips() && layout.has_overflow();
    if clip_active {
        frame.push_clip_rect(layout.rect(), clip);
    }

    for (i, (item, f)) in items.iter().zip(&layout.frames).enumerate() {
        if !visible(i) {
            continue;
        }
        frame.push_translate(f.offset);
        item.node.render(f.size, frame);
        frame.pop_translate();
    }

    if clip_active {
        frame.pop_clip();
    }
}
