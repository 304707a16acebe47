use zng_layout::unit::{PxPoint, PxRectExt as _};

use crate::{ClipBehavior, HitTestMode, StackItem, StackLayout, StackNode};

/// Hit-test the stack `items` front-to-back.
///
/// The `point` is in the stack space. Items are tested from the last to the first, each item that contains
/// the point is asked to hit-test it in the item space. In [`HitTestMode::Opaque`] the first item that reports
/// a hit ends the test, items that decline let the test continue to the items below.
///
/// If `clip` is active for the `layout` points outside of the stack bounds do not hit any item.
///
/// Returns the hits innermost first.
///
/// # Panics
///
/// Panics in debug builds if the `layout` frames count does not match the `items` count. Release builds
/// do not check, only the items that have a frame are tested.
pub fn hit_test<N: StackNode>(
    items: &[StackItem<N>],
    layout: &StackLayout,
    clip: ClipBehavior,
    mode: HitTestMode,
    point: PxPoint,
) -> Vec<N::Hit> {
    let mut hits = vec![];
    hit_test_where(items, layout, clip, mode, point, &mut hits, |_| true);
    hits
}

pub(crate) fn hit_test_where<N: StackNode>(
    items: &[StackItem<N>],
    layout: &StackLayout,
    clip: ClipBehavior,
    mode: HitTestMode,
    point: PxPoint,
    hits: &mut Vec<N::Hit>,
    interactive: impl Fn(usize) -> bool,
) -> bool {
    debug_assert_eq!(items.len(), layout.frames.len(), "layout is not for the items");

    if clip.clips() && layout.has_overflow() && !layout.rect().contains_px(point) {
        return false;
    }

    let mut hit = false;
    for (i, (item, frame)) in items.iter().zip(&layout.frames).enumerate().rev() {
        if !interactive(i) || !frame.contains(point) {
            continue;
        }

        if item.node.hit_test(frame.size, point - frame.offset, hits) {
            hit = true;
            if let HitTestMode::Opaque = mode {
                break;
            }
        }
    }
    hit
}
