use serde::{Deserialize, Serialize};
use zng_layout::{context::LayoutMetrics, unit::PxPoint, LayoutError};

use crate::{FrameSurface, Stack, StackConfig, StackItem, StackLayout, StackNode, StackUpdates};

/// Indexed stack configuration.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct IndexedStackConfig {
    /// Config of the inner stack.
    pub stack: StackConfig,
    /// If offstage items stay in the focus traversal.
    ///
    /// This only affects [`IndexedStack::focusable_indices`]. Offstage items are never interactive, pointer
    /// hits only reach the onstage item, see [`IndexedStack::is_interactive`].
    /// Default is `true`, focus inside an item is retained when it is selected again.
    pub offstage_focusable: bool,
}
impl Default for IndexedStackConfig {
    fn default() -> Self {
        Self {
            stack: StackConfig::default(),
            offstage_focusable: true,
        }
    }
}

/// Selection transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct IndexChange {
    /// Onstage index before the change.
    pub prev: Option<usize>,
    /// Onstage index after the change.
    pub new: Option<usize>,
}
impl IndexChange {
    /// If the onstage item changed.
    pub fn is_changed(&self) -> bool {
        self.prev != self.new
    }
}

/// Stack that shows only one of the items.
///
/// All items are layout, the stack size is computed from all of them, but only the selected item
/// is rendered and receives pointer hits. Offstage items keep their frames and state, so they can
/// be selected again without disruption.
///
/// The selected index is optional, an index that is out of range selects nothing until the items grow to include it.
#[derive(Debug)]
pub struct IndexedStack {
    stack: Stack,
    offstage_focusable: bool,
    index: Option<usize>,
    active: Vec<bool>,
}
impl IndexedStack {
    /// New with nothing selected.
    pub fn new(config: IndexedStackConfig) -> Self {
        IndexedStack {
            stack: Stack::new(config.stack),
            offstage_focusable: config.offstage_focusable,
            index: None,
            active: vec![],
        }
    }

    /// Current config.
    pub fn config(&self) -> IndexedStackConfig {
        IndexedStackConfig {
            stack: *self.stack.config(),
            offstage_focusable: self.offstage_focusable,
        }
    }

    /// Set if offstage items stay in the focus traversal.
    pub fn set_offstage_focusable(&mut self, focusable: bool) {
        self.offstage_focusable = focusable;
    }

    /// Inner stack.
    pub fn stack(&self) -> &Stack {
        &self.stack
    }

    /// Inner stack, can be used to change the stack config.
    pub fn stack_mut(&mut self) -> &mut Stack {
        &mut self.stack
    }

    /// The requested index, may be out of range.
    pub fn index(&self) -> Option<usize> {
        self.index
    }

    /// Number of items known by the last [`sync_len`](Self::sync_len).
    pub fn len(&self) -> usize {
        self.active.len()
    }

    /// If no items are known.
    pub fn is_empty(&self) -> bool {
        self.active.is_empty()
    }

    /// Index of the onstage item, `None` if nothing is selected or the index is out of range.
    pub fn onstage_index(&self) -> Option<usize> {
        self.index.filter(|&i| i < self.active.len())
    }

    /// Select the item at `index`, or no item.
    ///
    /// Out of range indexes select nothing. Requests render if the onstage item changes, layout is not affected.
    pub fn set_index(&mut self, index: Option<usize>) -> IndexChange {
        let prev = self.onstage_index();
        self.index = index;
        let new = self.onstage_index();

        if let Some(i) = index {
            if new.is_none() {
                tracing::trace!("index {i} out of range for {} items, nothing onstage", self.active.len());
            }
        }

        let change = IndexChange { prev, new };
        if change.is_changed() {
            self.sync_active();
            self.stack.request(StackUpdates::RENDER);
            tracing::debug!("indexed stack onstage changed from {prev:?} to {new:?}");
        }
        change
    }

    /// Update the items count.
    ///
    /// The index is re-evaluated, returns the onstage change.
    pub fn sync_len(&mut self, len: usize) -> IndexChange {
        let prev = self.onstage_index();
        if len != self.active.len() {
            self.active.resize(len, false);
            self.stack.invalidate();
        }
        let new = self.onstage_index();

        let change = IndexChange { prev, new };
        if change.is_changed() {
            self.stack.request(StackUpdates::RENDER);
            tracing::debug!("indexed stack onstage changed from {prev:?} to {new:?}, items resized to {len}");
        }
        self.sync_active();
        change
    }

    fn sync_active(&mut self) {
        let onstage = self.onstage_index();
        for (i, a) in self.active.iter_mut().enumerate() {
            *a = Some(i) == onstage;
        }
    }

    /// If the item at `index` is onstage.
    pub fn is_active(&self, index: usize) -> bool {
        self.active.get(index).copied().unwrap_or(false)
    }

    /// If the item at `index` receives pointer hits, only the onstage item does.
    ///
    /// Not affected by [`IndexedStackConfig::offstage_focusable`].
    pub fn is_interactive(&self, index: usize) -> bool {
        self.is_active(index)
    }

    /// Indexes of items in the focus traversal, of a stack with `len` items.
    ///
    /// All items if offstage items are focusable, otherwise only the onstage item.
    pub fn focusable_indices(&self, len: usize) -> Vec<usize> {
        if self.offstage_focusable {
            (0..len).collect()
        } else {
            self.index.filter(|&i| i < len).into_iter().collect()
        }
    }

    /// Gets the onstage item, empty or one item.
    ///
    /// This is the traversal used by assistive and debug tools, offstage items are not included. The
    /// onstage item is the one rendered, so nothing is onstage until the items count is synced.
    pub fn onstage<'a, N>(&self, items: &'a [StackItem<N>]) -> Vec<&'a StackItem<N>> {
        self.onstage_index().and_then(|i| items.get(i)).into_iter().collect()
    }

    /// Layout all `items`.
    pub fn layout<N: StackNode>(&mut self, items: &mut [StackItem<N>], metrics: &LayoutMetrics) -> Result<&StackLayout, LayoutError> {
        self.sync_len(items.len());
        self.stack.layout(items, metrics)
    }

    /// Render the onstage item.
    pub fn render<N: StackNode>(&mut self, items: &[StackItem<N>], frame: &mut dyn FrameSurface) {
        let active = &self.active;
        self.stack.render_where(items, frame, |i| active.get(i).copied().unwrap_or(false));
    }

    /// Hit-test the onstage item.
    pub fn hit_test<N: StackNode>(&self, items: &[StackItem<N>], point: PxPoint) -> Vec<N::Hit> {
        self.stack.hit_test_where(items, point, |i| self.is_interactive(i))
    }
}
impl Default for IndexedStack {
    fn default() -> Self {
        Self::new(IndexedStackConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use zng_layout::{
        context::LayoutDirection,
        unit::{Px, PxConstraints2d, PxRect, PxSize},
    };

    use super::*;
    use crate::{DisplayList, SizedNode};

    fn items() -> Vec<StackItem<SizedNode>> {
        (0..4).map(|i| StackItem::aligned(SizedNode::new(i, PxSize::new(Px(10 * (i as i32 + 1)), Px(10))))).collect()
    }

    fn metrics() -> LayoutMetrics {
        LayoutMetrics::new(PxConstraints2d::new_bounded(Px(100), Px(100))).with_direction(LayoutDirection::LTR)
    }

    #[test]
    fn onstage_out_of_range_is_empty() {
        let items = items();
        let mut s = IndexedStack::default();
        s.sync_len(items.len());

        assert!(s.onstage(&items).is_empty());

        s.set_index(Some(5));
        assert!(s.onstage(&items).is_empty());
        assert_eq!(None, s.onstage_index());

        s.set_index(Some(2));
        let onstage = s.onstage(&items);
        assert_eq!(1, onstage.len());
        assert_eq!(2, onstage[0].node.key());
    }

    #[test]
    fn all_items_layout_only_selected_render() {
        let mut items = items();
        let mut s = IndexedStack::default();
        s.set_index(Some(1));

        let size = s.layout(&mut items, &metrics()).unwrap().size;
        assert_eq!(PxSize::new(Px(40), Px(10)), size);
        assert!(items.iter().all(|i| i.node.layout_count() == 1));

        let mut list = DisplayList::new();
        s.render(&items, &mut list);
        let keys: Vec<_> = list.content().into_iter().map(|(k, _, _)| k).collect();
        assert_eq!(vec![1], keys);
    }

    #[test]
    fn selection_requests_render_only() {
        let mut items = items();
        let mut s = IndexedStack::default();
        s.layout(&mut items, &metrics()).unwrap();
        s.render(&items, &mut DisplayList::new());
        assert_eq!(StackUpdates::empty(), s.stack().updates());

        let change = s.set_index(Some(3));
        assert_eq!(IndexChange { prev: None, new: Some(3) }, change);
        assert_eq!(StackUpdates::RENDER, s.stack().updates());

        s.layout(&mut items, &metrics()).unwrap();
        assert!(items.iter().all(|i| i.node.layout_count() == 1));

        assert!(!s.set_index(Some(3)).is_changed());
    }

    #[test]
    fn index_revalidated_on_len_change() {
        let mut s = IndexedStack::default();
        s.sync_len(2);
        s.set_index(Some(3));
        assert_eq!(None, s.onstage_index());

        let change = s.sync_len(4);
        assert_eq!(Some(3), change.new);
        assert!(s.is_active(3));
        assert!(!s.is_active(0));

        let change = s.sync_len(3);
        assert_eq!(IndexChange { prev: Some(3), new: None }, change);
        assert!(!s.is_active(3));
    }

    #[test]
    fn offstage_hit_test_and_focus() {
        let mut items = items();
        let mut s = IndexedStack::default();
        s.set_index(Some(0));
        s.layout(&mut items, &metrics()).unwrap();

        // item 3 is on top, but offstage.
        assert_eq!(vec![0], s.hit_test(&items, PxPoint::new(Px(5), Px(5))));
        assert!(s.hit_test(&items, PxPoint::new(Px(35), Px(5))).is_empty());

        assert_eq!(vec![0, 1, 2, 3], s.focusable_indices(items.len()));
        s.set_offstage_focusable(false);
        assert_eq!(vec![0], s.focusable_indices(items.len()));
        assert_eq!(vec![0], s.hit_test(&items, PxPoint::new(Px(5), Px(5))));
        assert!(!s.is_interactive(3));

        s.set_index(None);
        assert!(s.focusable_indices(items.len()).is_empty());
        assert!(s.hit_test(&items, PxPoint::new(Px(5), Px(5))).is_empty());
    }

    #[test]
    fn onstage_needs_synced_len() {
        let mut items = items();
        let mut s = IndexedStack::default();
        s.set_index(Some(1));

        assert!(s.onstage(&items).is_empty());
        assert!(!s.is_active(1));

        s.layout(&mut items, &metrics()).unwrap();
        assert_eq!(1, s.onstage(&items)[0].node.key());
        assert!(s.is_active(1));
    }

    #[test]
    fn offstage_overflow_clips_onstage_hits() {
        let mut items = vec![
            StackItem::aligned(SizedNode::new(0, PxSize::new(Px(40), Px(40)))),
            StackItem::positioned(
                SizedNode::new(1, PxSize::new(Px(30), Px(30))),
                crate::EdgeOffsets::default().with_left(Px(30)).with_top(Px(30)).with_size(PxSize::new(Px(30), Px(30))),
            ),
            StackItem::positioned(
                SizedNode::new(2, PxSize::new(Px(60), Px(60))),
                crate::EdgeOffsets::default().with_left(Px(0)).with_top(Px(0)).with_size(PxSize::new(Px(60), Px(60))),
            ),
        ];
        let mut s = IndexedStack::default();
        s.set_index(Some(2));
        let layout = s.layout(&mut items, &metrics()).unwrap();
        assert_eq!(PxSize::new(Px(40), Px(40)), layout.size);
        assert!(layout.has_overflow());

        // item 2 overflows, hits outside the stack are clipped.
        assert_eq!(vec![2], s.hit_test(&items, PxPoint::new(Px(20), Px(20))));
        assert!(s.hit_test(&items, PxPoint::new(Px(50), Px(50))).is_empty());

        // item 1 is offstage, its overflow still clips item 2.
        items[2] = StackItem::positioned(
            SizedNode::new(2, PxSize::new(Px(20), Px(20))),
            crate::EdgeOffsets::default().with_left(Px(0)).with_top(Px(0)).with_size(PxSize::new(Px(20), Px(20))),
        );
        s.stack_mut().invalidate();
        assert!(s.layout(&mut items, &metrics()).unwrap().has_overflow());
        let mut list = DisplayList::new();
        s.render(&items, &mut list);
        let content = list.content();
        assert_eq!(1, content.len());
        assert_eq!(Some(PxRect::from_size(PxSize::new(Px(40), Px(40)))), content[0].2);
        assert_eq!(vec![2], s.hit_test(&items, PxPoint::new(Px(10), Px(10))));

        s.stack_mut().set_clip(crate::ClipBehavior::None);
        s.set_index(Some(1));
        assert_eq!(vec![1], s.hit_test(&items, PxPoint::new(Px(50), Px(50))));
    }

    #[test]
    fn config_json_defaults() {
        let cfg: IndexedStackConfig = serde_json::from_str(r#"{ "stack": { "clip": "None" } }"#).unwrap();
        assert!(cfg.offstage_focusable);
        assert_eq!(crate::ClipBehavior::None, cfg.stack.clip);
    }
}
