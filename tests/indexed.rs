use pretty_assertions::assert_eq;
use zng_stack::{prelude::*, stack::IndexChange};

fn init_log() {
    let _ = tracing_subscriber::fmt()
        .with_test_writer()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .try_init();
}

fn items(sizes: &[(i32, i32)]) -> Vec<StackItem<SizedNode>> {
    sizes
        .iter()
        .enumerate()
        .map(|(i, &(w, h))| StackItem::aligned(SizedNode::new(i as u64, PxSize::new(Px(w), Px(h)))))
        .collect()
}

fn metrics() -> LayoutMetrics {
    LayoutMetrics::new(PxConstraints2d::new_bounded(Px(500), Px(500))).with_direction(LayoutDirection::LTR)
}

fn rendered_keys(s: &mut IndexedStack, items: &[StackItem<SizedNode>]) -> Vec<u64> {
    let mut list = DisplayList::new();
    s.render(items, &mut list);
    list.content().into_iter().map(|(k, _, _)| k).collect()
}

#[test]
fn out_of_range_selects_nothing() {
    init_log();

    let mut items = items(&[(10, 10), (20, 20), (30, 30), (40, 40)]);
    let mut s = IndexedStack::default();
    s.layout(&mut items, &metrics()).unwrap();

    let change = s.set_index(Some(5));
    assert_eq!(IndexChange { prev: None, new: None }, change);
    assert!(s.onstage(&items).is_empty());
    assert!(rendered_keys(&mut s, &items).is_empty());
    assert_eq!(Some(5), s.index());
}

#[test]
fn size_is_stable_across_selection() {
    init_log();

    let mut items = items(&[(10, 80), (60, 20), (30, 30)]);
    let mut s = IndexedStack::new(IndexedStackConfig {
        stack: StackConfig::default().with_alignment(Align::CENTER),
        ..Default::default()
    });

    let mut sizes = vec![];
    for i in [None, Some(0), Some(1), Some(2)] {
        s.set_index(i);
        sizes.push(s.layout(&mut items, &metrics()).unwrap().size);
        assert_eq!(i.map(|i| i as u64).into_iter().collect::<Vec<_>>(), rendered_keys(&mut s, &items));
    }

    assert!(sizes.iter().all(|&s| s == PxSize::new(Px(60), Px(80))));
    // selection does not relayout.
    assert!(items.iter().all(|i| i.node.layout_count() == 1));
}

#[test]
fn offstage_items_keep_frames() {
    init_log();

    let mut items = items(&[(10, 10), (20, 20)]);
    let mut s = IndexedStack::new(IndexedStackConfig {
        stack: StackConfig::default().with_alignment(Align::BOTTOM_RIGHT),
        offstage_focusable: false,
    });
    s.set_index(Some(0));
    let frames = s.layout(&mut items, &metrics()).unwrap().frames.clone();

    assert_eq!(PxVector::new(Px(10), Px(10)), frames[0].offset);
    assert_eq!(PxVector::new(Px(0), Px(0)), frames[1].offset);

    // item 1 is on top, but offstage.
    assert_eq!(vec![0], s.hit_test(&items, PxPoint::new(Px(15), Px(15))));
    assert!(s.hit_test(&items, PxPoint::new(Px(5), Px(5))).is_empty());
    assert_eq!(vec![0], s.focusable_indices(items.len()));

    s.set_index(Some(1));
    assert_eq!(vec![1], s.hit_test(&items, PxPoint::new(Px(5), Px(5))));
    assert_eq!(frames, s.layout(&mut items, &metrics()).unwrap().frames);
}

#[test]
fn items_grow_into_index() {
    init_log();

    let mut s = IndexedStack::default();
    let mut few = items(&[(10, 10)]);
    s.set_index(Some(2));
    s.layout(&mut few, &metrics()).unwrap();
    assert_eq!(None, s.onstage_index());

    let mut more = items(&[(10, 10), (10, 10), (10, 10)]);
    s.layout(&mut more, &metrics()).unwrap();
    assert_eq!(Some(2), s.onstage_index());
    assert_eq!(vec![2], rendered_keys(&mut s, &more));
}
