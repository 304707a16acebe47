use zng_layout::unit::{PxConstraints2d, PxPoint, PxRect, PxRectExt as _, PxSize};

use crate::{FrameSurface, StackNode};

/// Leaf stack node with a preferred size.
///
/// Layouts to the preferred size clamped by the constraints, renders one content rectangle
/// identified by the `key` and reports the `key` as a hit inside its bounds.
#[derive(Debug, Clone, PartialEq)]
pub struct SizedNode {
    key: u64,
    size: PxSize,
    hit_testable: bool,
    last_constraints: Option<PxConstraints2d>,
    layout_count: usize,
}
impl SizedNode {
    /// New hit-testable node.
    pub fn new(key: u64, size: PxSize) -> Self {
        SizedNode {
            key,
            size,
            hit_testable: true,
            last_constraints: None,
            layout_count: 0,
        }
    }

    /// Sets if the node reports hits, a node that is not hit-testable declines all hits.
    pub fn with_hit_testable(mut self, hit_testable: bool) -> Self {
        self.hit_testable = hit_testable;
        self
    }

    /// Content key.
    pub fn key(&self) -> u64 {
        self.key
    }

    /// Preferred size.
    pub fn size(&self) -> PxSize {
        self.size
    }

    /// Change the preferred size, the parent stack must be invalidated.
    pub fn set_size(&mut self, size: PxSize) {
        self.size = size;
    }

    /// Constraints of the last layout.
    pub fn last_constraints(&self) -> Option<PxConstraints2d> {
        self.last_constraints
    }

    /// Number of times the node was layout.
    pub fn layout_count(&self) -> usize {
        self.layout_count
    }
}
impl StackNode for SizedNode {
    type Hit = u64;

    fn layout(&mut self, constraints: PxConstraints2d) -> PxSize {
        self.last_constraints = Some(constraints);
        self.layout_count += 1;
        constraints.clamp_size(self.size)
    }

    fn render(&self, size: PxSize, frame: &mut dyn FrameSurface) {
        frame.push_rect(PxRect::from_size(size), self.key);
    }

    fn hit_test(&self, size: PxSize, point: PxPoint, hits: &mut Vec<u64>) -> bool {
        if self.hit_testable && PxRect::from_size(size).contains_px(point) {
            hits.push(self.key);
            true
        } else {
            false
        }
    }
}
