use super::pool::Resettable;
use super::types::{NodeId, Quadrant, RectExtent};
use common::shapes::Rectangle;
use smallvec::SmallVec;

pub(crate) struct QuadNode<T> {
    pub(crate) boundary: RectExtent,
    pub(crate) children: Option<[NodeId; 4]>,
    // Items that straddle the child quadrants, or every item once max depth is reached.
    pub(crate) items: SmallVec<[T; 4]>,
    pub(crate) has_items: bool,
    pub(crate) quadrant: Quadrant,
}

impl<T> QuadNode<T> {
    pub(crate) fn new() -> Self {
        Self {
            boundary: RectExtent::default(),
            children: None,
            items: SmallVec::new(),
            has_items: false,
            quadrant: Quadrant::Root,
        }
    }

    pub(crate) fn initialize(&mut self, boundary: RectExtent, quadrant: Quadrant) {
        self.boundary = boundary;
        self.quadrant = quadrant;
        self.children = None;
        self.items.clear();
        self.has_items = false;
    }

    #[inline(always)]
    pub(crate) fn is_divided(&self) -> bool {
        self.children.is_some()
    }

    pub(crate) fn push_item(&mut self, item: T) {
        self.items.push(item);
        self.has_items = true;
    }

    pub(crate) fn remove_item_at(&mut self, index: usize) -> T {
        let item = self.items.swap_remove(index);
        self.has_items = !self.items.is_empty();
        item
    }
}

impl<T> Default for QuadNode<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Resettable for QuadNode<T> {
    fn reset(&mut self) {
        self.initialize(RectExtent::default(), Quadrant::Root);
    }
}

/// Read-only snapshot of one quadrant, handed out by
/// [`QuadTree::visit_nodes`](super::QuadTree::visit_nodes).
#[derive(Debug)]
pub struct NodeView<'a, T> {
    pub boundary: Rectangle,
    pub depth: usize,
    pub quadrant: Quadrant,
    pub divided: bool,
    pub items: &'a [T],
}
