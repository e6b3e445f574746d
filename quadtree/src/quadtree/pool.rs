use super::node::QuadNode;
use super::types::{NodeId, Quadrant, RectExtent, ROOT};
use std::ops::{Index, IndexMut};
use tracing::trace;

pub(crate) trait Resettable {
    fn reset(&mut self);
}

/// Arena of quad nodes plus a free-list stack of the slots not currently in the tree.
///
/// Slot 0 is always the root and never goes through the free list.
pub(crate) struct NodePool<T> {
    slots: Vec<QuadNode<T>>,
    free: Vec<NodeId>,
}

impl<T> NodePool<T> {
    pub(crate) fn with_root(boundary: RectExtent, spare: usize) -> Self {
        let mut slots = Vec::with_capacity(spare + 1);
        let mut root = QuadNode::new();
        root.initialize(boundary, Quadrant::Root);
        slots.push(root);
        slots.extend((0..spare).map(|_| QuadNode::new()));

        // Reversed so the lowest slots are handed out first.
        let free = (1..=spare as u32).rev().map(NodeId).collect();
        Self { slots, free }
    }

    pub(crate) fn acquire(&mut self, boundary: RectExtent, quadrant: Quadrant) -> NodeId {
        match self.free.pop() {
            Some(id) => {
                self.slots[id.0 as usize].initialize(boundary, quadrant);
                id
            }
            None => {
                let id = NodeId(self.slots.len() as u32);
                let mut node = QuadNode::new();
                node.initialize(boundary, quadrant);
                self.slots.push(node);
                trace!(slot = id.0, "node pool exhausted, allocated a new slot");
                id
            }
        }
    }

    pub(crate) fn release(&mut self, id: NodeId) {
        debug_assert!(id != ROOT, "the root node is never released");
        debug_assert!(!self.free.contains(&id), "node {} released twice", id.0);
        self.slots[id.0 as usize].reset();
        self.free.push(id);
    }

    /// Spare nodes ready to be handed out without allocating.
    pub(crate) fn available(&self) -> usize {
        self.free.len()
    }

    pub(crate) fn allocated(&self) -> usize {
        self.slots.len()
    }

    /// Nodes currently linked into the tree, root included.
    pub(crate) fn in_use(&self) -> usize {
        self.slots.len() - self.free.len()
    }
}

impl<T> Index<NodeId> for NodePool<T> {
    type Output = QuadNode<T>;

    fn index(&self, id: NodeId) -> &QuadNode<T> {
        &self.slots[id.0 as usize]
    }
}

impl<T> IndexMut<NodeId> for NodePool<T> {
    fn index_mut(&mut self, id: NodeId) -> &mut QuadNode<T> {
        &mut self.slots[id.0 as usize]
    }
}
