use super::*;
use std::fmt;

impl<T> QuadTree<T> {
    pub fn boundary(&self) -> Rectangle {
        self.pool[ROOT].boundary.to_rect()
    }

    pub fn max_depth(&self) -> usize {
        self.config.max_depth
    }

    pub fn capacity(&self) -> usize {
        self.config.capacity
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Quadrant nodes currently linked into the tree, root included.
    pub fn node_count(&self) -> usize {
        self.pool.in_use()
    }

    /// Spare nodes the pool can hand out before it has to allocate.
    pub fn pool_available(&self) -> usize {
        self.pool.available()
    }

    /// Total node slots owned by the pool, in use or spare.
    pub fn pool_allocated(&self) -> usize {
        self.pool.allocated()
    }

    /// Calls `visit` with the boundary of every quadrant, parents before children.
    pub fn traverse<F>(&self, mut visit: F)
    where
        F: FnMut(Rectangle),
    {
        self.visit_nodes(|node| visit(node.boundary));
    }

    pub fn all_node_bounding_boxes(&self, bounding_boxes: &mut Vec<Rectangle>) {
        self.traverse(|boundary| bounding_boxes.push(boundary));
    }

    /// Pre-order walk over every quadrant with its depth and stored items.
    pub fn visit_nodes<'a, F>(&'a self, mut visit: F)
    where
        F: FnMut(&NodeView<'a, T>),
    {
        self.visit_from(ROOT, 0, &mut visit);
    }

    fn visit_from<'a, F>(&'a self, id: NodeId, depth: usize, visit: &mut F)
    where
        F: FnMut(&NodeView<'a, T>),
    {
        let node = &self.pool[id];
        visit(&NodeView {
            boundary: node.boundary.to_rect(),
            depth,
            quadrant: node.quadrant,
            divided: node.is_divided(),
            items: &node.items,
        });
        if let Some(children) = node.children {
            for child in children {
                self.visit_from(child, depth + 1, visit);
            }
        }
    }

    /// Every stored item, node by node in pre-order.
    pub fn iter(&self) -> Iter<'_, T> {
        let mut stack = NodeStack::new();
        stack.push(ROOT);
        Iter {
            pool: &self.pool,
            stack,
            items: <&[T]>::default().iter(),
        }
    }
}

impl<T> fmt::Debug for QuadTree<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("QuadTree")
            .field("boundary", &self.boundary())
            .field("len", &self.len)
            .field("nodes", &self.pool.in_use())
            .field("config", &self.config)
            .finish()
    }
}

impl<'a, T> IntoIterator for &'a QuadTree<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}

pub struct Iter<'a, T> {
    pool: &'a NodePool<T>,
    stack: NodeStack,
    items: std::slice::Iter<'a, T>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        loop {
            if let Some(item) = self.items.next() {
                return Some(item);
            }
            let id = self.stack.pop()?;
            let pool: &'a NodePool<T> = self.pool;
            let node = &pool[id];
            if let Some(children) = node.children {
                self.stack.extend(children.into_iter().rev());
            }
            self.items = node.items.iter();
        }
    }
}
