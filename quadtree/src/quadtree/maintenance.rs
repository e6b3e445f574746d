use super::*;

impl<T> QuadTree<T> {
    /// Returns empty subtrees to the node pool. Stored items are untouched.
    pub fn clean(&mut self) {
        let before = self.pool.in_use();
        let _ = self.clean_node(ROOT);
        debug!(
            released = before - self.pool.in_use(),
            nodes = self.pool.in_use(),
            "cleaned quadtree"
        );
    }

    // Post-order. Returns whether anything is stored in this subtree.
    fn clean_node(&mut self, id: NodeId) -> bool {
        let mut occupied = self.pool[id].has_items;
        let Some(children) = self.pool[id].children else {
            return occupied;
        };
        for child in children {
            occupied |= self.clean_node(child);
        }
        if !occupied {
            self.release_children(id);
        }
        occupied
    }

    /// Drops every item and returns every quadrant below the root to the pool.
    pub fn clear(&mut self) {
        let before = self.pool.in_use();
        self.clear_node(ROOT);
        self.len = 0;
        debug!(released = before - self.pool.in_use(), "cleared quadtree");
    }

    fn clear_node(&mut self, id: NodeId) {
        self.release_children(id);
        let node = &mut self.pool[id];
        node.items.clear();
        node.has_items = false;
    }

    fn release_children(&mut self, id: NodeId) {
        let Some(children) = self.pool[id].children.take() else {
            return;
        };
        for child in children {
            self.release_children(child);
            self.pool.release(child);
        }
        trace!(node = id.0, "released child quadrants");
    }

    /// Replaces the world boundary. Only allowed while the tree stores no items;
    /// any leftover quadrants are released first.
    pub fn set_boundary(&mut self, bounding_box: Rectangle) -> QuadtreeResult<()> {
        let boundary = RectExtent::from_rect(&bounding_box)?;
        self.replace_boundary(boundary)
    }

    pub fn set_boundary_min_max(
        &mut self,
        min_x: f32,
        min_y: f32,
        max_x: f32,
        max_y: f32,
    ) -> QuadtreeResult<()> {
        let boundary = RectExtent::from_min_max(min_x, min_y, max_x, max_y)?;
        self.replace_boundary(boundary)
    }

    fn replace_boundary(&mut self, boundary: RectExtent) -> QuadtreeResult<()> {
        self.ensure_unpopulated()?;
        self.clear();
        self.pool[ROOT].boundary = boundary;
        debug!(?boundary, "quadtree boundary changed");
        Ok(())
    }

    /// Changes the maximum depth. Only allowed while the tree stores no items.
    pub fn set_max_depth(&mut self, max_depth: usize) -> QuadtreeResult<()> {
        self.ensure_unpopulated()?;
        self.clear();
        self.config.max_depth = max_depth;
        debug!(max_depth, "quadtree max depth changed");
        Ok(())
    }

    /// Reserved per-node capacity. Recorded but not used by insertion.
    pub fn set_capacity(&mut self, capacity: usize) {
        self.config.capacity = capacity;
    }

    fn ensure_unpopulated(&self) -> QuadtreeResult<()> {
        if self.len > 0 {
            return Err(QuadtreeError::TreeNotEmpty { len: self.len });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clean_keeps_children_of_occupied_nodes() {
        let mut qt = QuadTree::new_with_config(
            Rectangle::from_min_max(0.0, 0.0, 100.0, 100.0),
            Config {
                max_depth: 1,
                ..Config::default()
            },
        )
        .unwrap();
        // Straddles the center, so it stays at the root.
        qt.add(Rectangle::new(50.0, 50.0, 10.0, 10.0)).unwrap();
        assert_eq!(qt.node_count(), 5);

        qt.clean();
        assert_eq!(qt.node_count(), 5);
        assert!(qt.pool[ROOT].is_divided());
    }

    #[test]
    fn clean_releases_a_subtree_bottom_up() {
        let mut qt = QuadTree::new_with_config(
            Rectangle::from_min_max(0.0, 0.0, 100.0, 100.0),
            Config {
                max_depth: 3,
                pool_size: 0,
                ..Config::default()
            },
        )
        .unwrap();
        let deep = Rectangle::new(5.0, 5.0, 1.0, 1.0);
        let straddling = Rectangle::new(50.0, 50.0, 10.0, 10.0);
        qt.add(deep).unwrap();
        qt.add(straddling).unwrap();
        assert_eq!(qt.node_count(), 13);

        assert!(qt.remove(&deep));
        qt.clean();
        assert_eq!(qt.node_count(), 5);
        assert_eq!(qt.pool.available(), 8);
        for child in qt.pool[ROOT].children.unwrap() {
            assert!(!qt.pool[child].is_divided());
        }
    }

    #[test]
    fn clear_resets_root_but_keeps_boundary() {
        let mut qt = QuadTree::new(Rectangle::from_min_max(0.0, 0.0, 100.0, 100.0)).unwrap();
        qt.add(Rectangle::new(50.0, 50.0, 10.0, 10.0)).unwrap();
        qt.add(Rectangle::new(5.0, 5.0, 1.0, 1.0)).unwrap();
        qt.clear();

        assert!(qt.pool[ROOT].items.is_empty());
        assert!(!qt.pool[ROOT].has_items);
        assert!(!qt.pool[ROOT].is_divided());
        assert_eq!(qt.boundary(), Rectangle::from_min_max(0.0, 0.0, 100.0, 100.0));
        assert_eq!(qt.len(), 0);
    }
}
