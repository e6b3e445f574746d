use super::*;

impl<T> QuadTree<T> {
    pub fn new(bounding_box: Rectangle) -> QuadtreeResult<Self> {
        Self::new_with_config(bounding_box, Config::default())
    }

    pub fn new_with_config(bounding_box: Rectangle, config: Config) -> QuadtreeResult<Self> {
        let boundary = RectExtent::from_rect(&bounding_box)?;
        debug!(
            ?bounding_box,
            max_depth = config.max_depth,
            pool_size = config.pool_size,
            "creating quadtree"
        );
        Ok(Self {
            pool: NodePool::with_root(boundary, config.pool_size),
            config,
            len: 0,
        })
    }

    // Quarters a leaf. Children come from the pool in `Quadrant::CHILDREN` order.
    fn divide(&mut self, id: NodeId) -> [NodeId; 4] {
        debug_assert!(!self.pool[id].is_divided());
        let boundary = self.pool[id].boundary;
        let pool = &mut self.pool;
        let children =
            Quadrant::CHILDREN.map(|quadrant| pool.acquire(boundary.quadrant(quadrant), quadrant));
        self.pool[id].children = Some(children);
        trace!(node = id.0, ?children, "divided quadrant");
        children
    }
}

impl<T: Shape + PartialEq> QuadTree<T> {
    /// Stores `item` in the deepest quadrant that fully contains its bounding box.
    ///
    /// Fails without storing anything when the bounding box is malformed or
    /// lies outside the tree boundary. The item is dropped in that case.
    pub fn add(&mut self, item: T) -> QuadtreeResult<()> {
        let extent = RectExtent::from_rect(&item.bounding_box())?;
        self.ensure_extent_in_bounds(extent)?;
        match self.add_into(ROOT, extent, item, self.config.max_depth) {
            Placement::Added => {
                self.len += 1;
                Ok(())
            }
            Placement::NoFit(_) => Err(self.out_of_bounds(extent)),
        }
    }

    fn add_into(
        &mut self,
        id: NodeId,
        extent: RectExtent,
        item: T,
        depth_remaining: usize,
    ) -> Placement<T> {
        if !extent_contains_extent(&self.pool[id].boundary, &extent) {
            return Placement::NoFit(item);
        }
        if depth_remaining == 0 {
            self.pool[id].push_item(item);
            return Placement::Added;
        }

        let children = match self.pool[id].children {
            Some(children) => children,
            None => self.divide(id),
        };
        let mut item = item;
        if self.clear_of_midlines(id, &extent) {
            for child in children {
                match self.add_into(child, extent, item, depth_remaining - 1) {
                    Placement::Added => return Placement::Added,
                    Placement::NoFit(returned) => item = returned,
                }
            }
        }

        // Fits no single child: the item straddles or touches a dividing line.
        self.pool[id].push_item(item);
        Placement::Added
    }

    /// Removes `item`, locating it through its current bounding box.
    ///
    /// Returns false when the item is not stored, or when its bounding box
    /// changed since it was added.
    pub fn remove(&mut self, item: &T) -> bool {
        let bounds = item.bounding_box();
        self.remove_with_bounds(item, bounds)
    }

    /// Removes `item`, searching along the path `bounds` would have taken on insertion.
    pub fn remove_with_bounds(&mut self, item: &T, bounds: Rectangle) -> bool {
        let extent = RectExtent::from_rect_unchecked(&bounds);
        let removed = self.remove_from(ROOT, item, extent);
        if removed {
            self.len -= 1;
        }
        removed
    }

    fn remove_from(&mut self, id: NodeId, item: &T, extent: RectExtent) -> bool {
        let node = &mut self.pool[id];
        if let Some(index) = node.items.iter().position(|stored| stored == item) {
            let _ = node.remove_item_at(index);
            return true;
        }
        let Some(children) = node.children else {
            return false;
        };
        if !self.clear_of_midlines(id, &extent) {
            return false;
        }
        for child in children {
            if extent_contains_extent(&self.pool[child].boundary, &extent)
                && self.remove_from(child, item, extent)
            {
                return true;
            }
        }
        false
    }

    /// Moves an item whose bounding box changed since it was added.
    ///
    /// `previous` is the bounding box the item had when it was stored. Returns
    /// whether a stored entry was found under `previous` and replaced; an item
    /// that was never stored, or a wrong `previous`, yields `Ok(false)` with
    /// the item simply added. If the add fails the old entry is already gone.
    pub fn relocate(&mut self, item: T, previous: Rectangle) -> QuadtreeResult<bool> {
        let removed = self.remove_with_bounds(&item, previous);
        if !removed {
            debug!(?previous, "relocated item was not stored under its previous bounds");
        }
        self.add(item)?;
        Ok(removed)
    }

    /// Depth of the node storing `item`, found the same way [`remove`](Self::remove) finds it.
    pub fn depth_of(&self, item: &T) -> Option<usize> {
        let extent = RectExtent::from_rect_unchecked(&item.bounding_box());
        self.depth_from(ROOT, item, extent, 0)
    }

    fn depth_from(&self, id: NodeId, item: &T, extent: RectExtent, depth: usize) -> Option<usize> {
        let node = &self.pool[id];
        if node.items.iter().any(|stored| stored == item) {
            return Some(depth);
        }
        let children = node.children?;
        if !self.clear_of_midlines(id, &extent) {
            return None;
        }
        children
            .into_iter()
            .filter(|&child| extent_contains_extent(&self.pool[child].boundary, &extent))
            .find_map(|child| self.depth_from(child, item, extent, depth + 1))
    }

    // Only items clear of both dividing lines of `id` can live below it.
    fn clear_of_midlines(&self, id: NodeId, extent: &RectExtent) -> bool {
        let (mid_x, mid_y) = self.pool[id].boundary.center();
        extent_clear_of_midlines(extent, mid_x, mid_y)
    }

    fn ensure_extent_in_bounds(&self, extent: RectExtent) -> QuadtreeResult<()> {
        if extent_contains_extent(&self.pool[ROOT].boundary, &extent) {
            return Ok(());
        }
        debug!(
            min_x = extent.min_x,
            min_y = extent.min_y,
            max_x = extent.max_x,
            max_y = extent.max_y,
            "rejected item outside the quadtree boundary"
        );
        Err(self.out_of_bounds(extent))
    }

    fn out_of_bounds(&self, extent: RectExtent) -> QuadtreeError {
        let bounds = self.pool[ROOT].boundary;
        QuadtreeError::RectExtentOutOfBounds {
            min_x: extent.min_x,
            min_y: extent.min_y,
            max_x: extent.max_x,
            max_y: extent.max_y,
            bounds_min_x: bounds.min_x,
            bounds_min_y: bounds.min_y,
            bounds_max_x: bounds.max_x,
            bounds_max_y: bounds.max_y,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tree(max_depth: usize) -> QuadTree<Rectangle> {
        QuadTree::new_with_config(
            Rectangle::from_min_max(0.0, 0.0, 100.0, 100.0),
            Config {
                max_depth,
                pool_size: 8,
                ..Config::default()
            },
        )
        .unwrap()
    }

    #[test]
    fn subdivision_waits_for_the_first_add() {
        let mut qt = tree(2);
        assert!(!qt.pool[ROOT].is_divided());
        assert_eq!(qt.pool.available(), 8);

        qt.add(Rectangle::new(10.0, 10.0, 2.0, 2.0)).unwrap();
        assert!(qt.pool[ROOT].is_divided());
        // Root and its bottom-left child both split on the way down.
        assert_eq!(qt.pool.in_use(), 9);
        assert_eq!(qt.pool.available(), 0);
    }

    #[test]
    fn pool_grows_past_its_preallocation() {
        let mut qt = tree(3);
        qt.add(Rectangle::new(10.0, 10.0, 2.0, 2.0)).unwrap();
        assert_eq!(qt.pool.in_use(), 13);
        assert_eq!(qt.pool.allocated(), 13);
    }

    #[test]
    fn item_touching_a_midline_divides_but_stays() {
        let mut qt = tree(2);
        let touching = Rectangle::from_min_max(40.0, 10.0, 50.0, 20.0);
        qt.add(touching).unwrap();

        assert!(qt.pool[ROOT].is_divided());
        assert_eq!(qt.pool[ROOT].items.as_slice(), &[touching]);
        for child in qt.pool[ROOT].children.unwrap() {
            assert!(qt.pool[child].items.is_empty());
            assert!(!qt.pool[child].is_divided());
        }
        assert!(qt.remove(&touching));
        assert!(!qt.pool[ROOT].has_items);
    }

    #[test]
    fn removal_refreshes_occupancy() {
        let mut qt = tree(0);
        let a = Rectangle::new(10.0, 10.0, 2.0, 2.0);
        let b = Rectangle::new(20.0, 20.0, 2.0, 2.0);
        qt.add(a).unwrap();
        qt.add(b).unwrap();
        assert!(qt.pool[ROOT].has_items);

        assert!(qt.remove(&a));
        assert!(qt.pool[ROOT].has_items);
        assert!(qt.remove(&b));
        assert!(!qt.pool[ROOT].has_items);
        assert!(!qt.remove(&b));
    }

    #[test]
    fn duplicate_handles_are_stored_twice() {
        let mut qt = tree(2);
        let a = Rectangle::new(10.0, 10.0, 2.0, 2.0);
        qt.add(a).unwrap();
        qt.add(a).unwrap();
        assert_eq!(qt.len(), 2);
        assert!(qt.remove(&a));
        assert_eq!(qt.len(), 1);
        assert_eq!(qt.depth_of(&a), Some(2));
    }
}
