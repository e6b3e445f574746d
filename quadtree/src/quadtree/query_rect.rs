use super::*;
use crate::collision_detection::circle_extent;

impl<T: Shape> QuadTree<T> {
    /// Appends every stored item whose bounding box intersects `region`.
    ///
    /// `out` is not cleared first, so a caller can reuse one buffer across
    /// several queries or clear it between them.
    pub fn query<'a>(&'a self, region: Rectangle, out: &mut Vec<&'a T>) {
        self.query_with(region, |item| out.push(item));
    }

    pub fn query_with<'a, F>(&'a self, region: Rectangle, mut f: F)
    where
        F: FnMut(&'a T),
    {
        let extent = RectExtent::from_rect_unchecked(&region);
        self.query_from(ROOT, &extent, &mut f);
    }

    fn query_from<'a, F>(&'a self, id: NodeId, extent: &RectExtent, f: &mut F)
    where
        F: FnMut(&'a T),
    {
        let node = &self.pool[id];
        for item in &node.items {
            if extent_extent(&RectExtent::from_rect_unchecked(&item.bounding_box()), extent) {
                f(item);
            }
        }
        let Some(children) = node.children else {
            return;
        };
        for child in children {
            if extent_extent(&self.pool[child].boundary, extent) {
                self.query_from(child, extent, f);
            }
        }
    }

    /// Appends every stored item whose bounding box overlaps the circle.
    pub fn query_circle<'a>(&'a self, x: f32, y: f32, radius: f32, out: &mut Vec<&'a T>) {
        self.query_circle_with(x, y, radius, |item| out.push(item));
    }

    pub fn query_circle_with<'a, F>(&'a self, x: f32, y: f32, radius: f32, mut f: F)
    where
        F: FnMut(&'a T),
    {
        let mut stack = NodeStack::new();
        stack.push(ROOT);
        while let Some(id) = stack.pop() {
            let node = &self.pool[id];
            for item in &node.items {
                let item_extent = RectExtent::from_rect_unchecked(&item.bounding_box());
                if circle_extent(x, y, radius, &item_extent) {
                    f(item);
                }
            }
            if let Some(children) = node.children {
                stack.extend(
                    children
                        .into_iter()
                        .rev()
                        .filter(|&child| circle_extent(x, y, radius, &self.pool[child].boundary)),
                );
            }
        }
    }
}
