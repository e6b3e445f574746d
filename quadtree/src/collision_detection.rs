use crate::quadtree::RectExtent;

// Inner is fully inside outer. Shared edges count as inside.
#[inline(always)]
pub(crate) fn extent_contains_extent(outer: &RectExtent, inner: &RectExtent) -> bool {
    outer.min_x <= inner.min_x
        && outer.max_x >= inner.max_x
        && outer.min_y <= inner.min_y
        && outer.max_y >= inner.max_y
}

// Inner lies strictly on one side of both dividing lines through (mid_x, mid_y).
// An item touching or lying on either line belongs to the parent, not to a child.
#[inline(always)]
pub(crate) fn extent_clear_of_midlines(inner: &RectExtent, mid_x: f32, mid_y: f32) -> bool {
    (inner.max_x < mid_x || inner.min_x > mid_x) && (inner.max_y < mid_y || inner.min_y > mid_y)
}

// Touching edges count as an intersection.
#[inline(always)]
pub(crate) fn extent_extent(a: &RectExtent, b: &RectExtent) -> bool {
    a.min_x <= b.max_x && a.max_x >= b.min_x && a.min_y <= b.max_y && a.max_y >= b.min_y
}

#[inline(always)]
pub(crate) fn circle_extent(x: f32, y: f32, radius: f32, extent: &RectExtent) -> bool {
    let dx = if x < extent.min_x {
        extent.min_x - x
    } else if x > extent.max_x {
        x - extent.max_x
    } else {
        0.0
    };

    let dy = if y < extent.min_y {
        extent.min_y - y
    } else if y > extent.max_y {
        y - extent.max_y
    } else {
        0.0
    };

    dx * dx + dy * dy <= radius * radius
}
