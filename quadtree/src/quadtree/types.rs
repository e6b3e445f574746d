use crate::error::{QuadtreeError, QuadtreeResult};
use common::shapes::Rectangle;
use smallvec::SmallVec;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub(crate) struct RectExtent {
    pub(crate) min_x: f32,
    pub(crate) min_y: f32,
    pub(crate) max_x: f32,
    pub(crate) max_y: f32,
}

impl RectExtent {
    #[inline(always)]
    pub(crate) fn from_rect(rect: &Rectangle) -> QuadtreeResult<Self> {
        validate_rect_dims(rect.width, rect.height)?;
        Ok(Self::from_rect_unchecked(rect))
    }

    #[inline(always)]
    pub(crate) fn from_rect_unchecked(rect: &Rectangle) -> Self {
        let half_w = rect.width * 0.5;
        let half_h = rect.height * 0.5;
        Self {
            min_x: rect.x - half_w,
            min_y: rect.y - half_h,
            max_x: rect.x + half_w,
            max_y: rect.y + half_h,
        }
    }

    #[inline(always)]
    pub(crate) fn from_min_max(
        min_x: f32,
        min_y: f32,
        max_x: f32,
        max_y: f32,
    ) -> QuadtreeResult<Self> {
        validate_rect_extent_bounds(min_x, min_y, max_x, max_y)?;
        Ok(Self::from_min_max_unchecked(min_x, min_y, max_x, max_y))
    }

    #[inline(always)]
    pub(crate) fn from_min_max_unchecked(min_x: f32, min_y: f32, max_x: f32, max_y: f32) -> Self {
        Self {
            min_x,
            min_y,
            max_x,
            max_y,
        }
    }

    #[inline(always)]
    pub(crate) fn to_rect(self) -> Rectangle {
        Rectangle::from_min_max(self.min_x, self.min_y, self.max_x, self.max_y)
    }

    #[inline(always)]
    pub(crate) fn center(self) -> (f32, f32) {
        (
            self.min_x + (self.max_x - self.min_x) * 0.5,
            self.min_y + (self.max_y - self.min_y) * 0.5,
        )
    }

    // Siblings share their dividing edges bit for bit, so the four children
    // tile the parent with no gaps or overlaps.
    #[inline(always)]
    pub(crate) fn quadrant(self, quadrant: Quadrant) -> Self {
        let (mid_x, mid_y) = self.center();
        match quadrant {
            Quadrant::Root => self,
            Quadrant::TopLeft => Self::from_min_max_unchecked(self.min_x, mid_y, mid_x, self.max_y),
            Quadrant::TopRight => Self::from_min_max_unchecked(mid_x, mid_y, self.max_x, self.max_y),
            Quadrant::BottomRight => {
                Self::from_min_max_unchecked(mid_x, self.min_y, self.max_x, mid_y)
            }
            Quadrant::BottomLeft => {
                Self::from_min_max_unchecked(self.min_x, self.min_y, mid_x, mid_y)
            }
        }
    }
}

/// Position of a node relative to its parent.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Quadrant {
    #[default]
    Root,
    TopLeft,
    TopRight,
    BottomRight,
    BottomLeft,
}

impl Quadrant {
    /// Child order used by subdivision, insertion and traversal.
    pub const CHILDREN: [Quadrant; 4] = [
        Quadrant::TopLeft,
        Quadrant::TopRight,
        Quadrant::BottomRight,
        Quadrant::BottomLeft,
    ];

    /// 0 for the root, 1..=4 for the children in `CHILDREN` order.
    pub fn ordinal(self) -> u8 {
        match self {
            Quadrant::Root => 0,
            Quadrant::TopLeft => 1,
            Quadrant::TopRight => 2,
            Quadrant::BottomRight => 3,
            Quadrant::BottomLeft => 4,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub(crate) struct NodeId(pub(crate) u32);

pub(crate) const ROOT: NodeId = NodeId(0);

pub(crate) type NodeStack = SmallVec<[NodeId; 32]>;

pub(crate) enum Placement<T> {
    Added,
    NoFit(T),
}

pub(crate) fn validate_rect_dims(width: f32, height: f32) -> QuadtreeResult<()> {
    if !(width.is_finite() && height.is_finite()) || width < 0.0 || height < 0.0 {
        return Err(QuadtreeError::InvalidRectangleDims { width, height });
    }
    Ok(())
}

pub(crate) fn validate_rect_extent_bounds(
    min_x: f32,
    min_y: f32,
    max_x: f32,
    max_y: f32,
) -> QuadtreeResult<()> {
    if !(min_x.is_finite() && min_y.is_finite() && max_x.is_finite() && max_y.is_finite())
        || min_x > max_x
        || min_y > max_y
    {
        return Err(QuadtreeError::InvalidRectExtent {
            min_x,
            min_y,
            max_x,
            max_y,
        });
    }
    Ok(())
}
