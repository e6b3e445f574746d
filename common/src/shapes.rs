use rand::Rng;
use std::fmt::Debug;
use std::rc::Rc;
use std::sync::Arc;

/// Anything that can report its current axis-aligned bounding box.
pub trait Shape: Debug {
    fn bounding_box(&self) -> Rectangle;
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Circle {
    pub x: f32,
    pub y: f32,
    pub radius: f32,
    pub bounding_box: Rectangle,
}

impl Circle {
    pub fn new(x: f32, y: f32, radius: f32) -> Self {
        let bounding_box = Rectangle {
            x,
            y,
            width: radius * 2.0,
            height: radius * 2.0,
        };
        Self {
            x,
            y,
            radius,
            bounding_box,
        }
    }

    pub fn x(&self) -> f32 {
        self.x
    }

    pub fn y(&self) -> f32 {
        self.y
    }

    pub fn radius(&self) -> f32 {
        self.radius
    }

    pub fn update(&mut self, x: f32, y: f32) {
        self.x = x;
        self.y = y;
        self.update_bounding_box();
    }

    pub fn update_with_radius(&mut self, x: f32, y: f32, radius: f32) {
        self.x = x;
        self.y = y;
        self.radius = radius;
        self.update_bounding_box();
    }

    fn update_bounding_box(&mut self) {
        self.bounding_box = Rectangle {
            x: self.x,
            y: self.y,
            width: self.radius * 2.0,
            height: self.radius * 2.0,
        };
    }
}

impl Default for Circle {
    fn default() -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            radius: 0.0,
            bounding_box: Rectangle::default(),
        }
    }
}

impl Shape for Circle {
    fn bounding_box(&self) -> Rectangle {
        self.bounding_box
    }
}

/// Axis-aligned rectangle stored as its center and size.
///
/// The y axis grows upward, so `top() >= bottom()` for any rectangle with a
/// non-negative height.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Rectangle {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rectangle {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Builds a rectangle from its bottom-left corner and size.
    pub fn from_corner(left: f32, bottom: f32, width: f32, height: f32) -> Self {
        Self {
            x: left + width / 2.0,
            y: bottom + height / 2.0,
            width,
            height,
        }
    }

    pub fn from_min_max(left: f32, bottom: f32, right: f32, top: f32) -> Self {
        Self {
            x: (left + right) / 2.0,
            y: (bottom + top) / 2.0,
            width: right - left,
            height: top - bottom,
        }
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn height(&self) -> f32 {
        self.height
    }

    pub fn left(&self) -> f32 {
        self.x - self.width / 2.0
    }

    pub fn right(&self) -> f32 {
        self.x + self.width / 2.0
    }

    pub fn bottom(&self) -> f32 {
        self.y - self.height / 2.0
    }

    pub fn top(&self) -> f32 {
        self.y + self.height / 2.0
    }

    pub fn center(&self) -> (f32, f32) {
        (self.x, self.y)
    }

    pub fn area(&self) -> f32 {
        self.width * self.height
    }

    /// True when `other` lies entirely inside `self`. Shared edges count as inside.
    pub fn contains(&self, other: &Rectangle) -> bool {
        self.left() <= other.left()
            && self.right() >= other.right()
            && self.bottom() <= other.bottom()
            && self.top() >= other.top()
    }

    /// True when the two rectangles overlap. Touching edges count as overlap.
    pub fn intersects(&self, other: &Rectangle) -> bool {
        self.left() <= other.right()
            && self.right() >= other.left()
            && self.bottom() <= other.top()
            && self.top() >= other.bottom()
    }

    pub fn contains_point(&self, x: f32, y: f32) -> bool {
        x >= self.left() && x <= self.right() && y >= self.bottom() && y <= self.top()
    }

    /// Random rectangle fully inside `self` with each side at most `max_size`.
    ///
    /// Corners and sizes are whole numbers so that containment against a
    /// whole-numbered `self` is exact.
    pub fn get_random_rectangle_inside<R: Rng>(&self, max_size: f32, rng: &mut R) -> Rectangle {
        let width = self._safe_randf32(rng, 0.0, max_size.min(self.width)).floor();
        let height = self._safe_randf32(rng, 0.0, max_size.min(self.height)).floor();
        let left = self
            ._safe_randf32(rng, self.left().ceil(), self.right() - width)
            .floor();
        let bottom = self
            ._safe_randf32(rng, self.bottom().ceil(), self.top() - height)
            .floor();
        Rectangle::from_corner(left, bottom, width, height)
    }

    fn _safe_randf32<R: Rng>(&self, rng: &mut R, min: f32, max: f32) -> f32 {
        if min > max {
            return min;
        }
        rng.gen_range(min..=max)
    }
}

impl Default for Rectangle {
    fn default() -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            width: 0.0,
            height: 0.0,
        }
    }
}

impl Shape for Rectangle {
    fn bounding_box(&self) -> Rectangle {
        *self
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum ShapeEnum {
    Circle(Circle),
    Rectangle(Rectangle),
}

impl Shape for ShapeEnum {
    fn bounding_box(&self) -> Rectangle {
        match self {
            ShapeEnum::Circle(circle) => circle.bounding_box(),
            ShapeEnum::Rectangle(rectangle) => rectangle.bounding_box(),
        }
    }
}

impl<S: Shape + ?Sized> Shape for &S {
    fn bounding_box(&self) -> Rectangle {
        (**self).bounding_box()
    }
}

impl<S: Shape + ?Sized> Shape for Box<S> {
    fn bounding_box(&self) -> Rectangle {
        (**self).bounding_box()
    }
}

impl<S: Shape + ?Sized> Shape for Rc<S> {
    fn bounding_box(&self) -> Rectangle {
        (**self).bounding_box()
    }
}

impl<S: Shape + ?Sized> Shape for Arc<S> {
    fn bounding_box(&self) -> Rectangle {
        (**self).bounding_box()
    }
}
