use thiserror::Error;

#[derive(Debug, Error)]
pub enum QuadtreeError {
    #[error("rectangle width/height must be finite and non-negative (width: {width}, height: {height})")]
    InvalidRectangleDims { width: f32, height: f32 },

    #[error(
        "rectangle extents must be finite with min <= max \
         (min_x: {min_x}, min_y: {min_y}, max_x: {max_x}, max_y: {max_y})"
    )]
    InvalidRectExtent {
        min_x: f32,
        min_y: f32,
        max_x: f32,
        max_y: f32,
    },

    #[error(
        "rectangle extents must be within quadtree bounds \
         (min_x: {min_x}, min_y: {min_y}, max_x: {max_x}, max_y: {max_y}, \
         bounds_min_x: {bounds_min_x}, bounds_min_y: {bounds_min_y}, \
         bounds_max_x: {bounds_max_x}, bounds_max_y: {bounds_max_y})"
    )]
    RectExtentOutOfBounds {
        min_x: f32,
        min_y: f32,
        max_x: f32,
        max_y: f32,
        bounds_min_x: f32,
        bounds_min_y: f32,
        bounds_max_x: f32,
        bounds_max_y: f32,
    },

    #[error("quadtree configuration cannot change while it stores {len} items")]
    TreeNotEmpty { len: usize },

    #[error("invalid quadtree config: {0}")]
    Config(#[from] toml::de::Error),
}

pub type QuadtreeResult<T> = Result<T, QuadtreeError>;
