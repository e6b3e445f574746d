mod api;
mod config;
mod maintenance;
mod node;
mod pool;
mod query_rect;
mod storage;
mod types;

pub use api::Iter;
pub use config::Config;
pub use node::NodeView;
pub use types::Quadrant;

pub(crate) use types::RectExtent;

use crate::collision_detection::{extent_clear_of_midlines, extent_contains_extent, extent_extent};
use crate::error::{QuadtreeError, QuadtreeResult};
use common::shapes::{Rectangle, Shape};
use pool::NodePool;
use tracing::{debug, trace};
use types::{NodeId, NodeStack, Placement, ROOT};

/// Region quadtree over externally owned items.
///
/// The tree stores item handles `T` and asks them for their bounding box
/// whenever it needs one. Each item lives in the deepest quadrant that fully
/// contains it; items straddling a dividing line stay with the parent.
/// Quadrant nodes come from a per-tree pool and are recycled by
/// [`clean`](QuadTree::clean) and [`clear`](QuadTree::clear).
///
/// A handle's bounding box must not change while it is stored. Move an item
/// with [`relocate`](QuadTree::relocate), or remove it and add it again.
pub struct QuadTree<T> {
    pool: NodePool<T>,
    config: Config,
    len: usize,
}
