//! Tree nodes and the descent and subdivision algorithms over them.
//!
//! Nodes never hold a link to their parent. Every traversal starts at some node and walks
//! down through child [`NodeId`]s resolved against the [`NodePool`].

use crate::coordinate::{Bounds, Coordinate, Scalar};
use crate::pool::{NodeId, NodePool};
use crate::quadtree::FindResult;

/// Tag of a node.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum NodeType {
    /// Holds exactly one point and no children.
    Leaf,
    /// Holds no point; either childless (unoccupied) or split into four children.
    Region,
    /// Between raw allocation and initialization only.
    Undefined,
}

/// A quadtree node.
///
/// Regions store the zero coordinate in `point`. Children, when present, are ordered
/// `NW, NE, SE, SW` and partition `bounds` exactly as [`Bounds::quadrants`] does.
#[derive(Clone, Debug)]
pub(crate) struct Node<S: Scalar> {
    pub(crate) bounds: Bounds<S>,
    pub(crate) point: Coordinate<S>,
    pub(crate) children: Option<[NodeId; 4]>,
    pub(crate) node_type: NodeType,
}

impl<S: Scalar> Node<S> {
    /// Blank slot contents: no bounds, no point, no children.
    pub(crate) fn undefined() -> Self {
        Self {
            bounds: Bounds::default(),
            point: Coordinate::zero(),
            children: None,
            node_type: NodeType::Undefined,
        }
    }

    pub(crate) fn initialize_as_leaf(&mut self, point: Coordinate<S>, bounds: Bounds<S>) {
        debug_assert!(bounds.contains(point), "leaf point {point} outside {bounds}");
        self.bounds = bounds;
        self.point = point;
        self.node_type = NodeType::Leaf;
    }

    pub(crate) fn initialize_as_region(&mut self, bounds: Bounds<S>) {
        debug_assert_eq!(self.point, Coordinate::zero(), "region initialized over a stale point");
        self.bounds = bounds;
        self.node_type = NodeType::Region;
    }

    /// Turns a childless node into a leaf holding `point`.
    pub(crate) fn promote_to_leaf(&mut self, point: Coordinate<S>) {
        debug_assert!(self.children.is_none(), "promoting a split region");
        self.initialize_as_leaf(point, self.bounds);
    }

    #[inline]
    pub(crate) fn is_leaf(&self) -> bool {
        self.node_type == NodeType::Leaf
    }
}

/// Picks the child whose bounds hold `point`, probing `NW, NE, SE` and falling back to `SW`.
///
/// The caller guarantees that `point` lies inside the parent.
#[inline]
fn child_containing<S: Scalar>(
    pool: &NodePool<S>,
    children: &[NodeId; 4],
    point: Coordinate<S>,
) -> NodeId {
    for &child in &children[..3] {
        if pool.get(child).bounds.contains(point) {
            return child;
        }
    }
    let south_west = children[3];
    debug_assert!(
        pool.get(south_west).bounds.contains(point),
        "no quadrant holds {point}"
    );
    south_west
}

/// Descends from `from` to the childless node whose bounds hold `point`.
///
/// Returns the node reached together with `Success` if it is a leaf storing exactly
/// `point`, otherwise `NoEntry`. The caller tells an empty region apart from a leaf with a
/// different point by looking at the node itself. `point` must lie inside `from`.
pub(crate) fn find<S: Scalar>(
    pool: &NodePool<S>,
    from: NodeId,
    point: Coordinate<S>,
) -> (NodeId, FindResult) {
    debug_assert!(pool.get(from).bounds.contains(point), "descent from a node not holding {point}");

    let mut current = from;
    while let Some(children) = pool.get(current).children {
        current = child_containing(pool, &children, point);
    }

    let node = pool.get(current);
    debug_assert_ne!(node.node_type, NodeType::Undefined, "descent reached an undefined node");
    if node.is_leaf() && node.point == point {
        (current, FindResult::Success)
    } else {
        (current, FindResult::NoEntry)
    }
}

/// Number of levels from `from` down to the childless node holding `point`.
pub(crate) fn depth_of<S: Scalar>(pool: &NodePool<S>, from: NodeId, point: Coordinate<S>) -> usize {
    let mut depth = 0;
    let mut current = from;
    while let Some(children) = pool.get(current).children {
        current = child_containing(pool, &children, point);
        depth += 1;
    }
    depth
}

/// Converts a childless node into a region with four fresh, empty children.
///
/// Any stored point is cleared. Returns the children, or `None` without touching the pool
/// when the node's bounds are too narrow to split.
pub(crate) fn split<S: Scalar>(pool: &mut NodePool<S>, id: NodeId) -> Option<[NodeId; 4]> {
    debug_assert!(pool.get(id).children.is_none(), "splitting a node that has children");
    let quadrants = pool.get(id).bounds.quadrants()?;

    let children = quadrants.map(|bounds| pool.allocate_region_node(bounds));

    let node = pool.get_mut(id);
    node.children = Some(children);
    node.node_type = NodeType::Region;
    node.point = Coordinate::zero();
    Some(children)
}

/// Child of an already split node that holds `point`.
///
/// `None` if the node has no children or `point` is outside its bounds.
pub(crate) fn containing_sub_region<S: Scalar>(
    pool: &NodePool<S>,
    id: NodeId,
    point: Coordinate<S>,
) -> Option<NodeId> {
    let node = pool.get(id);
    if !node.bounds.contains(point) {
        return None;
    }
    let children = node.children?;
    debug_assert_eq!(node.node_type, NodeType::Region, "leaf with children");
    Some(child_containing(pool, &children, point))
}

/// Number of successive splits of `bounds` needed before `a` and `b` fall into different
/// quadrants.
///
/// Works on bounds arithmetic alone and is bounded by the scalar bit width. `None` if a
/// region narrows to width or height 1 while still holding both points.
pub(crate) fn separation_depth<S: Scalar>(
    bounds: Bounds<S>,
    a: Coordinate<S>,
    b: Coordinate<S>,
) -> Option<u32> {
    debug_assert_ne!(a, b, "identical points never separate");
    let mut region = bounds;
    for depth in 1..=S::bits() {
        let quadrants = region.quadrants()?;
        let qa = quadrants.iter().position(|q| q.contains(a))?;
        let qb = quadrants.iter().position(|q| q.contains(b))?;
        if qa != qb {
            return Some(depth);
        }
        region = quadrants[qa];
    }
    None
}
