//! Point-region quadtree over a bounded integer domain.
//!
//! Each leaf holds exactly one point. Inserting a point into an occupied leaf splits the
//! leaf, repeatedly if needed, until the old and new points fall into different quadrants.
//! All nodes come from a [`NodePool`]; [`QuadTree::reset`] reclaims the whole pool at once
//! instead of freeing nodes one by one.

use tracing::debug;

use crate::config::QuadTreeConfig;
use crate::coordinate::{Bounds, Coordinate, Scalar};
use crate::error::QuadTreeError;
use crate::node::{self, NodeType};
use crate::pool::{NodeId, NodePool};

/// Outcome of [`QuadTree::insert`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum InsertResult {
    /// The point was already stored; the tree is unchanged.
    DuplicateEntry,
    /// The point is now stored.
    Success,
}

/// Outcome of [`QuadTree::find`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FindResult {
    /// The point is not stored.
    NoEntry,
    /// The point is stored.
    Success,
}

/// Point-region quadtree storing distinct points.
///
/// # Examples
/// ```
/// use prquad::prelude::*;
///
/// let mut tree = QuadTree::<u64>::new(64).unwrap();
/// assert_eq!(tree.insert(Coordinate::new(0, 0)), Ok(InsertResult::Success));
/// assert_eq!(tree.insert(Coordinate::new(0, 0)), Ok(InsertResult::DuplicateEntry));
/// assert_eq!(tree.insert(Coordinate::new(10, 10)), Ok(InsertResult::Success));
/// assert_eq!(tree.find(Coordinate::new(10, 10)), Ok(FindResult::Success));
/// assert_eq!(tree.find(Coordinate::new(5, 5)), Ok(FindResult::NoEntry));
/// assert!(tree.sanity_check().is_ok());
/// ```
#[derive(Clone, Debug)]
pub struct QuadTree<S: Scalar = u64> {
    pub(crate) pool: NodePool<S>,
    pub(crate) root: NodeId,
    pub(crate) domain: Bounds<S>,
    pub(crate) len: usize,
}

impl<S: Scalar> QuadTree<S> {
    /// Creates an empty tree over the full domain of `S`.
    ///
    /// `page_size` is the number of node slots the pool grows by.
    ///
    /// # Errors
    /// [`QuadTreeError::ZeroPageSize`] if `page_size` is zero.
    pub fn new(page_size: usize) -> Result<Self, QuadTreeError<S>> {
        Self::with_config(QuadTreeConfig::new(page_size))
    }

    /// Creates an empty tree from an explicit configuration.
    ///
    /// # Errors
    /// Any error reported by [`QuadTreeConfig::validate`].
    pub fn with_config(config: QuadTreeConfig<S>) -> Result<Self, QuadTreeError<S>> {
        config.validate()?;
        Ok(Self::from_valid_config(&config))
    }

    fn from_valid_config(config: &QuadTreeConfig<S>) -> Self {
        let domain = config.domain();
        let mut pool = NodePool::new(config.page_size());
        let root = pool.allocate_region_node(domain);
        Self {
            pool,
            root,
            domain,
            len: 0,
        }
    }

    /// Inserts `point`.
    ///
    /// Returns [`InsertResult::DuplicateEntry`] without modifying the tree if the point is
    /// already stored.
    ///
    /// # Errors
    /// [`QuadTreeError::OutOfRegionBounds`] if the point is outside the domain.
    /// [`QuadTreeError::DegenerateRegion`] if the point collides with a stored point inside a
    /// region that cannot be subdivided far enough to separate them; the tree is unchanged.
    pub fn insert(&mut self, point: Coordinate<S>) -> Result<InsertResult, QuadTreeError<S>> {
        self.check_in_domain(point)?;

        let (found, result) = node::find(&self.pool, self.root, point);
        if result == FindResult::Success {
            return Ok(InsertResult::DuplicateEntry);
        }

        let reached = self.pool.get(found);
        debug_assert!(reached.children.is_none(), "descent stopped at a split node");
        let (node_type, existing, bounds) = (reached.node_type, reached.point, reached.bounds);
        match node_type {
            NodeType::Region => {
                self.pool.get_mut(found).promote_to_leaf(point);
            }
            NodeType::Leaf => {
                if node::separation_depth(bounds, existing, point).is_none() {
                    debug!(%existing, %point, %bounds, "rejecting insert into degenerate region");
                    return Err(QuadTreeError::DegenerateRegion {
                        existing,
                        point,
                        bounds,
                    });
                }
                self.separate(found, existing, point);
            }
            NodeType::Undefined => unreachable!("descent reached an undefined node"),
        }

        self.len += 1;
        Ok(InsertResult::Success)
    }

    /// Splits `leaf` until `existing` and `point` land in different children, then stores
    /// each in its own child. The caller has checked that the two points separate.
    fn separate(&mut self, leaf: NodeId, existing: Coordinate<S>, point: Coordinate<S>) {
        let mut region = leaf;
        let (existing_region, new_region) = loop {
            if node::split(&mut self.pool, region).is_none() {
                unreachable!("separable points reached an unsplittable region");
            }
            let existing_region = node::containing_sub_region(&self.pool, region, existing);
            let new_region = node::containing_sub_region(&self.pool, region, point);
            match (existing_region, new_region) {
                (Some(existing_region), Some(new_region)) if existing_region != new_region => {
                    break (existing_region, new_region);
                }
                (Some(_), Some(shared)) => region = shared,
                _ => unreachable!("quadrants do not cover their parent"),
            }
        };

        self.pool.get_mut(existing_region).promote_to_leaf(existing);
        self.pool.get_mut(new_region).promote_to_leaf(point);
    }

    /// Looks up `point`.
    ///
    /// # Errors
    /// [`QuadTreeError::OutOfRegionBounds`] if the point is outside the domain.
    pub fn find(&self, point: Coordinate<S>) -> Result<FindResult, QuadTreeError<S>> {
        self.check_in_domain(point)?;
        let (_, result) = node::find(&self.pool, self.root, point);
        Ok(result)
    }

    /// True iff `point` is stored. Points outside the domain are never stored.
    pub fn contains(&self, point: Coordinate<S>) -> bool {
        matches!(self.find(point), Ok(FindResult::Success))
    }

    /// Removes every point in O(1) by rewinding the node pool.
    ///
    /// Pages already allocated are kept and reused by later inserts.
    pub fn reset(&mut self) {
        self.pool.reset();
        self.root = self.pool.allocate_region_node(self.domain);
        self.len = 0;
    }

    /// Number of stored points.
    pub fn len(&self) -> usize {
        self.len
    }

    /// True iff no point is stored.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Bounds of the root region.
    pub fn domain(&self) -> Bounds<S> {
        self.domain
    }

    /// Node slots per pool page.
    pub fn page_size(&self) -> usize {
        self.pool.page_size()
    }

    /// Pages allocated so far. Never shrinks, not even on [`QuadTree::reset`].
    pub fn page_count(&self) -> usize {
        self.pool.page_count()
    }

    /// Node slots across all allocated pages.
    pub fn capacity(&self) -> usize {
        self.pool.capacity()
    }

    /// Nodes in the current tree, root included.
    pub fn node_count(&self) -> usize {
        self.pool.allocated()
    }

    /// Levels below the root of the childless node holding `point`'s cell.
    ///
    /// At most the bit width of `S` for the full domain.
    ///
    /// # Errors
    /// [`QuadTreeError::OutOfRegionBounds`] if the point is outside the domain.
    pub fn depth_of(&self, point: Coordinate<S>) -> Result<usize, QuadTreeError<S>> {
        self.check_in_domain(point)?;
        Ok(node::depth_of(&self.pool, self.root, point))
    }

    /// Levels below the root of the deepest node.
    pub fn depth(&self) -> usize {
        let mut deepest = 0;
        let mut stack = vec![(self.root, 0)];
        while let Some((id, depth)) = stack.pop() {
            deepest = deepest.max(depth);
            if let Some(children) = self.pool.get(id).children {
                stack.extend(children.into_iter().map(|child| (child, depth + 1)));
            }
        }
        deepest
    }

    fn check_in_domain(&self, point: Coordinate<S>) -> Result<(), QuadTreeError<S>> {
        if self.domain.contains(point) {
            Ok(())
        } else {
            Err(QuadTreeError::OutOfRegionBounds {
                point,
                domain: self.domain,
            })
        }
    }
}

impl<S: Scalar> Default for QuadTree<S> {
    fn default() -> Self {
        Self::from_valid_config(&QuadTreeConfig::default())
    }
}
