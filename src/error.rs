//! Error types.

use thiserror::Error;

use crate::coordinate::{Bounds, Coordinate, Quadrant, Scalar};
use crate::pool::NodeId;

/// Errors returned by [`QuadTree`](crate::QuadTree) construction and its point operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum QuadTreeError<S: Scalar = u64> {
    /// A pool page must hold at least one node.
    #[error("page size must be greater than zero")]
    ZeroPageSize,

    /// The configured domain has `min > max` on an axis.
    #[error("domain {0} is inverted on at least one axis")]
    InvalidDomain(Bounds<S>),

    /// The point is outside the bounds the tree was built over.
    #[error("point {point} lies outside the tree domain {domain}")]
    OutOfRegionBounds {
        point: Coordinate<S>,
        domain: Bounds<S>,
    },

    /// Two distinct points share a region that can no longer be subdivided.
    #[error("points {existing} and {point} cannot be separated: region {bounds} is too narrow to split")]
    DegenerateRegion {
        existing: Coordinate<S>,
        point: Coordinate<S>,
        bounds: Bounds<S>,
    },
}

/// A structural fault found by [`QuadTree::sanity_check`](crate::QuadTree::sanity_check).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum InvariantViolation<S: Scalar = u64> {
    /// The root does not span the tree domain.
    #[error("root bounds {found} differ from the domain {domain}")]
    RootBounds { found: Bounds<S>, domain: Bounds<S> },

    /// A reachable node was issued before the last reset.
    #[error("node {node:?} was issued before the last reset")]
    StaleNode { node: NodeId },

    /// A reachable node was never initialized.
    #[error("node {node:?} is still undefined")]
    UndefinedNode { node: NodeId },

    /// A node has `min > max` on an axis.
    #[error("node {node:?} has malformed bounds {bounds}")]
    MalformedBounds { node: NodeId, bounds: Bounds<S> },

    /// A leaf links to child nodes.
    #[error("leaf {node:?} has children")]
    LeafWithChildren { node: NodeId },

    /// A leaf point lies outside the leaf bounds.
    #[error("leaf {node:?} stores {point} outside its bounds {bounds}")]
    LeafOutOfBounds {
        node: NodeId,
        point: Coordinate<S>,
        bounds: Bounds<S>,
    },

    /// Regions must store the zero point.
    #[error("region {node:?} stores {point} instead of the zero sentinel")]
    RegionWithPoint { node: NodeId, point: Coordinate<S> },

    /// A region has children although its bounds cannot be split.
    #[error("region {node:?} with bounds {bounds} is too narrow to have children")]
    UnsplittableRegion { node: NodeId, bounds: Bounds<S> },

    /// A child does not cover the quadrant of its parent it is linked as.
    #[error("{quadrant:?} child of {node:?} has bounds {found}, expected {expected}")]
    QuadrantBounds {
        node: NodeId,
        quadrant: Quadrant,
        expected: Bounds<S>,
        found: Bounds<S>,
    },

    /// The number of reachable leaves differs from the tree length.
    #[error("tree holds {found} points but {expected} were inserted")]
    PointCount { expected: usize, found: usize },
}
