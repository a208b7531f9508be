//! Whole-tree invariant verification.

use crate::coordinate::{Coordinate, Quadrant, Scalar};
use crate::error::InvariantViolation;
use crate::node::NodeType;
use crate::pool::NodeId;
use crate::quadtree::QuadTree;

impl<S: Scalar> QuadTree<S> {
    /// Walks every node and verifies the structural invariants of the tree.
    ///
    /// Checked per node: it was issued since the last reset, its bounds are well formed,
    /// leaves hold their point inside their bounds and have no children, regions hold the
    /// zero sentinel and have either no children or four children whose bounds are exactly
    /// the quadrants of the parent (so siblings neither overlap nor leave a gap). The root
    /// must span the domain and the number of leaves must equal [`QuadTree::len`].
    ///
    /// Cost is linear in the number of nodes. Intended for tests and stress drivers.
    ///
    /// # Errors
    /// The first [`InvariantViolation`] found, in depth-first `NW, NE, SE, SW` order.
    pub fn sanity_check(&self) -> Result<(), InvariantViolation<S>> {
        self.check_current(self.root)?;
        let root_bounds = self.pool.get(self.root).bounds;
        if root_bounds != self.domain {
            return Err(InvariantViolation::RootBounds {
                found: root_bounds,
                domain: self.domain,
            });
        }

        let mut leaves = 0;
        self.check_node(self.root, &mut leaves)?;
        if leaves != self.len {
            return Err(InvariantViolation::PointCount {
                expected: self.len,
                found: leaves,
            });
        }
        Ok(())
    }

    fn check_current(&self, id: NodeId) -> Result<(), InvariantViolation<S>> {
        if self.pool.is_current(id) {
            Ok(())
        } else {
            Err(InvariantViolation::StaleNode { node: id })
        }
    }

    fn check_node(&self, id: NodeId, leaves: &mut usize) -> Result<(), InvariantViolation<S>> {
        let node = self.pool.get(id);
        if !node.bounds.is_well_formed() {
            return Err(InvariantViolation::MalformedBounds {
                node: id,
                bounds: node.bounds,
            });
        }

        match node.node_type {
            NodeType::Undefined => Err(InvariantViolation::UndefinedNode { node: id }),
            NodeType::Leaf => {
                if node.children.is_some() {
                    return Err(InvariantViolation::LeafWithChildren { node: id });
                }
                if !node.bounds.contains(node.point) {
                    return Err(InvariantViolation::LeafOutOfBounds {
                        node: id,
                        point: node.point,
                        bounds: node.bounds,
                    });
                }
                *leaves += 1;
                Ok(())
            }
            NodeType::Region => {
                if node.point != Coordinate::zero() {
                    return Err(InvariantViolation::RegionWithPoint {
                        node: id,
                        point: node.point,
                    });
                }
                let Some(children) = node.children else {
                    return Ok(());
                };
                let Some(quadrants) = node.bounds.quadrants() else {
                    return Err(InvariantViolation::UnsplittableRegion {
                        node: id,
                        bounds: node.bounds,
                    });
                };

                for quadrant in Quadrant::ALL {
                    let child = children[quadrant.index()];
                    self.check_current(child)?;
                    let expected = quadrants[quadrant.index()];
                    let found = self.pool.get(child).bounds;
                    if found != expected {
                        return Err(InvariantViolation::QuadrantBounds {
                            node: id,
                            quadrant,
                            expected,
                            found,
                        });
                    }
                }

                for child in children {
                    self.check_node(child, leaves)?;
                }
                Ok(())
            }
        }
    }
}
