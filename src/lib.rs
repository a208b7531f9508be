//! # prquad - Point-Region Quadtree
//!
//! An in-memory spatial index for a set of distinct points over a bounded two-dimensional
//! space of unsigned integer coordinates.
//!
//! ## Features
//!
//! - **Collision-driven subdivision**: a leaf holds one point; a second point arriving in the
//!   same leaf splits it until the two points land in different quadrants
//! - **Paged node pool**: nodes live in fixed-size pages linked by an intrusive free chain
//! - **O(1) reset**: rewinding the free chain reclaims every node without touching the pages
//! - **Any unsigned width**: coordinates are generic over `u8` through `u128`
//! - **Invariant checker**: [`QuadTree::sanity_check`] verifies the whole structure
//!
//! ## Quick Start
//!
//! ```rust
//! use prquad::prelude::*;
//!
//! // Tree over the full u64 domain, growing its pool 4 nodes at a time
//! let mut tree = QuadTree::<u64>::new(4).unwrap();
//!
//! assert_eq!(tree.insert(Coordinate::new(0, 0)), Ok(InsertResult::Success));
//! assert_eq!(tree.insert(Coordinate::new(0, 0)), Ok(InsertResult::DuplicateEntry));
//! // Both points start in the NW quadrant, so this splits the root leaf many times
//! assert_eq!(tree.insert(Coordinate::new(10, 10)), Ok(InsertResult::Success));
//!
//! assert_eq!(tree.find(Coordinate::new(10, 10)), Ok(FindResult::Success));
//! assert_eq!(tree.find(Coordinate::new(5, 5)), Ok(FindResult::NoEntry));
//! assert!(tree.sanity_check().is_ok());
//!
//! // Drop everything; the pool pages are kept for the next round
//! tree.reset();
//! assert_eq!(tree.find(Coordinate::new(10, 10)), Ok(FindResult::NoEntry));
//! ```
//!
//! ## How It Works
//!
//! The root region spans the whole domain. A region splits at
//! `center = min + (max - min) / 2` into `NW = [min, center]`, `NE`, `SE = [center + 1, max]`
//! and `SW`, so quadrants tile their parent exactly. Lookups descend from the root, probing
//! children in `NW, NE, SE, SW` order, until they reach a leaf or an empty region.
//!
//! Over a domain whose side is a power of two, two distinct points always separate within
//! the bit width of the scalar. Narrower custom domains can produce regions one cell wide;
//! a collision there is reported as [`QuadTreeError::DegenerateRegion`].

pub mod config;
pub mod coordinate;
pub mod error;
mod node;
mod pool;
pub mod prelude;
pub mod quadtree;
mod sanity;

pub use config::{DEFAULT_PAGE_SIZE, QuadTreeConfig};
pub use coordinate::{Bounds, Coordinate, Quadrant, Scalar};
pub use error::{InvariantViolation, QuadTreeError};
pub use pool::NodeId;
pub use quadtree::{FindResult, InsertResult, QuadTree};
