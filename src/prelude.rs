//! Prelude module for convenient imports
//!
//! This module re-exports the most commonly used types from the crate.
//! Users can import everything they need with:
//!
//! ```
//! use prquad::prelude::*;
//! ```

pub use crate::{
    Bounds, Coordinate, DEFAULT_PAGE_SIZE, FindResult, InsertResult, InvariantViolation, QuadTree,
    QuadTreeConfig, QuadTreeError,
};
