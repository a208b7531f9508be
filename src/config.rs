//! Construction parameters for [`QuadTree`](crate::QuadTree).

use crate::coordinate::{Bounds, Scalar};
use crate::error::QuadTreeError;

/// Default number of node slots per pool page.
pub const DEFAULT_PAGE_SIZE: usize = 1024;

/// Page size and coordinate domain of a tree.
///
/// The domain defaults to every coordinate representable by `S`. Over such a domain (or
/// any square domain whose side is a power of two) two distinct points can always be
/// separated. Other domains may contain regions that narrow to one cell on an axis, where
/// colliding points are rejected with [`QuadTreeError::DegenerateRegion`].
///
/// # Example
/// ```
/// use prquad::prelude::*;
///
/// let config = QuadTreeConfig::<u32>::default()
///     .with_page_size(256)
///     .with_domain(Bounds::new(Coordinate::new(0, 0), Coordinate::new(1023, 1023)));
/// let tree = QuadTree::with_config(config).unwrap();
/// assert_eq!(tree.page_size(), 256);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct QuadTreeConfig<S: Scalar = u64> {
    page_size: usize,
    domain: Bounds<S>,
}

impl<S: Scalar> QuadTreeConfig<S> {
    /// Config with the given page size over the full domain of `S`.
    pub fn new(page_size: usize) -> Self {
        Self {
            page_size,
            domain: Bounds::full(),
        }
    }

    /// Sets the number of node slots per pool page.
    #[must_use]
    pub fn with_page_size(mut self, page_size: usize) -> Self {
        self.page_size = page_size;
        self
    }

    /// Restricts the tree to `domain`.
    #[must_use]
    pub fn with_domain(mut self, domain: Bounds<S>) -> Self {
        self.domain = domain;
        self
    }

    /// Node slots per pool page.
    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Bounds of the root region.
    pub fn domain(&self) -> Bounds<S> {
        self.domain
    }

    /// Checks the page size and domain.
    ///
    /// # Errors
    /// [`QuadTreeError::ZeroPageSize`] for an empty page, [`QuadTreeError::InvalidDomain`]
    /// for a domain with `min > max` on an axis.
    pub fn validate(&self) -> Result<(), QuadTreeError<S>> {
        if self.page_size == 0 {
            return Err(QuadTreeError::ZeroPageSize);
        }
        if !self.domain.is_well_formed() {
            return Err(QuadTreeError::InvalidDomain(self.domain));
        }
        Ok(())
    }
}

impl<S: Scalar> Default for QuadTreeConfig<S> {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_SIZE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coordinate::Coordinate;

    #[test]
    fn test_default_config() {
        let config = QuadTreeConfig::<u16>::default();
        assert_eq!(config.page_size(), DEFAULT_PAGE_SIZE);
        assert_eq!(config.domain(), Bounds::new(Coordinate::new(0, 0), Coordinate::new(u16::MAX, u16::MAX)));
        assert_eq!(config.validate(), Ok(()));
    }

    #[test]
    fn test_zero_page_size_rejected() {
        let config = QuadTreeConfig::<u64>::new(0);
        assert_eq!(config.validate(), Err(QuadTreeError::ZeroPageSize));
    }

    #[test]
    fn test_inverted_domain_rejected() {
        let inverted = Bounds::new(Coordinate::new(5u32, 0), Coordinate::new(4, 10));
        let config = QuadTreeConfig::default().with_domain(inverted);
        assert_eq!(config.validate(), Err(QuadTreeError::InvalidDomain(inverted)));
    }

    #[test]
    fn test_single_cell_domain_is_valid() {
        let cell = Bounds::new(Coordinate::new(3u8, 3), Coordinate::new(3, 3));
        let config = QuadTreeConfig::new(1).with_domain(cell);
        assert_eq!(config.validate(), Ok(()));
    }
}
