//! Coordinate and bounds primitives.
//!
//! Coordinates are pairs of unsigned fixed-width integers. Bounds are closed boxes: both
//! `min` and `max` belong to the box. Splitting a box into quadrants is exact integer
//! arithmetic, so sibling quadrants share no cell and leave no gap.

use std::fmt;
use std::hash::Hash;
use std::ops::{Add, Div, Sub};

use num_traits::{PrimInt, Unsigned};

/// Component type of a [`Coordinate`].
///
/// Implemented for every unsigned primitive integer (`u8` through `u128`, and `usize`).
/// The index covers the whole range of the scalar unless a narrower domain is configured.
pub trait Scalar:
    PrimInt + Unsigned + fmt::Debug + fmt::Display + Hash + Default + Send + Sync + 'static
{
    /// Width of the scalar in bits. Bounds the depth of any tree over the full domain.
    #[inline]
    fn bits() -> u32 {
        Self::zero().count_zeros()
    }

    /// The constant two, used by the midpoint split.
    #[inline]
    fn two() -> Self {
        Self::one() + Self::one()
    }
}

impl<T> Scalar for T where
    T: PrimInt + Unsigned + fmt::Debug + fmt::Display + Hash + Default + Send + Sync + 'static
{
}

/// A point in the two-dimensional integer domain.
///
/// The default value `(0, 0)` doubles as the sentinel stored by region nodes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Coordinate<S: Scalar = u64> {
    /// Horizontal component.
    pub x: S,
    /// Vertical component.
    pub y: S,
}

impl<S: Scalar> Coordinate<S> {
    /// Creates a coordinate from its components.
    #[inline]
    pub fn new(x: S, y: S) -> Self {
        Self { x, y }
    }

    /// The origin `(0, 0)`.
    #[inline]
    pub fn zero() -> Self {
        Self::new(S::zero(), S::zero())
    }

    /// Smallest coordinate representable by `S`.
    #[inline]
    pub fn min_value() -> Self {
        Self::new(S::min_value(), S::min_value())
    }

    /// Largest coordinate representable by `S`.
    #[inline]
    pub fn max_value() -> Self {
        Self::new(S::max_value(), S::max_value())
    }
}

impl<S: Scalar> Add for Coordinate<S> {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl<S: Scalar> Sub for Coordinate<S> {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}

/// Componentwise integer division (floor).
impl<S: Scalar> Div for Coordinate<S> {
    type Output = Self;

    #[inline]
    fn div(self, rhs: Self) -> Self {
        Self::new(self.x / rhs.x, self.y / rhs.y)
    }
}

impl<S: Scalar> From<(S, S)> for Coordinate<S> {
    #[inline]
    fn from((x, y): (S, S)) -> Self {
        Self::new(x, y)
    }
}

impl<S: Scalar> fmt::Display for Coordinate<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// One of the four partitions of a split region, in probe order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Quadrant {
    /// Low x, low y.
    NorthWest,
    /// High x, low y.
    NorthEast,
    /// High x, high y.
    SouthEast,
    /// Low x, high y.
    SouthWest,
}

impl Quadrant {
    /// All quadrants in the order descent probes them.
    pub const ALL: [Self; 4] = [
        Self::NorthWest,
        Self::NorthEast,
        Self::SouthEast,
        Self::SouthWest,
    ];

    /// Position of this quadrant in [`Quadrant::ALL`] and in child arrays.
    #[inline]
    pub fn index(self) -> usize {
        match self {
            Self::NorthWest => 0,
            Self::NorthEast => 1,
            Self::SouthEast => 2,
            Self::SouthWest => 3,
        }
    }
}

/// Axis-aligned box, inclusive on both ends.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Bounds<S: Scalar = u64> {
    /// Inclusive lower corner.
    pub min: Coordinate<S>,
    /// Inclusive upper corner.
    pub max: Coordinate<S>,
}

impl<S: Scalar> Bounds<S> {
    /// Creates bounds from two corners. No ordering is enforced; see [`Bounds::is_well_formed`].
    #[inline]
    pub fn new(min: Coordinate<S>, max: Coordinate<S>) -> Self {
        Self { min, max }
    }

    /// Bounds covering every coordinate representable by `S`.
    #[inline]
    pub fn full() -> Self {
        Self::new(Coordinate::min_value(), Coordinate::max_value())
    }

    /// True iff `min <= max` on both axes.
    #[inline]
    pub fn is_well_formed(&self) -> bool {
        self.min.x <= self.max.x && self.min.y <= self.max.y
    }

    /// True iff `point` lies inside the closed box.
    #[inline]
    pub fn contains(&self, point: Coordinate<S>) -> bool {
        point.x >= self.min.x && point.y >= self.min.y && point.x <= self.max.x && point.y <= self.max.y
    }

    /// True iff `other` lies wholly inside this box.
    #[inline]
    pub fn contains_bounds(&self, other: &Self) -> bool {
        self.contains(other.min) && self.contains(other.max)
    }

    /// True iff the box is at least two cells wide and two cells tall.
    ///
    /// A narrower box has no exact four-way split.
    #[inline]
    pub fn can_split(&self) -> bool {
        self.max.x > self.min.x && self.max.y > self.min.y
    }

    /// Splits the box into its four quadrants, ordered as [`Quadrant::ALL`].
    ///
    /// With `center_min = min + (max - min) / 2` and `center_max = center_min + (1, 1)`,
    /// the quadrants are `NW = [min, center_min]`, `NE = [(center_max.x, min.y), (max.x, center_min.y)]`,
    /// `SE = [center_max, max]` and `SW = [(min.x, center_max.y), (center_min.x, max.y)]`.
    ///
    /// Returns `None` when the box cannot be split (see [`Bounds::can_split`]). The
    /// arithmetic never overflows: `center_min < max` on both axes whenever a split exists.
    pub fn quadrants(&self) -> Option<[Self; 4]> {
        if !self.can_split() {
            return None;
        }

        let two = Coordinate::new(S::two(), S::two());
        let center_min = self.min + (self.max - self.min) / two;
        let center_max = center_min + Coordinate::new(S::one(), S::one());

        Some([
            Self::new(self.min, center_min),
            Self::new(
                Coordinate::new(center_max.x, self.min.y),
                Coordinate::new(self.max.x, center_min.y),
            ),
            Self::new(center_max, self.max),
            Self::new(
                Coordinate::new(self.min.x, center_max.y),
                Coordinate::new(center_min.x, self.max.y),
            ),
        ])
    }

    /// Quadrant of this box that would hold `point` after a split.
    ///
    /// `None` if the point is outside the box or the box cannot be split.
    pub fn quadrant_of(&self, point: Coordinate<S>) -> Option<Quadrant> {
        if !self.contains(point) {
            return None;
        }
        let quadrants = self.quadrants()?;
        Quadrant::ALL
            .into_iter()
            .find(|quadrant| quadrants[quadrant.index()].contains(point))
    }
}

impl<S: Scalar> fmt::Display for Bounds<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.min, self.max)
    }
}
