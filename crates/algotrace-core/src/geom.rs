//! Geometry primitives: [`Point`] and [`Range`].
//!
//! Coordinates are `(row, col)`: rows grow down, columns grow right.

use std::fmt;
use std::ops::{Add, Sub};

// ---------------------------------------------------------------------------
// Point
// ---------------------------------------------------------------------------

/// A grid coordinate.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    pub row: i32,
    pub col: i32,
}

impl Point {
    /// Origin (0, 0).
    pub const ZERO: Self = Self { row: 0, col: 0 };

    /// Create a new point.
    #[inline]
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// Return a point shifted by (dr, dc).
    #[inline]
    pub const fn shift(self, dr: i32, dc: i32) -> Self {
        Self {
            row: self.row + dr,
            col: self.col + dc,
        }
    }

    /// The four cardinal neighbours (N, E, S, W).
    #[inline]
    pub fn neighbors_4(self) -> [Point; 4] {
        [
            self.shift(-1, 0),
            self.shift(0, 1),
            self.shift(1, 0),
            self.shift(0, -1),
        ]
    }

    /// All eight neighbours, clockwise from north: N, NE, E, SE, S, SW, W, NW.
    ///
    /// The order is part of the contract: search tie-breaking depends on it.
    #[inline]
    pub fn neighbors_8(self) -> [Point; 8] {
        [
            self.shift(-1, 0),
            self.shift(-1, 1),
            self.shift(0, 1),
            self.shift(1, 1),
            self.shift(1, 0),
            self.shift(1, -1),
            self.shift(0, -1),
            self.shift(-1, -1),
        ]
    }

    /// Component-wise sign, i.e. the unit step from `self` towards `other`.
    #[inline]
    pub fn step_towards(self, other: Point) -> Point {
        Point::new(
            (other.row - self.row).signum(),
            (other.col - self.col).signum(),
        )
    }

    /// Whether `self` and `other` differ in both row and column.
    #[inline]
    pub fn is_diagonal_to(self, other: Point) -> bool {
        self.row != other.row && self.col != other.col
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

impl Add for Point {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::new(self.row + rhs.row, self.col + rhs.col)
    }
}

impl Sub for Point {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.row - rhs.row, self.col - rhs.col)
    }
}

// ---------------------------------------------------------------------------
// Range
// ---------------------------------------------------------------------------

/// A half-open rectangle \[min, max). `min` is inclusive, `max` is exclusive.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Range {
    pub min: Point,
    pub max: Point,
}

impl Range {
    /// Create a new range from two corners, canonicalized so that
    /// `min` ≤ `max` on each axis.
    #[inline]
    pub fn new(r0: i32, c0: i32, r1: i32, c1: i32) -> Self {
        Self {
            min: Point::new(r0.min(r1), c0.min(c1)),
            max: Point::new(r0.max(r1), c0.max(c1)),
        }
    }

    /// Number of rows spanned.
    #[inline]
    pub fn height(self) -> i32 {
        self.max.row - self.min.row
    }

    /// Number of columns spanned.
    #[inline]
    pub fn width(self) -> i32 {
        self.max.col - self.min.col
    }

    /// Total number of cells in the range.
    #[inline]
    pub fn len(self) -> usize {
        if self.is_empty() {
            return 0;
        }
        (self.width() as usize) * (self.height() as usize)
    }

    /// Whether the range has zero or negative area.
    #[inline]
    pub fn is_empty(self) -> bool {
        self.min.row >= self.max.row || self.min.col >= self.max.col
    }

    /// Whether `p` is inside the half-open range.
    #[inline]
    pub fn contains(self, p: Point) -> bool {
        p.row >= self.min.row && p.row < self.max.row && p.col >= self.min.col && p.col < self.max.col
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn point_arithmetic() {
        let a = Point::new(1, 2);
        let b = Point::new(3, 4);
        assert_eq!(a + b, Point::new(4, 6));
        assert_eq!(b - a, Point::new(2, 2));
        assert_eq!(a.to_string(), "(1, 2)");
    }

    #[test]
    fn neighbors_8_clockwise_from_north() {
        let n = Point::new(5, 5).neighbors_8();
        assert_eq!(n[0], Point::new(4, 5));
        assert_eq!(n[1], Point::new(4, 6));
        assert_eq!(n[2], Point::new(5, 6));
        assert_eq!(n[4], Point::new(6, 5));
        assert_eq!(n[6], Point::new(5, 4));
        assert_eq!(n[7], Point::new(4, 4));
    }

    #[test]
    fn step_towards_is_unit() {
        let a = Point::new(2, 2);
        assert_eq!(a.step_towards(Point::new(9, 0)), Point::new(1, -1));
        assert_eq!(a.step_towards(a), Point::ZERO);
        assert!(a.is_diagonal_to(Point::new(3, 3)));
        assert!(!a.is_diagonal_to(Point::new(2, 7)));
    }

    #[test]
    fn range_basics() {
        let r = Range::new(0, 0, 2, 3);
        assert_eq!(r.height(), 2);
        assert_eq!(r.width(), 3);
        assert_eq!(r.len(), 6);
        assert!(r.contains(Point::new(1, 2)));
        assert!(!r.contains(Point::new(2, 0)));
        assert!(!r.contains(Point::new(0, 3)));
    }

    #[test]
    fn range_auto_canonicalize() {
        let r = Range::new(3, 2, 0, 0);
        assert_eq!(r.min, Point::new(0, 0));
        assert_eq!(r.max, Point::new(3, 2));
    }
}
