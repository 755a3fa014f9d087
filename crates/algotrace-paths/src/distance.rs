use std::f64::consts::SQRT_2;

use algotrace_core::{GridArena, Point};

/// Cost of a single move between adjacent cells: 1 orthogonally, √2 diagonally.
#[inline]
pub fn cost(a: Point, b: Point) -> f64 {
    if a.is_diagonal_to(b) { SQRT_2 } else { 1.0 }
}

/// Move cost scaled by the weight of the destination cell.
#[inline]
pub fn weighted_cost(grid: &GridArena, a: Point, b: Point) -> f64 {
    cost(a, b) * f64::from(grid.weight(b))
}

/// Octile distance: the exact cost of the best unobstructed 8-way path.
#[inline]
pub fn octile(a: Point, b: Point) -> f64 {
    let dr = f64::from((a.row - b.row).abs());
    let dc = f64::from((a.col - b.col).abs());
    dr + dc + (SQRT_2 - 2.0) * dr.min(dc)
}

/// Manhattan (L1) distance between two points.
#[inline]
pub fn manhattan(a: Point, b: Point) -> i32 {
    (a.row - b.row).abs() + (a.col - b.col).abs()
}

/// Chebyshev (L∞) distance between two points.
#[inline]
pub fn chebyshev(a: Point, b: Point) -> i32 {
    (a.row - b.row).abs().max((a.col - b.col).abs())
}

/// Total weighted cost of walking `path` cell by cell.
pub fn path_cost(grid: &GridArena, path: &[Point]) -> f64 {
    path.windows(2)
        .map(|w| weighted_cost(grid, w[0], w[1]))
        .sum()
}
