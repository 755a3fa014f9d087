//! Connected-component queries over passable cells (8-way).

use algotrace_core::{GridArena, Point};

use crate::neighbors::Neighbors;

/// Flood-fill from `from` and return a per-cell reachability mask.
///
/// A wall or out-of-bounds origin reaches nothing.
pub fn reachable(grid: &GridArena, from: Point) -> Vec<bool> {
    let mut seen = vec![false; grid.len()];
    if !grid.is_passable(from) {
        return seen;
    }
    let Some(si) = grid.idx(from) else {
        return seen;
    };

    let mut nb = Neighbors::new();
    let mut stack = vec![si];
    seen[si] = true;

    // Iterative DFS from `from`.
    while let Some(ci) = stack.pop() {
        let cp = grid.point(ci);
        for &np in nb.passable(grid, cp) {
            if let Some(ni) = grid.idx(np) {
                if !seen[ni] {
                    seen[ni] = true;
                    stack.push(ni);
                }
            }
        }
    }
    seen
}

/// Every cell connected to `from`, in row-major order.
pub fn component(grid: &GridArena, from: Point) -> Vec<Point> {
    reachable(grid, from)
        .iter()
        .enumerate()
        .filter(|&(_, &r)| r)
        .map(|(i, _)| grid.point(i))
        .collect()
}

/// Number of cells connected to `from`, `from` included.
pub fn component_size(grid: &GridArena, from: Point) -> usize {
    reachable(grid, from).iter().filter(|&&r| r).count()
}

/// Whether a walk through passable cells links `a` and `b`.
pub fn is_connected(grid: &GridArena, a: Point, b: Point) -> bool {
    match grid.idx(b) {
        Some(bi) => reachable(grid, a)[bi],
        None => false,
    }
}

/// Whether the grid's start reaches its end.
pub fn is_solvable(grid: &GridArena) -> bool {
    is_connected(grid, grid.start(), grid.end())
}
