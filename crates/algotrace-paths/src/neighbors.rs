use algotrace_core::{GridArena, Point};

/// Cached neighbor computation helper.
///
/// Provides methods for enumerating cardinal (4-way) or all (8-way)
/// neighbors of a grid point, filtered by a predicate. The 8-way order is
/// N, NE, E, SE, S, SW, W, NW.
pub struct Neighbors {
    buf: Vec<Point>,
}

impl Default for Neighbors {
    fn default() -> Self {
        Self::new()
    }
}

impl Neighbors {
    /// Create a new `Neighbors` helper.
    pub fn new() -> Self {
        Self {
            buf: Vec::with_capacity(8),
        }
    }

    /// Return 4-directional (cardinal) neighbors of `p`, keeping only those
    /// for which `keep` returns `true`.
    pub fn cardinal(&mut self, p: Point, keep: impl Fn(Point) -> bool) -> &[Point] {
        self.buf.clear();
        self.buf.extend(p.neighbors_4().into_iter().filter(|&n| keep(n)));
        &self.buf
    }

    /// Return 8-directional neighbors of `p`, keeping only those for which
    /// `keep` returns `true`.
    pub fn all(&mut self, p: Point, keep: impl Fn(Point) -> bool) -> &[Point] {
        self.buf.clear();
        self.buf.extend(p.neighbors_8().into_iter().filter(|&n| keep(n)));
        &self.buf
    }

    /// In-bounds 8-neighbors of `p`, walls included.
    pub fn in_bounds(&mut self, grid: &GridArena, p: Point) -> &[Point] {
        self.all(p, |n| grid.contains(n))
    }

    /// 8-neighbors of `p` that a search may enter.
    pub fn passable(&mut self, grid: &GridArena, p: Point) -> &[Point] {
        self.all(p, |n| grid.is_passable(n))
    }
}
