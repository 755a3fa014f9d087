//! The [`GridArena`]: a 2D cell matrix with start/end markers.
//!
//! The arena is the single owner of cell state. Trace generation only reads
//! it; searches take a snapshot at call time so later edits never leak into
//! a trace that is already built.

use std::fmt;

use crate::cell::{Cell, CellKind};
use crate::error::GridError;
use crate::geom::{Point, Range};

/// A grid of cells with exactly one start and one end.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GridArena {
    rows: i32,
    cols: i32,
    cells: Vec<Cell>,
    start: Point,
    end: Point,
}

/// Default marker placement: center row, 1/4 and 3/4 of the width.
pub fn default_endpoints(rows: i32, cols: i32) -> (Point, Point) {
    let row = rows / 2;
    (Point::new(row, cols / 4), Point::new(row, cols * 3 / 4))
}

impl GridArena {
    /// Create an empty grid with start and end at their default positions.
    pub fn new(rows: i32, cols: i32) -> Result<Self, GridError> {
        if rows < 1 || cols < 2 {
            return Err(GridError::TooSmall { rows, cols });
        }
        let (start, end) = default_endpoints(rows, cols);
        Self::with_endpoints(rows, cols, start, end)
    }

    /// Create an empty grid with explicit start and end positions.
    pub fn with_endpoints(rows: i32, cols: i32, start: Point, end: Point) -> Result<Self, GridError> {
        if rows < 1 || cols < 1 || (rows as i64) * (cols as i64) < 2 {
            return Err(GridError::TooSmall { rows, cols });
        }
        let bounds = Range::new(0, 0, rows, cols);
        for p in [start, end] {
            if !bounds.contains(p) {
                return Err(GridError::OutOfBounds(p));
            }
        }
        if start == end {
            return Err(GridError::SameEndpoints(start));
        }
        let mut grid = Self {
            rows,
            cols,
            cells: vec![Cell::default(); (rows * cols) as usize],
            start,
            end,
        };
        let (si, ei) = (grid.flat(start), grid.flat(end));
        grid.cells[si].kind = CellKind::Start;
        grid.cells[ei].kind = CellKind::End;
        Ok(grid)
    }

    /// Parse a text layout.
    ///
    /// `.` is empty, `#` a wall, `S`/`E` the markers and `1`-`9` weighted
    /// cells. Rows are separated by newlines and must share one width.
    pub fn parse(s: &str) -> Result<Self, GridError> {
        let s = s.trim();
        let lines: Vec<&str> = s.lines().map(str::trim).collect();
        let cols = lines.first().map_or(0, |l| l.chars().count()) as i32;
        if lines.iter().any(|l| l.chars().count() as i32 != cols) {
            return Err(GridError::InconsistentSize(s.to_string()));
        }
        let rows = lines.len() as i32;

        let mut kinds = Vec::with_capacity((rows * cols).max(0) as usize);
        let mut start = None;
        let mut end = None;
        for (r, line) in lines.iter().enumerate() {
            for (c, ch) in line.chars().enumerate() {
                let pos = Point::new(r as i32, c as i32);
                let kind = match ch {
                    '.' => CellKind::Empty,
                    '#' => CellKind::Wall,
                    'S' if start.is_none() => {
                        start = Some(pos);
                        CellKind::Start
                    }
                    'E' if end.is_none() => {
                        end = Some(pos);
                        CellKind::End
                    }
                    'S' | 'E' => return Err(GridError::MissingEndpoint),
                    '1'..='9' => CellKind::Weighted(ch as u32 - '0' as u32),
                    _ => return Err(GridError::InvalidRune { ch, pos }),
                };
                kinds.push(kind);
            }
        }
        let (Some(start), Some(end)) = (start, end) else {
            return Err(GridError::MissingEndpoint);
        };

        let mut grid = Self::with_endpoints(rows, cols, start, end)?;
        for (cell, kind) in grid.cells.iter_mut().zip(kinds) {
            cell.kind = kind;
        }
        Ok(grid)
    }

    // -----------------------------------------------------------------------
    // Dimensions and coordinates
    // -----------------------------------------------------------------------

    /// Number of rows.
    #[inline]
    pub fn rows(&self) -> i32 {
        self.rows
    }

    /// Number of columns.
    #[inline]
    pub fn cols(&self) -> i32 {
        self.cols
    }

    /// Total number of cells.
    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Always false: a grid holds at least its two markers.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// The grid rectangle.
    #[inline]
    pub fn bounds(&self) -> Range {
        Range::new(0, 0, self.rows, self.cols)
    }

    /// Position of the start marker.
    #[inline]
    pub fn start(&self) -> Point {
        self.start
    }

    /// Position of the end marker.
    #[inline]
    pub fn end(&self) -> Point {
        self.end
    }

    /// Whether `p` is inside the grid.
    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        p.row >= 0 && p.row < self.rows && p.col >= 0 && p.col < self.cols
    }

    /// Flat `row * cols + col` index of `p`, or `None` if out of bounds.
    #[inline]
    pub fn idx(&self, p: Point) -> Option<usize> {
        if self.contains(p) { Some(self.flat(p)) } else { None }
    }

    /// Inverse of [`idx`](Self::idx).
    #[inline]
    pub fn point(&self, idx: usize) -> Point {
        let cols = self.cols as usize;
        Point::new((idx / cols) as i32, (idx % cols) as i32)
    }

    #[inline]
    fn flat(&self, p: Point) -> usize {
        (p.row * self.cols + p.col) as usize
    }

    // -----------------------------------------------------------------------
    // Reads
    // -----------------------------------------------------------------------

    /// The cell at `p`, if in bounds.
    #[inline]
    pub fn cell(&self, p: Point) -> Option<&Cell> {
        self.idx(p).map(|i| &self.cells[i])
    }

    /// The kind of the cell at `p`, if in bounds.
    #[inline]
    pub fn kind(&self, p: Point) -> Option<CellKind> {
        self.cell(p).map(|c| c.kind)
    }

    /// Whether `p` is in bounds and not a wall.
    #[inline]
    pub fn is_passable(&self, p: Point) -> bool {
        self.kind(p).is_some_and(CellKind::is_passable)
    }

    /// Whether `p` is in bounds and a wall.
    #[inline]
    pub fn is_wall(&self, p: Point) -> bool {
        self.kind(p) == Some(CellKind::Wall)
    }

    /// Traversal weight of `p` (1 unless weighted or out of bounds).
    #[inline]
    pub fn weight(&self, p: Point) -> u32 {
        self.kind(p).map_or(1, CellKind::weight)
    }

    /// Number of wall cells.
    pub fn count_walls(&self) -> usize {
        self.cells.iter().filter(|c| c.kind == CellKind::Wall).count()
    }

    /// Whether any cell carries a weight.
    pub fn has_weights(&self) -> bool {
        self.cells
            .iter()
            .any(|c| matches!(c.kind, CellKind::Weighted(_)))
    }

    /// Row-major iterator over `(Point, &Cell)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (Point, &Cell)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .map(|(i, c)| (self.point(i), c))
    }

    // -----------------------------------------------------------------------
    // Edits
    // -----------------------------------------------------------------------

    fn editable(&self, p: Point) -> Result<usize, GridError> {
        let i = self.idx(p).ok_or(GridError::OutOfBounds(p))?;
        if self.cells[i].kind.is_endpoint() {
            return Err(GridError::ProtectedCell(p));
        }
        Ok(i)
    }

    /// Turn `p` into a wall.
    pub fn set_wall(&mut self, p: Point) -> Result<(), GridError> {
        let i = self.editable(p)?;
        self.cells[i].kind = CellKind::Wall;
        Ok(())
    }

    /// Turn `p` into a weighted cell.
    pub fn set_weight(&mut self, p: Point, weight: u32) -> Result<(), GridError> {
        if weight == 0 {
            return Err(GridError::InvalidWeight(weight));
        }
        let i = self.editable(p)?;
        self.cells[i].kind = CellKind::Weighted(weight);
        Ok(())
    }

    /// Reset `p` to empty.
    pub fn clear_cell(&mut self, p: Point) -> Result<(), GridError> {
        let i = self.editable(p)?;
        self.cells[i].kind = CellKind::Empty;
        Ok(())
    }

    /// Move the start marker to `p`. Whatever was at `p` is replaced.
    pub fn move_start(&mut self, p: Point) -> Result<(), GridError> {
        let i = self.idx(p).ok_or(GridError::OutOfBounds(p))?;
        if p == self.end {
            return Err(GridError::SameEndpoints(p));
        }
        let old = self.flat(self.start);
        self.cells[old].kind = CellKind::Empty;
        self.cells[i].kind = CellKind::Start;
        self.start = p;
        Ok(())
    }

    /// Move the end marker to `p`. Whatever was at `p` is replaced.
    pub fn move_end(&mut self, p: Point) -> Result<(), GridError> {
        let i = self.idx(p).ok_or(GridError::OutOfBounds(p))?;
        if p == self.start {
            return Err(GridError::SameEndpoints(p));
        }
        let old = self.flat(self.end);
        self.cells[old].kind = CellKind::Empty;
        self.cells[i].kind = CellKind::End;
        self.end = p;
        Ok(())
    }

    /// Remove every wall.
    pub fn clear_walls(&mut self) {
        for c in self.cells.iter_mut().filter(|c| c.kind == CellKind::Wall) {
            c.kind = CellKind::Empty;
        }
    }

    /// Remove every weight.
    pub fn clear_weights(&mut self) {
        for c in self.cells.iter_mut() {
            if let CellKind::Weighted(_) = c.kind {
                c.kind = CellKind::Empty;
            }
        }
    }

    /// Remove walls, weights and annotations, keeping the markers in place.
    pub fn reset(&mut self) {
        for c in self.cells.iter_mut() {
            if !c.kind.is_endpoint() {
                *c = Cell::default();
            } else {
                c.distance = None;
                c.heuristic = None;
            }
        }
    }

    /// Attach presentation annotations to `p`.
    pub fn annotate(
        &mut self,
        p: Point,
        distance: Option<f64>,
        heuristic: Option<f64>,
    ) -> Result<(), GridError> {
        let i = self.idx(p).ok_or(GridError::OutOfBounds(p))?;
        self.cells[i].distance = distance;
        self.cells[i].heuristic = heuristic;
        Ok(())
    }

    /// Drop every annotation.
    pub fn clear_annotations(&mut self) {
        for c in self.cells.iter_mut() {
            c.distance = None;
            c.heuristic = None;
        }
    }
}

impl fmt::Display for GridArena {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, c) in self.cells.iter().enumerate() {
            if i > 0 && i % self.cols as usize == 0 {
                f.write_str("\n")?;
            }
            write!(f, "{}", c.kind.glyph())?;
        }
        Ok(())
    }
}
