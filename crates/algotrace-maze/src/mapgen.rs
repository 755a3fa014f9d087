//! The [`MazeGen`] driver and the scratch canvas the generators carve into.
//!
//! Generators only flip cells between open and wall on a [`Canvas`]. The
//! driver then lays the result onto a fresh [`GridArena`], forces the
//! start and end cells open, and runs the repair pass.

use algotrace_core::{CellKind, GridArena, GridError, Point};
use algotrace_paths::cc;
use log::{debug, trace, warn};
use rand::Rng;

use crate::config::MazeConfig;
use crate::kind::MazeKind;

/// A generated maze and what it took to make it.
#[derive(Debug, Clone, PartialEq)]
pub struct Maze {
    pub grid: GridArena,
    pub report: MazeReport,
}

/// Summary of one generator run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MazeReport {
    pub kind: MazeKind,
    /// Passages opened while carving: lattice edges for the spanning-tree
    /// generators, wall gaps for recursive division, 0 for random walls.
    pub edges_opened: usize,
    /// Whether start reaches end in the final grid.
    pub solvable: bool,
    /// Walls removed by the repair pass.
    pub repair_attempts: usize,
}

/// Open/wall mask the size of the target grid.
#[derive(Debug, Clone)]
pub(crate) struct Canvas {
    rows: i32,
    cols: i32,
    open: Vec<bool>,
}

impl Canvas {
    pub(crate) fn filled(rows: i32, cols: i32, open: bool) -> Self {
        Self {
            rows,
            cols,
            open: vec![open; (rows * cols) as usize],
        }
    }

    pub(crate) fn rows(&self) -> i32 {
        self.rows
    }

    pub(crate) fn cols(&self) -> i32 {
        self.cols
    }

    pub(crate) fn len(&self) -> usize {
        self.open.len()
    }

    fn idx(&self, p: Point) -> Option<usize> {
        (p.row >= 0 && p.row < self.rows && p.col >= 0 && p.col < self.cols)
            .then(|| (p.row * self.cols + p.col) as usize)
    }

    #[cfg(test)]
    pub(crate) fn is_open(&self, p: Point) -> bool {
        self.idx(p).is_some_and(|i| self.open[i])
    }

    pub(crate) fn set(&mut self, p: Point, open: bool) {
        if let Some(i) = self.idx(p) {
            self.open[i] = open;
        }
    }

    pub(crate) fn set_index(&mut self, i: usize, open: bool) {
        self.open[i] = open;
    }

    /// Open lattice cell `q`.
    pub(crate) fn carve(&mut self, q: Point) {
        self.set(Lattice::cell(q), true);
    }

    /// Open lattice cells `a` and `b` and the wall cell between them.
    pub(crate) fn carve_between(&mut self, a: Point, b: Point) {
        self.carve(a);
        self.carve(b);
        self.set(Point::new(a.row + b.row + 1, a.col + b.col + 1), true);
    }
}

/// The passage cells of a grid: odd rows and columns strictly inside the
/// border, addressed by their own `(row, col)` with `cell = 2 * q + 1`.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Lattice {
    pub rows: i32,
    pub cols: i32,
}

impl Lattice {
    pub(crate) fn of(canvas: &Canvas) -> Self {
        Self {
            rows: ((canvas.rows() - 1) / 2).max(0),
            cols: ((canvas.cols() - 1) / 2).max(0),
        }
    }

    pub(crate) fn len(self) -> usize {
        (self.rows * self.cols) as usize
    }

    pub(crate) fn contains(self, q: Point) -> bool {
        q.row >= 0 && q.row < self.rows && q.col >= 0 && q.col < self.cols
    }

    pub(crate) fn index(self, q: Point) -> usize {
        (q.row * self.cols + q.col) as usize
    }

    pub(crate) fn point(self, i: usize) -> Point {
        let i = i as i32;
        Point::new(i / self.cols, i % self.cols)
    }

    /// Grid cell of lattice point `q`.
    pub(crate) fn cell(q: Point) -> Point {
        Point::new(2 * q.row + 1, 2 * q.col + 1)
    }

    /// Fill `buf` with the in-lattice 4-neighbors of `q`.
    pub(crate) fn neighbors(self, q: Point, buf: &mut Vec<Point>) {
        buf.clear();
        buf.extend(q.neighbors_4().into_iter().filter(|&n| self.contains(n)));
    }
}

/// Maze generator over an injected random source.
pub struct MazeGen<R: Rng> {
    pub rng: R,
    pub cfg: MazeConfig,
}

impl<R: Rng> MazeGen<R> {
    /// A generator with the default [`MazeConfig`].
    pub fn new(rng: R) -> Self {
        Self::with_config(rng, MazeConfig::default())
    }

    pub fn with_config(rng: R, cfg: MazeConfig) -> Self {
        Self { rng, cfg }
    }

    /// Generate a `rows × cols` maze of the given kind.
    ///
    /// Start and end sit at the default marker positions and are always
    /// open. The grid is only guaranteed solvable when `report.solvable`
    /// says so: the repair pass gives up after `repair_attempts` walls.
    pub fn generate(&mut self, kind: MazeKind, rows: i32, cols: i32) -> Result<Maze, GridError> {
        let mut grid = GridArena::new(rows, cols)?;
        let mut canvas = Canvas::filled(rows, cols, !kind.is_lattice());

        let edges_opened = match kind {
            MazeKind::RecursiveDivision => self.recursive_division(&mut canvas),
            MazeKind::Prim => self.prim(&mut canvas),
            MazeKind::Kruskal => self.kruskal(&mut canvas),
            MazeKind::Wilson => self.wilson(&mut canvas),
            MazeKind::AldousBroder => self.aldous_broder(&mut canvas),
            MazeKind::Eller => self.eller(&mut canvas),
            MazeKind::RandomWalls => self.random_walls(&mut canvas),
        };

        // Walls everywhere the canvas is closed, except the markers.
        for i in 0..canvas.len() {
            let p = grid.point(i);
            if !canvas.open[i] && !grid.kind(p).is_some_and(CellKind::is_endpoint) {
                grid.set_wall(p)?;
            }
        }

        let (repair_attempts, solvable) = if self.cfg.repair {
            self.repair(&mut grid)?
        } else {
            (0, cc::is_solvable(&grid))
        };

        let report = MazeReport {
            kind,
            edges_opened,
            solvable,
            repair_attempts,
        };
        debug!(
            "{kind} {rows}x{cols}: {edges_opened} passages, {} walls, {repair_attempts} repairs, solvable={solvable}",
            grid.count_walls()
        );
        Ok(Maze { grid, report })
    }

    /// Knock down random walls until start reaches end or the attempt
    /// budget runs out. Returns the number of walls removed and whether the
    /// grid ended up solvable.
    fn repair(&mut self, grid: &mut GridArena) -> Result<(usize, bool), GridError> {
        let mut attempts = 0;
        let mut solvable = cc::is_solvable(grid);
        let mut walls = Vec::new();

        while !solvable && attempts < self.cfg.repair_attempts {
            walls.clear();
            walls.extend(
                grid.iter()
                    .filter(|(_, c)| c.kind == CellKind::Wall)
                    .map(|(p, _)| p),
            );
            if walls.is_empty() {
                break;
            }
            let p = walls[self.rng.random_range(0..walls.len())];
            grid.clear_cell(p)?;
            attempts += 1;
            trace!("repair: removed wall at {p} (attempt {attempts})");
            solvable = cc::is_solvable(grid);
        }

        if !solvable {
            warn!(
                "repair gave up after {attempts} attempts: {} does not reach {}",
                grid.start(),
                grid.end()
            );
        }
        Ok((attempts, solvable))
    }

    /// A probability from config, clamped into `[0, 1]`.
    pub(crate) fn chance(p: f64) -> f64 {
        if p.is_nan() { 0.0 } else { p.clamp(0.0, 1.0) }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn lattice_geometry() {
        let canvas = Canvas::filled(10, 11, false);
        let lat = Lattice::of(&canvas);
        assert_eq!((lat.rows, lat.cols), (4, 5));
        assert_eq!(lat.len(), 20);
        assert_eq!(Lattice::cell(Point::new(3, 4)), Point::new(7, 9));
        assert_eq!(lat.point(lat.index(Point::new(2, 3))), Point::new(2, 3));

        let mut buf = Vec::new();
        lat.neighbors(Point::new(0, 0), &mut buf);
        assert_eq!(buf.len(), 2);
        lat.neighbors(Point::new(1, 1), &mut buf);
        assert_eq!(buf.len(), 4);
    }

    #[test]
    fn carve_between_opens_the_wall() {
        let mut canvas = Canvas::filled(5, 5, false);
        canvas.carve_between(Point::new(0, 0), Point::new(0, 1));
        assert!(canvas.is_open(Point::new(1, 1)));
        assert!(canvas.is_open(Point::new(1, 2)));
        assert!(canvas.is_open(Point::new(1, 3)));
        assert!(!canvas.is_open(Point::new(2, 2)));
    }

    #[test]
    fn markers_are_always_open() {
        let mut mg = MazeGen::new(StdRng::seed_from_u64(3));
        for kind in MazeKind::ALL {
            let maze = mg.generate(kind, 12, 16).unwrap();
            let g = &maze.grid;
            assert_eq!(g.kind(g.start()), Some(CellKind::Start), "{kind}");
            assert_eq!(g.kind(g.end()), Some(CellKind::End), "{kind}");
            assert_eq!((g.rows(), g.cols()), (12, 16));
        }
    }

    #[test]
    fn too_small_is_an_error() {
        let mut mg = MazeGen::new(StdRng::seed_from_u64(0));
        assert_eq!(
            mg.generate(MazeKind::Prim, 0, 5),
            Err(GridError::TooSmall { rows: 0, cols: 5 })
        );
    }

    #[test]
    fn repair_budget_exhaustion_is_reported() {
        let cfg = MazeConfig {
            wall_density: 1.0,
            repair_attempts: 0,
            ..MazeConfig::default()
        };
        let mut mg = MazeGen::with_config(StdRng::seed_from_u64(1), cfg);
        let maze = mg.generate(MazeKind::RandomWalls, 10, 10).unwrap();
        assert!(!maze.report.solvable);
        assert_eq!(maze.report.repair_attempts, 0);
        assert_eq!(maze.grid.count_walls(), 98);
    }

    #[test]
    fn repair_can_be_disabled() {
        let cfg = MazeConfig {
            wall_density: 1.0,
            repair: false,
            ..MazeConfig::default()
        };
        let mut mg = MazeGen::with_config(StdRng::seed_from_u64(1), cfg);
        let report = mg.generate(MazeKind::RandomWalls, 10, 10).unwrap().report;
        assert!(!report.solvable);
        assert_eq!(report.repair_attempts, 0);
    }

    #[test]
    fn chance_is_clamped() {
        assert_eq!(MazeGen::<StdRng>::chance(1.5), 1.0);
        assert_eq!(MazeGen::<StdRng>::chance(-0.2), 0.0);
        assert_eq!(MazeGen::<StdRng>::chance(f64::NAN), 0.0);
    }
}
