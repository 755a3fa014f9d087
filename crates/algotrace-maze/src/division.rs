//! Recursive division: split open chambers with walls that keep a few gaps.

use algotrace_core::{Point, Range};
use rand::Rng;

use crate::mapgen::{Canvas, MazeGen};

impl<R: Rng> MazeGen<R> {
    /// Divide the open canvas along the longer axis of each chamber until
    /// chambers drop below `min_chamber`. Returns the number of gap cells.
    ///
    /// Walls sit on odd rows and columns and gaps on even ones, and a
    /// dividing line belongs to neither half. Chambers therefore always
    /// start on even coordinates, no later wall can cover a gap or the
    /// cells on either side of it, and the open cells stay connected.
    pub(crate) fn recursive_division(&mut self, canvas: &mut Canvas) -> usize {
        let min = self.cfg.min_chamber.max(3);
        let mut gaps = 0;
        let mut chambers = vec![Range::new(0, 0, canvas.rows(), canvas.cols())];

        while let Some(ch) = chambers.pop() {
            let (h, w) = (ch.height(), ch.width());
            if h < min || w < min {
                continue;
            }
            if h > w {
                let row = self.wall_line(ch.min.row, h);
                let open = self.gap_positions(ch.min.col, w);
                for col in ch.min.col..ch.max.col {
                    if open.binary_search(&col).is_err() {
                        canvas.set(Point::new(row, col), false);
                    }
                }
                gaps += open.len();
                chambers.push(Range::new(row + 1, ch.min.col, ch.max.row, ch.max.col));
                chambers.push(Range::new(ch.min.row, ch.min.col, row, ch.max.col));
            } else {
                let col = self.wall_line(ch.min.col, w);
                let open = self.gap_positions(ch.min.row, h);
                for row in ch.min.row..ch.max.row {
                    if open.binary_search(&row).is_err() {
                        canvas.set(Point::new(row, col), false);
                    }
                }
                gaps += open.len();
                chambers.push(Range::new(ch.min.row, col + 1, ch.max.row, ch.max.col));
                chambers.push(Range::new(ch.min.row, ch.min.col, ch.max.row, col));
            }
        }
        gaps
    }

    /// A random odd offset line in `from + 1..=from + len - 2`, leaving at
    /// least one line on each side. `from` is even and `len >= 3`.
    fn wall_line(&mut self, from: i32, len: i32) -> i32 {
        let choices = (len - 1) / 2;
        from + 1 + 2 * self.rng.random_range(0..choices)
    }

    /// Sorted, distinct even gap offsets in `from..from + len`. The number
    /// of draws is `max(1, ⌊len · U(gap_ratio)⌋)`, so collisions can leave
    /// fewer gaps.
    fn gap_positions(&mut self, from: i32, len: i32) -> Vec<i32> {
        let (a, b) = self.cfg.gap_ratio;
        let (lo, hi) = (a.min(b), a.max(b));
        let ratio = lo + self.rng.random::<f64>() * (hi - lo);
        let draws = ((len as f64 * ratio) as usize).max(1);
        let slots = (len + 1) / 2;
        let mut open: Vec<i32> = (0..draws)
            .map(|_| from + 2 * self.rng.random_range(0..slots))
            .collect();
        open.sort_unstable();
        open.dedup();
        open
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use algotrace_core::CellKind;

    use crate::{MazeConfig, MazeGen, MazeKind};

    #[test]
    fn walls_have_gaps() {
        let cfg = MazeConfig {
            repair: false,
            ..MazeConfig::default()
        };
        let mut mg = MazeGen::with_config(StdRng::seed_from_u64(7), cfg);
        let maze = mg.generate(MazeKind::RecursiveDivision, 20, 30).unwrap();
        assert!(maze.report.edges_opened >= 1);
        assert!(maze.grid.count_walls() > 0);
    }

    #[test]
    fn walls_stay_off_even_cells() {
        let mut mg = MazeGen::new(StdRng::seed_from_u64(11));
        let maze = mg.generate(MazeKind::RecursiveDivision, 31, 47).unwrap();
        for (p, c) in maze.grid.iter() {
            if c.kind == CellKind::Wall {
                assert!(p.row % 2 == 1 || p.col % 2 == 1, "wall at {p}");
            }
        }
    }

    #[test]
    fn connected_without_repair() {
        let cfg = MazeConfig {
            repair: false,
            ..MazeConfig::default()
        };
        for (rows, cols) in [(10, 10), (21, 21), (50, 80), (61, 61), (37, 90)] {
            for seed in 0..40 {
                let mut mg = MazeGen::with_config(StdRng::seed_from_u64(seed), cfg.clone());
                let maze = mg.generate(MazeKind::RecursiveDivision, rows, cols).unwrap();
                assert!(maze.report.solvable, "{rows}x{cols} seed {seed}");
                assert_eq!(maze.report.repair_attempts, 0);
            }
        }
    }

    #[test]
    fn small_grid_is_left_open() {
        let mut mg = MazeGen::new(StdRng::seed_from_u64(0));
        let maze = mg.generate(MazeKind::RecursiveDivision, 4, 20).unwrap();
        assert_eq!(maze.grid.count_walls(), 0);
        assert_eq!(maze.report.edges_opened, 0);
    }
}
