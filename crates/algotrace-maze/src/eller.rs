//! Eller's algorithm: one lattice row at a time with per-row set ids.

use std::collections::BTreeMap;

use algotrace_core::Point;
use rand::Rng;

use crate::mapgen::{Canvas, Lattice, MazeGen};

impl<R: Rng> MazeGen<R> {
    pub(crate) fn eller(&mut self, canvas: &mut Canvas) -> usize {
        let lat = Lattice::of(canvas);
        if lat.len() == 0 {
            return 0;
        }
        let merge = Self::chance(self.cfg.eller_merge_chance);
        let drop = Self::chance(self.cfg.eller_drop_chance);
        let width = lat.cols as usize;

        let mut edges = 0;
        let mut fresh = 0usize;
        let mut carried: Vec<Option<usize>> = vec![None; width];

        for r in 0..lat.rows {
            let last = r + 1 == lat.rows;

            let mut sets = Vec::with_capacity(width);
            for (c, id) in carried.iter().copied().enumerate() {
                let id = id.unwrap_or_else(|| {
                    fresh += 1;
                    fresh
                });
                sets.push(id);
                canvas.carve(Point::new(r, c as i32));
            }

            for c in 1..width {
                let (left, right) = (sets[c - 1], sets[c]);
                if left != right && (last || self.rng.random_bool(merge)) {
                    canvas.carve_between(Point::new(r, c as i32 - 1), Point::new(r, c as i32));
                    edges += 1;
                    for s in sets.iter_mut().filter(|s| **s == right) {
                        *s = left;
                    }
                }
            }
            if last {
                break;
            }

            let mut members: BTreeMap<usize, Vec<usize>> = BTreeMap::new();
            for (c, &id) in sets.iter().enumerate() {
                members.entry(id).or_default().push(c);
            }
            carried = vec![None; width];
            for (id, cols) in members {
                let keep = cols[self.rng.random_range(0..cols.len())];
                for c in cols {
                    if c == keep || self.rng.random_bool(drop) {
                        let col = c as i32;
                        canvas.carve_between(Point::new(r, col), Point::new(r + 1, col));
                        edges += 1;
                        carried[c] = Some(id);
                    }
                }
            }
        }
        edges
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use crate::{MazeConfig, MazeGen, MazeKind};

    #[test]
    fn opens_a_spanning_tree() {
        for seed in 0..4 {
            let mut mg = MazeGen::new(StdRng::seed_from_u64(seed));
            let maze = mg.generate(MazeKind::Eller, 14, 19).unwrap();
            // 6 x 9 passages
            assert_eq!(maze.report.edges_opened, 53, "seed {seed}");
            assert!(maze.report.solvable);
        }
    }

    #[test]
    fn extreme_chances_still_connect() {
        for (merge, drop) in [(0.0, 0.0), (1.0, 1.0), (0.0, 1.0)] {
            let cfg = MazeConfig {
                eller_merge_chance: merge,
                eller_drop_chance: drop,
                repair: false,
                ..MazeConfig::default()
            };
            let mut mg = MazeGen::with_config(StdRng::seed_from_u64(9), cfg);
            let maze = mg.generate(MazeKind::Eller, 11, 11).unwrap();
            assert_eq!(maze.report.edges_opened, 24, "merge {merge} drop {drop}");
            assert!(maze.report.solvable);
        }
    }
}
