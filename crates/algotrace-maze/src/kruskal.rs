//! Kruskal's: open shuffled lattice edges that join two separate trees.

use rand::Rng;
use rand::seq::SliceRandom;

use crate::dsu::Dsu;
use crate::mapgen::{Canvas, Lattice, MazeGen};

impl<R: Rng> MazeGen<R> {
    /// Opens exactly `passages - 1` edges.
    pub(crate) fn kruskal(&mut self, canvas: &mut Canvas) -> usize {
        let lat = Lattice::of(canvas);
        let n = lat.len();

        let mut candidates = Vec::with_capacity(2 * n);
        for i in 0..n {
            let q = lat.point(i);
            canvas.carve(q);
            for o in [q.shift(0, 1), q.shift(1, 0)] {
                if lat.contains(o) {
                    candidates.push((q, o));
                }
            }
        }
        candidates.shuffle(&mut self.rng);

        let mut sets = Dsu::new(n);
        let mut edges = 0;
        for (a, b) in candidates {
            if sets.union(lat.index(a), lat.index(b)) {
                canvas.carve_between(a, b);
                edges += 1;
            }
        }
        edges
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use crate::{MazeGen, MazeKind};

    #[test]
    fn opens_passages_minus_one() {
        for (seed, rows, cols) in [(0, 10, 10), (1, 11, 11), (2, 25, 40), (3, 13, 8)] {
            let mut mg = MazeGen::new(StdRng::seed_from_u64(seed));
            let maze = mg.generate(MazeKind::Kruskal, rows, cols).unwrap();
            let passages = (((rows - 1) / 2) * ((cols - 1) / 2)) as usize;
            assert_eq!(maze.report.edges_opened, passages - 1, "{rows}x{cols}");
            assert!(maze.report.solvable);
        }
    }
}
