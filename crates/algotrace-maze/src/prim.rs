//! Randomized Prim's: grow one tree from a random seed passage.

use rand::Rng;

use crate::mapgen::{Canvas, Lattice, MazeGen};

impl<R: Rng> MazeGen<R> {
    pub(crate) fn prim(&mut self, canvas: &mut Canvas) -> usize {
        let lat = Lattice::of(canvas);
        let n = lat.len();
        if n == 0 {
            return 0;
        }

        let mut in_maze = vec![false; n];
        let mut queued = vec![false; n];
        let mut frontier = Vec::new();
        let mut nb = Vec::with_capacity(4);
        let mut edges = 0;

        let seed = self.rng.random_range(0..n);
        in_maze[seed] = true;
        canvas.carve(lat.point(seed));
        let mut grown = seed;

        loop {
            lat.neighbors(lat.point(grown), &mut nb);
            for &q in &nb {
                let i = lat.index(q);
                if !in_maze[i] && !queued[i] {
                    queued[i] = true;
                    frontier.push(i);
                }
            }

            if frontier.is_empty() {
                break;
            }
            let f = frontier.swap_remove(self.rng.random_range(0..frontier.len()));
            let fp = lat.point(f);

            // Every frontier cell was queued by an in-maze neighbor.
            lat.neighbors(fp, &mut nb);
            nb.retain(|&q| in_maze[lat.index(q)]);
            if nb.is_empty() {
                continue;
            }
            let to = nb[self.rng.random_range(0..nb.len())];
            canvas.carve_between(fp, to);
            in_maze[f] = true;
            edges += 1;
            grown = f;
        }
        edges
    }
}
