//! Wilson's algorithm: loop-erased random walks, giving a uniform spanning
//! tree.

use rand::Rng;
use rand::seq::SliceRandom;

use crate::mapgen::{Canvas, Lattice, MazeGen};

impl<R: Rng> MazeGen<R> {
    pub(crate) fn wilson(&mut self, canvas: &mut Canvas) -> usize {
        let lat = Lattice::of(canvas);
        let n = lat.len();
        if n == 0 {
            return 0;
        }

        let mut in_maze = vec![false; n];
        let root = self.rng.random_range(0..n);
        in_maze[root] = true;
        canvas.carve(lat.point(root));

        // Last exit taken from each cell during the current walk. Revisiting
        // a cell overwrites its exit, which erases the loop.
        let mut exit = vec![0usize; n];
        let mut nb = Vec::with_capacity(4);
        let mut order: Vec<usize> = (0..n).collect();
        order.shuffle(&mut self.rng);

        let mut edges = 0;
        for start in order {
            let mut cur = start;
            while !in_maze[cur] {
                lat.neighbors(lat.point(cur), &mut nb);
                let next = lat.index(nb[self.rng.random_range(0..nb.len())]);
                exit[cur] = next;
                cur = next;
            }

            cur = start;
            while !in_maze[cur] {
                in_maze[cur] = true;
                canvas.carve_between(lat.point(cur), lat.point(exit[cur]));
                edges += 1;
                cur = exit[cur];
            }
        }
        edges
    }
}
