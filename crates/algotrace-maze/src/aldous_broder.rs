//! Aldous-Broder: one random walk that carves every first visit.

use log::debug;
use rand::Rng;

use crate::mapgen::{Canvas, Lattice, MazeGen};

impl<R: Rng> MazeGen<R> {
    /// Walks for at most `rows * cols * walk_factor` moves. A capped walk
    /// leaves some passages sealed and relies on the repair pass.
    pub(crate) fn aldous_broder(&mut self, canvas: &mut Canvas) -> usize {
        let lat = Lattice::of(canvas);
        let n = lat.len();
        if n == 0 {
            return 0;
        }

        let cap = canvas.len().saturating_mul(self.cfg.walk_factor);
        let mut visited = vec![false; n];
        let mut nb = Vec::with_capacity(4);
        let mut cur = self.rng.random_range(0..n);
        visited[cur] = true;
        canvas.carve(lat.point(cur));

        let mut remaining = n - 1;
        let mut moves = 0;
        let mut edges = 0;
        while remaining > 0 && moves < cap {
            let cp = lat.point(cur);
            lat.neighbors(cp, &mut nb);
            let np = nb[self.rng.random_range(0..nb.len())];
            let next = lat.index(np);
            if !visited[next] {
                visited[next] = true;
                canvas.carve_between(cp, np);
                edges += 1;
                remaining -= 1;
            }
            cur = next;
            moves += 1;
        }

        if remaining > 0 {
            debug!("aldous-broder: walk capped after {moves} moves with {remaining} passages unvisited");
        }
        edges
    }
}
