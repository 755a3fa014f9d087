use rand::Rng;

use crate::mapgen::{Canvas, MazeGen};

impl<R: Rng> MazeGen<R> {
    /// Wall each cell independently with probability `wall_density`.
    pub(crate) fn random_walls(&mut self, canvas: &mut Canvas) -> usize {
        let density = Self::chance(self.cfg.wall_density);
        for i in 0..canvas.len() {
            if self.rng.random_bool(density) {
                canvas.set_index(i, false);
            }
        }
        0
    }
}
