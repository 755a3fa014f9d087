//! Breadth-first search. Ignores weights; finds the fewest moves.

use std::collections::VecDeque;

use algotrace_core::{GridArena, PathfindingStep, Point, TraceConfig, benchmark};

use crate::neighbors::Neighbors;
use crate::nodes::{NO_PARENT, reconstruct};
use crate::probe::{Recorder, SearchProbe, Silent};

/// Trace a breadth-first search from the grid's start to its end.
pub fn generate(grid: &GridArena, cfg: &TraceConfig) -> Vec<PathfindingStep> {
    let avg = benchmark(|| search(grid, &mut Silent), cfg.bench_budget);
    let mut rec = Recorder::new(grid, "Starting Breadth-First Search");
    let path = search(grid, &mut rec);
    rec.finish(path, avg)
}

/// Fewest-move path from start to end, or `None`.
pub fn find_path(grid: &GridArena) -> Option<Vec<Point>> {
    search(grid, &mut Silent)
}

fn search<P: SearchProbe>(grid: &GridArena, probe: &mut P) -> Option<Vec<Point>> {
    let si = grid.idx(grid.start())?;
    let gi = grid.idx(grid.end())?;

    let mut parents = vec![NO_PARENT; grid.len()];
    let mut seen = vec![false; grid.len()];
    let mut queue = VecDeque::from([si]);
    seen[si] = true;

    let mut nb = Neighbors::new();

    while let Some(ci) = queue.pop_front() {
        if ci == gi {
            return Some(reconstruct(grid, gi, |i| parents[i]));
        }
        let cp = grid.point(ci);
        probe.visit(cp);

        for &np in nb.passable(grid, cp) {
            let Some(ni) = grid.idx(np) else {
                continue;
            };
            if seen[ni] {
                continue;
            }
            seen[ni] = true;
            parents[ni] = ci;
            queue.push_back(ni);
            probe.explore(np);
        }

        probe.step(false, || format!("Exploring level from {cp}"));
    }
    None
}
