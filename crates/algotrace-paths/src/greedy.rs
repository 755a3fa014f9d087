//! Greedy best-first search: ranks the frontier by the heuristic alone.
//!
//! Weights do not steer the search, but the reported path cost includes
//! them.

use algotrace_core::{GridArena, PathfindingStep, Point, TraceConfig, benchmark};

use crate::distance::octile;
use crate::neighbors::Neighbors;
use crate::nodes::{OpenList, node_array, reconstruct};
use crate::probe::{Recorder, SearchProbe, Silent};

/// Trace a greedy best-first search from the grid's start to its end.
pub fn generate(grid: &GridArena, cfg: &TraceConfig) -> Vec<PathfindingStep> {
    let avg = benchmark(|| search(grid, &mut Silent), cfg.bench_budget);
    let mut rec = Recorder::new(grid, "Starting Greedy Best-First Search");
    let path = search(grid, &mut rec);
    rec.finish(path, avg)
}

/// Some path from start to end, or `None`.
pub fn find_path(grid: &GridArena) -> Option<Vec<Point>> {
    search(grid, &mut Silent)
}

fn search<P: SearchProbe>(grid: &GridArena, probe: &mut P) -> Option<Vec<Point>> {
    let goal = grid.end();
    let si = grid.idx(grid.start())?;
    let gi = grid.idx(goal)?;

    // `f` holds the heuristic; a cell enters the frontier at most once.
    let mut nodes = node_array(grid);
    let mut open = OpenList::new();
    nodes[si].f = octile(grid.start(), goal);
    nodes[si].open = true;
    open.push(si);

    let mut nb = Neighbors::new();

    while let Some(ci) = open.pop_min(|i| nodes[i].f) {
        nodes[ci].open = false;
        if ci == gi {
            return Some(reconstruct(grid, gi, |i| nodes[i].parent));
        }
        nodes[ci].closed = true;
        let cp = grid.point(ci);
        probe.visit(cp);

        for &np in nb.passable(grid, cp) {
            let Some(ni) = grid.idx(np) else {
                continue;
            };
            let n = &mut nodes[ni];
            if n.closed || n.open {
                continue;
            }
            n.f = octile(np, goal);
            n.parent = ci;
            n.open = true;
            open.push(ni);
            probe.explore(np);
        }

        probe.step(true, || format!("Exploring {cp}, h={:.2}", octile(cp, goal)));
    }
    None
}
