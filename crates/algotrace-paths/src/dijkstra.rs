use algotrace_core::{GridArena, PathfindingStep, Point, TraceConfig, benchmark};

use crate::distance::weighted_cost;
use crate::neighbors::Neighbors;
use crate::nodes::{OpenList, node_array, reconstruct};
use crate::probe::{Recorder, SearchProbe, Silent};

/// Trace Dijkstra's algorithm from the grid's start to its end.
///
/// Moves cost 1 or √2 times the weight of the entered cell; the frontier is
/// ranked by accumulated cost alone.
pub fn generate(grid: &GridArena, cfg: &TraceConfig) -> Vec<PathfindingStep> {
    let avg = benchmark(|| search(grid, &mut Silent), cfg.bench_budget);
    let mut rec = Recorder::new(grid, "Starting Dijkstra's Algorithm");
    let path = search(grid, &mut rec);
    rec.finish(path, avg)
}

/// Cheapest weighted path from start to end, or `None`.
pub fn find_path(grid: &GridArena) -> Option<Vec<Point>> {
    search(grid, &mut Silent)
}

fn search<P: SearchProbe>(grid: &GridArena, probe: &mut P) -> Option<Vec<Point>> {
    let si = grid.idx(grid.start())?;
    let gi = grid.idx(grid.end())?;

    let mut nodes = node_array(grid);
    let mut open = OpenList::new();
    nodes[si].g = 0.0;
    nodes[si].open = true;
    open.push(si);

    let mut nb = Neighbors::new();

    while let Some(ci) = open.pop_min(|i| nodes[i].g) {
        nodes[ci].open = false;
        if ci == gi {
            return Some(reconstruct(grid, gi, |i| nodes[i].parent));
        }
        nodes[ci].closed = true;
        let cp = grid.point(ci);
        let current_g = nodes[ci].g;
        probe.visit(cp);

        for &np in nb.passable(grid, cp) {
            let Some(ni) = grid.idx(np) else {
                continue;
            };
            let n = &mut nodes[ni];
            if n.closed {
                continue;
            }
            let alt = current_g + weighted_cost(grid, cp, np);
            if alt >= n.g {
                continue;
            }
            n.g = alt;
            n.parent = ci;
            if !n.open {
                n.open = true;
                open.push(ni);
            }
            probe.explore(np);
        }

        probe.step(true, || {
            format!("Exploring from {cp}, distance: {current_g:.2}")
        });
    }
    None
}
