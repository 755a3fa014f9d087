use algotrace_core::{GridArena, PathfindingStep, Point, TraceConfig, benchmark};

use crate::distance::{octile, weighted_cost};
use crate::neighbors::Neighbors;
use crate::nodes::{OpenList, node_array, reconstruct};
use crate::probe::{Recorder, SearchProbe, Silent};

/// Trace an A* search from the grid's start to its end.
///
/// The frontier is ranked by `f = g + h` with `h` the octile distance to
/// the end, which never overestimates since every weight is at least 1.
pub fn generate(grid: &GridArena, cfg: &TraceConfig) -> Vec<PathfindingStep> {
    let avg = benchmark(|| search(grid, &mut Silent), cfg.bench_budget);
    let mut rec = Recorder::new(grid, "Starting A* Algorithm");
    let path = search(grid, &mut rec);
    rec.finish(path, avg)
}

/// Cheapest weighted path from start to end, or `None`.
pub fn find_path(grid: &GridArena) -> Option<Vec<Point>> {
    search(grid, &mut Silent)
}

fn search<P: SearchProbe>(grid: &GridArena, probe: &mut P) -> Option<Vec<Point>> {
    let goal = grid.end();
    let si = grid.idx(grid.start())?;
    let gi = grid.idx(goal)?;

    let mut nodes = node_array(grid);
    let mut open = OpenList::new();
    {
        let node = &mut nodes[si];
        node.g = 0.0;
        node.f = octile(grid.start(), goal);
        node.open = true;
    }
    open.push(si);

    let mut nb = Neighbors::new();

    while let Some(ci) = open.pop_min(|i| nodes[i].f) {
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
            let tentative_g = current_g + weighted_cost(grid, cp, np);
            if tentative_g >= n.g {
                continue;
            }
            n.g = tentative_g;
            n.f = tentative_g + octile(np, goal);
            n.parent = ci;
            if !n.open {
                n.open = true;
                open.push(ni);
            }
            probe.explore(np);
        }

        probe.step(true, || {
            let h = octile(cp, goal);
            format!(
                "Exploring {cp}, g={current_g:.2}, h={h:.2}, f={:.2}",
                current_g + h
            )
        });
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dijkstra;
    use crate::distance::path_cost;
    use crate::testutil::assert_valid_path;

    #[test]
    fn message_reports_scores() {
        let g = GridArena::new(5, 8).unwrap();
        let steps = generate(&g, &TraceConfig::unbenchmarked());
        assert_eq!(steps[0].message, "Starting A* Algorithm");
        assert_eq!(steps[1].message, "Exploring (2, 2), g=0.00, h=4.00, f=4.00");
    }

    #[test]
    fn heuristic_never_overestimates() {
        let g = GridArena::parse(
            "\
..........
..#####...
S.#...#..E
..#.#.#...
....#.....",
        )
        .unwrap();
        let path = find_path(&g).unwrap();
        assert_valid_path(&g, &path);
        let cost = path_cost(&g, &path);
        assert!(octile(g.start(), g.end()) <= cost);
        for (i, &p) in path.iter().enumerate() {
            let rest = path_cost(&g, &path[i..]);
            assert!(octile(p, g.end()) <= rest + 1e-9);
        }
    }

    #[test]
    fn matches_dijkstra_on_weighted_grid() {
        let g = GridArena::parse(
            "\
.....3....
.S...3..E.
.....3....
..........",
        )
        .unwrap();
        let a = find_path(&g).unwrap();
        let d = dijkstra::find_path(&g).unwrap();
        assert!((path_cost(&g, &a) - path_cost(&g, &d)).abs() < 1e-9);
    }

    #[test]
    fn explores_no_more_than_dijkstra() {
        let g = GridArena::new(15, 30).unwrap();
        let cfg = TraceConfig::unbenchmarked();
        let a = generate(&g, &cfg).pop().unwrap();
        let d = dijkstra::generate(&g, &cfg).pop().unwrap();
        assert!(a.stats.nodes_visited <= d.stats.nodes_visited);
        assert_eq!(a.stats.path_length, d.stats.path_length);
    }
}
