//! Jump Point Search (JPS) on uniform-cost grids.
//!
//! JPS is an optimised A* variant for grids where every passable step has
//! the same cost. It "jumps" along straight lines, only adding nodes to the
//! open list at *jump points*: positions with forced neighbours.
//!
//! Weighted cells break the uniform-cost assumption and are treated as
//! blocked, like walls and the area outside the grid.

use algotrace_core::{CellKind, GridArena, PathfindingStep, Point, TraceConfig, benchmark};

use crate::distance::octile;
use crate::nodes::{NO_PARENT, OpenList, node_array, reconstruct};
use crate::probe::{Recorder, SearchProbe, Silent};

/// Trace a Jump Point Search from the grid's start to its end.
pub fn generate(grid: &GridArena, cfg: &TraceConfig) -> Vec<PathfindingStep> {
    let avg = benchmark(|| search(grid, &mut Silent), cfg.bench_budget);
    let mut rec = Recorder::new(grid, "Starting Jump Point Search");
    match search(grid, &mut rec) {
        Some((path, jump_points)) => rec.finish_with(Some(path), avg, |len| {
            format!("Path found! Length: {len}, jump points: {jump_points}")
        }),
        None => rec.finish(None, avg),
    }
}

/// Shortest path through unweighted cells, interpolated cell by cell.
pub fn find_path(grid: &GridArena) -> Option<Vec<Point>> {
    search(grid, &mut Silent).map(|(path, _)| path)
}

/// Returns the interpolated path and the number of jump points on it.
fn search<P: SearchProbe>(grid: &GridArena, probe: &mut P) -> Option<(Vec<Point>, usize)> {
    let goal = grid.end();
    let si = grid.idx(grid.start())?;
    let gi = grid.idx(goal)?;

    let mut nodes = node_array(grid);
    let mut open = OpenList::new();
    {
        let n = &mut nodes[si];
        n.g = 0.0;
        n.f = octile(grid.start(), goal);
        n.open = true;
    }
    open.push(si);

    let mut successors = Vec::with_capacity(8);

    while let Some(ci) = open.pop_min(|i| nodes[i].f) {
        nodes[ci].open = false;
        if ci == gi {
            let jp_path = reconstruct(grid, gi, |i| nodes[i].parent);
            let count = jp_path.len();
            return Some((interpolate_path(&jp_path), count));
        }
        nodes[ci].closed = true;
        let cp = grid.point(ci);
        let cur_g = nodes[ci].g;
        probe.visit(cp);

        // The start has no incoming direction and tries all eight.
        let dirs = match nodes[ci].parent {
            NO_PARENT => Point::ZERO.neighbors_8().to_vec(),
            pi => prune_dirs(grid, cp, grid.point(pi)),
        };

        successors.clear();
        for dir in dirs {
            if let Some(jp) = jump(grid, cp, dir, goal, probe) {
                successors.push(jp);
            }
        }

        for &jp in &successors {
            let Some(ji) = grid.idx(jp) else {
                continue;
            };
            let jn = &mut nodes[ji];
            if jn.closed {
                continue;
            }
            let tentative_g = cur_g + octile(cp, jp);
            if tentative_g >= jn.g {
                continue;
            }
            jn.g = tentative_g;
            jn.f = tentative_g + octile(jp, goal);
            jn.parent = ci;
            if !jn.open {
                jn.open = true;
                open.push(ji);
            }
            probe.explore(jp);
        }

        probe.step(true, || jump_message(cp, &successors));
    }
    None
}

#[inline]
fn blocked(grid: &GridArena, p: Point) -> bool {
    !matches!(
        grid.kind(p),
        Some(CellKind::Empty | CellKind::Start | CellKind::End)
    )
}

/// Pruned direction set for a node reached from `parent`.
fn prune_dirs(grid: &GridArena, p: Point, parent: Point) -> Vec<Point> {
    let mut dirs = Vec::with_capacity(5);
    let d = parent.step_towards(p);
    let free = |dr: i32, dc: i32| !blocked(grid, p.shift(dr, dc));

    if d.row != 0 && d.col != 0 {
        // Diagonal move: natural neighbours
        if free(d.row, 0) {
            dirs.push(Point::new(d.row, 0));
        }
        if free(0, d.col) {
            dirs.push(Point::new(0, d.col));
        }
        if free(d.row, d.col) {
            dirs.push(d);
        }
        // Forced neighbours
        if !free(-d.row, 0) && free(-d.row, d.col) {
            dirs.push(Point::new(-d.row, d.col));
        }
        if !free(0, -d.col) && free(d.row, -d.col) {
            dirs.push(Point::new(d.row, -d.col));
        }
    } else if d.row == 0 {
        // Horizontal
        if free(0, d.col) {
            dirs.push(Point::new(0, d.col));
        }
        if !free(-1, 0) && free(-1, d.col) {
            dirs.push(Point::new(-1, d.col));
        }
        if !free(1, 0) && free(1, d.col) {
            dirs.push(Point::new(1, d.col));
        }
    } else {
        // Vertical
        if free(d.row, 0) {
            dirs.push(Point::new(d.row, 0));
        }
        if !free(0, -1) && free(d.row, -1) {
            dirs.push(Point::new(d.row, -1));
        }
        if !free(0, 1) && free(d.row, 1) {
            dirs.push(Point::new(d.row, 1));
        }
    }
    dirs
}

/// Scan from `p` along `dir` until a jump point is found or the line is
/// blocked. Every scanned cell is reported to the probe.
fn jump<P: SearchProbe>(
    grid: &GridArena,
    p: Point,
    dir: Point,
    goal: Point,
    probe: &mut P,
) -> Option<Point> {
    let blocked_at = |n: Point, dr: i32, dc: i32| blocked(grid, n.shift(dr, dc));
    let mut n = p;

    loop {
        n = n + dir;
        if blocked(grid, n) {
            return None;
        }
        probe.visit(n);
        if n == goal {
            return Some(n);
        }

        if dir.row != 0 && dir.col != 0 {
            // Diagonal: forced if blocked beside
            if (blocked_at(n, -dir.row, 0) && !blocked_at(n, -dir.row, dir.col))
                || (blocked_at(n, 0, -dir.col) && !blocked_at(n, dir.row, -dir.col))
            {
                return Some(n);
            }
            // Recurse along component axes.
            if jump(grid, n, Point::new(dir.row, 0), goal, probe).is_some()
                || jump(grid, n, Point::new(0, dir.col), goal, probe).is_some()
            {
                return Some(n);
            }
        } else if dir.row == 0 {
            // Horizontal
            if (blocked_at(n, -1, 0) && !blocked_at(n, -1, dir.col))
                || (blocked_at(n, 1, 0) && !blocked_at(n, 1, dir.col))
            {
                return Some(n);
            }
        } else {
            // Vertical
            if (blocked_at(n, 0, -1) && !blocked_at(n, dir.row, -1))
                || (blocked_at(n, 0, 1) && !blocked_at(n, dir.row, 1))
            {
                return Some(n);
            }
        }
    }
}

/// Expand a jump-point path into a step-by-step path.
///
/// Consecutive jump points always share a row, a column or a diagonal.
fn interpolate_path(jp_path: &[Point]) -> Vec<Point> {
    let Some((&first, rest)) = jp_path.split_first() else {
        return Vec::new();
    };
    let mut result = vec![first];
    let mut c = first;
    for &b in rest {
        let d = c.step_towards(b);
        while c != b {
            c = c + d;
            result.push(c);
        }
    }
    result
}

fn dir_name(d: Point) -> &'static str {
    match (d.row, d.col) {
        (-1, 0) => "north",
        (-1, 1) => "northeast",
        (0, 1) => "east",
        (1, 1) => "southeast",
        (1, 0) => "south",
        (1, -1) => "southwest",
        (0, -1) => "west",
        _ => "northwest",
    }
}

fn jump_message(from: Point, successors: &[Point]) -> String {
    if successors.is_empty() {
        return format!("Exploring {from}, no jump points found");
    }
    let jumps: Vec<String> = successors
        .iter()
        .map(|&jp| {
            let d = from.step_towards(jp);
            let dist = (jp.row - from.row).abs().max((jp.col - from.col).abs());
            format!("{} {dist} cells to {jp}", dir_name(d))
        })
        .collect();
    format!("Jumping from {from}: {}", jumps.join(", "))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::astar;
    use crate::testutil::assert_valid_path;

    #[test]
    fn open_grid_single_jump() {
        let g = GridArena::new(10, 20).unwrap();
        let steps = generate(&g, &TraceConfig::unbenchmarked());
        let last = steps.last().unwrap();
        assert_eq!(last.message, "Path found! Length: 11, jump points: 2");
        assert_eq!(last.stats.path_length, 11);
        assert!(
            steps[1]
                .message
                .starts_with("Jumping from (5, 5): east 10 cells to (5, 15)")
        );
    }

    #[test]
    fn interpolates_diagonal_then_straight() {
        let jp = [Point::new(0, 0), Point::new(2, 2), Point::new(2, 5)];
        let path = interpolate_path(&jp);
        assert_eq!(path.len(), 6);
        assert_eq!(path[1], Point::new(1, 1));
        assert_eq!(path[5], Point::new(2, 5));
        assert!(interpolate_path(&[]).is_empty());
    }

    #[test]
    fn matches_astar_around_obstacles() {
        let layouts = [
            "\
..........
..#####...
S.#...#..E
..#.#.#...
....#.....",
            "\
S.........
########..
..........
..########
.........E",
            "\
.....#....
.S...#....
.....#....
..........
.....#..E.",
        ];
        for text in layouts {
            let g = GridArena::parse(text).unwrap();
            let j = find_path(&g).unwrap();
            let a = astar::find_path(&g).unwrap();
            assert_valid_path(&g, &j);
            assert_eq!(j.len(), a.len(), "{text}");
        }
    }

    #[test]
    fn weighted_cells_block_jumps() {
        let g = GridArena::parse(
            "\
..2..
S.2.E
..2..",
        )
        .unwrap();
        assert_eq!(find_path(&g), None);
        assert!(astar::find_path(&g).is_some());
    }

    #[test]
    fn visited_includes_scanned_cells() {
        let g = GridArena::new(5, 12).unwrap();
        let last = generate(&g, &TraceConfig::unbenchmarked()).pop().unwrap();
        assert!(last.visited.contains(&Point::new(2, 5)));
        let mut dedup = last.visited.clone();
        dedup.sort_by_key(|p| (p.row, p.col));
        dedup.dedup();
        assert_eq!(dedup.len(), last.visited.len());
    }
}
