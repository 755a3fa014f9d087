//! Bidirectional breadth-first search.
//!
//! Two FIFO frontiers grow from start and end, one full layer at a time,
//! forward first. On the first layer where a newly discovered cell is
//! already known to the other side, the layer is finished and the meeting
//! cell with the smallest combined depth wins. That keeps the move count
//! equal to a one-sided BFS.

use std::collections::VecDeque;

use algotrace_core::{GridArena, PathfindingStep, Point, TraceConfig, benchmark};

use crate::neighbors::Neighbors;
use crate::nodes::NO_PARENT;
use crate::probe::{Recorder, SearchProbe, Silent};

const UNSEEN: usize = usize::MAX;

/// Trace a bidirectional BFS between the grid's start and end.
pub fn generate(grid: &GridArena, cfg: &TraceConfig) -> Vec<PathfindingStep> {
    let avg = benchmark(|| search(grid, &mut Silent), cfg.bench_budget);
    let mut rec = Recorder::new(grid, "Starting Bidirectional BFS");
    match search(grid, &mut rec) {
        Some((path, meet)) => rec.finish_with(Some(path), avg, |len| {
            format!("Path found! Frontiers met at {meet}. Length: {len}")
        }),
        None => rec.finish(None, avg),
    }
}

/// Fewest-move path from start to end, or `None`.
pub fn find_path(grid: &GridArena) -> Option<Vec<Point>> {
    search(grid, &mut Silent).map(|(path, _)| path)
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Direction {
    Forward,
    Backward,
}

/// One side of the search.
struct Frontier {
    dir: Direction,
    depth: Vec<usize>,
    parents: Vec<usize>,
    queue: VecDeque<usize>,
}

impl Frontier {
    fn new(grid: &GridArena, dir: Direction, root: usize) -> Self {
        let mut depth = vec![UNSEEN; grid.len()];
        depth[root] = 0;
        Self {
            dir,
            depth,
            parents: vec![NO_PARENT; grid.len()],
            queue: VecDeque::from([root]),
        }
    }

    /// Expand every cell of the current layer. Returns the best meeting
    /// cell found in this layer, as `(combined depth, index)`.
    fn expand_layer<P: SearchProbe>(
        &mut self,
        other: &Frontier,
        grid: &GridArena,
        nb: &mut Neighbors,
        probe: &mut P,
    ) -> Option<(usize, usize)> {
        let mut best: Option<(usize, usize)> = None;
        for _ in 0..self.queue.len() {
            let Some(ci) = self.queue.pop_front() else {
                break;
            };
            let cp = grid.point(ci);
            let next_depth = self.depth[ci] + 1;
            probe.visit(cp);

            for &np in nb.passable(grid, cp) {
                let Some(ni) = grid.idx(np) else {
                    continue;
                };
                if self.depth[ni] != UNSEEN {
                    continue;
                }
                self.depth[ni] = next_depth;
                self.parents[ni] = ci;
                if other.depth[ni] != UNSEEN {
                    let total = next_depth + other.depth[ni];
                    if best.is_none_or(|(b, _)| total < b) {
                        best = Some((total, ni));
                    }
                    probe.visit(np);
                    continue;
                }
                self.queue.push_back(ni);
                probe.explore(np);
            }

            let label = match self.dir {
                Direction::Forward => "Forward",
                Direction::Backward => "Backward",
            };
            probe.step(true, || format!("{label} BFS: exploring from {cp}"));
        }
        best
    }
}

fn search<P: SearchProbe>(grid: &GridArena, probe: &mut P) -> Option<(Vec<Point>, Point)> {
    let si = grid.idx(grid.start())?;
    let gi = grid.idx(grid.end())?;

    let mut fwd = Frontier::new(grid, Direction::Forward, si);
    let mut bwd = Frontier::new(grid, Direction::Backward, gi);
    let mut nb = Neighbors::new();

    let meet = loop {
        if fwd.queue.is_empty() || bwd.queue.is_empty() {
            return None;
        }
        if let Some((_, m)) = fwd.expand_layer(&bwd, grid, &mut nb, probe) {
            break m;
        }
        if let Some((_, m)) = bwd.expand_layer(&fwd, grid, &mut nb, probe) {
            break m;
        }
    };

    // Forward half: start .. meet, then backward half: after meet .. end.
    let mut path = Vec::new();
    let mut ci = meet;
    while ci != NO_PARENT {
        path.push(grid.point(ci));
        ci = fwd.parents[ci];
    }
    path.reverse();
    let mut ci = bwd.parents[meet];
    while ci != NO_PARENT {
        path.push(grid.point(ci));
        ci = bwd.parents[ci];
    }
    Some((path, grid.point(meet)))
}
