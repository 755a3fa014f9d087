//! Traced pathfinding on 8-connected grids.
//!
//! This crate provides seven search algorithms over a
//! [`GridArena`](algotrace_core::GridArena), each of which produces a full
//! step-by-step trace:
//!
//! - **BFS** fewest-move search ([`bfs::generate`])
//! - **DFS** depth-first search ([`dfs::generate`])
//! - **Dijkstra** weighted shortest path ([`dijkstra::generate`])
//! - **A\*** weighted shortest path with the octile heuristic ([`astar::generate`])
//! - **Greedy best-first** heuristic-only search ([`greedy::generate`])
//! - **Bidirectional BFS** two-frontier fewest-move search ([`bidirectional::generate`])
//! - **Jump Point Search** uniform-cost shortest path ([`jps::generate`])
//!
//! Every module also has a silent `find_path`, and [`cc`] answers
//! reachability questions.
//!
//! # Probes
//!
//! | Probe | Used for |
//! |---|---|
//! | [`Silent`] | benchmark runs and `find_path` |
//! | [`Recorder`] | building the trace |

pub mod astar;
pub mod bfs;
pub mod bidirectional;
pub mod cc;
pub mod dfs;
pub mod dijkstra;
mod distance;
pub mod greedy;
pub mod jps;
mod neighbors;
mod nodes;
mod probe;

pub use distance::{chebyshev, cost, manhattan, octile, path_cost, weighted_cost};
pub use neighbors::Neighbors;
pub use probe::{Recorder, SearchProbe, Silent};

#[cfg(test)]
pub(crate) mod testutil {
    use algotrace_core::{GridArena, Point};

    /// Panics unless `path` runs from start to end through adjacent,
    /// passable cells.
    pub(crate) fn assert_valid_path(grid: &GridArena, path: &[Point]) {
        assert_eq!(path.first(), Some(&grid.start()), "path must begin at start");
        assert_eq!(path.last(), Some(&grid.end()), "path must end at end");
        for w in path.windows(2) {
            let d = w[1] - w[0];
            assert!(
                d.row.abs() <= 1 && d.col.abs() <= 1 && d != Point::ZERO,
                "{} -> {} is not a single move",
                w[0],
                w[1]
            );
        }
        assert!(path.iter().all(|&p| grid.is_passable(p)));
    }
}
