//! # algotrace
//!
//! Step-by-step traces of textbook algorithms, for visualizers and teaching
//! tools.
//!
//! Every algorithm is run twice: once silently to benchmark it, and once
//! with a recorder that snapshots the internal state after each meaningful
//! action. The result is a `Vec<Step>` that can be replayed frame by frame.
//!
//! ## Crates
//!
//! | Crate | Contents |
//! |---|---|
//! | `algotrace-core` | [`GridArena`], [`Point`], the step types, the benchmark harness |
//! | `algotrace-sort` | nine sorting algorithms |
//! | `algotrace-paths` | seven grid searches and reachability helpers |
//! | `algotrace-maze` | seven maze generators |
//!
//! ## Example
//!
//! ```
//! use algotrace::{AlgorithmKind, Input, TraceConfig, generate};
//!
//! let cfg = TraceConfig::unbenchmarked();
//! let steps = generate(AlgorithmKind::BubbleSort, Input::Values(&[5, 3, 8, 1]), &cfg).unwrap();
//! let last = steps.last().unwrap().as_sorting().unwrap();
//! assert_eq!(last.array, vec![1, 3, 5, 8]);
//! ```

use std::fmt;

pub use algotrace_maze as maze;
pub use algotrace_paths as paths;
pub use algotrace_sort as sort;

pub use algotrace_core::{
    Cell, CellKind, GridArena, GridError, ParseKindError, PathStats, PathfindingStep, Point,
    SortStats, SortingStep, Step, Timed, TraceConfig, benchmark, distribute_execution_time,
};
pub use algotrace_maze::{Maze, MazeConfig, MazeGen, MazeKind, MazeReport};

mod registry;

pub use registry::{AlgorithmDescriptor, AlgorithmKind, Category};

/// What an algorithm runs on.
#[derive(Clone, Copy, Debug)]
pub enum Input<'a> {
    Values(&'a [i32]),
    Grid(&'a GridArena),
}

impl Input<'_> {
    pub fn category(&self) -> Category {
        match self {
            Self::Values(_) => Category::Sorting,
            Self::Grid(_) => Category::Pathfinding,
        }
    }
}

/// Errors from [`generate`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GenerateError {
    /// The input is the wrong shape for the algorithm.
    InputMismatch {
        kind: AlgorithmKind,
        expected: Category,
    },
}

impl fmt::Display for GenerateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InputMismatch { kind, expected } => {
                let input = match expected {
                    Category::Sorting => "an array of values",
                    Category::Pathfinding => "a grid",
                };
                write!(f, "{kind} expects {input}")
            }
        }
    }
}

impl std::error::Error for GenerateError {}

/// Trace `kind` over `input`.
///
/// Fails only when the input category does not match the algorithm's.
pub fn generate(kind: AlgorithmKind, input: Input<'_>, cfg: &TraceConfig) -> Result<Vec<Step>, GenerateError> {
    let steps: Vec<Step> = match (kind, input) {
        (AlgorithmKind::BubbleSort, Input::Values(v)) => wrap(sort::bubble::generate(v, cfg)),
        (AlgorithmKind::InsertionSort, Input::Values(v)) => wrap(sort::insertion::generate(v, cfg)),
        (AlgorithmKind::SelectionSort, Input::Values(v)) => wrap(sort::selection::generate(v, cfg)),
        (AlgorithmKind::MergeSort, Input::Values(v)) => wrap(sort::merge::generate(v, cfg)),
        (AlgorithmKind::QuickSort, Input::Values(v)) => wrap(sort::quick::generate(v, cfg)),
        (AlgorithmKind::HeapSort, Input::Values(v)) => wrap(sort::heap::generate(v, cfg)),
        (AlgorithmKind::ShellSort, Input::Values(v)) => wrap(sort::shell::generate(v, cfg)),
        (AlgorithmKind::CountingSort, Input::Values(v)) => wrap(sort::counting::generate(v, cfg)),
        (AlgorithmKind::RadixSort, Input::Values(v)) => wrap(sort::radix::generate(v, cfg)),
        (AlgorithmKind::Bfs, Input::Grid(g)) => wrap(paths::bfs::generate(g, cfg)),
        (AlgorithmKind::Dfs, Input::Grid(g)) => wrap(paths::dfs::generate(g, cfg)),
        (AlgorithmKind::Dijkstra, Input::Grid(g)) => wrap(paths::dijkstra::generate(g, cfg)),
        (AlgorithmKind::AStar, Input::Grid(g)) => wrap(paths::astar::generate(g, cfg)),
        (AlgorithmKind::GreedyBestFirst, Input::Grid(g)) => wrap(paths::greedy::generate(g, cfg)),
        (AlgorithmKind::BidirectionalBfs, Input::Grid(g)) => wrap(paths::bidirectional::generate(g, cfg)),
        (AlgorithmKind::JumpPointSearch, Input::Grid(g)) => wrap(paths::jps::generate(g, cfg)),
        (kind, _) => {
            return Err(GenerateError::InputMismatch {
                kind,
                expected: kind.category(),
            });
        }
    };

    log::debug!(
        "{kind}: {} steps, avg {:.4}ms",
        steps.len(),
        steps.last().map_or(0.0, Timed::execution_time)
    );
    Ok(steps)
}

fn wrap<S: Into<Step>>(steps: Vec<S>) -> Vec<Step> {
    steps.into_iter().map(Into::into).collect()
}
