//! The trace model: one [`Step`] per state-significant action of an algorithm.
//!
//! Steps own their data. A sorting step carries a copy of the array at the
//! moment it was emitted; a pathfinding step shares the grid snapshot taken
//! when the search started and owns its overlay lists.

use std::rc::Rc;

use crate::geom::Point;
use crate::grid::GridArena;

/// Anything whose execution time can be back-filled by
/// [`distribute_execution_time`](crate::bench::distribute_execution_time).
pub trait Timed {
    /// Current execution time, in milliseconds.
    fn execution_time(&self) -> f64;
    /// Overwrite the execution time, in milliseconds.
    fn set_execution_time(&mut self, ms: f64);
}

// ---------------------------------------------------------------------------
// Sorting
// ---------------------------------------------------------------------------

/// Running counters for a sorting trace.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct SortStats {
    pub comparisons: u64,
    pub swaps: u64,
    pub execution_time_ms: f64,
}

/// Snapshot of an array mid-sort.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct SortingStep {
    pub array: Vec<i32>,
    pub comparing: Option<Vec<usize>>,
    pub swapping: Option<Vec<usize>>,
    pub sorted: Option<Vec<usize>>,
    pub message: String,
    pub stats: SortStats,
}

impl SortingStep {
    /// A bare step with no highlights.
    pub fn new(array: Vec<i32>, message: impl Into<String>, stats: SortStats) -> Self {
        Self {
            array,
            comparing: None,
            swapping: None,
            sorted: None,
            message: message.into(),
            stats,
        }
    }
}

impl Timed for SortingStep {
    #[inline]
    fn execution_time(&self) -> f64 {
        self.stats.execution_time_ms
    }

    #[inline]
    fn set_execution_time(&mut self, ms: f64) {
        self.stats.execution_time_ms = ms;
    }
}

// ---------------------------------------------------------------------------
// Pathfinding
// ---------------------------------------------------------------------------

/// Running counters for a pathfinding trace.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct PathStats {
    pub nodes_visited: usize,
    /// Number of cells in the path, both endpoints included. 0 when none.
    pub path_length: usize,
    /// Weighted octile cost of the path. 0 when none.
    pub path_cost: f64,
    pub execution_time_ms: f64,
}

/// Overlay state of a search at one point of progress.
///
/// `visited` only grows from one step to the next. `path` is set on the
/// terminal step of a successful search and nowhere else.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct PathfindingStep {
    #[cfg_attr(feature = "serde", serde(skip))]
    pub grid: Rc<GridArena>,
    pub visited: Vec<Point>,
    pub exploring: Vec<Point>,
    pub path: Option<Vec<Point>>,
    pub message: String,
    pub stats: PathStats,
}

impl Timed for PathfindingStep {
    #[inline]
    fn execution_time(&self) -> f64 {
        self.stats.execution_time_ms
    }

    #[inline]
    fn set_execution_time(&mut self, ms: f64) {
        self.stats.execution_time_ms = ms;
    }
}

// ---------------------------------------------------------------------------
// Step
// ---------------------------------------------------------------------------

/// A step of either trace family.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum Step {
    Sorting(SortingStep),
    Pathfinding(PathfindingStep),
}

impl Step {
    /// The human-readable narration of the step.
    pub fn message(&self) -> &str {
        match self {
            Self::Sorting(s) => &s.message,
            Self::Pathfinding(s) => &s.message,
        }
    }

    pub fn as_sorting(&self) -> Option<&SortingStep> {
        match self {
            Self::Sorting(s) => Some(s),
            Self::Pathfinding(_) => None,
        }
    }

    pub fn as_pathfinding(&self) -> Option<&PathfindingStep> {
        match self {
            Self::Pathfinding(s) => Some(s),
            Self::Sorting(_) => None,
        }
    }
}

impl Timed for Step {
    fn execution_time(&self) -> f64 {
        match self {
            Self::Sorting(s) => s.execution_time(),
            Self::Pathfinding(s) => s.execution_time(),
        }
    }

    fn set_execution_time(&mut self, ms: f64) {
        match self {
            Self::Sorting(s) => s.set_execution_time(ms),
            Self::Pathfinding(s) => s.set_execution_time(ms),
        }
    }
}

impl From<SortingStep> for Step {
    fn from(s: SortingStep) -> Self {
        Self::Sorting(s)
    }
}

impl From<PathfindingStep> for Step {
    fn from(s: PathfindingStep) -> Self {
        Self::Pathfinding(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn step_accessors() {
        let s: Step = SortingStep::new(vec![3, 1], "Starting", SortStats::default()).into();
        assert_eq!(s.message(), "Starting");
        assert!(s.as_sorting().is_some());
        assert!(s.as_pathfinding().is_none());
    }

    #[test]
    fn timed_writes_through_enum() {
        let grid = Rc::new(GridArena::new(3, 4).unwrap());
        let mut s = Step::Pathfinding(PathfindingStep {
            grid,
            visited: Vec::new(),
            exploring: Vec::new(),
            path: None,
            message: String::new(),
            stats: PathStats::default(),
        });
        s.set_execution_time(2.5);
        assert_eq!(s.execution_time(), 2.5);
        assert_eq!(s.as_pathfinding().unwrap().stats.execution_time_ms, 2.5);
    }
}
