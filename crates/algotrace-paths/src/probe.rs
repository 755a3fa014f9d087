//! Search probes.
//!
//! Every search is written once against [`SearchProbe`]. [`Silent`] turns
//! every hook into a no-op for benchmarking; [`Recorder`] turns the hooks
//! into [`PathfindingStep`]s.

use std::rc::Rc;

use algotrace_core::{GridArena, PathStats, PathfindingStep, Point, distribute_execution_time};

use crate::distance::path_cost;

/// Observer of a running search.
pub trait SearchProbe {
    /// A cell was closed or scanned. Repeated reports of one cell count once.
    fn visit(&mut self, _p: Point) {}

    /// A neighbor was discovered or improved during the current expansion.
    fn explore(&mut self, _p: Point) {}

    /// The current expansion is over.
    ///
    /// With `always == false` the step is dropped when nothing was explored.
    /// The message is only built when a step is kept.
    fn step(&mut self, _always: bool, _message: impl FnOnce() -> String) {}
}

/// Probe that observes nothing.
#[derive(Clone, Copy, Debug, Default)]
pub struct Silent;

impl SearchProbe for Silent {}

/// Probe that builds a pathfinding trace.
#[derive(Debug)]
pub struct Recorder {
    grid: Rc<GridArena>,
    seen: Vec<bool>,
    visited: Vec<Point>,
    exploring: Vec<Point>,
    steps: Vec<PathfindingStep>,
}

impl Recorder {
    /// Snapshot `grid` and emit the opening step.
    pub fn new(grid: &GridArena, intro: impl Into<String>) -> Self {
        let grid = Rc::new(grid.clone());
        let first = PathfindingStep {
            grid: Rc::clone(&grid),
            visited: Vec::new(),
            exploring: Vec::new(),
            path: None,
            message: intro.into(),
            stats: PathStats::default(),
        };
        Self {
            seen: vec![false; grid.len()],
            grid,
            visited: Vec::new(),
            exploring: Vec::new(),
            steps: vec![first],
        }
    }

    /// Number of distinct cells visited so far.
    pub fn nodes_visited(&self) -> usize {
        self.visited.len()
    }

    /// Close the trace with the standard success or failure message.
    pub fn finish(self, path: Option<Vec<Point>>, avg_ms: f64) -> Vec<PathfindingStep> {
        self.finish_with(path, avg_ms, |len| format!("Path found! Length: {len}"))
    }

    /// Close the trace, building the success message from the path length.
    pub fn finish_with(
        mut self,
        path: Option<Vec<Point>>,
        avg_ms: f64,
        found: impl FnOnce(usize) -> String,
    ) -> Vec<PathfindingStep> {
        let nodes_visited = self.visited.len();
        let last = match path {
            Some(path) => PathfindingStep {
                grid: Rc::clone(&self.grid),
                visited: self.visited,
                exploring: Vec::new(),
                message: found(path.len()),
                stats: PathStats {
                    nodes_visited,
                    path_length: path.len(),
                    path_cost: path_cost(&self.grid, &path),
                    execution_time_ms: avg_ms,
                },
                path: Some(path),
            },
            None => PathfindingStep {
                grid: Rc::clone(&self.grid),
                visited: self.visited,
                exploring: Vec::new(),
                path: None,
                message: "No path found".to_string(),
                stats: PathStats {
                    nodes_visited,
                    execution_time_ms: avg_ms,
                    ..PathStats::default()
                },
            },
        };
        self.steps.push(last);
        distribute_execution_time(&mut self.steps, avg_ms);
        log::debug!(
            "search: {} steps, {nodes_visited} visited, avg {avg_ms:.4}ms",
            self.steps.len()
        );
        self.steps
    }
}

impl SearchProbe for Recorder {
    fn visit(&mut self, p: Point) {
        if let Some(i) = self.grid.idx(p) {
            if !self.seen[i] {
                self.seen[i] = true;
                self.visited.push(p);
            }
        }
    }

    fn explore(&mut self, p: Point) {
        self.exploring.push(p);
    }

    fn step(&mut self, always: bool, message: impl FnOnce() -> String) {
        if !always && self.exploring.is_empty() {
            return;
        }
        let step = PathfindingStep {
            grid: Rc::clone(&self.grid),
            visited: self.visited.clone(),
            exploring: std::mem::take(&mut self.exploring),
            path: None,
            message: message(),
            stats: PathStats {
                nodes_visited: self.visited.len(),
                ..PathStats::default()
            },
        };
        self.steps.push(step);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recorder_dedups_visits_and_drops_empty_steps() {
        let g = GridArena::new(4, 6).unwrap();
        let mut rec = Recorder::new(&g, "Starting");
        rec.visit(Point::new(0, 0));
        rec.visit(Point::new(0, 0));
        rec.step(false, || unreachable!());
        rec.explore(Point::new(0, 1));
        rec.step(false, || "Exploring".into());
        assert_eq!(rec.nodes_visited(), 1);

        let steps = rec.finish(None, 0.0);
        assert_eq!(steps.len(), 3);
        assert_eq!(steps[1].exploring, vec![Point::new(0, 1)]);
        assert_eq!(steps[2].message, "No path found");
        assert!(steps[2].exploring.is_empty());
        assert_eq!(steps[2].stats.nodes_visited, 1);
    }

    #[test]
    fn finish_reports_path_stats() {
        let g = GridArena::new(4, 6).unwrap();
        let rec = Recorder::new(&g, "Starting");
        let path = vec![Point::new(2, 1), Point::new(2, 2), Point::new(2, 3)];
        let steps = rec.finish(Some(path), 1.5);
        let last = steps.last().unwrap();
        assert_eq!(last.message, "Path found! Length: 3");
        assert_eq!(last.stats.path_length, 3);
        assert_eq!(last.stats.path_cost, 2.0);
        assert_eq!(last.stats.execution_time_ms, 1.5);
        assert!(Rc::ptr_eq(&steps[0].grid, &last.grid));
    }
}
