//! Plain-text rendering of traces.

use std::fmt::Write as _;

use algotrace::{GridArena, PathfindingStep, Point, SortingStep};

/// Draw the grid of `step` with its overlay: `*` path, `+` frontier,
/// `o` visited.
pub fn grid_step(step: &PathfindingStep) -> String {
    let grid: &GridArena = &step.grid;
    let mut overlay = vec![None; grid.len()];
    let mut mark = |points: &[Point], ch: char| {
        for &p in points {
            if let Some(i) = grid.idx(p) {
                overlay[i] = Some(ch);
            }
        }
    };
    mark(&step.visited, 'o');
    mark(&step.exploring, '+');
    if let Some(path) = &step.path {
        mark(path, '*');
    }

    let mut out = String::with_capacity(grid.len() + grid.rows() as usize);
    for (i, (p, cell)) in grid.iter().enumerate() {
        let ch = match (cell.kind, overlay[i]) {
            (k, _) if k.is_endpoint() => k.glyph(),
            (_, Some(ch)) => ch,
            (k, None) => k.glyph(),
        };
        out.push(ch);
        if p.col == grid.cols() - 1 {
            out.push('\n');
        }
    }
    out
}

/// One line per sorting step: the array with compared values in `[]`,
/// swapped values in `<>`, then the message.
pub fn sort_step(step: &SortingStep) -> String {
    let has = |set: &Option<Vec<usize>>, i: usize| set.as_ref().is_some_and(|s| s.contains(&i));
    let mut out = String::new();
    for (i, v) in step.array.iter().enumerate() {
        if i > 0 {
            out.push(' ');
        }
        if has(&step.swapping, i) {
            let _ = write!(out, "<{v}>");
        } else if has(&step.comparing, i) {
            let _ = write!(out, "[{v}]");
        } else {
            let _ = write!(out, "{v}");
        }
    }
    let _ = write!(
        out,
        "  | {} (cmp {}, swp {})",
        step.message, step.stats.comparisons, step.stats.swaps
    );
    out
}

#[cfg(test)]
mod tests {
    use algotrace::{AlgorithmKind, Input, TraceConfig, generate};

    use super::*;

    #[test]
    fn renders_the_final_path() {
        let grid = GridArena::parse("S..#\n...E").unwrap();
        let steps = generate(AlgorithmKind::Bfs, Input::Grid(&grid), &TraceConfig::unbenchmarked()).unwrap();
        let last = steps.last().unwrap().as_pathfinding().unwrap();
        let text = grid_step(last);
        assert_eq!(text.lines().count(), 2);
        assert!(text.starts_with('S'));
        assert!(text.contains('*'));
        assert!(text.contains('#'));
    }

    #[test]
    fn marks_compared_and_swapped() {
        let mut step = SortingStep::new(vec![4, 2, 7], "Comparing 4 and 2", Default::default());
        step.comparing = Some(vec![0, 1]);
        assert!(sort_step(&step).starts_with("[4] [2] 7  | Comparing 4 and 2"));
        step.comparing = None;
        step.swapping = Some(vec![2]);
        assert!(sort_step(&step).starts_with("4 2 <7>"));
    }
}
