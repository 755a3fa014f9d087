//! Node arrays and the open list shared by the priority-ordered searches.

use algotrace_core::{GridArena, Point};

/// Parent sentinel for the search root.
pub(crate) const NO_PARENT: usize = usize::MAX;

// ---------------------------------------------------------------------------
// Internal node for priority-ordered searches
// ---------------------------------------------------------------------------

#[derive(Clone, Debug)]
pub(crate) struct Node {
    pub(crate) g: f64,
    pub(crate) f: f64,
    pub(crate) parent: usize,
    pub(crate) open: bool,
    pub(crate) closed: bool,
}

impl Default for Node {
    fn default() -> Self {
        Self {
            g: f64::INFINITY,
            f: f64::INFINITY,
            parent: NO_PARENT,
            open: false,
            closed: false,
        }
    }
}

/// One fresh node per grid cell, indexed by flat cell index.
pub(crate) fn node_array(grid: &GridArena) -> Vec<Node> {
    vec![Node::default(); grid.len()]
}

// ---------------------------------------------------------------------------
// OpenList
// ---------------------------------------------------------------------------

/// Frontier in insertion order.
///
/// `pop_min` scans linearly and returns the first entry with the smallest
/// key, so equal keys leave in the order they arrived.
#[derive(Debug, Default)]
pub(crate) struct OpenList {
    items: Vec<usize>,
}

impl OpenList {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn push(&mut self, idx: usize) {
        self.items.push(idx);
    }

    pub(crate) fn pop_min(&mut self, key: impl Fn(usize) -> f64) -> Option<usize> {
        let mut best: Option<(usize, f64)> = None;
        for (pos, &idx) in self.items.iter().enumerate() {
            let k = key(idx);
            match best {
                Some((_, bk)) if k >= bk => {}
                _ => best = Some((pos, k)),
            }
        }
        best.map(|(pos, _)| self.items.remove(pos))
    }
}

// ---------------------------------------------------------------------------
// Path reconstruction
// ---------------------------------------------------------------------------

/// Walk predecessors from `goal` back to the root and return the path in
/// start-to-goal order.
pub(crate) fn reconstruct(
    grid: &GridArena,
    goal: usize,
    parent_of: impl Fn(usize) -> usize,
) -> Vec<Point> {
    let mut path = Vec::new();
    let mut ci = goal;
    while ci != NO_PARENT {
        path.push(grid.point(ci));
        ci = parent_of(ci);
    }
    path.reverse();
    path
}
