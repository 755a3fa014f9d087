//! Static descriptions of every traced algorithm.

use std::fmt;
use std::str::FromStr;

use algotrace_core::ParseKindError;

/// Which kind of input an algorithm consumes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Category {
    Sorting,
    Pathfinding,
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Sorting => "sorting",
            Self::Pathfinding => "pathfinding",
        })
    }
}

/// Immutable metadata for one algorithm.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct AlgorithmDescriptor {
    pub key: &'static str,
    pub name: &'static str,
    pub category: Category,
    pub time_complexity: &'static str,
    pub space_complexity: &'static str,
    pub description: &'static str,
}

/// Every algorithm the engine can trace.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AlgorithmKind {
    BubbleSort,
    InsertionSort,
    SelectionSort,
    MergeSort,
    QuickSort,
    HeapSort,
    ShellSort,
    CountingSort,
    RadixSort,
    Bfs,
    Dfs,
    Dijkstra,
    AStar,
    GreedyBestFirst,
    BidirectionalBfs,
    JumpPointSearch,
}

const fn sorting(
    key: &'static str,
    name: &'static str,
    time_complexity: &'static str,
    space_complexity: &'static str,
    description: &'static str,
) -> AlgorithmDescriptor {
    AlgorithmDescriptor {
        key,
        name,
        category: Category::Sorting,
        time_complexity,
        space_complexity,
        description,
    }
}

const fn pathfinding(
    key: &'static str,
    name: &'static str,
    time_complexity: &'static str,
    space_complexity: &'static str,
    description: &'static str,
) -> AlgorithmDescriptor {
    AlgorithmDescriptor {
        key,
        name,
        category: Category::Pathfinding,
        time_complexity,
        space_complexity,
        description,
    }
}

static BUBBLE: AlgorithmDescriptor = sorting(
    "bubble-sort",
    "Bubble Sort",
    "O(n²)",
    "O(1)",
    "Repeatedly steps through the list, compares adjacent elements and swaps them if they are in the wrong order.",
);
static INSERTION: AlgorithmDescriptor = sorting(
    "insertion-sort",
    "Insertion Sort",
    "O(n²)",
    "O(1)",
    "Builds the sorted array one element at a time by inserting each element into its correct position.",
);
static SELECTION: AlgorithmDescriptor = sorting(
    "selection-sort",
    "Selection Sort",
    "O(n²)",
    "O(1)",
    "Finds the minimum element from the unsorted portion and swaps it with the first unsorted element.",
);
static MERGE: AlgorithmDescriptor = sorting(
    "merge-sort",
    "Merge Sort",
    "O(n log n)",
    "O(n)",
    "Divides the array into halves, sorts them, and merges the sorted halves back together.",
);
static QUICK: AlgorithmDescriptor = sorting(
    "quick-sort",
    "Quick Sort",
    "O(n log n)",
    "O(log n)",
    "Picks a pivot element and partitions the array around it, then sorts the sub-arrays.",
);
static HEAP: AlgorithmDescriptor = sorting(
    "heap-sort",
    "Heap Sort",
    "O(n log n)",
    "O(1)",
    "Builds a max heap from the array, then repeatedly extracts the maximum element and places it at the end.",
);
static SHELL: AlgorithmDescriptor = sorting(
    "shell-sort",
    "Shell Sort",
    "O(n log² n)",
    "O(1)",
    "Insertion sort over elements separated by a gap, shrinking the gap until a final plain insertion pass.",
);
static COUNTING: AlgorithmDescriptor = sorting(
    "counting-sort",
    "Counting Sort",
    "O(n + k)",
    "O(k)",
    "Counts the occurrences of each value, then uses those counts to place elements directly into their positions.",
);
static RADIX: AlgorithmDescriptor = sorting(
    "radix-sort",
    "Radix Sort",
    "O(d × n)",
    "O(n + k)",
    "Processes digits from least to most significant, with a stable counting pass per digit.",
);
static BFS: AlgorithmDescriptor = pathfinding(
    "bfs",
    "Breadth-First Search",
    "O(V + E)",
    "O(V)",
    "Explores nodes level by level, guarantees the fewest moves.",
);
static DFS: AlgorithmDescriptor = pathfinding(
    "dfs",
    "Depth-First Search",
    "O(V + E)",
    "O(V)",
    "Explores deeply before backtracking, does not guarantee the shortest path.",
);
static DIJKSTRA: AlgorithmDescriptor = pathfinding(
    "dijkstra",
    "Dijkstra's Algorithm",
    "O(V²) with a linear-scan frontier",
    "O(V)",
    "Finds the cheapest path by exploring nodes in order of distance from the start.",
);
static ASTAR: AlgorithmDescriptor = pathfinding(
    "a-star",
    "A* (A-star)",
    "O(b^d) where b is branching factor",
    "O(b^d)",
    "Optimal pathfinding using the octile heuristic to guide search.",
);
static GREEDY: AlgorithmDescriptor = pathfinding(
    "greedy-best-first",
    "Greedy Best-First Search",
    "O(V + E)",
    "O(V)",
    "Uses only the heuristic to guide search, fast but not optimal.",
);
static BIDIRECTIONAL: AlgorithmDescriptor = pathfinding(
    "bidirectional-bfs",
    "Bidirectional BFS",
    "O(V + E)",
    "O(V)",
    "Explores from both start and end at once, meeting in the middle.",
);
static JPS: AlgorithmDescriptor = pathfinding(
    "jump-point-search",
    "Jump Point Search",
    "O(V log V)",
    "O(V)",
    "A* that skips symmetric paths on uniform-cost grids.",
);

impl AlgorithmKind {
    pub const ALL: [AlgorithmKind; 16] = [
        Self::BubbleSort,
        Self::InsertionSort,
        Self::SelectionSort,
        Self::MergeSort,
        Self::QuickSort,
        Self::HeapSort,
        Self::ShellSort,
        Self::CountingSort,
        Self::RadixSort,
        Self::Bfs,
        Self::Dfs,
        Self::Dijkstra,
        Self::AStar,
        Self::GreedyBestFirst,
        Self::BidirectionalBfs,
        Self::JumpPointSearch,
    ];

    pub fn descriptor(self) -> &'static AlgorithmDescriptor {
        match self {
            Self::BubbleSort => &BUBBLE,
            Self::InsertionSort => &INSERTION,
            Self::SelectionSort => &SELECTION,
            Self::MergeSort => &MERGE,
            Self::QuickSort => &QUICK,
            Self::HeapSort => &HEAP,
            Self::ShellSort => &SHELL,
            Self::CountingSort => &COUNTING,
            Self::RadixSort => &RADIX,
            Self::Bfs => &BFS,
            Self::Dfs => &DFS,
            Self::Dijkstra => &DIJKSTRA,
            Self::AStar => &ASTAR,
            Self::GreedyBestFirst => &GREEDY,
            Self::BidirectionalBfs => &BIDIRECTIONAL,
            Self::JumpPointSearch => &JPS,
        }
    }

    #[inline]
    pub fn key(self) -> &'static str {
        self.descriptor().key
    }

    #[inline]
    pub fn category(self) -> Category {
        self.descriptor().category
    }

    /// All kinds in `category`, in registry order.
    pub fn by_category(category: Category) -> impl Iterator<Item = AlgorithmKind> {
        Self::ALL
            .into_iter()
            .filter(move |k| k.category() == category)
    }
}

impl fmt::Display for AlgorithmKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.descriptor().name)
    }
}

impl FromStr for AlgorithmKind {
    type Err = ParseKindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|k| k.key() == s)
            .ok_or_else(|| ParseKindError::new("algorithm", s))
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn keys_are_unique_and_parse_back() {
        let keys: HashSet<_> = AlgorithmKind::ALL.iter().map(|k| k.key()).collect();
        assert_eq!(keys.len(), AlgorithmKind::ALL.len());
        for kind in AlgorithmKind::ALL {
            assert_eq!(kind.key().parse(), Ok(kind));
        }
        assert!("bogo-sort".parse::<AlgorithmKind>().is_err());
    }

    #[test]
    fn categories() {
        assert_eq!(AlgorithmKind::by_category(Category::Sorting).count(), 9);
        assert_eq!(AlgorithmKind::by_category(Category::Pathfinding).count(), 7);
        assert_eq!(AlgorithmKind::AStar.to_string(), "A* (A-star)");
        assert_eq!(AlgorithmKind::RadixSort.descriptor().time_complexity, "O(d × n)");
    }
}
