//! Sort probes and the shared trace driver.

use algotrace_core::{SortStats, SortingStep, TraceConfig, benchmark, distribute_execution_time};

/// Which indices a step marks as settled.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Sorted<'a> {
    #[default]
    None,
    /// The first `n` indices.
    Prefix(usize),
    /// The last `n` indices.
    Suffix(usize),
    All,
    Indices(&'a [usize]),
}

impl Sorted<'_> {
    fn indices(self, len: usize) -> Option<Vec<usize>> {
        match self {
            Self::None => None,
            Self::Prefix(n) => Some((0..n.min(len)).collect()),
            Self::Suffix(n) => Some((len.saturating_sub(n)..len).collect()),
            Self::All => Some((0..len).collect()),
            Self::Indices(ix) => Some(ix.to_vec()),
        }
    }
}

/// Highlights attached to a step.
#[derive(Clone, Copy, Debug, Default)]
pub struct Marks<'a> {
    pub comparing: &'a [usize],
    pub swapping: &'a [usize],
    pub sorted: Sorted<'a>,
}

impl<'a> Marks<'a> {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn comparing(ix: &'a [usize]) -> Self {
        Self {
            comparing: ix,
            ..Self::default()
        }
    }

    pub fn swapping(ix: &'a [usize]) -> Self {
        Self {
            swapping: ix,
            ..Self::default()
        }
    }

    pub fn sorted(sorted: Sorted<'a>) -> Self {
        Self {
            sorted,
            ..Self::default()
        }
    }

    /// Add a sorted set (builder).
    pub fn with_sorted(mut self, sorted: Sorted<'a>) -> Self {
        self.sorted = sorted;
        self
    }
}

/// Observer of a running sort.
pub trait SortProbe {
    /// One comparison (or read, for the distribution sorts) happened.
    fn compared(&mut self) {}

    /// One element was relocated (or written).
    fn swapped(&mut self) {}

    /// Snapshot `array` with the given highlights. The message is only
    /// built when recording.
    fn step(&mut self, _array: &[i32], _marks: Marks<'_>, _message: impl FnOnce() -> String) {}
}

/// Probe that observes nothing.
#[derive(Clone, Copy, Debug, Default)]
pub struct Silent;

impl SortProbe for Silent {}

/// Probe that counts operations and builds a sorting trace.
#[derive(Debug)]
pub struct Recorder {
    stats: SortStats,
    steps: Vec<SortingStep>,
}

impl Recorder {
    /// Emit the opening step for `input`.
    pub fn new(input: &[i32], intro: impl Into<String>) -> Self {
        Self {
            stats: SortStats::default(),
            steps: vec![SortingStep::new(input.to_vec(), intro, SortStats::default())],
        }
    }

    /// Counters so far.
    pub fn stats(&self) -> SortStats {
        self.stats
    }

    /// Close the trace with every index sorted and back-fill the times.
    pub fn finish(mut self, array: &[i32], avg_ms: f64) -> Vec<SortingStep> {
        let stats = SortStats {
            execution_time_ms: avg_ms,
            ..self.stats
        };
        let mut last = SortingStep::new(array.to_vec(), "Array is sorted!", stats);
        last.sorted = Sorted::All.indices(array.len());
        self.steps.push(last);
        distribute_execution_time(&mut self.steps, avg_ms);
        self.steps
    }
}

impl SortProbe for Recorder {
    fn compared(&mut self) {
        self.stats.comparisons += 1;
    }

    fn swapped(&mut self) {
        self.stats.swaps += 1;
    }

    fn step(&mut self, array: &[i32], marks: Marks<'_>, message: impl FnOnce() -> String) {
        let non_empty = |ix: &[usize]| (!ix.is_empty()).then(|| ix.to_vec());
        self.steps.push(SortingStep {
            array: array.to_vec(),
            comparing: non_empty(marks.comparing),
            swapping: non_empty(marks.swapping),
            sorted: marks.sorted.indices(array.len()),
            message: message(),
            stats: self.stats,
        });
    }
}

/// A sorting algorithm written once against [`SortProbe`].
pub trait Sorter {
    /// Display name, as in "Starting {NAME}".
    const NAME: &'static str;

    /// Sort `arr` in place, reporting to `probe`.
    fn sort<P: SortProbe>(arr: &mut [i32], probe: &mut P);
}

/// Benchmark `S` on a copy of `input`, then record its trace.
///
/// Inputs shorter than two elements skip the algorithm entirely, so their
/// trace is just the opening and closing steps.
pub fn trace<S: Sorter>(input: &[i32], cfg: &TraceConfig) -> Vec<SortingStep> {
    let avg = benchmark(
        || {
            let mut arr = input.to_vec();
            S::sort(&mut arr, &mut Silent);
            arr
        },
        cfg.bench_budget,
    );

    let mut rec = Recorder::new(input, format!("Starting {}", S::NAME));
    let mut arr = input.to_vec();
    if arr.len() > 1 {
        S::sort(&mut arr, &mut rec);
    }
    let stats = rec.stats();
    let steps = rec.finish(&arr, avg);
    log::debug!(
        "{}: n={} steps={} comparisons={} swaps={} avg={avg:.4}ms",
        S::NAME,
        input.len(),
        steps.len(),
        stats.comparisons,
        stats.swaps
    );
    steps
}
