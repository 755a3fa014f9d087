//! Benchmark harness.
//!
//! Instrumented traces are far slower than the algorithm they describe, so
//! the reported time comes from a separate run of the silent algorithm,
//! repeated until a time budget is spent.

use std::hint::black_box;
use std::time::{Duration, Instant};

use crate::step::Timed;

/// Run `f` repeatedly until `budget` has elapsed and return the mean
/// wall-clock time per run in milliseconds.
///
/// Returns `0.0` when no run completed, which is always the case for a zero
/// budget.
pub fn benchmark<T>(mut f: impl FnMut() -> T, budget: Duration) -> f64 {
    let start = Instant::now();
    let mut iterations: u64 = 0;
    while start.elapsed() < budget {
        black_box(f());
        iterations += 1;
    }
    let total = start.elapsed();
    log::debug!("benchmark: {iterations} iterations in {total:?}");
    if iterations == 0 {
        return 0.0;
    }
    total.as_secs_f64() * 1000.0 / iterations.max(1) as f64
}

/// Back-fill cumulative execution times into a trace.
///
/// Step `i` (for `i ≥ 1`) receives `avg * i / (n - 1)`; the last step
/// receives exactly `avg`. The first step keeps its time. Traces of fewer
/// than two steps are left untouched.
pub fn distribute_execution_time<S: Timed>(steps: &mut [S], avg: f64) {
    let n = steps.len();
    if n <= 1 {
        return;
    }
    let per_step = avg / (n - 1) as f64;
    for (i, s) in steps.iter_mut().enumerate().skip(1) {
        s.set_execution_time(per_step * i as f64);
    }
    steps[n - 1].set_execution_time(avg);
}
