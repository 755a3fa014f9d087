use algotrace_core::{SortingStep, TraceConfig};

use crate::probe::{Marks, SortProbe, Sorter, trace};

/// Largest Knuth gap (1, 4, 13, 40, …) below `n / 3`, or 1.
fn initial_gap(n: usize) -> usize {
    let mut gap = 1;
    while gap < n / 3 {
        gap = gap * 3 + 1;
    }
    gap
}

/// Shell sort over the Knuth gap sequence.
pub struct Shell;

impl Sorter for Shell {
    const NAME: &'static str = "Shell Sort";

    fn sort<P: SortProbe>(arr: &mut [i32], probe: &mut P) {
        let n = arr.len();
        let mut gap = initial_gap(n);
        while gap >= 1 {
            probe.step(arr, Marks::none(), || {
                format!("Gap = {gap}: performing gapped insertion sort")
            });
            for i in gap..n {
                let mut j = i;
                while j >= gap {
                    probe.compared();
                    probe.step(arr, Marks::comparing(&[j, j - gap]), || {
                        format!(
                            "Gap = {gap}: comparing elements at indices {} and {j} ({} and {})",
                            j - gap,
                            arr[j - gap],
                            arr[j]
                        )
                    });
                    if arr[j] >= arr[j - gap] {
                        break;
                    }
                    arr.swap(j, j - gap);
                    probe.swapped();
                    probe.step(arr, Marks::swapping(&[j, j - gap]), || {
                        format!(
                            "Gap = {gap}: swapping elements at indices {} and {j}",
                            j - gap
                        )
                    });
                    j -= gap;
                }
            }
            gap /= 3;
        }
    }
}

/// Trace shell sort over `input`.
pub fn generate(input: &[i32], cfg: &TraceConfig) -> Vec<SortingStep> {
    trace::<Shell>(input, cfg)
}
