use algotrace_core::{SortingStep, TraceConfig};

use crate::probe::{Marks, SortProbe, Sorted, Sorter, trace};

/// Bubble sort: `n - 1` passes of adjacent compare-and-swap.
pub struct Bubble;

impl Sorter for Bubble {
    const NAME: &'static str = "Bubble Sort";

    fn sort<P: SortProbe>(arr: &mut [i32], probe: &mut P) {
        let n = arr.len();
        for i in 0..n.saturating_sub(1) {
            for j in 0..n - i - 1 {
                probe.compared();
                probe.step(arr, Marks::comparing(&[j, j + 1]), || {
                    format!("Comparing {} and {}", arr[j], arr[j + 1])
                });

                if arr[j] > arr[j + 1] {
                    arr.swap(j, j + 1);
                    probe.swapped();
                    probe.step(arr, Marks::swapping(&[j, j + 1]), || {
                        format!("Swapping {} and {}", arr[j + 1], arr[j])
                    });
                }
            }

            probe.step(arr, Marks::sorted(Sorted::Suffix(i + 1)), || {
                format!("Element at position {} is now in its final position", n - 1 - i)
            });
        }
    }
}

/// Trace bubble sort over `input`.
pub fn generate(input: &[i32], cfg: &TraceConfig) -> Vec<SortingStep> {
    trace::<Bubble>(input, cfg)
}
