use algotrace_core::{SortingStep, TraceConfig};

use crate::probe::{Marks, SortProbe, Sorted, Sorter, trace};

/// Selection sort. Swaps only when the minimum is not already in place.
pub struct Selection;

impl Sorter for Selection {
    const NAME: &'static str = "Selection Sort";

    fn sort<P: SortProbe>(arr: &mut [i32], probe: &mut P) {
        let n = arr.len();
        for i in 0..n.saturating_sub(1) {
            let mut min = i;
            probe.step(arr, Marks::comparing(&[i]), || {
                format!("Finding minimum in unsorted portion starting at {i}")
            });

            for j in i + 1..n {
                probe.compared();
                probe.step(arr, Marks::comparing(&[min, j]), || {
                    format!("Comparing {} with {}", arr[min], arr[j])
                });
                if arr[j] < arr[min] {
                    min = j;
                    probe.step(arr, Marks::comparing(&[min]), || {
                        format!("New minimum found: {}", arr[min])
                    });
                }
            }

            if min != i {
                arr.swap(i, min);
                probe.swapped();
                probe.step(arr, Marks::swapping(&[i, min]), || {
                    format!("Swapping {} and {}", arr[min], arr[i])
                });
            }

            probe.step(arr, Marks::sorted(Sorted::Prefix(i + 1)), || {
                format!("Element at position {i} is now in its final position")
            });
        }
    }
}

/// Trace selection sort over `input`.
pub fn generate(input: &[i32], cfg: &TraceConfig) -> Vec<SortingStep> {
    trace::<Selection>(input, cfg)
}
