use algotrace_core::{SortingStep, TraceConfig};

use crate::probe::{Marks, SortProbe, Sorted, Sorter, trace};

/// Insertion sort. Each shift to the right counts as a swap, and so does
/// the final placement of the key when it moved.
pub struct Insertion;

impl Sorter for Insertion {
    const NAME: &'static str = "Insertion Sort";

    fn sort<P: SortProbe>(arr: &mut [i32], probe: &mut P) {
        for i in 1..arr.len() {
            let key = arr[i];
            probe.step(arr, Marks::comparing(&[i]), || {
                format!("Inserting {key} into sorted portion")
            });

            let mut j = i;
            while j > 0 {
                probe.compared();
                probe.step(arr, Marks::comparing(&[j - 1, j]), || {
                    format!("Comparing {} with {key}", arr[j - 1])
                });
                if arr[j - 1] <= key {
                    break;
                }
                arr[j] = arr[j - 1];
                probe.swapped();
                probe.step(arr, Marks::swapping(&[j - 1, j]), || {
                    format!("Shifting {} to the right", arr[j])
                });
                j -= 1;
            }

            arr[j] = key;
            if j != i {
                probe.swapped();
            }
            probe.step(
                arr,
                Marks::swapping(&[j]).with_sorted(Sorted::Prefix(i + 1)),
                || format!("Placed {key} at position {j}"),
            );
        }
    }
}

/// Trace insertion sort over `input`.
pub fn generate(input: &[i32], cfg: &TraceConfig) -> Vec<SortingStep> {
    trace::<Insertion>(input, cfg)
}
