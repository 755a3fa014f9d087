use algotrace_core::{SortingStep, TraceConfig};

use crate::probe::{Marks, SortProbe, Sorted, Sorter, trace};

/// Heap sort: build a max-heap bottom-up, then move the root behind the
/// shrinking heap one element at a time.
pub struct Heap;

impl Sorter for Heap {
    const NAME: &'static str = "Heap Sort";

    fn sort<P: SortProbe>(arr: &mut [i32], probe: &mut P) {
        let n = arr.len();

        probe.step(arr, Marks::none(), || "Building max heap".to_string());
        for root in (0..n / 2).rev() {
            sift_down(arr, n, root, 0, probe);
        }
        probe.step(arr, Marks::none(), || {
            "Max heap built. Extracting elements.".to_string()
        });

        for end in (1..n).rev() {
            arr.swap(0, end);
            probe.swapped();
            let settled = n - end;
            probe.step(
                arr,
                Marks::swapping(&[0, end]).with_sorted(Sorted::Suffix(settled)),
                || format!("Swapping root with last unsorted element at index {end}"),
            );
            sift_down(arr, end, 0, settled, probe);
        }
    }
}

/// Restore the heap property below `root` within `arr[..size]`.
fn sift_down<P: SortProbe>(
    arr: &mut [i32],
    size: usize,
    mut root: usize,
    settled: usize,
    probe: &mut P,
) {
    let sorted = Sorted::Suffix(settled);
    loop {
        let mut largest = root;
        for child in [2 * root + 1, 2 * root + 2] {
            if child >= size {
                break;
            }
            probe.compared();
            let current = largest;
            probe.step(
                arr,
                Marks::comparing(&[current, child]).with_sorted(sorted),
                || {
                    format!(
                        "Heapifying subtree rooted at index {root}: comparing indices {current} and {child}"
                    )
                },
            );
            if arr[child] > arr[largest] {
                largest = child;
            }
        }
        if largest == root {
            return;
        }
        arr.swap(root, largest);
        probe.swapped();
        probe.step(
            arr,
            Marks::swapping(&[root, largest]).with_sorted(sorted),
            || format!("Swapping elements at indices {root} and {largest}"),
        );
        root = largest;
    }
}

/// Trace heap sort over `input`.
pub fn generate(input: &[i32], cfg: &TraceConfig) -> Vec<SortingStep> {
    trace::<Heap>(input, cfg)
}
