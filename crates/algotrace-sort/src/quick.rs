use algotrace_core::{SortingStep, TraceConfig};

use crate::probe::{Marks, SortProbe, Sorter, trace};

/// Quick sort with a Lomuto partition around the last element.
pub struct Quick;

impl Sorter for Quick {
    const NAME: &'static str = "Quick Sort";

    fn sort<P: SortProbe>(arr: &mut [i32], probe: &mut P) {
        if arr.len() < 2 {
            return;
        }
        // Left range is pushed last so it is partitioned first.
        let mut ranges = vec![(0, arr.len() - 1)];
        while let Some((lo, hi)) = ranges.pop() {
            if lo >= hi {
                continue;
            }
            let p = partition(arr, lo, hi, probe);
            if p + 1 < hi {
                ranges.push((p + 1, hi));
            }
            if p > lo {
                ranges.push((lo, p - 1));
            }
        }
    }
}

fn partition<P: SortProbe>(arr: &mut [i32], lo: usize, hi: usize, probe: &mut P) -> usize {
    let pivot = arr[hi];
    probe.step(arr, Marks::comparing(&[hi]), || format!("Pivot: {pivot}"));

    let mut store = lo;
    for j in lo..hi {
        probe.compared();
        probe.step(arr, Marks::comparing(&[j, hi]), || {
            format!("Comparing {} with pivot {pivot}", arr[j])
        });
        if arr[j] < pivot {
            arr.swap(store, j);
            probe.swapped();
            probe.step(arr, Marks::swapping(&[store, j]), || {
                format!("Swapping {} and {}", arr[j], arr[store])
            });
            store += 1;
        }
    }

    arr.swap(store, hi);
    probe.swapped();
    probe.step(arr, Marks::swapping(&[store, hi]), || {
        format!("Placing pivot {pivot} at position {store}")
    });
    store
}

/// Trace quick sort over `input`.
pub fn generate(input: &[i32], cfg: &TraceConfig) -> Vec<SortingStep> {
    trace::<Quick>(input, cfg)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn last_element_is_first_pivot() {
        let steps = generate(&[4, 7, 1, 5], &TraceConfig::unbenchmarked());
        assert_eq!(steps[1].message, "Pivot: 5");
        assert_eq!(steps[1].comparing, Some(vec![3]));
        let placed = steps
            .iter()
            .find(|s| s.message.starts_with("Placing pivot 5"))
            .unwrap();
        assert_eq!(placed.message, "Placing pivot 5 at position 2");
        assert_eq!(placed.array, vec![4, 1, 5, 7]);
        assert_eq!(steps.last().unwrap().array, vec![1, 4, 5, 7]);
    }

    #[test]
    fn sorted_input_is_worst_case() {
        let last = generate(&[1, 2, 3, 4, 5], &TraceConfig::unbenchmarked())
            .pop()
            .unwrap();
        assert_eq!(last.stats.comparisons, 10);
    }
}
