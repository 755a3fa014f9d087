use algotrace_core::{SortingStep, TraceConfig};

use crate::probe::{Marks, SortProbe, Sorter, trace};

/// Top-down merge sort. Every write back into the array counts as a swap.
pub struct Merge;

#[derive(Clone, Copy, Debug)]
enum Frame {
    Split(usize, usize),
    Merge(usize, usize, usize),
}

impl Sorter for Merge {
    const NAME: &'static str = "Merge Sort";

    fn sort<P: SortProbe>(arr: &mut [i32], probe: &mut P) {
        if arr.is_empty() {
            return;
        }
        let mut span: Vec<usize> = Vec::new();
        let mut stack = vec![Frame::Split(0, arr.len() - 1)];

        while let Some(frame) = stack.pop() {
            match frame {
                Frame::Split(lo, hi) => {
                    if lo >= hi {
                        continue;
                    }
                    let mid = lo + (hi - lo) / 2;
                    span.clear();
                    span.extend(lo..=hi);
                    probe.step(arr, Marks::comparing(&span), || {
                        format!("Dividing array from {lo} to {hi}")
                    });
                    // Left half runs first, then right, then the merge.
                    stack.push(Frame::Merge(lo, mid, hi));
                    stack.push(Frame::Split(mid + 1, hi));
                    stack.push(Frame::Split(lo, mid));
                }
                Frame::Merge(lo, mid, hi) => merge(arr, lo, mid, hi, probe),
            }
        }
    }
}

fn merge<P: SortProbe>(arr: &mut [i32], lo: usize, mid: usize, hi: usize, probe: &mut P) {
    let left = arr[lo..=mid].to_vec();
    let right = arr[mid + 1..=hi].to_vec();
    let (mut i, mut j, mut k) = (0, 0, lo);

    while i < left.len() && j < right.len() {
        probe.compared();
        probe.step(arr, Marks::comparing(&[lo + i, mid + 1 + j]), || {
            format!("Comparing {} and {}", left[i], right[j])
        });
        if left[i] <= right[j] {
            arr[k] = left[i];
            i += 1;
        } else {
            arr[k] = right[j];
            j += 1;
        }
        place(arr, k, probe);
        k += 1;
    }
    for &v in left[i..].iter().chain(&right[j..]) {
        arr[k] = v;
        place(arr, k, probe);
        k += 1;
    }
}

fn place<P: SortProbe>(arr: &[i32], k: usize, probe: &mut P) {
    probe.swapped();
    probe.step(arr, Marks::swapping(&[k]), || {
        format!("Placing {} at position {k}", arr[k])
    });
}

/// Trace merge sort over `input`.
pub fn generate(input: &[i32], cfg: &TraceConfig) -> Vec<SortingStep> {
    trace::<Merge>(input, cfg)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn divides_then_merges() {
        let steps = generate(&[3, 1, 2], &TraceConfig::unbenchmarked());
        assert_eq!(steps[1].message, "Dividing array from 0 to 2");
        assert_eq!(steps[1].comparing, Some(vec![0, 1, 2]));
        assert_eq!(steps[2].message, "Dividing array from 0 to 1");
        let last = steps.last().unwrap();
        assert_eq!(last.array, vec![1, 2, 3]);
        // merge [3]+[1] writes 2, merge [1,3]+[2] writes 3
        assert_eq!(last.stats.swaps, 5);
        assert_eq!(last.stats.comparisons, 3);
    }

    #[test]
    fn stable_for_equal_keys() {
        let last = generate(&[2, 2, 1, 1], &TraceConfig::unbenchmarked())
            .pop()
            .unwrap();
        assert_eq!(last.array, vec![1, 1, 2, 2]);
        assert_eq!(last.stats.swaps, 8);
    }
}
