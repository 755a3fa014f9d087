//! Counting sort.
//!
//! There are no pairwise comparisons, so the counters are repurposed:
//! `comparisons` counts the count-increments of phase 1 and `swaps` the
//! placements of phase 2. Both end at exactly `n`.
//!
//! Counts live in a dense table indexed by `value - min` while the value
//! range stays under [`DENSE_LIMIT`], and in an ordered map keyed by value
//! beyond it.

use std::collections::BTreeMap;

use algotrace_core::{SortingStep, TraceConfig};

use crate::probe::{Marks, SortProbe, Sorted, Sorter, trace};

/// Widest value range that still gets a dense count table.
pub const DENSE_LIMIT: u64 = 1 << 20;

pub struct Counting;

/// Occurrence counts, later turned into end positions by [`Counts::prefix`].
enum Counts {
    Dense { min: i32, slots: Vec<usize> },
    Sparse(BTreeMap<i32, usize>),
}

impl Counts {
    fn new(min: i32, range: u64) -> Self {
        if range <= DENSE_LIMIT {
            Self::Dense {
                min,
                slots: vec![0; range as usize],
            }
        } else {
            Self::Sparse(BTreeMap::new())
        }
    }

    fn slot(&mut self, v: i32) -> &mut usize {
        match self {
            Self::Dense { min, slots } => {
                &mut slots[(i64::from(v) - i64::from(*min)) as usize]
            }
            Self::Sparse(map) => map.entry(v).or_insert(0),
        }
    }

    /// Count one more `v` and return its running count.
    fn add(&mut self, v: i32) -> usize {
        let c = self.slot(v);
        *c += 1;
        *c
    }

    /// Running sums in value order: each entry becomes one past the last
    /// output position of its value.
    fn prefix(&mut self) {
        let mut total = 0;
        let mut running = |c: &mut usize| {
            total += *c;
            *c = total;
        };
        match self {
            Self::Dense { slots, .. } => slots.iter_mut().for_each(&mut running),
            Self::Sparse(map) => map.values_mut().for_each(&mut running),
        }
    }

    /// Claim the next position for `v`, walking backwards.
    fn take(&mut self, v: i32) -> usize {
        let c = self.slot(v);
        *c -= 1;
        *c
    }
}

impl Sorter for Counting {
    const NAME: &'static str = "Counting Sort";

    fn sort<P: SortProbe>(arr: &mut [i32], probe: &mut P) {
        let (Some(&min), Some(&max)) = (arr.iter().min(), arr.iter().max()) else {
            return;
        };
        let range = (i64::from(max) - i64::from(min)) as u64 + 1;
        let mut counts = Counts::new(min, range);

        probe.step(arr, Marks::none(), || {
            format!("Value range: {min} to {max} ({range} distinct values possible)")
        });
        probe.step(arr, Marks::none(), || {
            "Phase 1: Counting occurrences of each value".to_string()
        });

        for i in 0..arr.len() {
            let v = arr[i];
            let c = counts.add(v);
            probe.compared();
            probe.step(arr, Marks::comparing(&[i]), || {
                format!("Reading value {v} at index {i}: count[{v}] = {c}")
            });
        }

        counts.prefix();

        probe.step(arr, Marks::none(), || {
            "Phase 2: Placing elements into sorted positions".to_string()
        });

        // Walking backwards keeps equal values in input order.
        let mut output = vec![0; arr.len()];
        let mut placed = Vec::with_capacity(arr.len());
        for &v in arr.iter().rev() {
            let pos = counts.take(v);
            output[pos] = v;
            probe.swapped();
            placed.push(pos);
            probe.step(
                &output,
                Marks::comparing(&[pos]).with_sorted(Sorted::Indices(&placed)),
                || format!("Placing {v} at position {pos}"),
            );
        }

        arr.copy_from_slice(&output);
    }
}

/// Trace counting sort over `input`.
pub fn generate(input: &[i32], cfg: &TraceConfig) -> Vec<SortingStep> {
    trace::<Counting>(input, cfg)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exactly_n_reads_and_n_writes() {
        let input = [4, -2, 7, 4, 0, -2, 9];
        let steps = generate(&input, &TraceConfig::unbenchmarked());
        let last = steps.last().unwrap();
        assert_eq!(last.array, vec![-2, -2, 0, 4, 4, 7, 9]);
        assert_eq!(last.stats.comparisons, input.len() as u64);
        assert_eq!(last.stats.swaps, input.len() as u64);
    }

    #[test]
    fn phase_steps() {
        let steps = generate(&[3, 1, 2], &TraceConfig::unbenchmarked());
        assert_eq!(steps[1].message, "Value range: 1 to 3 (3 distinct values possible)");
        assert_eq!(steps[2].message, "Phase 1: Counting occurrences of each value");
        assert_eq!(steps[3].message, "Reading value 3 at index 0: count[3] = 1");
        assert_eq!(steps[6].message, "Phase 2: Placing elements into sorted positions");
        // last input value (2) is placed first, into slot 1 of the output
        assert_eq!(steps[7].message, "Placing 2 at position 1");
        assert_eq!(steps[7].array, vec![0, 2, 0]);
        assert_eq!(steps[7].sorted, Some(vec![1]));
    }

    #[test]
    fn extreme_values_use_sparse_counts() {
        let input = [i32::MAX, 0, i32::MIN, -5, i32::MAX, 7];
        let steps = generate(&input, &TraceConfig::unbenchmarked());
        assert_eq!(
            steps[1].message,
            format!("Value range: {} to {} (4294967296 distinct values possible)", i32::MIN, i32::MAX)
        );
        let last = steps.last().unwrap();
        assert_eq!(last.array, vec![i32::MIN, -5, 0, 7, i32::MAX, i32::MAX]);
        assert_eq!(last.stats.comparisons, input.len() as u64);
        assert_eq!(last.stats.swaps, input.len() as u64);
    }

    #[test]
    fn sparse_and_dense_traces_agree() {
        let input = [9, -3, 9, 4, 0, -3, 2];
        let wide: Vec<i32> = input.iter().map(|&v| v * 1_000_000).collect();
        let narrow = generate(&input, &TraceConfig::unbenchmarked());
        let sparse = generate(&wide, &TraceConfig::unbenchmarked());
        assert_eq!(narrow.len(), sparse.len());
        for (a, b) in narrow.iter().zip(&sparse).skip(2) {
            assert_eq!(a.sorted, b.sorted);
            assert_eq!(a.comparing, b.comparing);
            assert_eq!(a.stats, b.stats);
        }
    }
}
