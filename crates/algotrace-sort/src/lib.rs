//! Traced sorting algorithms.
//!
//! Each module sorts a copy of an `i32` slice and returns the sequence of
//! [`SortingStep`](algotrace_core::SortingStep)s it went through: the opening
//! snapshot, one step per comparison, swap or phase change, and a closing
//! step with every index marked sorted.
//!
//! | Module | Algorithm | Stable |
//! |---|---|---|
//! | [`bubble`] | Bubble sort | yes |
//! | [`insertion`] | Insertion sort | yes |
//! | [`selection`] | Selection sort | no |
//! | [`merge`] | Merge sort (top-down) | yes |
//! | [`quick`] | Quick sort (Lomuto) | no |
//! | [`heap`] | Heap sort | no |
//! | [`shell`] | Shell sort (Knuth gaps) | no |
//! | [`counting`] | Counting sort | yes |
//! | [`radix`] | LSD radix sort, base 10 | yes |
//!
//! Algorithms are written once against [`SortProbe`]: the benchmark runs
//! them with [`Silent`], the trace with [`Recorder`].

pub mod bubble;
pub mod counting;
pub mod heap;
pub mod insertion;
pub mod merge;
mod probe;
pub mod quick;
pub mod radix;
pub mod selection;
pub mod shell;

pub use bubble::Bubble;
pub use counting::Counting;
pub use heap::Heap;
pub use insertion::Insertion;
pub use merge::Merge;
pub use probe::{Marks, Recorder, Silent, SortProbe, Sorted, Sorter, trace};
pub use quick::Quick;
pub use radix::Radix;
pub use selection::Selection;
pub use shell::Shell;

/// Sort `arr` in place with `S`, recording nothing.
pub fn sort_silent<S: Sorter>(arr: &mut [i32]) {
    S::sort(arr, &mut Silent);
}

#[cfg(test)]
mod tests {
    use super::*;
    use algotrace_core::{SortingStep, TraceConfig};
    use proptest::prelude::*;

    type Generate = fn(&[i32], &TraceConfig) -> Vec<SortingStep>;

    const ALL: [(&str, Generate); 9] = [
        ("bubble", bubble::generate),
        ("insertion", insertion::generate),
        ("selection", selection::generate),
        ("merge", merge::generate),
        ("quick", quick::generate),
        ("heap", heap::generate),
        ("shell", shell::generate),
        ("counting", counting::generate),
        ("radix", radix::generate),
    ];

    fn is_permutation(a: &[i32], b: &[i32]) -> bool {
        let mut a = a.to_vec();
        let mut b = b.to_vec();
        a.sort_unstable();
        b.sort_unstable();
        a == b
    }

    #[test]
    fn degenerate_inputs_have_two_steps() {
        let cfg = TraceConfig::unbenchmarked();
        for (name, generate) in ALL {
            for input in [&[][..], &[42][..]] {
                let steps = generate(input, &cfg);
                assert_eq!(steps.len(), 2, "{name} on {input:?}");
                assert_eq!(steps[1].message, "Array is sorted!");
                assert_eq!(steps[1].stats.comparisons, 0);
                assert_eq!(steps[1].stats.swaps, 0);
            }
        }
    }

    #[test]
    fn opening_step_names_the_algorithm() {
        let steps = generate_first(&[2, 1]);
        assert_eq!(
            steps,
            vec![
                "Starting Bubble Sort",
                "Starting Insertion Sort",
                "Starting Selection Sort",
                "Starting Merge Sort",
                "Starting Quick Sort",
                "Starting Heap Sort",
                "Starting Shell Sort",
                "Starting Counting Sort",
                "Starting Radix Sort (LSD)",
            ]
        );
    }

    fn generate_first(input: &[i32]) -> Vec<String> {
        let cfg = TraceConfig::unbenchmarked();
        ALL.iter()
            .map(|(_, generate)| generate(input, &cfg)[0].message.clone())
            .collect()
    }

    #[test]
    fn silent_matches_recorded() {
        let input = [9, -3, 0, 14, 2, 2, -8];
        let mut arr = input.to_vec();
        sort_silent::<Heap>(&mut arr);
        let last = heap::generate(&input, &TraceConfig::unbenchmarked())
            .pop()
            .unwrap();
        assert_eq!(arr, last.array);
    }

    proptest! {
        #[test]
        fn every_sort_sorts(input in prop::collection::vec(-500i32..500, 0..40)) {
            let cfg = TraceConfig::unbenchmarked();
            for (name, generate) in ALL {
                let steps = generate(&input, &cfg);
                let first = &steps[0];
                let last = &steps[steps.len() - 1];
                prop_assert_eq!(&first.array, &input);
                prop_assert!(last.array.is_sorted(), "{} left {:?}", name, last.array);
                prop_assert!(is_permutation(&input, &last.array), "{}", name);
                prop_assert_eq!(last.sorted.as_ref().map(Vec::len), Some(input.len()));
                for w in steps.windows(2) {
                    prop_assert!(w[0].stats.comparisons <= w[1].stats.comparisons);
                    prop_assert!(w[0].stats.swaps <= w[1].stats.swaps);
                }
            }
        }

        #[test]
        fn counting_counters_equal_len(input in prop::collection::vec(-50i32..50, 2..30)) {
            let last = counting::generate(&input, &TraceConfig::unbenchmarked()).pop().unwrap();
            prop_assert_eq!(last.stats.comparisons, input.len() as u64);
            prop_assert_eq!(last.stats.swaps, input.len() as u64);
        }
    }
}
