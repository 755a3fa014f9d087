//! LSD radix sort, base 10.
//!
//! Keys are `value - min`, so negative inputs sort without a sign pass.
//! Each digit pass is a stable counting pass: the bucket reads are counted
//! as comparisons, and the rebuild counts one read and one write per element.

use algotrace_core::{SortingStep, TraceConfig};

use crate::probe::{Marks, SortProbe, Sorted, Sorter, trace};

const BASE: u64 = 10;

pub struct Radix;

fn digit_name(d: u32) -> String {
    match d {
        0 => "ones".into(),
        1 => "tens".into(),
        2 => "hundreds".into(),
        3 => "thousands".into(),
        4 => "ten-thousands".into(),
        _ => format!("10^{d}"),
    }
}

fn capitalized(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(c) => c.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Number of base-10 digits in `key` (0 for 0).
fn digit_count(mut key: u64) -> u32 {
    let mut n = 0;
    while key > 0 {
        key /= BASE;
        n += 1;
    }
    n
}

impl Sorter for Radix {
    const NAME: &'static str = "Radix Sort (LSD)";

    fn sort<P: SortProbe>(arr: &mut [i32], probe: &mut P) {
        let Some(&min) = arr.iter().min() else {
            return;
        };
        let key = |v: i32| (i64::from(v) - i64::from(min)) as u64;
        let max_key = arr.iter().map(|&v| key(v)).max().unwrap_or(0);
        let total = digit_count(max_key);

        let mut output = vec![0; arr.len()];
        let mut exp = 1u64;
        let mut d = 0u32;
        while max_key / exp > 0 {
            let name = digit_name(d);
            probe.step(arr, Marks::none(), || {
                format!("Processing {name} digit (position {} of {total})", d + 1)
            });

            let digit = |v: i32| ((key(v) / exp) % BASE) as usize;
            let mut count = [0usize; BASE as usize];
            for i in 0..arr.len() {
                let v = arr[i];
                let b = digit(v);
                count[b] += 1;
                probe.compared();
                probe.step(arr, Marks::comparing(&[i]), || {
                    format!("Placing {v} into bucket {b}")
                });
            }
            for b in 1..count.len() {
                count[b] += count[b - 1];
            }
            for &v in arr.iter().rev() {
                let b = digit(v);
                count[b] -= 1;
                output[count[b]] = v;
                probe.compared();
                probe.swapped();
            }
            arr.copy_from_slice(&output);

            let last = max_key / (exp * BASE) == 0;
            let sorted = if last { Sorted::All } else { Sorted::None };
            probe.step(arr, Marks::sorted(sorted), || {
                format!("{} digit pass complete", capitalized(&name))
            });

            if last {
                break;
            }
            exp *= BASE;
            d += 1;
        }
    }
}

/// Trace radix sort over `input`.
pub fn generate(input: &[i32], cfg: &TraceConfig) -> Vec<SortingStep> {
    trace::<Radix>(input, cfg)
}
