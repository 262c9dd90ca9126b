//! Binary radix sorts driven by [`Sortable::bitmask`].
//!
//! Keys are treated as unsigned bit patterns, so the result matches key order
//! for non-negative keys below `2^bits`.

use super::{fork_join, insertion_sort};
use crate::cancel::CancelFlag;
use crate::element::Sortable;

/// Partitions smaller than this are finished by insertion sort.
pub const RADIX_INSERTION_THRESHOLD: usize = 20;

/// How elements travel between the sequence and the buckets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Transfer {
    Move,
    Copy,
}

/// Two-bucket LSD radix sort that moves elements in and out of the buckets.
pub fn radix_sort<T: Sortable>(v: &[T], bits: u32, cancel: &CancelFlag) {
    bucket_radix_sort(v, bits, cancel, Transfer::Move);
}

/// Same passes as [`radix_sort`], but every transfer is a full copy.
///
/// The result is identical; only the cost differs, which makes the price of
/// copying over moving visible.
pub fn radix_sort_copy<T: Sortable>(v: &[T], bits: u32, cancel: &CancelFlag) {
    bucket_radix_sort(v, bits, cancel, Transfer::Copy);
}

/// One stable pass per bit, least significant first.
///
/// A pass interrupted by cancellation still writes back everything it lifted
/// into the buckets: the `k` elements taken from the front return to the first
/// `k` slots and the rest of the slice was never touched.
fn bucket_radix_sort<T: Sortable>(v: &[T], bits: u32, cancel: &CancelFlag, transfer: Transfer) {
    if v.len() < 2 {
        return;
    }
    let mut zeros: Vec<T> = Vec::with_capacity(v.len());
    let mut ones: Vec<T> = Vec::with_capacity(v.len());

    for bit in 0..bits.min(u32::BITS) {
        if cancel.is_cancelled() {
            return;
        }
        let mask = 1u32 << bit;
        for slot in v {
            if cancel.is_cancelled() {
                break;
            }
            let bucket = if slot.bitmask(mask) != 0 {
                &mut ones
            } else {
                &mut zeros
            };
            bucket.push(match transfer {
                Transfer::Move => slot.take(),
                Transfer::Copy => slot.clone(),
            });
        }

        for (slot, item) in v.iter().zip(zeros.drain(..).chain(ones.drain(..))) {
            match transfer {
                Transfer::Move => slot.assign_move(item),
                Transfer::Copy => slot.assign(&item),
            }
        }
    }
}

/// In-place MSB radix sort with an insertion sort fallback.
///
/// Each level partitions on one bit with a two-pointer scan (zeros to the
/// front, ones to the back) and recurses into both halves with the next lower
/// bit. Halves are forked while `budget > 1`. Partitions below
/// [`RADIX_INSERTION_THRESHOLD`] elements are finished with `is_less`, which
/// must agree with ascending key order.
pub fn radix_sort_in_place<T, F>(v: &[T], bits: u32, is_less: &F, cancel: &CancelFlag, budget: usize)
where
    T: Sortable,
    F: Fn(&T, &T) -> bool + Sync,
{
    if v.len() < 2 || bits == 0 || cancel.is_cancelled() {
        return;
    }
    if v.len() < RADIX_INSERTION_THRESHOLD {
        insertion_sort(v, is_less, cancel);
        return;
    }

    let bit = bits.min(u32::BITS) - 1;
    let mask = 1u32 << bit;
    let mut lo = 0;
    let mut hi = v.len();
    while lo < hi {
        if cancel.is_cancelled() {
            return;
        }
        if v[lo].bitmask(mask) != 0 {
            hi -= 1;
            v[lo].swap(&v[hi]);
        } else {
            lo += 1;
        }
    }

    let (zeros, ones) = v.split_at(lo);
    fork_join(
        budget,
        |budget| radix_sort_in_place(zeros, bit, is_less, cancel, budget),
        |budget| radix_sort_in_place(ones, bit, is_less, cancel, budget),
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::element::Element;
    use crate::sort::test_util::*;

    #[test]
    fn test_radix_sort_variants() {
        let cancel = CancelFlag::new();
        for seed in 0..3 {
            let input = scrambled(400, 800, seed);
            let v = elements(&input);
            radix_sort(&v, 13, &cancel);
            assert_eq!(keys(&v), sorted(&input), "move variant, seed={seed}");

            let v = elements(&input);
            radix_sort_copy(&v, 13, &cancel);
            assert_eq!(keys(&v), sorted(&input), "copy variant, seed={seed}");
        }
    }

    #[test]
    fn test_radix_sort_default_width_and_duplicates() {
        let cancel = CancelFlag::new();
        let input = vec![7, 7, 0, 3, 3, 3, 100_000, 1, 0, 7];
        let v = elements(&input);
        radix_sort(&v, 32, &cancel);
        assert_eq!(keys(&v), sorted(&input));
    }

    #[test]
    fn test_radix_sort_in_place() {
        let cancel = CancelFlag::new();
        for (n, modulus) in [(0, 1), (5, 10), (19, 8000), (500, 8000), (600, 3)] {
            let input = scrambled(n, modulus, n as u64);
            for budget in [0, 4] {
                let v = elements(&input);
                radix_sort_in_place(&v, 13, &less, &cancel, budget);
                assert_eq!(keys(&v), sorted(&input), "n={n} modulus={modulus} budget={budget}");
            }
        }
    }

    #[test]
    fn test_radix_sort_in_place_all_high_bit() {
        // Every key has bit 12 set, so the first partition is one-sided.
        let input: Vec<i32> = scrambled(100, 4096, 5).into_iter().map(|k| k | 4096).collect();
        let v = elements(&input);
        radix_sort_in_place(&v, 13, &less, &CancelFlag::new(), 0);
        assert_eq!(keys(&v), sorted(&input));
    }

    #[test]
    fn test_radix_cancel_mid_pass_keeps_permutation() {
        let input = scrambled(256, 8000, 2);
        let v: Vec<Element> = elements(&input);
        let cancel = CancelFlag::new();
        std::thread::scope(|s| {
            s.spawn(|| {
                // Let a few passes start before cancelling.
                std::thread::sleep(std::time::Duration::from_micros(50));
                cancel.cancel();
            });
            radix_sort_copy(&v, 13, &cancel);
        });
        assert_eq!(sorted(&keys(&v)), sorted(&input));
    }
}
