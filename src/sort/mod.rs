//! Sorting algorithms over instrumented elements.
//!
//! Every routine takes the sequence as `&[T]` and rearranges it through the
//! [`Sortable`] operations, a strict-weak-order predicate `is_less`, and a
//! [`CancelFlag`] that is polled inside every loop. A routine that stops early
//! leaves the slice as a permutation of its input.
//!
//! Routines taking a `budget` may fork: while `budget > 1` both halves of a
//! split run through [`rayon::join`], each with `budget - 2`.
//!
//! [`CancelFlag`]: crate::cancel::CancelFlag

use crate::element::Sortable;

mod divide;
mod exchange;
mod insertion;
mod library;
mod odd_even;
mod radix;
mod random;

pub use divide::{heap_sort, intro_sort, merge_in_place, merge_sort, quick_sort};
pub use exchange::{
    bubble_sort, bubble_sort_recursive, comb_sort, gnome_sort, gnome_sort_jump, shaker_sort,
};
pub use insertion::{binary_insertion_sort, cycle_sort, insertion_sort, selection_sort, shell_sort};
pub use library::{library_sort, library_stable_sort};
pub use odd_even::odd_even_sort;
pub use radix::{radix_sort, radix_sort_copy, radix_sort_in_place, RADIX_INSERTION_THRESHOLD};
pub use random::{bogo_sort, bogo_sort_with_rng, bozo_sort, bozo_sort_with_rng};

/// Checks that no element is less than its predecessor.
///
/// Compares each element against its predecessor (`is_less(next, prev)`), so in
/// verification mode the compared flags end up set on the pairs found in order.
pub fn is_sorted_by<T, F>(v: &[T], is_less: &F) -> bool
where
    F: Fn(&T, &T) -> bool,
{
    v.windows(2).all(|pair| !is_less(&pair[1], &pair[0]))
}

/// Recursive formulation of [`is_sorted_by`]; both agree on every input.
pub fn is_sorted_recursive_by<T, F>(v: &[T], is_less: &F) -> bool
where
    F: Fn(&T, &T) -> bool,
{
    match v {
        [] | [_] => true,
        [prev, next, ..] => !is_less(next, prev) && is_sorted_recursive_by(&v[1..], is_less),
    }
}

/// Reverses the sequence in place with pairwise swaps.
pub fn reverse<T: Sortable>(v: &[T]) {
    let len = v.len();
    for i in 0..len / 2 {
        v[i].swap(&v[len - 1 - i]);
    }
}

/// First index in the sorted `v` whose element is greater than `value`.
pub(crate) fn upper_bound<T, F>(v: &[T], value: &T, is_less: &F) -> usize
where
    F: Fn(&T, &T) -> bool,
{
    let mut lo = 0;
    let mut hi = v.len();
    while lo < hi {
        let mid = lo + (hi - lo) / 2;
        if is_less(value, &v[mid]) {
            hi = mid;
        } else {
            lo = mid + 1;
        }
    }
    lo
}

/// Runs both halves of a split, in parallel when the budget allows a fork.
///
/// Each closure receives the budget left for its own subtree.
pub(crate) fn fork_join<A, B>(budget: usize, left: A, right: B)
where
    A: FnOnce(usize) + Send,
    B: FnOnce(usize) + Send,
{
    if budget > 1 {
        let child = budget - 2;
        log::trace!("forking with budget {budget}, children get {child}");
        rayon::join(|| left(child), || right(child));
    } else {
        left(0);
        right(0);
    }
}

#[cfg(test)]
pub(crate) mod test_util {
    use crate::element::{Element, Sortable};

    pub fn elements(keys: &[i32]) -> Vec<Element> {
        keys.iter().map(|&k| Element::new(k)).collect()
    }

    pub fn keys(v: &[Element]) -> Vec<i32> {
        v.iter().map(Element::key).collect()
    }

    pub fn sorted(keys: &[i32]) -> Vec<i32> {
        let mut out = keys.to_vec();
        out.sort_unstable();
        out
    }

    /// Deterministic pseudo-random keys in `0..modulus`.
    pub fn scrambled(n: usize, modulus: i32, seed: u64) -> Vec<i32> {
        let mut state = seed.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
        (0..n)
            .map(|_| {
                state = state
                    .wrapping_mul(6364136223846793005)
                    .wrapping_add(1442695040888963407);
                ((state >> 33) % modulus as u64) as i32
            })
            .collect()
    }

    pub fn less(a: &Element, b: &Element) -> bool {
        a.less(b)
    }
}
