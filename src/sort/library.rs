//! The standard library's sorts, driven through the instrumented comparator.
//!
//! `slice::sort_by` needs `&mut [T]`, which the shared sequence cannot hand
//! out. Instead an index vector is sorted with the element comparator and the
//! resulting permutation is applied to the slots with swaps, so every
//! comparison and every rearrangement still goes through [`Sortable`].
//!
//! Neither routine is interruptible; cancellation is checked once on entry.

use std::cmp::Ordering;

use crate::cancel::CancelFlag;
use crate::element::Sortable;

/// Unstable library sort (`sort_unstable_by`, a pattern-defeating quicksort).
pub fn library_sort<T, F>(v: &[T], is_less: &F, cancel: &CancelFlag)
where
    T: Sortable,
    F: Fn(&T, &T) -> bool,
{
    if v.len() < 2 || cancel.is_cancelled() {
        return;
    }
    let mut order: Vec<usize> = (0..v.len()).collect();
    order.sort_unstable_by(|&a, &b| ordering(&v[a], &v[b], is_less));
    apply_permutation(v, &order);
}

/// Stable library sort (`sort_by`, a merge-based sort); equal keys keep their
/// relative order.
pub fn library_stable_sort<T, F>(v: &[T], is_less: &F, cancel: &CancelFlag)
where
    T: Sortable,
    F: Fn(&T, &T) -> bool,
{
    if v.len() < 2 || cancel.is_cancelled() {
        return;
    }
    let mut order: Vec<usize> = (0..v.len()).collect();
    order.sort_by(|&a, &b| ordering(&v[a], &v[b], is_less));
    apply_permutation(v, &order);
}

fn ordering<T, F>(a: &T, b: &T, is_less: &F) -> Ordering
where
    F: Fn(&T, &T) -> bool,
{
    if is_less(a, b) {
        Ordering::Less
    } else if is_less(b, a) {
        Ordering::Greater
    } else {
        Ordering::Equal
    }
}

/// Rearranges `v` so that slot `i` receives the element originally at `order[i]`.
///
/// Slots before `i` are final when `i` is processed, so the original element
/// `order[i]` is found by following the chain of earlier placements.
fn apply_permutation<T: Sortable>(v: &[T], order: &[usize]) {
    for i in 0..order.len() {
        let mut src = order[i];
        while src < i {
            src = order[src];
        }
        v[i].swap(&v[src]);
    }
}
