//! Divide-and-conquer sorts: quicksort, mergesort, heapsort and introsort.
//!
//! Quick, merge and intro sort fork their two halves through
//! [`super::fork_join`] while the thread budget allows it. Heapsort and the
//! merge step run to completion once started; they only check for
//! cancellation before they begin.

use super::fork_join;
use crate::cancel::CancelFlag;
use crate::element::Sortable;

/// Index of the median of `v[a]`, `v[b]`, `v[c]`.
pub(crate) fn median_of_three<T, F>(v: &[T], a: usize, b: usize, c: usize, is_less: &F) -> usize
where
    F: Fn(&T, &T) -> bool,
{
    let (lo, hi) = if is_less(&v[b], &v[a]) { (b, a) } else { (a, b) };
    let upper = if is_less(&v[c], &v[hi]) { c } else { hi };
    if is_less(&v[upper], &v[lo]) {
        lo
    } else {
        upper
    }
}

/// Lomuto partition around the last element.
///
/// Returns the pivot's final index: everything before it is less than the
/// pivot. If cancelled, the scan stops early but the pivot is still placed, so
/// the slice remains a permutation.
pub(crate) fn partition<T, F>(v: &[T], is_less: &F, cancel: &CancelFlag) -> usize
where
    T: Sortable,
    F: Fn(&T, &T) -> bool,
{
    let pivot = v.len() - 1;
    let mut store = 0;
    for i in 0..pivot {
        if cancel.is_cancelled() {
            break;
        }
        if is_less(&v[i], &v[pivot]) {
            v[i].swap(&v[store]);
            store += 1;
        }
    }
    v[store].swap(&v[pivot]);
    store
}

/// Median-of-three pivot selection followed by a Lomuto partition.
fn pivot_and_partition<T, F>(v: &[T], is_less: &F, cancel: &CancelFlag) -> usize
where
    T: Sortable,
    F: Fn(&T, &T) -> bool,
{
    let last = v.len() - 1;
    let median = median_of_three(v, 0, v.len() / 2, last, is_less);
    v[median].swap(&v[last]);
    partition(v, is_less, cancel)
}

/// Quicksort; both partitions are forked while `budget > 1`.
///
/// Without a fork, only the smaller partition is sorted recursively and the
/// larger one is handled by the loop, so the stack depth stays logarithmic
/// even when runs of equal keys make every split one-sided.
pub fn quick_sort<T, F>(mut v: &[T], is_less: &F, cancel: &CancelFlag, budget: usize)
where
    T: Sortable,
    F: Fn(&T, &T) -> bool + Sync,
{
    while v.len() >= 2 && !cancel.is_cancelled() {
        let mid = pivot_and_partition(v, is_less, cancel);
        let (left, rest) = v.split_at(mid);
        let right = &rest[1..];
        if budget > 1 {
            fork_join(
                budget,
                |budget| quick_sort(left, is_less, cancel, budget),
                |budget| quick_sort(right, is_less, cancel, budget),
            );
            return;
        }
        let (smaller, larger) = if left.len() <= right.len() {
            (left, right)
        } else {
            (right, left)
        };
        quick_sort(smaller, is_less, cancel, 0);
        v = larger;
    }
}

/// Top-down mergesort built on [`merge_in_place`]; halves are forked while `budget > 1`.
pub fn merge_sort<T, F>(v: &[T], is_less: &F, cancel: &CancelFlag, budget: usize)
where
    T: Sortable,
    F: Fn(&T, &T) -> bool + Sync,
{
    if v.len() < 2 || cancel.is_cancelled() {
        return;
    }
    let mid = v.len() / 2;
    let (left, right) = v.split_at(mid);
    fork_join(
        budget,
        |budget| merge_sort(left, is_less, cancel, budget),
        |budget| merge_sort(right, is_less, cancel, budget),
    );
    if cancel.is_cancelled() {
        return;
    }
    merge_in_place(v, mid, is_less);
}

/// Merges the sorted runs `v[..mid]` and `v[mid..]` without a buffer.
///
/// Whenever the head of the right run is smaller, it is moved to the front and
/// the displaced left element is shifted into the right run at its sorted
/// position. That shift makes the merge O(n²) in the worst case; a buffered
/// merge would be linear, but this one keeps every element inside the slice
/// where an observer can see it.
///
/// The merge is not interruptible.
pub fn merge_in_place<T, F>(v: &[T], mid: usize, is_less: &F)
where
    T: Sortable,
    F: Fn(&T, &T) -> bool,
{
    let end = v.len();
    let mut left = 0;
    while left < mid && mid < end {
        if is_less(&v[mid], &v[left]) {
            let displaced = v[left].take();
            v[left].assign_move(v[mid].take());
            let mut i = mid + 1;
            while i < end && is_less(&v[i], &displaced) {
                v[i - 1].assign_move(v[i].take());
                i += 1;
            }
            v[i - 1].assign_move(displaced);
        }
        left += 1;
    }
}

/// Heapsort with a max-heap.
///
/// Not interruptible: cancellation is checked once, before the heap is built.
pub fn heap_sort<T, F>(v: &[T], is_less: &F, cancel: &CancelFlag)
where
    T: Sortable,
    F: Fn(&T, &T) -> bool,
{
    if v.len() < 2 || cancel.is_cancelled() {
        return;
    }
    for root in (0..v.len() / 2).rev() {
        sift_down(v, root, v.len(), is_less);
    }
    for end in (1..v.len()).rev() {
        v[0].swap(&v[end]);
        sift_down(v, 0, end, is_less);
    }
}

fn sift_down<T, F>(v: &[T], mut root: usize, end: usize, is_less: &F)
where
    T: Sortable,
    F: Fn(&T, &T) -> bool,
{
    loop {
        let mut child = 2 * root + 1;
        if child >= end {
            return;
        }
        if child + 1 < end && is_less(&v[child], &v[child + 1]) {
            child += 1;
        }
        if !is_less(&v[root], &v[child]) {
            return;
        }
        v[root].swap(&v[child]);
        root = child;
    }
}

/// Introsort: quicksort limited to `floor(log2(n))` levels, then heapsort.
///
/// The depth limit and the thread budget are independent: forking consumes
/// budget, recursion consumes depth.
pub fn intro_sort<T, F>(v: &[T], is_less: &F, cancel: &CancelFlag, budget: usize)
where
    T: Sortable,
    F: Fn(&T, &T) -> bool + Sync,
{
    if v.len() < 2 {
        return;
    }
    let max_depth = v.len().ilog2();
    intro_sort_rec(v, is_less, cancel, max_depth, budget);
}

fn intro_sort_rec<T, F>(v: &[T], is_less: &F, cancel: &CancelFlag, depth: u32, budget: usize)
where
    T: Sortable,
    F: Fn(&T, &T) -> bool + Sync,
{
    if v.len() < 2 || cancel.is_cancelled() {
        return;
    }
    if depth == 0 {
        heap_sort(v, is_less, cancel);
        return;
    }
    let mid = pivot_and_partition(v, is_less, cancel);
    let (left, rest) = v.split_at(mid);
    let right = &rest[1..];
    fork_join(
        budget,
        |budget| intro_sort_rec(left, is_less, cancel, depth - 1, budget),
        |budget| intro_sort_rec(right, is_less, cancel, depth - 1, budget),
    );
}
