//! Insertion-family and selection-family sorts.
//!
//! Several of these lift one element out of the slice while they make room for
//! it. When cancelled they still write the carried element back into the open
//! slot before returning, so no key is ever lost or duplicated.

use super::upper_bound;
use crate::cancel::CancelFlag;
use crate::element::Sortable;

/// Ciura's gap sequence (OEIS A102549).
const SHELL_GAPS: [usize; 8] = [701, 301, 132, 57, 23, 10, 4, 1];

/// Insertion sort with copy semantics: copy out, shift with copies, copy back.
pub fn insertion_sort<T, F>(v: &[T], is_less: &F, cancel: &CancelFlag)
where
    T: Sortable,
    F: Fn(&T, &T) -> bool,
{
    for i in 1..v.len() {
        if cancel.is_cancelled() {
            return;
        }
        let value = v[i].clone();
        let mut hole = i;
        while hole > 0 && !cancel.is_cancelled() && is_less(&value, &v[hole - 1]) {
            v[hole].assign(&v[hole - 1]);
            hole -= 1;
        }
        if hole != i {
            v[hole].assign(&value);
        }
    }
}

/// Insertion sort that finds the insertion point by binary search and rotates
/// the element into place.
pub fn binary_insertion_sort<T, F>(v: &[T], is_less: &F, cancel: &CancelFlag)
where
    T: Sortable,
    F: Fn(&T, &T) -> bool,
{
    for i in 1..v.len() {
        if cancel.is_cancelled() {
            return;
        }
        let pos = upper_bound(&v[..i], &v[i], is_less);
        rotate_right_one(&v[pos..=i]);
    }
}

/// Moves the last element to the front, shifting the rest up by one.
fn rotate_right_one<T: Sortable>(v: &[T]) {
    let Some(last) = v.len().checked_sub(1) else {
        return;
    };
    if last == 0 {
        return;
    }
    let carried = v[last].take();
    for i in (0..last).rev() {
        v[i + 1].assign_move(v[i].take());
    }
    v[0].assign_move(carried);
}

/// Shell sort over [`SHELL_GAPS`], moving elements rather than copying them.
pub fn shell_sort<T, F>(v: &[T], is_less: &F, cancel: &CancelFlag)
where
    T: Sortable,
    F: Fn(&T, &T) -> bool,
{
    let len = v.len();
    for gap in SHELL_GAPS.into_iter().filter(|&gap| gap < len) {
        for i in gap..len {
            if cancel.is_cancelled() {
                return;
            }
            if !is_less(&v[i], &v[i - gap]) {
                continue;
            }
            let value = v[i].take();
            let mut hole = i;
            while hole >= gap && !cancel.is_cancelled() && is_less(&value, &v[hole - gap]) {
                v[hole].assign_move(v[hole - gap].take());
                hole -= gap;
            }
            v[hole].assign_move(value);
        }
    }
}

/// Selection sort: repeatedly swap the minimum of the unsorted suffix to its front.
///
/// Only a strictly smaller element replaces the running minimum, so the first of
/// several equal minima is chosen.
pub fn selection_sort<T, F>(v: &[T], is_less: &F, cancel: &CancelFlag)
where
    T: Sortable,
    F: Fn(&T, &T) -> bool,
{
    let len = v.len();
    for i in 0..len.saturating_sub(1) {
        if cancel.is_cancelled() {
            return;
        }
        let mut min = i;
        for j in i + 1..len {
            if cancel.is_cancelled() {
                return;
            }
            if is_less(&v[j], &v[min]) {
                min = j;
            }
        }
        v[i].swap(&v[min]);
    }
}

/// Cycle sort: writes every element directly to its final position.
///
/// The final position of an element is the cycle start plus the number of
/// strictly smaller elements after it; equal elements already placed there are
/// skipped so that duplicates cannot cycle forever. While a cycle is in
/// progress the slot at the cycle start is logically empty and the displaced
/// element is carried in a temporary.
pub fn cycle_sort<T, F>(v: &[T], is_less: &F, cancel: &CancelFlag)
where
    T: Sortable,
    F: Fn(&T, &T) -> bool,
{
    let len = v.len();
    for start in 0..len.saturating_sub(1) {
        if cancel.is_cancelled() {
            return;
        }
        let Some(mut pos) = final_position(v, start, &v[start], is_less, cancel) else {
            return;
        };
        if pos == start {
            continue;
        }

        let carried = v[start].clone();
        pos = skip_equal(v, pos, &carried, is_less);
        v[pos].swap(&carried);

        while pos != start {
            match final_position(v, start, &carried, is_less, cancel) {
                Some(next) => pos = next,
                None => {
                    // Close the open slot before giving up.
                    v[start].assign_move(carried);
                    return;
                }
            }
            if pos == start {
                v[start].assign_move(carried);
                break;
            }
            pos = skip_equal(v, pos, &carried, is_less);
            v[pos].swap(&carried);
        }
    }
}

/// `start` plus the count of elements after `start` that are less than `item`;
/// `None` when cancelled mid-count.
fn final_position<T, F>(
    v: &[T],
    start: usize,
    item: &T,
    is_less: &F,
    cancel: &CancelFlag,
) -> Option<usize>
where
    F: Fn(&T, &T) -> bool,
{
    let mut pos = start;
    for other in &v[start + 1..] {
        if cancel.is_cancelled() {
            return None;
        }
        if is_less(other, item) {
            pos += 1;
        }
    }
    Some(pos)
}

fn skip_equal<T, F>(v: &[T], mut pos: usize, item: &T, is_less: &F) -> usize
where
    F: Fn(&T, &T) -> bool,
{
    while !is_less(&v[pos], item) && !is_less(item, &v[pos]) {
        pos += 1;
    }
    pos
}
