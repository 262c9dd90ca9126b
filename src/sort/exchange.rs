//! Exchange sorts: bubble, comb, shaker and gnome variants.
//!
//! All of these only ever swap two slots, so stopping between any two steps
//! leaves a valid permutation.

use crate::cancel::CancelFlag;
use crate::element::Sortable;

/// Bubble sort; each pass shrinks the unsorted tail by one and a swap-free pass ends the sort.
pub fn bubble_sort<T, F>(v: &[T], is_less: &F, cancel: &CancelFlag)
where
    T: Sortable,
    F: Fn(&T, &T) -> bool,
{
    let mut end = v.len();
    let mut swapped = true;
    while swapped && end > 1 && !cancel.is_cancelled() {
        swapped = false;
        for i in 1..end {
            if cancel.is_cancelled() {
                return;
            }
            if is_less(&v[i], &v[i - 1]) {
                v[i - 1].swap(&v[i]);
                swapped = true;
            }
        }
        end -= 1;
    }
}

/// Bubble sort where both the pass and the repetition are recursive.
///
/// A pass recurses from the front to the end of the slice; if it swapped
/// anything the sort re-enters itself on the slice minus its last element.
pub fn bubble_sort_recursive<T, F>(v: &[T], is_less: &F, cancel: &CancelFlag)
where
    T: Sortable,
    F: Fn(&T, &T) -> bool,
{
    if v.len() < 2 || cancel.is_cancelled() {
        return;
    }
    if !bubble_pass_recursive(v, is_less, cancel) {
        bubble_sort_recursive(&v[..v.len() - 1], is_less, cancel);
    }
}

/// Returns true when the pass made no swap (or was cancelled).
fn bubble_pass_recursive<T, F>(v: &[T], is_less: &F, cancel: &CancelFlag) -> bool
where
    T: Sortable,
    F: Fn(&T, &T) -> bool,
{
    if v.len() < 2 || cancel.is_cancelled() {
        return true;
    }
    let mut sorted = true;
    if is_less(&v[1], &v[0]) {
        v[0].swap(&v[1]);
        sorted = false;
    }
    bubble_pass_recursive(&v[1..], is_less, cancel) && sorted
}

/// Comb sort with shrink factor 10/13.
pub fn comb_sort<T, F>(v: &[T], is_less: &F, cancel: &CancelFlag)
where
    T: Sortable,
    F: Fn(&T, &T) -> bool,
{
    let len = v.len();
    if len < 2 {
        return;
    }
    let mut gap = len;
    let mut sorted = false;
    while !sorted && !cancel.is_cancelled() {
        if gap > 1 {
            gap = gap * 10 / 13;
        }
        // Only a gap-1 pass can prove the slice sorted.
        sorted = gap <= 1;
        gap = gap.max(1);

        for i in 0..len - gap {
            if cancel.is_cancelled() {
                return;
            }
            if is_less(&v[i + gap], &v[i]) {
                v[i].swap(&v[i + gap]);
                sorted = false;
            }
        }
    }
}

/// Cocktail shaker sort: alternating forward and backward bubble passes.
pub fn shaker_sort<T, F>(v: &[T], is_less: &F, cancel: &CancelFlag)
where
    T: Sortable,
    F: Fn(&T, &T) -> bool,
{
    if v.len() < 2 {
        return;
    }
    let mut lo = 0;
    let mut hi = v.len() - 1;
    while lo < hi && !cancel.is_cancelled() {
        for i in lo..hi {
            if cancel.is_cancelled() {
                return;
            }
            if is_less(&v[i + 1], &v[i]) {
                v[i].swap(&v[i + 1]);
            }
        }
        hi -= 1;

        for i in (lo + 1..=hi).rev() {
            if cancel.is_cancelled() {
                return;
            }
            if is_less(&v[i], &v[i - 1]) {
                v[i - 1].swap(&v[i]);
            }
        }
        lo += 1;
    }
}

/// Gnome sort: walk forward, and after each swap step back by one.
pub fn gnome_sort<T, F>(v: &[T], is_less: &F, cancel: &CancelFlag)
where
    T: Sortable,
    F: Fn(&T, &T) -> bool,
{
    let len = v.len();
    let mut i = 0;
    while i + 1 < len {
        if cancel.is_cancelled() {
            return;
        }
        if is_less(&v[i + 1], &v[i]) {
            v[i].swap(&v[i + 1]);
            i = if i > 0 { i - 1 } else { i + 1 };
        } else {
            i += 1;
        }
    }
}

/// Gnome sort that remembers its frontier.
///
/// After sinking an element back into the sorted prefix the walk resumes at the
/// frontier instead of re-walking the prefix, which makes this an insertion sort
/// built from adjacent swaps.
pub fn gnome_sort_jump<T, F>(v: &[T], is_less: &F, cancel: &CancelFlag)
where
    T: Sortable,
    F: Fn(&T, &T) -> bool,
{
    let len = v.len();
    let mut i = 0;
    let mut frontier = 0;
    while i + 1 < len {
        if cancel.is_cancelled() {
            return;
        }
        if is_less(&v[i + 1], &v[i]) {
            v[i].swap(&v[i + 1]);
            i = if i > 0 { i - 1 } else { i + 1 };
        } else {
            frontier += 1;
            i = frontier;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::element::Element;
    use crate::sort::test_util::*;

    type Cmp = fn(&Element, &Element) -> bool;
    type SortFn = fn(&[Element], &Cmp, &CancelFlag);

    fn all() -> Vec<(&'static str, SortFn)> {
        vec![
            ("bubble", bubble_sort as SortFn),
            ("bubble_recursive", bubble_sort_recursive as SortFn),
            ("comb", comb_sort as SortFn),
            ("shaker", shaker_sort as SortFn),
            ("gnome", gnome_sort as SortFn),
            ("gnome_jump", gnome_sort_jump as SortFn),
        ]
    }

    #[test]
    fn test_exchange_sorts_small_inputs() {
        let cases: Vec<Vec<i32>> = vec![
            vec![],
            vec![7],
            vec![2, 1],
            vec![5, 3, 4, 1, 2],
            vec![3, 3, 1, 1, 2, 2],
            vec![1, 2, 3, 4, 5, 6],
            vec![9, 8, 7, 6, 5, 4, 3, 2, 1, 0],
        ];
        let cancel = CancelFlag::new();
        let cmp: Cmp = less;
        for (name, sort) in all() {
            for input in &cases {
                let v = elements(input);
                sort(&v, &cmp, &cancel);
                assert_eq!(keys(&v), sorted(input), "{name} failed on {input:?}");
            }
        }
    }

    #[test]
    fn test_exchange_sorts_scrambled() {
        let cancel = CancelFlag::new();
        let cmp: Cmp = less;
        for (name, sort) in all() {
            for seed in 0..4 {
                let input = scrambled(150, 40, seed);
                let v = elements(&input);
                sort(&v, &cmp, &cancel);
                assert_eq!(keys(&v), sorted(&input), "{name} failed for seed={seed}");
            }
        }
    }

    #[test]
    fn test_exchange_sorts_descending_comparator() {
        let cancel = CancelFlag::new();
        let greater = |a: &Element, b: &Element| b.less(a);
        let input = scrambled(60, 100, 9);
        let mut expected = sorted(&input);
        expected.reverse();

        let v = elements(&input);
        comb_sort(&v, &greater, &cancel);
        assert_eq!(keys(&v), expected);

        let v = elements(&input);
        gnome_sort_jump(&v, &greater, &cancel);
        assert_eq!(keys(&v), expected);
    }

    #[test]
    fn test_cancelled_before_start_leaves_input() {
        let cancel = CancelFlag::new();
        cancel.cancel();
        let cmp: Cmp = less;
        let input = vec![4, 2, 3, 1];
        for (name, sort) in all() {
            let v = elements(&input);
            sort(&v, &cmp, &cancel);
            assert_eq!(keys(&v), input, "{name} touched the slice after cancel");
        }
    }
}
