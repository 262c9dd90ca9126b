//! Randomised "sorts" that shuffle until the sequence happens to be ordered.
//!
//! Expected running time is factorial in the length; they exist to be watched,
//! and are only practical for a handful of elements.

use rand::Rng;

use super::is_sorted_by;
use crate::cancel::CancelFlag;
use crate::element::Sortable;

/// Reshuffles the whole sequence after every failed sortedness check.
pub fn bogo_sort<T, F>(v: &[T], is_less: &F, cancel: &CancelFlag)
where
    T: Sortable,
    F: Fn(&T, &T) -> bool,
{
    bogo_sort_with_rng(v, is_less, cancel, &mut rand::thread_rng());
}

pub fn bogo_sort_with_rng<T, F, R>(v: &[T], is_less: &F, cancel: &CancelFlag, rng: &mut R)
where
    T: Sortable,
    F: Fn(&T, &T) -> bool,
    R: Rng + ?Sized,
{
    let len = v.len();
    if len < 2 {
        return;
    }
    while !cancel.is_cancelled() && !is_sorted_by(v, is_less) {
        for slot in v {
            if cancel.is_cancelled() {
                return;
            }
            slot.swap(&v[rng.gen_range(0..len)]);
        }
    }
}

/// Swaps one random pair after every failed sortedness check.
pub fn bozo_sort<T, F>(v: &[T], is_less: &F, cancel: &CancelFlag)
where
    T: Sortable,
    F: Fn(&T, &T) -> bool,
{
    bozo_sort_with_rng(v, is_less, cancel, &mut rand::thread_rng());
}

pub fn bozo_sort_with_rng<T, F, R>(v: &[T], is_less: &F, cancel: &CancelFlag, rng: &mut R)
where
    T: Sortable,
    F: Fn(&T, &T) -> bool,
    R: Rng + ?Sized,
{
    let len = v.len();
    if len < 2 {
        return;
    }
    while !cancel.is_cancelled() && !is_sorted_by(v, is_less) {
        let i = rng.gen_range(0..len);
        let j = rng.gen_range(0..len);
        v[i].swap(&v[j]);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sort::test_util::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_bogo_sort_tiny() {
        let cancel = CancelFlag::new();
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        for input in [vec![], vec![1], vec![2, 1], vec![5, 3, 4, 1, 2]] {
            let v = elements(&input);
            bogo_sort_with_rng(&v, &less, &cancel, &mut rng);
            assert_eq!(keys(&v), sorted(&input));
        }
    }

    #[test]
    fn test_bozo_sort_tiny() {
        let cancel = CancelFlag::new();
        let mut rng = ChaCha8Rng::seed_from_u64(11);
        for input in [vec![], vec![1], vec![3, 3, 1], vec![5, 3, 4, 1, 2]] {
            let v = elements(&input);
            bozo_sort_with_rng(&v, &less, &cancel, &mut rng);
            assert_eq!(keys(&v), sorted(&input));
        }
    }

    #[test]
    fn test_bogo_sort_stops_when_cancelled() {
        let cancel = CancelFlag::new();
        cancel.cancel();
        let input = scrambled(500, 1000, 1);
        let v = elements(&input);
        bogo_sort(&v, &less, &cancel);
        bozo_sort(&v, &less, &cancel);
        assert_eq!(keys(&v), input);
    }
}
