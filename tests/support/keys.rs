#![allow(dead_code)]

use instrumented_sort::Element;
use rand::Rng;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use rustc_hash::FxHashMap;
use std::time::Duration;

/// Uniform random keys in `0..=max_key`.
pub fn random_keys(n: usize, max_key: i32, seed: u64) -> Vec<i32> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    random_keys_with_rng(n, max_key, &mut rng)
}

pub fn random_keys_with_rng<R: Rng + ?Sized>(n: usize, max_key: i32, rng: &mut R) -> Vec<i32> {
    (0..n).map(|_| rng.gen_range(0..=max_key)).collect()
}

/// Keys drawn from only a handful of distinct values.
pub fn few_unique_keys(n: usize, seed: u64) -> Vec<i32> {
    random_keys(n, 4, seed)
}

pub fn descending_keys(n: usize) -> Vec<i32> {
    (0..n as i32).rev().collect()
}

/// Ascending run with a few random pairs exchanged.
pub fn nearly_sorted_keys(n: usize, swaps: usize, seed: u64) -> Vec<i32> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut keys: Vec<i32> = (0..n as i32).collect();
    if n > 1 {
        for _ in 0..swaps {
            let i = rng.gen_range(0..n);
            let j = rng.gen_range(0..n);
            keys.swap(i, j);
        }
    }
    keys
}

/// Elements without artificial latency.
pub fn elements(keys: &[i32]) -> Vec<Element> {
    keys.iter().map(|&k| Element::new(k)).collect()
}

/// Elements that sleep on every comparison, for runs that must last long
/// enough to be cancelled.
pub fn slow_elements(keys: &[i32], compare_delay: Duration) -> Vec<Element> {
    keys.iter()
        .map(|&k| Element::with_delays(k, compare_delay, Duration::ZERO))
        .collect()
}

pub fn keys_of(v: &[Element]) -> Vec<i32> {
    v.iter().map(Element::key).collect()
}

pub fn sorted(keys: &[i32]) -> Vec<i32> {
    let mut out = keys.to_vec();
    out.sort_unstable();
    out
}

/// Key multiset, for checking that a run lost or duplicated nothing.
pub fn multiset(keys: &[i32]) -> FxHashMap<i32, usize> {
    let mut counts = FxHashMap::default();
    for &key in keys {
        *counts.entry(key).or_insert(0) += 1;
    }
    counts
}

pub fn is_permutation(a: &[i32], b: &[i32]) -> bool {
    a.len() == b.len() && multiset(a) == multiset(b)
}
