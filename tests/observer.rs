//! The observer's view of a sequence: flags, verification and concurrent reads.

mod support;

use instrumented_sort::{
    Algorithm, CancelFlag, Element, EngineConfig, Sequence, SortError, Sortable,
};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::thread;
use std::time::Duration;
use support::keys::{elements, keys_of, random_keys, sorted};

fn quiet_config(elements: usize) -> EngineConfig {
    EngineConfig {
        elements,
        compare_delay: Duration::ZERO,
        assign_delay: Duration::ZERO,
        ..EngineConfig::default()
    }
}

#[test]
fn test_renderer_reads_while_sorting() {
    let sequence = Sequence::new(EngineConfig {
        compare_delay: Duration::from_micros(2),
        ..quiet_config(500)
    })
    .unwrap();
    sequence.randomize(&mut ChaCha8Rng::seed_from_u64(1));
    let input = sequence.keys();

    let done = AtomicBool::new(false);
    let seen = AtomicUsize::new(0);
    thread::scope(|s| {
        s.spawn(|| {
            while !done.load(Ordering::Acquire) {
                for element in sequence.elements() {
                    if element.consume_compared() || element.consume_assigned() {
                        seen.fetch_add(1, Ordering::Relaxed);
                    }
                    assert!((0..=800).contains(&element.key()));
                }
                thread::yield_now();
            }
        });
        sequence.sort(Algorithm::QuickSort, &CancelFlag::new());
        done.store(true, Ordering::Release);
    });

    assert_eq!(sequence.keys(), sorted(&input));
    assert!(seen.load(Ordering::Relaxed) > 0);
}

#[test]
fn test_verify_sorted_sequence_marks_everything() {
    let sequence = Sequence::from_keys(&[1, 2, 3, 4, 5, 6], quiet_config(6)).unwrap();
    assert!(sequence.verify());
    for _ in 0..2 {
        // Sticky while verifying.
        assert!(sequence.elements().iter().all(Element::consume_compared));
    }
    sequence.set_verification(false);
    assert!(!sequence.elements().iter().any(Element::consume_compared));
}

#[test]
fn test_verification_equal_keys_clear_flags() {
    let v = elements(&[7, 7]);
    for element in &v {
        element.set_verification(true);
    }
    v[0].less(&v[1]);
    assert!(!v[0].consume_compared());
    assert!(!v[1].consume_compared());
}

#[test]
fn test_concurrent_symmetric_operations() {
    let v = elements(&[1, 2]);
    thread::scope(|s| {
        s.spawn(|| {
            for _ in 0..10_000 {
                v[0].less(&v[1]);
                v[0].swap(&v[1]);
            }
        });
        s.spawn(|| {
            for _ in 0..10_000 {
                v[1].less(&v[0]);
                v[1].swap(&v[0]);
            }
        });
    });
    let mut out = keys_of(&v);
    out.sort_unstable();
    assert_eq!(out, vec![1, 2]);
}

#[test]
fn test_invalid_configuration() {
    let err = Sequence::new(quiet_config(5000)).unwrap_err();
    assert!(matches!(err, SortError::InvalidParameter { ref parameter, .. } if parameter == "elements"));

    let err = Sequence::from_keys(
        &random_keys(10, 5, 0),
        EngineConfig {
            radix_bits: 4,
            ..quiet_config(10)
        },
    )
    .unwrap_err();
    assert!(err.to_string().contains("radix_bits"));
}
