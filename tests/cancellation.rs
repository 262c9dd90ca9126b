//! Cooperative cancellation: prompt return, no lost or duplicated keys.

mod support;

use instrumented_sort::{cancel, run, Algorithm, CancelFlag, RunOptions};
use std::thread;
use std::time::Duration;
use support::keys::{is_permutation, keys_of, random_keys, slow_elements, sorted};

const COMPARE_DELAY: Duration = Duration::from_micros(50);
const CANCEL_AFTER: Duration = Duration::from_millis(5);
const PROMPT: Duration = Duration::from_secs(1);

#[test]
fn test_cancel_mid_run_every_algorithm() {
    let input = random_keys(200, 800, 4);
    let options = RunOptions {
        threads: 4,
        radix_bits: 13,
    };
    for algorithm in Algorithm::ALL {
        let v = slow_elements(&input, COMPARE_DELAY);
        let cancel = CancelFlag::new();
        let report = thread::scope(|s| {
            s.spawn(|| {
                thread::sleep(CANCEL_AFTER);
                cancel.cancel();
            });
            run(&v, algorithm, &options, &cancel)
        });
        let out = keys_of(&v);
        assert!(is_permutation(&out, &input), "{algorithm} lost keys");
        if !report.cancelled {
            // Finished before the cancel arrived.
            assert_eq!(out, sorted(&input), "{algorithm}");
        }
        assert!(report.elapsed < PROMPT, "{algorithm} took {:?}", report.elapsed);
    }
}

#[test]
fn test_slow_sorts_report_cancellation() {
    let input = random_keys(300, 800, 8);
    for algorithm in [
        Algorithm::BubbleSort,
        Algorithm::SelectionSort,
        Algorithm::OddEvenSort,
        Algorithm::BogoSort,
    ] {
        let v = slow_elements(&input, COMPARE_DELAY);
        let cancel = CancelFlag::new();
        let report = thread::scope(|s| {
            s.spawn(|| {
                thread::sleep(CANCEL_AFTER);
                cancel.cancel();
            });
            run(&v, algorithm, &RunOptions::default(), &cancel)
        });
        assert!(report.cancelled, "{algorithm}");
        assert!(is_permutation(&keys_of(&v), &input), "{algorithm}");
    }
}

#[test]
fn test_global_flag() {
    let flag = cancel::global();
    let input = random_keys(300, 800, 15);
    let v = slow_elements(&input, COMPARE_DELAY);
    let report = thread::scope(|s| {
        s.spawn(|| {
            thread::sleep(CANCEL_AFTER);
            cancel::global().cancel();
        });
        run(&v, Algorithm::GnomeSort, &RunOptions::default(), flag)
    });
    assert!(report.cancelled);
    assert!(is_permutation(&keys_of(&v), &input));

    // The next run starts from a cleared flag.
    let report = run(&v, Algorithm::QuickSort, &RunOptions::default(), flag);
    assert!(!report.cancelled);
    assert_eq!(keys_of(&v), sorted(&input));
}
