//! Odd-even transposition sort on two threads.
//!
//! One worker repeatedly compares the even pairs `(0,1), (2,3), ...` and the
//! other the odd pairs `(1,2), (3,4), ...`, both at the same time. Each worker
//! owns a quiet counter that counts down once per swap-free pass; any swap
//! resets both counters. A controller polls the counters and stops the workers
//! once both have reached zero.

use std::sync::atomic::{AtomicBool, AtomicI32, Ordering};
use std::thread;
use std::time::Duration;

use crate::cancel::CancelFlag;
use crate::element::Sortable;

/// Consecutive swap-free passes each phase must make before the sort ends.
///
/// A swap in either phase resets both counters to this value, not only the
/// swapping phase's own, so both at zero means neither phase has seen a
/// change since its last full passes.
const QUIET_PASSES: i32 = 4;

const POLL_INTERVAL: Duration = Duration::from_micros(2);

/// Sorts with an even-phase and an odd-phase worker running concurrently.
///
/// The two phases never touch the same pair at once, but they do share
/// elements; the per-element locks keep each compare and swap atomic.
pub fn odd_even_sort<T, F>(v: &[T], is_less: &F, cancel: &CancelFlag)
where
    T: Sortable,
    F: Fn(&T, &T) -> bool + Sync,
{
    if v.len() < 2 || cancel.is_cancelled() {
        return;
    }
    let done = AtomicBool::new(false);
    let quiet = [AtomicI32::new(QUIET_PASSES), AtomicI32::new(QUIET_PASSES)];

    thread::scope(|s| {
        let workers = [0, 1].map(|start| {
            let (done, quiet) = (&done, &quiet);
            s.spawn(move || phase(v, start, is_less, cancel, done, quiet))
        });

        let mut polls = 0u64;
        while !cancel.is_cancelled() {
            if quiet.iter().all(|q| q.load(Ordering::Acquire) <= 0) {
                break;
            }
            polls += 1;
            thread::sleep(POLL_INTERVAL);
        }
        done.store(true, Ordering::Release);
        log::debug!(
            "odd-even sort stopped after {polls} polls (cancelled: {})",
            cancel.is_cancelled()
        );

        for worker in workers {
            if let Err(panic) = worker.join() {
                std::panic::resume_unwind(panic);
            }
        }
    });
}

/// Passes over the pairs starting at index `start` until told to stop.
fn phase<T, F>(
    v: &[T],
    start: usize,
    is_less: &F,
    cancel: &CancelFlag,
    done: &AtomicBool,
    quiet: &[AtomicI32; 2],
) where
    T: Sortable,
    F: Fn(&T, &T) -> bool,
{
    while !done.load(Ordering::Acquire) && !cancel.is_cancelled() {
        let mut swapped = false;
        let mut i = start;
        while i + 1 < v.len() {
            if cancel.is_cancelled() {
                return;
            }
            if is_less(&v[i + 1], &v[i]) {
                v[i].swap(&v[i + 1]);
                // Reset before the next comparison so the controller can never see
                // two zero counters while a swap is pending.
                for counter in quiet {
                    counter.store(QUIET_PASSES, Ordering::Release);
                }
                swapped = true;
            }
            i += 2;
        }
        if !swapped {
            let _ = quiet[start].fetch_update(Ordering::AcqRel, Ordering::Acquire, |count| {
                (count > 0).then(|| count - 1)
            });
        }
    }
}
