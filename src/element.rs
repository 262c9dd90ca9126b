//! The instrumented sort element.
//!
//! An [`Element`] is an integer key wrapped in its own lock together with the
//! state an observer needs to draw it: whether it was recently compared or
//! assigned, and whether the sequence is being verified. Every comparison and
//! copy sleeps for a configurable delay so that the cost of an algorithm's
//! element traffic becomes visible in wall-clock time.
//!
//! Operations touching two elements take both locks in address order, so two
//! threads running `a.less(b)` and `b.less(a)` at the same time cannot deadlock
//! and never observe a half-updated pair.

use parking_lot::{Mutex, MutexGuard};
use std::ptr;
use std::time::Duration;

/// Factor applied to the compare delay while verification is enabled.
pub const VERIFICATION_DELAY_FACTOR: u32 = 5;

/// The element operations the sorting library is written against.
///
/// Mutation goes through `&self`: implementors synchronise internally, which
/// lets a renderer read the sequence while an algorithm rearranges it and lets
/// fork-join algorithms hand disjoint sub-slices to worker threads.
///
/// `Clone` is a copy-construction and may be as expensive as [`Sortable::assign`].
pub trait Sortable: Clone + Send + Sync {
    /// Returns `self < other`, recording the comparison.
    fn less(&self, other: &Self) -> bool;

    /// Exchanges the values of two slots.
    fn swap(&self, other: &Self);

    /// Copies `src` into `self`.
    fn assign(&self, src: &Self);

    /// Moves a detached value into `self`.
    fn assign_move(&self, src: Self);

    /// Moves the value out of `self`, leaving the slot in its moved-from state.
    fn take(&self) -> Self;

    /// Returns the key bits selected by `mask`.
    fn bitmask(&self, mask: u32) -> u32;
}

#[derive(Debug, Clone, Copy)]
struct State {
    key: i32,
    compare_delay: Duration,
    assign_delay: Duration,
    recently_compared: bool,
    recently_assigned: bool,
    verification: bool,
}

impl State {
    fn with_key(key: i32, compare_delay: Duration, assign_delay: Duration) -> Self {
        Self {
            key,
            compare_delay,
            assign_delay,
            recently_compared: false,
            recently_assigned: false,
            verification: false,
        }
    }

    /// The stored delay is never scaled in place, so toggling verification is idempotent.
    #[inline]
    fn effective_compare_delay(&self) -> Duration {
        if self.verification {
            self.compare_delay * VERIFICATION_DELAY_FACTOR
        } else {
            self.compare_delay
        }
    }
}

/// A sortable integer key with its own lock, artificial latency and observer flags.
#[derive(Debug)]
pub struct Element {
    state: Mutex<State>,
}

impl Element {
    /// Creates an element with no artificial delay.
    pub fn new(key: i32) -> Self {
        Self::with_delays(key, Duration::ZERO, Duration::ZERO)
    }

    pub fn with_delays(key: i32, compare_delay: Duration, assign_delay: Duration) -> Self {
        Self {
            state: Mutex::new(State::with_key(key, compare_delay, assign_delay)),
        }
    }

    pub fn key(&self) -> i32 {
        self.state.lock().key
    }

    /// Overwrites the key without marking the element as assigned.
    pub fn set_key(&self, key: i32) {
        self.state.lock().key = key;
    }

    /// Sets the unscaled compare delay and the assign delay.
    pub fn set_delays(&self, compare_delay: Duration, assign_delay: Duration) {
        let mut state = self.state.lock();
        state.compare_delay = compare_delay;
        state.assign_delay = assign_delay;
    }

    /// The compare delay currently in force (scaled while verifying).
    pub fn compare_delay(&self) -> Duration {
        self.state.lock().effective_compare_delay()
    }

    pub fn assign_delay(&self) -> Duration {
        self.state.lock().assign_delay
    }

    pub fn increment(&self) {
        self.state.lock().key += 1;
    }

    /// Reads the compared flag; clears it unless verification is enabled.
    pub fn consume_compared(&self) -> bool {
        let mut state = self.state.lock();
        let compared = state.recently_compared;
        if !state.verification {
            state.recently_compared = false;
        }
        compared
    }

    /// Reads and clears the assigned flag.
    pub fn consume_assigned(&self) -> bool {
        let mut state = self.state.lock();
        std::mem::replace(&mut state.recently_assigned, false)
    }

    /// Switches verification mode, clearing both observer flags.
    pub fn set_verification(&self, enabled: bool) {
        let mut state = self.state.lock();
        state.recently_compared = false;
        state.recently_assigned = false;
        state.verification = enabled;
    }

    pub fn verification_enabled(&self) -> bool {
        self.state.lock().verification
    }

    /// Locks two distinct elements, lower address first.
    fn lock_pair<'a>(
        a: &'a Element,
        b: &'a Element,
    ) -> (MutexGuard<'a, State>, MutexGuard<'a, State>) {
        debug_assert!(!ptr::eq(a, b));
        if (a as *const Element) < (b as *const Element) {
            let guard_a = a.state.lock();
            let guard_b = b.state.lock();
            (guard_a, guard_b)
        } else {
            let guard_b = b.state.lock();
            let guard_a = a.state.lock();
            (guard_a, guard_b)
        }
    }
}

impl Default for Element {
    fn default() -> Self {
        Self::new(0)
    }
}

impl Clone for Element {
    /// Copy-constructs a new element; the copy is marked as assigned and the
    /// call sleeps for the assign delay.
    fn clone(&self) -> Self {
        let mut copy = *self.state.lock();
        copy.recently_compared = false;
        copy.recently_assigned = true;
        pause(copy.assign_delay);
        Self {
            state: Mutex::new(copy),
        }
    }
}

impl Sortable for Element {
    fn less(&self, other: &Self) -> bool {
        let (result, delay) = if ptr::eq(self, other) {
            let mut state = self.state.lock();
            state.recently_compared = !state.verification;
            (false, state.effective_compare_delay())
        } else {
            let (mut a, mut b) = Self::lock_pair(self, other);
            // While verifying, the flags survive only when `other < self`. The
            // sortedness scan compares each element with its predecessor, so that
            // marks the adjacent pairs found in order.
            let flag = !a.verification || b.key < a.key;
            a.recently_compared = flag;
            b.recently_compared = flag;
            (a.key < b.key, a.effective_compare_delay())
        };
        pause(delay);
        result
    }

    fn swap(&self, other: &Self) {
        if ptr::eq(self, other) {
            return;
        }
        let (mut a, mut b) = Self::lock_pair(self, other);
        std::mem::swap(&mut a.key, &mut b.key);
        a.recently_assigned = true;
        b.recently_assigned = true;
    }

    fn assign(&self, src: &Self) {
        if ptr::eq(self, src) {
            return;
        }
        let delay = {
            let (mut dst, src) = Self::lock_pair(self, src);
            dst.key = src.key;
            dst.recently_assigned = true;
            dst.assign_delay
        };
        // The lock covers the mutation only, not the simulated copy cost.
        pause(delay);
    }

    fn assign_move(&self, src: Self) {
        let key = src.state.into_inner().key;
        let mut dst = self.state.lock();
        dst.key = key;
        dst.recently_assigned = true;
    }

    fn take(&self) -> Self {
        let mut state = self.state.lock();
        let mut moved = *state;
        moved.recently_compared = false;
        moved.recently_assigned = true;
        state.key = 0;
        state.recently_compared = false;
        state.recently_assigned = false;
        Self {
            state: Mutex::new(moved),
        }
    }

    fn bitmask(&self, mask: u32) -> u32 {
        (self.state.lock().key as u32) & mask
    }
}

#[inline]
fn pause(delay: Duration) {
    if !delay.is_zero() {
        std::thread::sleep(delay);
    }
}
