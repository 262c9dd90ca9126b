//! Cooperative cancellation for running sorts.
//!
//! Algorithms never stop on their own accord: they poll a [`CancelFlag`] between
//! element operations and return early once it is set. The sequence is left as a
//! permutation of what it held when the run began.

use std::sync::atomic::{AtomicBool, Ordering};

/// A stop request that any thread may raise and every algorithm loop polls.
#[derive(Debug, Default)]
pub struct CancelFlag {
    cancelled: AtomicBool,
}

impl CancelFlag {
    /// Creates a flag in the "keep running" state.
    pub const fn new() -> Self {
        Self {
            cancelled: AtomicBool::new(false),
        }
    }

    /// Requests that the current run stop as soon as possible.
    #[inline]
    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::Release);
    }

    /// Clears a previous request. Only the engine does this, at the start of a run.
    #[inline]
    pub fn reset(&self) {
        self.cancelled.store(false, Ordering::Release);
    }

    #[inline]
    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::Acquire)
    }
}

static GLOBAL: CancelFlag = CancelFlag::new();

/// The process-wide flag used by interactive drivers.
///
/// Input handlers set it; [`crate::run`] resets it when a new run starts.
pub fn global() -> &'static CancelFlag {
    &GLOBAL
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flag_starts_clear() {
        let flag = CancelFlag::new();
        assert!(!flag.is_cancelled());
    }

    #[test]
    fn test_cancel_then_reset() {
        let flag = CancelFlag::default();
        flag.cancel();
        assert!(flag.is_cancelled());
        flag.cancel();
        assert!(flag.is_cancelled());
        flag.reset();
        assert!(!flag.is_cancelled());
    }

    #[test]
    fn test_cancel_visible_across_threads() {
        let flag = CancelFlag::new();
        std::thread::scope(|s| {
            s.spawn(|| flag.cancel());
        });
        assert!(flag.is_cancelled());
    }

    #[test]
    fn test_global_is_shared() {
        assert!(std::ptr::eq(global(), global()));
    }
}
