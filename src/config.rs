//! Engine settings: sequence size, artificial latencies and parallelism.

use std::time::Duration;

use crate::error::{Result, SortError};

/// Largest sequence the engine accepts.
pub const MAX_ELEMENTS: usize = 4095;

pub const DEFAULT_ELEMENTS: usize = 600;
pub const DEFAULT_COMPARE_DELAY: Duration = Duration::from_nanos(500);
pub const DEFAULT_ASSIGN_DELAY: Duration = Duration::from_nanos(2000);
pub const DEFAULT_THREADS: usize = 4;
pub const DEFAULT_RADIX_BITS: u32 = 13;
pub const DEFAULT_MAX_KEY: i32 = 800;

/// Configuration for a sorting session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineConfig {
    /// Number of elements in the sequence.
    pub elements: usize,

    /// Artificial latency of one comparison (scaled up while verifying).
    pub compare_delay: Duration,

    /// Artificial latency of one copy-assignment or copy-construction.
    pub assign_delay: Duration,

    /// Thread budget handed to the parallel algorithms.
    ///
    /// Each fork consumes two units, so 4 allows two levels of forking and
    /// 0 or 1 keeps everything on the calling thread.
    pub threads: usize,

    /// Key width examined by the radix sorts.
    pub radix_bits: u32,

    /// Random keys are drawn from `0..=max_key`.
    pub max_key: i32,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            elements: DEFAULT_ELEMENTS,
            compare_delay: DEFAULT_COMPARE_DELAY,
            assign_delay: DEFAULT_ASSIGN_DELAY,
            threads: DEFAULT_THREADS,
            radix_bits: DEFAULT_RADIX_BITS,
            max_key: DEFAULT_MAX_KEY,
        }
    }
}

impl EngineConfig {
    /// Checks ranges and that every key fits in the radix width.
    pub fn validate(&self) -> Result<()> {
        if self.elements == 0 || self.elements > MAX_ELEMENTS {
            return Err(SortError::invalid(
                "elements",
                format!("must be between 1 and {MAX_ELEMENTS}, got {}", self.elements),
            ));
        }
        if self.radix_bits == 0 || self.radix_bits > u32::BITS {
            return Err(SortError::invalid(
                "radix_bits",
                format!("must be between 1 and {}, got {}", u32::BITS, self.radix_bits),
            ));
        }
        if self.max_key < 0 {
            return Err(SortError::invalid(
                "max_key",
                format!("must be non-negative, got {}", self.max_key),
            ));
        }
        if u64::from(self.max_key.unsigned_abs()) >= 1u64 << self.radix_bits {
            return Err(SortError::invalid(
                "radix_bits",
                format!(
                    "{} bits cannot represent keys up to {}",
                    self.radix_bits, self.max_key
                ),
            ));
        }
        Ok(())
    }
}
