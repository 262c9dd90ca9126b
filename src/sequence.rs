//! The driver-owned sequence of elements and the controls a driver exposes.

use rand::Rng;

use crate::cancel::CancelFlag;
use crate::config::EngineConfig;
use crate::element::{Element, Sortable};
use crate::engine::{self, Algorithm, RunOptions, RunReport};
use crate::error::{Result, SortError};
use crate::sort;

/// A fixed-length sequence of [`Element`]s sharing one configuration.
///
/// All controls take `&self` except the thread budget, so a renderer can read
/// the elements while another thread sorts them.
#[derive(Debug)]
pub struct Sequence {
    elements: Vec<Element>,
    config: EngineConfig,
}

impl Sequence {
    /// Creates `config.elements` elements with key 0 and the configured delays.
    pub fn new(config: EngineConfig) -> Result<Self> {
        config.validate()?;
        let elements = (0..config.elements)
            .map(|_| Element::with_delays(0, config.compare_delay, config.assign_delay))
            .collect();
        Ok(Self { elements, config })
    }

    /// Creates a sequence holding `keys`; `config.elements` is taken from their count.
    ///
    /// Every key must lie in `0..2^radix_bits`, the range the radix sorts order
    /// correctly.
    pub fn from_keys(keys: &[i32], config: EngineConfig) -> Result<Self> {
        let config = EngineConfig {
            elements: keys.len(),
            ..config
        };
        config.validate()?;
        let limit = 1u64 << config.radix_bits;
        let out_of_range = |key: i32| u64::try_from(key).map_or(true, |k| k >= limit);
        if let Some(&key) = keys.iter().find(|&&key| out_of_range(key)) {
            return Err(SortError::invalid(
                "keys",
                format!("key {key} is outside 0..{limit} for {} radix bits", config.radix_bits),
            ));
        }
        let elements = keys
            .iter()
            .map(|&key| Element::with_delays(key, config.compare_delay, config.assign_delay))
            .collect();
        Ok(Self { elements, config })
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn elements(&self) -> &[Element] {
        &self.elements
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Snapshot of the keys in order.
    pub fn keys(&self) -> Vec<i32> {
        self.elements.iter().map(Element::key).collect()
    }

    pub fn threads(&self) -> usize {
        self.config.threads
    }

    pub fn set_threads(&mut self, threads: usize) {
        self.config.threads = threads;
    }

    /// Draws fresh keys from `0..=max_key`, leaves verification mode and
    /// restores the configured delays.
    pub fn randomize<R: Rng + ?Sized>(&self, rng: &mut R) {
        for element in &self.elements {
            element.set_key(rng.gen_range(0..=self.config.max_key));
        }
        for element in &self.elements {
            element.set_verification(false);
            element.set_delays(self.config.compare_delay, self.config.assign_delay);
        }
    }

    /// Rewrites the keys as `0, 1, 2, ...`, each copied from its predecessor
    /// and incremented.
    pub fn fill_ascending(&self) {
        let Some((first, rest)) = self.elements.split_first() else {
            return;
        };
        first.set_key(0);
        let mut prev = first;
        for element in rest {
            element.assign(prev);
            element.increment();
            prev = element;
        }
    }

    pub fn reverse(&self) {
        sort::reverse(&self.elements);
    }

    pub fn set_verification(&self, enabled: bool) {
        for element in &self.elements {
            element.set_verification(enabled);
        }
    }

    /// Enables verification mode and checks the order.
    ///
    /// While verifying, the compared flags stay set on the adjacent pairs found
    /// in order and are cleared where the scan hit an inversion or a tie.
    pub fn verify(&self) -> bool {
        self.set_verification(true);
        self.is_sorted()
    }

    pub fn is_sorted(&self) -> bool {
        sort::is_sorted_by(&self.elements, &Element::less)
    }

    pub fn is_sorted_recursive(&self) -> bool {
        sort::is_sorted_recursive_by(&self.elements, &Element::less)
    }

    /// Runs `algorithm` with this sequence's thread budget and radix width.
    pub fn sort(&self, algorithm: Algorithm, cancel: &CancelFlag) -> RunReport {
        let options = RunOptions {
            threads: self.config.threads,
            radix_bits: self.config.radix_bits,
        };
        engine::run(&self.elements, algorithm, &options, cancel)
    }
}
