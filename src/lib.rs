//! An instrumented sorting engine.
//!
//! This crate sorts sequences of [`Element`]s: integer keys that carry their own
//! lock, an artificial compare/assign latency, and flags telling an observer
//! which elements were recently compared or written. The algorithms in [`sort`]
//! are generic over [`Sortable`] and mutate the sequence through shared
//! references, so a renderer can watch a sort while it runs and the parallel
//! algorithms can hand disjoint halves to worker threads.
//!
//! Every algorithm polls a [`CancelFlag`]; a cancelled run stops promptly and
//! leaves the sequence as a permutation of its input.
//!
//! # Example
//!
//! ```
//! use instrumented_sort::{run, Algorithm, CancelFlag, Element, RunOptions};
//!
//! let keys = [5, 3, 4, 1, 2];
//! let elements: Vec<Element> = keys.iter().map(|&k| Element::new(k)).collect();
//!
//! let options = RunOptions { threads: 4, ..RunOptions::default() };
//! let report = run(&elements, Algorithm::QuickSort, &options, &CancelFlag::new());
//!
//! assert!(!report.cancelled);
//! let sorted: Vec<i32> = elements.iter().map(Element::key).collect();
//! assert_eq!(sorted, vec![1, 2, 3, 4, 5]);
//! ```

pub mod cancel;
pub mod config;
mod element;
mod engine;
mod error;
mod sequence;
pub mod sort;

pub use cancel::CancelFlag;
pub use config::EngineConfig;
pub use element::{Element, Sortable, VERIFICATION_DELAY_FACTOR};
pub use engine::{run, run_by, Algorithm, RunOptions, RunReport};
pub use error::{Result, SortError};
pub use sequence::Sequence;
