//! Algorithm selection and timed dispatch.

use std::fmt;
use std::str::FromStr;
use std::time::{Duration, Instant};

use log::{info, warn};

use crate::cancel::CancelFlag;
use crate::element::Sortable;
use crate::error::SortError;
use crate::sort;

/// Every algorithm the engine can run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Algorithm {
    BubbleSort,
    BubbleSortRecursive,
    CombSort,
    ShakerSort,
    InsertionSort,
    BinaryInsertionSort,
    ShellSort,
    SelectionSort,
    OddEvenSort,
    CycleSort,
    GnomeSort,
    GnomeSortJump,
    BogoSort,
    BozoSort,
    RadixSort,
    RadixSortCopy,
    RadixSortInPlace,
    QuickSort,
    MergeSort,
    HeapSort,
    IntroSort,
    LibrarySort,
    LibraryStableSort,
}

impl Algorithm {
    pub const ALL: [Algorithm; 23] = [
        Algorithm::BubbleSort,
        Algorithm::BubbleSortRecursive,
        Algorithm::CombSort,
        Algorithm::ShakerSort,
        Algorithm::InsertionSort,
        Algorithm::BinaryInsertionSort,
        Algorithm::ShellSort,
        Algorithm::SelectionSort,
        Algorithm::OddEvenSort,
        Algorithm::CycleSort,
        Algorithm::GnomeSort,
        Algorithm::GnomeSortJump,
        Algorithm::BogoSort,
        Algorithm::BozoSort,
        Algorithm::RadixSort,
        Algorithm::RadixSortCopy,
        Algorithm::RadixSortInPlace,
        Algorithm::QuickSort,
        Algorithm::MergeSort,
        Algorithm::HeapSort,
        Algorithm::IntroSort,
        Algorithm::LibrarySort,
        Algorithm::LibraryStableSort,
    ];

    /// Canonical name, as accepted by [`FromStr`].
    pub fn name(self) -> &'static str {
        match self {
            Algorithm::BubbleSort => "bubblesort",
            Algorithm::BubbleSortRecursive => "bubblesort-recursive",
            Algorithm::CombSort => "combsort",
            Algorithm::ShakerSort => "shakersort",
            Algorithm::InsertionSort => "insertionsort",
            Algorithm::BinaryInsertionSort => "binary-insertionsort",
            Algorithm::ShellSort => "shellsort",
            Algorithm::SelectionSort => "selectionsort",
            Algorithm::OddEvenSort => "odd-even-sort",
            Algorithm::CycleSort => "cyclesort",
            Algorithm::GnomeSort => "gnomesort",
            Algorithm::GnomeSortJump => "gnomesort-jump",
            Algorithm::BogoSort => "bogosort",
            Algorithm::BozoSort => "bozosort",
            Algorithm::RadixSort => "radixsort",
            Algorithm::RadixSortCopy => "radixsort-copy",
            Algorithm::RadixSortInPlace => "radixsort-in-place",
            Algorithm::QuickSort => "quicksort",
            Algorithm::MergeSort => "mergesort",
            Algorithm::HeapSort => "heapsort",
            Algorithm::IntroSort => "introsort",
            Algorithm::LibrarySort => "std-sort",
            Algorithm::LibraryStableSort => "std-stable-sort",
        }
    }

    /// True for the algorithms that use the thread budget.
    ///
    /// Odd-even sort always runs two threads and ignores the budget.
    pub fn is_parallel(self) -> bool {
        matches!(
            self,
            Algorithm::RadixSortInPlace
                | Algorithm::QuickSort
                | Algorithm::MergeSort
                | Algorithm::IntroSort
        )
    }

    /// False for the algorithms that, once started, run to completion.
    ///
    /// Merge sort stops between merges but never inside one.
    pub fn is_interruptible(self) -> bool {
        !matches!(
            self,
            Algorithm::HeapSort | Algorithm::LibrarySort | Algorithm::LibraryStableSort
        )
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Algorithm {
    type Err = SortError;

    /// Case-insensitive; `_` and `-` are interchangeable.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase().replace('_', "-");
        Algorithm::ALL
            .into_iter()
            .find(|algorithm| algorithm.name() == wanted)
            .ok_or_else(|| SortError::UnknownAlgorithm(s.to_string()))
    }
}

/// Per-run knobs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunOptions {
    /// Thread budget for the parallel algorithms.
    pub threads: usize,
    /// Key width for the radix sorts.
    pub radix_bits: u32,
}

impl Default for RunOptions {
    fn default() -> Self {
        Self {
            threads: 0,
            radix_bits: u32::BITS,
        }
    }
}

/// Outcome of one run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunReport {
    pub algorithm: Algorithm,
    pub elapsed: Duration,
    /// The cancel flag was set when the run returned.
    pub cancelled: bool,
}

/// Sorts `v` ascending with `algorithm`, timing the run.
///
/// The cancel flag is reset first; setting it during the run stops the
/// algorithm at its next check.
pub fn run<T: Sortable>(
    v: &[T],
    algorithm: Algorithm,
    options: &RunOptions,
    cancel: &CancelFlag,
) -> RunReport {
    run_by(v, algorithm, &|a: &T, b: &T| a.less(b), options, cancel)
}

/// Like [`run`], ordering by `is_less`.
///
/// The radix sorts order by key bits regardless of `is_less`; the in-place
/// radix sort uses it only for its insertion-sort tails.
pub fn run_by<T, F>(
    v: &[T],
    algorithm: Algorithm,
    is_less: &F,
    options: &RunOptions,
    cancel: &CancelFlag,
) -> RunReport
where
    T: Sortable,
    F: Fn(&T, &T) -> bool + Sync,
{
    cancel.reset();
    let budget = options.threads;
    let bits = options.radix_bits;
    if algorithm.is_parallel() {
        info!("{algorithm} started on {} elements, thread budget {budget}", v.len());
    } else {
        info!("{algorithm} started on {} elements", v.len());
    }

    let start = Instant::now();
    match algorithm {
        Algorithm::BubbleSort => sort::bubble_sort(v, is_less, cancel),
        Algorithm::BubbleSortRecursive => sort::bubble_sort_recursive(v, is_less, cancel),
        Algorithm::CombSort => sort::comb_sort(v, is_less, cancel),
        Algorithm::ShakerSort => sort::shaker_sort(v, is_less, cancel),
        Algorithm::InsertionSort => sort::insertion_sort(v, is_less, cancel),
        Algorithm::BinaryInsertionSort => sort::binary_insertion_sort(v, is_less, cancel),
        Algorithm::ShellSort => sort::shell_sort(v, is_less, cancel),
        Algorithm::SelectionSort => sort::selection_sort(v, is_less, cancel),
        Algorithm::OddEvenSort => sort::odd_even_sort(v, is_less, cancel),
        Algorithm::CycleSort => sort::cycle_sort(v, is_less, cancel),
        Algorithm::GnomeSort => sort::gnome_sort(v, is_less, cancel),
        Algorithm::GnomeSortJump => sort::gnome_sort_jump(v, is_less, cancel),
        Algorithm::BogoSort => sort::bogo_sort(v, is_less, cancel),
        Algorithm::BozoSort => sort::bozo_sort(v, is_less, cancel),
        Algorithm::RadixSort => sort::radix_sort(v, bits, cancel),
        Algorithm::RadixSortCopy => sort::radix_sort_copy(v, bits, cancel),
        Algorithm::RadixSortInPlace => sort::radix_sort_in_place(v, bits, is_less, cancel, budget),
        Algorithm::QuickSort => sort::quick_sort(v, is_less, cancel, budget),
        Algorithm::MergeSort => sort::merge_sort(v, is_less, cancel, budget),
        Algorithm::HeapSort => sort::heap_sort(v, is_less, cancel),
        Algorithm::IntroSort => sort::intro_sort(v, is_less, cancel, budget),
        Algorithm::LibrarySort => sort::library_sort(v, is_less, cancel),
        Algorithm::LibraryStableSort => sort::library_stable_sort(v, is_less, cancel),
    }
    let elapsed = start.elapsed();

    let cancelled = cancel.is_cancelled();
    if cancelled {
        warn!("{algorithm} cancelled after {elapsed:?}");
    } else {
        info!("{algorithm} finished in {elapsed:?}");
    }
    RunReport {
        algorithm,
        elapsed,
        cancelled,
    }
}
