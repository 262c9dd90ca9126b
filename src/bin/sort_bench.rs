//! Headless driver: time sorting algorithms on instrumented sequences.
//!
//! Run with: cargo run --release --bin sort_bench
//!
//! Usage:
//!   sort_bench                         Run every algorithm except bogo/bozo sort
//!   sort_bench quicksort mergesort     Run selected algorithms
//!   sort_bench all -n 8                Include bogo/bozo sort (keep -n tiny)
//!   sort_bench shellsort --reverse     Start from reversed order
//!   sort_bench bubblesort --cancel-after-ms 200
//!
//! Set RUST_LOG=debug to see fork and termination decisions.

use std::sync::mpsc::{self, RecvTimeoutError};
use std::thread;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use env_logger::Env;
use instrumented_sort::{Algorithm, CancelFlag, EngineConfig, RunReport, Sequence};
use log::info;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

#[derive(Parser)]
#[command(name = "sort_bench")]
#[command(about = "Time instrumented sorting algorithms")]
struct Args {
    /// Algorithms to run by name, or `all`
    algorithms: Vec<String>,

    /// Number of elements (1..=4095)
    #[arg(short = 'n', long, default_value_t = 600)]
    elements: usize,

    /// Random seed; every algorithm sorts the same keys
    #[arg(short, long, default_value_t = 12345)]
    seed: u64,

    /// Compare delay in nanoseconds
    #[arg(long, default_value_t = 500)]
    compare_delay_ns: u64,

    /// Assign delay in nanoseconds
    #[arg(long, default_value_t = 2000)]
    assign_delay_ns: u64,

    /// Thread budget for the parallel algorithms
    #[arg(short, long, default_value_t = 4)]
    threads: usize,

    /// Key width for the radix sorts
    #[arg(long, default_value_t = 13)]
    bits: u32,

    /// Largest random key
    #[arg(long, default_value_t = 800)]
    max_key: i32,

    /// Sort descending input instead of random input
    #[arg(long)]
    reverse: bool,

    /// Cancel each run after this many milliseconds
    #[arg(long)]
    cancel_after_ms: Option<u64>,
}

fn selected_algorithms(names: &[String]) -> Result<Vec<Algorithm>> {
    if names.is_empty() {
        return Ok(Algorithm::ALL
            .into_iter()
            .filter(|a| !matches!(a, Algorithm::BogoSort | Algorithm::BozoSort))
            .collect());
    }
    if names.iter().any(|name| name.eq_ignore_ascii_case("all")) {
        return Ok(Algorithm::ALL.to_vec());
    }
    names
        .iter()
        .map(|name| {
            name.parse::<Algorithm>()
                .with_context(|| format!("choose from: {}", algorithm_names()))
        })
        .collect()
}

fn algorithm_names() -> String {
    Algorithm::ALL
        .iter()
        .map(|a| a.name())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Runs one algorithm, cancelling it from a timer thread if it outlives `limit`.
fn timed_run(
    sequence: &Sequence,
    algorithm: Algorithm,
    cancel: &CancelFlag,
    limit: Option<Duration>,
) -> RunReport {
    let Some(limit) = limit else {
        return sequence.sort(algorithm, cancel);
    };
    let (finished, wait) = mpsc::channel::<()>();
    thread::scope(|s| {
        s.spawn(move || {
            if let Err(RecvTimeoutError::Timeout) = wait.recv_timeout(limit) {
                cancel.cancel();
            }
        });
        let report = sequence.sort(algorithm, cancel);
        drop(finished);
        report
    })
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    let config = EngineConfig {
        elements: args.elements,
        compare_delay: Duration::from_nanos(args.compare_delay_ns),
        assign_delay: Duration::from_nanos(args.assign_delay_ns),
        threads: args.threads,
        radix_bits: args.bits,
        max_key: args.max_key,
    };
    let algorithms = selected_algorithms(&args.algorithms)?;
    let sequence = Sequence::new(config).context("invalid engine configuration")?;
    let cancel = CancelFlag::new();
    let limit = args.cancel_after_ms.map(Duration::from_millis);

    info!(
        "{} elements, compare {:?}, assign {:?}, thread budget {}",
        sequence.len(),
        sequence.config().compare_delay,
        sequence.config().assign_delay,
        sequence.threads()
    );

    let mut reports = Vec::with_capacity(algorithms.len());
    for algorithm in algorithms {
        let mut rng = ChaCha8Rng::seed_from_u64(args.seed);
        sequence.randomize(&mut rng);
        if args.reverse {
            sequence.sort(Algorithm::LibrarySort, &cancel);
            sequence.reverse();
        }
        let report = timed_run(&sequence, algorithm, &cancel, limit);
        let sorted = sequence.verify();
        reports.push((report, sorted));
    }

    println!();
    println!("{:<22} {:>12} {:>8} {:>10}", "algorithm", "elapsed", "sorted", "cancelled");
    for (report, sorted) in &reports {
        println!(
            "{:<22} {:>10.3}ms {:>8} {:>10}",
            report.algorithm.name(),
            report.elapsed.as_secs_f64() * 1000.0,
            if *sorted { "yes" } else { "no" },
            if report.cancelled { "yes" } else { "" }
        );
    }
    Ok(())
}
