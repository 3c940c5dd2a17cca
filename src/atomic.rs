//! Pattern 3: atomic accumulation.
//!
//! Each increment is a hardware-level `fetch_add` on an atomic integer.
//! No lock, no waiting: contended adds still serialize in the cache
//! hierarchy, but far more cheaply than a mutex acquisition.

use std::sync::atomic::{AtomicU64, Ordering};
use std::thread;

use crate::{INCREMENTS_PER_WORKER, WORKERS};

/// Spawns `workers` threads, each performing `increments` atomic adds,
/// and returns the final count: always `workers * increments`.
///
/// `Relaxed` is enough: no other data is published through the counter,
/// and the scope's join orders the final load after every worker's last
/// `fetch_add`.
pub fn run(workers: usize, increments: usize) -> u64 {
    let counter = AtomicU64::new(0);

    thread::scope(|s| {
        for _ in 0..workers {
            s.spawn(|| {
                for _ in 0..increments {
                    counter.fetch_add(1, Ordering::Relaxed);
                }
            });
        }
    });

    counter.load(Ordering::Relaxed)
}

/// Entry point: runs the canonical fan-out and prints the final count.
pub fn atomic_counter() -> u64 {
    let count = run(WORKERS, INCREMENTS_PER_WORKER);
    println!("AtomicCounter: {}", count);
    count
}
