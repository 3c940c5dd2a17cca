//! Pattern 2: lock-protected accumulation.
//!
//! The same workload as [`crate::unsync`], but every increment happens
//! under a mutex, so at most one worker mutates the counter at a time and
//! no update can be lost. Which waiter acquires the lock next is up to
//! the OS; only the count of increments is guaranteed, not their order.

use std::sync::Mutex;
use std::thread;

use crate::{INCREMENTS_PER_WORKER, WORKERS};

/// Spawns `workers` threads, each taking the lock once per increment,
/// and returns the final count: always `workers * increments`.
///
/// The guard from `lock()` scopes the critical section to a single
/// `+= 1` and releases on drop, so no path can leave the lock held.
pub fn run(workers: usize, increments: usize) -> u64 {
    let counter = Mutex::new(0u64);

    thread::scope(|s| {
        for _ in 0..workers {
            s.spawn(|| {
                for _ in 0..increments {
                    let mut count = counter.lock().unwrap();
                    *count += 1;
                }
            });
        }
    });

    // No worker can panic while holding the guard, so the lock is never
    // poisoned and both unwraps are unreachable in practice.
    counter.into_inner().unwrap()
}

/// Entry point: runs the canonical fan-out and prints the final count.
pub fn mutex_counter() -> u64 {
    let count = run(WORKERS, INCREMENTS_PER_WORKER);
    println!("MutexCounter: {}", count);
    count
}
