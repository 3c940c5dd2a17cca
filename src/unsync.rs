//! Pattern 1: unsynchronized accumulation -- the broken baseline.
//!
//! Every worker does a plain read-modify-write on the same integer with
//! no coordination. Two workers can read the same value, both add one,
//! and write back the same sum: one update is lost. The final count is
//! non-deterministic and usually below the true total. Nothing here is a
//! bug to fix; the lost updates are the demonstration.

use std::cell::UnsafeCell;
use std::thread;

use crate::{INCREMENTS_PER_WORKER, WORKERS};

/// A counter cell that claims to be shareable across threads.
///
/// `UnsafeCell` is the only way to get shared mutation past the compiler,
/// and it is deliberately not `Sync`. The impl below overrides that:
/// concurrent `+= 1` through the cell is a data race, which is exactly
/// what this module exists to show. Miri and ThreadSanitizer flag every
/// multi-worker use of this type.
struct RacyCell(UnsafeCell<u64>);

unsafe impl Sync for RacyCell {}

impl RacyCell {
    fn new(v: u64) -> Self {
        RacyCell(UnsafeCell::new(v))
    }

    /// Plain non-atomic read-increment-write. Racy when called from more
    /// than one thread at a time.
    unsafe fn increment(&self) {
        *self.0.get() += 1;
    }

    /// Only sound once all writers have been joined.
    unsafe fn get(&self) -> u64 {
        *self.0.get()
    }
}

/// Spawns `workers` threads, each performing `increments` unsynchronized
/// increments on one shared cell, and returns whatever survived.
///
/// The result is at most `workers * increments` and typically less once
/// more than one worker runs. The cell lives only for this call, so
/// repeated runs start from zero.
pub fn run(workers: usize, increments: usize) -> u64 {
    let counter = RacyCell::new(0);

    thread::scope(|s| {
        for _ in 0..workers {
            s.spawn(|| {
                for _ in 0..increments {
                    unsafe { counter.increment() };
                }
            });
        }
    });

    // All workers are joined once the scope ends, so this read does not race.
    unsafe { counter.get() }
}

/// Entry point: runs the canonical fan-out and prints the final count.
pub fn unsync_counter() -> u64 {
    let count = run(WORKERS, INCREMENTS_PER_WORKER);
    println!("UnsyncCounter: {}", count);
    count
}
