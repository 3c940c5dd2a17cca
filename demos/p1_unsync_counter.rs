//! Pattern 1: Unsynchronized Shared Counter
//! Ten threads increment one integer with no coordination at all.
//!
//! Run with: cargo run --bin p1_unsync_counter

use counter_patterns::{unsync_counter, INCREMENTS_PER_WORKER, WORKERS};

fn main() {
    println!("=== Unsynchronized Shared Counter ===\n");
    println!(
        "{} workers x {} increments each; {} if nothing were lost",
        WORKERS,
        INCREMENTS_PER_WORKER,
        WORKERS * INCREMENTS_PER_WORKER
    );
    let count = unsync_counter();
    let lost = ((WORKERS * INCREMENTS_PER_WORKER) as u64).saturating_sub(count);
    println!("Lost updates this run: {}", lost);

    println!("\n=== Key Points ===");
    println!("1. Plain read-modify-write from many threads is a data race");
    println!("2. Two threads can read the same value and overwrite each other's add");
    println!("3. The final count is non-deterministic, almost always short of the total");
    println!("4. Miri and ThreadSanitizer flag this demo; that is the demonstration");
}
