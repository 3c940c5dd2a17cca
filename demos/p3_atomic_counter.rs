//! Pattern 3: Atomic Shared Counter
//! Every increment is a hardware fetch_add on an atomic integer.
//!
//! Run with: cargo run --bin p3_atomic_counter

use counter_patterns::{atomic_counter, INCREMENTS_PER_WORKER, WORKERS};

fn main() {
    println!("=== Atomic Shared Counter ===\n");
    println!(
        "{} workers x {} increments each, no lock in sight",
        WORKERS, INCREMENTS_PER_WORKER
    );
    let count = atomic_counter();
    assert_eq!(count, (WORKERS * INCREMENTS_PER_WORKER) as u64);

    println!("\n=== Key Points ===");
    println!("1. fetch_add makes the whole read-modify-write one indivisible step");
    println!("2. Relaxed ordering suffices when only the count itself matters");
    println!("3. Cheaper than a mutex under contention on most schedulers");
    println!("4. Needs atomic support for the integer width on the target");
}
