//! Pattern 2: Mutex-Protected Shared Counter
//! Every increment happens inside a scoped lock acquisition.
//!
//! Run with: cargo run --bin p2_mutex_counter

use counter_patterns::{mutex_counter, INCREMENTS_PER_WORKER, WORKERS};

fn main() {
    println!("=== Mutex-Protected Shared Counter ===\n");
    println!(
        "{} workers x {} increments each, one lock around the count",
        WORKERS, INCREMENTS_PER_WORKER
    );
    let count = mutex_counter();
    assert_eq!(count, (WORKERS * INCREMENTS_PER_WORKER) as u64);

    println!("\n=== Key Points ===");
    println!("1. The MutexGuard scopes the critical section to a single increment");
    println!("2. The guard releases on drop, on every exit path");
    println!("3. Waiters are unordered; only the count is guaranteed, not who adds when");
    println!("4. Every increment lands: the result is exactly workers x increments");
}
