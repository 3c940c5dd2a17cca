//! Pattern 4: Channel-Mediated Counter
//! Workers send signals over a rendezvous channel; one consumer counts.
//!
//! Run with: cargo run --bin p4_channel_counter

use counter_patterns::{channel_counter, INCREMENTS_PER_WORKER, WORKERS};

fn main() {
    println!("=== Channel-Mediated Counter ===\n");
    println!(
        "{} producers x {} unit signals each into a zero-capacity channel",
        WORKERS, INCREMENTS_PER_WORKER
    );
    let count = channel_counter();
    assert_eq!(count, (WORKERS * INCREMENTS_PER_WORKER) as u64);

    println!("\n=== Key Points ===");
    println!("1. Only the consumer ever touches the counter: no lock, no atomic");
    println!("2. A zero-capacity channel makes every send wait for the receiver");
    println!("3. Dropping the last Sender disconnects the channel and ends the loop");
    println!("4. Transfer ownership instead of sharing state; this shape scales");
}
