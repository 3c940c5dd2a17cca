//! Pattern 4: channel-mediated accumulation.
//!
//! Workers never touch the counter. Each one sends unit "count me"
//! signals into a rendezvous channel, and a single consumer increments a
//! counter only it can reach. No lock, no atomic: exclusive ownership
//! makes the mutation trivially safe. Of the four strategies this is the
//! one that scales to real designs, because the thing being transferred
//! can grow from `()` into actual work.

use std::thread;

use crossbeam::channel;

use crate::{INCREMENTS_PER_WORKER, WORKERS};

/// Spawns `workers` producer threads that each send `increments` unit
/// signals; the calling thread consumes them into a private counter and
/// returns it: always `workers * increments`.
///
/// `bounded(0)` gives the channel no buffer, so every send blocks until
/// the consumer takes the message. Delivery is serialized while the
/// workers still run in parallel between sends. Signals from one worker
/// arrive in the order it sent them; signals from different workers
/// interleave arbitrarily.
pub fn run(workers: usize, increments: usize) -> u64 {
    let (tx, rx) = channel::bounded::<()>(0);
    let mut count = 0u64;

    thread::scope(|s| {
        for _ in 0..workers {
            let tx = tx.clone();
            s.spawn(move || {
                for _ in 0..increments {
                    // The receiver outlives every sender, so this cannot fail.
                    tx.send(()).unwrap();
                }
            });
        }

        // The consumer loop ends when the channel disconnects, which
        // happens once every worker has dropped its Sender clone. The
        // orchestrator's own clone must go first or the loop never ends.
        drop(tx);

        for _ in rx.iter() {
            count += 1;
        }
    });

    count
}

/// Entry point: runs the canonical fan-out and prints the final count.
pub fn channel_counter() -> u64 {
    let count = run(WORKERS, INCREMENTS_PER_WORKER);
    println!("ChannelCounter: {}", count);
    count
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counts_exactly() {
        assert_eq!(run(4, 1_000), 4_000);
    }

    #[test]
    fn test_canonical_fanout() {
        let expected = (WORKERS * INCREMENTS_PER_WORKER) as u64;
        assert_eq!(run(WORKERS, INCREMENTS_PER_WORKER), expected);
    }

    #[test]
    fn test_edge_shapes() {
        // Zero producers disconnect the channel immediately; the
        // consumer's first recv returns Err and the loop never runs.
        assert_eq!(run(0, 1_000), 0);
        assert_eq!(run(4, 0), 0);
        assert_eq!(run(1, 1), 1);
    }

    #[test]
    fn test_repeated_runs_start_fresh() {
        for _ in 0..3 {
            assert_eq!(run(2, 500), 1_000);
        }
    }
}
