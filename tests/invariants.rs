//! Cross-strategy invariants over the public surface.
//!
//! Every correct strategy must count exactly `workers * increments`, on
//! every run, with a freshly-initialized counter per invocation. The
//! unsynchronized strategy is exercised only by its own ignored test in
//! `src/unsync.rs`, never here.

use std::thread;

use counter_patterns::{atomic, channel, mutex, INCREMENTS_PER_WORKER, WORKERS};
use proptest::prelude::*;

const EXPECTED: u64 = (WORKERS * INCREMENTS_PER_WORKER) as u64;

#[test]
fn test_mutex_entry_point_counts_exactly() {
    assert_eq!(mutex::mutex_counter(), EXPECTED);
}

#[test]
fn test_atomic_entry_point_counts_exactly() {
    assert_eq!(atomic::atomic_counter(), EXPECTED);
}

#[test]
fn test_channel_entry_point_counts_exactly() {
    assert_eq!(channel::channel_counter(), EXPECTED);
}

#[test]
fn test_entry_points_are_deterministic_across_runs() {
    for _ in 0..3 {
        assert_eq!(mutex::run(WORKERS, INCREMENTS_PER_WORKER), EXPECTED);
        assert_eq!(atomic::run(WORKERS, INCREMENTS_PER_WORKER), EXPECTED);
        assert_eq!(channel::run(WORKERS, INCREMENTS_PER_WORKER), EXPECTED);
    }
}

#[test]
fn test_concurrent_invocations_do_not_interfere() {
    // Two call sites running the same strategy at once must each see
    // their own counter.
    thread::scope(|s| {
        let a = s.spawn(|| mutex::run(4, 5_000));
        let b = s.spawn(|| mutex::run(4, 5_000));
        assert_eq!(a.join().unwrap(), 20_000);
        assert_eq!(b.join().unwrap(), 20_000);
    });

    thread::scope(|s| {
        let a = s.spawn(|| atomic::run(4, 5_000));
        let b = s.spawn(|| atomic::run(4, 5_000));
        assert_eq!(a.join().unwrap(), 20_000);
        assert_eq!(b.join().unwrap(), 20_000);
    });
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn prop_correct_strategies_count_exactly(
        workers in 0usize..8,
        increments in 0usize..500,
    ) {
        let expected = (workers * increments) as u64;
        prop_assert_eq!(mutex::run(workers, increments), expected);
        prop_assert_eq!(atomic::run(workers, increments), expected);
        prop_assert_eq!(channel::run(workers, increments), expected);
    }
}
