//! Four ways to increment a shared counter from concurrent workers.
//!
//! Each strategy module spawns a group of worker threads that together
//! perform the same workload -- `WORKERS` threads doing
//! `INCREMENTS_PER_WORKER` increments each -- and differs only in how the
//! shared count is protected:
//!
//! - [`unsync`]: no protection at all; a deliberate data race that loses
//!   updates (the broken baseline the other three fix)
//! - [`mutex`]: every increment inside a scoped lock acquisition
//! - [`atomic`]: hardware `fetch_add` on an atomic integer
//! - [`channel`]: workers send unit signals over a rendezvous channel to
//!   a single consumer that owns the counter exclusively
//!
//! Every strategy exposes a parameterized `run(workers, increments)` core
//! plus a parameterless `*_counter()` entry point that runs the canonical
//! 10 x 10_000 fan-out, prints one line to stdout, and returns the final
//! count. Counters live for a single invocation; there is no global state
//! shared between runs, so independent calls never interfere.

pub mod atomic;
pub mod channel;
pub mod mutex;
pub mod unsync;

/// Number of worker threads each strategy spawns.
pub const WORKERS: usize = 10;

/// Number of increments each worker performs.
pub const INCREMENTS_PER_WORKER: usize = 10_000;

pub use atomic::atomic_counter;
pub use channel::channel_counter;
pub use mutex::mutex_counter;
pub use unsync::unsync_counter;
