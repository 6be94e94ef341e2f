//! Fetch generation tagging.

use std::sync::atomic::{AtomicU64, Ordering};

/// Monotonic counter closing the last-write-wins race between overlapping
/// fetches: each fetch takes a ticket when it starts, and a response is
/// applied only while its ticket is still the newest.
#[derive(Debug, Default)]
pub struct FetchGeneration {
    counter: AtomicU64,
}

impl FetchGeneration {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new fetch, superseding any still in flight.
    pub fn begin(&self) -> u64 {
        self.counter.fetch_add(1, Ordering::SeqCst) + 1
    }

    pub fn is_current(&self, ticket: u64) -> bool {
        self.counter.load(Ordering::SeqCst) == ticket
    }
}
