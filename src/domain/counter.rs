//! Process-wide visit counter.

use std::sync::atomic::{AtomicU64, Ordering};

/// Running count of user visits.
///
/// The counter is only reachable through [`increment`](Self::increment) and
/// [`current`](Self::current), so every mutation is a single atomic
/// fetch-and-add. Values never decrease and wrap only at `u64::MAX`.
///
/// # Examples
///
/// ```ignore
/// let counter = VisitCounter::new();
/// assert_eq!(counter.increment(), 1);
/// assert_eq!(counter.current(), 1);
/// ```
#[derive(Debug, Default)]
pub struct VisitCounter {
    value: AtomicU64,
}

impl VisitCounter {
    /// Creates a counter starting at zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a counter starting at `value`.
    pub fn starting_at(value: u64) -> Self {
        Self {
            value: AtomicU64::new(value),
        }
    }

    /// Increments the counter and returns the new value.
    pub fn increment(&self) -> u64 {
        // fetch_add is a single RMW on one location: no lost or duplicated values.
        self.value.fetch_add(1, Ordering::Relaxed).wrapping_add(1)
    }

    /// Returns the current value without modifying it.
    pub fn current(&self) -> u64 {
        self.value.load(Ordering::Relaxed)
    }
}
