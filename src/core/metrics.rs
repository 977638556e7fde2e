//! Routing metrics for the handler chain
//!
//! Counts how messages fare as they travel the chain: how many were routed,
//! handled, failed on purpose, failed in their sink, fell off the end, and how
//! many forwards the links performed along the way.

use std::sync::atomic::{AtomicU64, Ordering};

/// Counters for chain routing
///
/// # Example
///
/// ```
/// use severity_chain::ChainMetrics;
///
/// let metrics = ChainMetrics::new();
///
/// metrics.record_routed();
/// metrics.record_handled();
///
/// assert_eq!(metrics.routed(), 1);
/// assert_eq!(metrics.handled(), 1);
/// ```
#[derive(Debug)]
pub struct ChainMetrics {
    /// Messages presented to the outermost link
    routed: AtomicU64,

    /// Messages accepted by some link and emitted without error
    handled: AtomicU64,

    /// Messages accepted by some link that failed by design
    fatal: AtomicU64,

    /// Messages accepted by some link whose sink failed to write
    sink_failures: AtomicU64,

    /// Messages no link accepted
    unhandled: AtomicU64,

    /// Link-to-link forwards across all routed messages
    forwards: AtomicU64,
}

impl ChainMetrics {
    pub const fn new() -> Self {
        Self {
            routed: AtomicU64::new(0),
            handled: AtomicU64::new(0),
            fatal: AtomicU64::new(0),
            sink_failures: AtomicU64::new(0),
            unhandled: AtomicU64::new(0),
            forwards: AtomicU64::new(0),
        }
    }

    #[inline]
    pub fn routed(&self) -> u64 {
        self.routed.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn handled(&self) -> u64 {
        self.handled.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn fatal(&self) -> u64 {
        self.fatal.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn sink_failures(&self) -> u64 {
        self.sink_failures.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn unhandled(&self) -> u64 {
        self.unhandled.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn forwards(&self) -> u64 {
        self.forwards.load(Ordering::Relaxed)
    }

    /// Record a message entering the chain
    #[inline]
    pub fn record_routed(&self) -> u64 {
        self.routed.fetch_add(1, Ordering::Relaxed)
    }

    #[inline]
    pub fn record_handled(&self) -> u64 {
        self.handled.fetch_add(1, Ordering::Relaxed)
    }

    #[inline]
    pub fn record_fatal(&self) -> u64 {
        self.fatal.fetch_add(1, Ordering::Relaxed)
    }

    #[inline]
    pub fn record_sink_failure(&self) -> u64 {
        self.sink_failures.fetch_add(1, Ordering::Relaxed)
    }

    #[inline]
    pub fn record_unhandled(&self) -> u64 {
        self.unhandled.fetch_add(1, Ordering::Relaxed)
    }

    /// Record `count` forwards performed while routing one message
    #[inline]
    pub fn record_forwards(&self, count: u64) -> u64 {
        self.forwards.fetch_add(count, Ordering::Relaxed)
    }

    /// Reset all counters to zero
    pub fn reset(&self) {
        self.routed.store(0, Ordering::Relaxed);
        self.handled.store(0, Ordering::Relaxed);
        self.fatal.store(0, Ordering::Relaxed);
        self.sink_failures.store(0, Ordering::Relaxed);
        self.unhandled.store(0, Ordering::Relaxed);
        self.forwards.store(0, Ordering::Relaxed);
    }
}

impl Default for ChainMetrics {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for ChainMetrics {
    /// Create a snapshot of the current counter values
    fn clone(&self) -> Self {
        Self {
            routed: AtomicU64::new(self.routed()),
            handled: AtomicU64::new(self.handled()),
            fatal: AtomicU64::new(self.fatal()),
            sink_failures: AtomicU64::new(self.sink_failures()),
            unhandled: AtomicU64::new(self.unhandled()),
            forwards: AtomicU64::new(self.forwards()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_metrics_new() {
        let metrics = ChainMetrics::new();
        assert_eq!(metrics.routed(), 0);
        assert_eq!(metrics.handled(), 0);
        assert_eq!(metrics.fatal(), 0);
        assert_eq!(metrics.sink_failures(), 0);
        assert_eq!(metrics.unhandled(), 0);
        assert_eq!(metrics.forwards(), 0);
    }

    #[test]
    fn test_record_returns_previous() {
        let metrics = ChainMetrics::new();
        assert_eq!(metrics.record_routed(), 0);
        assert_eq!(metrics.record_routed(), 1);
        assert_eq!(metrics.routed(), 2);

        assert_eq!(metrics.record_forwards(3), 0);
        assert_eq!(metrics.record_forwards(2), 3);
        assert_eq!(metrics.forwards(), 5);
    }

    #[test]
    fn test_reset() {
        let metrics = ChainMetrics::new();
        metrics.record_routed();
        metrics.record_fatal();
        metrics.record_sink_failure();
        metrics.record_unhandled();

        metrics.reset();

        assert_eq!(metrics.routed(), 0);
        assert_eq!(metrics.fatal(), 0);
        assert_eq!(metrics.sink_failures(), 0);
        assert_eq!(metrics.unhandled(), 0);
    }

    #[test]
    fn test_clone_is_snapshot() {
        let metrics = ChainMetrics::new();
        metrics.record_handled();

        let snapshot = metrics.clone();
        metrics.record_handled();

        assert_eq!(metrics.handled(), 2);
        assert_eq!(snapshot.handled(), 1);
    }
}
