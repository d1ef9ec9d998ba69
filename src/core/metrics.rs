//! Logger metrics for observability
//!
//! Counts what the router did with each call. The facade never logs about
//! itself, so these counters are the only window into filtered or dropped
//! messages.

use std::sync::atomic::{AtomicU64, Ordering};

/// Counters of routed, filtered and dropped messages
///
/// # Example
///
/// ```
/// use fyz_log::LoggerMetrics;
///
/// let metrics = LoggerMetrics::new();
/// metrics.record_emitted();
/// metrics.record_filtered();
///
/// assert_eq!(metrics.emitted(), 1);
/// assert_eq!(metrics.filtered(), 1);
/// ```
#[derive(Debug)]
pub struct LoggerMetrics {
    /// Messages handed to the sink or written to standard output
    emitted: AtomicU64,

    /// Messages below the threshold in platform-sink mode
    filtered: AtomicU64,

    /// Null format strings swallowed in platform-sink mode
    dropped_null: AtomicU64,
}

impl LoggerMetrics {
    pub const fn new() -> Self {
        Self {
            emitted: AtomicU64::new(0),
            filtered: AtomicU64::new(0),
            dropped_null: AtomicU64::new(0),
        }
    }

    #[inline]
    pub fn emitted(&self) -> u64 {
        self.emitted.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn filtered(&self) -> u64 {
        self.filtered.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn dropped_null(&self) -> u64 {
        self.dropped_null.load(Ordering::Relaxed)
    }

    /// Record an emitted message, returning the previous count
    #[inline]
    pub fn record_emitted(&self) -> u64 {
        self.emitted.fetch_add(1, Ordering::Relaxed)
    }

    #[inline]
    pub fn record_filtered(&self) -> u64 {
        self.filtered.fetch_add(1, Ordering::Relaxed)
    }

    #[inline]
    pub fn record_dropped_null(&self) -> u64 {
        self.dropped_null.fetch_add(1, Ordering::Relaxed)
    }

    pub fn reset(&self) {
        self.emitted.store(0, Ordering::Relaxed);
        self.filtered.store(0, Ordering::Relaxed);
        self.dropped_null.store(0, Ordering::Relaxed);
    }
}

impl Default for LoggerMetrics {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for LoggerMetrics {
    /// Create a snapshot of the current metrics values
    fn clone(&self) -> Self {
        Self {
            emitted: AtomicU64::new(self.emitted()),
            filtered: AtomicU64::new(self.filtered()),
            dropped_null: AtomicU64::new(self.dropped_null()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_metrics_new() {
        let metrics = LoggerMetrics::new();
        assert_eq!(metrics.emitted(), 0);
        assert_eq!(metrics.filtered(), 0);
        assert_eq!(metrics.dropped_null(), 0);
    }

    #[test]
    fn test_metrics_record() {
        let metrics = LoggerMetrics::new();
        assert_eq!(metrics.record_emitted(), 0); // Returns previous value
        metrics.record_emitted();
        metrics.record_dropped_null();
        assert_eq!(metrics.emitted(), 2);
        assert_eq!(metrics.dropped_null(), 1);
    }

    #[test]
    fn test_metrics_reset() {
        let metrics = LoggerMetrics::new();
        metrics.record_emitted();
        metrics.record_filtered();
        metrics.reset();
        assert_eq!(metrics.emitted(), 0);
        assert_eq!(metrics.filtered(), 0);
    }

    #[test]
    fn test_metrics_clone_is_snapshot() {
        let metrics = LoggerMetrics::new();
        metrics.record_filtered();

        let snapshot = metrics.clone();
        metrics.record_filtered();
        assert_eq!(metrics.filtered(), 2);
        assert_eq!(snapshot.filtered(), 1);
    }
}
