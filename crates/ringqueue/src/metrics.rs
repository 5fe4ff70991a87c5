use crossbeam_utils::CachePadded;
use std::sync::atomic::{AtomicU64, Ordering};

/// Point-in-time copy of a queue's counters.
///
/// All fields stay at zero unless the queue was built with
/// `enable_metrics` set.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MetricsSnapshot {
    /// Values the worker admitted into the outtake.
    pub admitted: u64,
    /// Resident values discarded to make room for newer ones.
    pub evicted: u64,
    /// Values handed to consumers.
    pub delivered: u64,
}

impl MetricsSnapshot {
    /// Values admitted but neither evicted nor delivered yet.
    pub fn in_flight(&self) -> u64 {
        self.admitted
            .saturating_sub(self.evicted)
            .saturating_sub(self.delivered)
    }
}

/// Thread-safe counters shared by the worker and every consumer.
///
/// The worker writes `admitted`/`evicted` while consumers write `delivered`,
/// so each counter sits on its own cache line.
#[derive(Debug)]
pub(crate) struct Metrics {
    enabled: bool,
    admitted: CachePadded<AtomicU64>,
    evicted: CachePadded<AtomicU64>,
    delivered: CachePadded<AtomicU64>,
}

impl Metrics {
    pub(crate) fn new(enabled: bool) -> Self {
        Self {
            enabled,
            admitted: CachePadded::new(AtomicU64::new(0)),
            evicted: CachePadded::new(AtomicU64::new(0)),
            delivered: CachePadded::new(AtomicU64::new(0)),
        }
    }

    #[inline]
    pub(crate) fn record_admitted(&self) {
        if self.enabled {
            self.admitted.fetch_add(1, Ordering::Relaxed);
        }
    }

    #[inline]
    pub(crate) fn record_evicted(&self) {
        if self.enabled {
            self.evicted.fetch_add(1, Ordering::Relaxed);
        }
    }

    #[inline]
    pub(crate) fn record_delivered(&self, count: u64) {
        if self.enabled && count > 0 {
            self.delivered.fetch_add(count, Ordering::Relaxed);
        }
    }

    pub(crate) fn snapshot(&self) -> MetricsSnapshot {
        MetricsSnapshot {
            admitted: self.admitted.load(Ordering::Relaxed),
            evicted: self.evicted.load(Ordering::Relaxed),
            delivered: self.delivered.load(Ordering::Relaxed),
        }
    }
}
