//! State shared by the worker and every endpoint handle.

use crate::config::QueueConfig;
use crate::metrics::{Metrics, MetricsSnapshot};
use crossbeam_queue::ArrayQueue;
use std::sync::atomic::{AtomicBool, Ordering};
use tokio::sync::Notify;

// =============================================================================
// OWNERSHIP PROTOCOL
// =============================================================================
//
// `buffer` is the bounded outtake. It is mutated by two parties only:
//
// - the worker, which is the single admitter (`force_push`), and therefore the
//   only party that can evict;
// - consumers, which only ever `pop`.
//
// Because eviction happens inside `force_push`, a consumer popping at the same
// moment can never cause a newer value to be discarded in place of the oldest.
//
// `outtake_closed` is stored with Release by the worker *after* its final
// admission. Consumers load it with Acquire *before* popping, so
// "closed && pop() == None" proves the outtake is drained for good.
//
// =============================================================================

pub(crate) struct QueueState<T> {
    pub(crate) buffer: ArrayQueue<T>,
    /// Wakes consumers waiting for data or for end-of-stream.
    pub(crate) data_notify: Notify,
    intake_closed: AtomicBool,
    outtake_closed: AtomicBool,
    pub(crate) metrics: Metrics,
}

impl<T> QueueState<T> {
    /// Creates the shared state. `config` must already be validated.
    pub(crate) fn new(config: &QueueConfig) -> Self {
        Self {
            buffer: ArrayQueue::new(config.capacity),
            data_notify: Notify::new(),
            intake_closed: AtomicBool::new(false),
            outtake_closed: AtomicBool::new(false),
            metrics: Metrics::new(config.enable_metrics),
        }
    }

    #[inline]
    pub(crate) fn capacity(&self) -> usize {
        self.buffer.capacity()
    }

    #[inline]
    pub(crate) fn len(&self) -> usize {
        self.buffer.len()
    }

    /// Removes the oldest resident value, if any.
    #[inline]
    pub(crate) fn try_pop(&self) -> Option<T> {
        let value = self.buffer.pop();
        if value.is_some() {
            self.metrics.record_delivered(1);
        }
        value
    }

    /// Marks the intake closed and returns whether it already was.
    #[inline]
    pub(crate) fn close_intake(&self) -> bool {
        self.intake_closed.swap(true, Ordering::AcqRel)
    }

    #[inline]
    pub(crate) fn is_intake_closed(&self) -> bool {
        self.intake_closed.load(Ordering::Acquire)
    }

    /// Publishes end-of-stream and wakes every waiting consumer.
    pub(crate) fn close_outtake(&self) {
        self.outtake_closed.store(true, Ordering::Release);
        self.data_notify.notify_waiters();
    }

    #[inline]
    pub(crate) fn is_outtake_closed(&self) -> bool {
        self.outtake_closed.load(Ordering::Acquire)
    }

    pub(crate) fn metrics(&self) -> MetricsSnapshot {
        self.metrics.snapshot()
    }
}
