//! Consumer-side endpoint.

use crate::error::TryRecvError;
use crate::metrics::MetricsSnapshot;
use crate::state::QueueState;
use futures_core::Stream;
use std::fmt;
use std::sync::Arc;

/// Read side of a [`RingQueue`](crate::RingQueue).
///
/// Holds at most `capacity` values, oldest first. `Outtake` is `Clone`;
/// clones race on the same buffer and each value is delivered to exactly one
/// of them.
pub struct Outtake<T> {
    state: Arc<QueueState<T>>,
}

impl<T> Clone for Outtake<T> {
    fn clone(&self) -> Self {
        Self {
            state: Arc::clone(&self.state),
        }
    }
}

impl<T> fmt::Debug for Outtake<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Outtake")
            .field("len", &self.len())
            .field("capacity", &self.capacity())
            .field("closed", &self.is_closed())
            .finish()
    }
}

impl<T> Outtake<T> {
    pub(crate) fn new(state: Arc<QueueState<T>>) -> Self {
        Self { state }
    }

    /// Receives the oldest resident value, waiting while the queue is open
    /// and empty.
    ///
    /// Returns `None` once the queue is closed and drained. This is the
    /// end-of-stream signal; it never waits after that point.
    ///
    /// Cancel-safe: dropping the future never loses a value.
    pub async fn recv(&self) -> Option<T> {
        loop {
            // Register interest before checking, so an admission landing
            // between the check and the await still wakes us.
            let notified = self.state.data_notify.notified();
            tokio::pin!(notified);
            notified.as_mut().enable();

            match self.try_recv() {
                Ok(value) => return Some(value),
                Err(TryRecvError::Closed) => return None,
                Err(TryRecvError::Empty) => notified.await,
            }
        }
    }

    /// Receives the oldest resident value without waiting.
    pub fn try_recv(&self) -> Result<T, TryRecvError> {
        // Load the flag before popping: the worker sets it after its last
        // admission, so a closed-and-empty observation is final.
        let closed = self.state.is_outtake_closed();
        match self.state.try_pop() {
            Some(value) => Ok(value),
            None if closed => Err(TryRecvError::Closed),
            None => Err(TryRecvError::Empty),
        }
    }

    /// Takes every value resident right now, oldest first, without waiting.
    ///
    /// Values admitted while draining may or may not be included.
    pub fn drain_ready(&self) -> Vec<T> {
        let mut drained = Vec::with_capacity(self.len());
        while let Some(value) = self.state.try_pop() {
            drained.push(value);
        }
        drained
    }

    /// Returns the number of resident (unread) values.
    ///
    /// This is a snapshot: with producers or consumers active it may be stale
    /// by the time it is read. It is exact once the queue is quiescent.
    pub fn len(&self) -> usize {
        self.state.len()
    }

    /// Returns `true` if no value is resident.
    pub fn is_empty(&self) -> bool {
        self.state.buffer.is_empty()
    }

    /// Returns the fixed capacity.
    pub fn capacity(&self) -> usize {
        self.state.capacity()
    }

    /// Returns `true` once the worker has closed the outtake.
    ///
    /// Values may still be resident; see [`is_terminated`](Self::is_terminated).
    pub fn is_closed(&self) -> bool {
        self.state.is_outtake_closed()
    }

    /// Returns `true` once the outtake is closed and drained.
    pub fn is_terminated(&self) -> bool {
        self.is_closed() && self.is_empty()
    }

    /// Returns a snapshot of the queue's counters.
    pub fn metrics(&self) -> MetricsSnapshot {
        self.state.metrics()
    }
}

impl<T: Send + 'static> Outtake<T> {
    /// Converts the outtake into a [`Stream`] that ends at end-of-stream.
    pub fn into_stream(self) -> impl Stream<Item = T> + Send + 'static {
        futures_util::stream::unfold(self, |outtake| async move {
            let value = outtake.recv().await?;
            Some((value, outtake))
        })
    }
}
