//! Producer-side endpoint.

use crate::error::{QueueError, SendError};
#[cfg(debug_assertions)]
use crate::invariants::debug_assert_closed_once;
use crate::state::QueueState;
use crate::worker::Command;
use std::fmt;
use std::sync::Arc;
use tokio::sync::{mpsc, oneshot};

/// Write side of a [`RingQueue`](crate::RingQueue).
///
/// Sending never waits on buffer fullness: when the outtake is full the worker
/// evicts the oldest resident value instead of pushing back on producers.
///
/// `Intake` is `Clone`; every clone feeds the same worker, and closing through
/// any clone closes the intake for all of them. Dropping every clone without
/// closing has the same effect as closing.
pub struct Intake<T> {
    tx: mpsc::UnboundedSender<Command<T>>,
    state: Arc<QueueState<T>>,
}

impl<T> Clone for Intake<T> {
    fn clone(&self) -> Self {
        Self {
            tx: self.tx.clone(),
            state: Arc::clone(&self.state),
        }
    }
}

impl<T> fmt::Debug for Intake<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Intake")
            .field("closed", &self.is_closed())
            .finish_non_exhaustive()
    }
}

impl<T> Intake<T> {
    pub(crate) fn new(tx: mpsc::UnboundedSender<Command<T>>, state: Arc<QueueState<T>>) -> Self {
        Self { tx, state }
    }

    /// Sends a value without waiting.
    ///
    /// # Panics
    ///
    /// Panics if the intake has been closed. Sending after close is a
    /// contract violation; use [`try_send`](Self::try_send) to get the value
    /// back instead.
    #[track_caller]
    pub fn send(&self, value: T) {
        if self.try_send(value).is_err() {
            panic!("send on a closed ring queue intake");
        }
    }

    /// Sends a value without waiting, handing it back if the intake is closed.
    pub fn try_send(&self, value: T) -> Result<(), SendError<T>> {
        if self.state.is_intake_closed() {
            return Err(SendError(value));
        }

        match self.tx.send(Command::Push(value)) {
            Ok(()) => Ok(()),
            Err(mpsc::error::SendError(Command::Push(value))) => Err(SendError(value)),
            Err(_) => unreachable!("unbounded sender returns the rejected command"),
        }
    }

    /// Waits until the worker has processed every value sent before this call.
    ///
    /// Values that were admitted may still have been evicted since, or taken
    /// by a consumer; `flush` only guarantees that none is still in transit.
    pub async fn flush(&self) -> Result<(), QueueError> {
        if self.state.is_intake_closed() {
            return Err(QueueError::Closed);
        }

        let (ack_tx, ack_rx) = oneshot::channel();
        self.tx
            .send(Command::Flush(ack_tx))
            .map_err(|_| QueueError::Closed)?;
        ack_rx.await.map_err(|_| QueueError::Closed)
    }

    /// Closes the intake.
    ///
    /// The worker admits every value sent before the close, then closes the
    /// outtake so consumers observe end-of-stream once it is drained.
    ///
    /// # Panics
    ///
    /// Panics if the intake is already closed.
    #[track_caller]
    pub fn close(&self) {
        if let Err(err) = self.try_close() {
            panic!("{err}");
        }
    }

    /// Closes the intake, reporting a second close as an error.
    pub fn try_close(&self) -> Result<(), QueueError> {
        let was_closed = self.state.close_intake();
        if was_closed {
            return Err(QueueError::AlreadyClosed);
        }

        #[cfg(debug_assertions)]
        debug_assert_closed_once!(was_closed, self.state.is_intake_closed());

        // Only fails if the worker is already gone, in which case the
        // outtake is closed (or the worker panicked and `join` reports it).
        if self.tx.send(Command::Close).is_err() {
            tracing::debug!("ring queue worker gone before close");
        }
        Ok(())
    }

    /// Returns `true` once the intake has been closed.
    pub fn is_closed(&self) -> bool {
        self.state.is_intake_closed()
    }
}
