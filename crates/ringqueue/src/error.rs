//! Error types for ring queue operations.

use std::fmt;
use thiserror::Error;

/// Errors reported by queue construction and lifecycle operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum QueueError {
    /// The configured capacity was zero.
    #[error("ring queue capacity must be positive")]
    ZeroCapacity,

    /// No Tokio runtime was available to spawn the worker on.
    #[error("no Tokio runtime available to spawn the ring queue worker")]
    NoRuntime,

    /// The intake was closed more than once.
    #[error("ring queue intake already closed")]
    AlreadyClosed,

    /// The intake is closed.
    #[error("ring queue intake is closed")]
    Closed,

    /// The worker task panicked or was cancelled.
    #[error("ring queue worker terminated abnormally")]
    WorkerFailed,
}

impl QueueError {
    /// Returns `true` if this error comes from misusing the close protocol.
    #[inline]
    pub fn is_protocol_misuse(&self) -> bool {
        matches!(self, Self::AlreadyClosed | Self::Closed)
    }
}

/// Error returned by [`Outtake::try_recv`](crate::Outtake::try_recv).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TryRecvError {
    /// No value is resident, but the queue is still open.
    #[error("ring queue is empty")]
    Empty,

    /// The queue is closed and every value has been drained.
    #[error("ring queue is closed and drained")]
    Closed,
}

/// Error returned by [`Intake::try_send`](crate::Intake::try_send) once the
/// intake is closed.
///
/// The rejected value is handed back.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct SendError<T>(pub T);

impl<T> SendError<T> {
    /// Returns the value that could not be sent.
    pub fn into_inner(self) -> T {
        self.0
    }
}

impl<T> fmt::Debug for SendError<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SendError").finish_non_exhaustive()
    }
}

impl<T> fmt::Display for SendError<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "sending on a closed ring queue intake")
    }
}

impl<T> std::error::Error for SendError<T> {}
