//! The background task that moves values from intake to outtake.

#[cfg(debug_assertions)]
use crate::invariants::{debug_assert_bounded_resident, debug_assert_intake_drained};
use crate::state::QueueState;
use std::sync::Arc;
use tokio::sync::{mpsc, oneshot};

/// Messages carried by the intake channel.
pub(crate) enum Command<T> {
    /// A producer value to admit.
    Push(T),
    /// Acknowledge once every earlier command has been processed.
    Flush(oneshot::Sender<()>),
    /// Stop accepting sends, drain what is queued, then close outtake.
    Close,
}

/// Worker loop. Runs until intake is closed (explicitly or by dropping every
/// handle) and drained, then closes the outtake.
pub(crate) async fn run<T>(state: Arc<QueueState<T>>, mut rx: mpsc::UnboundedReceiver<Command<T>>) {
    let capacity = state.capacity();
    tracing::debug!(capacity, "ring queue worker started");

    while let Some(command) = rx.recv().await {
        match command {
            Command::Push(value) => admit(&state, value),
            Command::Flush(ack) => {
                // The flusher may have given up waiting.
                let _ = ack.send(());
            }
            Command::Close => {
                // Sends racing with close fail from here on; already queued
                // commands are still delivered by `recv`.
                rx.close();
                tracing::debug!(capacity, pending = rx.len(), "ring queue intake closed, draining");
            }
        }
    }

    #[cfg(debug_assertions)]
    debug_assert_intake_drained!(rx.len());

    state.close_outtake();

    let metrics = state.metrics();
    tracing::debug!(
        capacity,
        resident = state.len(),
        admitted = metrics.admitted,
        evicted = metrics.evicted,
        "ring queue worker exited"
    );
}

/// Admits `value` into the outtake, evicting the oldest resident if full.
pub(crate) fn admit<T>(state: &QueueState<T>, value: T) {
    // `force_push` replaces the oldest slot atomically when the ring is full.
    if state.buffer.force_push(value).is_some() {
        state.metrics.record_evicted();
        tracing::trace!(capacity = state.capacity(), "ring queue full, evicted oldest value");
    }
    state.metrics.record_admitted();

    #[cfg(debug_assertions)]
    debug_assert_bounded_resident!(state.len(), state.capacity());

    state.data_notify.notify_one();
}
