use crate::config::QueueConfig;
use crate::error::QueueError;
use crate::intake::Intake;
use crate::metrics::MetricsSnapshot;
use crate::outtake::Outtake;
use crate::state::QueueState;
use crate::worker;
use std::fmt;
use std::sync::Arc;
use tokio::runtime::Handle;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

/// Bounded, never-blocking queue that evicts its oldest value when full.
///
/// Producers write to the [`Intake`], consumers read from the [`Outtake`],
/// and a single background worker moves values between them. The worker is
/// the only party that admits into the bounded outtake, so eviction always
/// removes the oldest resident value and surviving values keep their arrival
/// order.
///
/// The worker runs until the intake is closed and drained. Call
/// [`join`](Self::join) (or [`shutdown`](Self::shutdown)) to wait for it.
pub struct RingQueue<T> {
    intake: Intake<T>,
    outtake: Outtake<T>,
    config: QueueConfig,
    worker: Option<JoinHandle<()>>,
}

impl<T: Send + 'static> RingQueue<T> {
    /// Creates a queue holding at most `capacity` values and spawns its worker
    /// on the current Tokio runtime.
    ///
    /// # Panics
    ///
    /// Panics if `capacity` is zero, or if called outside a Tokio runtime.
    #[track_caller]
    pub fn new(capacity: usize) -> Self {
        match Self::with_config(QueueConfig::default().with_capacity(capacity)) {
            Ok(queue) => queue,
            Err(QueueError::ZeroCapacity) => {
                panic!("invalid ring queue capacity {capacity}: must be positive")
            }
            Err(err) => panic!("{err}"),
        }
    }

    /// Creates a queue from `config`, spawning its worker on the current
    /// Tokio runtime.
    pub fn with_config(config: QueueConfig) -> Result<Self, QueueError> {
        config.validate()?;
        let runtime = Handle::try_current().map_err(|_| QueueError::NoRuntime)?;

        let state = Arc::new(QueueState::new(&config));
        let (tx, rx) = mpsc::unbounded_channel();
        let worker = runtime.spawn(worker::run(Arc::clone(&state), rx));

        Ok(Self {
            intake: Intake::new(tx, Arc::clone(&state)),
            outtake: Outtake::new(state),
            config,
            worker: Some(worker),
        })
    }

    /// Returns a producer handle.
    pub fn intake(&self) -> Intake<T> {
        self.intake.clone()
    }

    /// Returns a consumer handle.
    pub fn outtake(&self) -> Outtake<T> {
        self.outtake.clone()
    }

    /// Sends a value through the queue's own intake handle.
    ///
    /// # Panics
    ///
    /// Panics if the queue has been closed.
    #[track_caller]
    pub fn send(&self, value: T) {
        self.intake.send(value);
    }

    /// Receives through the queue's own outtake handle.
    pub async fn recv(&self) -> Option<T> {
        self.outtake.recv().await
    }

    /// Returns the number of resident (unread) values.
    ///
    /// Racy snapshot; exact only when no sends or receives are in progress
    /// and the worker has caught up (see [`flush`](Self::flush)).
    pub fn len(&self) -> usize {
        self.outtake.len()
    }

    /// Returns `true` if no value is resident.
    pub fn is_empty(&self) -> bool {
        self.outtake.is_empty()
    }

    /// Returns the capacity fixed at construction.
    pub fn capacity(&self) -> usize {
        self.config.capacity
    }

    /// Returns the configuration the queue was built with.
    pub fn config(&self) -> &QueueConfig {
        &self.config
    }

    /// Returns a snapshot of the queue's counters.
    pub fn metrics(&self) -> MetricsSnapshot {
        self.outtake.metrics()
    }

    /// Waits until the worker has processed every value sent before this call.
    pub async fn flush(&self) -> Result<(), QueueError> {
        self.intake.flush().await
    }

    /// Closes the intake.
    ///
    /// # Panics
    ///
    /// Panics if the intake is already closed.
    #[track_caller]
    pub fn close(&self) {
        self.intake.close();
    }

    /// Closes the intake, reporting a second close as an error.
    pub fn try_close(&self) -> Result<(), QueueError> {
        self.intake.try_close()
    }

    /// Returns `true` once the intake has been closed.
    pub fn is_closed(&self) -> bool {
        self.intake.is_closed()
    }

    /// Returns `true` once the worker has exited (or was already joined).
    pub fn is_finished(&self) -> bool {
        self.worker.as_ref().map_or(true, JoinHandle::is_finished)
    }

    /// Waits for the worker to exit.
    ///
    /// The worker only exits after the intake is closed (or every intake
    /// handle is dropped), so joining an open queue waits for that. Once this
    /// returns, the outtake is closed. Joining again returns `Ok(())`.
    pub async fn join(&mut self) -> Result<(), QueueError> {
        let Some(worker) = self.worker.take() else {
            return Ok(());
        };

        worker.await.map_err(|err| {
            tracing::error!(error = %err, capacity = self.config.capacity, "ring queue worker failed");
            QueueError::WorkerFailed
        })
    }

    /// Closes the intake if it is still open and waits for the worker.
    ///
    /// Resident values stay readable through outstanding [`Outtake`] handles.
    pub async fn shutdown(mut self) -> Result<(), QueueError> {
        match self.intake.try_close() {
            Ok(()) | Err(QueueError::AlreadyClosed) => {}
            Err(err) => return Err(err),
        }
        self.join().await
    }
}

impl<T> fmt::Debug for RingQueue<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RingQueue")
            .field("capacity", &self.config.capacity)
            .field("len", &self.outtake.len())
            .field("closed", &self.intake.is_closed())
            .finish_non_exhaustive()
    }
}
