//! ringqueue - Never-Blocking Bounded Queue with Drop-Oldest Overflow
//!
//! A [`RingQueue`] lets any number of producers push values without ever
//! stalling, while a bounded buffer retains only the most recent `capacity`
//! values for consumers to drain. When a value arrives at a full buffer, the
//! single oldest resident value is evicted to make room, just like a classic
//! ring buffer.
//!
//! # Architecture
//!
//! ```text
//! producers ──▶ Intake (unbounded) ──▶ worker ──▶ Outtake (bounded) ──▶ consumers
//! ```
//!
//! - **Intake**: unbounded, so a send never waits on buffer fullness
//! - **Worker**: one Tokio task per queue; the only admitter into the outtake
//! - **Outtake**: lock-free ring of `capacity` slots, ordered oldest to newest
//!
//! Closing the intake lets the worker drain what it already accepted, then
//! closes the outtake. Consumers see `None` from [`Outtake::recv`] once the
//! queue is closed and drained.
//!
//! # Contract violations
//!
//! A zero capacity, sending after close, and closing twice are programming
//! errors: [`RingQueue::new`], [`Intake::send`] and [`RingQueue::close`]
//! panic on them. Each has a fallible twin ([`RingQueue::with_config`],
//! [`Intake::try_send`], [`RingQueue::try_close`]) for callers that prefer a
//! `Result`.
//!
//! # Example
//!
//! ```
//! use ringqueue::RingQueue;
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() {
//!     let mut queue = RingQueue::new(3);
//!     let intake = queue.intake();
//!     let outtake = queue.outtake();
//!
//!     // Never blocks, even with nobody reading.
//!     for i in 1..=5 {
//!         intake.send(i);
//!     }
//!
//!     queue.close();
//!     queue.join().await.unwrap();
//!
//!     // Only the three most recent values survived.
//!     assert_eq!(outtake.drain_ready(), vec![3, 4, 5]);
//!     assert_eq!(outtake.recv().await, None);
//! }
//! ```

mod config;
mod error;
mod intake;
mod invariants;
mod metrics;
mod outtake;
mod queue;
mod state;
mod worker;

pub use config::{QueueConfig, LARGE_CONFIG, SMALL_CONFIG};
pub use error::{QueueError, SendError, TryRecvError};
pub use intake::Intake;
pub use metrics::MetricsSnapshot;
pub use outtake::Outtake;
pub use queue::RingQueue;
