//! Property-based tests for the ring queue's capacity and eviction rules.
//!
//! Each case drives its own current-thread runtime and uses `flush()` to
//! reach quiescence before checking the outtake.

use proptest::prelude::*;
use ringqueue::{QueueConfig, RingQueue};

fn runtime() -> tokio::runtime::Runtime {
    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .expect("failed to build runtime")
}

// =============================================================================
// Bounded residency and oldest-first eviction
// "after N sends into capacity C: len == min(N, C), residents == last C values"
// =============================================================================

proptest! {
    #[test]
    fn prop_residents_are_most_recent(
        capacity in 1usize..48,
        sends in 0u64..200,
    ) {
        let (len, drained) = runtime().block_on(async {
            let queue = RingQueue::new(capacity);
            for i in 0..sends {
                queue.send(i);
            }
            queue.flush().await.expect("flush failed");
            let len = queue.len();
            (len, queue.outtake().drain_ready())
        });

        let expected_len = (sends as usize).min(capacity);
        prop_assert_eq!(len, expected_len);

        let first_survivor = sends - expected_len as u64;
        prop_assert_eq!(drained, (first_survivor..sends).collect::<Vec<_>>());
    }
}

// =============================================================================
// Interleaved sends and partial drains
// "residency never exceeds capacity; drained values are strictly increasing"
// =============================================================================

proptest! {
    #[test]
    fn prop_interleaved_drains_preserve_order(
        capacity in 1usize..16,
        batches in prop::collection::vec(0u64..40, 1..20),
    ) {
        let (received, max_len, metrics) = runtime().block_on(async {
            let mut queue = RingQueue::with_config(QueueConfig::new(capacity, true))
                .expect("valid config");
            let outtake = queue.outtake();
            let mut next = 0u64;
            let mut received = Vec::new();
            let mut max_len = 0;

            for batch in &batches {
                for _ in 0..*batch {
                    queue.send(next);
                    next += 1;
                }
                queue.flush().await.expect("flush failed");
                max_len = max_len.max(queue.len());

                // Take half of what is resident, leaving the rest to be evicted.
                for _ in 0..queue.len() / 2 {
                    if let Ok(value) = outtake.try_recv() {
                        received.push(value);
                    }
                }
            }

            queue.close();
            queue.join().await.expect("worker failed");
            while let Some(value) = outtake.recv().await {
                received.push(value);
            }
            (received, max_len, queue.metrics())
        });

        prop_assert!(max_len <= capacity, "len {} exceeded capacity {}", max_len, capacity);
        for pair in received.windows(2) {
            prop_assert!(pair[0] < pair[1], "order violation: {} before {}", pair[0], pair[1]);
        }

        let total: u64 = batches.iter().sum();
        prop_assert_eq!(metrics.admitted, total);
        prop_assert_eq!(metrics.delivered, received.len() as u64);
        prop_assert_eq!(metrics.evicted + metrics.delivered, total);
    }
}
