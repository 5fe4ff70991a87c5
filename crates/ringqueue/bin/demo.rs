//! Demonstration of ringqueue: a lossy telemetry feed drained once a "minute".
//!
//! Run with: `RUST_LOG=debug cargo run -p ringqueue --features demo --bin demo`

use ringqueue::{QueueConfig, RingQueue};
use std::time::Duration;
use tracing::info;
use tracing_subscriber::EnvFilter;

const CYCLES_PER_MINUTE: u64 = 6;
const MINUTES: u64 = 4;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    demo_periodic_consumer().await?;
    demo_slow_consumer().await?;

    info!("all demos completed");
    Ok(())
}

/// Demo 1: a consumer that keeps up sees every sample.
async fn demo_periodic_consumer() -> Result<(), Box<dyn std::error::Error>> {
    info!("--- Demo 1: periodic consumer ---");

    let mut queue = RingQueue::with_config(QueueConfig::new(12, true))?;
    let outtake = queue.outtake();

    for cycle in 1..=CYCLES_PER_MINUTE * MINUTES {
        queue.send(cycle);
        if cycle % CYCLES_PER_MINUTE == 0 {
            queue.flush().await?;
            let samples = outtake.drain_ready();
            info!(minute = cycle / CYCLES_PER_MINUTE, ?samples, "exported samples");
        }
    }

    queue.close();
    queue.join().await?;
    let metrics = queue.metrics();
    info!(admitted = metrics.admitted, evicted = metrics.evicted, "periodic consumer done");
    Ok(())
}

/// Demo 2: a consumer that falls behind only ever sees the newest samples.
async fn demo_slow_consumer() -> Result<(), Box<dyn std::error::Error>> {
    info!("--- Demo 2: slow consumer ---");

    let mut queue = RingQueue::with_config(QueueConfig::new(4, true))?;
    let outtake = queue.outtake();

    let consumer = tokio::spawn(async move {
        let mut seen = Vec::new();
        while let Some(sample) = outtake.recv().await {
            seen.push(sample);
            tokio::time::sleep(Duration::from_millis(5)).await;
        }
        seen
    });

    let intake = queue.intake();
    let producer = tokio::spawn(async move {
        for sample in 0..200u64 {
            intake.send(sample);
            if sample % 10 == 0 {
                tokio::time::sleep(Duration::from_millis(1)).await;
            }
        }
    });

    producer.await?;
    queue.close();
    queue.join().await?;

    let seen = consumer.await?;
    let metrics = queue.metrics();
    info!(
        received = seen.len(),
        evicted = metrics.evicted,
        last = ?seen.last(),
        "slow consumer done"
    );
    Ok(())
}
