//! Configuration for a ring queue.

use crate::error::QueueError;

/// Configuration for [`RingQueue`](crate::RingQueue).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QueueConfig {
    /// Maximum number of resident (unread) values in the outtake.
    ///
    /// Must be non-zero. When a value arrives while this many are resident,
    /// the oldest one is evicted to make room.
    pub capacity: usize,
    /// Enable metrics collection (slight overhead)
    pub enable_metrics: bool,
}

impl QueueConfig {
    /// Creates a new configuration with custom settings.
    pub const fn new(capacity: usize, enable_metrics: bool) -> Self {
        Self {
            capacity,
            enable_metrics,
        }
    }

    /// Sets the capacity.
    pub const fn with_capacity(mut self, capacity: usize) -> Self {
        self.capacity = capacity;
        self
    }

    /// Enables or disables metrics collection.
    pub const fn with_metrics(mut self, enable_metrics: bool) -> Self {
        self.enable_metrics = enable_metrics;
        self
    }

    /// Checks that the configuration describes a usable queue.
    pub fn validate(&self) -> Result<(), QueueError> {
        if self.capacity == 0 {
            return Err(QueueError::ZeroCapacity);
        }
        Ok(())
    }
}

impl Default for QueueConfig {
    fn default() -> Self {
        Self {
            capacity: 1024,
            enable_metrics: false,
        }
    }
}

/// Small configuration (64 slots), for keeping only the latest few samples.
pub const SMALL_CONFIG: QueueConfig = QueueConfig::new(64, false);

/// Large configuration (64K slots) for bursty producers.
pub const LARGE_CONFIG: QueueConfig = QueueConfig::new(1 << 16, false);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        let config = QueueConfig::default();
        assert_eq!(config.capacity, 1024);
        assert!(!config.enable_metrics);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_zero_capacity_rejected() {
        let config = QueueConfig::default().with_capacity(0);
        assert_eq!(config.validate(), Err(QueueError::ZeroCapacity));
    }

    #[test]
    fn test_builder_setters() {
        let config = QueueConfig::default().with_capacity(12).with_metrics(true);
        assert_eq!(config, QueueConfig::new(12, true));
    }

    #[test]
    fn test_presets() {
        assert_eq!(SMALL_CONFIG.capacity, 64);
        assert_eq!(LARGE_CONFIG.capacity, 65_536);
        assert!(SMALL_CONFIG.validate().is_ok());
        assert!(LARGE_CONFIG.validate().is_ok());
    }
}
