//! Ring buffer statistics and occupancy introspection

use serde::{Deserialize, Serialize};

/// Snapshot of a ring buffer's occupancy and cumulative operation counters
///
/// Produced by [`RingBuffer::stats`](crate::RingBuffer::stats) under a
/// single lock acquisition, so the fields are mutually consistent:
/// `total_put == total_got + total_evicted + len` in every snapshot.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RingStats {
    /// Elements currently stored
    pub len: usize,
    /// Configured maximum occupancy
    pub capacity: usize,
    /// Elements ever inserted
    pub total_put: u64,
    /// Elements ever removed by a caller
    pub total_got: u64,
    /// Elements discarded without being consumed (overwrite, resize, clear)
    pub total_evicted: u64,
}

impl RingStats {
    /// Create an empty statistics instance
    pub fn new() -> Self {
        Default::default()
    }

    /// Occupancy as a fraction of capacity (0.0 to 1.0; 0.0 at capacity 0)
    pub fn fill_level(&self) -> f64 {
        if self.capacity == 0 {
            return 0.0;
        }
        self.len as f64 / self.capacity as f64
    }

    /// Whether the snapshot shows an empty buffer
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Whether the snapshot shows a full buffer
    pub fn is_full(&self) -> bool {
        self.len == self.capacity
    }

    /// Get a summary string of the statistics
    pub fn summary(&self) -> String {
        format!(
            "RingStats {{ len: {}/{}, fill: {:.1}%, put: {}, got: {}, evicted: {} }}",
            self.len,
            self.capacity,
            self.fill_level() * 100.0,
            self.total_put,
            self.total_got,
            self.total_evicted
        )
    }
}
