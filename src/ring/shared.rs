//! Shared, internally synchronized ring buffer

use std::sync::Mutex;

use crate::{error::Result, ring::raw::RawRing, stats::RingStats};

/// Fixed-capacity FIFO ring buffer shared between threads.
///
/// One mutex guards the whole structure. Every operation, pure queries
/// included, acquires it for its full duration, so effects are linearizable
/// in lock-acquisition order. The lock is internal and the unsynchronized
/// core is not exported, so callers cannot reach the cursors without it.
///
/// Operations never block waiting for space or data: a put on a full buffer
/// and a get on an empty buffer fail immediately with
/// [`CarouselError::Capacity`](crate::CarouselError::Capacity) or
/// [`CarouselError::Underflow`](crate::CarouselError::Underflow). Callers
/// that want blocking behavior compose retry or backoff on top, as the
/// demo harness and the stress tests do.
///
/// `get` and `peek` hand out owned values, never references into the
/// buffer's storage, so the storage stays private even across a concurrent
/// [`resize`](RingBuffer::resize).
#[derive(Debug)]
pub struct RingBuffer<T> {
    inner: Mutex<RawRing<T>>,
}

impl<T> RingBuffer<T> {
    /// Create a ring buffer holding at most `capacity` elements.
    ///
    /// A capacity of 0 is legal and degenerate: the buffer reports both
    /// empty and full, and every transfer fails. Allocation failure aborts
    /// the process.
    pub fn new(capacity: usize) -> Self {
        Self {
            inner: Mutex::new(RawRing::new(capacity)),
        }
    }

    /// Insert `item` at the tail.
    ///
    /// Fails with `Capacity` when the buffer is full (or has capacity 0),
    /// leaving the buffer untouched.
    pub fn put(&self, item: T) -> Result<()> {
        self.inner.lock().unwrap().put(item)
    }

    /// Insert `item` at the tail, evicting the oldest element when full.
    ///
    /// Returns the evicted element, or `None` if there was room. Occupancy
    /// never exceeds capacity. A capacity-0 buffer still fails with
    /// `Capacity`; there is no slot to write even once.
    pub fn put_overwrite(&self, item: T) -> Result<Option<T>> {
        self.inner.lock().unwrap().put_overwrite(item)
    }

    /// Remove and return the oldest element.
    ///
    /// Fails with `Underflow` when the buffer is empty.
    pub fn get(&self) -> Result<T> {
        self.inner.lock().unwrap().get()
    }

    /// Return a clone of the oldest element without removing it.
    ///
    /// Fails with `Underflow` when the buffer is empty. Never mutates the
    /// buffer: a subsequent [`get`](RingBuffer::get) returns an equal value.
    pub fn peek(&self) -> Result<T>
    where
        T: Clone,
    {
        self.inner.lock().unwrap().peek()
    }

    /// Insert every element of `items` in order, or nothing at all.
    ///
    /// Bulk insertion never overwrites. If `items.len()` exceeds the free
    /// space the call fails with `Capacity` and no element is committed.
    pub fn put_bulk(&self, items: &[T]) -> Result<()>
    where
        T: Clone,
    {
        self.inner.lock().unwrap().put_bulk(items)
    }

    /// Remove exactly `count` elements in FIFO order, or nothing at all.
    ///
    /// If fewer than `count` elements are stored the call fails with
    /// `Underflow` and no element is removed.
    pub fn get_bulk(&self, count: usize) -> Result<Vec<T>> {
        self.inner.lock().unwrap().get_bulk(count)
    }

    /// Whether the buffer holds no elements
    pub fn is_empty(&self) -> bool {
        self.inner.lock().unwrap().is_empty()
    }

    /// Whether occupancy equals capacity (always true at capacity 0)
    pub fn is_full(&self) -> bool {
        self.inner.lock().unwrap().is_full()
    }

    /// Current occupancy, between 0 and `capacity()`
    pub fn len(&self) -> usize {
        self.inner.lock().unwrap().len()
    }

    /// Configured maximum occupancy
    pub fn capacity(&self) -> usize {
        self.inner.lock().unwrap().capacity()
    }

    /// Free slots remaining before the buffer is full
    pub fn available_space(&self) -> usize {
        self.inner.lock().unwrap().available_space()
    }

    /// Occupancy as a fraction of capacity, in `[0.0, 1.0]`.
    ///
    /// Defined as 0.0 when capacity is 0. That is a policy choice, not an
    /// error: the degenerate buffer holds nothing.
    pub fn fill_level(&self) -> f64 {
        self.inner.lock().unwrap().fill_level()
    }

    /// Change the capacity to `new_capacity`.
    ///
    /// Existing elements are preserved in FIFO order up to
    /// `min(len, new_capacity)`, keeping the newest and dropping from the
    /// oldest end. `resize(0)` forces the degenerate empty/full state.
    /// Storage is reallocated; allocation failure aborts the process.
    pub fn resize(&self, new_capacity: usize) {
        self.inner.lock().unwrap().resize(new_capacity)
    }

    /// Drop all stored elements; capacity is unchanged.
    pub fn clear(&self) {
        self.inner.lock().unwrap().clear()
    }

    /// Consistent snapshot of occupancy and operation counters.
    ///
    /// Taken under a single lock acquisition, so
    /// `total_put == total_got + total_evicted + len` holds exactly in
    /// every snapshot.
    pub fn stats(&self) -> RingStats {
        self.inner.lock().unwrap().stats()
    }
}

impl<T> Default for RingBuffer<T> {
    fn default() -> Self {
        Self::new(crate::config::DEFAULT_RING_CAPACITY)
    }
}
