//! # Carousel - Thread-Shared Bounded Ring Buffer
//!
//! Carousel is a fixed-capacity FIFO ring buffer built to be driven by any
//! number of producer and consumer threads at once. One internal mutex
//! guards the whole structure; nothing in the public API can reach the
//! storage or the cursors without it.
//!
//! ## Features
//!
//! - **Bounded FIFO**: wrap-around storage with head/tail cursors and an
//!   explicit full flag
//! - **Non-blocking contract**: full and empty conditions fail immediately
//!   with [`CarouselError::Capacity`] or [`CarouselError::Underflow`],
//!   never suspend
//! - **Overwrite mode**: [`RingBuffer::put_overwrite`] evicts and returns
//!   the oldest element instead of failing when full
//! - **Bulk transfers**: all-or-nothing [`RingBuffer::put_bulk`] and
//!   [`RingBuffer::get_bulk`]
//! - **Runtime resize**: [`RingBuffer::resize`] keeps the newest elements,
//!   dropping from the oldest end
//! - **Introspection**: occupancy, fill level, and a consistent
//!   [`RingStats`] snapshot
//!
//! ## Example
//!
//! ```
//! use carousel::RingBuffer;
//!
//! let ring: RingBuffer<u32> = RingBuffer::new(4);
//! ring.put(1)?;
//! ring.put(2)?;
//! assert_eq!(ring.len(), 2);
//! assert_eq!(ring.peek()?, 1);
//! assert_eq!(ring.get()?, 1);
//! assert_eq!(ring.get()?, 2);
//! assert!(ring.get().is_err());
//! # Ok::<(), carousel::CarouselError>(())
//! ```

pub mod error;
pub mod ring;
pub mod stats;

pub use error::{CarouselError, Result};
pub use ring::RingBuffer;
pub use stats::RingStats;

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Default configuration constants
pub mod config {
    /// Default ring buffer capacity used by `RingBuffer::default()`
    pub const DEFAULT_RING_CAPACITY: usize = 4096;
}
