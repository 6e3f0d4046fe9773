//! Mutex-guarded ring buffer implementation

mod raw;
mod shared;


pub use shared::RingBuffer;
