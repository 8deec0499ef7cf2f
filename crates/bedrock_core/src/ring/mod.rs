//! # Rings
//!
//! Power-of-two index arithmetic and a FIFO built on top of it.
//!
//! [`RingIndex`] is pure cursor math for callers that own their slot
//! storage (DMA buffers, static arrays). [`RingBuffer`] pairs it with
//! owned storage for everyone else.

mod buffer;
mod index;

pub use buffer::RingBuffer;
pub use index::RingIndex;
