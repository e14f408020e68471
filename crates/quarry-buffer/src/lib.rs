//! Channel buffer strategies for Quarry's query pipeline.
//!
//! The query compiler hands results between pipeline stages through
//! channels owned by a cooperative, single-threaded runtime. Each channel is
//! backed by one buffer implementing the [`ChannelBuffer`] capability set;
//! the channel constructor picks a strategy per channel:
//! - [`UnboundedBuffer`] — never full, senders never wait
//! - [`BoundedBuffer`] — fixed capacity, senders suspend when full
//! - [`DroppingBuffer`] — fixed capacity, newest item dropped when full
//! - [`SlidingBuffer`] — fixed capacity, oldest item evicted when full

mod buffer;
mod error;
mod variants;

pub use buffer::{ChannelBuffer, UnboundedBuffer};
pub use error::BufferError;
pub use variants::{BoundedBuffer, DroppingBuffer, SlidingBuffer};
