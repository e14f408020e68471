//! Fixed-capacity buffer strategies.
//!
//! All three share the bounded backing deque; they differ only in what
//! happens at capacity. Bounded makes the sender wait (the channel suspends
//! on `is_full`), dropping sheds the incoming item, sliding evicts the
//! oldest buffered one. Dropping and sliding are therefore unblocking
//! strategies like [`UnboundedBuffer`](crate::UnboundedBuffer), but with a
//! memory ceiling.

use std::collections::VecDeque;

use tracing::{debug, trace};

use crate::{BufferError, ChannelBuffer};

/// A FIFO buffer with a fixed capacity that makes senders wait when full.
#[derive(Debug, Clone)]
pub struct BoundedBuffer<T> {
    items: VecDeque<T>,
    capacity: usize,
    closed: bool,
}

impl<T> BoundedBuffer<T> {
    /// Create an empty buffer holding at most `capacity` elements.
    ///
    /// Panics if `capacity` is zero.
    pub fn new(capacity: usize) -> Self {
        assert!(capacity > 0, "buffer capacity must be positive");
        Self {
            items: VecDeque::with_capacity(capacity),
            capacity,
            closed: false,
        }
    }
}

impl<T> ChannelBuffer<T> for BoundedBuffer<T> {
    fn is_full(&self) -> bool {
        self.items.len() >= self.capacity
    }

    /// Always accepts. `is_full` is advisory: the channel suspends the
    /// sender when it reads full, the buffer itself never rejects. An
    /// unchecked offer past capacity still keeps FIFO order.
    fn offer(&mut self, item: T) {
        if self.closed {
            debug!("offer on closed buffer, item dropped");
            return;
        }
        self.items.push_back(item);
    }

    fn poll(&mut self) -> Result<T, BufferError> {
        self.items.pop_front().ok_or(BufferError::Empty)
    }

    fn len(&self) -> usize {
        self.items.len()
    }

    fn close(&mut self) {
        if !self.closed {
            trace!(buffered = self.items.len(), "buffer closed");
            self.closed = true;
        }
    }
}

/// A fixed-capacity FIFO buffer that discards the incoming item when full.
#[derive(Debug, Clone)]
pub struct DroppingBuffer<T> {
    items: VecDeque<T>,
    capacity: usize,
    closed: bool,
}

impl<T> DroppingBuffer<T> {
    /// Create an empty buffer holding at most `capacity` elements.
    ///
    /// Panics if `capacity` is zero.
    pub fn new(capacity: usize) -> Self {
        assert!(capacity > 0, "buffer capacity must be positive");
        Self {
            items: VecDeque::with_capacity(capacity),
            capacity,
            closed: false,
        }
    }
}

impl<T> ChannelBuffer<T> for DroppingBuffer<T> {
    /// Always `false`; at capacity the incoming item is shed instead.
    fn is_full(&self) -> bool {
        false
    }

    fn offer(&mut self, item: T) {
        if self.closed {
            debug!("offer on closed buffer, item dropped");
            return;
        }
        if self.items.len() >= self.capacity {
            trace!(capacity = self.capacity, "buffer at capacity, item dropped");
            return;
        }
        self.items.push_back(item);
    }

    fn poll(&mut self) -> Result<T, BufferError> {
        self.items.pop_front().ok_or(BufferError::Empty)
    }

    fn len(&self) -> usize {
        self.items.len()
    }

    fn close(&mut self) {
        if !self.closed {
            trace!(buffered = self.items.len(), "buffer closed");
            self.closed = true;
        }
    }

    fn is_unblocking(&self) -> bool {
        true
    }
}

/// A fixed-capacity FIFO buffer that evicts the oldest element when full.
#[derive(Debug, Clone)]
pub struct SlidingBuffer<T> {
    items: VecDeque<T>,
    capacity: usize,
    closed: bool,
}

impl<T> SlidingBuffer<T> {
    /// Create an empty buffer holding at most `capacity` elements.
    ///
    /// Panics if `capacity` is zero.
    pub fn new(capacity: usize) -> Self {
        assert!(capacity > 0, "buffer capacity must be positive");
        Self {
            items: VecDeque::with_capacity(capacity),
            capacity,
            closed: false,
        }
    }
}

impl<T> ChannelBuffer<T> for SlidingBuffer<T> {
    /// Always `false`; at capacity the oldest element is evicted instead.
    fn is_full(&self) -> bool {
        false
    }

    fn offer(&mut self, item: T) {
        if self.closed {
            debug!("offer on closed buffer, item dropped");
            return;
        }
        if self.items.len() >= self.capacity {
            trace!(capacity = self.capacity, "buffer at capacity, oldest evicted");
            self.items.pop_front();
        }
        self.items.push_back(item);
    }

    fn poll(&mut self) -> Result<T, BufferError> {
        self.items.pop_front().ok_or(BufferError::Empty)
    }

    fn len(&self) -> usize {
        self.items.len()
    }

    fn close(&mut self) {
        if !self.closed {
            trace!(buffered = self.items.len(), "buffer closed");
            self.closed = true;
        }
    }

    fn is_unblocking(&self) -> bool {
        true
    }
}
