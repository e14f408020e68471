//! The buffer capability set and the unbounded strategy.

use std::collections::VecDeque;

use tracing::{debug, trace};

use crate::BufferError;

/// Capability set shared by every channel buffer strategy.
///
/// The channel runtime is cooperative and single-writer: exclusive access
/// is expressed through `&mut self`, so implementations need no internal
/// locking to keep FIFO order intact. A runtime that shares one buffer
/// across execution contexts must wrap it in its own mutex.
pub trait ChannelBuffer<T> {
    /// Whether an `offer` would require the sender to wait.
    ///
    /// The channel reads this before every send; strategies that can always
    /// accept report `false` unconditionally.
    fn is_full(&self) -> bool;

    /// Enqueue `item` as the most recently added element. O(1) amortized.
    fn offer(&mut self, item: T);

    /// Dequeue the least recently added element still present.
    ///
    /// Fails with [`BufferError::Empty`] when nothing is buffered.
    fn poll(&mut self) -> Result<T, BufferError>;

    /// Number of elements currently buffered. O(1).
    fn len(&self) -> usize;

    /// Whether no elements are buffered.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Mark the buffer closed for future inserts. Idempotent; elements
    /// already buffered remain pollable until drained.
    fn close(&mut self);

    /// Whether a send through this buffer can never block the sender.
    ///
    /// Channel constructors use this to decide if a put may proceed without
    /// a suspension point.
    fn is_unblocking(&self) -> bool {
        false
    }
}

/// A FIFO buffer that grows without bound and never reports full.
///
/// Backing the queue with a deque keeps both ends O(1); a singly-ended list
/// would make either enqueue or dequeue linear and turn the buffer into a
/// latency hazard under sustained throughput.
#[derive(Debug, Clone, Default)]
pub struct UnboundedBuffer<T> {
    items: VecDeque<T>,
    closed: bool,
}

impl<T> UnboundedBuffer<T> {
    /// Create an empty buffer.
    pub fn new() -> Self {
        Self {
            items: VecDeque::new(),
            closed: false,
        }
    }

    /// Whether `close` has been called.
    pub fn is_closed(&self) -> bool {
        self.closed
    }
}

impl<T> ChannelBuffer<T> for UnboundedBuffer<T> {
    /// Always `false`; senders never wait on this strategy.
    fn is_full(&self) -> bool {
        false
    }

    fn offer(&mut self, item: T) {
        if self.closed {
            // The owning channel stops offering once closed; an offer here
            // is a contract breach and the item is dropped.
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

    fn is_unblocking(&self) -> bool {
        true
    }
}
