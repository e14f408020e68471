//! Error types for channel buffers.

use thiserror::Error;

/// Errors that can occur in buffer operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BufferError {
    /// `poll` was called with no element buffered.
    ///
    /// The channel runtime only polls after being notified an element is
    /// available, so hitting this is a bug in the caller, not a condition
    /// to recover from.
    #[error("poll on empty buffer")]
    Empty,
}
