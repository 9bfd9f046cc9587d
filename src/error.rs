//! Error types for the editing session.
//!
//! None of these escape [`EditSession::run`](crate::EditSession::run); the
//! session logs them and turns them into a [`Termination`](crate::Termination).

use core::fmt;

/// Session-level failure while reading, decoding or rendering.
///
/// Generic over the transport's I/O error type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionError<E> {
    /// End of input reached (client hung up, possibly mid escape sequence)
    StreamClosed,

    /// Read or write failed; the transport is assumed unusable
    Io(E),
}

impl<E> From<E> for SessionError<E> {
    fn from(e: E) -> Self {
        SessionError::Io(e)
    }
}

impl<E: fmt::Debug> fmt::Display for SessionError<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SessionError::StreamClosed => write!(f, "Input stream closed"),
            SessionError::Io(e) => write!(f, "I/O error: {:?}", e),
        }
    }
}

#[cfg(feature = "std")]
impl<E: fmt::Debug> std::error::Error for SessionError<E> {}

/// Line buffer capacity exceeded.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct BufferFull;

impl fmt::Display for BufferFull {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Buffer full")
    }
}

#[cfg(feature = "std")]
impl std::error::Error for BufferFull {}
