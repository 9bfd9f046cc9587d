//! Character I/O abstraction for the session's raw streams.
//!
//! A session owns three streams: the raw input it decodes keys from, the
//! primary output (prompt, echo, cursor control) and a secondary output that
//! is only handed to the command dispatcher for error text. The traits here
//! are implemented by the transport layer (SSH channel, UART, stdio, ...).

use core::fmt::Debug;

/// Blocking source of raw input units.
///
/// Units are already decoded from the transport's byte encoding (UTF-8 for
/// the `std` adapters), one `char` per unit.
pub trait CharSource {
    /// Transport-specific error type
    type Error: Debug;

    /// Blocking read of the next raw unit.
    ///
    /// Returns:
    /// - `Ok(Some(char))` for the next unit
    /// - `Ok(None)` when the stream has ended (client hung up)
    /// - `Err(Self::Error)` on I/O error
    fn get_char(&mut self) -> Result<Option<char>, Self::Error>;
}

/// Character output channel.
///
/// Implementations may buffer internally. The session calls [`flush`] after
/// every visible change, so buffered output must reach the remote terminal
/// when it does.
///
/// [`flush`]: CharSink::flush
pub trait CharSink {
    /// Transport-specific error type
    type Error: Debug;

    /// Write character to output.
    fn put_char(&mut self, c: char) -> Result<(), Self::Error>;

    /// Write string to output.
    ///
    /// Default implementation uses `put_char()` repeatedly.
    /// Override for more efficient bulk writes if needed.
    fn write_str(&mut self, s: &str) -> Result<(), Self::Error> {
        for c in s.chars() {
            self.put_char(c)?;
        }
        Ok(())
    }

    /// Push everything written so far to the remote side.
    fn flush(&mut self) -> Result<(), Self::Error>;
}

/// Async source of raw input units (requires `async` feature).
///
/// Same contract as [`CharSource`], but the read suspends the session task
/// instead of blocking the thread.
#[cfg(feature = "async")]
pub trait AsyncCharSource {
    /// Transport-specific error type
    type Error: Debug;

    /// Wait for the next raw unit; `Ok(None)` at end of stream.
    #[allow(async_fn_in_trait)]
    async fn get_char(&mut self) -> Result<Option<char>, Self::Error>;
}
