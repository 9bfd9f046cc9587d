//! Adapters from `std::io` streams to the character I/O traits (requires `std` feature).
//!
//! Transports that expose a session's channels as `Read` / `Write` byte
//! streams (SSH channels, TCP sockets, stdio) can wrap them here. Input is
//! decoded as UTF-8; malformed sequences become U+FFFD instead of ending the
//! session.

use crate::io::{CharSink, CharSource};
use core::char::REPLACEMENT_CHARACTER;
use std::io::{self, Read, Write};

/// UTF-8 decoding `CharSource` over a byte reader.
///
/// Reads one byte at a time, so wrap slow readers in `BufReader` if needed.
#[derive(Debug)]
pub struct Utf8Source<R> {
    inner: R,
    /// Byte read past a truncated sequence, returned by the next read
    pending: Option<u8>,
}

impl<R: Read> Utf8Source<R> {
    /// Wrap a byte reader.
    pub fn new(inner: R) -> Self {
        Self {
            inner,
            pending: None,
        }
    }

    /// Unwrap the reader.
    pub fn into_inner(self) -> R {
        self.inner
    }

    fn read_byte(&mut self) -> io::Result<Option<u8>> {
        if let Some(b) = self.pending.take() {
            return Ok(Some(b));
        }

        let mut buf = [0u8; 1];
        loop {
            match self.inner.read(&mut buf) {
                Ok(0) => return Ok(None),
                Ok(_) => return Ok(Some(buf[0])),
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => return Err(e),
            }
        }
    }
}

/// Encoded length announced by a UTF-8 lead byte (0 if not a valid lead).
fn sequence_len(lead: u8) -> usize {
    match lead {
        0x00..=0x7f => 1,
        0xc2..=0xdf => 2,
        0xe0..=0xef => 3,
        0xf0..=0xf4 => 4,
        _ => 0,
    }
}

fn is_continuation(b: u8) -> bool {
    b & 0xc0 == 0x80
}

impl<R: Read> CharSource for Utf8Source<R> {
    type Error = io::Error;

    fn get_char(&mut self) -> Result<Option<char>, Self::Error> {
        let Some(lead) = self.read_byte()? else {
            return Ok(None);
        };

        let len = sequence_len(lead);
        if len == 0 {
            return Ok(Some(REPLACEMENT_CHARACTER));
        }

        let mut bytes = [lead, 0, 0, 0];
        for slot in bytes.iter_mut().take(len).skip(1) {
            match self.read_byte()? {
                Some(b) if is_continuation(b) => *slot = b,
                Some(b) => {
                    self.pending = Some(b);
                    return Ok(Some(REPLACEMENT_CHARACTER));
                }
                None => return Ok(Some(REPLACEMENT_CHARACTER)),
            }
        }

        let c = core::str::from_utf8(&bytes[..len])
            .ok()
            .and_then(|s| s.chars().next())
            .unwrap_or(REPLACEMENT_CHARACTER);
        Ok(Some(c))
    }
}

/// UTF-8 encoding `CharSink` over a byte writer.
#[derive(Debug)]
pub struct WriteSink<W> {
    inner: W,
}

impl<W: Write> WriteSink<W> {
    /// Wrap a byte writer.
    pub fn new(inner: W) -> Self {
        Self { inner }
    }

    /// Borrow the writer.
    pub fn get_ref(&self) -> &W {
        &self.inner
    }

    /// Unwrap the writer.
    pub fn into_inner(self) -> W {
        self.inner
    }
}

impl<W: Write> CharSink for WriteSink<W> {
    type Error = io::Error;

    fn put_char(&mut self, c: char) -> Result<(), Self::Error> {
        let mut buf = [0u8; 4];
        self.inner.write_all(c.encode_utf8(&mut buf).as_bytes())
    }

    fn write_str(&mut self, s: &str) -> Result<(), Self::Error> {
        self.inner.write_all(s.as_bytes())
    }

    fn flush(&mut self) -> Result<(), Self::Error> {
        self.inner.flush()
    }
}
