//! Single-line edit buffer with cursor.
//!
//! Text lives in a fixed-capacity `heapless::String<N>` (N bytes of UTF-8);
//! the cursor counts units (chars), so it is always a valid insertion index
//! in `0..=len()`.

use crate::error::BufferFull;

/// View of the buffer used for rendering.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct LineSnapshot<'a> {
    /// Current text
    pub text: &'a str,

    /// Cursor offset in units
    pub cursor: usize,
}

/// Editable command line.
///
/// Mutated only through [`insert`](Self::insert),
/// [`delete_before_cursor`](Self::delete_before_cursor),
/// [`move_left`](Self::move_left) and [`move_right`](Self::move_right);
/// cleared by [`reset`](Self::reset) / [`take`](Self::take).
#[derive(Debug, Clone, Default)]
pub struct LineBuffer<const N: usize> {
    text: heapless::String<N>,
    cursor: usize,
}

impl<const N: usize> LineBuffer<N> {
    /// Create empty buffer.
    pub fn new() -> Self {
        Self {
            text: heapless::String::new(),
            cursor: 0,
        }
    }

    /// Insert `ch` at the cursor and advance the cursor by one.
    ///
    /// # Errors
    ///
    /// `BufferFull` if the encoded text would exceed N bytes. The buffer is
    /// left unchanged.
    pub fn insert(&mut self, ch: char) -> Result<(), BufferFull> {
        let at = self.byte_offset(self.cursor);

        if at == self.text.len() {
            self.text.push(ch).map_err(|_| BufferFull)?;
        } else {
            let mut rebuilt: heapless::String<N> = heapless::String::new();
            rebuilt.push_str(&self.text[..at]).map_err(|_| BufferFull)?;
            rebuilt.push(ch).map_err(|_| BufferFull)?;
            rebuilt.push_str(&self.text[at..]).map_err(|_| BufferFull)?;
            self.text = rebuilt;
        }

        self.cursor += 1;
        Ok(())
    }

    /// Remove the unit immediately before the cursor.
    ///
    /// No-op at cursor 0. Returns whether a unit was removed.
    pub fn delete_before_cursor(&mut self) -> bool {
        if self.cursor == 0 {
            return false;
        }

        let start = self.byte_offset(self.cursor - 1);
        let end = self.byte_offset(self.cursor);

        if end == self.text.len() {
            self.text.pop();
        } else {
            // Removing a char never grows the text, so capacity holds
            let mut rebuilt: heapless::String<N> = heapless::String::new();
            rebuilt.push_str(&self.text[..start]).ok();
            rebuilt.push_str(&self.text[end..]).ok();
            self.text = rebuilt;
        }

        self.cursor -= 1;
        true
    }

    /// Move cursor one unit left, stopping at 0.
    pub fn move_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    /// Move cursor one unit right, stopping at end of text.
    pub fn move_right(&mut self) {
        if self.cursor < self.len() {
            self.cursor += 1;
        }
    }

    /// Clear text and cursor.
    pub fn reset(&mut self) {
        self.text.clear();
        self.cursor = 0;
    }

    /// Take the text out, leaving the buffer reset.
    pub fn take(&mut self) -> heapless::String<N> {
        self.cursor = 0;
        core::mem::take(&mut self.text)
    }

    /// Current text and cursor.
    pub fn snapshot(&self) -> LineSnapshot<'_> {
        LineSnapshot {
            text: self.text.as_str(),
            cursor: self.cursor,
        }
    }

    /// Current text.
    pub fn as_str(&self) -> &str {
        self.text.as_str()
    }

    /// Cursor offset in units.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Text length in units.
    pub fn len(&self) -> usize {
        self.text.chars().count()
    }

    /// True if no text.
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Byte offset of the unit at index `unit` (or text length past the end).
    fn byte_offset(&self, unit: usize) -> usize {
        self.text
            .char_indices()
            .nth(unit)
            .map_or(self.text.len(), |(i, _)| i)
    }
}
