//! Key decoder for raw terminal input.
//!
//! Classifies raw units into logical key events using a [`KeyProfile`].
//! Simple keys consume one unit; cursor keys consume exactly three (the
//! escape prefix plus two following units).
//!
//! Decoding is stateless apart from the stream position: every call to
//! [`KeyDecoder::decode`] yields one complete event or reports end of stream.

use crate::config::{ESCAPE_SEQUENCE_LEN, EscapeSequence, KeyProfile};
use crate::io::CharSource;

/// Logical key event from the terminal.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum KeyEvent {
    /// Enter key
    Enter,

    /// Backspace key
    Backspace,

    /// Cursor-left sequence, raw units attached
    CursorLeft(EscapeSequence),

    /// Cursor-right sequence, raw units attached
    CursorRight(EscapeSequence),

    /// Any other single unit
    Character(char),

    /// Escape sequence matching neither cursor key
    Unrecognized(EscapeSequence),
}

impl KeyEvent {
    /// Raw units to echo back verbatim, if this event carries any.
    pub fn raw_echo(&self) -> Option<&EscapeSequence> {
        match self {
            KeyEvent::CursorLeft(raw) | KeyEvent::CursorRight(raw) | KeyEvent::Unrecognized(raw) => {
                Some(raw)
            }
            KeyEvent::Enter | KeyEvent::Backspace | KeyEvent::Character(_) => None,
        }
    }
}

/// Outcome of classifying the first unit of a key.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub(crate) enum Lead {
    /// Complete single-unit event
    Key(KeyEvent),

    /// Escape prefix; two more units must be read
    Escape,
}

/// Stateless key decoder bound to one profile.
#[derive(Debug, Copy, Clone)]
pub struct KeyDecoder {
    profile: KeyProfile,
}

impl KeyDecoder {
    /// Create decoder for the given profile.
    pub fn new(profile: KeyProfile) -> Self {
        Self { profile }
    }

    /// Profile this decoder matches against.
    pub fn profile(&self) -> &KeyProfile {
        &self.profile
    }

    /// Read and decode exactly one key event.
    ///
    /// Blocks on the source until the event is complete. Returns `Ok(None)`
    /// if the stream ends, including in the middle of an escape sequence.
    ///
    /// # Examples
    ///
    /// ```rust,ignore
    /// // ESC [ D
    /// let event = decoder.decode(&mut io)?;
    /// assert_eq!(event, Some(KeyEvent::CursorLeft(['\x1b', '[', 'D'])));
    /// ```
    pub fn decode<S: CharSource>(&self, source: &mut S) -> Result<Option<KeyEvent>, S::Error> {
        let Some(first) = source.get_char()? else {
            return Ok(None);
        };

        match self.classify(first) {
            Lead::Key(event) => Ok(Some(event)),
            Lead::Escape => {
                let mut seq = [first; ESCAPE_SEQUENCE_LEN];
                for slot in seq.iter_mut().skip(1) {
                    match source.get_char()? {
                        Some(c) => *slot = c,
                        None => return Ok(None),
                    }
                }
                Ok(Some(self.classify_escape(seq)))
            }
        }
    }

    /// Async variant of [`decode`](Self::decode) (requires `async` feature).
    #[cfg(feature = "async")]
    pub async fn decode_async<S: crate::io::AsyncCharSource>(
        &self,
        source: &mut S,
    ) -> Result<Option<KeyEvent>, S::Error> {
        let Some(first) = source.get_char().await? else {
            return Ok(None);
        };

        match self.classify(first) {
            Lead::Key(event) => Ok(Some(event)),
            Lead::Escape => {
                let mut seq = [first; ESCAPE_SEQUENCE_LEN];
                for slot in seq.iter_mut().skip(1) {
                    match source.get_char().await? {
                        Some(c) => *slot = c,
                        None => return Ok(None),
                    }
                }
                Ok(Some(self.classify_escape(seq)))
            }
        }
    }

    /// Classify the first unit of a key.
    pub(crate) fn classify(&self, c: char) -> Lead {
        let p = &self.profile;
        if c == p.enter {
            Lead::Key(KeyEvent::Enter)
        } else if c == p.backspace {
            Lead::Key(KeyEvent::Backspace)
        } else if c == p.escape_prefix {
            Lead::Escape
        } else {
            Lead::Key(KeyEvent::Character(c))
        }
    }

    /// Classify a complete 3-unit escape sequence.
    pub(crate) fn classify_escape(&self, seq: EscapeSequence) -> KeyEvent {
        if self.profile.is_cursor_left(&seq) {
            KeyEvent::CursorLeft(seq)
        } else if self.profile.is_cursor_right(&seq) {
            KeyEvent::CursorRight(seq)
        } else {
            log::warn!(
                "Unsupported escape sequence {} {} {}",
                seq[0] as u32,
                seq[1] as u32,
                seq[2] as u32
            );
            KeyEvent::Unrecognized(seq)
        }
    }
}

impl Default for KeyDecoder {
    fn default() -> Self {
        Self::new(KeyProfile::VT100)
    }
}
