//! Key profiles and per-session configuration.
//!
//! `KeyProfile` is the decoding table: the raw unit values a terminal sends
//! for Enter and Backspace, and the fixed escape sequences for the cursor
//! keys. `SessionConfig` bundles a profile with the prompt and exit keyword.
//! Both are immutable once a session is built.

/// Length of a cursor-key escape sequence (prefix + 2 units).
pub const ESCAPE_SEQUENCE_LEN: usize = 3;

/// Raw escape sequence as read from the input stream.
pub type EscapeSequence = [char; ESCAPE_SEQUENCE_LEN];

/// Exit status reported to the transport when the user types the exit keyword.
pub const EXIT_STATUS_OK: i32 = 0;

/// Decoding table for one terminal profile.
///
/// See [`KeyProfile::VT100`] for the values a standard terminal sends in its
/// default (non-application) cursor mode.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct KeyProfile {
    /// Enter key (carriage return)
    pub enter: char,

    /// Backspace key
    pub backspace: char,

    /// First unit of every cursor-key sequence
    pub escape_prefix: char,

    /// Full cursor-left sequence, prefix included
    pub cursor_left: EscapeSequence,

    /// Full cursor-right sequence, prefix included
    pub cursor_right: EscapeSequence,
}

impl KeyProfile {
    /// Standard terminal in default mode:
    /// - Enter: 13
    /// - Backspace: 127
    /// - Escape prefix: 27
    /// - Cursor left: 27 91 68 (`ESC [ D`)
    /// - Cursor right: 27 91 67 (`ESC [ C`)
    pub const VT100: Self = Self {
        enter: '\r',
        backspace: '\x7f',
        escape_prefix: '\x1b',
        cursor_left: ['\x1b', '[', 'D'],
        cursor_right: ['\x1b', '[', 'C'],
    };

    /// Same profile with a different Enter unit.
    pub const fn with_enter(mut self, enter: char) -> Self {
        self.enter = enter;
        self
    }

    /// Same profile with a different Backspace unit (e.g. ASCII BS for
    /// terminals that send `^H`).
    pub const fn with_backspace(mut self, backspace: char) -> Self {
        self.backspace = backspace;
        self
    }

    /// Exact match against the cursor-left sequence.
    pub fn is_cursor_left(&self, seq: &EscapeSequence) -> bool {
        *seq == self.cursor_left
    }

    /// Exact match against the cursor-right sequence.
    pub fn is_cursor_right(&self, seq: &EscapeSequence) -> bool {
        *seq == self.cursor_right
    }
}

impl Default for KeyProfile {
    fn default() -> Self {
        Self::VT100
    }
}

/// Explicit configuration for one editing session.
///
/// Constructed by the transport and moved into the session; nothing is read
/// from global state.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct SessionConfig<'a> {
    /// Prompt written before every line
    pub prompt: &'a str,

    /// Decoding table
    pub profile: KeyProfile,

    /// Trimmed line that ends the session instead of being dispatched
    pub exit_keyword: &'a str,

    /// Status passed to the exit callback on the exit keyword
    pub exit_status: i32,
}

impl<'a> SessionConfig<'a> {
    /// Default exit keyword
    pub const DEFAULT_EXIT_KEYWORD: &'static str = "exit";

    /// Configuration with the VT100 profile and the `exit` keyword.
    pub const fn new(prompt: &'a str) -> Self {
        Self {
            prompt,
            profile: KeyProfile::VT100,
            exit_keyword: Self::DEFAULT_EXIT_KEYWORD,
            exit_status: EXIT_STATUS_OK,
        }
    }

    /// Use a different key profile.
    pub const fn with_profile(mut self, profile: KeyProfile) -> Self {
        self.profile = profile;
        self
    }

    /// Use a different exit keyword.
    pub const fn with_exit_keyword(mut self, keyword: &'a str) -> Self {
        self.exit_keyword = keyword;
        self
    }

    /// Report a different status on the exit keyword.
    pub const fn with_exit_status(mut self, status: i32) -> Self {
        self.exit_status = status;
        self
    }

    /// Prompt width in terminal columns (one per unit).
    pub fn prompt_width(&self) -> usize {
        self.prompt.chars().count()
    }
}
