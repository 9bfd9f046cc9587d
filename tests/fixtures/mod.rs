//! Test fixtures for termline session testing.
//!
//! Provides:
//! - `MockInput`: Scripted raw input with optional read failure at the end
//! - `MockOutput`: Output capture with flush counting and write/flush failure injection
//! - `RecordingDispatcher`: Dispatcher that records every command line
//! - `RecordingExit`: Exit callback that records every status

#![allow(dead_code)]

use std::collections::VecDeque;
use termline::{CharSink, CharSource, CommandDispatcher, ExitCallback};

// ============================================================================
// MockInput - Scripted Raw Input
// ============================================================================

/// Scripted input stream.
///
/// Yields the queued units in order, then either end of stream or, with
/// `fail_at_end`, a read error.
#[derive(Debug, Default)]
pub struct MockInput {
    /// Units still to be read
    queue: VecDeque<char>,

    /// Report an error instead of end of stream once drained
    fail_at_end: bool,

    /// Number of units handed out
    reads: usize,
}

impl MockInput {
    /// Input stream yielding the chars of `s`.
    pub fn new(s: &str) -> Self {
        Self {
            queue: s.chars().collect(),
            ..Self::default()
        }
    }

    /// Input stream yielding raw unit values.
    pub fn from_units(units: &[u32]) -> Self {
        Self {
            queue: units.iter().filter_map(|&u| char::from_u32(u)).collect(),
            ..Self::default()
        }
    }

    /// Fail the read after the last unit instead of closing.
    pub fn failing_at_end(mut self) -> Self {
        self.fail_at_end = true;
        self
    }

    /// Units consumed so far.
    pub fn reads(&self) -> usize {
        self.reads
    }

    /// Units left unread.
    pub fn remaining(&self) -> usize {
        self.queue.len()
    }

    fn next_unit(&mut self) -> Result<Option<char>, ()> {
        match self.queue.pop_front() {
            Some(c) => {
                self.reads += 1;
                Ok(Some(c))
            }
            None if self.fail_at_end => Err(()),
            None => Ok(None),
        }
    }
}

impl CharSource for MockInput {
    type Error = ();

    fn get_char(&mut self) -> Result<Option<char>, ()> {
        self.next_unit()
    }
}

#[cfg(feature = "async")]
impl termline::AsyncCharSource for MockInput {
    type Error = ();

    async fn get_char(&mut self) -> Result<Option<char>, ()> {
        // Suspend like a real socket read would
        tokio::task::yield_now().await;
        self.next_unit()
    }
}

// ============================================================================
// MockOutput - Output Capture
// ============================================================================

/// Captures everything written, and what had been written at each flush.
#[derive(Debug, Default)]
pub struct MockOutput {
    /// All output so far
    output: String,

    /// Length of `output` at each flush
    flush_marks: Vec<usize>,

    /// Fail every write
    fail_writes: bool,

    /// Fail every flush
    fail_flush: bool,
}

impl MockOutput {
    /// Empty capture.
    pub fn new() -> Self {
        Self::default()
    }

    /// Capture that rejects every write.
    pub fn failing_writes() -> Self {
        Self {
            fail_writes: true,
            ..Self::default()
        }
    }

    /// Capture that accepts writes but rejects every flush.
    pub fn failing_flush() -> Self {
        Self {
            fail_flush: true,
            ..Self::default()
        }
    }

    /// Everything written.
    pub fn output(&self) -> &str {
        &self.output
    }

    /// Everything written up to the last flush.
    pub fn flushed_output(&self) -> &str {
        let end = self.flush_marks.last().copied().unwrap_or(0);
        &self.output[..end]
    }

    /// Number of flushes.
    pub fn flush_count(&self) -> usize {
        self.flush_marks.len()
    }
}

impl CharSink for MockOutput {
    type Error = ();

    fn put_char(&mut self, c: char) -> Result<(), Self::Error> {
        if self.fail_writes {
            return Err(());
        }
        self.output.push(c);
        Ok(())
    }

    fn flush(&mut self) -> Result<(), Self::Error> {
        if self.fail_flush {
            return Err(());
        }
        self.flush_marks.push(self.output.len());
        Ok(())
    }
}

// ============================================================================
// RecordingDispatcher - Command Dispatch Capture
// ============================================================================

/// Records dispatched commands and optionally answers on either channel.
#[derive(Debug, Default)]
pub struct RecordingDispatcher {
    /// Every command line received, in order
    pub commands: Vec<String>,

    /// Written to the primary channel for each command
    pub reply: Option<&'static str>,

    /// Written to the error channel for each command
    pub error_reply: Option<&'static str>,

    /// Return an error after recording
    pub fail: bool,
}

impl RecordingDispatcher {
    /// Dispatcher that answers `reply` on the primary channel.
    pub fn replying(reply: &'static str) -> Self {
        Self {
            reply: Some(reply),
            ..Self::default()
        }
    }

    /// Dispatcher that answers `reply` on the error channel.
    pub fn replying_error(reply: &'static str) -> Self {
        Self {
            error_reply: Some(reply),
            ..Self::default()
        }
    }

    /// Dispatcher that fails every command.
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }
}

impl CommandDispatcher<MockOutput, MockOutput> for RecordingDispatcher {
    fn dispatch(
        &mut self,
        command: &str,
        out: &mut MockOutput,
        err: &mut MockOutput,
    ) -> Result<(), ()> {
        self.commands.push(command.to_string());

        if let Some(reply) = self.reply {
            out.write_str(reply)?;
        }
        if let Some(reply) = self.error_reply {
            err.write_str(reply)?;
        }
        if self.fail {
            return Err(());
        }
        Ok(())
    }
}

// ============================================================================
// RecordingExit - Exit Callback Capture
// ============================================================================

/// Records every exit status it receives.
#[derive(Debug, Default)]
pub struct RecordingExit {
    /// Statuses in call order
    pub statuses: Vec<i32>,
}

impl ExitCallback for RecordingExit {
    fn on_exit(&mut self, status: i32) {
        self.statuses.push(status);
    }
}
