//! Shared test helpers to reduce duplication across integration tests.

#![allow(dead_code)]

#[allow(clippy::duplicate_mod)]
#[path = "fixtures/mod.rs"]
pub mod fixtures;

use fixtures::{MockInput, MockOutput, RecordingDispatcher, RecordingExit};
use termline::{EditSession, SessionConfig, Termination};

/// Prompt used by every test session.
pub const PROMPT: &str = "> ";

/// One cursor-right step in the default profile.
pub const RIGHT: &str = "\x1b[C";

/// Session type used across integration tests.
pub type TestSession =
    EditSession<'static, MockInput, MockOutput, MockOutput, RecordingDispatcher, RecordingExit>;

// ============================================================================
// Session Creation Helpers
// ============================================================================

/// Create a session reading `input`, with a silent recording dispatcher.
pub fn create_session(input: &str) -> TestSession {
    create_session_with(MockInput::new(input), RecordingDispatcher::default())
}

/// Create a session from explicit input and dispatcher.
pub fn create_session_with(input: MockInput, dispatcher: RecordingDispatcher) -> TestSession {
    EditSession::new(
        SessionConfig::new(PROMPT),
        input,
        MockOutput::new(),
        MockOutput::new(),
        dispatcher,
        RecordingExit::default(),
    )
}

/// Run a session over `input` to completion.
pub fn run_session(input: &str) -> (Termination, TestSession) {
    let mut session = create_session(input);
    let termination = session.run();
    (termination, session)
}

// ============================================================================
// Rendering Helpers
// ============================================================================

/// Expected output of one full-line redraw with the cursor after `cursor` units.
pub fn redraw(text: &str, cursor: usize) -> String {
    let steps = PROMPT.chars().count() + cursor;
    format!("\r{}{}\r{}", PROMPT, text, RIGHT.repeat(steps))
}

/// Expected output of the blank pass before a backspace redraw.
pub fn blank(len: usize) -> String {
    format!("\r{}{}", PROMPT, " ".repeat(len))
}

// ============================================================================
// Assertion Helpers
// ============================================================================

/// Assert that output contains an ANSI escape sequence.
pub fn assert_contains_ansi(output: &str, sequence: &str) {
    assert!(
        output.contains(sequence),
        "Expected ANSI sequence '{}' in output, got: {:?}",
        sequence.escape_default(),
        output
    );
}

/// Assert that output contains all expected strings.
pub fn assert_contains_all(output: &str, expected: &[&str]) {
    for exp in expected {
        assert!(
            output.contains(exp),
            "Expected '{}' in output, got: {:?}",
            exp,
            output
        );
    }
}

/// Assert that output does NOT contain any of the strings.
pub fn assert_contains_none(output: &str, forbidden: &[&str]) {
    for forbid in forbidden {
        assert!(
            !output.contains(forbid),
            "Did not expect '{}' in output, got: {:?}",
            forbid,
            output
        );
    }
}
