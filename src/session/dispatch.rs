//! Collaborator traits implemented by the surrounding application.
//!
//! The session only decides *when* a line is complete; what a line means is
//! up to the [`CommandDispatcher`], and how a session ends is reported to
//! the transport through [`ExitCallback`].

use crate::io::CharSink;

/// Executes a completed command line.
///
/// # Example
///
/// ```rust,ignore
/// struct Echo;
///
/// impl<W: CharSink, E: CharSink> CommandDispatcher<W, E> for Echo {
///     fn dispatch(&mut self, command: &str, out: &mut W, _err: &mut E) -> Result<(), W::Error> {
///         out.write_str(command)?;
///         out.write_str("\r\n")
///     }
/// }
/// ```
pub trait CommandDispatcher<W: CharSink, E: CharSink> {
    /// Run `command` (already trimmed, possibly empty).
    ///
    /// Regular output goes to `out`, error text to `err`. The session
    /// flushes both after this returns.
    ///
    /// # Errors
    ///
    /// A write failure on `out`; the session treats it as fatal.
    fn dispatch(&mut self, command: &str, out: &mut W, err: &mut E) -> Result<(), W::Error>;
}

/// Receives the exit status when the user ends the session.
///
/// Invoked at most once, and only for the exit keyword; a closed input
/// stream ends the session without calling it.
pub trait ExitCallback {
    /// Session ended by user command with `status`.
    fn on_exit(&mut self, status: i32);
}

/// Exit callback that ignores the status.
#[derive(Debug, Copy, Clone, Default)]
pub struct NoExitCallback;

impl ExitCallback for NoExitCallback {
    fn on_exit(&mut self, _status: i32) {}
}
