//! Editing session: read loop, line rendering and dispatch.
//!
//! `EditSession` owns the decoder, the line buffer and all three streams of
//! one client connection. Each iteration reads one key, applies it to the
//! buffer, re-renders the line and flushes; Enter hands the trimmed line to
//! the dispatcher.

use crate::config::SessionConfig;
use crate::error::{BufferFull, SessionError};
use crate::io::{CharSink, CharSource};

// Sub-modules
pub mod buffer;
pub mod decoder;
pub mod dispatch;

// Re-export key types
pub use buffer::{LineBuffer, LineSnapshot};
pub use decoder::{KeyDecoder, KeyEvent};
pub use dispatch::{CommandDispatcher, ExitCallback, NoExitCallback};

/// Line capacity in bytes used when none is given.
pub const DEFAULT_LINE_CAPACITY: usize = 128;

/// Bell, written when a character does not fit in the line buffer.
const BELL: char = '\x07';

/// Written on Enter before the command runs.
const LINE_END: &str = "\n\r";

/// Why a session stopped.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Termination {
    /// User typed the exit keyword; exit callback was invoked with `status`
    ExitCommand {
        /// Status reported to the transport
        status: i32,
    },

    /// Input stream ended (client hung up)
    StreamClosed,

    /// Read or write failed
    IoFailure,
}

/// Session lifecycle.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum SessionState {
    /// Constructed, prompt not written yet
    Inactive,

    /// Accumulating a line
    Editing,

    /// Read loop has exited
    Terminated(Termination),
}

/// Result of applying one key.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
enum Flow {
    Continue,
    Exit(i32),
}

/// Interactive single-line editor bound to one client connection.
///
/// Generic over:
/// - `'a`: Lifetime of the prompt and exit keyword
/// - `R`: Raw input source (`CharSource`, or `AsyncCharSource` with `async`)
/// - `W`: Primary output (prompt, echo, cursor control)
/// - `E`: Secondary output handed to the dispatcher for error text
/// - `D`: Command dispatcher
/// - `X`: Exit callback
/// - `N`: Line capacity in bytes
pub struct EditSession<'a, R, W, E, D, X, const N: usize = DEFAULT_LINE_CAPACITY> {
    /// Prompt, key profile and exit keyword
    config: SessionConfig<'a>,

    /// Key decoder built from `config.profile`
    decoder: KeyDecoder,

    /// Line being edited
    buffer: LineBuffer<N>,

    /// Lifecycle state
    state: SessionState,

    /// Raw input
    input: R,

    /// Primary output
    output: W,

    /// Error output
    error: E,

    /// Receives completed lines
    dispatcher: D,

    /// Receives the exit status on the exit keyword
    on_exit: X,
}

// ============================================================================
// Debug implementation
// ============================================================================

impl<R, W, E, D, X, const N: usize> core::fmt::Debug for EditSession<'_, R, W, E, D, X, N> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("EditSession")
            .field("prompt", &self.config.prompt)
            .field("state", &self.state)
            .field("buffer", &self.buffer.as_str())
            .field("cursor", &self.buffer.cursor())
            .finish_non_exhaustive()
    }
}

// ============================================================================
// Construction and accessors
// ============================================================================

impl<'a, R, W, E, D, X, const N: usize> EditSession<'a, R, W, E, D, X, N> {
    /// Create a session. Nothing is written until [`run`](Self::run).
    pub fn new(
        config: SessionConfig<'a>,
        input: R,
        output: W,
        error: E,
        dispatcher: D,
        on_exit: X,
    ) -> Self {
        Self {
            decoder: KeyDecoder::new(config.profile),
            config,
            buffer: LineBuffer::new(),
            state: SessionState::Inactive,
            input,
            output,
            error,
            dispatcher,
            on_exit,
        }
    }

    /// Current lifecycle state.
    pub fn state(&self) -> SessionState {
        self.state
    }

    /// Session configuration.
    pub fn config(&self) -> &SessionConfig<'a> {
        &self.config
    }

    /// Line currently being edited.
    pub fn line(&self) -> LineSnapshot<'_> {
        self.buffer.snapshot()
    }

    /// Raw input source.
    pub fn input(&self) -> &R {
        &self.input
    }

    /// Primary output.
    pub fn output(&self) -> &W {
        &self.output
    }

    /// Error output.
    pub fn error_output(&self) -> &E {
        &self.error
    }

    /// Command dispatcher.
    pub fn dispatcher(&self) -> &D {
        &self.dispatcher
    }

    /// Exit callback.
    pub fn exit_callback(&self) -> &X {
        &self.on_exit
    }

    /// Give back the streams and collaborators.
    pub fn into_parts(self) -> (R, W, E, D, X) {
        (self.input, self.output, self.error, self.dispatcher, self.on_exit)
    }
}

// ============================================================================
// Key handling and rendering (shared by the sync and async loops)
// ============================================================================

impl<R, W, E, D, X, const N: usize> EditSession<'_, R, W, E, D, X, N>
where
    W: CharSink,
    E: CharSink<Error = W::Error>,
    D: CommandDispatcher<W, E>,
    X: ExitCallback,
{
    /// Write the first prompt and enter Editing.
    fn start(&mut self) -> Result<(), SessionError<W::Error>> {
        self.state = SessionState::Editing;
        self.write_prompt()
    }

    /// Apply one decoded key.
    fn handle_event(&mut self, event: KeyEvent) -> Result<Flow, SessionError<W::Error>> {
        match event {
            KeyEvent::Enter => self.handle_enter(),

            KeyEvent::Backspace => {
                self.handle_backspace()?;
                Ok(Flow::Continue)
            }

            KeyEvent::Character(c) => {
                self.handle_char(c)?;
                Ok(Flow::Continue)
            }

            KeyEvent::CursorLeft(_) | KeyEvent::CursorRight(_) | KeyEvent::Unrecognized(_) => {
                // Buffer cursor stays put; only the terminal's cursor moves
                if let Some(raw) = event.raw_echo() {
                    self.write_units(raw)?;
                    self.output.flush()?;
                }
                Ok(Flow::Continue)
            }
        }
    }

    /// Insert a character and redraw.
    fn handle_char(&mut self, c: char) -> Result<(), SessionError<W::Error>> {
        match self.buffer.insert(c) {
            Ok(()) => self.render_line()?,
            Err(BufferFull) => {
                log::debug!("Line buffer full, dropping {:?}", c);
                self.output.put_char(BELL)?;
            }
        }
        self.output.flush()?;
        Ok(())
    }

    /// Blank out the displayed line, delete one unit and redraw.
    fn handle_backspace(&mut self) -> Result<(), SessionError<W::Error>> {
        self.output.put_char('\r')?;
        self.output.write_str(self.config.prompt)?;
        for _ in 0..self.buffer.len() {
            self.output.put_char(' ')?;
        }

        self.buffer.delete_before_cursor();
        self.render_line()?;
        self.output.flush()?;
        Ok(())
    }

    /// Finish the line: exit on the keyword, otherwise dispatch it.
    fn handle_enter(&mut self) -> Result<Flow, SessionError<W::Error>> {
        self.output.write_str(LINE_END)?;

        let line = self.buffer.take();
        let command = line.trim();

        if command == self.config.exit_keyword {
            let status = self.config.exit_status;
            log::info!("Exit keyword received, ending session with status {}", status);
            self.on_exit.on_exit(status);
            if let Err(e) = self.output.flush() {
                log::debug!("Flush after exit failed: {:?}", e);
            }
            return Ok(Flow::Exit(status));
        }

        log::trace!("Dispatching {:?}", command);
        self.dispatcher
            .dispatch(command, &mut self.output, &mut self.error)?;
        self.output.flush()?;
        self.error.flush()?;

        self.write_prompt()?;
        Ok(Flow::Continue)
    }

    /// Redraw prompt and text from column 0, then step the cursor right
    /// past the prompt to the buffer's cursor offset.
    ///
    /// Uses the profile's cursor-right sequence rather than an absolute
    /// positioning command, so only sequences the profile knows are emitted.
    fn render_line(&mut self) -> Result<(), SessionError<W::Error>> {
        let line = self.buffer.snapshot();

        self.output.put_char('\r')?;
        self.output.write_str(self.config.prompt)?;
        self.output.write_str(line.text)?;
        self.output.put_char('\r')?;

        let steps = self.config.prompt_width() + line.cursor;
        let step = self.config.profile.cursor_right;
        for _ in 0..steps {
            for &c in step.iter() {
                self.output.put_char(c)?;
            }
        }
        Ok(())
    }

    /// Write the prompt and flush.
    fn write_prompt(&mut self) -> Result<(), SessionError<W::Error>> {
        self.output.write_str(self.config.prompt)?;
        self.output.flush()?;
        Ok(())
    }

    /// Echo raw units verbatim.
    fn write_units(&mut self, units: &[char]) -> Result<(), W::Error> {
        for &c in units {
            self.output.put_char(c)?;
        }
        Ok(())
    }

    /// Record how the loop ended and log it.
    fn finish(&mut self, outcome: Result<i32, SessionError<W::Error>>) -> Termination {
        let termination = match outcome {
            Ok(status) => Termination::ExitCommand { status },
            Err(SessionError::StreamClosed) => {
                log::debug!(
                    "Input closed with {} unit(s) pending, ending session",
                    self.buffer.len()
                );
                Termination::StreamClosed
            }
            Err(SessionError::Io(e)) => {
                log::error!("Session I/O failure: {:?}", e);
                Termination::IoFailure
            }
        };

        self.state = SessionState::Terminated(termination);
        termination
    }
}

// ============================================================================
// Blocking read loop
// ============================================================================

impl<R, W, E, D, X, const N: usize> EditSession<'_, R, W, E, D, X, N>
where
    R: CharSource<Error = W::Error>,
    W: CharSink,
    E: CharSink<Error = W::Error>,
    D: CommandDispatcher<W, E>,
    X: ExitCallback,
{
    /// Run the session until exit keyword, end of input or I/O failure.
    ///
    /// Writes the prompt, then blocks on the input source for each key.
    /// All errors are handled here; the returned value says how the session
    /// ended. Calling `run` again on a terminated session returns the same
    /// value without touching the streams.
    pub fn run(&mut self) -> Termination {
        if let SessionState::Terminated(termination) = self.state {
            return termination;
        }

        let outcome = self.read_loop();
        self.finish(outcome)
    }

    fn read_loop(&mut self) -> Result<i32, SessionError<W::Error>> {
        self.start()?;
        loop {
            let event = self
                .decoder
                .decode(&mut self.input)?
                .ok_or(SessionError::StreamClosed)?;

            if let Flow::Exit(status) = self.handle_event(event)? {
                return Ok(status);
            }
        }
    }
}

// ============================================================================
// Async read loop
// ============================================================================

#[cfg(feature = "async")]
impl<R, W, E, D, X, const N: usize> EditSession<'_, R, W, E, D, X, N>
where
    R: crate::io::AsyncCharSource<Error = W::Error>,
    W: CharSink,
    E: CharSink<Error = W::Error>,
    D: CommandDispatcher<W, E>,
    X: ExitCallback,
{
    /// Async variant of [`run`](Self::run) (requires `async` feature).
    ///
    /// The task suspends only while waiting for input; rendering and
    /// dispatch run to completion between reads.
    pub async fn run_async(&mut self) -> Termination {
        if let SessionState::Terminated(termination) = self.state {
            return termination;
        }

        let outcome = self.read_loop_async().await;
        self.finish(outcome)
    }

    async fn read_loop_async(&mut self) -> Result<i32, SessionError<W::Error>> {
        self.start()?;
        loop {
            let event = self
                .decoder
                .decode_async(&mut self.input)
                .await?
                .ok_or(SessionError::StreamClosed)?;

            if let Flow::Exit(status) = self.handle_event(event)? {
                return Ok(status);
            }
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
