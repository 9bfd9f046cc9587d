//! # termline
//!
//! Single-line editing engine for character-oriented remote terminal sessions.
//!
//! **Key features:**
//! - **Key decoding** - Enter, Backspace and cursor-key escape sequences, driven by a swappable `KeyProfile`
//! - **Line buffer** - Fixed-capacity, heapless edit buffer with cursor
//! - **Flicker-free redraw** - Prompt and line re-rendered from column 0 after every edit
//! - **Pluggable collaborators** - Transport streams, command dispatch and exit signalling are traits
//!
//! ## Optional Features
//!
//! - `std` - Adapters for `std::io::Read` / `std::io::Write` streams (UTF-8 input decoding)
//! - `async` - Async input source and `EditSession::run_async`
//!
//! Logging goes through the `log` facade; install any backend in the host.
//!
//! This library is `no_std` compatible.

#![no_std]
#![warn(missing_docs)]
#![warn(missing_debug_implementations)]

#[cfg(feature = "std")]
extern crate std;

// ============================================================================
// Module Declarations
// ============================================================================

pub mod config;
pub mod error;
pub mod io;
pub mod session;

#[cfg(feature = "std")]
pub mod stdio;

// ============================================================================
// Re-exports - Public API
// ============================================================================

// Core I/O
pub use io::{CharSink, CharSource};

#[cfg(feature = "async")]
pub use io::AsyncCharSource;

// Configuration
pub use config::{KeyProfile, SessionConfig};

// Error types
pub use error::{BufferFull, SessionError};

// Session types
pub use session::{
    CommandDispatcher, EditSession, ExitCallback, KeyDecoder, KeyEvent, LineBuffer, LineSnapshot,
    NoExitCallback, SessionState, Termination,
};

#[cfg(feature = "std")]
pub use stdio::{Utf8Source, WriteSink};

// ============================================================================
// Library Metadata
// ============================================================================

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
