//! Lifecycle of a parser instance
//!
//! ```text
//!        ┌──────────────────┐
//!   ┌───▶│      Start       │◀─┐ blank lines
//!   │    └──────────────────┘──┘ (request only)
//!   │        │            │
//!   │        ▼            ▼
//!   │  ┌────────────┐  ┌────────────┐
//!   │  │Request line│  │Status line │
//!   │  └────────────┘  └────────────┘
//!   │        │            │
//!   │        ▼            ▼
//!   │    ┌──────────────────┐
//!   │    │     Headers      │◀─┐
//!   │    └──────────────────┘──┘
//!   │             │
//!   │ init()      ▼
//!   │    ┌──────────────────┐
//!   └────│  Done / Error    │
//!        └──────────────────┘
//! ```
//!
//! Any grammar violation moves straight to the error state.

use std::fmt;

use crate::error::ParseError;
use crate::handler::Handler;
use crate::limits::Limits;
use crate::util::log_data;

mod chars;

mod scan;
use scan::Scanner;

#[cfg(test)]
mod test;

/// Kind of message being parsed.
///
/// Decided once the first line of the message is complete.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MessageType {
    /// The first line is not yet complete.
    #[default]
    Unknown,
    /// The message started with a request line.
    Request,
    /// The message started with a status line.
    Response,
}

/// Incremental HTTP/1.1 message head parser.
///
/// Feed input with [`execute()`][Parser::execute] as it arrives. Each field
/// is passed to the handler `H` as soon as it's complete. After each call,
/// poll [`is_finished()`][Parser::is_finished] and
/// [`error()`][Parser::error].
///
/// The parser stops right after the blank line ending the head, leaving the
/// rest of the input (a body, a pipelined message) to the caller. Call
/// [`init()`][Parser::init] to parse the next message with the same
/// instance.
pub struct Parser<H> {
    scanner: Scanner,
    handler: H,
}

impl<H: Handler> Parser<H> {
    /// Create a parser with default [`Limits`].
    pub fn new(handler: H) -> Self {
        Self::with_limits(handler, Limits::default())
    }

    /// Create a parser with the given limits.
    pub fn with_limits(handler: H, limits: Limits) -> Self {
        Parser {
            scanner: Scanner::new(limits),
            handler,
        }
    }

    /// Reset to parse a new message.
    ///
    /// Clears the finished, error and message type state along with any
    /// partially received field. The handler is left alone.
    pub fn init(&mut self) {
        self.scanner.reset();
    }

    /// Parse the next piece of input.
    ///
    /// Returns how many bytes of `input` were used. That is all of it, unless
    /// the message ends (successfully or not) before the end of `input`. The
    /// bytes after the end of the message are not looked at.
    ///
    /// An empty `input` signals that the stream ended. If this happens in
    /// the middle of a message, the error is [`ParseError::Eof`]. Between
    /// messages, i.e. before anything but blank lines was received, it does
    /// nothing.
    ///
    /// Once finished, the parser does nothing until [`init()`][Parser::init].
    pub fn execute(&mut self, input: &[u8]) -> usize {
        let input_used = self.scanner.scan(input, &mut self.handler);

        log_data(&input[..input_used]);

        input_used
    }

    /// Parse `buf[start..end]`.
    ///
    /// # Panics
    ///
    /// If `start > end` or `end > buf.len()`.
    pub fn execute_range(&mut self, buf: &[u8], start: usize, end: usize) -> usize {
        self.execute(&buf[start..end])
    }

    /// Signal that the stream ended. Same as `execute(&[])`.
    pub fn eof(&mut self) -> usize {
        self.execute(&[])
    }

    /// Tell if the message reached a terminal state, either a complete head
    /// or an error.
    pub fn is_finished(&self) -> bool {
        self.scanner.is_finished()
    }

    /// The sticky error, if any.
    pub fn error(&self) -> Option<ParseError> {
        self.scanner.error()
    }

    /// Whether the message is a request or a response.
    pub fn message_type(&self) -> MessageType {
        self.scanner.message_type()
    }

    /// The limits this parser was created with.
    pub fn limits(&self) -> &Limits {
        self.scanner.limits()
    }
}

impl<H> Parser<H> {
    /// The handler receiving fields.
    pub fn handler(&self) -> &H {
        &self.handler
    }

    /// Mutable access to the handler, for instance to assign
    /// [`Callbacks`][crate::Callbacks] slots.
    pub fn handler_mut(&mut self) -> &mut H {
        &mut self.handler
    }

    /// Drop the parser, returning the handler.
    pub fn into_handler(self) -> H {
        self.handler
    }
}

impl<H> fmt::Debug for Parser<H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Parser")
            .field("phase", &self.scanner.phase())
            .field("message_type", &self.scanner.message_type())
            .field("error", &self.scanner.error())
            .finish()
    }
}
