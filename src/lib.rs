//! Incremental HTTP/1.1 message head parser
//!
//! Sans-IO, callback driven. Bytes are fed in whatever slices they arrive
//! in from a stream, and every field of the request line, status line and
//! header block is handed to a [`Handler`] as soon as it is recognized.
//! Tokens that straddle two calls are reassembled internally, so a handler
//! always sees complete fields.
//!
//! The parser only recognizes framing. Bodies, chunked transfer-encoding
//! and URI semantics are up to the caller.
//!
//! # Example
//!
//! ```
//! use http11_scan::{Callbacks, MessageType, Parser};
//!
//! let mut parser = Parser::new(Callbacks::new().on_http_header(|name, value| {
//!     assert_eq!(name, b"Foo");
//!     assert_eq!(value, b"Bar");
//! }));
//!
//! let msg = b"GET / HTTP/1.1\r\nFoo: Bar\r\n\r\n";
//!
//! // Any split of the input works, even in the middle of a token.
//! assert_eq!(parser.execute(&msg[..16]), 16);
//! assert_eq!(parser.execute(&msg[16..20]), 4);
//! assert_eq!(parser.execute(&msg[20..]), 8);
//!
//! assert!(parser.is_finished());
//! assert_eq!(parser.error(), None);
//! assert_eq!(parser.message_type(), MessageType::Request);
//! ```
//!
//! When the whole head is already in one buffer, [`parse_head`] gives back
//! types from the [http crate](https://crates.io/crates/http).
//!
//! ```
//! use http11_scan::{parse_head, Head};
//!
//! let input = b"HTTP/1.1 204 No Content\r\nServer: x\r\n\r\nbody";
//!
//! let (input_used, head) = parse_head(input).unwrap().unwrap();
//! assert_eq!(input_used, 38);
//!
//! let Head::Response(response) = head else {
//!     panic!("Expected a response");
//! };
//! assert_eq!(response.status(), 204);
//! assert_eq!(response.headers().get("server").unwrap(), "x");
//! ```
//!
//! # In scope:
//!
//! * Request line, status line and header fields of HTTP/1.0 and HTTP/1.1
//! * Arbitrary chunking of input, including zero-copy delivery when a
//!   field sits inside one call's input
//! * Sticky terminal state: finished, error and message type
//!
//! # Out of scope:
//!
//! * Opening/closing sockets
//! * Body and transfer-encoding decoding
//! * URI validation beyond capturing the raw bytes

#![forbid(unsafe_code)]
#![warn(clippy::all)]
#![deny(missing_docs)]

#[macro_use]
extern crate log;

// Re-export the basis for this library.
pub use http;

mod error;
pub use error::{Error, ParseError};

mod limits;
pub use limits::Limits;

mod handler;
pub use handler::{Callbacks, Handler};

mod parser;
pub use parser::{MessageType, Parser};

mod collect;
pub use collect::{parse_head, Head, HeadCollector};

mod util;
