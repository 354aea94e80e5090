use std::fmt;

/// Terminal parse state of a [`Parser`][crate::Parser].
///
/// Errors are sticky. Once set, the parser is finished and consumes no more
/// input until it is re-armed with [`Parser::init`][crate::Parser::init].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseError {
    /// The input violates the HTTP/1.1 message grammar.
    InvalidMessage,
    /// The version is well formed, but neither `HTTP/1.0` nor `HTTP/1.1`.
    BadVersion,
    /// The stream ended while the message head was incomplete.
    Eof,
}

impl std::error::Error for ParseError {}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::InvalidMessage => write!(f, "invalid http message"),
            ParseError::BadVersion => write!(f, "unsupported http version"),
            ParseError::Eof => write!(f, "unexpected end of stream"),
        }
    }
}

/// Error type for http11-scan
#[derive(Debug, PartialEq, Eq)]
#[allow(missing_docs)]
#[non_exhaustive]
pub enum Error {
    Parse(ParseError),
    Incomplete,
    NotARequest,
    NotAResponse,
    UnsupportedVersion,
    BadMethod(String),
    BadUri(String),
    BadHeader(String),
    BadStatus(u16),
    Http(String),
}

impl From<ParseError> for Error {
    fn from(value: ParseError) -> Self {
        Error::Parse(value)
    }
}

impl From<http::Error> for Error {
    fn from(value: http::Error) -> Self {
        Error::Http(value.to_string())
    }
}

impl std::error::Error for Error {}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Parse(v) => write!(f, "http parse fail: {}", v),
            Error::Incomplete => write!(f, "message head is incomplete"),
            Error::NotARequest => write!(f, "message is not a request"),
            Error::NotAResponse => write!(f, "message is not a response"),
            Error::UnsupportedVersion => write!(f, "unsupported http version"),
            Error::BadMethod(v) => write!(f, "bad method: {}", v),
            Error::BadUri(v) => write!(f, "bad uri: {}", v),
            Error::BadHeader(v) => write!(f, "bad header: {}", v),
            Error::BadStatus(v) => write!(f, "bad status code: {}", v),
            Error::Http(v) => write!(f, "http error: {}", v),
        }
    }
}
