/// Max number of header lines in one message head.
pub const MAX_HEADERS: usize = 128;

/// Size caps applied while scanning.
///
/// A token exceeding its cap ends the message with
/// [`ParseError::InvalidMessage`][crate::ParseError::InvalidMessage]. The
/// caps also bound how much the parser buffers for tokens split across
/// calls.
///
/// ```
/// use http11_scan::Limits;
///
/// let limits = Limits::default()
///     .max_uri_len(2048)
///     .max_headers(32);
///
/// assert_eq!(limits.uri_len(), 2048);
/// assert_eq!(limits.headers(), 32);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Limits {
    method: usize,
    uri: usize,
    header_name: usize,
    header_value: usize,
    reason: usize,
    headers: usize,
}

impl Default for Limits {
    fn default() -> Self {
        Limits {
            method: 32,
            uri: 12 * 1024,
            header_name: 256,
            header_value: 80 * 1024,
            reason: 1024,
            headers: MAX_HEADERS,
        }
    }
}

impl Limits {
    /// Max length of the request method.
    pub fn max_method_len(mut self, v: usize) -> Self {
        self.method = v;
        self
    }

    /// Max length of the request target.
    pub fn max_uri_len(mut self, v: usize) -> Self {
        self.uri = v;
        self
    }

    /// Max length of a header name.
    pub fn max_header_name_len(mut self, v: usize) -> Self {
        self.header_name = v;
        self
    }

    /// Max length of a header value, including surrounding whitespace.
    pub fn max_header_value_len(mut self, v: usize) -> Self {
        self.header_value = v;
        self
    }

    /// Max length of the reason phrase.
    pub fn max_reason_len(mut self, v: usize) -> Self {
        self.reason = v;
        self
    }

    /// Max number of header lines.
    pub fn max_headers(mut self, v: usize) -> Self {
        self.headers = v;
        self
    }

    /// Max method length.
    pub fn method_len(&self) -> usize {
        self.method
    }

    /// Max request target length.
    pub fn uri_len(&self) -> usize {
        self.uri
    }

    /// Max header name length.
    pub fn header_name_len(&self) -> usize {
        self.header_name
    }

    /// Max header value length.
    pub fn header_value_len(&self) -> usize {
        self.header_value
    }

    /// Max reason phrase length.
    pub fn reason_len(&self) -> usize {
        self.reason
    }

    /// Max number of header lines.
    pub fn headers(&self) -> usize {
        self.headers
    }
}
