use crate::error::ParseError;
use crate::handler::Handler;
use crate::limits::Limits;

use super::chars::{is_first_token, is_ows, is_supported_version, is_text, is_token, is_uri};
use super::chars::{trim_ows_end, version_digits};
use super::MessageType;

/// `HTTP/x.y`
const VERSION_LEN: usize = 8;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Phase {
    /// Before the first line. Skips blank lines.
    Start,
    /// Seen CR of a leading blank line.
    StartLf,
    /// Method of a request line, or version of a status line.
    FirstToken,
    Uri,
    ReqVersion,
    ReqLineLf,
    StatusCode,
    Reason,
    StatusLineLf,
    HeaderStart,
    HeaderName,
    HeaderValueStart,
    HeaderValue,
    HeaderLf,
    /// Seen CR of the blank line ending the head.
    HeadEndLf,
    Done,
    Error,
}

/// The grammar engine.
///
/// The only state kept between calls is the phase and, for a token that is
/// cut off by the end of the input, the part of it seen so far.
#[derive(Debug)]
pub(crate) struct Scanner {
    phase: Phase,
    message_type: MessageType,
    error: Option<ParseError>,
    limits: Limits,
    /// Partial token carried over from a previous call. While in a header line
    /// it holds the completed name followed by the value so far.
    acc: Vec<u8>,
    /// Length of the header name at the start of `acc`.
    name_len: usize,
    skipped_blank: bool,
    status: u16,
    status_digits: u8,
    /// Checked once the head is complete.
    response_version: Option<(u8, u8)>,
    headers: usize,
}

/// Join a token carried over from a previous call with its continuation in
/// this call's input.
fn join<'a>(acc: &'a mut Vec<u8>, rest: &'a [u8]) -> &'a [u8] {
    if acc.is_empty() {
        rest
    } else {
        acc.extend_from_slice(rest);
        acc
    }
}

/// Index of the first byte not matching `f`, or `input.len()`.
fn run(input: &[u8], f: fn(u8) -> bool) -> usize {
    input.iter().position(|b| !f(*b)).unwrap_or(input.len())
}

impl Scanner {
    pub fn new(limits: Limits) -> Self {
        Scanner {
            phase: Phase::Start,
            message_type: MessageType::Unknown,
            error: None,
            limits,
            acc: Vec::new(),
            name_len: 0,
            skipped_blank: false,
            status: 0,
            status_digits: 0,
            response_version: None,
            headers: 0,
        }
    }

    /// Back to the start of a message. Keeps the limits and the buffer capacity.
    pub fn reset(&mut self) {
        self.phase = Phase::Start;
        self.message_type = MessageType::Unknown;
        self.error = None;
        self.acc.clear();
        self.name_len = 0;
        self.skipped_blank = false;
        self.status = 0;
        self.status_digits = 0;
        self.response_version = None;
        self.headers = 0;
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_finished(&self) -> bool {
        matches!(self.phase, Phase::Done | Phase::Error)
    }

    pub fn error(&self) -> Option<ParseError> {
        self.error
    }

    pub fn message_type(&self) -> MessageType {
        self.message_type
    }

    pub fn limits(&self) -> &Limits {
        &self.limits
    }

    #[cfg(test)]
    pub(crate) fn carried(&self) -> &[u8] {
        &self.acc
    }

    /// Scan `input`, returning how much of it was used.
    ///
    /// An empty input means the stream ended.
    pub fn scan<H: Handler>(&mut self, input: &[u8], handler: &mut H) -> usize {
        if self.is_finished() {
            return 0;
        }

        if input.is_empty() {
            // A stream closed between messages is not an error.
            if self.phase != Phase::Start {
                self.fail(ParseError::Eof);
            }
            return 0;
        }

        let end = input.len();

        // Start of the current token's bytes in input. Tokens carried over
        // from the previous call continue at 0.
        let mut mark = 0;

        // Header name when it sits entirely in this input.
        let mut name_at: Option<(usize, usize)> = None;

        let mut pos = 0;

        while pos < end {
            match self.phase {
                Phase::Start => match input[pos] {
                    b'\r' => {
                        self.phase = Phase::StartLf;
                        pos += 1;
                    }
                    b if is_first_token(b) => {
                        mark = pos;
                        self.phase = Phase::FirstToken;
                    }
                    _ => return self.fail_at(pos, ParseError::InvalidMessage),
                },

                Phase::StartLf => {
                    if input[pos] != b'\n' {
                        return self.fail_at(pos, ParseError::InvalidMessage);
                    }
                    self.skipped_blank = true;
                    self.phase = Phase::Start;
                    pos += 1;
                }

                Phase::FirstToken => {
                    pos += run(&input[pos..], is_first_token);
                    if pos == end {
                        break;
                    }
                    if input[pos] != b' ' {
                        return self.fail_at(pos, ParseError::InvalidMessage);
                    }

                    let max_method = self.limits.method_len();
                    let first = join(&mut self.acc, &input[mark..pos]);

                    let next = if first.starts_with(b"HTTP/") {
                        // Leading blank lines are only tolerated before a request line.
                        match version_digits(first) {
                            Some(digits) if !self.skipped_blank => {
                                handler.http_version(first);
                                self.response_version = Some(digits);
                                Phase::StatusCode
                            }
                            _ => Phase::Error,
                        }
                    } else if first.len() <= max_method && first.iter().all(|b| is_token(*b)) {
                        handler.request_method(first);
                        Phase::Uri
                    } else {
                        Phase::Error
                    };

                    if next == Phase::Error {
                        return self.fail_at(pos, ParseError::InvalidMessage);
                    }

                    self.acc.clear();
                    self.phase = next;
                    pos += 1;
                    mark = pos;
                }

                Phase::Uri => {
                    pos += run(&input[pos..], is_uri);
                    if pos == end {
                        break;
                    }
                    if input[pos] != b' ' {
                        return self.fail_at(pos, ParseError::InvalidMessage);
                    }

                    let max = self.limits.uri_len();
                    let uri = join(&mut self.acc, &input[mark..pos]);

                    if uri.is_empty() || uri.len() > max {
                        return self.fail_at(pos, ParseError::InvalidMessage);
                    }
                    handler.request_uri(uri);

                    self.acc.clear();
                    self.phase = Phase::ReqVersion;
                    pos += 1;
                    mark = pos;
                }

                Phase::ReqVersion => {
                    pos += run(&input[pos..], is_first_token);
                    if pos == end {
                        break;
                    }
                    if input[pos] != b'\r' {
                        return self.fail_at(pos, ParseError::InvalidMessage);
                    }

                    let version = join(&mut self.acc, &input[mark..pos]);

                    let err = match version_digits(version) {
                        None => Some(ParseError::InvalidMessage),
                        Some(digits) if !is_supported_version(digits) => {
                            Some(ParseError::BadVersion)
                        }
                        Some(_) => {
                            handler.http_version(version);
                            None
                        }
                    };

                    if let Some(err) = err {
                        return self.fail_at(pos, err);
                    }

                    self.acc.clear();
                    self.phase = Phase::ReqLineLf;
                    pos += 1;
                }

                Phase::ReqLineLf => {
                    if input[pos] != b'\n' {
                        return self.fail_at(pos, ParseError::InvalidMessage);
                    }
                    self.message_type = MessageType::Request;
                    self.phase = Phase::HeaderStart;
                    pos += 1;
                }

                Phase::StatusCode => {
                    let b = input[pos];
                    if b.is_ascii_digit() && self.status_digits < 3 {
                        self.status = self.status * 10 + u16::from(b - b'0');
                        self.status_digits += 1;
                    } else if b == b' ' && self.status_digits == 3 {
                        handler.status_code(self.status);
                        self.phase = Phase::Reason;
                        mark = pos + 1;
                    } else {
                        return self.fail_at(pos, ParseError::InvalidMessage);
                    }
                    pos += 1;
                }

                Phase::Reason => {
                    pos += run(&input[pos..], is_text);
                    if pos == end {
                        break;
                    }
                    if input[pos] != b'\r' {
                        return self.fail_at(pos, ParseError::InvalidMessage);
                    }

                    let max = self.limits.reason_len();
                    let reason = join(&mut self.acc, &input[mark..pos]);

                    if reason.len() > max {
                        return self.fail_at(pos, ParseError::InvalidMessage);
                    }
                    handler.reason_phrase(reason);

                    self.acc.clear();
                    self.phase = Phase::StatusLineLf;
                    pos += 1;
                }

                Phase::StatusLineLf => {
                    if input[pos] != b'\n' {
                        return self.fail_at(pos, ParseError::InvalidMessage);
                    }
                    self.message_type = MessageType::Response;
                    self.phase = Phase::HeaderStart;
                    pos += 1;
                }

                Phase::HeaderStart => match input[pos] {
                    b'\r' => {
                        self.phase = Phase::HeadEndLf;
                        pos += 1;
                    }
                    b if is_token(b) => {
                        if self.headers >= self.limits.headers() {
                            return self.fail_at(pos, ParseError::InvalidMessage);
                        }
                        mark = pos;
                        self.phase = Phase::HeaderName;
                    }
                    // Includes obs-fold continuation lines.
                    _ => return self.fail_at(pos, ParseError::InvalidMessage),
                },

                Phase::HeaderName => {
                    pos += run(&input[pos..], is_token);
                    if pos == end {
                        break;
                    }
                    if input[pos] != b':' {
                        return self.fail_at(pos, ParseError::InvalidMessage);
                    }

                    let name_len = if self.acc.is_empty() {
                        name_at = Some((mark, pos));
                        pos - mark
                    } else {
                        self.acc.extend_from_slice(&input[mark..pos]);
                        self.name_len = self.acc.len();
                        self.name_len
                    };

                    if name_len > self.limits.header_name_len() {
                        return self.fail_at(pos, ParseError::InvalidMessage);
                    }

                    self.phase = Phase::HeaderValueStart;
                    pos += 1;
                }

                Phase::HeaderValueStart => match input[pos] {
                    b if is_ows(b) => pos += 1,
                    b'\r' => {
                        if !self.emit_header(input, name_at.take(), pos, pos, handler) {
                            return self.fail_at(pos, ParseError::InvalidMessage);
                        }
                        self.phase = Phase::HeaderLf;
                        pos += 1;
                    }
                    b if is_text(b) => {
                        mark = pos;
                        self.phase = Phase::HeaderValue;
                    }
                    _ => return self.fail_at(pos, ParseError::InvalidMessage),
                },

                Phase::HeaderValue => {
                    pos += run(&input[pos..], is_text);
                    if pos == end {
                        break;
                    }
                    if input[pos] != b'\r' {
                        return self.fail_at(pos, ParseError::InvalidMessage);
                    }
                    if !self.emit_header(input, name_at.take(), mark, pos, handler) {
                        return self.fail_at(pos, ParseError::InvalidMessage);
                    }
                    self.phase = Phase::HeaderLf;
                    pos += 1;
                }

                Phase::HeaderLf => {
                    if input[pos] != b'\n' {
                        return self.fail_at(pos, ParseError::InvalidMessage);
                    }
                    self.phase = Phase::HeaderStart;
                    pos += 1;
                }

                Phase::HeadEndLf => {
                    if input[pos] != b'\n' {
                        return self.fail_at(pos, ParseError::InvalidMessage);
                    }

                    if let Some(digits) = self.response_version {
                        if !is_supported_version(digits) {
                            return self.fail_at(pos, ParseError::BadVersion);
                        }
                    }

                    self.phase = Phase::Done;
                    debug!("Parsed {:?} head", self.message_type);

                    // Never look beyond the head.
                    return pos + 1;
                }

                Phase::Done | Phase::Error => unreachable!(),
            }
        }

        if !self.carry(input, mark, name_at) {
            self.fail(ParseError::InvalidMessage);
        }

        end
    }

    /// Deliver one header line. `value` is `input[start..end]`, possibly
    /// continuing a value carried over from a previous call.
    fn emit_header<H: Handler>(
        &mut self,
        input: &[u8],
        name_at: Option<(usize, usize)>,
        start: usize,
        end: usize,
        handler: &mut H,
    ) -> bool {
        let max = self.limits.header_value_len();

        let (name, value) = match name_at {
            // Whole line in this input.
            Some((s, e)) => (&input[s..e], &input[start..end]),
            None => {
                self.acc.extend_from_slice(&input[start..end]);
                self.acc.split_at(self.name_len)
            }
        };

        if value.len() > max {
            return false;
        }

        handler.http_header(name, trim_ows_end(value));

        self.acc.clear();
        self.name_len = 0;
        self.headers += 1;

        true
    }

    /// Save the partial token at the end of input.
    ///
    /// Returns false if the carried bytes exceed the limit for the token.
    fn carry(&mut self, input: &[u8], mark: usize, name_at: Option<(usize, usize)>) -> bool {
        let max = match self.phase {
            Phase::FirstToken => self.limits.method_len().max(VERSION_LEN),
            Phase::Uri => self.limits.uri_len(),
            Phase::ReqVersion => VERSION_LEN,
            Phase::Reason => self.limits.reason_len(),
            Phase::HeaderName => self.limits.header_name_len(),
            Phase::HeaderValueStart | Phase::HeaderValue => {
                if let Some((s, e)) = name_at {
                    self.acc.extend_from_slice(&input[s..e]);
                    self.name_len = self.acc.len();
                }
                if self.phase == Phase::HeaderValueStart {
                    return true;
                }
                self.acc.extend_from_slice(&input[mark..]);
                return self.acc.len() - self.name_len <= self.limits.header_value_len();
            }
            _ => return true,
        };

        self.acc.extend_from_slice(&input[mark..]);

        self.acc.len() <= max
    }

    fn fail_at(&mut self, pos: usize, err: ParseError) -> usize {
        self.fail(err);
        // The offending byte is consumed.
        pos + 1
    }

    fn fail(&mut self, err: ParseError) {
        debug!("Parse error in {:?}: {}", self.phase, err);

        self.phase = Phase::Error;
        self.error = Some(err);
        self.acc.clear();
        self.name_len = 0;
    }
}
