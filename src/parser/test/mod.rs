use crate::{Handler, Parser};

mod single_call;

/// One handler invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Event {
    Method(Vec<u8>),
    Uri(Vec<u8>),
    Version(Vec<u8>),
    Status(u16),
    Reason(Vec<u8>),
    Header(Vec<u8>, Vec<u8>),
}

#[derive(Debug, Default)]
pub(crate) struct Recorder(pub Vec<Event>);

impl Handler for Recorder {
    fn request_method(&mut self, v: &[u8]) {
        self.0.push(Event::Method(v.to_vec()));
    }

    fn request_uri(&mut self, v: &[u8]) {
        self.0.push(Event::Uri(v.to_vec()));
    }

    fn http_version(&mut self, v: &[u8]) {
        self.0.push(Event::Version(v.to_vec()));
    }

    fn status_code(&mut self, v: u16) {
        self.0.push(Event::Status(v));
    }

    fn reason_phrase(&mut self, v: &[u8]) {
        self.0.push(Event::Reason(v.to_vec()));
    }

    fn http_header(&mut self, name: &[u8], value: &[u8]) {
        self.0.push(Event::Header(name.to_vec(), value.to_vec()));
    }
}

pub(crate) fn recorder() -> Parser<Recorder> {
    Parser::new(Recorder::default())
}

/// Feed `chunks` one at a time, asserting each is used in full.
pub(crate) fn feed(parser: &mut Parser<Recorder>, chunks: &[&[u8]]) {
    for chunk in chunks {
        let input_used = parser.execute(chunk);
        assert_eq!(input_used, chunk.len(), "chunk {:?}", chunk.escape_ascii().to_string());
    }
}

pub(crate) fn method(v: &str) -> Event {
    Event::Method(v.as_bytes().to_vec())
}

pub(crate) fn uri(v: &str) -> Event {
    Event::Uri(v.as_bytes().to_vec())
}

pub(crate) fn version(v: &str) -> Event {
    Event::Version(v.as_bytes().to_vec())
}

pub(crate) fn reason(v: &str) -> Event {
    Event::Reason(v.as_bytes().to_vec())
}

pub(crate) fn header(n: &str, v: &str) -> Event {
    Event::Header(n.as_bytes().to_vec(), v.as_bytes().to_vec())
}
