use std::fmt;

/// Receiver of the fields recognized by a [`Parser`][crate::Parser].
///
/// Every method has an empty default, so a handler only implements the
/// fields it cares about.
///
/// Byte slices are borrowed for the duration of the call only. They point
/// either into the input given to `execute()`, or into the parser's own
/// buffer when a field was split over several calls. A handler that needs
/// the bytes later must copy them.
///
/// Within one message the calls come in wire order: `request_method`,
/// `request_uri`, `http_version` for a request, or `http_version`,
/// `status_code`, `reason_phrase` for a response, followed by one
/// `http_header` per header line.
pub trait Handler {
    /// The method of a request line, e.g. `GET`.
    fn request_method(&mut self, _method: &[u8]) {}

    /// The raw request target, e.g. `/path?q=1`.
    fn request_uri(&mut self, _uri: &[u8]) {}

    /// The version of a request or status line, e.g. `HTTP/1.1`.
    fn http_version(&mut self, _version: &[u8]) {}

    /// The three digit status code of a status line.
    fn status_code(&mut self, _status: u16) {}

    /// The reason phrase of a status line. Possibly empty.
    fn reason_phrase(&mut self, _reason: &[u8]) {}

    /// One header line. Repeated names are reported once per line.
    ///
    /// The value has surrounding whitespace removed.
    fn http_header(&mut self, _name: &[u8], _value: &[u8]) {}
}

impl<H: Handler + ?Sized> Handler for &mut H {
    fn request_method(&mut self, method: &[u8]) {
        (**self).request_method(method)
    }

    fn request_uri(&mut self, uri: &[u8]) {
        (**self).request_uri(uri)
    }

    fn http_version(&mut self, version: &[u8]) {
        (**self).http_version(version)
    }

    fn status_code(&mut self, status: u16) {
        (**self).status_code(status)
    }

    fn reason_phrase(&mut self, reason: &[u8]) {
        (**self).reason_phrase(reason)
    }

    fn http_header(&mut self, name: &[u8], value: &[u8]) {
        (**self).http_header(name, value)
    }
}

impl<H: Handler + ?Sized> Handler for Box<H> {
    fn request_method(&mut self, method: &[u8]) {
        (**self).request_method(method)
    }

    fn request_uri(&mut self, uri: &[u8]) {
        (**self).request_uri(uri)
    }

    fn http_version(&mut self, version: &[u8]) {
        (**self).http_version(version)
    }

    fn status_code(&mut self, status: u16) {
        (**self).status_code(status)
    }

    fn reason_phrase(&mut self, reason: &[u8]) {
        (**self).reason_phrase(reason)
    }

    fn http_header(&mut self, name: &[u8], value: &[u8]) {
        (**self).http_header(name, value)
    }
}

type TokenFn<'a> = Box<dyn FnMut(&[u8]) + Send + 'a>;
type StatusFn<'a> = Box<dyn FnMut(u16) + Send + 'a>;
type HeaderFn<'a> = Box<dyn FnMut(&[u8], &[u8]) + Send + 'a>;

/// A [`Handler`] made of six optional closure slots.
///
/// Slots can be assigned at any point before the parser is driven, either
/// with the `on_*` builder methods or through
/// [`Parser::handler_mut`][crate::Parser::handler_mut]. Fields whose slot
/// is empty are dropped.
///
/// ```
/// use http11_scan::{Callbacks, Parser};
///
/// let mut methods = Vec::new();
/// let mut parser = Parser::new(Callbacks::new());
///
/// parser
///     .handler_mut()
///     .set_request_method(|m| methods.push(m.to_vec()));
///
/// parser.execute(b"PUT /x HTTP/1.0\r\n\r\n");
/// drop(parser);
///
/// assert_eq!(methods, vec![b"PUT".to_vec()]);
/// ```
#[derive(Default)]
pub struct Callbacks<'a> {
    request_method: Option<TokenFn<'a>>,
    request_uri: Option<TokenFn<'a>>,
    http_version: Option<TokenFn<'a>>,
    status_code: Option<StatusFn<'a>>,
    reason_phrase: Option<TokenFn<'a>>,
    http_header: Option<HeaderFn<'a>>,
}

macro_rules! slot {
    ($field:ident, $on:ident, $set:ident, $clear:ident, $fn_ty:ident, ($($arg:ty),*)) => {
        #[doc = concat!("Assign the `", stringify!($field), "` slot.")]
        pub fn $on(mut self, f: impl FnMut($($arg),*) + Send + 'a) -> Self {
            self.$set(f);
            self
        }

        #[doc = concat!("Assign the `", stringify!($field), "` slot, replacing any previous closure.")]
        pub fn $set(&mut self, f: impl FnMut($($arg),*) + Send + 'a) {
            self.$field = Some(Box::new(f) as $fn_ty<'a>);
        }

        #[doc = concat!("Empty the `", stringify!($field), "` slot.")]
        pub fn $clear(&mut self) {
            self.$field = None;
        }
    };
}

impl<'a> Callbacks<'a> {
    /// Callbacks with every slot empty.
    pub fn new() -> Self {
        Self::default()
    }

    slot!(request_method, on_request_method, set_request_method, clear_request_method, TokenFn, (&[u8]));
    slot!(request_uri, on_request_uri, set_request_uri, clear_request_uri, TokenFn, (&[u8]));
    slot!(http_version, on_http_version, set_http_version, clear_http_version, TokenFn, (&[u8]));
    slot!(status_code, on_status_code, set_status_code, clear_status_code, StatusFn, (u16));
    slot!(reason_phrase, on_reason_phrase, set_reason_phrase, clear_reason_phrase, TokenFn, (&[u8]));
    slot!(http_header, on_http_header, set_http_header, clear_http_header, HeaderFn, (&[u8], &[u8]));
}

impl Handler for Callbacks<'_> {
    fn request_method(&mut self, method: &[u8]) {
        if let Some(f) = &mut self.request_method {
            f(method);
        }
    }

    fn request_uri(&mut self, uri: &[u8]) {
        if let Some(f) = &mut self.request_uri {
            f(uri);
        }
    }

    fn http_version(&mut self, version: &[u8]) {
        if let Some(f) = &mut self.http_version {
            f(version);
        }
    }

    fn status_code(&mut self, status: u16) {
        if let Some(f) = &mut self.status_code {
            f(status);
        }
    }

    fn reason_phrase(&mut self, reason: &[u8]) {
        if let Some(f) = &mut self.reason_phrase {
            f(reason);
        }
    }

    fn http_header(&mut self, name: &[u8], value: &[u8]) {
        if let Some(f) = &mut self.http_header {
            f(name, value);
        }
    }
}

impl fmt::Debug for Callbacks<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Callbacks")
            .field("request_method", &self.request_method.is_some())
            .field("request_uri", &self.request_uri.is_some())
            .field("http_version", &self.http_version.is_some())
            .field("status_code", &self.status_code.is_some())
            .field("reason_phrase", &self.reason_phrase.is_some())
            .field("http_header", &self.http_header.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Parser;

    #[test]
    fn unset_slots_are_skipped() {
        let mut parser = Parser::new(Callbacks::new());

        let input = b"HTTP/1.1 404 Not Found\r\nX: y\r\n\r\n";
        assert_eq!(parser.execute(input), input.len());
        assert!(parser.is_finished());
        assert_eq!(parser.error(), None);
    }

    #[test]
    fn slots_receive_fields() {
        let mut status = None;
        let mut reason = Vec::new();
        let mut version = Vec::new();

        let callbacks = Callbacks::new()
            .on_status_code(|s| status = Some(s))
            .on_reason_phrase(|r| reason.extend_from_slice(r))
            .on_http_version(|v| version.extend_from_slice(v));

        let mut parser = Parser::new(callbacks);
        parser.execute(b"HTTP/1.0 301 Moved Permanently\r\n\r\n");
        drop(parser);

        assert_eq!(status, Some(301));
        assert_eq!(reason, b"Moved Permanently");
        assert_eq!(version, b"HTTP/1.0");
    }

    #[test]
    fn cleared_slot_is_skipped() {
        let mut count = 0;

        let mut callbacks = Callbacks::new().on_http_header(|_, _| count += 1);
        callbacks.clear_http_header();

        let mut parser = Parser::new(callbacks);
        parser.execute(b"GET / HTTP/1.1\r\nA: 1\r\nB: 2\r\n\r\n");
        drop(parser);

        assert_eq!(count, 0);
    }

    #[test]
    fn borrowed_handler() {
        #[derive(Default)]
        struct Count(usize);

        impl Handler for Count {
            fn http_header(&mut self, _: &[u8], _: &[u8]) {
                self.0 += 1;
            }
        }

        let mut count = Count::default();

        let mut parser = Parser::new(&mut count);
        parser.execute(b"GET / HTTP/1.1\r\nA: 1\r\nA: 2\r\n\r\n");
        drop(parser);

        assert_eq!(count.0, 2);
    }

    #[test]
    fn debug_shows_assigned_slots() {
        let callbacks = Callbacks::new().on_request_uri(|_| {});
        let s = format!("{:?}", callbacks);
        assert!(s.contains("request_uri: true"));
        assert!(s.contains("request_method: false"));
    }
}
