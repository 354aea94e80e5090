use http::{HeaderMap, HeaderName, HeaderValue, Method, Request, Response, StatusCode, Uri, Version};

use crate::{Error, Handler, Parser};

/// A complete message head.
#[derive(Debug)]
pub enum Head {
    /// Request line and headers.
    Request(Request<()>),
    /// Status line and headers.
    Response(Response<()>),
}

/// A [`Handler`] keeping the fields of one message head.
///
/// Once the parser is finished, the fields convert into the
/// [http crate](https://crates.io/crates/http) types. Repeated header names
/// are kept as multiple values of the same name.
#[derive(Debug, Default)]
pub struct HeadCollector {
    method: Option<Vec<u8>>,
    uri: Option<Vec<u8>>,
    version: Option<Vec<u8>>,
    status: Option<u16>,
    reason: Option<Vec<u8>>,
    headers: Vec<(Vec<u8>, Vec<u8>)>,
}

impl Handler for HeadCollector {
    fn request_method(&mut self, method: &[u8]) {
        self.method = Some(method.to_vec());
    }

    fn request_uri(&mut self, uri: &[u8]) {
        self.uri = Some(uri.to_vec());
    }

    fn http_version(&mut self, version: &[u8]) {
        self.version = Some(version.to_vec());
    }

    fn status_code(&mut self, status: u16) {
        self.status = Some(status);
    }

    fn reason_phrase(&mut self, reason: &[u8]) {
        self.reason = Some(reason.to_vec());
    }

    fn http_header(&mut self, name: &[u8], value: &[u8]) {
        self.headers.push((name.to_vec(), value.to_vec()));
    }
}

impl HeadCollector {
    /// Empty collector.
    pub fn new() -> Self {
        Self::default()
    }

    /// Forget everything collected so far.
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// The reason phrase of a response.
    ///
    /// `http::Response` has no place for it.
    pub fn reason_phrase(&self) -> Option<&[u8]> {
        self.reason.as_deref()
    }

    /// Header lines in the order received.
    pub fn headers(&self) -> impl Iterator<Item = (&[u8], &[u8])> {
        self.headers.iter().map(|(n, v)| (n.as_slice(), v.as_slice()))
    }

    /// Convert into a request or a response depending on the first line.
    pub fn into_head(self) -> Result<Head, Error> {
        if self.method.is_some() {
            Ok(Head::Request(self.into_request()?))
        } else if self.status.is_some() {
            Ok(Head::Response(self.into_response()?))
        } else {
            Err(Error::Incomplete)
        }
    }

    /// Convert the collected request line and headers.
    pub fn into_request(self) -> Result<Request<()>, Error> {
        let (Some(method), Some(uri)) = (self.method, self.uri) else {
            return Err(Error::NotARequest);
        };

        let method =
            Method::from_bytes(&method).map_err(|_| Error::BadMethod(lossy(&method)))?;
        let uri = Uri::try_from(uri.as_slice()).map_err(|e| Error::BadUri(e.to_string()))?;
        let version = to_version(self.version.as_deref())?;

        let mut request = Request::builder()
            .method(method)
            .uri(uri)
            .version(version)
            .body(())?;

        append_headers(request.headers_mut(), self.headers)?;

        Ok(request)
    }

    /// Convert the collected status line and headers.
    pub fn into_response(self) -> Result<Response<()>, Error> {
        let Some(status) = self.status else {
            return Err(Error::NotAResponse);
        };

        let status = StatusCode::from_u16(status).map_err(|_| Error::BadStatus(status))?;
        let version = to_version(self.version.as_deref())?;

        let mut response = Response::builder()
            .status(status)
            .version(version)
            .body(())?;

        append_headers(response.headers_mut(), self.headers)?;

        Ok(response)
    }
}

/// Parse a complete message head from the start of `input`.
///
/// Returns `None` if `input` ends before the head does. Otherwise the
/// returned `usize` is how many bytes of `input` the head took.
pub fn parse_head(input: &[u8]) -> Result<Option<(usize, Head)>, Error> {
    let mut parser = Parser::new(HeadCollector::new());

    let input_used = parser.execute(input);

    if let Some(err) = parser.error() {
        return Err(err.into());
    }

    if !parser.is_finished() {
        return Ok(None);
    }

    let head = parser.into_handler().into_head()?;

    Ok(Some((input_used, head)))
}

fn to_version(v: Option<&[u8]>) -> Result<Version, Error> {
    match v {
        Some(b"HTTP/1.0") => Ok(Version::HTTP_10),
        Some(b"HTTP/1.1") => Ok(Version::HTTP_11),
        Some(_) => Err(Error::UnsupportedVersion),
        None => Err(Error::Incomplete),
    }
}

fn append_headers(map: &mut HeaderMap, headers: Vec<(Vec<u8>, Vec<u8>)>) -> Result<(), Error> {
    map.reserve(headers.len());

    for (name, value) in headers {
        let name = HeaderName::from_bytes(&name).map_err(|_| Error::BadHeader(lossy(&name)))?;
        let value =
            HeaderValue::from_bytes(&value).map_err(|_| Error::BadHeader(lossy(&value)))?;
        map.append(name, value);
    }

    Ok(())
}

fn lossy(v: &[u8]) -> String {
    String::from_utf8_lossy(v).into_owned()
}
