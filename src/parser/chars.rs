//! Byte classes of the HTTP/1.1 message grammar.

macro_rules! byte_map {
    ($($p:pat_param)|+) => {{
        let mut map = [false; 256];
        let mut i = 0;
        while i < 256 {
            map[i] = matches!(i as u8, $($p)|+);
            i += 1;
        }
        map
    }};
}

/// ```notrust
/// tchar = "!" / "#" / "$" / "%" / "&" / "'" / "*"
///       / "+" / "-" / "." / "^" / "_" / "`" / "|" / "~"
///       / DIGIT / ALPHA
/// ```
static TOKEN_MAP: [bool; 256] = byte_map!(
    b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' |
    b'!' | b'#' | b'$' | b'%' | b'&' | b'\'' | b'*' | b'+' |
    b'-' | b'.' | b'^' | b'_' | b'`' | b'|' | b'~'
);

// Anything visible, i.e. no SP, CTL or DEL.
static URI_MAP: [bool; 256] = byte_map!(b'!'..=0x7e | 0x80..=0xff);

// HTAB, SP, VCHAR and obs-text.
static TEXT_MAP: [bool; 256] = byte_map!(b'\t' | b' '..=0x7e | 0x80..=0xff);

#[inline]
pub(crate) fn is_token(b: u8) -> bool {
    TOKEN_MAP[b as usize]
}

#[inline]
pub(crate) fn is_uri(b: u8) -> bool {
    URI_MAP[b as usize]
}

/// Allowed in header values and reason phrases.
#[inline]
pub(crate) fn is_text(b: u8) -> bool {
    TEXT_MAP[b as usize]
}

#[inline]
pub(crate) fn is_ows(b: u8) -> bool {
    b == b' ' || b == b'\t'
}

/// The first token of a request line may be a method, the first token of a
/// status line is `HTTP/x.y`. Until the separating SP, accept both.
#[inline]
pub(crate) fn is_first_token(b: u8) -> bool {
    is_token(b) || b == b'/'
}

/// Strip OWS from the end of a field value.
pub(crate) fn trim_ows_end(mut v: &[u8]) -> &[u8] {
    while let [rest @ .., last] = v {
        if !is_ows(*last) {
            break;
        }
        v = rest;
    }
    v
}

/// Split `HTTP/x.y` into its major and minor digit.
pub(crate) fn version_digits(v: &[u8]) -> Option<(u8, u8)> {
    match v {
        [b'H', b'T', b'T', b'P', b'/', major, b'.', minor]
            if major.is_ascii_digit() && minor.is_ascii_digit() =>
        {
            Some((major - b'0', minor - b'0'))
        }
        _ => None,
    }
}

/// Only HTTP/1.0 and HTTP/1.1 are understood.
pub(crate) fn is_supported_version(digits: (u8, u8)) -> bool {
    matches!(digits, (1, 0) | (1, 1))
}
