use super::*;
use crate::{MessageType, ParseError};

use super::Event::Status;

#[test]
fn parse_request() {
    let mut parser = recorder();

    let input = b"GET /path?a=b HTTP/1.1\r\nHost: example.test\r\nAccept: */*\r\n\r\n";
    assert_eq!(parser.execute(input), input.len());

    assert!(parser.is_finished());
    assert_eq!(parser.error(), None);
    assert_eq!(parser.message_type(), MessageType::Request);
    assert_eq!(
        parser.handler().0,
        vec![
            method("GET"),
            uri("/path?a=b"),
            version("HTTP/1.1"),
            header("Host", "example.test"),
            header("Accept", "*/*"),
        ]
    );
}

#[test]
fn parse_response() {
    let mut parser = recorder();

    let input = b"HTTP/1.0 200 OK\r\nContent-Type: text/plain\r\n\r\n";
    assert_eq!(parser.execute(input), input.len());

    assert!(parser.is_finished());
    assert_eq!(parser.error(), None);
    assert_eq!(parser.message_type(), MessageType::Response);
    assert_eq!(
        parser.handler().0,
        vec![
            version("HTTP/1.0"),
            Status(200),
            reason("OK"),
            header("Content-Type", "text/plain"),
        ]
    );
}

#[test]
fn offset_length() {
    // Scenario from the wire: request line, then a header cut after the colon.
    let mut parser = recorder();

    let msg = b"GET / HTTP/1.1\r\nFoo: Bar\r\n\r\n";

    assert_eq!(parser.execute_range(msg, 0, 16), 16);
    assert_eq!(parser.execute_range(msg, 16, 20), 4);
    assert_eq!(parser.execute_range(msg, 20, 28), 8);

    assert_eq!(
        parser.handler().0,
        vec![method("GET"), uri("/"), version("HTTP/1.1"), header("Foo", "Bar")]
    );
    assert!(parser.is_finished());
    assert_eq!(parser.error(), None);
}

#[test]
fn doesnt_read_past_end() {
    let mut parser = recorder();

    let msg = b"GET / HTTP/1.1\r\nFoo: Bar\r\n\r\nThis data should not be read.";
    assert_eq!(parser.execute(msg), 28);

    assert_eq!(
        parser.handler().0,
        vec![method("GET"), uri("/"), version("HTTP/1.1"), header("Foo", "Bar")]
    );
    assert!(parser.is_finished());
    assert_eq!(parser.error(), None);
}

#[test]
fn no_headers() {
    let mut parser = recorder();

    assert_eq!(parser.execute(b"OPTIONS * HTTP/1.0\r\n\r\n"), 22);

    assert_eq!(
        parser.handler().0,
        vec![method("OPTIONS"), uri("*"), version("HTTP/1.0")]
    );
    assert!(parser.is_finished());
}

#[test]
fn repeated_headers() {
    let mut parser = recorder();

    let input = b"HTTP/1.1 200 OK\r\nSet-Cookie: a=1\r\nSet-Cookie: b=2\r\nSet-Cookie: a=1\r\n\r\n";
    assert_eq!(parser.execute(input), input.len());

    let headers: Vec<_> = parser
        .handler()
        .0
        .iter()
        .filter(|e| matches!(e, Event::Header(..)))
        .cloned()
        .collect();

    assert_eq!(
        headers,
        vec![
            header("Set-Cookie", "a=1"),
            header("Set-Cookie", "b=2"),
            header("Set-Cookie", "a=1"),
        ]
    );
}

#[test]
fn header_whitespace() {
    let mut parser = recorder();

    let input = b"GET / HTTP/1.1\r\n\
        A:b\r\n\
        B: \t spaced out \t \r\n\
        C:\r\n\
        D:   \r\n\
        E: inner  space\r\n\
        \r\n";
    assert_eq!(parser.execute(input), input.len());
    assert_eq!(parser.error(), None);

    assert_eq!(
        parser.handler().0[3..],
        [
            header("A", "b"),
            header("B", "spaced out"),
            header("C", ""),
            header("D", ""),
            header("E", "inner  space"),
        ]
    );
}

#[test]
fn obs_text_in_value_and_reason() {
    let mut parser = recorder();

    let input = b"HTTP/1.1 200 \xe2\x9c\x93 fine\r\nX-Name: caf\xc3\xa9\r\n\r\n";
    assert_eq!(parser.execute(input), input.len());
    assert_eq!(parser.error(), None);

    assert_eq!(
        parser.handler().0,
        vec![
            version("HTTP/1.1"),
            Status(200),
            Event::Reason(b"\xe2\x9c\x93 fine".to_vec()),
            Event::Header(b"X-Name".to_vec(), b"caf\xc3\xa9".to_vec()),
        ]
    );
}

#[test]
fn empty_reason_phrase() {
    let mut parser = recorder();

    assert_eq!(parser.execute(b"HTTP/1.1 204 \r\n\r\n"), 17);

    assert_eq!(
        parser.handler().0,
        vec![version("HTTP/1.1"), Status(204), reason("")]
    );
    assert!(parser.is_finished());
    assert_eq!(parser.error(), None);
}

#[test]
fn finished_is_noop() {
    let mut parser = recorder();

    parser.execute(b"GET / HTTP/1.1\r\n\r\n");
    assert!(parser.is_finished());

    assert_eq!(parser.execute(b"GET /again HTTP/1.1\r\n\r\n"), 0);
    assert_eq!(parser.eof(), 0);

    assert_eq!(parser.handler().0.len(), 3);
    assert_eq!(parser.error(), None);
}

#[test]
fn init_reuses_parser() {
    let mut parser = recorder();

    let pipelined = b"GET /a HTTP/1.1\r\n\r\nHTTP/1.1 200 OK\r\nA: 1\r\n\r\n";

    let n = parser.execute(pipelined);
    assert_eq!(n, 19);
    assert_eq!(parser.message_type(), MessageType::Request);

    parser.init();
    assert!(!parser.is_finished());
    assert_eq!(parser.message_type(), MessageType::Unknown);

    assert_eq!(parser.execute(&pipelined[n..]), pipelined.len() - n);
    assert!(parser.is_finished());
    assert_eq!(parser.error(), None);
    assert_eq!(parser.message_type(), MessageType::Response);

    // The handler is kept across init().
    assert_eq!(
        parser.handler().0,
        vec![
            method("GET"),
            uri("/a"),
            version("HTTP/1.1"),
            version("HTTP/1.1"),
            Status(200),
            reason("OK"),
            header("A", "1"),
        ]
    );
}

#[test]
fn init_clears_error() {
    let mut parser = recorder();

    parser.execute(b"GET / HTTP/9.9\r\n");
    assert_eq!(parser.error(), Some(ParseError::BadVersion));

    parser.init();
    assert_eq!(parser.error(), None);
    assert!(!parser.is_finished());

    parser.execute(b"GET / HTTP/1.1\r\n\r\n");
    assert!(parser.is_finished());
    assert_eq!(parser.error(), None);
}

#[test]
fn init_clears_partial_token() {
    let mut parser = recorder();

    parser.execute(b"GET /lo");
    assert_eq!(parser.scanner.carried(), b"/lo");

    parser.init();
    assert!(parser.scanner.carried().is_empty());

    parser.execute(b"PUT /x HTTP/1.1\r\n\r\n");
    assert!(parser.handler().0.contains(&uri("/x")));
}

#[test]
fn debug_output() {
    let mut parser = recorder();
    parser.execute(b"GET");
    assert_eq!(
        format!("{:?}", parser),
        "Parser { phase: FirstToken, message_type: Unknown, error: None }"
    );
}
