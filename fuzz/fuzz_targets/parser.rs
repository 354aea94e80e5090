#![no_main]

use libfuzzer_sys::fuzz_target;
use http11_scan::{Handler, Parser};

#[derive(Default, PartialEq, Debug)]
struct Events(Vec<(u8, Vec<u8>, Vec<u8>)>);

impl Handler for Events {
    fn request_method(&mut self, v: &[u8]) {
        self.0.push((0, v.to_vec(), vec![]));
    }

    fn request_uri(&mut self, v: &[u8]) {
        self.0.push((1, v.to_vec(), vec![]));
    }

    fn http_version(&mut self, v: &[u8]) {
        self.0.push((2, v.to_vec(), vec![]));
    }

    fn status_code(&mut self, v: u16) {
        assert!((0..=999).contains(&v));
        self.0.push((3, v.to_be_bytes().to_vec(), vec![]));
    }

    fn reason_phrase(&mut self, v: &[u8]) {
        self.0.push((4, v.to_vec(), vec![]));
    }

    fn http_header(&mut self, name: &[u8], value: &[u8]) {
        assert!(!name.is_empty());
        self.0.push((5, name.to_vec(), value.to_vec()));
    }
}

fuzz_target!(|data: &[u8]| {
    // First byte picks the chunk size, the rest is the input.
    let Some((&size, input)) = data.split_first() else {
        return;
    };
    let size = (size as usize).max(1);

    let mut whole = Parser::new(Events::default());
    let used_whole = whole.execute(input);
    assert!(used_whole <= input.len());

    let mut chunked = Parser::new(Events::default());
    let mut used_chunked = 0;
    for chunk in input.chunks(size) {
        let n = chunked.execute(chunk);
        assert!(n <= chunk.len());
        used_chunked += n;
        if chunked.is_finished() {
            break;
        }
    }

    if whole.is_finished() && whole.error().is_none() {
        // A complete head is parsed the same regardless of chunking.
        assert!(chunked.is_finished());
        assert_eq!(chunked.error(), None);
        assert_eq!(used_chunked, used_whole);
        assert_eq!(chunked.message_type(), whole.message_type());
        assert_eq!(chunked.handler(), whole.handler());
    }

    if whole.error().is_some() {
        assert!(whole.is_finished());
        assert_eq!(whole.execute(b"x"), 0);
    }

    // Stream end always leaves a defined state.
    whole.eof();
    chunked.eof();
});
