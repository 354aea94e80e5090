/// Trace the input used by the parser, one line per row.
pub(crate) fn log_data(data: &[u8]) {
    if !log_enabled!(log::Level::Trace) {
        return;
    }

    for line in data.split_inclusive(|b| *b == b'\n') {
        trace!("{}", line.escape_ascii());
    }
}
