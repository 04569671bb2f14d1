//! Purpose: Run one scaffold exchange over the stdio transport.
//! Exports: `run_once`.
//! Role: Bridge the host's single JSON request to the shared protocol core.
//! Invariants: stdout only ever carries the single response document.
//! Invariants: Diagnostics and decode failures go to stderr, never stdout.
//! Invariants: stdin is read to EOF exactly once per process invocation.

use std::io::{self, Read, Write};

use gantry::api::{CMD_INIT, Error, ErrorKind, decode_request, dispatch, encode_response};
use gantry::notice::Notice;

use super::emit_notice;

pub(super) fn run_once() -> Result<(), Error> {
    let mut input = String::new();
    io::stdin().lock().read_to_string(&mut input).map_err(|err| {
        Error::new(ErrorKind::Io)
            .with_message("failed to read request from stdin")
            .with_source(err)
    })?;

    let request = decode_request(&input)?;
    if request.command == CMD_INIT && !request.universe.is_empty() {
        emit_notice(&Notice::bootstrap_drop(request.universe.len()));
    }

    let response = dispatch(request);
    let encoded = encode_response(&response)?;

    let stdout = io::stdout();
    let mut writer = stdout.lock();
    writer.write_all(encoded.as_bytes()).map_err(|err| {
        Error::new(ErrorKind::Io)
            .with_message("failed to write response")
            .with_source(err)
    })?;
    writer.write_all(b"\n").map_err(|err| {
        Error::new(ErrorKind::Io)
            .with_message("failed to write response")
            .with_source(err)
    })?;
    writer.flush().map_err(|err| {
        Error::new(ErrorKind::Io)
            .with_message("failed to flush response")
            .with_source(err)
    })
}
