//! Purpose: `gantry` binary entry point for one plugin exchange.
//! Role: Binary crate root; parses argv, runs the stdio transport, exits.
//! Invariants: stdout carries only the response document (never diagnostics).
//! Invariants: Non-interactive errors are emitted as JSON on stderr.
//! Invariants: In-band command failures exit 0; only decode/io/internal
//! failures surface through `api::to_exit_code`.
use std::error::Error as StdError;
use std::io::{self, IsTerminal};

use clap::{Parser, error::ErrorKind as ClapErrorKind};
use serde_json::{Map, Value, json};

mod plugin_stdio;

use gantry::api::{Error, ErrorKind, to_exit_code};
use gantry::notice::{Notice, notice_json};

#[derive(Parser)]
#[command(
    name = "gantry",
    version,
    about = "Scaffolding plugin speaking single-shot JSON over stdio",
    long_about = "Reads one JSON request (command, args, universe) from stdin, applies the
command to the universe of generated files, and writes one JSON response to
stdout. Command arguments travel in-band inside the request; argv only
handles --help and --version. Invoked by an orchestrating host."
)]
struct Cli {}

fn main() {
    let exit_code = match run() {
        Ok(code) => code,
        Err(err) => {
            emit_error(&err);
            to_exit_code(err.kind())
        }
    };
    std::process::exit(exit_code);
}

fn run() -> Result<i32, Error> {
    match Cli::try_parse() {
        Ok(_cli) => {
            plugin_stdio::run_once()?;
            Ok(0)
        }
        Err(err) => match err.kind() {
            ClapErrorKind::DisplayHelp | ClapErrorKind::DisplayVersion => {
                err.print().map_err(|io_err| {
                    Error::new(ErrorKind::Io)
                        .with_message("failed to write help")
                        .with_source(io_err)
                })?;
                Ok(0)
            }
            _ => Err(Error::new(ErrorKind::Argument)
                .with_message(clap_error_summary(&err))
                .with_hint(
                    "The host passes command arguments in-band; argv accepts only --help/--version.",
                )),
        },
    }
}

fn clap_error_summary(err: &clap::Error) -> String {
    for line in err.to_string().lines() {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }
        if let Some(rest) = trimmed.strip_prefix("error:") {
            return rest.trim().to_string();
        }
        return trimmed.to_string();
    }
    "invalid arguments".to_string()
}

fn error_causes(err: &Error) -> Vec<String> {
    let mut causes = Vec::new();
    let mut cur = err.source();
    while let Some(source) = cur {
        causes.push(source.to_string());
        cur = source.source();
    }
    causes
}

fn error_json(err: &Error) -> Value {
    let mut inner = Map::new();
    inner.insert("kind".to_string(), json!(format!("{:?}", err.kind())));
    inner.insert("message".to_string(), json!(err.protocol_message()));
    if let Some(hint) = err.hint() {
        inner.insert("hint".to_string(), json!(hint));
    }
    if let Some(command) = err.command() {
        inner.insert("command".to_string(), json!(command));
    }
    let causes = error_causes(err);
    if !causes.is_empty() {
        inner.insert("causes".to_string(), json!(causes));
    }

    let mut outer = Map::new();
    outer.insert("error".to_string(), Value::Object(inner));
    Value::Object(outer)
}

fn error_text(err: &Error) -> String {
    let mut lines = Vec::new();
    lines.push(format!("error: {}", err.protocol_message()));
    if let Some(hint) = err.hint() {
        lines.push(format!("hint: {hint}"));
    }
    if let Some(command) = err.command() {
        lines.push(format!("command: {command}"));
    }
    if let Some(cause) = error_causes(err).first() {
        lines.push(format!("caused by: {cause}"));
    }
    lines.join("\n")
}

fn emit_error(err: &Error) {
    if io::stderr().is_terminal() {
        eprintln!("{}", error_text(err));
        return;
    }

    let value = error_json(err);
    let json = serde_json::to_string(&value).unwrap_or_else(|_| {
        "{\"error\":{\"kind\":\"Internal\",\"message\":\"json encode failed\"}}".to_string()
    });
    eprintln!("{json}");
}

fn emit_notice(notice: &Notice) {
    if io::stderr().is_terminal() {
        eprintln!("notice: {}", notice.message);
        return;
    }

    let value = notice_json(notice);
    let json = serde_json::to_string(&value).unwrap_or_else(|_| {
        "{\"notice\":{\"kind\":\"Internal\",\"message\":\"json encode failed\"}}".to_string()
    });
    eprintln!("{json}");
}
