//! Purpose: Provide the transport-agnostic scaffolding plugin protocol core.
//! Key exports: `Request`, `Response`, `decode_request`, `dispatch`, `encode_response`, `run`.
//! Role: Shared protocol adapter between the stdio transport and scaffold handlers.
//! Invariants: Every dispatched request yields exactly one well-formed response.
//! Invariants: Argument, conflict, and unknown-command failures map to in-band error responses.
//! Invariants: Decode failures never yield a response; the transport reports them out of band.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::core::error::{Error, ErrorKind};
use crate::core::options::{CreateApiOptions, InitOptions};
use crate::core::scaffold;
use crate::core::universe::Universe;
use crate::json::parse;

pub const CMD_INIT: &str = "init";
/// Wire-exact command name: the literal contains a space, not a hyphen.
pub const CMD_CREATE_API: &str = "create api";

/// One host request: a command, its raw CLI-style tokens, and the universe
/// accumulated by earlier commands. Constructed once per process invocation.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Request {
    pub command: String,
    pub args: Vec<String>,
    pub universe: Universe,
}

/// The single reply written to stdout. Field declaration order matches the
/// canonical lexicographic key order of the wire encoding; `Universe` keeps
/// its own keys sorted.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Response {
    pub command: String,
    pub error: bool,
    pub error_msg: String,
    pub universe: Universe,
}

impl Response {
    pub fn success(command: impl Into<String>, universe: Universe) -> Self {
        Self {
            command: command.into(),
            error: false,
            error_msg: String::new(),
            universe,
        }
    }

    /// Error replies echo the command and carry an empty universe so failed
    /// runs never leak partial generated content.
    pub fn failure(command: impl Into<String>, err: &Error) -> Self {
        Self {
            command: command.into(),
            error: true,
            error_msg: err.protocol_message(),
            universe: Universe::new(),
        }
    }
}

/// Decodes one protocol request. Strict all-or-nothing: `command`, `args`,
/// and `universe` must all be present with the right shapes. Pure parse, no
/// side effects; plain JSON decoding lives in `json::parse` instead.
pub fn decode_request(input: &str) -> Result<Request, Error> {
    let value: Value = parse::from_str(input).map_err(|err| {
        Error::new(ErrorKind::Decode)
            .with_message(format!("request is not valid JSON: {err}"))
            .with_hint(parse::hint_for_error(&err, "plugin request"))
    })?;
    request_from_value(value)
}

fn request_from_value(value: Value) -> Result<Request, Error> {
    let mut object = match value {
        Value::Object(object) => object,
        _ => return Err(decode_error("request must be a JSON object")),
    };

    let command = match object.remove("command") {
        Some(Value::String(command)) => command,
        Some(_) => return Err(decode_error("`command` must be a string")),
        None => return Err(decode_error("request is missing field `command`")),
    };
    if command.is_empty() {
        return Err(decode_error("`command` must not be empty"));
    }

    let args = match object.remove("args") {
        Some(Value::Array(values)) => {
            let mut args = Vec::with_capacity(values.len());
            for value in values {
                match value {
                    Value::String(arg) => args.push(arg),
                    _ => return Err(decode_error("`args` must contain only strings")),
                }
            }
            args
        }
        Some(_) => return Err(decode_error("`args` must be an array of strings")),
        None => return Err(decode_error("request is missing field `args`")),
    };

    let universe = match object.remove("universe") {
        Some(Value::Object(entries)) => {
            let mut universe = Universe::new();
            for (path, content) in entries {
                match content {
                    Value::String(content) => {
                        universe.insert(path, content);
                    }
                    _ => return Err(decode_error("`universe` values must be strings")),
                }
            }
            universe
        }
        Some(_) => return Err(decode_error("`universe` must be an object of strings")),
        None => return Err(decode_error("request is missing field `universe`")),
    };

    Ok(Request {
        command,
        args,
        universe,
    })
}

fn decode_error(message: &str) -> Error {
    Error::new(ErrorKind::Decode).with_message(message)
}

/// Routes a request to its handler and converts every internal failure into
/// an in-band error response. This is the single point where argument,
/// conflict, and unknown-command errors stop propagating.
pub fn dispatch(request: Request) -> Response {
    let command = request.command.clone();
    match route_command(request) {
        Ok(universe) => Response::success(command, universe),
        Err(err) => Response::failure(command, &err),
    }
}

fn route_command(request: Request) -> Result<Universe, Error> {
    match request.command.as_str() {
        CMD_INIT => {
            let options = InitOptions::from_args(&request.args)?;
            Ok(scaffold::init(&options))
        }
        CMD_CREATE_API => {
            let options = CreateApiOptions::from_args(&request.args)?;
            scaffold::create_api(&options, request.universe)
        }
        other => Err(Error::new(ErrorKind::Unsupported)
            .with_message(format!("plugin not supported: {other}"))
            .with_hint(format!("Supported commands: `{CMD_INIT}`, `{CMD_CREATE_API}`."))),
    }
}

/// Serializes a response into its canonical form: one JSON object, keys in
/// lexicographic order, wire-exact field names.
pub fn encode_response(response: &Response) -> Result<String, Error> {
    serde_json::to_string(response).map_err(|err| {
        Error::new(ErrorKind::Internal)
            .with_message("failed to encode response")
            .with_source(err)
    })
}

/// One full exchange over in-memory strings: decode, dispatch, encode.
/// Transport-free so tests can drive the plugin without spawning a process.
pub fn run(input: &str) -> Result<String, Error> {
    let request = decode_request(input)?;
    let response = dispatch(request);
    encode_response(&response)
}

#[cfg(test)]
mod tests {
    use super::{
        CMD_CREATE_API, CMD_INIT, Request, Response, decode_request, dispatch, encode_response,
        run,
    };
    use crate::core::error::ErrorKind;
    use crate::core::universe::Universe;

    fn request(command: &str, args: &[&str], universe: Universe) -> Request {
        Request {
            command: command.to_string(),
            args: args.iter().map(|arg| arg.to_string()).collect(),
            universe,
        }
    }

    #[test]
    fn decode_accepts_complete_request() {
        let decoded = decode_request(
            r#"{"command":"init","args":["--domain","acme.io"],"universe":{"keep":"me"}}"#,
        )
        .expect("request");
        assert_eq!(decoded.command, CMD_INIT);
        assert_eq!(decoded.args, vec!["--domain", "acme.io"]);
        assert_eq!(decoded.universe.get("keep"), Some("me"));
    }

    #[test]
    fn decode_rejects_invalid_json_with_parse_hint() {
        let err = decode_request(r#"{"command":}"#).expect_err("err");
        assert_eq!(err.kind(), ErrorKind::Decode);
        assert!(err.hint().expect("hint").contains("parse category:"));
    }

    #[test]
    fn decode_rejects_non_object_document() {
        let err = decode_request(r#"["init"]"#).expect_err("err");
        assert_eq!(err.kind(), ErrorKind::Decode);
        assert_eq!(err.message(), Some("request must be a JSON object"));
    }

    #[test]
    fn decode_requires_every_field_once_command_present() {
        let missing_command = decode_request(r#"{"args":[],"universe":{}}"#).expect_err("err");
        assert_eq!(
            missing_command.message(),
            Some("request is missing field `command`")
        );

        let missing_args = decode_request(r#"{"command":"init","universe":{}}"#).expect_err("err");
        assert_eq!(missing_args.message(), Some("request is missing field `args`"));

        let missing_universe = decode_request(r#"{"command":"init","args":[]}"#).expect_err("err");
        assert_eq!(
            missing_universe.message(),
            Some("request is missing field `universe`")
        );
    }

    #[test]
    fn decode_rejects_empty_command() {
        let err = decode_request(r#"{"command":"","args":[],"universe":{}}"#).expect_err("err");
        assert_eq!(err.kind(), ErrorKind::Decode);
        assert_eq!(err.message(), Some("`command` must not be empty"));
    }

    #[test]
    fn decode_rejects_mistyped_fields() {
        let bad_arg =
            decode_request(r#"{"command":"init","args":[1],"universe":{}}"#).expect_err("err");
        assert_eq!(bad_arg.message(), Some("`args` must contain only strings"));

        let bad_entry = decode_request(r#"{"command":"init","args":[],"universe":{"main":7}}"#)
            .expect_err("err");
        assert_eq!(bad_entry.message(), Some("`universe` values must be strings"));

        let bad_universe =
            decode_request(r#"{"command":"init","args":[],"universe":[]}"#).expect_err("err");
        assert_eq!(
            bad_universe.message(),
            Some("`universe` must be an object of strings")
        );
    }

    #[test]
    fn decode_ignores_unknown_fields() {
        let decoded =
            decode_request(r#"{"command":"init","args":[],"universe":{},"extra":true}"#)
                .expect("request");
        assert_eq!(decoded.command, CMD_INIT);
    }

    #[test]
    fn dispatch_init_replaces_incoming_universe() {
        let mut incoming = Universe::new();
        incoming.insert("stale/file.txt", "left over");

        let response = dispatch(request(CMD_INIT, &["--domain", "acme.io"], incoming));
        assert!(!response.error);
        assert_eq!(response.error_msg, "");
        assert_eq!(response.command, CMD_INIT);
        assert!(!response.universe.contains("stale/file.txt"));
        assert!(
            response
                .universe
                .get("main")
                .expect("main")
                .contains("Hello, acme.io!")
        );
    }

    #[test]
    fn dispatch_unknown_command_reports_unsupported() {
        let response = dispatch(request("create webhook", &[], Universe::new()));
        assert!(response.error);
        assert_eq!(response.command, "create webhook");
        assert_eq!(response.error_msg, "plugin not supported: create webhook");
        assert!(response.universe.is_empty());
    }

    #[test]
    fn dispatch_recovers_argument_failures() {
        let response = dispatch(request(CMD_CREATE_API, &[], Universe::new()));
        assert!(response.error);
        assert!(response.universe.is_empty());
        assert!(response.error_msg.contains("--group"));
    }

    #[test]
    fn dispatch_recovers_conflicts() {
        let mut incoming = Universe::new();
        incoming.insert("api/v1/memcached_types.py", "class Memcached: ...");

        let response = dispatch(request(
            CMD_CREATE_API,
            &["--group", "cache", "--version", "v1", "--kind", "Memcached"],
            incoming,
        ));
        assert!(response.error);
        assert_eq!(response.error_msg, "gvk definition must not exist");
        assert!(response.universe.is_empty());
    }

    #[test]
    fn encode_emits_canonical_sorted_keys() {
        let mut universe = Universe::new();
        universe.insert("b", "2");
        universe.insert("a", "1");
        let encoded = encode_response(&Response::success("init", universe)).expect("encoded");
        assert_eq!(
            encoded,
            r#"{"command":"init","error":false,"error_msg":"","universe":{"a":"1","b":"2"}}"#
        );
    }

    #[test]
    fn run_output_round_trips_without_loss() {
        let output = run(r#"{"command":"init","args":["--domain","acme.io"],"universe":{}}"#)
            .expect("output");
        let decoded: Response = serde_json::from_str(&output).expect("response");
        assert_eq!(encode_response(&decoded).expect("re-encoded"), output);
    }
}
