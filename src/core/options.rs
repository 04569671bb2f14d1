//! Purpose: Convert raw wire argument tokens into validated per-command options.
//! Exports: `InitOptions`, `CreateApiOptions`, option defaults.
//! Role: Strict typed boundary between the host's CLI-style tokens and handlers.
//! Invariants: Unknown flags and missing required options are argument errors.
//! Invariants: Parse failures carry a one-line summary naming the offending option.

use clap::Parser;

use crate::core::error::{Error, ErrorKind};

pub const DEFAULT_DOMAIN: &str = "my.domain";
pub const DEFAULT_LICENSE: &str = "apache2";
pub const LICENSE_APACHE2: &str = "apache2";

/// Options for the `init` bootstrap command. Both flags are optional and
/// defaulted; the host forwards whatever the operator typed.
#[derive(Parser, Clone, Debug, Eq, PartialEq)]
#[command(name = "init", no_binary_name = true, disable_help_flag = true)]
pub struct InitOptions {
    #[arg(long, default_value = DEFAULT_DOMAIN)]
    pub domain: String,
    #[arg(long, default_value = DEFAULT_LICENSE)]
    pub license: String,
}

/// Options for the `create api` command. All three GVK fields are required.
#[derive(Parser, Clone, Debug, Eq, PartialEq)]
#[command(name = "create api", no_binary_name = true, disable_help_flag = true)]
pub struct CreateApiOptions {
    #[arg(long)]
    pub group: String,
    #[arg(long)]
    pub version: String,
    #[arg(long)]
    pub kind: String,
}

impl InitOptions {
    pub fn from_args(args: &[String]) -> Result<Self, Error> {
        Self::try_parse_from(args).map_err(|err| argument_error("init", &err))
    }
}

impl CreateApiOptions {
    pub fn from_args(args: &[String]) -> Result<Self, Error> {
        Self::try_parse_from(args).map_err(|err| argument_error("create api", &err))
    }
}

fn argument_error(command: &'static str, err: &clap::Error) -> Error {
    Error::new(ErrorKind::Argument)
        .with_message(clap_error_summary(err))
        .with_command(command)
        .with_hint(format!("Check the flags passed to `{command}` by the host."))
}

/// Collapses clap's rendered multi-line error into the leading paragraph, so
/// missing-required reports still name each absent option.
fn clap_error_summary(err: &clap::Error) -> String {
    let rendered = err.to_string();
    let mut summary: Vec<String> = Vec::new();
    for line in rendered.lines() {
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with("Usage:") || trimmed.starts_with("tip:") {
            if summary.is_empty() {
                continue;
            }
            break;
        }
        let trimmed = trimmed
            .strip_prefix("error:")
            .map(str::trim)
            .unwrap_or(trimmed);
        summary.push(trimmed.to_string());
    }

    if summary.is_empty() {
        "invalid arguments".to_string()
    } else {
        summary.join(" ")
    }
}
