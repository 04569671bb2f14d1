//! Purpose: Provide the internal runtime JSON decode entrypoints.
//! Exports: `from_str` plus parse-failure categorization helpers.
//! Role: Parser boundary that centralizes simd-json usage details.
//! Invariants: Decoding uses simd-json; input buffers are copied once to
//! satisfy its mutable-slice API.
//! Notes: Error-to-domain mapping is done by callsites so context stays explicit.

use serde::de::DeserializeOwned;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum ParseFailureCategory {
    Syntax,
    NumericRange,
    Utf8,
    DepthLimit,
    Unknown,
}

impl ParseFailureCategory {
    pub(crate) fn label(self) -> &'static str {
        match self {
            ParseFailureCategory::Syntax => "syntax",
            ParseFailureCategory::NumericRange => "numeric-range",
            ParseFailureCategory::Utf8 => "utf-8",
            ParseFailureCategory::DepthLimit => "depth-limit",
            ParseFailureCategory::Unknown => "unknown",
        }
    }
}

pub(crate) fn from_str<T: DeserializeOwned>(input: &str) -> Result<T, simd_json::Error> {
    let mut bytes = input.as_bytes().to_vec();
    simd_json::serde::from_slice(&mut bytes)
}

pub(crate) fn categorize_error(err: &simd_json::Error) -> ParseFailureCategory {
    categorize_message(&err.to_string())
}

// Categories are derived from message text because the parser's error type
// does not expose a stable discriminant across versions.
pub(crate) fn categorize_message(message: &str) -> ParseFailureCategory {
    let lowered = message.to_ascii_lowercase();
    if lowered.contains("out of range") || lowered.contains("overflow") {
        ParseFailureCategory::NumericRange
    } else if lowered.contains("utf-8") || lowered.contains("utf8") {
        ParseFailureCategory::Utf8
    } else if lowered.contains("recursion limit") || lowered.contains("depth") {
        ParseFailureCategory::DepthLimit
    } else if lowered.contains("syntax")
        || lowered.contains("expected")
        || lowered.contains("unexpected")
        || lowered.contains("early end")
        || lowered.contains("eof")
    {
        ParseFailureCategory::Syntax
    } else {
        ParseFailureCategory::Unknown
    }
}

pub(crate) fn hint_for_error(err: &simd_json::Error, context: &str) -> String {
    format!(
        "parse category: {} (context: {context})",
        categorize_error(err).label()
    )
}
