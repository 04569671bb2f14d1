//! Purpose: Regression coverage for parse-failure category mapping.
//! Exports: Integration tests only.
//! Role: Verify stable category labels used by decode diagnostics.
//! Invariants: Category mapping remains deterministic for representative messages.
//! Invariants: Tests avoid payload leakage; assertions target category/hint text only.
//! Notes: Uses source include to exercise internal helper logic without widening API surface.

#[path = "../src/json/parse.rs"]
mod parse;

use parse::ParseFailureCategory;
use serde_json::Value;

#[test]
fn category_mapping_is_deterministic_for_representative_messages() {
    let cases = [
        ("unexpected end of input", ParseFailureCategory::Syntax),
        ("Syntax error at character 5", ParseFailureCategory::Syntax),
        ("early end of stream", ParseFailureCategory::Syntax),
        ("number out of range", ParseFailureCategory::NumericRange),
        ("integer overflow while parsing", ParseFailureCategory::NumericRange),
        ("invalid UTF-8 sequence", ParseFailureCategory::Utf8),
        (
            "recursion limit exceeded while parsing",
            ParseFailureCategory::DepthLimit,
        ),
    ];

    for (message, category) in cases {
        assert_eq!(parse::categorize_message(message), category, "{message}");
    }
}

#[test]
fn unknown_category_fallback_is_stable() {
    assert_eq!(
        parse::categorize_message("opaque parser issue"),
        ParseFailureCategory::Unknown
    );
}

#[test]
fn from_str_accepts_valid_and_rejects_malformed_documents() {
    let value: Value = parse::from_str(r#"{"a":1,"b":"ok"}"#).expect("valid JSON");
    assert_eq!(value.get("a").and_then(Value::as_i64), Some(1));

    parse::from_str::<Value>(r#"{"a":}"#).expect_err("malformed JSON");
    parse::from_str::<Value>("").expect_err("empty input");
}

#[test]
fn hint_contains_category_and_context() {
    let err = parse::from_str::<Value>(r#"{"a":}"#).expect_err("malformed JSON");
    let hint = parse::hint_for_error(&err, "test.context");
    assert!(hint.starts_with("parse category: "));
    assert!(hint.contains("(context: test.context)"));
}

#[test]
fn category_labels_are_stable() {
    let cases = [
        (ParseFailureCategory::Syntax, "syntax"),
        (ParseFailureCategory::NumericRange, "numeric-range"),
        (ParseFailureCategory::Utf8, "utf-8"),
        (ParseFailureCategory::DepthLimit, "depth-limit"),
        (ParseFailureCategory::Unknown, "unknown"),
    ];
    for (category, label) in cases {
        assert_eq!(category.label(), label);
    }
}
