//! Purpose: Define a stable, structured schema for non-fatal stderr notices.
//! Exports: `Notice`, `notice_json`, `notice_time_now`.
//! Role: Shared contract helper for plugin diagnostics the host may pipe through.
//! Invariants: Notices are non-fatal and never alter the stdout response.
//! Invariants: JSON schema is stable once published; fields are additive-only.
use std::time::{SystemTime, UNIX_EPOCH};

use serde_json::{Map, Value, json};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: String,
    pub time: String,
    pub command: String,
    pub message: String,
    pub details: Map<String, Value>,
}

impl Notice {
    /// Notice for `init` discarding a non-empty incoming universe. The drop
    /// is contractual; the notice only makes it visible to the operator.
    pub fn bootstrap_drop(dropped_entries: usize) -> Self {
        let mut details = Map::new();
        details.insert("dropped_entries".to_string(), Value::from(dropped_entries));
        Self {
            kind: "bootstrap-drop".to_string(),
            time: notice_time_now().unwrap_or_default(),
            command: "init".to_string(),
            message: format!("init discarded {dropped_entries} incoming universe entries"),
            details,
        }
    }
}

pub fn notice_json(notice: &Notice) -> Value {
    let mut inner = Map::new();
    inner.insert("kind".to_string(), json!(notice.kind));
    inner.insert("time".to_string(), json!(notice.time));
    inner.insert("command".to_string(), json!(notice.command));
    inner.insert("message".to_string(), json!(notice.message));
    inner.insert("details".to_string(), Value::Object(notice.details.clone()));

    let mut outer = Map::new();
    outer.insert("notice".to_string(), Value::Object(inner));
    Value::Object(outer)
}

pub fn notice_time_now() -> Option<String> {
    use time::format_description::well_known::Rfc3339;
    let duration = SystemTime::now().duration_since(UNIX_EPOCH).ok()?;
    let ts = time::OffsetDateTime::from_unix_timestamp_nanos(duration.as_nanos() as i128).ok()?;
    ts.format(&Rfc3339).ok()
}
