use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};
use serde_json::{Map, Value};
use std::fmt;

use crate::domain::entities::value_text;

/// A string wrapped in single quotes for a POSIX shell.
///
/// Embedded `'` characters close the quote, emit an escaped quote and reopen
/// it (`'\''`), so the argument survives the shell byte for byte.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShellQuoted(String);

impl ShellQuoted {
    pub fn new(raw: &str) -> Self {
        ShellQuoted(format!("'{}'", raw.replace('\'', r"'\''")))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ShellQuoted {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Request timeout converted to whole seconds.
///
/// Rounds up so the generated command never gives up before the original
/// request would have.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MaxTime(i64);

impl MaxTime {
    pub fn from_millis(millis: f64) -> Self {
        MaxTime((millis / 1000.0).ceil() as i64)
    }

    pub fn seconds(&self) -> i64 {
        self.0
    }
}

/// An `application/x-www-form-urlencoded` payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormPayload(String);

impl FormPayload {
    /// Encodes every entry as `key=value`, joined with `&`, in map order.
    /// `null` values encode as the empty string.
    pub fn encode(fields: &Map<String, Value>) -> Self {
        let pairs: Vec<String> = fields
            .iter()
            .map(|(key, value)| {
                format!("{}={}", percent_encode(key), percent_encode(&value_text(value)))
            })
            .collect();
        FormPayload(pairs.join("&"))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Request body text: strings verbatim, anything else as compact JSON.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BodyText(String);

impl BodyText {
    pub fn from_value(body: &Value) -> Self {
        match body {
            Value::String(s) => BodyText(s.clone()),
            other => BodyText(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Everything except `A-Z a-z 0-9 - _ . ! ~ * ' ( )`, the set JavaScript's
/// `encodeURIComponent` leaves alone.
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

fn percent_encode(raw: &str) -> String {
    utf8_percent_encode(raw, URI_COMPONENT).to_string()
}
