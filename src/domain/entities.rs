use serde::Deserialize;
use serde_json::{Map, Value};

/// A captured HTTP request as logged by the upstream automation tool.
///
/// Every field is optional and kept loosely typed: captures come from a
/// duck-typed runtime, so a field may hold a number where a string is
/// expected. Coercion happens in the accessors below, never during parsing.
/// Unknown fields are ignored.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RequestConfig {
    #[serde(default)]
    pub method: Option<Value>,
    #[serde(default)]
    pub uri: Option<Value>,
    #[serde(default)]
    pub url: Option<Value>,
    #[serde(default)]
    pub headers: Option<Value>,
    #[serde(default)]
    pub form: Option<Value>,
    #[serde(default)]
    pub body: Option<Value>,
    #[serde(default)]
    pub json: Option<Value>,
    #[serde(default)]
    pub gzip: Option<Value>,
    #[serde(default)]
    pub reject_unauthorized: Option<Value>,
    #[serde(default)]
    pub follow_redirect: Option<Value>,
    #[serde(default)]
    pub follow_all_redirects: Option<Value>,
    #[serde(default)]
    pub timeout: Option<Value>,
    #[serde(default)]
    pub resolve_with_full_response: Option<Value>,
}

impl RequestConfig {
    /// Uppercased HTTP verb, `GET` when absent or not a non-empty string.
    pub fn method(&self) -> Method {
        match self.method.as_ref().and_then(non_empty_str) {
            Some(raw) => Method::parse(raw),
            None => Method::default(),
        }
    }

    /// `uri` wins over `url` when both are set.
    pub fn target(&self) -> Option<&str> {
        self.uri
            .as_ref()
            .and_then(non_empty_str)
            .or_else(|| self.url.as_ref().and_then(non_empty_str))
    }

    /// Header entries in insertion order, values rendered as text.
    pub fn headers(&self) -> Vec<(&str, String)> {
        self.headers
            .as_ref()
            .and_then(Value::as_object)
            .map(|map| {
                map.iter()
                    .map(|(name, value)| (name.as_str(), header_text(value)))
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Form fields when `form` is an object with at least one entry.
    pub fn form(&self) -> Option<&Map<String, Value>> {
        self.form
            .as_ref()
            .and_then(Value::as_object)
            .filter(|map| !map.is_empty())
    }

    /// The body, unless absent or `null`.
    pub fn body(&self) -> Option<&Value> {
        self.body.as_ref().filter(|value| !value.is_null())
    }

    pub fn is_json(&self) -> bool {
        is_truthy(self.json.as_ref())
    }

    pub fn wants_compression(&self) -> bool {
        is_truthy(self.gzip.as_ref())
    }

    /// Only an explicit `false` disables certificate checks.
    pub fn skips_tls_verification(&self) -> bool {
        matches!(self.reject_unauthorized, Some(Value::Bool(false)))
    }

    pub fn follows_redirects(&self) -> bool {
        is_truthy(self.follow_redirect.as_ref()) || is_truthy(self.follow_all_redirects.as_ref())
    }

    /// Timeout in milliseconds.
    ///
    /// A number counts only when non-zero. A numeric string counts whenever it
    /// is non-empty, so `"0"` still yields `Some(0.0)`.
    pub fn timeout_ms(&self) -> Option<f64> {
        let millis = match self.timeout.as_ref()? {
            Value::Number(n) => n.as_f64().filter(|ms| *ms != 0.0)?,
            Value::String(s) if !s.is_empty() => s.trim().parse::<f64>().ok()?,
            _ => return None,
        };
        millis.is_finite().then_some(millis)
    }

    pub fn includes_response_headers(&self) -> bool {
        is_truthy(self.resolve_with_full_response.as_ref())
    }
}

/// HTTP method, normalized to uppercase.
///
/// Arbitrary verbs are kept as-is: the command line is allowed to carry
/// extension methods the client does not know about.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Method {
    #[default]
    Get,
    Other(String),
}

impl Method {
    pub fn parse(raw: &str) -> Self {
        let upper = raw.to_uppercase();
        if upper == "GET" {
            Method::Get
        } else {
            Method::Other(upper)
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Method::Get => "GET",
            Method::Other(verb) => verb,
        }
    }

    /// True when the verb can go on a command line unquoted.
    pub fn is_plain_token(&self) -> bool {
        let verb = self.as_str();
        !verb.is_empty()
            && verb
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.'))
    }
}

/// JavaScript truthiness over a JSON value.
pub fn is_truthy(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) => false,
        Some(Value::Bool(b)) => *b,
        Some(Value::Number(n)) => n.as_f64().is_some_and(|f| f != 0.0),
        Some(Value::String(s)) => !s.is_empty(),
        Some(Value::Array(_) | Value::Object(_)) => true,
    }
}

/// Text form of a scalar, compact JSON for arrays and objects.
/// `null` becomes the empty string.
pub fn value_text(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

fn header_text(value: &Value) -> String {
    match value {
        Value::Null => "null".to_string(),
        other => value_text(other),
    }
}

fn non_empty_str(value: &Value) -> Option<&str> {
    value.as_str().filter(|s| !s.is_empty())
}
