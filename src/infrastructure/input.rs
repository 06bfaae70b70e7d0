use crate::application::services::ConfigSource;
use crate::domain::entities::RequestConfig;

use anyhow::Result;
use async_trait::async_trait;
use serde_json::Value;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tokio::io::AsyncReadExt;
use tracing::debug;

/// Failures while obtaining a request capture.
#[derive(Debug, Error)]
pub enum InputError {
    #[error("Failed to read '{}': {source}", .path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to read standard input: {0}")]
    Stdin(#[source] std::io::Error),

    #[error("Invalid JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Expected a JSON object describing the request, got {0}")]
    NotAnObject(&'static str),
}

/// Where the capture text comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    Literal(String),
    File(PathBuf),
    Stdin,
}

impl InputSource {
    /// `-` reads stdin and text starting with `{` or `[` is JSON. An existing
    /// path is a file, as is anything else that does not parse as JSON, so a
    /// mistyped path surfaces as a read error.
    pub fn detect(arg: &str) -> Self {
        if arg == "-" {
            return InputSource::Stdin;
        }
        if arg.trim_start().starts_with(['{', '[']) {
            return InputSource::Literal(arg.to_string());
        }
        let path = Path::new(arg);
        if !path.is_file() && serde_json::from_str::<Value>(arg).is_ok() {
            InputSource::Literal(arg.to_string())
        } else {
            InputSource::File(path.to_path_buf())
        }
    }

    pub async fn read_text(&self) -> Result<String, InputError> {
        match self {
            InputSource::Literal(text) => Ok(text.clone()),
            InputSource::File(path) => {
                debug!(path = %path.display(), "reading capture from file");
                tokio::fs::read_to_string(path)
                    .await
                    .map_err(|source| InputError::Read {
                        path: path.clone(),
                        source,
                    })
            }
            InputSource::Stdin => {
                debug!("reading capture from stdin");
                let mut text = String::new();
                tokio::io::stdin()
                    .read_to_string(&mut text)
                    .await
                    .map_err(InputError::Stdin)?;
                Ok(text)
            }
        }
    }
}

/// Parses capture text into a `RequestConfig`.
pub fn parse_config(text: &str) -> Result<RequestConfig, InputError> {
    let value: Value = serde_json::from_str(text)?;
    if !value.is_object() {
        return Err(InputError::NotAnObject(kind_of(&value)));
    }
    Ok(serde_json::from_value(value)?)
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[async_trait]
impl ConfigSource for InputSource {
    async fn load(&self) -> Result<RequestConfig> {
        let text = self.read_text().await?;
        Ok(parse_config(&text)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{ErrorKind, Write};
    use tempfile::NamedTempFile;

    fn capture_file(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn dash_means_stdin() {
        assert_eq!(InputSource::detect("-"), InputSource::Stdin);
    }

    #[test]
    fn braces_mean_literal_json() {
        let arg = r#"{"url":"https://a.test"}"#;
        assert_eq!(InputSource::detect(arg), InputSource::Literal(arg.to_string()));
    }

    #[test]
    fn brackets_mean_literal_json() {
        assert_eq!(InputSource::detect("[1]"), InputSource::Literal("[1]".to_string()));
    }

    #[test]
    fn bare_json_scalars_are_literal() {
        assert_eq!(InputSource::detect("null"), InputSource::Literal("null".to_string()));
    }

    #[test]
    fn missing_path_is_still_a_file() {
        let arg = "captures/failed-call.json";
        assert_eq!(InputSource::detect(arg), InputSource::File(PathBuf::from(arg)));
    }

    #[tokio::test]
    async fn missing_capture_file_reports_not_found() {
        let err = InputSource::detect("captures/failed-call.json")
            .load()
            .await
            .unwrap_err();
        let input_err = err.downcast_ref::<InputError>().unwrap();
        assert!(matches!(
            input_err,
            InputError::Read { source, .. } if source.kind() == ErrorKind::NotFound
        ));
        assert!(err.to_string().contains("captures/failed-call.json"));
    }

    #[test]
    fn existing_path_is_a_file() {
        let file = capture_file("{}");
        let detected = InputSource::detect(file.path().to_str().unwrap());
        assert_eq!(detected, InputSource::File(file.path().to_path_buf()));
    }

    #[tokio::test]
    async fn loads_config_from_file() {
        let file = capture_file(r#"{"method":"post","uri":"https://a.test"}"#);
        let config = InputSource::File(file.path().to_path_buf()).load().await.unwrap();

        assert_eq!(config.method().as_str(), "POST");
        assert_eq!(config.target(), Some("https://a.test"));
    }

    #[tokio::test]
    async fn unreadable_file_reports_path() {
        let source = InputSource::File(PathBuf::from("/nonexistent/capture.json"));
        let err = source.read_text().await.unwrap_err();
        assert!(matches!(err, InputError::Read { .. }));
        assert!(err.to_string().contains("/nonexistent/capture.json"));
    }

    #[tokio::test]
    async fn literal_json_loads() {
        let source = InputSource::Literal(r#"{"url":"https://a.test"}"#.to_string());
        let config = source.load().await.unwrap();
        assert_eq!(config.target(), Some("https://a.test"));
    }

    #[test]
    fn malformed_json_is_a_parse_error() {
        let err = parse_config("{not json").unwrap_err();
        assert!(matches!(err, InputError::Parse(_)));
        assert!(err.to_string().starts_with("Invalid JSON"));
    }

    #[test]
    fn non_object_json_is_rejected() {
        assert!(matches!(parse_config("[1,2]"), Err(InputError::NotAnObject("an array"))));
        assert!(matches!(parse_config("null"), Err(InputError::NotAnObject("null"))));
    }

    #[test]
    fn empty_object_is_accepted() {
        assert_eq!(parse_config("{}").unwrap(), RequestConfig::default());
    }
}
