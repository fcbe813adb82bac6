//! Loading debug payloads from JSON files.

use std::path::Path;

use serde_json::Value;
use thiserror::Error;

use super::debug::DebugPayload;

/// Parse a payload from JSON text.
pub fn parse_payload(text: &str) -> Result<DebugPayload, LoadError> {
    let value: Value = serde_json::from_str(text)
        .map_err(|e| LoadError::Parse { line: e.line(), message: e.to_string() })?;
    Ok(DebugPayload::from_value(value))
}

/// Load a payload from a JSON file on disk.
pub fn load_payload<P: AsRef<Path>>(path: P) -> Result<DebugPayload, LoadError> {
    let path = path.as_ref();
    let text = std::fs::read_to_string(path)
        .map_err(|e| LoadError::Io(format!("{}: {}", path.display(), e)))?;

    let payload = parse_payload(&text)?;
    tracing::info!(path = %path.display(), fields = payload.len(), "loaded debug payload");
    Ok(payload)
}

/// Errors that can occur while loading a payload.
#[derive(Debug, Clone, Error)]
pub enum LoadError {
    #[error("I/O error: {0}")]
    Io(String),

    #[error("parse error on line {line}: {message}")]
    Parse { line: usize, message: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_object() {
        let p = parse_payload(r#"{"model": "gpt", "choices": []}"#).unwrap();
        assert_eq!(p.len(), 2);
    }

    #[test]
    fn test_parse_accepts_non_object_values() {
        let array = parse_payload("[1, 2]").unwrap();
        assert_eq!(array.as_value(), &serde_json::json!([1, 2]));
        assert_eq!(array.len(), 2);

        let text = parse_payload("\"hi\"").unwrap();
        assert_eq!(text.as_value(), &serde_json::json!("hi"));

        assert!(!parse_payload("null").unwrap().is_present());
    }

    #[test]
    fn test_parse_error_reports_line() {
        let err = parse_payload("{\n  \"a\": ,\n}").unwrap_err();
        match err {
            LoadError::Parse { line, .. } => assert_eq!(line, 2),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_load_missing_file() {
        let err = load_payload("/nonexistent/debug-payload.json").unwrap_err();
        assert!(matches!(err, LoadError::Io(_)));
    }

    #[test]
    fn test_load_roundtrip_through_file() {
        let path = std::env::temp_dir().join(format!("debug-inspector-load-{}.json", std::process::id()));
        std::fs::write(&path, r#"{"content": "hello", "contentType": "text/plain"}"#).unwrap();
        let p = load_payload(&path).unwrap();
        std::fs::remove_file(&path).ok();
        assert_eq!(p.content().and_then(|v| v.as_str()), Some("hello"));
    }
}
