//! Purpose: Load and store JSON-with-comments documents on disk.
//! Exports: `read_source`, `write_source`, `parse_text`, `read_document`,
//! `write_document`, `normalized`.
//! Role: The file-facing boundary around `strip` and serde_json.
//! Invariants: Every read strips comments before parsing.
//! Invariants: Every write uses two-space indentation plus a trailing newline.
//! Invariants: I/O and parse failures carry the offending path.

use std::fs;
use std::io;
use std::path::Path;

use serde_json::Value;

use crate::core::error::{Error, ErrorKind};
use crate::core::strip::strip_comments;

pub fn read_source(path: &Path) -> Result<String, Error> {
    fs::read_to_string(path).map_err(|err| io_error("read", err, path))
}

pub fn write_source(path: &Path, text: &str) -> Result<(), Error> {
    fs::write(path, text).map_err(|err| io_error("write", err, path))
}

/// Strips comments from `text` and parses the remainder as JSON. The parser's
/// position information refers to the comment-stripped text, so the hint
/// points users at that.
pub fn parse_text(text: &str, path: Option<&Path>) -> Result<Value, Error> {
    let stripped = strip_comments(text);
    serde_json::from_str(&stripped).map_err(|err| {
        let mut parse_err = Error::new(ErrorKind::Parse)
            .with_message(format!("invalid JSON: {err}"))
            .with_hint("Line/column positions refer to the text after comment removal.");
        if let Some(path) = path {
            parse_err = parse_err.with_path(path);
        }
        parse_err
    })
}

pub fn read_document(path: &Path) -> Result<Value, Error> {
    let text = read_source(path)?;
    parse_text(&text, Some(path))
}

pub fn write_document(path: &Path, value: &Value) -> Result<(), Error> {
    write_source(path, &normalized(value))
}

/// The exact serialization `write_document` persists: serde_json pretty
/// output (two-space indent) plus a trailing newline.
pub fn normalized(value: &Value) -> String {
    let mut text =
        serde_json::to_string_pretty(value).unwrap_or_else(|_| Value::Null.to_string());
    text.push('\n');
    text
}

fn io_error(action: &str, err: io::Error, path: &Path) -> Error {
    let kind = match err.kind() {
        io::ErrorKind::NotFound => ErrorKind::NotFound,
        io::ErrorKind::PermissionDenied => ErrorKind::Permission,
        _ => ErrorKind::Io,
    };
    Error::new(kind)
        .with_message(format!("failed to {action} file"))
        .with_path(path)
        .with_source(err)
}

#[cfg(test)]
mod tests {
    use super::{normalized, parse_text, read_document, write_document};
    use serde_json::json;

    #[test]
    fn parse_text_strips_comments_before_parsing() {
        let value = parse_text(
            "{\n  // alias root\n  \"baseUrl\": \".\" /* note */\n}",
            None,
        )
        .expect("parse");
        assert_eq!(value, json!({"baseUrl": "."}));
    }

    #[test]
    fn parse_text_reports_parse_kind_with_path() {
        let err = parse_text("{\"a\":}", Some(std::path::Path::new("bad.json"))).unwrap_err();
        assert_eq!(err.kind(), crate::core::error::ErrorKind::Parse);
        assert_eq!(err.path().unwrap().to_str(), Some("bad.json"));
        assert!(err.hint().is_some());
    }

    #[test]
    fn normalized_is_pretty_with_trailing_newline() {
        let value = json!({"a": 1, "b": [true, null]});
        let text = normalized(&value);
        assert_eq!(
            text,
            format!("{}\n", serde_json::to_string_pretty(&value).unwrap())
        );
        assert!(text.ends_with("]\n}\n") || text.ends_with("}\n"));
    }

    #[test]
    fn write_then_read_round_trips() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("config.json");
        let value = json!({"compilerOptions": {"baseUrl": ".", "paths": {"@/*": ["./src/*"]}}});

        write_document(&path, &value).expect("write");
        let read_back = read_document(&path).expect("read");
        assert_eq!(read_back, value);

        let raw = std::fs::read_to_string(&path).expect("raw");
        assert!(raw.ends_with('\n'));
        assert!(raw.contains("  \"compilerOptions\""));
    }

    #[test]
    fn missing_file_maps_to_not_found() {
        let dir = tempfile::tempdir().expect("tempdir");
        let err = read_document(&dir.path().join("absent.json")).unwrap_err();
        assert_eq!(err.kind(), crate::core::error::ErrorKind::NotFound);
    }
}
