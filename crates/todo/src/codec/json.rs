//! JSON array codec shared by the store file and JSON export/import.

use serde::Serialize;
use serde_json::ser::PrettyFormatter;

use crate::entities::Task;
use crate::errors::TodoResult;

const INDENT: &[u8] = b"    ";

/// Serialize the collection as a pretty JSON array with 4-space indents
pub fn encode(tasks: &[Task]) -> TodoResult<Vec<u8>> {
    let mut buf = Vec::new();
    let mut serializer =
        serde_json::Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(INDENT));
    tasks.serialize(&mut serializer)?;
    Ok(buf)
}

/// Parse a JSON array of tasks, preserving order
pub fn decode(bytes: &[u8]) -> TodoResult<Vec<Task>> {
    Ok(serde_json::from_slice(bytes)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::{DueDate, TaskPriority};
    use crate::errors::TodoError;

    #[test]
    fn test_encode_layout() {
        let tasks = vec![Task::new("A", None, TaskPriority::Low)];
        let text = String::from_utf8(encode(&tasks).unwrap()).unwrap();
        let expected = "[\n    {\n        \"title\": \"A\",\n        \"done\": false,\n        \"due\": null,\n        \"priority\": \"Low\"\n    }\n]";
        assert_eq!(text, expected);
    }

    #[test]
    fn test_decode_preserves_order() {
        let input = br#"[
            {"title": "first", "done": true, "due": "01.02.2030", "priority": "High"},
            {"title": "second", "done": false, "due": null, "priority": "Low"}
        ]"#;
        let tasks = decode(input).unwrap();
        assert_eq!(tasks.len(), 2);
        assert_eq!(tasks[0].title, "first");
        assert!(tasks[0].done);
        assert_eq!(tasks[0].due, Some(DueDate::Text("01.02.2030".to_string())));
        assert_eq!(tasks[1].title, "second");
    }

    #[test]
    fn test_decode_rejects_malformed() {
        let err = decode(b"[{\"title\": ").unwrap_err();
        assert!(matches!(err, TodoError::JsonParseError { .. }));

        let err = decode(br#"{"title": "not an array"}"#).unwrap_err();
        assert!(matches!(err, TodoError::JsonParseError { .. }));
    }

    #[test]
    fn test_empty_collection() {
        let bytes = encode(&[]).unwrap();
        assert_eq!(bytes, b"[]");
        assert!(decode(&bytes).unwrap().is_empty());
    }
}
