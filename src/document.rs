//! Loosely-typed engine documents
//!
//! Engine responses are handled as `serde_json` values. Field access never
//! fails: a missing field or a field of the wrong shape reads as absent, and
//! type checks happen only where the expected type of a field is known.

use serde_json::{Map, Value};

/// A JSON object as returned by the engine
pub type Document = Map<String, Value>;

/// Read a nested object field, returning `None` if absent or not an object
pub fn get_json_object<'a>(document: &'a Document, key: &str) -> Option<&'a Document> {
    document.get(key).and_then(Value::as_object)
}

/// Follow a path of object fields, returning `None` as soon as a segment is absent
pub fn get_json_object_path<'a>(document: &'a Document, path: &[&str]) -> Option<&'a Document> {
    path.iter().try_fold(document, |object, key| get_json_object(object, key))
}

/// Read a string field, returning `None` if absent or not a string
pub fn get_str<'a>(document: &'a Document, key: &str) -> Option<&'a str> {
    document.get(key).and_then(Value::as_str)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn doc(value: Value) -> Document {
        value.as_object().cloned().unwrap()
    }

    #[test]
    fn test_get_json_object() {
        let document = doc(json!({"Spec": {"Name": "web"}, "Version": 3}));

        assert!(get_json_object(&document, "Spec").is_some());
        assert!(get_json_object(&document, "Version").is_none());
        assert!(get_json_object(&document, "Missing").is_none());
    }

    #[test]
    fn test_get_json_object_path() {
        let document = doc(json!({
            "Spec": {"ContainerSpec": {"Labels": {"tier": "front"}}}
        }));

        let labels =
            get_json_object_path(&document, &["Spec", "ContainerSpec", "Labels"]).unwrap();
        assert_eq!(labels.get("tier"), Some(&json!("front")));

        assert!(get_json_object_path(&document, &["Spec", "Labels"]).is_none());
        assert!(
            get_json_object_path(&document, &["Spec", "ContainerSpec", "Labels", "tier"]).is_none()
        );
    }

    #[test]
    fn test_empty_path_returns_document() {
        let document = doc(json!({"ID": "x"}));
        assert_eq!(get_json_object_path(&document, &[]), Some(&document));
    }

    #[test]
    fn test_get_str() {
        let document = doc(json!({"ID": "abc", "Index": 4, "Null": null}));

        assert_eq!(get_str(&document, "ID"), Some("abc"));
        assert_eq!(get_str(&document, "Index"), None);
        assert_eq!(get_str(&document, "Null"), None);
    }
}
