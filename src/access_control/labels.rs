//! Label extraction
//!
//! Labels are optional metadata: an absent segment anywhere on the path is
//! not an error.

use crate::document::{Document, get_json_object_path, get_str};

/// Retrieve the labels map found at `path`, if present
pub fn extract_labels<'a>(resource: &'a Document, path: &[&str]) -> Option<&'a Document> {
    get_json_object_path(resource, path)
}

/// Read a string label value from an optional labels map
pub fn label_value<'a>(labels: Option<&'a Document>, key: &str) -> Option<&'a str> {
    labels.and_then(|labels| get_str(labels, key))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::access_control::types::{SERVICE_POLICY, STACK_NAMESPACE_LABEL, TASK_POLICY};
    use serde_json::json;

    fn doc(value: serde_json::Value) -> Document {
        value.as_object().cloned().unwrap()
    }

    #[test]
    fn test_service_labels() {
        let service = doc(json!({
            "ID": "svc-1",
            "Spec": {"Labels": {STACK_NAMESPACE_LABEL: "alpha"}}
        }));

        let labels = extract_labels(&service, SERVICE_POLICY.label_path);
        assert_eq!(label_value(labels, STACK_NAMESPACE_LABEL), Some("alpha"));
    }

    #[test]
    fn test_task_labels_are_under_container_spec() {
        let task = doc(json!({
            "ServiceID": "svc-1",
            "Spec": {
                "Labels": {STACK_NAMESPACE_LABEL: "wrong"},
                "ContainerSpec": {"Labels": {STACK_NAMESPACE_LABEL: "alpha"}}
            }
        }));

        let labels = extract_labels(&task, TASK_POLICY.label_path);
        assert_eq!(label_value(labels, STACK_NAMESPACE_LABEL), Some("alpha"));
    }

    #[test]
    fn test_missing_segment_is_absent() {
        let task = doc(json!({"ServiceID": "svc-1", "Spec": {}}));
        assert!(extract_labels(&task, TASK_POLICY.label_path).is_none());

        let service = doc(json!({"ID": "svc-1", "Spec": {"Labels": null}}));
        assert!(extract_labels(&service, SERVICE_POLICY.label_path).is_none());
    }

    #[test]
    fn test_non_string_label_value() {
        let labels = doc(json!({STACK_NAMESPACE_LABEL: 12}));
        assert_eq!(label_value(Some(&labels), STACK_NAMESPACE_LABEL), None);
        assert_eq!(label_value(None, STACK_NAMESPACE_LABEL), None);
    }
}
