//! Buffered engine responses
//!
//! Responses that may be rewritten are held in memory as a whole so the body
//! can be parsed, transformed and re-serialized before reaching the client.

use crate::document::Document;
use crate::error::{ProxyError, ProxyResult};
use axum::body::Bytes;
use axum::http::{HeaderMap, HeaderValue, StatusCode, header};
use serde_json::{Value, json};

/// Message returned in place of a resource the principal may not see
pub const ACCESS_DENIED_MESSAGE: &str = "access denied to resource";

/// A complete engine response
#[derive(Debug, Clone)]
pub struct ProxyResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: Bytes,
}

impl ProxyResponse {
    pub fn new(status: StatusCode, headers: HeaderMap, body: impl Into<Bytes>) -> Self {
        Self {
            status,
            headers,
            body: body.into(),
        }
    }

    /// Parse the body as a JSON array
    pub fn response_as_json_array(&self) -> ProxyResult<Vec<Value>> {
        match serde_json::from_slice(&self.body)? {
            Value::Array(items) => Ok(items),
            other => Err(ProxyError::invalid_body(format!(
                "expected a JSON array, got {}",
                json_kind(&other)
            ))),
        }
    }

    /// Parse the body as a JSON object
    pub fn response_as_json_object(&self) -> ProxyResult<Document> {
        match serde_json::from_slice(&self.body)? {
            Value::Object(document) => Ok(document),
            other => Err(ProxyError::invalid_body(format!(
                "expected a JSON object, got {}",
                json_kind(&other)
            ))),
        }
    }

    /// Replace the body with a JSON value and update the framing headers
    pub fn rewrite_response(&mut self, value: &Value, status: StatusCode) -> ProxyResult<()> {
        let body = serde_json::to_vec(value)?;

        self.headers.insert(
            header::CONTENT_TYPE,
            HeaderValue::from_static("application/json"),
        );
        self.headers
            .insert(header::CONTENT_LENGTH, HeaderValue::from(body.len()));
        // The body is re-serialized, any upstream encoding no longer applies.
        self.headers.remove(header::CONTENT_ENCODING);
        self.headers.remove(header::TRANSFER_ENCODING);

        self.status = status;
        self.body = Bytes::from(body);
        Ok(())
    }

    /// Replace the response with a 403 access denied payload
    pub fn rewrite_access_denied_response(&mut self) -> ProxyResult<()> {
        self.rewrite_response(
            &json!({ "message": ACCESS_DENIED_MESSAGE }),
            StatusCode::FORBIDDEN,
        )
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn response(body: &'static str) -> ProxyResponse {
        ProxyResponse::new(StatusCode::OK, HeaderMap::new(), body)
    }

    #[test]
    fn test_shape_mismatch() {
        let err = response(r#"{"ID":"a"}"#).response_as_json_array().unwrap_err();
        assert!(matches!(err, ProxyError::InvalidBody(_)));

        let err = response("[]").response_as_json_object().unwrap_err();
        assert!(matches!(err, ProxyError::InvalidBody(_)));

        let err = response("not json").response_as_json_array().unwrap_err();
        assert!(matches!(err, ProxyError::Serialization(_)));
    }

    #[test]
    fn test_rewrite_updates_length() {
        let mut resp = response("[1,2,3]");
        resp.headers
            .insert(header::CONTENT_LENGTH, HeaderValue::from(7usize));

        resp.rewrite_response(&json!([1]), StatusCode::OK).unwrap();

        assert_eq!(resp.body.as_ref(), b"[1]");
        assert_eq!(resp.headers[header::CONTENT_LENGTH], "3");
        assert_eq!(resp.headers[header::CONTENT_TYPE], "application/json");
    }

    #[test]
    fn test_access_denied() {
        let mut resp = response(r#"{"ID":"secret"}"#);
        resp.rewrite_access_denied_response().unwrap();

        assert_eq!(resp.status, StatusCode::FORBIDDEN);
        let body: Value = serde_json::from_slice(&resp.body).unwrap();
        assert_eq!(body, json!({"message": "access denied to resource"}));
    }
}
