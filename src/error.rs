//! Error types for harbormaster
//!
//! This module defines the error hierarchy used throughout the application.
//! We use `thiserror` for library-style errors that are part of the API,
//! and convert to HTTP responses at the proxy boundary.
//!
//! Authorization denial is deliberately absent from this hierarchy: a denied
//! resource is a normal outcome of the pipelines, not a failure.

use crate::access_control::ResourceFamily;
use thiserror::Error;

/// Configuration-related errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to load configuration: {0}")]
    Load(String),

    #[error("Invalid configuration: {message}")]
    Invalid { message: String },

    #[error("Missing required configuration: {field}")]
    Missing { field: String },
}

/// Structural errors raised while transforming an engine response
///
/// Any of these aborts the whole response operation: a malformed response
/// is never partially trusted.
#[derive(Error, Debug)]
pub enum ProxyError {
    /// A resource lacks the identifier field its family requires
    #[error("{0} identifier not found")]
    IdentifierNotFound(ResourceFamily),

    #[error("Invalid response body: {0}")]
    InvalidBody(String),

    #[error("List element at index {index} is not a JSON object")]
    InvalidListItem { index: usize },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Invalid route pattern: {0}")]
    Route(#[from] regex::Error),
}

impl ProxyError {
    /// Create an error for a body that is not the expected JSON shape
    pub fn invalid_body(reason: impl Into<String>) -> Self {
        ProxyError::InvalidBody(reason.into())
    }
}

/// Upstream engine transport errors
#[derive(Error, Debug)]
pub enum EngineError {
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Invalid engine URL '{url}': {reason}")]
    InvalidUrl { url: String, reason: String },
}

/// Persistence errors reported by the store collaborators
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("{entity} {id} not found")]
    NotFound { entity: &'static str, id: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Store failure: {0}")]
    Backend(String),
}

impl StoreError {
    pub fn not_found(entity: &'static str, id: impl ToString) -> Self {
        StoreError::NotFound {
            entity,
            id: id.to_string(),
        }
    }
}

/// Schema migration errors
///
/// The first persistence failure aborts the step; `step` names where it stopped.
#[derive(Error, Debug)]
#[error("Migration step '{step}' failed: {source}")]
pub struct MigrationError {
    pub step: &'static str,
    #[source]
    pub source: StoreError,
}

impl MigrationError {
    pub fn new(step: &'static str, source: StoreError) -> Self {
        Self { step, source }
    }
}

/// Result type alias for response transformation
pub type ProxyResult<T> = std::result::Result<T, ProxyError>;

/// Result type alias for store operations
pub type StoreResult<T> = std::result::Result<T, StoreError>;
