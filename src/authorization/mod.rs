//! Role-based authorization
//!
//! Operation tokens, the default per-role tables, and the service that
//! materializes per-endpoint authorizations onto users.

pub mod defaults;
pub mod operations;
pub mod service;

pub use service::{
    AuthorizationService, AuthorizationServiceParameters, authorizations_from_roles,
    user_endpoint_authorizations,
};
