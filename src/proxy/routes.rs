//! Response operations keyed by engine route
//!
//! Only reads of the resource families under access control are rewritten.
//! Every other request goes through untouched.

use crate::access_control::{InspectOutcome, OperationContext, ResourceFamily};
use crate::access_control::{inspect_operation, list_operation};
use crate::error::ProxyResult;
use crate::proxy::response::ProxyResponse;
use axum::http::{Method, StatusCode};
use regex::Regex;
use serde_json::Value;
use tracing::debug;

/// Engine route pattern, with an optional API version prefix
const RESOURCE_ROUTE: &str =
    r"^(?:/v[0-9]+(?:\.[0-9]+)?)?/(services|tasks|networks|secrets|configs)(?:/([^/]+))?/?$";

/// Transformation to apply to an engine response
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResponseOperation {
    List(ResourceFamily),
    Inspect(ResourceFamily),
}

impl ResponseOperation {
    pub fn family(&self) -> ResourceFamily {
        match self {
            ResponseOperation::List(family) | ResponseOperation::Inspect(family) => *family,
        }
    }

    /// Rewrite a buffered response for the given principal
    ///
    /// Responses other than 200 are left as the engine sent them.
    pub fn apply(
        &self,
        response: &mut ProxyResponse,
        context: &OperationContext,
    ) -> ProxyResult<()> {
        if response.status != StatusCode::OK {
            return Ok(());
        }

        let policy = self.family().policy();

        match self {
            ResponseOperation::List(_) => {
                let resources = response.response_as_json_array()?;
                let resources = list_operation(resources, policy, context)?;
                response.rewrite_response(&Value::Array(resources), StatusCode::OK)
            }
            ResponseOperation::Inspect(_) => {
                let resource = response.response_as_json_object()?;
                match inspect_operation(resource, policy, context)? {
                    InspectOutcome::Granted(resource) => {
                        response.rewrite_response(&Value::Object(resource), StatusCode::OK)
                    }
                    InspectOutcome::Denied => response.rewrite_access_denied_response(),
                }
            }
        }
    }
}

/// Compiled route table
#[derive(Debug, Clone)]
pub struct ResponseRoutes {
    pattern: Regex,
}

impl ResponseRoutes {
    pub fn new() -> ProxyResult<Self> {
        Ok(Self {
            pattern: Regex::new(RESOURCE_ROUTE)?,
        })
    }

    /// Find the operation for an engine request path
    pub fn resolve(&self, method: &Method, path: &str) -> Option<ResponseOperation> {
        if method != Method::GET {
            return None;
        }

        let captures = self.pattern.captures(path)?;
        let family = ResourceFamily::from_collection(captures.get(1)?.as_str())?;

        let operation = match captures.get(2) {
            Some(_) => ResponseOperation::Inspect(family),
            None => ResponseOperation::List(family),
        };

        debug!(path, ?operation, "Matched response operation");
        Some(operation)
    }
}
