//! List and inspect pipelines
//!
//! One algorithm for every resource family, parameterised by its
//! [`ResourcePolicy`]. A resource without its identifier field aborts the
//! whole operation.

use crate::access_control::context::OperationContext;
use crate::access_control::labels::extract_labels;
use crate::access_control::resolver::{
    ResourceAccess, apply_resource_access_control, apply_resource_access_control_from_label,
};
use crate::access_control::types::ResourcePolicy;
use crate::document::{Document, get_str};
use crate::error::{ProxyError, ProxyResult};
use serde_json::Value;
use tracing::debug;

/// Outcome of an inspect operation
#[derive(Debug, Clone, PartialEq)]
pub enum InspectOutcome {
    /// The resource is visible, possibly decorated
    Granted(Document),
    /// The resource must be replaced by an access denied response
    Denied,
}

impl InspectOutcome {
    pub fn is_granted(&self) -> bool {
        matches!(self, InspectOutcome::Granted(_))
    }
}

/// Decorate or filter a list of resources of one family
///
/// Principals with blanket access get every resource decorated; everyone
/// else only sees the resources they are allowed to.
pub fn list_operation(
    resources: Vec<Value>,
    policy: &ResourcePolicy,
    context: &OperationContext,
) -> ProxyResult<Vec<Value>> {
    if context.has_blanket_access() {
        decorate_resource_list(resources, policy, context)
    } else {
        filter_resource_list(resources, policy, context)
    }
}

/// Decorate every resource with its own control and its owner's control
pub fn decorate_resource_list(
    resources: Vec<Value>,
    policy: &ResourcePolicy,
    context: &OperationContext,
) -> ProxyResult<Vec<Value>> {
    resources
        .into_iter()
        .enumerate()
        .map(|(index, value)| {
            let resource = list_item(value, index)?;
            let identifier = resource_identifier(&resource, policy)?;

            let resource =
                apply_resource_access_control(resource, &identifier, context, policy.control_type)
                    .into_document();
            let resource = apply_label_access_control(resource, policy, context).into_document();

            Ok(Value::Object(resource))
        })
        .collect()
}

/// Keep only the resources the principal may see, preserving their order
pub fn filter_resource_list(
    resources: Vec<Value>,
    policy: &ResourcePolicy,
    context: &OperationContext,
) -> ProxyResult<Vec<Value>> {
    let total = resources.len();
    let mut filtered = Vec::with_capacity(total);

    for (index, value) in resources.into_iter().enumerate() {
        let resource = list_item(value, index)?;
        let identifier = resource_identifier(&resource, policy)?;

        if let ResourceAccess::Granted(resource) =
            resolve_access(resource, &identifier, policy, context)
        {
            filtered.push(Value::Object(resource));
        }
    }

    debug!(
        family = %policy.family,
        total,
        kept = filtered.len(),
        user = %context.user_id(),
        "Filtered resource list"
    );

    Ok(filtered)
}

/// Decide visibility of a single inspected resource
pub fn inspect_operation(
    resource: Document,
    policy: &ResourcePolicy,
    context: &OperationContext,
) -> ProxyResult<InspectOutcome> {
    let identifier = resource_identifier(&resource, policy)?;

    match resolve_access(resource, &identifier, policy, context) {
        ResourceAccess::Granted(resource) => Ok(InspectOutcome::Granted(resource)),
        ResourceAccess::Denied(_) => {
            debug!(
                family = %policy.family,
                resource_id = %identifier,
                user = %context.user_id(),
                "Inspect denied"
            );
            Ok(InspectOutcome::Denied)
        }
    }
}

/// Primary check by identifier, falling back to the owning composite's label
/// only when the primary check denies
fn resolve_access(
    resource: Document,
    identifier: &str,
    policy: &ResourcePolicy,
    context: &OperationContext,
) -> ResourceAccess {
    match apply_resource_access_control(resource, identifier, context, policy.control_type) {
        ResourceAccess::Denied(resource) => apply_label_access_control(resource, policy, context),
        granted => granted,
    }
}

fn apply_label_access_control(
    resource: Document,
    policy: &ResourcePolicy,
    context: &OperationContext,
) -> ResourceAccess {
    let labels = extract_labels(&resource, policy.label_path).cloned();
    apply_resource_access_control_from_label(
        labels.as_ref(),
        resource,
        policy.label_key,
        context,
        policy.label_control_type,
    )
}

fn list_item(value: Value, index: usize) -> ProxyResult<Document> {
    match value {
        Value::Object(document) => Ok(document),
        _ => Err(ProxyError::InvalidListItem { index }),
    }
}

fn resource_identifier(resource: &Document, policy: &ResourcePolicy) -> ProxyResult<String> {
    get_str(resource, policy.identifier_field)
        .map(str::to_owned)
        .ok_or(ProxyError::IdentifierNotFound(policy.family))
}
