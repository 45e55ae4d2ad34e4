//! Access decision engine
//!
//! Decides whether a single resource is visible to the principal of an
//! [`OperationContext`], evaluated in this order:
//! 1. No resource control: the resource is public, returned undecorated
//! 2. Administrator or blanket endpoint access: allowed, decorated
//! 3. Legacy administrators-only control: denied
//! 4. Public control: allowed, decorated
//! 5. Principal (or one of its teams) is an owner: allowed, decorated
//! 6. Otherwise denied, returned unmodified
//!
//! Decoration attaches the control under `Harbormaster.ResourceControls.<type>`
//! so a resource can carry both its own control and its stack's.

use crate::access_control::context::OperationContext;
use crate::access_control::labels::label_value;
use crate::document::Document;
use crate::model::{ResourceControl, ResourceControlType};
use serde_json::{Map, Value, json};
use tracing::trace;

/// Top-level metadata field added to decorated resources
pub const METADATA_KEY: &str = "Harbormaster";

/// Field of the metadata object holding controls keyed by control type
pub const RESOURCE_CONTROLS_KEY: &str = "ResourceControls";

/// Outcome of an access decision, carrying the resource either way
#[derive(Debug, Clone, PartialEq)]
pub enum ResourceAccess {
    /// Access is granted; the resource may have been decorated
    Granted(Document),
    /// Access is denied; the resource is untouched
    Denied(Document),
}

impl ResourceAccess {
    pub fn is_granted(&self) -> bool {
        matches!(self, ResourceAccess::Granted(_))
    }

    pub fn is_denied(&self) -> bool {
        matches!(self, ResourceAccess::Denied(_))
    }

    /// Get the resource regardless of the outcome
    pub fn into_document(self) -> Document {
        match self {
            ResourceAccess::Granted(document) | ResourceAccess::Denied(document) => document,
        }
    }
}

/// Decide access to a resource given its control (if any)
pub fn decide(
    resource: Document,
    control: Option<&ResourceControl>,
    context: &OperationContext,
) -> ResourceAccess {
    let Some(control) = control else {
        trace!("No resource control, resource is public");
        return ResourceAccess::Granted(resource);
    };

    if context.has_blanket_access() {
        trace!(control = %control.id, "Blanket access, decorating");
        return ResourceAccess::Granted(decorate(resource, control));
    }

    if control.administrators_only {
        trace!(control = %control.id, "Administrators only");
        return ResourceAccess::Denied(resource);
    }

    if control.public || control.is_owned_by(context.user_id(), context.team_ids()) {
        trace!(control = %control.id, public = control.public, "Access granted");
        return ResourceAccess::Granted(decorate(resource, control));
    }

    trace!(control = %control.id, user = %context.user_id(), "Access denied");
    ResourceAccess::Denied(resource)
}

/// Decide access using the control registered for `identifier`
pub fn apply_resource_access_control(
    resource: Document,
    identifier: &str,
    context: &OperationContext,
    resource_type: ResourceControlType,
) -> ResourceAccess {
    let control = context.resource_controls().find(resource_type, identifier);
    decide(resource, control, context)
}

/// Decide access using the control of the composite named by a label
///
/// Without labels, or without `label_key` among them, nothing can be granted
/// and the resource is returned as denied.
pub fn apply_resource_access_control_from_label(
    labels: Option<&Document>,
    resource: Document,
    label_key: &str,
    context: &OperationContext,
    resource_type: ResourceControlType,
) -> ResourceAccess {
    match label_value(labels, label_key) {
        Some(owner) => apply_resource_access_control(resource, owner, context, resource_type),
        None => ResourceAccess::Denied(resource),
    }
}

/// Attach a control to a resource
///
/// Idempotent: decorating twice with the same control yields the same value.
pub fn decorate(mut resource: Document, control: &ResourceControl) -> Document {
    let mut metadata = take_object(&mut resource, METADATA_KEY);
    let mut controls = take_object(&mut metadata, RESOURCE_CONTROLS_KEY);
    controls.insert(
        control.resource_type.as_str().to_string(),
        control_value(control),
    );
    metadata.insert(RESOURCE_CONTROLS_KEY.to_string(), Value::Object(controls));
    resource.insert(METADATA_KEY.to_string(), Value::Object(metadata));
    resource
}

/// Remove a nested object field, discarding any non-object value
fn take_object(object: &mut Document, key: &str) -> Document {
    match object.remove(key) {
        Some(Value::Object(map)) => map,
        _ => Map::new(),
    }
}

fn control_value(control: &ResourceControl) -> Value {
    json!({
        "Id": control.id,
        "ResourceId": control.resource_id,
        "Type": control.resource_type,
        "Public": control.public,
        "AdministratorsOnly": control.administrators_only,
        "OwnerUserIds": control.owner_user_ids,
        "OwnerTeamIds": control.owner_team_ids,
    })
}
