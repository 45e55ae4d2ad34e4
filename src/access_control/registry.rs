//! Resource control registry
//!
//! In-memory view of the resource controls relevant to one request.

use crate::model::{ResourceControl, ResourceControlType};

/// Find the control of a given type for a resource identifier
///
/// Matching is exact and case-sensitive on both the type and the identifier.
pub fn find_resource_control<'a>(
    controls: &'a [ResourceControl],
    resource_type: ResourceControlType,
    identifier: &str,
) -> Option<&'a ResourceControl> {
    controls.iter().find(|control| {
        control.resource_type == resource_type && control.resource_id == identifier
    })
}

/// Snapshot of resource controls loaded once per request
#[derive(Debug, Clone, Default)]
pub struct ResourceControlRegistry {
    controls: Vec<ResourceControl>,
}

impl ResourceControlRegistry {
    pub fn new(controls: Vec<ResourceControl>) -> Self {
        Self { controls }
    }

    /// Look up a control by type and resource identifier
    pub fn find(
        &self,
        resource_type: ResourceControlType,
        identifier: &str,
    ) -> Option<&ResourceControl> {
        find_resource_control(&self.controls, resource_type, identifier)
    }
}
