//! Per-request operation context

use crate::access_control::registry::ResourceControlRegistry;
use crate::authorization::operations::ENDPOINT_RESOURCES_ACCESS;
use crate::model::{EndpointId, ResourceControl, TeamId, TeamMembership, User, UserId};

/// Identity and resource controls of the principal behind one proxied request
///
/// Built once at request entry and only borrowed afterwards.
#[derive(Debug, Clone)]
pub struct OperationContext {
    is_admin: bool,
    endpoint_resource_access: bool,
    user_id: UserId,
    team_ids: Vec<TeamId>,
    resource_controls: ResourceControlRegistry,
}

impl OperationContext {
    /// Context for a system administrator
    pub fn administrator(user_id: UserId, resource_controls: Vec<ResourceControl>) -> Self {
        Self {
            is_admin: true,
            endpoint_resource_access: false,
            user_id,
            team_ids: Vec::new(),
            resource_controls: ResourceControlRegistry::new(resource_controls),
        }
    }

    /// Context for a non-administrator, matched on ownership only
    pub fn restricted(
        user_id: UserId,
        team_ids: Vec<TeamId>,
        resource_controls: Vec<ResourceControl>,
    ) -> Self {
        Self {
            is_admin: false,
            endpoint_resource_access: false,
            user_id,
            team_ids,
            resource_controls: ResourceControlRegistry::new(resource_controls),
        }
    }

    /// Grant blanket access to every resource of the endpoint
    pub fn with_endpoint_resource_access(mut self, granted: bool) -> Self {
        self.endpoint_resource_access = granted;
        self
    }

    /// Build the context of a stored user for one endpoint
    pub fn for_user(
        user: &User,
        endpoint_id: EndpointId,
        memberships: &[TeamMembership],
        resource_controls: Vec<ResourceControl>,
    ) -> Self {
        if user.is_admin() {
            return Self::administrator(user.id, resource_controls);
        }

        let endpoint_resource_access = user
            .endpoint_authorizations
            .get(&endpoint_id)
            .is_some_and(|authorizations| authorizations.contains_key(ENDPOINT_RESOURCES_ACCESS));

        let team_ids = memberships
            .iter()
            .filter(|membership| membership.user_id == user.id)
            .map(|membership| membership.team_id)
            .collect();

        Self::restricted(user.id, team_ids, resource_controls)
            .with_endpoint_resource_access(endpoint_resource_access)
    }

    pub fn is_admin(&self) -> bool {
        self.is_admin
    }

    pub fn endpoint_resource_access(&self) -> bool {
        self.endpoint_resource_access
    }

    /// Whether per-resource ownership checks are bypassed
    pub fn has_blanket_access(&self) -> bool {
        self.is_admin || self.endpoint_resource_access
    }

    pub fn user_id(&self) -> UserId {
        self.user_id
    }

    pub fn team_ids(&self) -> &[TeamId] {
        &self.team_ids
    }

    pub fn resource_controls(&self) -> &ResourceControlRegistry {
        &self.resource_controls
    }
}
