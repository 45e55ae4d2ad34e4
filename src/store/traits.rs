//! Store collaborator traits
//!
//! Each trait covers one entity collection. Implementations must be safe to
//! share across request tasks.

use crate::error::StoreResult;
use crate::model::{
    Endpoint, EndpointGroup, EndpointGroupId, EndpointId, Registry, ResourceControl, Role, RoleId,
    TeamMembership, User, UserId,
};
// async_trait required for dyn-compatibility with Arc<dyn ...Store>
use async_trait::async_trait;

#[async_trait]
pub trait ResourceControlStore: Send + Sync {
    /// Every stored resource control
    async fn resource_controls(&self) -> StoreResult<Vec<ResourceControl>>;

    /// Replace a stored control, keyed by its identifier
    async fn update_resource_control(&self, control: &ResourceControl) -> StoreResult<()>;
}

#[async_trait]
pub trait UserStore: Send + Sync {
    async fn users(&self) -> StoreResult<Vec<User>>;

    async fn user(&self, id: UserId) -> StoreResult<User>;

    async fn update_user(&self, user: &User) -> StoreResult<()>;
}

#[async_trait]
pub trait RoleStore: Send + Sync {
    async fn roles(&self) -> StoreResult<Vec<Role>>;

    async fn role(&self, id: RoleId) -> StoreResult<Role>;

    async fn update_role(&self, role: &Role) -> StoreResult<()>;
}

#[async_trait]
pub trait TeamMembershipStore: Send + Sync {
    async fn team_memberships_by_user(&self, user_id: UserId) -> StoreResult<Vec<TeamMembership>>;
}

#[async_trait]
pub trait EndpointStore: Send + Sync {
    async fn endpoints(&self) -> StoreResult<Vec<Endpoint>>;

    async fn endpoint(&self, id: EndpointId) -> StoreResult<Endpoint>;

    async fn update_endpoint(&self, endpoint: &Endpoint) -> StoreResult<()>;
}

#[async_trait]
pub trait EndpointGroupStore: Send + Sync {
    async fn endpoint_groups(&self) -> StoreResult<Vec<EndpointGroup>>;

    async fn endpoint_group(&self, id: EndpointGroupId) -> StoreResult<EndpointGroup>;

    async fn update_endpoint_group(&self, group: &EndpointGroup) -> StoreResult<()>;
}

#[async_trait]
pub trait RegistryStore: Send + Sync {
    async fn registries(&self) -> StoreResult<Vec<Registry>>;

    async fn update_registry(&self, registry: &Registry) -> StoreResult<()>;
}

/// Stored schema version
#[async_trait]
pub trait VersionStore: Send + Sync {
    /// Current version, `None` on a fresh store
    async fn version(&self) -> StoreResult<Option<u32>>;

    async fn store_version(&self, version: u32) -> StoreResult<()>;
}
