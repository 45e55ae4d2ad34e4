//! In-memory store with optional JSON file persistence
//!
//! The whole dataset lives behind one lock. When a path is configured the
//! dataset is written back after every update, through a temporary file
//! renamed over the original.

use crate::authorization::defaults::{AUTHORIZATIONS_VERSION, builtin_roles};
use crate::error::{StoreError, StoreResult};
use crate::model::{
    Endpoint, EndpointGroup, EndpointGroupId, EndpointId, Registry, ResourceControl, Role, RoleId,
    Team, TeamMembership, User, UserId,
};
use crate::store::traits::{
    EndpointGroupStore, EndpointStore, RegistryStore, ResourceControlStore, RoleStore,
    TeamMembershipStore, UserStore, VersionStore,
};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tokio::sync::RwLock;
use tracing::{debug, info};

/// Serialized form of the whole dataset
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "snake_case")]
pub struct Snapshot {
    pub version: Option<u32>,
    pub resource_controls: Vec<ResourceControl>,
    pub users: Vec<User>,
    pub teams: Vec<Team>,
    pub team_memberships: Vec<TeamMembership>,
    pub roles: Vec<Role>,
    pub endpoints: Vec<Endpoint>,
    pub endpoint_groups: Vec<EndpointGroup>,
    pub registries: Vec<Registry>,
}

impl Snapshot {
    /// Dataset of a fresh installation: built-in roles at the current version
    pub fn initial() -> Self {
        let roles = builtin_roles()
            .into_iter()
            .map(|(id, name, description, authorizations)| Role {
                id,
                name: name.to_string(),
                description: description.to_string(),
                authorizations,
            })
            .collect();

        Self {
            version: Some(AUTHORIZATIONS_VERSION),
            roles,
            ..Default::default()
        }
    }
}

/// Store implementing every collaborator trait over a [`Snapshot`]
#[derive(Debug, Default)]
pub struct MemoryStore {
    state: RwLock<Snapshot>,
    path: Option<PathBuf>,
}

impl MemoryStore {
    /// Volatile store seeded with a dataset
    pub fn from_snapshot(snapshot: Snapshot) -> Self {
        Self {
            state: RwLock::new(snapshot),
            path: None,
        }
    }

    /// Open a file-backed store, starting from [`Snapshot::initial`] when the
    /// file does not exist
    pub async fn open(path: impl AsRef<Path>) -> StoreResult<Self> {
        let path = path.as_ref().to_path_buf();

        let snapshot = match tokio::fs::read(&path).await {
            Ok(data) => serde_json::from_slice(&data)?,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                info!(path = %path.display(), "Store file not found, initializing");
                Snapshot::initial()
            }
            Err(e) => return Err(e.into()),
        };

        Ok(Self {
            state: RwLock::new(snapshot),
            path: Some(path),
        })
    }

    /// Copy of the current dataset
    pub async fn snapshot(&self) -> Snapshot {
        self.state.read().await.clone()
    }

    /// Apply a change in place and persist the dataset
    ///
    /// The change hands back how to revert itself, which runs when the write
    /// fails. A failed change must leave the dataset untouched.
    async fn update<F, U>(&self, change: F) -> StoreResult<()>
    where
        F: FnOnce(&mut Snapshot) -> StoreResult<U> + Send,
        U: FnOnce(&mut Snapshot) + Send,
    {
        let mut state = self.state.write().await;
        let revert = change(&mut *state)?;

        if let Err(e) = self.persist(&*state).await {
            revert(&mut *state);
            return Err(e);
        }
        Ok(())
    }

    /// Replace the record matching `matches` in one collection
    async fn replace_record<T>(
        &self,
        records: fn(&mut Snapshot) -> &mut Vec<T>,
        entity: &'static str,
        id: impl ToString + Send,
        matches: impl Fn(&T) -> bool + Send,
        value: &T,
    ) -> StoreResult<()>
    where
        T: Clone + Send + Sync,
    {
        self.update(move |state| {
            let items = records(state);
            let index = items
                .iter()
                .position(|item| matches(item))
                .ok_or_else(|| StoreError::not_found(entity, id))?;
            let previous = std::mem::replace(&mut items[index], value.clone());

            Ok(move |state: &mut Snapshot| records(state)[index] = previous)
        })
        .await
    }

    async fn persist(&self, snapshot: &Snapshot) -> StoreResult<()> {
        let Some(path) = &self.path else {
            return Ok(());
        };

        let data = serde_json::to_vec_pretty(snapshot)?;
        let tmp = path.with_extension("tmp");
        tokio::fs::write(&tmp, data).await?;
        tokio::fs::rename(&tmp, path).await?;

        debug!(path = %path.display(), "Store persisted");
        Ok(())
    }
}

fn find<T: Clone>(
    items: &[T],
    entity: &'static str,
    id: impl ToString,
    matches: impl Fn(&T) -> bool,
) -> StoreResult<T> {
    items
        .iter()
        .find(|item| matches(item))
        .cloned()
        .ok_or_else(|| StoreError::not_found(entity, id))
}

#[async_trait]
impl ResourceControlStore for MemoryStore {
    async fn resource_controls(&self) -> StoreResult<Vec<ResourceControl>> {
        Ok(self.state.read().await.resource_controls.clone())
    }

    async fn update_resource_control(&self, control: &ResourceControl) -> StoreResult<()> {
        self.replace_record(
            |state| &mut state.resource_controls,
            "resource control",
            control.id,
            |c| c.id == control.id,
            control,
        )
        .await
    }
}

#[async_trait]
impl UserStore for MemoryStore {
    async fn users(&self) -> StoreResult<Vec<User>> {
        Ok(self.state.read().await.users.clone())
    }

    async fn user(&self, id: UserId) -> StoreResult<User> {
        find(&self.state.read().await.users, "user", id, |u| u.id == id)
    }

    async fn update_user(&self, user: &User) -> StoreResult<()> {
        self.replace_record(|state| &mut state.users, "user", user.id, |u| u.id == user.id, user)
            .await
    }
}

#[async_trait]
impl RoleStore for MemoryStore {
    async fn roles(&self) -> StoreResult<Vec<Role>> {
        Ok(self.state.read().await.roles.clone())
    }

    async fn role(&self, id: RoleId) -> StoreResult<Role> {
        find(&self.state.read().await.roles, "role", id, |r| r.id == id)
    }

    async fn update_role(&self, role: &Role) -> StoreResult<()> {
        self.replace_record(|state| &mut state.roles, "role", role.id, |r| r.id == role.id, role)
            .await
    }
}

#[async_trait]
impl TeamMembershipStore for MemoryStore {
    async fn team_memberships_by_user(&self, user_id: UserId) -> StoreResult<Vec<TeamMembership>> {
        Ok(self
            .state
            .read()
            .await
            .team_memberships
            .iter()
            .filter(|m| m.user_id == user_id)
            .cloned()
            .collect())
    }
}

#[async_trait]
impl EndpointStore for MemoryStore {
    async fn endpoints(&self) -> StoreResult<Vec<Endpoint>> {
        Ok(self.state.read().await.endpoints.clone())
    }

    async fn endpoint(&self, id: EndpointId) -> StoreResult<Endpoint> {
        find(&self.state.read().await.endpoints, "endpoint", id, |e| e.id == id)
    }

    async fn update_endpoint(&self, endpoint: &Endpoint) -> StoreResult<()> {
        self.replace_record(
            |state| &mut state.endpoints,
            "endpoint",
            endpoint.id,
            |e| e.id == endpoint.id,
            endpoint,
        )
        .await
    }
}

#[async_trait]
impl EndpointGroupStore for MemoryStore {
    async fn endpoint_groups(&self) -> StoreResult<Vec<EndpointGroup>> {
        Ok(self.state.read().await.endpoint_groups.clone())
    }

    async fn endpoint_group(&self, id: EndpointGroupId) -> StoreResult<EndpointGroup> {
        find(
            &self.state.read().await.endpoint_groups,
            "endpoint group",
            id,
            |g| g.id == id,
        )
    }

    async fn update_endpoint_group(&self, group: &EndpointGroup) -> StoreResult<()> {
        self.replace_record(
            |state| &mut state.endpoint_groups,
            "endpoint group",
            group.id,
            |g| g.id == group.id,
            group,
        )
        .await
    }
}

#[async_trait]
impl RegistryStore for MemoryStore {
    async fn registries(&self) -> StoreResult<Vec<Registry>> {
        Ok(self.state.read().await.registries.clone())
    }

    async fn update_registry(&self, registry: &Registry) -> StoreResult<()> {
        self.replace_record(
            |state| &mut state.registries,
            "registry",
            registry.id,
            |r| r.id == registry.id,
            registry,
        )
        .await
    }
}

#[async_trait]
impl VersionStore for MemoryStore {
    async fn version(&self) -> StoreResult<Option<u32>> {
        Ok(self.state.read().await.version)
    }

    async fn store_version(&self, version: u32) -> StoreResult<()> {
        self.update(|state| {
            let previous = state.version.replace(version);
            Ok(move |state: &mut Snapshot| state.version = previous)
        })
        .await
    }
}
