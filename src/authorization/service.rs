//! Authorization service
//!
//! Materializes the per-endpoint authorizations of users from the access
//! policies on endpoints and endpoint groups, and cleans up policies when a
//! principal goes away.

use crate::error::StoreResult;
use crate::model::{
    AccessPolicy, Authorizations, Endpoint, EndpointAuthorizations, EndpointGroup,
    EndpointGroupId, Role, RoleId, TeamId, TeamMembership, User, UserId,
};
use crate::store::{
    EndpointGroupStore, EndpointStore, RegistryStore, RoleStore, TeamMembershipStore, UserStore,
};
use std::collections::BTreeMap;
use std::sync::Arc;
use tracing::{debug, info};

/// Compute the authorizations of a user on every endpoint
///
/// For each endpoint the first non-empty source wins, in this order: the
/// user's policy on the endpoint, the user's policy on the endpoint's group,
/// the policies of the user's teams on the endpoint, then the policies of the
/// user's teams on the group. Several roles from one source are combined by
/// intersection.
///
/// Administrators bypass every check and get an empty map.
pub fn user_endpoint_authorizations(
    user: &User,
    memberships: &[TeamMembership],
    endpoints: &[Endpoint],
    endpoint_groups: &[EndpointGroup],
    roles: &[Role],
) -> EndpointAuthorizations {
    if user.is_admin() {
        return EndpointAuthorizations::new();
    }

    let groups: BTreeMap<EndpointGroupId, &EndpointGroup> =
        endpoint_groups.iter().map(|group| (group.id, group)).collect();

    endpoints
        .iter()
        .map(|endpoint| {
            let group = groups.get(&endpoint.group_id).copied();

            let sources = [
                user_policy_roles(&endpoint.user_access_policies, user.id),
                group
                    .map(|g| user_policy_roles(&g.user_access_policies, user.id))
                    .unwrap_or_default(),
                team_policy_roles(&endpoint.team_access_policies, memberships),
                group
                    .map(|g| team_policy_roles(&g.team_access_policies, memberships))
                    .unwrap_or_default(),
            ];

            let authorizations = sources
                .iter()
                .map(|role_ids| authorizations_from_roles(role_ids, roles))
                .find(|authorizations| !authorizations.is_empty())
                .unwrap_or_default();

            (endpoint.id, authorizations)
        })
        .collect()
}

fn user_policy_roles(policies: &BTreeMap<UserId, AccessPolicy>, user_id: UserId) -> Vec<RoleId> {
    policies
        .get(&user_id)
        .map(|policy| vec![policy.role_id])
        .unwrap_or_default()
}

fn team_policy_roles(
    policies: &BTreeMap<TeamId, AccessPolicy>,
    memberships: &[TeamMembership],
) -> Vec<RoleId> {
    memberships
        .iter()
        .filter_map(|membership| policies.get(&membership.team_id))
        .map(|policy| policy.role_id)
        .collect()
}

/// Intersection of the authorization sets of the given roles
///
/// Unknown role identifiers are skipped.
pub fn authorizations_from_roles(role_ids: &[RoleId], roles: &[Role]) -> Authorizations {
    let mut sets = role_ids
        .iter()
        .filter_map(|id| roles.iter().find(|role| role.id == *id))
        .map(|role| &role.authorizations);

    let Some(first) = sets.next() else {
        return Authorizations::new();
    };

    sets.fold(first.clone(), |merged, next| {
        merged
            .into_iter()
            .filter(|(key, _)| next.contains_key(key))
            .collect()
    })
}

/// Store collaborators of the [`AuthorizationService`]
#[derive(Clone)]
pub struct AuthorizationServiceParameters {
    pub endpoints: Arc<dyn EndpointStore>,
    pub endpoint_groups: Arc<dyn EndpointGroupStore>,
    pub registries: Arc<dyn RegistryStore>,
    pub roles: Arc<dyn RoleStore>,
    pub team_memberships: Arc<dyn TeamMembershipStore>,
    pub users: Arc<dyn UserStore>,
}

/// Keeps the materialized user authorizations in sync with access policies
#[derive(Clone)]
pub struct AuthorizationService {
    endpoints: Arc<dyn EndpointStore>,
    endpoint_groups: Arc<dyn EndpointGroupStore>,
    registries: Arc<dyn RegistryStore>,
    roles: Arc<dyn RoleStore>,
    team_memberships: Arc<dyn TeamMembershipStore>,
    users: Arc<dyn UserStore>,
}

impl AuthorizationService {
    pub fn new(parameters: AuthorizationServiceParameters) -> Self {
        Self {
            endpoints: parameters.endpoints,
            endpoint_groups: parameters.endpoint_groups,
            registries: parameters.registries,
            roles: parameters.roles,
            team_memberships: parameters.team_memberships,
            users: parameters.users,
        }
    }

    /// Recompute and store the endpoint authorizations of every user
    pub async fn update_users_authorizations(&self) -> StoreResult<()> {
        let users = self.users.users().await?;
        let endpoints = self.endpoints.endpoints().await?;
        let endpoint_groups = self.endpoint_groups.endpoint_groups().await?;
        let roles = self.roles.roles().await?;

        for mut user in users {
            let memberships = self.team_memberships.team_memberships_by_user(user.id).await?;
            user.endpoint_authorizations = user_endpoint_authorizations(
                &user,
                &memberships,
                &endpoints,
                &endpoint_groups,
                &roles,
            );
            self.users.update_user(&user).await?;
        }

        info!("User authorizations updated");
        Ok(())
    }

    /// Recompute and store the endpoint authorizations of one user
    pub async fn update_user_authorizations(&self, user_id: UserId) -> StoreResult<()> {
        let mut user = self.users.user(user_id).await?;
        let memberships = self.team_memberships.team_memberships_by_user(user_id).await?;
        let endpoints = self.endpoints.endpoints().await?;
        let endpoint_groups = self.endpoint_groups.endpoint_groups().await?;
        let roles = self.roles.roles().await?;

        user.endpoint_authorizations =
            user_endpoint_authorizations(&user, &memberships, &endpoints, &endpoint_groups, &roles);
        self.users.update_user(&user).await?;

        debug!(user = %user_id, "User authorizations updated");
        Ok(())
    }

    /// Drop a team from every access policy, then refresh all users
    pub async fn remove_team_access_policies(&self, team_id: TeamId) -> StoreResult<()> {
        for mut endpoint in self.endpoints.endpoints().await? {
            if endpoint.team_access_policies.remove(&team_id).is_some() {
                self.endpoints.update_endpoint(&endpoint).await?;
            }
        }

        for mut group in self.endpoint_groups.endpoint_groups().await? {
            if group.team_access_policies.remove(&team_id).is_some() {
                self.endpoint_groups.update_endpoint_group(&group).await?;
            }
        }

        for mut registry in self.registries.registries().await? {
            if registry.team_access_policies.remove(&team_id).is_some() {
                self.registries.update_registry(&registry).await?;
            }
        }

        info!(team = %team_id, "Team access policies removed");
        self.update_users_authorizations().await
    }

    /// Drop a user from every access policy, then refresh all users
    pub async fn remove_user_access_policies(&self, user_id: UserId) -> StoreResult<()> {
        for mut endpoint in self.endpoints.endpoints().await? {
            if endpoint.user_access_policies.remove(&user_id).is_some() {
                self.endpoints.update_endpoint(&endpoint).await?;
            }
        }

        for mut group in self.endpoint_groups.endpoint_groups().await? {
            if group.user_access_policies.remove(&user_id).is_some() {
                self.endpoint_groups.update_endpoint_group(&group).await?;
            }
        }

        for mut registry in self.registries.registries().await? {
            if registry.user_access_policies.remove(&user_id).is_some() {
                self.registries.update_registry(&registry).await?;
            }
        }

        info!(user = %user_id, "User access policies removed");
        self.update_users_authorizations().await
    }
}
