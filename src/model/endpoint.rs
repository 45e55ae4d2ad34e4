//! Endpoints, endpoint groups and registries

use super::{EndpointGroupId, EndpointId, RegistryId, TeamAccessPolicies, UserAccessPolicies};
use serde::{Deserialize, Serialize};

/// Group every endpoint belongs to when none is assigned
pub const UNASSIGNED_ENDPOINT_GROUP: EndpointGroupId = EndpointGroupId(1);

/// An orchestration engine instance reachable over HTTP
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Endpoint {
    #[serde(rename = "Id")]
    pub id: EndpointId,
    pub name: String,
    /// Base URL of the engine API (e.g., `http://10.0.0.5:2375`)
    #[serde(rename = "URL")]
    pub url: String,
    #[serde(rename = "GroupId", default = "default_group")]
    pub group_id: EndpointGroupId,
    #[serde(default)]
    pub user_access_policies: UserAccessPolicies,
    #[serde(default)]
    pub team_access_policies: TeamAccessPolicies,
}

fn default_group() -> EndpointGroupId {
    UNASSIGNED_ENDPOINT_GROUP
}

/// A group of endpoints sharing access policies
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct EndpointGroup {
    #[serde(rename = "Id")]
    pub id: EndpointGroupId,
    pub name: String,
    #[serde(default)]
    pub user_access_policies: UserAccessPolicies,
    #[serde(default)]
    pub team_access_policies: TeamAccessPolicies,
}

/// An image registry with its own access policies
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Registry {
    #[serde(rename = "Id")]
    pub id: RegistryId,
    pub name: String,
    #[serde(rename = "URL")]
    pub url: String,
    #[serde(default)]
    pub user_access_policies: UserAccessPolicies,
    #[serde(default)]
    pub team_access_policies: TeamAccessPolicies,
}
