//! Resource control records

use super::{ResourceControlId, TeamId, UserId};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

/// Kind of engine resource a control applies to
///
/// Controls are type-scoped: a resource identifier is only meaningful
/// together with its type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResourceControlType {
    Container,
    Service,
    Volume,
    Network,
    Secret,
    Stack,
    Config,
}

impl ResourceControlType {
    /// Get the type name as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            ResourceControlType::Container => "container",
            ResourceControlType::Service => "service",
            ResourceControlType::Volume => "volume",
            ResourceControlType::Network => "network",
            ResourceControlType::Secret => "secret",
            ResourceControlType::Stack => "stack",
            ResourceControlType::Config => "config",
        }
    }
}

impl fmt::Display for ResourceControlType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Ownership record for one engine resource
///
/// At most one control exists per `(resource_type, resource_id)` pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ResourceControl {
    #[serde(rename = "Id")]
    pub id: ResourceControlId,
    /// Engine-native identifier of the controlled resource
    #[serde(rename = "ResourceId")]
    pub resource_id: String,
    #[serde(rename = "Type")]
    pub resource_type: ResourceControlType,
    #[serde(default)]
    pub public: bool,
    /// Legacy flag, cleared by the version 22 schema upgrade
    #[serde(default)]
    pub administrators_only: bool,
    #[serde(default, rename = "OwnerUserIds")]
    pub owner_user_ids: BTreeSet<UserId>,
    #[serde(default, rename = "OwnerTeamIds")]
    pub owner_team_ids: BTreeSet<TeamId>,
}

impl ResourceControl {
    /// Create a private control with no owners
    pub fn new(
        id: ResourceControlId,
        resource_type: ResourceControlType,
        resource_id: impl Into<String>,
    ) -> Self {
        Self {
            id,
            resource_id: resource_id.into(),
            resource_type,
            public: false,
            administrators_only: false,
            owner_user_ids: BTreeSet::new(),
            owner_team_ids: BTreeSet::new(),
        }
    }

    pub fn public(mut self) -> Self {
        self.public = true;
        self
    }

    pub fn administrators_only(mut self) -> Self {
        self.administrators_only = true;
        self
    }

    pub fn with_owner_user(mut self, user_id: UserId) -> Self {
        self.owner_user_ids.insert(user_id);
        self
    }

    pub fn with_owner_team(mut self, team_id: TeamId) -> Self {
        self.owner_team_ids.insert(team_id);
        self
    }

    /// Check whether a principal is an explicit owner, directly or through a team
    pub fn is_owned_by(&self, user_id: UserId, team_ids: &[TeamId]) -> bool {
        self.owner_user_ids.contains(&user_id)
            || team_ids.iter().any(|team| self.owner_team_ids.contains(team))
    }
}
