//! Users, teams and roles

use super::{
    Authorizations, EndpointAuthorizations, RoleId, TeamId, TeamMembershipId, UserId,
};
use serde::{Deserialize, Serialize};

/// System-level role of a user
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    /// System administrator, bypasses every authorization check
    Administrator,
    #[default]
    Standard,
}

/// A user of the management API
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct User {
    #[serde(rename = "Id")]
    pub id: UserId,
    pub username: String,
    #[serde(default)]
    pub role: UserRole,
    /// Role-independent baseline granted to every user
    #[serde(default)]
    pub platform_authorizations: Authorizations,
    /// Materialized per-endpoint authorizations
    #[serde(default)]
    pub endpoint_authorizations: EndpointAuthorizations,
}

impl User {
    pub fn new(id: UserId, username: impl Into<String>, role: UserRole) -> Self {
        Self {
            id,
            username: username.into(),
            role,
            platform_authorizations: Authorizations::new(),
            endpoint_authorizations: EndpointAuthorizations::new(),
        }
    }

    pub fn is_admin(&self) -> bool {
        self.role == UserRole::Administrator
    }
}

/// A group of users
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Team {
    #[serde(rename = "Id")]
    pub id: TeamId,
    pub name: String,
}

/// Role of a user inside a team
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MembershipRole {
    Leader,
    #[default]
    Member,
}

/// Membership of a user in a team
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct TeamMembership {
    #[serde(rename = "Id")]
    pub id: TeamMembershipId,
    #[serde(rename = "UserId")]
    pub user_id: UserId,
    #[serde(rename = "TeamId")]
    pub team_id: TeamId,
    #[serde(default)]
    pub role: MembershipRole,
}

/// A named set of default authorizations
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Role {
    #[serde(rename = "Id")]
    pub id: RoleId,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub authorizations: Authorizations,
}
