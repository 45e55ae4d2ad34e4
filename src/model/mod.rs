//! Persisted entity model
//!
//! Records owned by the store collaborators: resource controls, users, teams,
//! roles, endpoints, endpoint groups and registries.

pub mod endpoint;
pub mod resource_control;
pub mod user;

pub use endpoint::*;
pub use resource_control::*;
pub use user::*;

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

macro_rules! id_type {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
        )]
        #[serde(transparent)]
        pub struct $name(pub u64);

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<u64> for $name {
            fn from(value: u64) -> Self {
                Self(value)
            }
        }
    };
}

id_type!(
    /// Resource control identifier
    ResourceControlId
);
id_type!(
    /// User identifier
    UserId
);
id_type!(
    /// Team identifier
    TeamId
);
id_type!(
    /// Team membership identifier
    TeamMembershipId
);
id_type!(
    /// Role identifier
    RoleId
);
id_type!(
    /// Endpoint (engine instance) identifier
    EndpointId
);
id_type!(
    /// Endpoint group identifier
    EndpointGroupId
);
id_type!(
    /// Registry identifier
    RegistryId
);

/// A set of fine-grained permission tokens
///
/// The boolean is always `true` for granted tokens; absence means not granted.
pub type Authorizations = BTreeMap<String, bool>;

/// Materialized per-endpoint authorizations of a user
pub type EndpointAuthorizations = BTreeMap<EndpointId, Authorizations>;

/// Access policy binding a principal to a role
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct AccessPolicy {
    #[serde(rename = "RoleId")]
    pub role_id: RoleId,
}

impl AccessPolicy {
    pub fn new(role_id: RoleId) -> Self {
        Self { role_id }
    }
}

/// Per-user access policies on an endpoint, group or registry
pub type UserAccessPolicies = BTreeMap<UserId, AccessPolicy>;

/// Per-team access policies on an endpoint, group or registry
pub type TeamAccessPolicies = BTreeMap<TeamId, AccessPolicy>;
