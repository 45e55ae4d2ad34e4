//! Default authorization tables
//!
//! Immutable tables shipped with schema version 22. Changing a default means
//! shipping a new table and a migration that rewrites stored roles, never
//! mutating a role's set in place at runtime.

use super::operations::*;
use crate::model::{Authorizations, RoleId};

/// Schema version these tables belong to
pub const AUTHORIZATIONS_VERSION: u32 = 22;

pub const ENDPOINT_ADMINISTRATOR_ROLE: RoleId = RoleId(1);
pub const HELP_DESK_ROLE: RoleId = RoleId(2);
pub const STANDARD_USER_ROLE: RoleId = RoleId(3);
pub const READ_ONLY_USER_ROLE: RoleId = RoleId(4);

/// Built-in roles with their canonical name, description and default set
pub fn builtin_roles() -> [(RoleId, &'static str, &'static str, Authorizations); 4] {
    [
        (
            ENDPOINT_ADMINISTRATOR_ROLE,
            "Endpoint administrator",
            "Full control of all resources in an endpoint",
            default_endpoint_authorizations_for_endpoint_administrator_role(),
        ),
        (
            HELP_DESK_ROLE,
            "Helpdesk",
            "Read-only access of all resources in an endpoint",
            default_endpoint_authorizations_for_help_desk_role(),
        ),
        (
            STANDARD_USER_ROLE,
            "Standard user",
            "Full control of assigned resources in an endpoint",
            default_endpoint_authorizations_for_standard_user_role(),
        ),
        (
            READ_ONLY_USER_ROLE,
            "Read-only user",
            "Read-only access of assigned resources in an endpoint",
            default_endpoint_authorizations_for_read_only_user_role(),
        ),
    ]
}

const READ_OPERATIONS: &[&str] = &[
    DOCKER_AGENT_HOST_INFO,
    DOCKER_AGENT_LIST,
    DOCKER_AGENT_PING,
    DOCKER_AGENT_BROWSE_GET,
    DOCKER_AGENT_BROWSE_LIST,
    DOCKER_CONFIG_LIST,
    DOCKER_CONFIG_INSPECT,
    DOCKER_CONTAINER_LIST,
    DOCKER_CONTAINER_INSPECT,
    DOCKER_CONTAINER_CHANGES,
    DOCKER_CONTAINER_TOP,
    DOCKER_CONTAINER_LOGS,
    DOCKER_CONTAINER_STATS,
    DOCKER_CONTAINER_ARCHIVE_INFO,
    DOCKER_EXEC_INSPECT,
    DOCKER_IMAGE_LIST,
    DOCKER_IMAGE_SEARCH,
    DOCKER_IMAGE_HISTORY,
    DOCKER_IMAGE_INSPECT,
    DOCKER_NETWORK_LIST,
    DOCKER_NETWORK_INSPECT,
    DOCKER_NODE_LIST,
    DOCKER_NODE_INSPECT,
    DOCKER_SECRET_LIST,
    DOCKER_SECRET_INSPECT,
    DOCKER_SERVICE_LIST,
    DOCKER_SERVICE_INSPECT,
    DOCKER_SERVICE_LOGS,
    DOCKER_SWARM_INSPECT,
    DOCKER_SYSTEM_INFO,
    DOCKER_SYSTEM_VERSION,
    DOCKER_SYSTEM_PING,
    DOCKER_SYSTEM_EVENTS,
    DOCKER_SYSTEM_DATA_USAGE,
    DOCKER_TASK_LIST,
    DOCKER_TASK_INSPECT,
    DOCKER_TASK_LOGS,
    DOCKER_VOLUME_LIST,
    DOCKER_VOLUME_INSPECT,
    PLATFORM_STACK_LIST,
    PLATFORM_STACK_INSPECT,
    PLATFORM_STACK_FILE,
    PLATFORM_WEBHOOK_LIST,
];

const WRITE_OPERATIONS: &[&str] = &[
    DOCKER_AGENT_BROWSE_PUT,
    DOCKER_AGENT_BROWSE_RENAME,
    DOCKER_AGENT_BROWSE_DELETE,
    DOCKER_CONFIG_CREATE,
    DOCKER_CONFIG_UPDATE,
    DOCKER_CONFIG_DELETE,
    DOCKER_CONTAINER_EXPORT,
    DOCKER_CONTAINER_CREATE,
    DOCKER_CONTAINER_PRUNE,
    DOCKER_CONTAINER_KILL,
    DOCKER_CONTAINER_PAUSE,
    DOCKER_CONTAINER_UNPAUSE,
    DOCKER_CONTAINER_RESTART,
    DOCKER_CONTAINER_START,
    DOCKER_CONTAINER_STOP,
    DOCKER_CONTAINER_WAIT,
    DOCKER_CONTAINER_RESIZE,
    DOCKER_CONTAINER_ATTACH,
    DOCKER_CONTAINER_ATTACH_WEBSOCKET,
    DOCKER_CONTAINER_EXEC,
    DOCKER_CONTAINER_RENAME,
    DOCKER_CONTAINER_UPDATE,
    DOCKER_CONTAINER_PUT_CONTAINER_ARCHIVE,
    DOCKER_CONTAINER_DELETE,
    DOCKER_EXEC_START,
    DOCKER_EXEC_RESIZE,
    DOCKER_IMAGE_GET_ALL,
    DOCKER_IMAGE_GET,
    DOCKER_IMAGE_LOAD,
    DOCKER_IMAGE_CREATE,
    DOCKER_IMAGE_PRUNE,
    DOCKER_IMAGE_PUSH,
    DOCKER_IMAGE_TAG,
    DOCKER_IMAGE_DELETE,
    DOCKER_IMAGE_COMMIT,
    DOCKER_IMAGE_BUILD,
    DOCKER_NETWORK_CREATE,
    DOCKER_NETWORK_CONNECT,
    DOCKER_NETWORK_DISCONNECT,
    DOCKER_NETWORK_PRUNE,
    DOCKER_NETWORK_DELETE,
    DOCKER_SECRET_CREATE,
    DOCKER_SECRET_UPDATE,
    DOCKER_SECRET_DELETE,
    DOCKER_SERVICE_CREATE,
    DOCKER_SERVICE_UPDATE,
    DOCKER_SERVICE_DELETE,
    DOCKER_SYSTEM_AUTH,
    DOCKER_VOLUME_CREATE,
    DOCKER_VOLUME_PRUNE,
    DOCKER_VOLUME_DELETE,
    PLATFORM_RESOURCE_CONTROL_CREATE,
    PLATFORM_RESOURCE_CONTROL_UPDATE,
    PLATFORM_STACK_CREATE,
    PLATFORM_STACK_MIGRATE,
    PLATFORM_STACK_UPDATE,
    PLATFORM_STACK_DELETE,
    PLATFORM_WEBSOCKET_EXEC,
    PLATFORM_WEBHOOK_CREATE,
    PLATFORM_WEBHOOK_DELETE,
];

// Cluster management, reserved to endpoint administrators.
const CLUSTER_OPERATIONS: &[&str] = &[
    DOCKER_NODE_UPDATE,
    DOCKER_NODE_DELETE,
    DOCKER_SWARM_UNLOCK_KEY,
    DOCKER_SWARM_INIT,
    DOCKER_SWARM_JOIN,
    DOCKER_SWARM_LEAVE,
    DOCKER_SWARM_UNLOCK,
    DOCKER_SWARM_UPDATE,
];

const PLATFORM_OPERATIONS: &[&str] = &[
    PLATFORM_DOCKER_HUB_INSPECT,
    PLATFORM_ENDPOINT_GROUP_LIST,
    PLATFORM_ENDPOINT_LIST,
    PLATFORM_ENDPOINT_INSPECT,
    PLATFORM_ENDPOINT_EXTENSION_ADD,
    PLATFORM_ENDPOINT_EXTENSION_REMOVE,
    PLATFORM_EXTENSION_LIST,
    PLATFORM_MOTD,
    PLATFORM_REGISTRY_LIST,
    PLATFORM_REGISTRY_INSPECT,
    PLATFORM_TEAM_LIST,
    PLATFORM_TEMPLATE_LIST,
    PLATFORM_TEMPLATE_INSPECT,
    PLATFORM_USER_LIST,
    PLATFORM_USER_INSPECT,
    PLATFORM_USER_MEMBERSHIPS,
];

fn authorizations(tables: &[&[&str]]) -> Authorizations {
    tables
        .iter()
        .flat_map(|table| table.iter())
        .map(|operation| (operation.to_string(), true))
        .collect()
}

/// Role-independent baseline granted to every user
pub fn default_platform_authorizations() -> Authorizations {
    authorizations(&[PLATFORM_OPERATIONS])
}

pub fn default_endpoint_authorizations_for_endpoint_administrator_role() -> Authorizations {
    authorizations(&[
        READ_OPERATIONS,
        WRITE_OPERATIONS,
        CLUSTER_OPERATIONS,
        &[ENDPOINT_RESOURCES_ACCESS],
    ])
}

pub fn default_endpoint_authorizations_for_help_desk_role() -> Authorizations {
    authorizations(&[READ_OPERATIONS, &[ENDPOINT_RESOURCES_ACCESS]])
}

pub fn default_endpoint_authorizations_for_standard_user_role() -> Authorizations {
    authorizations(&[READ_OPERATIONS, WRITE_OPERATIONS])
}

pub fn default_endpoint_authorizations_for_read_only_user_role() -> Authorizations {
    authorizations(&[READ_OPERATIONS])
}

#[cfg(test)]
mod tests {
    use super::*;

    fn is_subset(a: &Authorizations, b: &Authorizations) -> bool {
        a.keys().all(|key| b.contains_key(key))
    }

    #[test]
    fn test_role_hierarchy() {
        let admin = default_endpoint_authorizations_for_endpoint_administrator_role();
        let help_desk = default_endpoint_authorizations_for_help_desk_role();
        let standard = default_endpoint_authorizations_for_standard_user_role();
        let read_only = default_endpoint_authorizations_for_read_only_user_role();

        assert!(is_subset(&read_only, &help_desk));
        assert!(is_subset(&read_only, &standard));
        assert!(is_subset(&standard, &admin));
        assert!(is_subset(&help_desk, &admin));
    }

    #[test]
    fn test_endpoint_resources_access() {
        assert!(
            default_endpoint_authorizations_for_endpoint_administrator_role()
                .contains_key(ENDPOINT_RESOURCES_ACCESS)
        );
        assert!(
            default_endpoint_authorizations_for_help_desk_role()
                .contains_key(ENDPOINT_RESOURCES_ACCESS)
        );
        assert!(
            !default_endpoint_authorizations_for_standard_user_role()
                .contains_key(ENDPOINT_RESOURCES_ACCESS)
        );
        assert!(
            !default_endpoint_authorizations_for_read_only_user_role()
                .contains_key(ENDPOINT_RESOURCES_ACCESS)
        );
    }

    #[test]
    fn test_read_only_has_no_mutations() {
        let read_only = default_endpoint_authorizations_for_read_only_user_role();
        assert!(read_only.contains_key(DOCKER_SERVICE_LIST));
        assert!(!read_only.contains_key(DOCKER_SERVICE_CREATE));
        assert!(!read_only.contains_key(DOCKER_SWARM_INIT));
    }

    #[test]
    fn test_tables_are_stable() {
        assert_eq!(
            default_endpoint_authorizations_for_standard_user_role(),
            default_endpoint_authorizations_for_standard_user_role()
        );
        assert!(default_platform_authorizations().contains_key(PLATFORM_ENDPOINT_LIST));
    }

    #[test]
    fn test_builtin_roles_use_tables() {
        let roles = builtin_roles();
        assert_eq!(roles[0].0, ENDPOINT_ADMINISTRATOR_ROLE);
        assert_eq!(
            roles[0].3,
            default_endpoint_authorizations_for_endpoint_administrator_role()
        );
        assert_eq!(roles[1].3, default_endpoint_authorizations_for_help_desk_role());
        assert_eq!(roles[2].3, default_endpoint_authorizations_for_standard_user_role());
        assert_eq!(roles[3].0, READ_ONLY_USER_ROLE);
        assert_eq!(roles[3].3, default_endpoint_authorizations_for_read_only_user_role());
    }
}
