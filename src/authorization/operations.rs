//! Authorization tokens
//!
//! Fine-grained permission tokens granted by roles. Token strings are
//! persisted, so renaming one is a schema change.

/// Blanket access to every resource of an endpoint, bypassing resource controls
pub const ENDPOINT_RESOURCES_ACCESS: &str = "EndpointResourcesAccess";

// Agent
pub const DOCKER_AGENT_HOST_INFO: &str = "DockerAgentHostInfo";
pub const DOCKER_AGENT_LIST: &str = "DockerAgentList";
pub const DOCKER_AGENT_PING: &str = "DockerAgentPing";
pub const DOCKER_AGENT_BROWSE_GET: &str = "DockerAgentBrowseGet";
pub const DOCKER_AGENT_BROWSE_LIST: &str = "DockerAgentBrowseList";
pub const DOCKER_AGENT_BROWSE_PUT: &str = "DockerAgentBrowsePut";
pub const DOCKER_AGENT_BROWSE_RENAME: &str = "DockerAgentBrowseRename";
pub const DOCKER_AGENT_BROWSE_DELETE: &str = "DockerAgentBrowseDelete";

// Configs
pub const DOCKER_CONFIG_LIST: &str = "DockerConfigList";
pub const DOCKER_CONFIG_INSPECT: &str = "DockerConfigInspect";
pub const DOCKER_CONFIG_CREATE: &str = "DockerConfigCreate";
pub const DOCKER_CONFIG_UPDATE: &str = "DockerConfigUpdate";
pub const DOCKER_CONFIG_DELETE: &str = "DockerConfigDelete";

// Containers
pub const DOCKER_CONTAINER_LIST: &str = "DockerContainerList";
pub const DOCKER_CONTAINER_INSPECT: &str = "DockerContainerInspect";
pub const DOCKER_CONTAINER_CHANGES: &str = "DockerContainerChanges";
pub const DOCKER_CONTAINER_TOP: &str = "DockerContainerTop";
pub const DOCKER_CONTAINER_LOGS: &str = "DockerContainerLogs";
pub const DOCKER_CONTAINER_STATS: &str = "DockerContainerStats";
pub const DOCKER_CONTAINER_ARCHIVE_INFO: &str = "DockerContainerArchiveInfo";
pub const DOCKER_CONTAINER_EXPORT: &str = "DockerContainerExport";
pub const DOCKER_CONTAINER_CREATE: &str = "DockerContainerCreate";
pub const DOCKER_CONTAINER_PRUNE: &str = "DockerContainerPrune";
pub const DOCKER_CONTAINER_KILL: &str = "DockerContainerKill";
pub const DOCKER_CONTAINER_PAUSE: &str = "DockerContainerPause";
pub const DOCKER_CONTAINER_UNPAUSE: &str = "DockerContainerUnpause";
pub const DOCKER_CONTAINER_RESTART: &str = "DockerContainerRestart";
pub const DOCKER_CONTAINER_START: &str = "DockerContainerStart";
pub const DOCKER_CONTAINER_STOP: &str = "DockerContainerStop";
pub const DOCKER_CONTAINER_WAIT: &str = "DockerContainerWait";
pub const DOCKER_CONTAINER_RESIZE: &str = "DockerContainerResize";
pub const DOCKER_CONTAINER_ATTACH: &str = "DockerContainerAttach";
pub const DOCKER_CONTAINER_ATTACH_WEBSOCKET: &str = "DockerContainerAttachWebsocket";
pub const DOCKER_CONTAINER_EXEC: &str = "DockerContainerExec";
pub const DOCKER_CONTAINER_RENAME: &str = "DockerContainerRename";
pub const DOCKER_CONTAINER_UPDATE: &str = "DockerContainerUpdate";
pub const DOCKER_CONTAINER_PUT_CONTAINER_ARCHIVE: &str = "DockerContainerPutContainerArchive";
pub const DOCKER_CONTAINER_DELETE: &str = "DockerContainerDelete";

// Exec
pub const DOCKER_EXEC_INSPECT: &str = "DockerExecInspect";
pub const DOCKER_EXEC_START: &str = "DockerExecStart";
pub const DOCKER_EXEC_RESIZE: &str = "DockerExecResize";

// Images
pub const DOCKER_IMAGE_LIST: &str = "DockerImageList";
pub const DOCKER_IMAGE_SEARCH: &str = "DockerImageSearch";
pub const DOCKER_IMAGE_GET_ALL: &str = "DockerImageGetAll";
pub const DOCKER_IMAGE_GET: &str = "DockerImageGet";
pub const DOCKER_IMAGE_HISTORY: &str = "DockerImageHistory";
pub const DOCKER_IMAGE_INSPECT: &str = "DockerImageInspect";
pub const DOCKER_IMAGE_LOAD: &str = "DockerImageLoad";
pub const DOCKER_IMAGE_CREATE: &str = "DockerImageCreate";
pub const DOCKER_IMAGE_PRUNE: &str = "DockerImagePrune";
pub const DOCKER_IMAGE_PUSH: &str = "DockerImagePush";
pub const DOCKER_IMAGE_TAG: &str = "DockerImageTag";
pub const DOCKER_IMAGE_DELETE: &str = "DockerImageDelete";
pub const DOCKER_IMAGE_COMMIT: &str = "DockerImageCommit";
pub const DOCKER_IMAGE_BUILD: &str = "DockerImageBuild";

// Networks
pub const DOCKER_NETWORK_LIST: &str = "DockerNetworkList";
pub const DOCKER_NETWORK_INSPECT: &str = "DockerNetworkInspect";
pub const DOCKER_NETWORK_CREATE: &str = "DockerNetworkCreate";
pub const DOCKER_NETWORK_CONNECT: &str = "DockerNetworkConnect";
pub const DOCKER_NETWORK_DISCONNECT: &str = "DockerNetworkDisconnect";
pub const DOCKER_NETWORK_PRUNE: &str = "DockerNetworkPrune";
pub const DOCKER_NETWORK_DELETE: &str = "DockerNetworkDelete";

// Nodes
pub const DOCKER_NODE_LIST: &str = "DockerNodeList";
pub const DOCKER_NODE_INSPECT: &str = "DockerNodeInspect";
pub const DOCKER_NODE_UPDATE: &str = "DockerNodeUpdate";
pub const DOCKER_NODE_DELETE: &str = "DockerNodeDelete";

// Secrets
pub const DOCKER_SECRET_LIST: &str = "DockerSecretList";
pub const DOCKER_SECRET_INSPECT: &str = "DockerSecretInspect";
pub const DOCKER_SECRET_CREATE: &str = "DockerSecretCreate";
pub const DOCKER_SECRET_UPDATE: &str = "DockerSecretUpdate";
pub const DOCKER_SECRET_DELETE: &str = "DockerSecretDelete";

// Services
pub const DOCKER_SERVICE_LIST: &str = "DockerServiceList";
pub const DOCKER_SERVICE_INSPECT: &str = "DockerServiceInspect";
pub const DOCKER_SERVICE_LOGS: &str = "DockerServiceLogs";
pub const DOCKER_SERVICE_CREATE: &str = "DockerServiceCreate";
pub const DOCKER_SERVICE_UPDATE: &str = "DockerServiceUpdate";
pub const DOCKER_SERVICE_DELETE: &str = "DockerServiceDelete";

// Swarm
pub const DOCKER_SWARM_INSPECT: &str = "DockerSwarmInspect";
pub const DOCKER_SWARM_UNLOCK_KEY: &str = "DockerSwarmUnlockKey";
pub const DOCKER_SWARM_INIT: &str = "DockerSwarmInit";
pub const DOCKER_SWARM_JOIN: &str = "DockerSwarmJoin";
pub const DOCKER_SWARM_LEAVE: &str = "DockerSwarmLeave";
pub const DOCKER_SWARM_UNLOCK: &str = "DockerSwarmUnlock";
pub const DOCKER_SWARM_UPDATE: &str = "DockerSwarmUpdate";

// System
pub const DOCKER_SYSTEM_INFO: &str = "DockerSystemInfo";
pub const DOCKER_SYSTEM_VERSION: &str = "DockerSystemVersion";
pub const DOCKER_SYSTEM_PING: &str = "DockerSystemPing";
pub const DOCKER_SYSTEM_EVENTS: &str = "DockerSystemEvents";
pub const DOCKER_SYSTEM_DATA_USAGE: &str = "DockerSystemDataUsage";
pub const DOCKER_SYSTEM_AUTH: &str = "DockerSystemAuth";

// Tasks
pub const DOCKER_TASK_LIST: &str = "DockerTaskList";
pub const DOCKER_TASK_INSPECT: &str = "DockerTaskInspect";
pub const DOCKER_TASK_LOGS: &str = "DockerTaskLogs";

// Volumes
pub const DOCKER_VOLUME_LIST: &str = "DockerVolumeList";
pub const DOCKER_VOLUME_INSPECT: &str = "DockerVolumeInspect";
pub const DOCKER_VOLUME_CREATE: &str = "DockerVolumeCreate";
pub const DOCKER_VOLUME_PRUNE: &str = "DockerVolumePrune";
pub const DOCKER_VOLUME_DELETE: &str = "DockerVolumeDelete";

// Platform: resource controls, stacks and webhooks
pub const PLATFORM_RESOURCE_CONTROL_CREATE: &str = "PlatformResourceControlCreate";
pub const PLATFORM_RESOURCE_CONTROL_UPDATE: &str = "PlatformResourceControlUpdate";
pub const PLATFORM_STACK_LIST: &str = "PlatformStackList";
pub const PLATFORM_STACK_INSPECT: &str = "PlatformStackInspect";
pub const PLATFORM_STACK_FILE: &str = "PlatformStackFile";
pub const PLATFORM_STACK_CREATE: &str = "PlatformStackCreate";
pub const PLATFORM_STACK_MIGRATE: &str = "PlatformStackMigrate";
pub const PLATFORM_STACK_UPDATE: &str = "PlatformStackUpdate";
pub const PLATFORM_STACK_DELETE: &str = "PlatformStackDelete";
pub const PLATFORM_WEBSOCKET_EXEC: &str = "PlatformWebsocketExec";
pub const PLATFORM_WEBHOOK_LIST: &str = "PlatformWebhookList";
pub const PLATFORM_WEBHOOK_CREATE: &str = "PlatformWebhookCreate";
pub const PLATFORM_WEBHOOK_DELETE: &str = "PlatformWebhookDelete";

// Platform: role-independent
pub const PLATFORM_DOCKER_HUB_INSPECT: &str = "PlatformDockerHubInspect";
pub const PLATFORM_ENDPOINT_GROUP_LIST: &str = "PlatformEndpointGroupList";
pub const PLATFORM_ENDPOINT_LIST: &str = "PlatformEndpointList";
pub const PLATFORM_ENDPOINT_INSPECT: &str = "PlatformEndpointInspect";
pub const PLATFORM_ENDPOINT_EXTENSION_ADD: &str = "PlatformEndpointExtensionAdd";
pub const PLATFORM_ENDPOINT_EXTENSION_REMOVE: &str = "PlatformEndpointExtensionRemove";
pub const PLATFORM_EXTENSION_LIST: &str = "PlatformExtensionList";
pub const PLATFORM_MOTD: &str = "PlatformMOTD";
pub const PLATFORM_REGISTRY_LIST: &str = "PlatformRegistryList";
pub const PLATFORM_REGISTRY_INSPECT: &str = "PlatformRegistryInspect";
pub const PLATFORM_TEAM_LIST: &str = "PlatformTeamList";
pub const PLATFORM_TEMPLATE_LIST: &str = "PlatformTemplateList";
pub const PLATFORM_TEMPLATE_INSPECT: &str = "PlatformTemplateInspect";
pub const PLATFORM_USER_LIST: &str = "PlatformUserList";
pub const PLATFORM_USER_INSPECT: &str = "PlatformUserInspect";
pub const PLATFORM_USER_MEMBERSHIPS: &str = "PlatformUserMemberships";
