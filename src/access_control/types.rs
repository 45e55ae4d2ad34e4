//! Access control types
//!
//! Resource families and the static policy table that parameterises the
//! generic list/inspect pipelines.

use crate::model::ResourceControlType;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Label carried by every resource deployed as part of a swarm stack
pub const STACK_NAMESPACE_LABEL: &str = "com.docker.stack.namespace";

/// Engine resource family served by a list/inspect endpoint
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResourceFamily {
    Service,
    Task,
    Network,
    Secret,
    Config,
}

impl ResourceFamily {
    /// Get the family name as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            ResourceFamily::Service => "service",
            ResourceFamily::Task => "task",
            ResourceFamily::Network => "network",
            ResourceFamily::Secret => "secret",
            ResourceFamily::Config => "config",
        }
    }

    /// Try to parse a family from its API collection name (e.g. `services`)
    pub fn from_collection(s: &str) -> Option<Self> {
        match s {
            "services" => Some(ResourceFamily::Service),
            "tasks" => Some(ResourceFamily::Task),
            "networks" => Some(ResourceFamily::Network),
            "secrets" => Some(ResourceFamily::Secret),
            "configs" => Some(ResourceFamily::Config),
            _ => None,
        }
    }

    /// Human-readable description used in error messages
    pub fn description(&self) -> &'static str {
        match self {
            ResourceFamily::Service => "Docker service",
            ResourceFamily::Task => "Docker task service",
            ResourceFamily::Network => "Docker network",
            ResourceFamily::Secret => "Docker secret",
            ResourceFamily::Config => "Docker config",
        }
    }

    /// Get the access policy of this family
    pub fn policy(&self) -> &'static ResourcePolicy {
        match self {
            ResourceFamily::Service => &SERVICE_POLICY,
            ResourceFamily::Task => &TASK_POLICY,
            ResourceFamily::Network => &NETWORK_POLICY,
            ResourceFamily::Secret => &SECRET_POLICY,
            ResourceFamily::Config => &CONFIG_POLICY,
        }
    }

    /// Get all families
    pub fn all() -> &'static [ResourceFamily] {
        &[
            ResourceFamily::Service,
            ResourceFamily::Task,
            ResourceFamily::Network,
            ResourceFamily::Secret,
            ResourceFamily::Config,
        ]
    }
}

impl fmt::Display for ResourceFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.description())
    }
}

/// How the resources of one family are identified and attached to their owner
#[derive(Debug)]
pub struct ResourcePolicy {
    pub family: ResourceFamily,
    /// Top-level field holding the identifier matched against controls
    pub identifier_field: &'static str,
    /// Control type the identifier is looked up under
    pub control_type: ResourceControlType,
    /// Nested object path leading to the labels map
    pub label_path: &'static [&'static str],
    /// Label naming the owning composite resource
    pub label_key: &'static str,
    /// Control type the label value is looked up under
    pub label_control_type: ResourceControlType,
}

// Tasks are identified through the service they belong to.

pub static SERVICE_POLICY: ResourcePolicy = ResourcePolicy {
    family: ResourceFamily::Service,
    identifier_field: "ID",
    control_type: ResourceControlType::Service,
    label_path: &["Spec", "Labels"],
    label_key: STACK_NAMESPACE_LABEL,
    label_control_type: ResourceControlType::Stack,
};

pub static TASK_POLICY: ResourcePolicy = ResourcePolicy {
    family: ResourceFamily::Task,
    identifier_field: "ServiceID",
    control_type: ResourceControlType::Service,
    label_path: &["Spec", "ContainerSpec", "Labels"],
    label_key: STACK_NAMESPACE_LABEL,
    label_control_type: ResourceControlType::Stack,
};

pub static NETWORK_POLICY: ResourcePolicy = ResourcePolicy {
    family: ResourceFamily::Network,
    identifier_field: "Id",
    control_type: ResourceControlType::Network,
    label_path: &["Labels"],
    label_key: STACK_NAMESPACE_LABEL,
    label_control_type: ResourceControlType::Stack,
};

pub static SECRET_POLICY: ResourcePolicy = ResourcePolicy {
    family: ResourceFamily::Secret,
    identifier_field: "ID",
    control_type: ResourceControlType::Secret,
    label_path: &["Spec", "Labels"],
    label_key: STACK_NAMESPACE_LABEL,
    label_control_type: ResourceControlType::Stack,
};

pub static CONFIG_POLICY: ResourcePolicy = ResourcePolicy {
    family: ResourceFamily::Config,
    identifier_field: "ID",
    control_type: ResourceControlType::Config,
    label_path: &["Spec", "Labels"],
    label_key: STACK_NAMESPACE_LABEL,
    label_control_type: ResourceControlType::Stack,
};
