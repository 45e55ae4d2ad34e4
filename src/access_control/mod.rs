//! Access control module
//!
//! Decides, per requesting principal, which engine resources are visible and
//! decorates visible resources with their ownership metadata.
//!
//! ## Access Control Model
//!
//! A resource is matched against the resource control registered for its
//! identifier (type-scoped). When that check denies, the control of the
//! composite owning the resource (its stack, named by a label) is tried.
//!
//! ```text
//! own control → stack control (label) → denied
//! ```
//!
//! - No control at all: the resource is public
//! - Administrators and principals with blanket endpoint access see everything,
//!   decorated with every control that applies
//! - Otherwise a control grants access when it is public or the principal
//!   (directly or through a team) is one of its owners
//!
//! List responses are filtered (denied resources are dropped, order is kept);
//! inspect responses are replaced by an access denied payload.

pub mod context;
pub mod labels;
pub mod pipeline;
pub mod registry;
pub mod resolver;
pub mod types;

pub use context::OperationContext;
pub use pipeline::{InspectOutcome, inspect_operation, list_operation};
pub use registry::{ResourceControlRegistry, find_resource_control};
pub use resolver::{
    ResourceAccess, apply_resource_access_control, apply_resource_access_control_from_label,
    decide, decorate,
};
pub use types::{ResourceFamily, ResourcePolicy, STACK_NAMESPACE_LABEL};
