//! Persistence collaborators
//!
//! Access control and authorization code only sees the traits; the bundled
//! [`MemoryStore`] backs the binary and the tests.

pub mod memory;
pub mod traits;

pub use memory::{MemoryStore, Snapshot};
pub use traits::{
    EndpointGroupStore, EndpointStore, RegistryStore, ResourceControlStore, RoleStore,
    TeamMembershipStore, UserStore, VersionStore,
};
