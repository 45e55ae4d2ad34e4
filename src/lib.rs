//! Harbormaster
//!
//! Resource ownership and role-based access control in front of a container
//! orchestration engine API.
//!
//! ## Features
//!
//! - **Response filtering** of services, tasks, networks, secrets and configs
//!   according to resource controls owned by users and teams
//! - **Stack inheritance**: a resource deployed by a stack is visible to the
//!   owners of the stack
//! - **Role-based authorizations** materialized per user and endpoint
//! - **Schema migration** of stored controls, users and roles
//!
//! ## Access Control Model
//!
//! ```text
//! administrator / endpoint access → everything, decorated
//! own control → stack control (label) → denied
//! ```
//!
//! ## Example Configuration
//!
//! ```toml
//! [server]
//! host = "0.0.0.0"
//! port = 9000
//!
//! [store]
//! path = "/var/lib/harbormaster/store.json"
//! ```

pub mod access_control;
pub mod authorization;
pub mod config;
pub mod document;
pub mod error;
pub mod migrator;
pub mod model;
pub mod proxy;
pub mod store;

// Re-export main types
pub use config::{AppConfig, load_config};
pub use proxy::{ProxyState, build_router, run_server};
pub use store::MemoryStore;
