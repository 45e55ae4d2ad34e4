//! Schema migrations
//!
//! Each step rewrites stored records to the shape expected by a newer schema
//! version. A step aborts on the first persistence failure.

use crate::authorization::AuthorizationService;
use crate::authorization::defaults::{
    AUTHORIZATIONS_VERSION, builtin_roles, default_platform_authorizations,
};
use crate::error::MigrationError;
use crate::store::{ResourceControlStore, RoleStore, UserStore, VersionStore};
use std::sync::Arc;
use tracing::{debug, info};

const STEP_RESOURCE_CONTROLS: &str = "resource controls";
const STEP_USERS: &str = "users";
const STEP_ROLES: &str = "roles";
const STEP_AUTHORIZATIONS: &str = "user authorizations";
const STEP_VERSION: &str = "version";

/// Store collaborators of the [`Migrator`]
#[derive(Clone)]
pub struct MigratorParameters {
    pub resource_controls: Arc<dyn ResourceControlStore>,
    pub users: Arc<dyn UserStore>,
    pub roles: Arc<dyn RoleStore>,
    pub versions: Arc<dyn VersionStore>,
    pub authorization_service: AuthorizationService,
}

/// Brings a store up to the current schema version
pub struct Migrator {
    resource_controls: Arc<dyn ResourceControlStore>,
    users: Arc<dyn UserStore>,
    roles: Arc<dyn RoleStore>,
    versions: Arc<dyn VersionStore>,
    authorization_service: AuthorizationService,
}

impl Migrator {
    pub fn new(parameters: MigratorParameters) -> Self {
        Self {
            resource_controls: parameters.resource_controls,
            users: parameters.users,
            roles: parameters.roles,
            versions: parameters.versions,
            authorization_service: parameters.authorization_service,
        }
    }

    /// Run every pending step, then record the new version
    ///
    /// Returns the version the store ends at.
    pub async fn migrate(&self) -> Result<u32, MigrationError> {
        let current = self
            .versions
            .version()
            .await
            .map_err(|e| MigrationError::new(STEP_VERSION, e))?
            .unwrap_or(0);

        if current >= AUTHORIZATIONS_VERSION {
            debug!(version = current, "Store is up to date");
            return Ok(current);
        }

        info!(from = current, to = AUTHORIZATIONS_VERSION, "Migrating store");

        self.update_resource_controls_to_db_version_22().await?;
        self.update_users_and_roles_to_db_version_22().await?;

        self.versions
            .store_version(AUTHORIZATIONS_VERSION)
            .await
            .map_err(|e| MigrationError::new(STEP_VERSION, e))?;

        info!(version = AUTHORIZATIONS_VERSION, "Store migrated");
        Ok(AUTHORIZATIONS_VERSION)
    }

    /// Clear the legacy administrators-only flag on every resource control
    pub async fn update_resource_controls_to_db_version_22(&self) -> Result<(), MigrationError> {
        let controls = self
            .resource_controls
            .resource_controls()
            .await
            .map_err(|e| MigrationError::new(STEP_RESOURCE_CONTROLS, e))?;

        for mut control in controls {
            control.administrators_only = false;
            self.resource_controls
                .update_resource_control(&control)
                .await
                .map_err(|e| MigrationError::new(STEP_RESOURCE_CONTROLS, e))?;
        }

        Ok(())
    }

    /// Reset platform authorizations and built-in roles to their defaults,
    /// then recompute every user's endpoint authorizations
    pub async fn update_users_and_roles_to_db_version_22(&self) -> Result<(), MigrationError> {
        let users = self
            .users
            .users()
            .await
            .map_err(|e| MigrationError::new(STEP_USERS, e))?;

        for mut user in users {
            user.platform_authorizations = default_platform_authorizations();
            self.users
                .update_user(&user)
                .await
                .map_err(|e| MigrationError::new(STEP_USERS, e))?;
        }

        for (role_id, _, _, authorizations) in builtin_roles() {
            let mut role = self
                .roles
                .role(role_id)
                .await
                .map_err(|e| MigrationError::new(STEP_ROLES, e))?;
            role.authorizations = authorizations;
            self.roles
                .update_role(&role)
                .await
                .map_err(|e| MigrationError::new(STEP_ROLES, e))?;
            debug!(role = %role_id, name = %role.name, "Role defaults restored");
        }

        self.authorization_service
            .update_users_authorizations()
            .await
            .map_err(|e| MigrationError::new(STEP_AUTHORIZATIONS, e))
    }
}
