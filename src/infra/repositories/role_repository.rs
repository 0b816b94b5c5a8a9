//! Role repository - lookup of assignable roles.

use std::sync::RwLock;

use async_trait::async_trait;

use crate::config::{DEFAULT_ROLE_NAME, ROLE_ADMIN, ROLE_MANAGER};
use crate::domain::Role;
use crate::errors::{AppError, AppResult};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Role repository trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait RoleRepository: Send + Sync {
    /// List all assignable roles
    async fn find_all(&self) -> AppResult<Vec<Role>>;

    /// Find a role by its name
    async fn find_by_name(&self, name: &str) -> AppResult<Option<Role>>;
}

/// In-memory role store backing the runnable binary.
///
/// Roles are pre-existing, immutable data in this system, so the store
/// is seeded once and only read afterwards.
pub struct InMemoryRoles {
    roles: RwLock<Vec<Role>>,
}

impl InMemoryRoles {
    /// Create a role store with the given roles
    pub fn new(roles: Vec<Role>) -> Self {
        Self {
            roles: RwLock::new(roles),
        }
    }

    /// Create a role store seeded with the stock roles
    pub fn with_defaults() -> Self {
        Self::new(vec![
            Role::new(1, ROLE_ADMIN, "Administrator role"),
            Role::new(2, ROLE_MANAGER, "Manager role"),
            Role::new(3, DEFAULT_ROLE_NAME, "ROLE USER"),
        ])
    }
}

#[async_trait]
impl RoleRepository for InMemoryRoles {
    async fn find_all(&self) -> AppResult<Vec<Role>> {
        let roles = self
            .roles
            .read()
            .map_err(|_| AppError::internal("role store lock poisoned"))?;
        Ok(roles.clone())
    }

    async fn find_by_name(&self, name: &str) -> AppResult<Option<Role>> {
        let roles = self
            .roles
            .read()
            .map_err(|_| AppError::internal("role store lock poisoned"))?;
        Ok(roles.iter().find(|role| role.name == name).cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_default_store_lists_all_roles() {
        let store = InMemoryRoles::with_defaults();
        let roles = store.find_all().await.unwrap();

        assert_eq!(roles.len(), 3);
        assert!(roles.iter().any(|role| role.name == ROLE_ADMIN));
    }

    #[tokio::test]
    async fn test_default_role_has_expected_id() {
        let store = InMemoryRoles::with_defaults();
        let role = store.find_by_name(DEFAULT_ROLE_NAME).await.unwrap();

        let role = role.expect("default role should be seeded");
        assert_eq!(role.id, 3);
        assert_eq!(role.name, "USER");
    }

    #[tokio::test]
    async fn test_unknown_role_is_none() {
        let store = InMemoryRoles::with_defaults();
        let role = store.find_by_name("SUPERVISOR").await.unwrap();

        assert!(role.is_none());
    }
}
