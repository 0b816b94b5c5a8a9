//! Application state - Dependency injection container.
//!
//! Provides the sign-up flow's collaborators to the handlers. Handlers
//! only see the traits, so tests swap in stubs or mocks.

use std::sync::Arc;

use crate::infra::{InMemoryRoles, InMemoryUsers, RoleRepository};
use crate::services::{UserManager, UserService};

/// Application state containing the controller's collaborators.
#[derive(Clone)]
pub struct AppState {
    /// User creation service
    pub user_service: Arc<dyn UserService>,
    /// Role lookup
    pub roles: Arc<dyn RoleRepository>,
}

impl AppState {
    /// Create application state with manually injected collaborators.
    pub fn new(user_service: Arc<dyn UserService>, roles: Arc<dyn RoleRepository>) -> Self {
        Self {
            user_service,
            roles,
        }
    }

    /// Create application state backed by the in-memory stores.
    ///
    /// This is what the runnable binary uses: seeded roles, an empty
    /// user store, and the real service wired on top.
    pub fn in_memory() -> Self {
        let users = Arc::new(InMemoryUsers::new());
        let roles = Arc::new(InMemoryRoles::with_defaults());
        let user_service = Arc::new(UserManager::new(users, roles.clone()));

        Self {
            user_service,
            roles,
        }
    }
}
