//! User repository - storage behind the user service.

use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::RwLock;

use async_trait::async_trait;
use chrono::Utc;

use crate::domain::{NewUser, Role, User};
use crate::errors::{AppError, AppResult};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// User repository trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find a user by username
    async fn find_by_username(&self, username: &str) -> AppResult<Option<User>>;

    /// Find a user by email address
    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>>;

    /// Persist a new user with an already-hashed password and its role
    async fn insert(&self, new_user: NewUser, password_hash: String, role: Role)
        -> AppResult<User>;
}

/// In-memory user store backing the runnable binary.
pub struct InMemoryUsers {
    users: RwLock<Vec<User>>,
    next_id: AtomicI64,
}

impl InMemoryUsers {
    pub fn new() -> Self {
        Self {
            users: RwLock::new(Vec::new()),
            next_id: AtomicI64::new(1),
        }
    }
}

impl Default for InMemoryUsers {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl UserRepository for InMemoryUsers {
    async fn find_by_username(&self, username: &str) -> AppResult<Option<User>> {
        let users = self
            .users
            .read()
            .map_err(|_| AppError::internal("user store lock poisoned"))?;
        Ok(users.iter().find(|user| user.username == username).cloned())
    }

    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>> {
        let users = self
            .users
            .read()
            .map_err(|_| AppError::internal("user store lock poisoned"))?;
        Ok(users.iter().find(|user| user.email == email).cloned())
    }

    async fn insert(
        &self,
        new_user: NewUser,
        password_hash: String,
        role: Role,
    ) -> AppResult<User> {
        let user = User {
            id: self.next_id.fetch_add(1, Ordering::SeqCst),
            first_name: new_user.first_name,
            last_name: new_user.last_name,
            email: new_user.email,
            username: new_user.username,
            password_hash,
            role,
            created_at: Utc::now(),
        };

        let mut users = self
            .users
            .write()
            .map_err(|_| AppError::internal("user store lock poisoned"))?;
        users.push(user.clone());

        Ok(user)
    }
}
