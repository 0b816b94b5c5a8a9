//! User service - sign-up business logic.

use std::sync::Arc;

use async_trait::async_trait;

use crate::config::DEFAULT_ROLE_NAME;
use crate::domain::{NewUser, Password, User};
use crate::errors::{AppError, AppResult};
use crate::infra::{RoleRepository, UserRepository};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// User service trait for dependency injection.
///
/// Create fails with [`AppError::FieldValidation`] when a uniqueness
/// rule is violated; the error names the offending form field.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait UserService: Send + Sync {
    /// Create a new user from validated sign-up data
    async fn create_user(&self, new_user: NewUser) -> AppResult<User>;
}

/// Concrete implementation of UserService.
pub struct UserManager {
    users: Arc<dyn UserRepository>,
    roles: Arc<dyn RoleRepository>,
}

impl UserManager {
    /// Create new user service instance with its repositories
    pub fn new(users: Arc<dyn UserRepository>, roles: Arc<dyn RoleRepository>) -> Self {
        Self { users, roles }
    }
}

#[async_trait]
impl UserService for UserManager {
    async fn create_user(&self, new_user: NewUser) -> AppResult<User> {
        // Field format is validated by the controller; uniqueness is enforced here
        if self.users.find_by_username(&new_user.username).await?.is_some() {
            return Err(AppError::field_validation(
                "username",
                "Username not available",
            ));
        }

        if self.users.find_by_email(&new_user.email).await?.is_some() {
            return Err(AppError::field_validation(
                "email",
                "Email already registered",
            ));
        }

        let role = self
            .roles
            .find_by_name(DEFAULT_ROLE_NAME)
            .await?
            .ok_or(AppError::NotFound)?;

        let password_hash = Password::new(&new_user.password)?.into_string();
        let user = self.users.insert(new_user, password_hash, role).await?;

        tracing::info!(username = %user.username, id = user.id, "user created");
        Ok(user)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    use crate::domain::Role;
    use crate::infra::{MockRoleRepository, MockUserRepository};

    fn sample_new_user() -> NewUser {
        NewUser {
            first_name: "John".to_string(),
            last_name: "Doe".to_string(),
            email: "john.doe@example.com".to_string(),
            username: "johndoe".to_string(),
            password: "password".to_string(),
        }
    }

    fn default_role() -> Role {
        Role::new(3, "USER", "ROLE USER")
    }

    fn stored_user(new_user: NewUser, password_hash: String, role: Role) -> User {
        User {
            id: 1,
            first_name: new_user.first_name,
            last_name: new_user.last_name,
            email: new_user.email,
            username: new_user.username,
            password_hash,
            role,
            created_at: Utc::now(),
        }
    }

    #[tokio::test]
    async fn test_create_user_hashes_password_and_attaches_default_role() {
        let mut users = MockUserRepository::new();
        users
            .expect_find_by_username()
            .withf(|username| username == "johndoe")
            .times(1)
            .returning(|_| Ok(None));
        users
            .expect_find_by_email()
            .times(1)
            .returning(|_| Ok(None));
        users
            .expect_insert()
            .withf(|new_user, password_hash, role| {
                new_user.username == "johndoe"
                    && password_hash.as_str() != "password"
                    && role.name == "USER"
            })
            .times(1)
            .returning(|new_user, password_hash, role| {
                Ok(stored_user(new_user, password_hash, role))
            });

        let mut roles = MockRoleRepository::new();
        roles
            .expect_find_by_name()
            .withf(|name| name == "USER")
            .times(1)
            .returning(|_| Ok(Some(default_role())));

        let service = UserManager::new(Arc::new(users), Arc::new(roles));
        let user = service.create_user(sample_new_user()).await.unwrap();

        assert_eq!(user.id, 1);
        assert_eq!(user.role.id, 3);
        assert!(Password::from_hash(user.password_hash.clone()).verify("password"));
    }

    #[tokio::test]
    async fn test_create_user_rejects_taken_username() {
        let mut users = MockUserRepository::new();
        users.expect_find_by_username().times(1).returning(|_| {
            Ok(Some(stored_user(
                sample_new_user(),
                "hash".to_string(),
                default_role(),
            )))
        });

        let roles = MockRoleRepository::new();
        let service = UserManager::new(Arc::new(users), Arc::new(roles));
        let err = service.create_user(sample_new_user()).await.unwrap_err();

        match err {
            AppError::FieldValidation { field, message } => {
                assert_eq!(field, "username");
                assert_eq!(message, "Username not available");
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_create_user_rejects_taken_email() {
        let mut users = MockUserRepository::new();
        users
            .expect_find_by_username()
            .times(1)
            .returning(|_| Ok(None));
        users.expect_find_by_email().times(1).returning(|_| {
            Ok(Some(stored_user(
                sample_new_user(),
                "hash".to_string(),
                default_role(),
            )))
        });

        let roles = MockRoleRepository::new();
        let service = UserManager::new(Arc::new(users), Arc::new(roles));
        let err = service.create_user(sample_new_user()).await.unwrap_err();

        match err {
            AppError::FieldValidation { field, .. } => assert_eq!(field, "email"),
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_create_user_fails_when_default_role_missing() {
        let mut users = MockUserRepository::new();
        users
            .expect_find_by_username()
            .times(1)
            .returning(|_| Ok(None));
        users
            .expect_find_by_email()
            .times(1)
            .returning(|_| Ok(None));

        let mut roles = MockRoleRepository::new();
        roles
            .expect_find_by_name()
            .times(1)
            .returning(|_| Ok(None));

        let service = UserManager::new(Arc::new(users), Arc::new(roles));
        let err = service.create_user(sample_new_user()).await.unwrap_err();

        assert!(matches!(err, AppError::NotFound));
    }
}
