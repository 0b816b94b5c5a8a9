//! Infrastructure layer - storage implementations behind the domain traits.

pub mod repositories;

pub use repositories::{InMemoryRoles, InMemoryUsers, RoleRepository, UserRepository};

#[cfg(any(test, feature = "test-utils"))]
pub use repositories::{MockRoleRepository, MockUserRepository};
