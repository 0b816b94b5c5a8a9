//! Repository layer - Data access abstraction
//!
//! Repositories provide an abstraction over data storage; the sign-up
//! flow only ever sees the traits.

mod role_repository;
mod user_repository;

pub use role_repository::{InMemoryRoles, RoleRepository};
pub use user_repository::{InMemoryUsers, UserRepository};

// Export mocks for tests (both unit and integration)
#[cfg(any(test, feature = "test-utils"))]
pub use role_repository::MockRoleRepository;
#[cfg(any(test, feature = "test-utils"))]
pub use user_repository::MockUserRepository;
