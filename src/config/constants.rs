//! Application-wide constants
//!
//! Centralized location for magic values to improve maintainability.

// =============================================================================
// User Roles
// =============================================================================

/// Administrator role with elevated privileges
pub const ROLE_ADMIN: &str = "ADMIN";

/// Manager role for delegated administration
pub const ROLE_MANAGER: &str = "MANAGER";

/// Standard user role
pub const ROLE_USER: &str = "USER";

/// Role assigned to new sign-ups
pub const DEFAULT_ROLE_NAME: &str = ROLE_USER;

// =============================================================================
// Server Configuration
// =============================================================================

/// Default server host address
pub const DEFAULT_SERVER_HOST: &str = "0.0.0.0";

/// Default server port
pub const DEFAULT_SERVER_PORT: u16 = 3000;
