//! User domain entity and the sign-up form bound to it.

use chrono::{DateTime, Utc};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use validator::Validate;

use super::Role;

/// Usernames are 4 to 20 word characters
static USERNAME_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\w{4,20}$").unwrap());

/// User domain entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub username: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub role: Role,
    pub created_at: DateTime<Utc>,
}

/// User creation data, produced from a validated sign-up form
#[derive(Debug, Clone)]
pub struct NewUser {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub username: String,
    pub password: String,
}

/// Sign-up form object with declarative field constraints.
///
/// Bound from the submitted form body; the confirm-password field exists
/// only to cross-check the password and is dropped on conversion to
/// [`NewUser`]. There is deliberately no minimum password length here.
#[derive(Clone, Default, Deserialize, Validate)]
pub struct SignupForm {
    #[validate(length(min = 2, max = 15, message = "First name must be 2 to 15 characters"))]
    pub first_name: String,

    #[validate(length(min = 2, max = 15, message = "Last name must be 2 to 15 characters"))]
    pub last_name: String,

    #[validate(email(message = "Invalid email format"))]
    pub email: String,

    #[validate(regex(path = *USERNAME_PATTERN, message = "Username must be 4 to 20 letters, digits, or underscores"))]
    pub username: String,

    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,

    #[validate(must_match(other = "password", message = "Passwords do not match"))]
    pub confirm_password: String,
}

// Don't expose submitted passwords in debug output
impl std::fmt::Debug for SignupForm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SignupForm")
            .field("first_name", &self.first_name)
            .field("last_name", &self.last_name)
            .field("email", &self.email)
            .field("username", &self.username)
            .field("password", &"[REDACTED]")
            .field("confirm_password", &"[REDACTED]")
            .finish()
    }
}

impl From<SignupForm> for NewUser {
    fn from(form: SignupForm) -> Self {
        Self {
            first_name: form.first_name,
            last_name: form.last_name,
            email: form.email,
            username: form.username,
            password: form.password,
        }
    }
}
