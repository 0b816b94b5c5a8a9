//! Role domain entity.

use serde::{Deserialize, Serialize};

/// An authorization grouping assigned to a user at creation.
///
/// Roles are pre-existing and immutable from the sign-up flow's
/// perspective; they are fetched through the role repository.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Role {
    pub id: i64,
    pub name: String,
    pub description: String,
}

impl Role {
    pub fn new(id: i64, name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            description: description.into(),
        }
    }
}
