//! Users and roles — the opaque capability consumed by the write path.
//!
//! Session management itself lives in the HTTP adapter; the domain only
//! knows the answer to "who is calling and are they an admin".

use serde::{Deserialize, Serialize};

/// Access level of an authenticated user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// May view and change the schedule.
    Admin,
    /// May only view the schedule and light state.
    User,
}

/// An authenticated user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Login name.
    pub username: String,
    /// Access level.
    pub role: Role,
}

impl User {
    /// Build a user.
    pub fn new(username: impl Into<String>, role: Role) -> Self {
        Self {
            username: username.into(),
            role,
        }
    }

    /// Whether this user may change the schedule.
    #[must_use]
    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }
}
