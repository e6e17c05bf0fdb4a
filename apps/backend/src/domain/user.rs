//! User records and roles.

use serde::{Deserialize, Serialize};

/// Role assigned to a user account.
///
/// Serialized lowercase both in API responses and inside JWT claims.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Student,
    Teacher,
    Admin,
}

impl Role {
    /// Staff roles may act on behalf of any student.
    pub fn is_staff(self) -> bool {
        matches!(self, Role::Teacher | Role::Admin)
    }
}

/// A user account as held by the credential store.
///
/// Accounts are seeded at process start and immutable for the process
/// lifetime; there is no registration or password-change flow.
#[derive(Debug, Clone)]
pub struct User {
    pub email: String,
    pub password_hash: String,
    pub role: Role,
}
