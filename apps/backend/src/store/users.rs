//! In-memory credential store.

use std::collections::HashMap;
use std::sync::Arc;

use crate::domain::user::User;

/// Shared, read-only map of email → user record.
///
/// Built once at process start; there is no mutation path, so no lock is
/// needed. Cloning shares the underlying map.
#[derive(Debug, Clone)]
pub struct UserStore {
    inner: Arc<HashMap<String, User>>,
}

impl UserStore {
    pub fn from_users(users: Vec<User>) -> Self {
        let inner = users
            .into_iter()
            .map(|user| (user.email.clone(), user))
            .collect();
        Self {
            inner: Arc::new(inner),
        }
    }

    pub fn find_by_email(&self, email: &str) -> Option<User> {
        self.inner.get(email).cloned()
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }
}
