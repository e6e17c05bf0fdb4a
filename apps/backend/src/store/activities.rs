//! In-memory activity roster store.

use std::sync::Arc;

use parking_lot::RwLock;

use crate::domain::activity::Activity;

/// Shared activity catalog.
///
/// A single lock covers the whole catalog: the roster is tiny and a global
/// write lock keeps the membership check atomic with the mutation that
/// follows it. Callers mutate through [`ActivityStore::with_roster`] so the
/// lock is never released mid-sequence.
#[derive(Debug, Clone)]
pub struct ActivityStore {
    inner: Arc<RwLock<Vec<Activity>>>,
}

impl ActivityStore {
    pub fn from_activities(activities: Vec<Activity>) -> Self {
        Self {
            inner: Arc::new(RwLock::new(activities)),
        }
    }

    /// Clone of the full catalog in seed order.
    pub fn snapshot(&self) -> Vec<Activity> {
        self.inner.read().clone()
    }

    /// Run `f` with exclusive access to the catalog.
    pub fn with_roster<R>(&self, f: impl FnOnce(&mut Vec<Activity>) -> R) -> R {
        let mut guard = self.inner.write();
        f(&mut guard)
    }
}
