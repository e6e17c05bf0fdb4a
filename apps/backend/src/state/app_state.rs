use crate::state::security_config::SecurityConfig;
use crate::store::activities::ActivityStore;
use crate::store::users::UserStore;

/// Application state containing shared resources.
///
/// Cloning is cheap: both stores are `Arc`-backed, so every worker sees
/// the same underlying data.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Seeded user accounts, immutable for the process lifetime
    pub users: UserStore,
    /// Activity catalog and rosters, mutated by signup/unregister
    pub activities: ActivityStore,
    /// Security configuration including JWT settings
    pub security: SecurityConfig,
}

impl AppState {
    pub fn new(users: UserStore, activities: ActivityStore, security: SecurityConfig) -> Self {
        Self {
            users,
            activities,
            security,
        }
    }
}
