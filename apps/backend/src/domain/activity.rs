//! Extracurricular activity records.

use serde::Serialize;

/// A single extracurricular activity and its roster.
///
/// `participants` is insertion-ordered and duplicate-free; the roster
/// service enforces uniqueness on signup. `max_participants` is recorded
/// for display but not enforced during signup.
#[derive(Debug, Clone, Serialize)]
pub struct Activity {
    #[serde(skip)]
    pub name: String,
    pub description: String,
    pub schedule: String,
    pub max_participants: usize,
    pub participants: Vec<String>,
}

impl Activity {
    pub fn is_registered(&self, email: &str) -> bool {
        self.participants.iter().any(|p| p == email)
    }
}
