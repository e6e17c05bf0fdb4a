//! Seed data loaded at process start.
//!
//! The seeded accounts all share the demo password "password"; the Argon2
//! hash is computed once and reused since hashing is deliberately slow.

use crate::auth::password::hash_password;
use crate::domain::activity::Activity;
use crate::domain::user::{Role, User};
use crate::store::activities::ActivityStore;
use crate::store::users::UserStore;
use crate::AppError;

pub const DEMO_PASSWORD: &str = "password";

const SEED_USERS: &[(&str, Role)] = &[
    ("teacher@mergington.edu", Role::Teacher),
    ("admin@mergington.edu", Role::Admin),
    ("student1@mergington.edu", Role::Student),
    ("student2@mergington.edu", Role::Student),
];

pub fn seed_users() -> Result<UserStore, AppError> {
    let password_hash = hash_password(DEMO_PASSWORD)?;

    let users = SEED_USERS
        .iter()
        .map(|(email, role)| User {
            email: (*email).to_string(),
            password_hash: password_hash.clone(),
            role: *role,
        })
        .collect();

    Ok(UserStore::from_users(users))
}

fn activity(
    name: &str,
    description: &str,
    schedule: &str,
    max_participants: usize,
    participants: &[&str],
) -> Activity {
    Activity {
        name: name.to_string(),
        description: description.to_string(),
        schedule: schedule.to_string(),
        max_participants,
        participants: participants.iter().map(|p| (*p).to_string()).collect(),
    }
}

pub fn seed_activities() -> ActivityStore {
    ActivityStore::from_activities(vec![
        activity(
            "Chess Club",
            "Learn strategies and compete in chess tournaments",
            "Fridays, 3:30 PM - 5:00 PM",
            12,
            &["michael@mergington.edu", "daniel@mergington.edu"],
        ),
        activity(
            "Programming Class",
            "Learn programming fundamentals and build software projects",
            "Tuesdays and Thursdays, 3:30 PM - 4:30 PM",
            20,
            &["emma@mergington.edu", "sophia@mergington.edu"],
        ),
        activity(
            "Gym Class",
            "Physical education and sports activities",
            "Mondays, Wednesdays, Fridays, 2:00 PM - 3:00 PM",
            30,
            &["john@mergington.edu", "olivia@mergington.edu"],
        ),
        activity(
            "Soccer Team",
            "Join the school soccer team and compete in matches",
            "Tuesdays and Thursdays, 4:00 PM - 5:30 PM",
            22,
            &["liam@mergington.edu", "noah@mergington.edu"],
        ),
        activity(
            "Basketball Team",
            "Practice and play basketball with the school team",
            "Wednesdays and Fridays, 3:30 PM - 5:00 PM",
            15,
            &["ava@mergington.edu", "mia@mergington.edu"],
        ),
        activity(
            "Art Club",
            "Explore your creativity through painting and drawing",
            "Thursdays, 3:30 PM - 5:00 PM",
            15,
            &["amelia@mergington.edu", "harper@mergington.edu"],
        ),
        activity(
            "Drama Club",
            "Act, direct, and produce plays and performances",
            "Mondays and Wednesdays, 4:00 PM - 5:30 PM",
            20,
            &["ella@mergington.edu", "scarlett@mergington.edu"],
        ),
        activity(
            "GitHub Skills",
            "Learn and practice GitHub workflows, version control, and collaboration skills.",
            "Thursdays, 3:00 PM - 4:00 PM",
            15,
            &[],
        ),
        activity(
            "Math Club",
            "Solve challenging problems and participate in math competitions",
            "Tuesdays, 3:30 PM - 4:30 PM",
            10,
            &["james@mergington.edu", "benjamin@mergington.edu"],
        ),
        activity(
            "Debate Team",
            "Develop public speaking and argumentation skills",
            "Fridays, 4:00 PM - 5:30 PM",
            12,
            &["charlotte@mergington.edu", "henry@mergington.edu"],
        ),
    ])
}
