//! Roster operations: list, signup, unregister.
//!
//! Every mutation runs inside a single write-lock acquisition on the
//! activity store, so the membership check is atomic with the append or
//! removal that follows it.

use crate::auth::policy::can_act_on_behalf_of;
use crate::domain::activity::Activity;
use crate::domain::user::Role;
use crate::store::activities::ActivityStore;
use crate::AppError;

/// Read-only snapshot of the full catalog in seed order.
pub fn list(store: &ActivityStore) -> Vec<Activity> {
    store.snapshot()
}

/// Add `target_email` to an activity's participant list.
///
/// Check order: authorization, activity existence, duplicate membership.
/// `max_participants` is recorded on the activity but not checked here.
pub fn signup(
    store: &ActivityStore,
    caller_email: &str,
    caller_role: Role,
    activity_name: &str,
    target_email: &str,
) -> Result<String, AppError> {
    if !can_act_on_behalf_of(caller_role, caller_email, target_email) {
        return Err(AppError::forbidden(
            "Students can only sign up themselves".to_string(),
        ));
    }

    store.with_roster(|activities| {
        let activity = find_activity(activities, activity_name)?;

        if activity.is_registered(target_email) {
            return Err(AppError::bad_request(
                "ALREADY_REGISTERED",
                "Student is already signed up".to_string(),
            ));
        }

        activity.participants.push(target_email.to_string());
        Ok(format!("Signed up {target_email} for {activity_name}"))
    })
}

/// Remove `target_email` from an activity's participant list.
///
/// Same authorization and existence checks as signup.
pub fn unregister(
    store: &ActivityStore,
    caller_email: &str,
    caller_role: Role,
    activity_name: &str,
    target_email: &str,
) -> Result<String, AppError> {
    if !can_act_on_behalf_of(caller_role, caller_email, target_email) {
        return Err(AppError::forbidden(
            "Students can only unregister themselves".to_string(),
        ));
    }

    store.with_roster(|activities| {
        let activity = find_activity(activities, activity_name)?;

        let position = activity
            .participants
            .iter()
            .position(|p| p == target_email)
            .ok_or_else(|| {
                AppError::bad_request(
                    "NOT_REGISTERED",
                    "Student is not signed up for this activity".to_string(),
                )
            })?;

        activity.participants.remove(position);
        Ok(format!("Unregistered {target_email} from {activity_name}"))
    })
}

fn find_activity<'a>(
    activities: &'a mut [Activity],
    activity_name: &str,
) -> Result<&'a mut Activity, AppError> {
    activities
        .iter_mut()
        .find(|a| a.name == activity_name)
        .ok_or_else(|| AppError::not_found("ACTIVITY_NOT_FOUND", "Activity not found".to_string()))
}

#[cfg(test)]
mod tests {
    use super::{list, signup, unregister};
    use crate::domain::activity::Activity;
    use crate::domain::user::Role;
    use crate::store::activities::ActivityStore;
    use crate::AppError;

    const TEACHER: &str = "teacher@mergington.edu";
    const STUDENT1: &str = "student1@mergington.edu";
    const STUDENT2: &str = "student2@mergington.edu";

    fn store() -> ActivityStore {
        ActivityStore::from_activities(vec![Activity {
            name: "Chess Club".to_string(),
            description: "Learn strategies and compete in chess tournaments".to_string(),
            schedule: "Fridays, 3:30 PM - 5:00 PM".to_string(),
            max_participants: 12,
            participants: vec![
                "michael@mergington.edu".to_string(),
                "daniel@mergington.edu".to_string(),
            ],
        }])
    }

    fn participants(store: &ActivityStore) -> Vec<String> {
        list(store)[0].participants.clone()
    }

    #[test]
    fn test_signup_appends_in_order() {
        let store = store();

        let message = signup(&store, TEACHER, Role::Teacher, "Chess Club", STUDENT1).unwrap();
        assert_eq!(message, "Signed up student1@mergington.edu for Chess Club");
        assert_eq!(
            participants(&store),
            vec![
                "michael@mergington.edu",
                "daniel@mergington.edu",
                "student1@mergington.edu"
            ]
        );
    }

    #[test]
    fn test_signup_is_not_idempotent() {
        let store = store();

        signup(&store, STUDENT1, Role::Student, "Chess Club", STUDENT1).unwrap();
        let second = signup(&store, STUDENT1, Role::Student, "Chess Club", STUDENT1);

        assert!(matches!(
            second,
            Err(AppError::BadRequest {
                code: "ALREADY_REGISTERED",
                ..
            })
        ));
        // Participant count unchanged by the rejected duplicate
        assert_eq!(participants(&store).len(), 3);
    }

    #[test]
    fn test_signup_then_unregister_restores_prior_roster() {
        let store = store();
        let before = participants(&store);

        signup(&store, STUDENT2, Role::Student, "Chess Club", STUDENT2).unwrap();
        let message = unregister(&store, STUDENT2, Role::Student, "Chess Club", STUDENT2).unwrap();

        assert_eq!(message, "Unregistered student2@mergington.edu from Chess Club");
        assert_eq!(participants(&store), before);
    }

    #[test]
    fn test_unregister_when_absent() {
        let store = store();

        let result = unregister(&store, TEACHER, Role::Teacher, "Chess Club", STUDENT1);
        assert!(matches!(
            result,
            Err(AppError::BadRequest {
                code: "NOT_REGISTERED",
                ..
            })
        ));
    }

    #[test]
    fn test_unknown_activity() {
        let store = store();

        let result = signup(&store, TEACHER, Role::Teacher, "Knitting Circle", STUDENT1);
        assert!(matches!(
            result,
            Err(AppError::NotFound {
                code: "ACTIVITY_NOT_FOUND",
                ..
            })
        ));
    }

    #[test]
    fn test_student_cannot_sign_up_another_student() {
        let store = store();

        let result = signup(&store, STUDENT1, Role::Student, "Chess Club", STUDENT2);
        assert!(matches!(result, Err(AppError::Forbidden { .. })));
        assert_eq!(participants(&store).len(), 2);
    }

    #[test]
    fn test_student_cannot_unregister_another_student() {
        let store = store();

        let result = unregister(
            &store,
            STUDENT1,
            Role::Student,
            "Chess Club",
            "michael@mergington.edu",
        );
        assert!(matches!(result, Err(AppError::Forbidden { .. })));
    }

    #[test]
    fn test_staff_may_mutate_any_roster_entry() {
        let store = store();

        signup(&store, TEACHER, Role::Teacher, "Chess Club", STUDENT2).unwrap();
        unregister(&store, "admin@mergington.edu", Role::Admin, "Chess Club", STUDENT2).unwrap();

        assert_eq!(participants(&store).len(), 2);
    }

    #[test]
    fn test_signup_ignores_capacity() {
        // max_participants is recorded but deliberately not enforced.
        let store = ActivityStore::from_activities(vec![Activity {
            name: "Tiny Club".to_string(),
            description: "One seat".to_string(),
            schedule: "Never".to_string(),
            max_participants: 1,
            participants: vec!["full@mergington.edu".to_string()],
        }]);

        signup(&store, TEACHER, Role::Teacher, "Tiny Club", STUDENT1).unwrap();
        assert_eq!(participants(&store).len(), 2);
    }
}
