//! Authorization policy for roster mutations.

use crate::domain::user::Role;

/// May `caller` sign up or unregister `target_email`?
///
/// Students act only on themselves; teachers and admins may act on any
/// email. The rule is evaluated identically for signup and unregister.
pub fn can_act_on_behalf_of(caller_role: Role, caller_email: &str, target_email: &str) -> bool {
    caller_role.is_staff() || caller_email == target_email
}
