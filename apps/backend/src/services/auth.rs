//! Login: credential check and token issuance.

use std::time::SystemTime;

use crate::auth::jwt::mint_access_token;
use crate::auth::password::verify_password;
use crate::domain::user::Role;
use crate::state::security_config::SecurityConfig;
use crate::store::users::UserStore;
use crate::AppError;

#[derive(Debug)]
pub struct LoginOutcome {
    pub access_token: String,
    pub role: Role,
    pub email: String,
}

/// Authenticate `email`/`password` and mint an access token.
///
/// Unknown email and wrong password return the same error, so a caller
/// cannot probe which accounts exist. Argon2 verification is CPU-bound;
/// the HTTP handler runs this on the blocking pool.
pub fn login(
    users: &UserStore,
    security: &SecurityConfig,
    email: &str,
    password: &str,
) -> Result<LoginOutcome, AppError> {
    let user = users
        .find_by_email(email)
        .ok_or_else(AppError::invalid_credentials)?;

    if !verify_password(password, &user.password_hash) {
        return Err(AppError::invalid_credentials());
    }

    let access_token = mint_access_token(&user.email, user.role, SystemTime::now(), security)?;

    Ok(LoginOutcome {
        access_token,
        role: user.role,
        email: user.email,
    })
}
