//! Current user extractor.

use std::future::{ready, Ready};

use actix_web::dev::Payload;
use actix_web::{web, FromRequest, HttpMessage, HttpRequest};

use crate::auth::claims::Claims;
use crate::domain::user::Role;
use crate::error::AppError;
use crate::state::app_state::AppState;

/// The authenticated caller, re-resolved from the credential store.
///
/// Reads the verified claims placed into request extensions by the
/// `JwtExtract` middleware, then looks the subject up in the store again.
/// A token whose subject no longer exists is treated as unauthenticated,
/// and the role always comes from the store record rather than the claim.
#[derive(Debug, Clone)]
pub struct CurrentUser {
    pub email: String,
    pub role: Role,
}

impl FromRequest for CurrentUser {
    type Error = AppError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        ready(resolve(req))
    }
}

fn resolve(req: &HttpRequest) -> Result<CurrentUser, AppError> {
    let claims = req
        .extensions()
        .get::<Claims>()
        .cloned()
        .ok_or_else(AppError::unauthorized_missing_bearer)?;

    let app_state = req
        .app_data::<web::Data<AppState>>()
        .ok_or_else(|| AppError::internal("AppState not available".to_string()))?;

    let user = app_state
        .users
        .find_by_email(&claims.sub)
        .ok_or_else(AppError::unknown_subject)?;

    Ok(CurrentUser {
        email: user.email,
        role: user.role,
    })
}
