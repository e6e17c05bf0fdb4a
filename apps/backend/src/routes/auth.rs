//! Login route.

use actix_web::{web, HttpResponse, Result};
use serde::{Deserialize, Serialize};

use crate::domain::user::Role;
use crate::error::AppError;
use crate::services::auth as auth_service;
use crate::state::app_state::AppState;

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub access_token: String,
    pub token_type: &'static str,
    pub role: Role,
    pub email: String,
}

/// POST /login
///
/// Authenticate with email and password and receive a bearer token.
/// Password verification is CPU-bound Argon2, so it runs on the blocking
/// pool instead of an executor thread.
async fn login(
    req: web::Json<LoginRequest>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let state = app_state.get_ref().clone();
    let LoginRequest { email, password } = req.into_inner();

    let outcome =
        web::block(move || auth_service::login(&state.users, &state.security, &email, &password))
            .await
            .map_err(|e| AppError::internal(format!("Blocking task failed: {e}")))??;

    Ok(HttpResponse::Ok().json(LoginResponse {
        access_token: outcome.access_token,
        token_type: "bearer",
        role: outcome.role,
        email: outcome.email,
    }))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("/login").route(web::post().to(login)));
}
