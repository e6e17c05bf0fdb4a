#![allow(dead_code)]

//! Shared setup for integration tests.

use std::time::{Duration, SystemTime};

use actix_http::Request;
use actix_web::body::MessageBody;
use actix_web::dev::{Service, ServiceResponse};
use actix_web::{test, Error};
use mergington_backend::auth::jwt::mint_access_token;
use serde_json::Value;
use mergington_backend::domain::user::Role;
use mergington_backend::state::app_state::AppState;
use mergington_backend::state::security_config::SecurityConfig;
use mergington_backend::store::seed;

pub const TEST_SECRET: &str = "test_secret_key_for_testing_purposes_only";

#[ctor::ctor]
fn init_test_logging() {
    backend_test_support::logging::init();
}

/// Freshly seeded application state with a fixed test secret.
pub fn test_state() -> AppState {
    AppState::new(
        seed::seed_users().expect("seeding users"),
        seed::seed_activities(),
        SecurityConfig::new(TEST_SECRET.as_bytes()),
    )
}

/// Bearer token for an arbitrary subject, minted with the state's secret.
pub fn token_for(state: &AppState, email: &str, role: Role) -> String {
    mint_access_token(email, role, SystemTime::now(), &state.security).unwrap()
}

/// Bearer token whose 30-minute lifetime has already elapsed.
pub fn expired_token_for(state: &AppState, email: &str, role: Role) -> String {
    let past = SystemTime::now() - Duration::from_secs(40 * 60);
    mint_access_token(email, role, past, &state.security).unwrap()
}

/// Current participant list of one activity, via GET /activities.
pub async fn get_participants<S, B>(app: &S, activity: &str) -> Vec<String>
where
    S: Service<Request, Response = ServiceResponse<B>, Error = Error>,
    B: MessageBody,
{
    let req = test::TestRequest::get().uri("/activities").to_request();
    let resp = test::call_service(app, req).await;
    assert!(resp.status().is_success());

    let body: Value = test::read_body_json(resp).await;
    body[activity]["participants"]
        .as_array()
        .unwrap()
        .iter()
        .map(|v| v.as_str().unwrap().to_string())
        .collect()
}
