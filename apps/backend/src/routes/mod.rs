use actix_web::{web, HttpResponse};

pub mod activities;
pub mod auth;

async fn root() -> HttpResponse {
    HttpResponse::Ok().body("Mergington High School Activities API")
}

/// Unprotected routes. Protected roster mutations are registered behind
/// the `JwtExtract` scope in `main`.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(root))
        .configure(crate::health::configure_routes)
        .configure(auth::configure_routes)
        .configure(activities::configure_public);
}
