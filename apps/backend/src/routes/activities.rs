//! Activity listing and roster mutation routes.

use actix_web::{web, HttpResponse, Result};
use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};

use crate::domain::activity::Activity;
use crate::error::AppError;
use crate::extractors::current_user::CurrentUser;
use crate::services::roster;
use crate::state::app_state::AppState;

/// JSON object mapping activity name → detail, in catalog seed order.
#[derive(Debug)]
pub struct ActivityCatalog(Vec<Activity>);

impl Serialize for ActivityCatalog {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for activity in &self.0 {
            map.serialize_entry(&activity.name, activity)?;
        }
        map.end()
    }
}

#[derive(Debug, Deserialize)]
pub struct RosterQuery {
    pub email: String,
}

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

/// GET /activities
async fn get_activities(app_state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let catalog = ActivityCatalog(roster::list(&app_state.activities));
    Ok(HttpResponse::Ok().json(catalog))
}

/// POST /activities/{activity_name}/signup?email=...
async fn signup_for_activity(
    path: web::Path<String>,
    query: web::Query<RosterQuery>,
    current_user: CurrentUser,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let activity_name = path.into_inner();

    let message = roster::signup(
        &app_state.activities,
        &current_user.email,
        current_user.role,
        &activity_name,
        &query.email,
    )?;

    Ok(HttpResponse::Ok().json(MessageResponse { message }))
}

/// DELETE /activities/{activity_name}/unregister?email=...
async fn unregister_from_activity(
    path: web::Path<String>,
    query: web::Query<RosterQuery>,
    current_user: CurrentUser,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let activity_name = path.into_inner();

    let message = roster::unregister(
        &app_state.activities,
        &current_user.email,
        current_user.role,
        &activity_name,
        &query.email,
    )?;

    Ok(HttpResponse::Ok().json(MessageResponse { message }))
}

/// Listing is public.
pub fn configure_public(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("/activities").route(web::get().to(get_activities)));
}

/// Roster mutations; mounted under a `JwtExtract`-wrapped `/activities`
/// scope in `main`.
pub fn configure_protected(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/{activity_name}/signup").route(web::post().to(signup_for_activity)),
    )
    .service(
        web::resource("/{activity_name}/unregister")
            .route(web::delete().to(unregister_from_activity)),
    );
}
