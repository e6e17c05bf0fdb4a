use actix_web::{web, App, HttpServer};
use mergington_backend::middleware::cors::cors_middleware;
use mergington_backend::middleware::jwt_extract::JwtExtract;
use mergington_backend::middleware::request_trace::RequestTrace;
use mergington_backend::routes;
use mergington_backend::state::app_state::AppState;
use mergington_backend::state::security_config::SecurityConfig;
use mergington_backend::store::seed;

mod telemetry;

/// Development-only fallback so the seeded demo runs without configuration.
const DEV_JWT_SECRET: &str = "dev-secret-change-in-production";

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    telemetry::init_tracing();

    // Environment variables must be set by the runtime environment:
    // - Docker: Set via docker-compose env_file or docker run --env-file
    // - Local dev: Source env files manually (e.g., set -a; . ./.env; set +a)
    let host = std::env::var("BACKEND_HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
    let port = std::env::var("BACKEND_PORT")
        .unwrap_or_else(|_| "3001".to_string())
        .parse::<u16>()
        .unwrap_or_else(|_| {
            eprintln!("❌ BACKEND_PORT must be a valid port number");
            std::process::exit(1);
        });

    let jwt = std::env::var("BACKEND_JWT_SECRET").unwrap_or_else(|_| {
        tracing::warn!("BACKEND_JWT_SECRET not set, using development fallback secret");
        DEV_JWT_SECRET.to_string()
    });
    let security_config = SecurityConfig::new(jwt.as_bytes());

    // Seed the in-memory stores. Hashing the demo password is the slow part.
    let users = match seed::seed_users() {
        Ok(users) => users,
        Err(e) => {
            eprintln!("❌ Failed to seed user store: {e}");
            std::process::exit(1);
        }
    };
    let activities = seed::seed_activities();

    let app_state = AppState::new(users, activities, security_config);
    tracing::info!(%host, %port, "starting Mergington backend");

    // Wrap AppState with web::Data before passing to HttpServer
    let data = web::Data::new(app_state);

    HttpServer::new(move || {
        App::new()
            .wrap(cors_middleware())
            .wrap(RequestTrace)
            .app_data(data.clone())
            .configure(routes::configure)
            .service(
                web::scope("/activities")
                    .wrap(JwtExtract)
                    .configure(routes::activities::configure_protected),
            )
    })
    .bind((host.as_str(), port))?
    .run()
    .await
}
