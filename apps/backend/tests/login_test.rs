mod common;

use actix_web::http::StatusCode;
use actix_web::{test, web, App};
use backend_test_support::problem_details::assert_problem_details;
use mergington_backend::auth::jwt::verify_access_token;
use mergington_backend::domain::user::Role;
use mergington_backend::middleware::request_trace::RequestTrace;
use mergington_backend::routes;
use serde_json::Value;

use common::test_state;

#[actix_web::test]
async fn test_login_succeeds_for_each_seeded_account() {
    let state = test_state();
    let app = test::init_service(
        App::new()
            .wrap(RequestTrace)
            .app_data(web::Data::new(state.clone()))
            .configure(routes::configure),
    )
    .await;

    let accounts = [
        ("teacher@mergington.edu", Role::Teacher, "teacher"),
        ("admin@mergington.edu", Role::Admin, "admin"),
        ("student1@mergington.edu", Role::Student, "student"),
        ("student2@mergington.edu", Role::Student, "student"),
    ];

    for (email, role, role_str) in accounts {
        let req = test::TestRequest::post()
            .uri("/login")
            .set_json(serde_json::json!({"email": email, "password": "password"}))
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert!(resp.status().is_success(), "login failed for {email}");

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["token_type"], "bearer");
        assert_eq!(body["role"], role_str);
        assert_eq!(body["email"], email);

        // The decoded token carries the stored role
        let claims =
            verify_access_token(body["access_token"].as_str().unwrap(), &state.security).unwrap();
        assert_eq!(claims.sub, email);
        assert_eq!(claims.role, role);
    }
}

#[actix_web::test]
async fn test_wrong_password_and_unknown_email_are_indistinguishable() {
    let state = test_state();
    let app = test::init_service(
        App::new()
            .wrap(RequestTrace)
            .app_data(web::Data::new(state))
            .configure(routes::configure),
    )
    .await;

    let attempts = [
        ("student1@mergington.edu", "wrong-password"),
        ("ghost@mergington.edu", "password"),
    ];

    for (email, password) in attempts {
        let req = test::TestRequest::post()
            .uri("/login")
            .set_json(serde_json::json!({"email": email, "password": password}))
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_problem_details(
            resp,
            "INVALID_CREDENTIALS",
            StatusCode::UNAUTHORIZED,
            Some("Incorrect email or password"),
        )
        .await;
    }
}
