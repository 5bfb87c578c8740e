//! Request validation at the HTTP edge

use axum::http::{Method, StatusCode};
use pretty_assertions::assert_eq;
use serde_json::json;
use test_case::test_case;

use crate::common::{json_body, TestApp};
use recruitment_server::domain::UserRole;

#[test_case(json!({ "email": "not-an-email", "password": "password123", "role": "aspirant" }), "email" ; "invalid email")]
#[test_case(json!({ "email": "a1@x.com", "password": "short", "role": "aspirant" }), "password" ; "short password")]
#[test_case(json!({ "email": "a1@x.com", "password": "password123", "role": "admin" }), "role" ; "unknown role")]
#[tokio::test]
async fn test_register_rejects_invalid_body(body: serde_json::Value, field: &str) {
    let app = TestApp::new();

    let response = app
        .request(Method::POST, "/api/auth/register", Some(body), None)
        .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = json_body(response).await;
    assert_eq!(body["code"], 10007);
    assert!(body["message"].as_str().unwrap().starts_with(field));
}

#[tokio::test]
async fn test_offer_id_must_be_numeric() {
    let app = TestApp::new();

    let response = app.get("/api/recruitment/offers/abc").await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(json_body(response).await["message"], "Invalid job offer ID");
}

#[tokio::test]
async fn test_application_needs_numeric_offer_id() {
    let app = TestApp::new();
    let token = app.token_for(UserRole::Aspirant);

    let response = app
        .request(
            Method::POST,
            "/api/recruitment/applications",
            Some(json!({ "job_offer_id": "twelve" })),
            Some(&token),
        )
        .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_status_update_rejects_unknown_status() {
    let app = TestApp::new();
    let token = app.token_for(UserRole::Company);

    let response = app
        .request(
            Method::PUT,
            "/api/recruitment/applications/12/status",
            Some(json!({ "status": "ARCHIVED" })),
            Some(&token),
        )
        .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        json_body(response).await["message"],
        "status: Invalid application status"
    );
}

#[tokio::test]
async fn test_skill_level_outside_scale_is_rejected() {
    let app = TestApp::new();
    let token = app.token_for(UserRole::Aspirant);

    let response = app
        .request(
            Method::POST,
            "/api/recruitment/aspirants/skills",
            Some(json!({ "skill_name": "Rust", "level": 9 })),
            Some(&token),
        )
        .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}
