//! Authentication and role guard tests

use axum::{
    body::Body,
    http::{Method, Request, StatusCode},
};
use pretty_assertions::assert_eq;
use serde_json::json;

use crate::common::{json_body, TestApp};
use recruitment_server::domain::UserRole;

#[tokio::test]
async fn test_protected_route_without_token_is_unauthorized() {
    let app = TestApp::new();

    let response = app
        .request(Method::GET, "/api/recruitment/profile", None, None)
        .await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    let body = json_body(response).await;
    assert_eq!(body["message"], "Missing authorization header");
}

#[tokio::test]
async fn test_malformed_token_is_unauthorized() {
    let app = TestApp::new();

    let response = app
        .request(
            Method::GET,
            "/api/recruitment/applications/me",
            None,
            Some("not.a.jwt"),
        )
        .await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_non_bearer_scheme_is_unauthorized() {
    let app = TestApp::new();

    let request = Request::builder()
        .uri("/api/recruitment/profile")
        .header("Authorization", "Basic dXNlcjpwYXNz")
        .body(Body::empty())
        .unwrap();

    let response = app.send(request).await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_company_cannot_use_aspirant_routes() {
    let app = TestApp::new();
    let token = app.token_for(UserRole::Company);

    for (method, uri) in [
        (Method::GET, "/api/recruitment/profile"),
        (Method::GET, "/api/recruitment/aspirants/skills"),
        (Method::GET, "/api/recruitment/applications/me"),
    ] {
        let response = app.request(method, uri, None, Some(&token)).await;
        assert_eq!(response.status(), StatusCode::FORBIDDEN, "{uri}");
    }
}

#[tokio::test]
async fn test_aspirant_cannot_use_company_routes() {
    let app = TestApp::new();
    let token = app.token_for(UserRole::Aspirant);

    let create_offer = app
        .request(
            Method::POST,
            "/api/recruitment/offers",
            Some(json!({
                "title": "Backend Engineer",
                "description": "Rust services",
                "location": "Remote",
                "salary_range": "60k-80k"
            })),
            Some(&token),
        )
        .await;
    let review = app
        .request(
            Method::PUT,
            "/api/recruitment/applications/1/status",
            Some(json!({ "status": "HIRED" })),
            Some(&token),
        )
        .await;
    let listing = app
        .request(
            Method::GET,
            "/api/recruitment/applications/company",
            None,
            Some(&token),
        )
        .await;

    assert_eq!(create_offer.status(), StatusCode::FORBIDDEN);
    assert_eq!(review.status(), StatusCode::FORBIDDEN);
    assert_eq!(listing.status(), StatusCode::FORBIDDEN);
}
