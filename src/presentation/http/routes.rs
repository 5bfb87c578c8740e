//! Route Configuration
//!
//! Configures all HTTP routes for the API.

use axum::{
    middleware,
    response::IntoResponse,
    routing::{get, post, put},
    Router,
};

use super::handlers;
use crate::domain::UserRole;
use crate::infrastructure::metrics;
use crate::presentation::middleware::{auth_middleware, require_role, track_metrics};
use crate::startup::AppState;

/// Create the main API router
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .nest("/api", api_routes(state.clone()))
        // Health check endpoints
        .route("/health", get(handlers::health::health_check))
        .route("/health/live", get(handlers::health::liveness))
        .route("/health/ready", get(handlers::health::readiness))
        // Prometheus metrics endpoint
        .route("/metrics", get(metrics_handler))
        .route_layer(middleware::from_fn(track_metrics))
        .with_state(state)
}

/// Prometheus metrics endpoint handler
async fn metrics_handler() -> impl IntoResponse {
    let metrics = metrics::gather_metrics();
    (
        [(
            axum::http::header::CONTENT_TYPE,
            "text/plain; version=0.0.4; charset=utf-8",
        )],
        metrics,
    )
}

/// API routes
fn api_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .nest("/auth", auth_routes())
        .nest(
            "/recruitment",
            public_routes()
                .merge(aspirant_routes(state.clone()))
                .merge(company_routes(state.clone()))
                .merge(member_routes(state)),
        )
}

/// Registration and login (public)
fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/register", post(handlers::auth::register))
        .route("/login", post(handlers::auth::login))
}

/// Job offer browsing (public)
fn public_routes() -> Router<AppState> {
    Router::new()
        .route("/offers", get(handlers::job_offer::list_offers))
        .route("/offers/{id}", get(handlers::job_offer::get_offer))
}

/// Wrap `router` in authentication followed by a role check.
///
/// The last route layer added runs first, so authentication goes on top.
fn gated(router: Router<AppState>, state: AppState, role: UserRole) -> Router<AppState> {
    router
        .route_layer(middleware::from_fn_with_state(role, require_role))
        .route_layer(middleware::from_fn_with_state(state, auth_middleware))
}

/// Aspirant CV and applications
fn aspirant_routes(state: AppState) -> Router<AppState> {
    use handlers::aspirant_profile as profile;

    let router = Router::new()
        .route(
            "/profile",
            get(profile::get_profile)
                .post(profile::create_profile)
                .put(profile::update_profile)
                .delete(profile::delete_profile),
        )
        .route(
            "/aspirants/skills",
            get(profile::list_skills).post(profile::add_skill),
        )
        .route(
            "/aspirants/skills/{id}",
            put(profile::update_skill).delete(profile::remove_skill),
        )
        .route(
            "/aspirants/experience",
            get(profile::list_experience).post(profile::add_experience),
        )
        .route(
            "/aspirants/experience/{id}",
            put(profile::update_experience).delete(profile::remove_experience),
        )
        .route(
            "/applications",
            post(handlers::application::create_application),
        )
        .route(
            "/applications/me",
            get(handlers::application::list_my_applications),
        );

    gated(router, state, UserRole::Aspirant)
}

/// Company profile, offer management and application review
fn company_routes(state: AppState) -> Router<AppState> {
    use handlers::company_profile as company;

    let router = Router::new()
        .route("/offers", post(handlers::job_offer::create_offer))
        .route(
            "/offers/{id}",
            put(handlers::job_offer::update_offer).delete(handlers::job_offer::delete_offer),
        )
        .route(
            "/company-profile",
            post(company::create_company_profile).put(company::update_company_profile),
        )
        .route("/company-profile/me", get(company::get_my_company_profile))
        .route(
            "/applications/company",
            get(handlers::application::list_company_applications),
        )
        .route(
            "/applications/{id}/status",
            put(handlers::application::update_application_status),
        );

    gated(router, state, UserRole::Company)
}

/// Routes open to any signed-in user
fn member_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            "/company-profile/{id}",
            get(handlers::company_profile::get_company_profile),
        )
        .route_layer(middleware::from_fn_with_state(state, auth_middleware))
}
