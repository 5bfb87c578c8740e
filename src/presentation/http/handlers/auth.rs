//! Authentication Handlers

use std::sync::Arc;

use axum::{extract::State, http::StatusCode, Json};

use crate::application::dto::request::{LoginRequest, RegisterRequest};
use crate::application::dto::response::AuthResponse;
use crate::application::services::{AuthService, AuthServiceImpl, TokenCodec};
use crate::infrastructure::repositories::PgUserRepository;
use crate::shared::error::AppError;
use crate::shared::validation::validate;
use crate::startup::AppState;

fn auth_service(state: &AppState) -> AuthServiceImpl<PgUserRepository> {
    AuthServiceImpl::new(
        Arc::new(PgUserRepository::new(state.db.clone())),
        state.snowflake.clone(),
        TokenCodec::new(&state.settings.jwt),
    )
}

/// Register a new account together with its default profile
pub async fn register(
    State(state): State<AppState>,
    Json(body): Json<RegisterRequest>,
) -> Result<(StatusCode, Json<AuthResponse>), AppError> {
    validate(&body)?;

    let session = auth_service(&state)
        .register(
            &body.email,
            &body.password,
            body.user_role(),
            body.company_name.as_deref(),
        )
        .await?;

    tracing::info!(
        user_id = session.user.id,
        role = session.user.role.as_str(),
        "User registered"
    );

    Ok((StatusCode::CREATED, Json(AuthResponse::from(session))))
}

/// Login with credentials
pub async fn login(
    State(state): State<AppState>,
    Json(body): Json<LoginRequest>,
) -> Result<Json<AuthResponse>, AppError> {
    validate(&body)?;

    let session = auth_service(&state)
        .login(&body.email, &body.password)
        .await?;

    Ok(Json(AuthResponse::from(session)))
}
