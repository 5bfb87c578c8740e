//! Authentication Middleware
//!
//! JWT validation and role gating for protected routes.

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};
use axum_extra::{
    headers::{authorization::Bearer, Authorization},
    typed_header::TypedHeaderRejection,
    TypedHeader,
};

use crate::application::services::TokenCodec;
use crate::domain::UserRole;
use crate::shared::error::AppError;
use crate::startup::AppState;

/// Authenticated user extension
#[derive(Debug, Clone, Copy)]
pub struct AuthUser {
    pub user_id: i64,
    pub role: UserRole,
}

/// Authentication middleware that validates JWT tokens
pub async fn auth_middleware(
    State(state): State<AppState>,
    bearer: Result<TypedHeader<Authorization<Bearer>>, TypedHeaderRejection>,
    mut request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let TypedHeader(Authorization(bearer)) = bearer.map_err(|rejection| {
        if rejection.is_missing() {
            AppError::Unauthorized("Missing authorization header".into())
        } else {
            AppError::Unauthorized("Invalid authorization header format".into())
        }
    })?;

    let claims = TokenCodec::new(&state.settings.jwt).decode(bearer.token())?;
    let user = AuthUser {
        user_id: claims.user_id()?,
        role: claims.role,
    };

    request.extensions_mut().insert(user);

    Ok(next.run(request).await)
}

/// Reject callers whose role differs from the one the route is mounted with.
///
/// Must run inside `auth_middleware`.
pub async fn require_role(
    State(required): State<UserRole>,
    request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let user = request
        .extensions()
        .get::<AuthUser>()
        .copied()
        .ok_or_else(|| AppError::Unauthorized("Authentication required".into()))?;

    if user.role != required {
        tracing::debug!(
            user_id = user.user_id,
            role = user.role.as_str(),
            required = required.as_str(),
            "Role check failed"
        );
        return Err(AppError::Forbidden(format!(
            "This action requires the {} role",
            required.as_str()
        )));
    }

    Ok(next.run(request).await)
}
