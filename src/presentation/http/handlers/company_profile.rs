//! Company Profile Handlers

use std::sync::Arc;

use axum::{
    extract::{Extension, Path, State},
    http::StatusCode,
    Json,
};

use crate::application::dto::request::{CreateCompanyProfileRequest, UpdateCompanyProfileRequest};
use crate::application::dto::response::CompanyProfileResponse;
use crate::application::services::{CompanyProfileService, CompanyProfileServiceImpl};
use crate::infrastructure::repositories::{PgCompanyProfileRepository, PgJobOfferRepository};
use crate::presentation::middleware::AuthUser;
use crate::shared::error::AppError;
use crate::shared::validation::{parse_id, validate};
use crate::startup::AppState;

fn company_service(
    state: &AppState,
) -> CompanyProfileServiceImpl<PgCompanyProfileRepository, PgJobOfferRepository> {
    CompanyProfileServiceImpl::new(
        Arc::new(PgCompanyProfileRepository::new(state.db.clone())),
        Arc::new(PgJobOfferRepository::new(state.db.clone())),
        state.snowflake.clone(),
    )
}

/// Create the caller's company profile, filling in the registration placeholder
pub async fn create_company_profile(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthUser>,
    Json(body): Json<CreateCompanyProfileRequest>,
) -> Result<(StatusCode, Json<CompanyProfileResponse>), AppError> {
    validate(&body)?;

    let profile = company_service(&state)
        .create(auth.user_id, auth.role, body.into())
        .await?;

    Ok((StatusCode::CREATED, Json(CompanyProfileResponse::from(profile))))
}

/// Get the caller's company profile with its offers
pub async fn get_my_company_profile(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthUser>,
) -> Result<Json<CompanyProfileResponse>, AppError> {
    let found = company_service(&state).get_mine(auth.user_id).await?;

    Ok(Json(CompanyProfileResponse::from(found)))
}

/// Get any company profile by ID
pub async fn get_company_profile(
    State(state): State<AppState>,
    Path(profile_id): Path<String>,
) -> Result<Json<CompanyProfileResponse>, AppError> {
    let profile_id = parse_id(&profile_id, "company profile")?;

    let found = company_service(&state).get(profile_id).await?;

    Ok(Json(CompanyProfileResponse::from(found)))
}

/// Partially update the caller's company profile
pub async fn update_company_profile(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthUser>,
    Json(body): Json<UpdateCompanyProfileRequest>,
) -> Result<Json<CompanyProfileResponse>, AppError> {
    validate(&body)?;

    let profile = company_service(&state)
        .update(auth.user_id, body.into())
        .await?;

    Ok(Json(CompanyProfileResponse::from(profile)))
}
