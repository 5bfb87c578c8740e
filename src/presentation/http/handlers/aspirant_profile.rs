//! Aspirant Profile Handlers
//!
//! The caller's own CV: base profile, skills and work experience.

use std::sync::Arc;

use axum::{
    extract::{Extension, Path, State},
    http::StatusCode,
    Json,
};

use crate::application::dto::request::{
    CreateAspirantProfileRequest, ExperienceRequest, SkillRequest, UpdateAspirantProfileRequest,
    UpdateExperienceRequest, UpdateSkillRequest,
};
use crate::application::dto::response::{
    AspirantProfileResponse, ExperienceResponse, SkillResponse,
};
use crate::application::services::{AspirantProfileService, AspirantProfileServiceImpl};
use crate::infrastructure::repositories::{
    PgAspirantProfileRepository, PgExperienceItemRepository, PgOwnershipResolver,
    PgSkillItemRepository,
};
use crate::presentation::middleware::AuthUser;
use crate::shared::error::AppError;
use crate::shared::validation::{parse_id, validate};
use crate::startup::AppState;

type ProfileService = AspirantProfileServiceImpl<
    PgAspirantProfileRepository,
    PgSkillItemRepository,
    PgExperienceItemRepository,
    PgOwnershipResolver,
>;

fn profile_service(state: &AppState) -> ProfileService {
    AspirantProfileServiceImpl::new(
        Arc::new(PgAspirantProfileRepository::new(state.db.clone())),
        Arc::new(PgSkillItemRepository::new(state.db.clone())),
        Arc::new(PgExperienceItemRepository::new(state.db.clone())),
        Arc::new(PgOwnershipResolver::new(state.db.clone())),
        state.snowflake.clone(),
    )
}

/// Get the caller's profile with skills and experience
pub async fn get_profile(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthUser>,
) -> Result<Json<AspirantProfileResponse>, AppError> {
    let profile = profile_service(&state).get_mine(auth.user_id).await?;

    Ok(Json(AspirantProfileResponse::from(profile)))
}

/// Create the caller's profile, filling in the registration placeholder
pub async fn create_profile(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthUser>,
    Json(body): Json<CreateAspirantProfileRequest>,
) -> Result<(StatusCode, Json<AspirantProfileResponse>), AppError> {
    validate(&body)?;

    let profile = profile_service(&state)
        .create(auth.user_id, body.into())
        .await?;

    Ok((StatusCode::CREATED, Json(AspirantProfileResponse::from(profile))))
}

/// Partially update the caller's profile
pub async fn update_profile(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthUser>,
    Json(body): Json<UpdateAspirantProfileRequest>,
) -> Result<Json<AspirantProfileResponse>, AppError> {
    validate(&body)?;

    let profile = profile_service(&state)
        .update(auth.user_id, body.into())
        .await?;

    Ok(Json(AspirantProfileResponse::from(profile)))
}

/// Delete the caller's profile
pub async fn delete_profile(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthUser>,
) -> Result<StatusCode, AppError> {
    profile_service(&state).delete(auth.user_id).await?;

    tracing::info!(user_id = auth.user_id, "Aspirant profile deleted");

    Ok(StatusCode::NO_CONTENT)
}

pub async fn list_skills(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthUser>,
) -> Result<Json<Vec<SkillResponse>>, AppError> {
    let skills = profile_service(&state).list_skills(auth.user_id).await?;

    Ok(Json(skills.into_iter().map(SkillResponse::from).collect()))
}

pub async fn add_skill(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthUser>,
    Json(body): Json<SkillRequest>,
) -> Result<(StatusCode, Json<SkillResponse>), AppError> {
    validate(&body)?;

    let skill = profile_service(&state)
        .add_skill(auth.user_id, body.into())
        .await?;

    Ok((StatusCode::CREATED, Json(SkillResponse::from(skill))))
}

pub async fn update_skill(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthUser>,
    Path(skill_id): Path<String>,
    Json(body): Json<UpdateSkillRequest>,
) -> Result<Json<SkillResponse>, AppError> {
    let skill_id = parse_id(&skill_id, "skill")?;
    validate(&body)?;

    let skill = profile_service(&state)
        .update_skill(auth.user_id, skill_id, body.into())
        .await?;

    Ok(Json(SkillResponse::from(skill)))
}

pub async fn remove_skill(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthUser>,
    Path(skill_id): Path<String>,
) -> Result<StatusCode, AppError> {
    let skill_id = parse_id(&skill_id, "skill")?;

    profile_service(&state)
        .remove_skill(auth.user_id, skill_id)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

pub async fn list_experience(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthUser>,
) -> Result<Json<Vec<ExperienceResponse>>, AppError> {
    let items = profile_service(&state).list_experience(auth.user_id).await?;

    Ok(Json(items.into_iter().map(ExperienceResponse::from).collect()))
}

pub async fn add_experience(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthUser>,
    Json(body): Json<ExperienceRequest>,
) -> Result<(StatusCode, Json<ExperienceResponse>), AppError> {
    validate(&body)?;

    let item = profile_service(&state)
        .add_experience(auth.user_id, body.into())
        .await?;

    Ok((StatusCode::CREATED, Json(ExperienceResponse::from(item))))
}

pub async fn update_experience(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthUser>,
    Path(item_id): Path<String>,
    Json(body): Json<UpdateExperienceRequest>,
) -> Result<Json<ExperienceResponse>, AppError> {
    let item_id = parse_id(&item_id, "experience item")?;
    validate(&body)?;

    let item = profile_service(&state)
        .update_experience(auth.user_id, item_id, body.into())
        .await?;

    Ok(Json(ExperienceResponse::from(item)))
}

pub async fn remove_experience(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthUser>,
    Path(item_id): Path<String>,
) -> Result<StatusCode, AppError> {
    let item_id = parse_id(&item_id, "experience item")?;

    profile_service(&state)
        .remove_experience(auth.user_id, item_id)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}
