//! Application Handlers
//!
//! Aspirants apply to offers; companies review what they received.

use std::sync::Arc;

use axum::{
    extract::{Extension, Path, State},
    http::StatusCode,
    Json,
};

use crate::application::dto::request::{CreateApplicationRequest, UpdateApplicationStatusRequest};
use crate::application::dto::response::{
    ApplicationResponse, AspirantApplicationResponse, CompanyApplicationResponse,
};
use crate::application::services::{ApplicationService, ApplicationServiceImpl};
use crate::domain::services::StatusPolicy;
use crate::domain::ApplicationStatus;
use crate::infrastructure::metrics;
use crate::infrastructure::repositories::{
    PgApplicationRepository, PgAspirantProfileRepository, PgJobOfferRepository,
    PgOwnershipResolver,
};
use crate::presentation::middleware::AuthUser;
use crate::shared::error::AppError;
use crate::shared::validation::{parse_id, validate};
use crate::startup::AppState;

type Workflow = ApplicationServiceImpl<
    PgApplicationRepository,
    PgAspirantProfileRepository,
    PgJobOfferRepository,
    PgOwnershipResolver,
>;

fn workflow(state: &AppState) -> Workflow {
    ApplicationServiceImpl::new(
        Arc::new(PgApplicationRepository::new(state.db.clone())),
        Arc::new(PgAspirantProfileRepository::new(state.db.clone())),
        Arc::new(PgJobOfferRepository::new(state.db.clone())),
        Arc::new(PgOwnershipResolver::new(state.db.clone())),
        state.snowflake.clone(),
        StatusPolicy::from_strict(state.settings.recruitment.strict_status_transitions),
    )
}

/// Apply to a job offer
pub async fn create_application(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthUser>,
    Json(body): Json<CreateApplicationRequest>,
) -> Result<(StatusCode, Json<ApplicationResponse>), AppError> {
    validate(&body)?;
    let job_offer_id = parse_id(&body.job_offer_id, "job offer")?;

    let application = workflow(&state)
        .create_application(auth.user_id, job_offer_id, body.cover_letter)
        .await?;

    metrics::record_application_submitted();

    Ok((
        StatusCode::CREATED,
        Json(ApplicationResponse::from_application(application, false)),
    ))
}

/// The caller's own applications
pub async fn list_my_applications(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthUser>,
) -> Result<Json<Vec<AspirantApplicationResponse>>, AppError> {
    let applications = workflow(&state).find_all_by_aspirant(auth.user_id).await?;

    Ok(Json(
        applications
            .into_iter()
            .map(AspirantApplicationResponse::from)
            .collect(),
    ))
}

/// Applications received by the caller's company
pub async fn list_company_applications(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthUser>,
) -> Result<Json<Vec<CompanyApplicationResponse>>, AppError> {
    let applications = workflow(&state).find_all_by_company(auth.user_id).await?;

    Ok(Json(
        applications
            .into_iter()
            .map(CompanyApplicationResponse::from)
            .collect(),
    ))
}

/// Move an application to a new status
pub async fn update_application_status(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthUser>,
    Path(application_id): Path<String>,
    Json(body): Json<UpdateApplicationStatusRequest>,
) -> Result<Json<ApplicationResponse>, AppError> {
    let application_id = parse_id(&application_id, "application")?;
    validate(&body)?;
    let status = ApplicationStatus::parse(&body.status)
        .ok_or_else(|| AppError::Validation("status: Invalid application status".into()))?;

    let application = workflow(&state)
        .update_status(auth.user_id, application_id, status, body.internal_note)
        .await?;

    metrics::record_status_update(application.status.as_str());

    Ok(Json(ApplicationResponse::from_application(application, true)))
}
