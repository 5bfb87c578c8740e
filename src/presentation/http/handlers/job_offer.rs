//! Job Offer Handlers

use std::sync::Arc;

use axum::{
    extract::{Extension, Path, State},
    http::StatusCode,
    Json,
};

use crate::application::dto::request::{offer_status, CreateJobOfferRequest, UpdateJobOfferRequest};
use crate::application::dto::response::JobOfferResponse;
use crate::application::services::{
    CreateJobOfferDto, JobOfferService, JobOfferServiceImpl, UpdateJobOfferDto,
};
use crate::infrastructure::repositories::{
    PgCompanyProfileRepository, PgJobOfferRepository, PgOwnershipResolver,
};
use crate::presentation::middleware::AuthUser;
use crate::shared::error::AppError;
use crate::shared::validation::{parse_id, validate};
use crate::startup::AppState;

type OfferService =
    JobOfferServiceImpl<PgJobOfferRepository, PgCompanyProfileRepository, PgOwnershipResolver>;

fn offer_service(state: &AppState) -> OfferService {
    JobOfferServiceImpl::new(
        Arc::new(PgJobOfferRepository::new(state.db.clone())),
        Arc::new(PgCompanyProfileRepository::new(state.db.clone())),
        Arc::new(PgOwnershipResolver::new(state.db.clone())),
        state.snowflake.clone(),
    )
}

/// List open job offers, newest first
pub async fn list_offers(
    State(state): State<AppState>,
) -> Result<Json<Vec<JobOfferResponse>>, AppError> {
    let offers = offer_service(&state).list_open().await?;

    Ok(Json(offers.into_iter().map(JobOfferResponse::from).collect()))
}

/// Get a job offer with its company
pub async fn get_offer(
    State(state): State<AppState>,
    Path(offer_id): Path<String>,
) -> Result<Json<JobOfferResponse>, AppError> {
    let offer_id = parse_id(&offer_id, "job offer")?;

    let offer = offer_service(&state).get(offer_id).await?;

    Ok(Json(JobOfferResponse::from(offer)))
}

/// Publish a job offer under the caller's company
pub async fn create_offer(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthUser>,
    Json(body): Json<CreateJobOfferRequest>,
) -> Result<(StatusCode, Json<JobOfferResponse>), AppError> {
    validate(&body)?;

    let request = CreateJobOfferDto {
        status: offer_status(body.status.as_deref()),
        title: body.title,
        description: body.description,
        location: body.location,
        salary_range: body.salary_range,
    };

    let offer = offer_service(&state).create(auth.user_id, request).await?;

    tracing::info!(offer_id = offer.id, company_id = offer.company_id, "Job offer created");

    Ok((StatusCode::CREATED, Json(JobOfferResponse::from(offer))))
}

/// Update one of the caller's offers
pub async fn update_offer(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthUser>,
    Path(offer_id): Path<String>,
    Json(body): Json<UpdateJobOfferRequest>,
) -> Result<Json<JobOfferResponse>, AppError> {
    let offer_id = parse_id(&offer_id, "job offer")?;
    validate(&body)?;

    let update = UpdateJobOfferDto {
        status: offer_status(body.status.as_deref()),
        title: body.title,
        description: body.description,
        location: body.location,
        salary_range: body.salary_range,
    };

    let offer = offer_service(&state)
        .update(auth.user_id, offer_id, update)
        .await?;

    Ok(Json(JobOfferResponse::from(offer)))
}

/// Delete one of the caller's offers
pub async fn delete_offer(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthUser>,
    Path(offer_id): Path<String>,
) -> Result<StatusCode, AppError> {
    let offer_id = parse_id(&offer_id, "job offer")?;

    offer_service(&state).delete(auth.user_id, offer_id).await?;

    tracing::info!(offer_id, "Job offer deleted");

    Ok(StatusCode::NO_CONTENT)
}
