//! Application Service
//!
//! Aspirants apply to job offers; companies review and move applications
//! through their statuses.

use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::services::{ensure_owner, OwnedEntity, OwnershipError, OwnershipResolver, StatusPolicy, TransitionError};
use crate::domain::{
    Application, ApplicationRepository, ApplicationStatus, ApplicationWithAspirant,
    ApplicationWithOffer, AspirantProfileRepository, JobOfferRepository,
};
use crate::shared::error::AppError;
use crate::shared::snowflake::SnowflakeGenerator;

/// Application service trait
#[async_trait]
pub trait ApplicationService: Send + Sync {
    /// Apply to a job offer as the caller's aspirant profile.
    async fn create_application(
        &self,
        caller_user_id: i64,
        job_offer_id: i64,
        cover_letter: Option<String>,
    ) -> Result<Application, ApplicationError>;

    /// The caller's own applications, newest first.
    async fn find_all_by_aspirant(
        &self,
        caller_user_id: i64,
    ) -> Result<Vec<ApplicationWithOffer>, ApplicationError>;

    /// Every application to any offer of the caller's company, newest first.
    async fn find_all_by_company(
        &self,
        caller_user_id: i64,
    ) -> Result<Vec<ApplicationWithAspirant>, ApplicationError>;

    /// Change the status of an application to one of the caller's offers.
    async fn update_status(
        &self,
        caller_user_id: i64,
        application_id: i64,
        status: ApplicationStatus,
        internal_note: Option<String>,
    ) -> Result<Application, ApplicationError>;
}

/// Application service errors
#[derive(Debug, thiserror::Error)]
pub enum ApplicationError {
    #[error("An aspirant profile is required to apply")]
    ProfileMissing,

    #[error("Job offer not found")]
    JobOfferNotFound,

    #[error("Application not found")]
    NotFound,

    #[error("You have already applied to this job offer")]
    DuplicateApplication,

    #[error("You do not own this application")]
    Forbidden,

    #[error(transparent)]
    InvalidTransition(#[from] TransitionError),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<ApplicationError> for AppError {
    fn from(e: ApplicationError) -> Self {
        match e {
            ApplicationError::ProfileMissing | ApplicationError::InvalidTransition(_) => {
                AppError::BadRequest(e.to_string())
            }
            ApplicationError::JobOfferNotFound | ApplicationError::NotFound => {
                AppError::NotFound(e.to_string())
            }
            ApplicationError::DuplicateApplication => AppError::Conflict(e.to_string()),
            ApplicationError::Forbidden => AppError::Forbidden(e.to_string()),
            ApplicationError::Internal(msg) => AppError::Internal(msg),
        }
    }
}

impl From<OwnershipError> for ApplicationError {
    fn from(e: OwnershipError) -> Self {
        match e {
            OwnershipError::NotFound(_) => ApplicationError::NotFound,
            OwnershipError::Forbidden(_) => ApplicationError::Forbidden,
            OwnershipError::Store(e) => store_error("Failed to resolve application owner")(e),
        }
    }
}

fn store_error(context: &'static str) -> impl Fn(AppError) -> ApplicationError {
    move |e| {
        tracing::error!(error = %e, "{}", context);
        ApplicationError::Internal(e.to_string())
    }
}

/// ApplicationService implementation
pub struct ApplicationServiceImpl<A, P, J, O>
where
    A: ApplicationRepository,
    P: AspirantProfileRepository,
    J: JobOfferRepository,
    O: OwnershipResolver,
{
    application_repo: Arc<A>,
    profile_repo: Arc<P>,
    offer_repo: Arc<J>,
    owners: Arc<O>,
    id_generator: Arc<SnowflakeGenerator>,
    policy: StatusPolicy,
}

impl<A, P, J, O> ApplicationServiceImpl<A, P, J, O>
where
    A: ApplicationRepository,
    P: AspirantProfileRepository,
    J: JobOfferRepository,
    O: OwnershipResolver,
{
    pub fn new(
        application_repo: Arc<A>,
        profile_repo: Arc<P>,
        offer_repo: Arc<J>,
        owners: Arc<O>,
        id_generator: Arc<SnowflakeGenerator>,
        policy: StatusPolicy,
    ) -> Self {
        Self {
            application_repo,
            profile_repo,
            offer_repo,
            owners,
            id_generator,
            policy,
        }
    }
}

#[async_trait]
impl<A, P, J, O> ApplicationService for ApplicationServiceImpl<A, P, J, O>
where
    A: ApplicationRepository + 'static,
    P: AspirantProfileRepository + 'static,
    J: JobOfferRepository + 'static,
    O: OwnershipResolver + 'static,
{
    async fn create_application(
        &self,
        caller_user_id: i64,
        job_offer_id: i64,
        cover_letter: Option<String>,
    ) -> Result<Application, ApplicationError> {
        let profile = self
            .profile_repo
            .find_by_user_id(caller_user_id)
            .await
            .map_err(store_error("Failed to load aspirant profile"))?
            .ok_or(ApplicationError::ProfileMissing)?;

        // Closed or paused offers still accept applications
        let offer = self
            .offer_repo
            .find_by_id(job_offer_id)
            .await
            .map_err(store_error("Failed to load job offer"))?
            .ok_or(ApplicationError::JobOfferNotFound)?;

        // Advisory; the unique constraint settles races
        if self
            .application_repo
            .exists_for(profile.id, offer.id)
            .await
            .map_err(store_error("Failed to check existing application"))?
        {
            return Err(ApplicationError::DuplicateApplication);
        }

        let application = Application::submit(
            self.id_generator.generate(),
            profile.id,
            offer.id,
            cover_letter,
        );

        let created = self
            .application_repo
            .create(&application)
            .await
            .map_err(|e| match e {
                AppError::Conflict(_) => ApplicationError::DuplicateApplication,
                AppError::NotFound(_) => ApplicationError::JobOfferNotFound,
                e => store_error("Failed to persist application")(e),
            })?;

        tracing::info!(
            application_id = created.id,
            aspirant_id = created.aspirant_id,
            job_offer_id = created.job_offer_id,
            "Application submitted"
        );

        Ok(created)
    }

    async fn find_all_by_aspirant(
        &self,
        caller_user_id: i64,
    ) -> Result<Vec<ApplicationWithOffer>, ApplicationError> {
        let profile = self
            .profile_repo
            .find_by_user_id(caller_user_id)
            .await
            .map_err(store_error("Failed to load aspirant profile"))?;

        let Some(profile) = profile else {
            return Ok(Vec::new());
        };

        self.application_repo
            .find_by_aspirant(profile.id)
            .await
            .map_err(store_error("Failed to list aspirant applications"))
    }

    async fn find_all_by_company(
        &self,
        caller_user_id: i64,
    ) -> Result<Vec<ApplicationWithAspirant>, ApplicationError> {
        self.application_repo
            .find_by_company_user(caller_user_id)
            .await
            .map_err(store_error("Failed to list company applications"))
    }

    async fn update_status(
        &self,
        caller_user_id: i64,
        application_id: i64,
        status: ApplicationStatus,
        internal_note: Option<String>,
    ) -> Result<Application, ApplicationError> {
        ensure_owner(
            self.owners.as_ref(),
            caller_user_id,
            OwnedEntity::Application(application_id),
        )
        .await?;

        let current = self
            .application_repo
            .find_by_id(application_id)
            .await
            .map_err(store_error("Failed to load application"))?
            .ok_or(ApplicationError::NotFound)?;

        self.policy.check(current.status, status)?;

        let updated = self
            .application_repo
            .update_status(application_id, status, internal_note)
            .await
            .map_err(|e| match e {
                AppError::NotFound(_) => ApplicationError::NotFound,
                e => store_error("Failed to update application status")(e),
            })?;

        tracing::info!(
            application_id,
            from = %current.status,
            to = %updated.status,
            "Application status changed"
        );

        Ok(updated)
    }
}
