//! Job Offer Service
//!
//! Public catalog of open offers and company-side offer management.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;

use crate::domain::services::{ensure_owner, OwnedEntity, OwnershipError, OwnershipResolver};
use crate::domain::{
    CompanyProfileRepository, JobOffer, JobOfferRepository, JobOfferStatus, JobOfferWithCompany,
};
use crate::shared::error::AppError;
use crate::shared::snowflake::SnowflakeGenerator;

/// Job offer service trait
#[async_trait]
pub trait JobOfferService: Send + Sync {
    /// Open offers with their companies, newest first.
    async fn list_open(&self) -> Result<Vec<JobOfferWithCompany>, JobOfferError>;

    /// A single offer, whatever its status.
    async fn get(&self, offer_id: i64) -> Result<JobOfferWithCompany, JobOfferError>;

    /// Publish an offer under the caller's company profile.
    async fn create(
        &self,
        caller_user_id: i64,
        request: CreateJobOfferDto,
    ) -> Result<JobOffer, JobOfferError>;

    async fn update(
        &self,
        caller_user_id: i64,
        offer_id: i64,
        update: UpdateJobOfferDto,
    ) -> Result<JobOffer, JobOfferError>;

    /// Delete an offer. Its applications go with it.
    async fn delete(&self, caller_user_id: i64, offer_id: i64) -> Result<(), JobOfferError>;
}

/// Create job offer request
#[derive(Debug, Clone)]
pub struct CreateJobOfferDto {
    pub title: String,
    pub description: String,
    pub location: String,
    pub salary_range: String,
    pub status: Option<JobOfferStatus>,
}

/// Update job offer request; `None` keeps the stored value
#[derive(Debug, Clone, Default)]
pub struct UpdateJobOfferDto {
    pub title: Option<String>,
    pub description: Option<String>,
    pub location: Option<String>,
    pub salary_range: Option<String>,
    pub status: Option<JobOfferStatus>,
}

/// Job offer service errors
#[derive(Debug, thiserror::Error)]
pub enum JobOfferError {
    #[error("Job offer not found")]
    NotFound,

    #[error("A company profile is required to publish offers")]
    ProfileMissing,

    #[error("You do not own this job offer")]
    Forbidden,

    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<JobOfferError> for AppError {
    fn from(e: JobOfferError) -> Self {
        match e {
            JobOfferError::NotFound => AppError::NotFound(e.to_string()),
            JobOfferError::ProfileMissing => AppError::BadRequest(e.to_string()),
            JobOfferError::Forbidden => AppError::Forbidden(e.to_string()),
            JobOfferError::Internal(msg) => AppError::Internal(msg),
        }
    }
}

impl From<OwnershipError> for JobOfferError {
    fn from(e: OwnershipError) -> Self {
        match e {
            OwnershipError::NotFound(_) => JobOfferError::NotFound,
            OwnershipError::Forbidden(_) => JobOfferError::Forbidden,
            OwnershipError::Store(e) => store_error("Failed to resolve job offer owner")(e),
        }
    }
}

fn store_error(context: &'static str) -> impl Fn(AppError) -> JobOfferError {
    move |e| {
        tracing::error!(error = %e, "{}", context);
        JobOfferError::Internal(e.to_string())
    }
}

/// JobOfferService implementation
pub struct JobOfferServiceImpl<J, C, O>
where
    J: JobOfferRepository,
    C: CompanyProfileRepository,
    O: OwnershipResolver,
{
    offer_repo: Arc<J>,
    company_repo: Arc<C>,
    owners: Arc<O>,
    id_generator: Arc<SnowflakeGenerator>,
}

impl<J, C, O> JobOfferServiceImpl<J, C, O>
where
    J: JobOfferRepository,
    C: CompanyProfileRepository,
    O: OwnershipResolver,
{
    pub fn new(
        offer_repo: Arc<J>,
        company_repo: Arc<C>,
        owners: Arc<O>,
        id_generator: Arc<SnowflakeGenerator>,
    ) -> Self {
        Self {
            offer_repo,
            company_repo,
            owners,
            id_generator,
        }
    }

    async fn load(&self, offer_id: i64) -> Result<JobOffer, JobOfferError> {
        self.offer_repo
            .find_by_id(offer_id)
            .await
            .map_err(store_error("Failed to load job offer"))?
            .ok_or(JobOfferError::NotFound)
    }
}

#[async_trait]
impl<J, C, O> JobOfferService for JobOfferServiceImpl<J, C, O>
where
    J: JobOfferRepository + 'static,
    C: CompanyProfileRepository + 'static,
    O: OwnershipResolver + 'static,
{
    async fn list_open(&self) -> Result<Vec<JobOfferWithCompany>, JobOfferError> {
        self.offer_repo
            .list_open()
            .await
            .map_err(store_error("Failed to list open job offers"))
    }

    async fn get(&self, offer_id: i64) -> Result<JobOfferWithCompany, JobOfferError> {
        self.offer_repo
            .find_with_company(offer_id)
            .await
            .map_err(store_error("Failed to load job offer"))?
            .ok_or(JobOfferError::NotFound)
    }

    async fn create(
        &self,
        caller_user_id: i64,
        request: CreateJobOfferDto,
    ) -> Result<JobOffer, JobOfferError> {
        let company = self
            .company_repo
            .find_by_user_id(caller_user_id)
            .await
            .map_err(store_error("Failed to load company profile"))?
            .ok_or(JobOfferError::ProfileMissing)?;

        let offer = JobOffer {
            id: self.id_generator.generate(),
            company_id: company.id,
            title: request.title,
            description: request.description,
            location: request.location,
            salary_range: request.salary_range,
            status: request.status.unwrap_or_default(),
            created_at: Utc::now(),
        };

        let created = self
            .offer_repo
            .create(&offer)
            .await
            .map_err(store_error("Failed to create job offer"))?;

        tracing::info!(offer_id = created.id, company_id = company.id, "Job offer published");

        Ok(created)
    }

    async fn update(
        &self,
        caller_user_id: i64,
        offer_id: i64,
        update: UpdateJobOfferDto,
    ) -> Result<JobOffer, JobOfferError> {
        ensure_owner(self.owners.as_ref(), caller_user_id, OwnedEntity::JobOffer(offer_id)).await?;

        let mut offer = self.load(offer_id).await?;

        if let Some(title) = update.title {
            offer.title = title;
        }
        if let Some(description) = update.description {
            offer.description = description;
        }
        if let Some(location) = update.location {
            offer.location = location;
        }
        if let Some(salary_range) = update.salary_range {
            offer.salary_range = salary_range;
        }
        if let Some(status) = update.status {
            offer.status = status;
        }

        self.offer_repo.update(&offer).await.map_err(|e| match e {
            AppError::NotFound(_) => JobOfferError::NotFound,
            e => store_error("Failed to update job offer")(e),
        })
    }

    async fn delete(&self, caller_user_id: i64, offer_id: i64) -> Result<(), JobOfferError> {
        ensure_owner(self.owners.as_ref(), caller_user_id, OwnedEntity::JobOffer(offer_id)).await?;

        self.offer_repo.delete(offer_id).await.map_err(|e| match e {
            AppError::NotFound(_) => JobOfferError::NotFound,
            e => store_error("Failed to delete job offer")(e),
        })?;

        tracing::info!(offer_id, "Job offer deleted");
        Ok(())
    }
}
