//! Company Profile Service

use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;

use super::aspirant_profile_service::{store_error, ProfileError};
use crate::domain::{
    CompanyProfile, CompanyProfileRepository, JobOffer, JobOfferRepository, UserRole,
};
use crate::shared::snowflake::SnowflakeGenerator;

/// Company profile service trait
#[async_trait]
pub trait CompanyProfileService: Send + Sync {
    /// Create the caller's company profile, or fill in the registration
    /// placeholder.
    async fn create(
        &self,
        caller_user_id: i64,
        caller_role: UserRole,
        input: CompanyProfileInput,
    ) -> Result<CompanyProfile, ProfileError>;

    async fn get_mine(&self, caller_user_id: i64) -> Result<CompanyProfileWithOffers, ProfileError>;

    async fn get(&self, profile_id: i64) -> Result<CompanyProfileWithOffers, ProfileError>;

    async fn update(
        &self,
        caller_user_id: i64,
        patch: CompanyProfilePatch,
    ) -> Result<CompanyProfile, ProfileError>;
}

#[derive(Debug, Clone)]
pub struct CompanyProfileInput {
    pub company_name: String,
    pub email: String,
    pub description: Option<String>,
    pub website: Option<String>,
    pub logo_url: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct CompanyProfilePatch {
    pub company_name: Option<String>,
    pub email: Option<String>,
    pub description: Option<String>,
    pub website: Option<String>,
    pub logo_url: Option<String>,
}

/// A company together with every offer it posted, whatever the status.
#[derive(Debug, Clone)]
pub struct CompanyProfileWithOffers {
    pub profile: CompanyProfile,
    pub offers: Vec<JobOffer>,
}

/// CompanyProfileService implementation
pub struct CompanyProfileServiceImpl<C, J>
where
    C: CompanyProfileRepository,
    J: JobOfferRepository,
{
    company_repo: Arc<C>,
    offer_repo: Arc<J>,
    id_generator: Arc<SnowflakeGenerator>,
}

impl<C, J> CompanyProfileServiceImpl<C, J>
where
    C: CompanyProfileRepository,
    J: JobOfferRepository,
{
    pub fn new(company_repo: Arc<C>, offer_repo: Arc<J>, id_generator: Arc<SnowflakeGenerator>) -> Self {
        Self {
            company_repo,
            offer_repo,
            id_generator,
        }
    }

    async fn with_offers(&self, profile: CompanyProfile) -> Result<CompanyProfileWithOffers, ProfileError> {
        let offers = self
            .offer_repo
            .find_by_company(profile.id)
            .await
            .map_err(store_error("Failed to load company offers"))?;

        Ok(CompanyProfileWithOffers { profile, offers })
    }

    async fn find_mine(&self, user_id: i64) -> Result<Option<CompanyProfile>, ProfileError> {
        self.company_repo
            .find_by_user_id(user_id)
            .await
            .map_err(store_error("Failed to load company profile"))
    }
}

#[async_trait]
impl<C, J> CompanyProfileService for CompanyProfileServiceImpl<C, J>
where
    C: CompanyProfileRepository + 'static,
    J: JobOfferRepository + 'static,
{
    async fn create(
        &self,
        caller_user_id: i64,
        caller_role: UserRole,
        input: CompanyProfileInput,
    ) -> Result<CompanyProfile, ProfileError> {
        if caller_role != UserRole::Company {
            return Err(ProfileError::Forbidden);
        }

        let existing = self.find_mine(caller_user_id).await?;
        if existing.as_ref().is_some_and(|p| !p.is_placeholder()) {
            return Err(ProfileError::AlreadyExists);
        }

        let now = Utc::now();
        let profile = CompanyProfile {
            id: existing
                .as_ref()
                .map(|p| p.id)
                .unwrap_or_else(|| self.id_generator.generate()),
            user_id: caller_user_id,
            company_name: input.company_name,
            email: input.email,
            description: input.description,
            website: input.website,
            logo_url: input.logo_url,
            created_at: existing.as_ref().map(|p| p.created_at).unwrap_or(now),
            updated_at: now,
        };

        let result = if existing.is_some() {
            self.company_repo.update(&profile).await
        } else {
            self.company_repo.create(&profile).await
        };
        let saved = result.map_err(store_error("Failed to save company profile"))?;

        tracing::info!(profile_id = saved.id, user_id = caller_user_id, "Company profile saved");
        Ok(saved)
    }

    async fn get_mine(&self, caller_user_id: i64) -> Result<CompanyProfileWithOffers, ProfileError> {
        let profile = self
            .find_mine(caller_user_id)
            .await?
            .ok_or(ProfileError::NotFound)?;

        self.with_offers(profile).await
    }

    async fn get(&self, profile_id: i64) -> Result<CompanyProfileWithOffers, ProfileError> {
        let profile = self
            .company_repo
            .find_by_id(profile_id)
            .await
            .map_err(store_error("Failed to load company profile"))?
            .ok_or(ProfileError::NotFound)?;

        self.with_offers(profile).await
    }

    async fn update(
        &self,
        caller_user_id: i64,
        patch: CompanyProfilePatch,
    ) -> Result<CompanyProfile, ProfileError> {
        let mut profile = self
            .find_mine(caller_user_id)
            .await?
            .ok_or(ProfileError::NotFound)?;

        if let Some(company_name) = patch.company_name {
            profile.company_name = company_name;
        }
        if let Some(email) = patch.email {
            profile.email = email;
        }
        if patch.description.is_some() {
            profile.description = patch.description;
        }
        if patch.website.is_some() {
            profile.website = patch.website;
        }
        if patch.logo_url.is_some() {
            profile.logo_url = patch.logo_url;
        }
        profile.updated_at = Utc::now();

        self.company_repo
            .update(&profile)
            .await
            .map_err(store_error("Failed to update company profile"))
    }
}
