//! Aspirant Profile Service
//!
//! The caller's CV: base data plus its skill and experience collections.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::{NaiveDate, Utc};

use crate::domain::services::{ensure_owner, OwnedEntity, OwnershipError, OwnershipResolver};
use crate::domain::{
    AspirantProfile, AspirantProfileRepository, ExperienceItem, ExperienceItemRepository,
    SkillItem, SkillItemRepository, SkillLevel,
};
use crate::shared::error::AppError;
use crate::shared::snowflake::SnowflakeGenerator;

/// Aspirant profile service trait
#[async_trait]
pub trait AspirantProfileService: Send + Sync {
    async fn get_mine(&self, caller_user_id: i64) -> Result<AspirantProfile, ProfileError>;

    /// Create the caller's profile, or fill in the placeholder left by
    /// registration.
    async fn create(
        &self,
        caller_user_id: i64,
        input: AspirantProfileInput,
    ) -> Result<AspirantProfile, ProfileError>;

    /// Partial update. A provided collection replaces the stored one.
    async fn update(
        &self,
        caller_user_id: i64,
        patch: AspirantProfilePatch,
    ) -> Result<AspirantProfile, ProfileError>;

    async fn delete(&self, caller_user_id: i64) -> Result<(), ProfileError>;

    async fn list_skills(&self, caller_user_id: i64) -> Result<Vec<SkillItem>, ProfileError>;

    async fn add_skill(&self, caller_user_id: i64, skill: NewSkill) -> Result<SkillItem, ProfileError>;

    async fn update_skill(
        &self,
        caller_user_id: i64,
        skill_id: i64,
        patch: SkillPatch,
    ) -> Result<SkillItem, ProfileError>;

    async fn remove_skill(&self, caller_user_id: i64, skill_id: i64) -> Result<(), ProfileError>;

    async fn list_experience(&self, caller_user_id: i64) -> Result<Vec<ExperienceItem>, ProfileError>;

    async fn add_experience(
        &self,
        caller_user_id: i64,
        item: NewExperience,
    ) -> Result<ExperienceItem, ProfileError>;

    async fn update_experience(
        &self,
        caller_user_id: i64,
        item_id: i64,
        patch: ExperiencePatch,
    ) -> Result<ExperienceItem, ProfileError>;

    async fn remove_experience(&self, caller_user_id: i64, item_id: i64) -> Result<(), ProfileError>;
}

/// Full aspirant profile as submitted on creation
#[derive(Debug, Clone)]
pub struct AspirantProfileInput {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: Option<String>,
    pub bio: Option<String>,
    pub linkedin_url: Option<String>,
    pub portfolio_url: Option<String>,
    pub current_job_title: Option<String>,
    pub photo_url: Option<String>,
    pub cv_url: Option<String>,
    pub skills: Vec<NewSkill>,
    pub experience: Vec<NewExperience>,
}

/// Partial aspirant profile update; `None` keeps the stored value
#[derive(Debug, Clone, Default)]
pub struct AspirantProfilePatch {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub bio: Option<String>,
    pub linkedin_url: Option<String>,
    pub portfolio_url: Option<String>,
    pub current_job_title: Option<String>,
    pub photo_url: Option<String>,
    pub cv_url: Option<String>,
    pub skills: Option<Vec<NewSkill>>,
    pub experience: Option<Vec<NewExperience>>,
}

#[derive(Debug, Clone)]
pub struct NewSkill {
    pub skill_name: String,
    pub level: SkillLevel,
}

#[derive(Debug, Clone, Default)]
pub struct SkillPatch {
    pub skill_name: Option<String>,
    pub level: Option<SkillLevel>,
}

#[derive(Debug, Clone)]
pub struct NewExperience {
    pub title: String,
    pub company: String,
    pub start_date: NaiveDate,
    pub end_date: Option<NaiveDate>,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct ExperiencePatch {
    pub title: Option<String>,
    pub company: Option<String>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub description: Option<String>,
}

/// Profile service errors, shared by the aspirant and company managers
#[derive(Debug, thiserror::Error)]
pub enum ProfileError {
    #[error("Profile not found")]
    NotFound,

    #[error("{0} not found")]
    ItemNotFound(&'static str),

    #[error("Profile already exists")]
    AlreadyExists,

    #[error("Permission denied")]
    Forbidden,

    #[error("Experience cannot end before it starts")]
    InvalidDateRange,

    #[error("{0}")]
    Conflict(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<ProfileError> for AppError {
    fn from(e: ProfileError) -> Self {
        match e {
            ProfileError::NotFound | ProfileError::ItemNotFound(_) => {
                AppError::NotFound(e.to_string())
            }
            ProfileError::AlreadyExists | ProfileError::Conflict(_) => {
                AppError::Conflict(e.to_string())
            }
            ProfileError::Forbidden => AppError::Forbidden(e.to_string()),
            ProfileError::InvalidDateRange => AppError::BadRequest(e.to_string()),
            ProfileError::Internal(msg) => AppError::Internal(msg),
        }
    }
}

impl From<OwnershipError> for ProfileError {
    fn from(e: OwnershipError) -> Self {
        match e {
            OwnershipError::NotFound(entity) => ProfileError::ItemNotFound(entity.kind()),
            OwnershipError::Forbidden(_) => ProfileError::Forbidden,
            OwnershipError::Store(e) => store_error("Failed to resolve profile item owner")(e),
        }
    }
}

pub(crate) fn store_error(context: &'static str) -> impl Fn(AppError) -> ProfileError {
    move |e| match e {
        AppError::Conflict(msg) => ProfileError::Conflict(msg),
        e => {
            tracing::error!(error = %e, "{}", context);
            ProfileError::Internal(e.to_string())
        }
    }
}

/// AspirantProfileService implementation
pub struct AspirantProfileServiceImpl<P, S, E, O>
where
    P: AspirantProfileRepository,
    S: SkillItemRepository,
    E: ExperienceItemRepository,
    O: OwnershipResolver,
{
    profile_repo: Arc<P>,
    skill_repo: Arc<S>,
    experience_repo: Arc<E>,
    owners: Arc<O>,
    id_generator: Arc<SnowflakeGenerator>,
}

impl<P, S, E, O> AspirantProfileServiceImpl<P, S, E, O>
where
    P: AspirantProfileRepository,
    S: SkillItemRepository,
    E: ExperienceItemRepository,
    O: OwnershipResolver,
{
    pub fn new(
        profile_repo: Arc<P>,
        skill_repo: Arc<S>,
        experience_repo: Arc<E>,
        owners: Arc<O>,
        id_generator: Arc<SnowflakeGenerator>,
    ) -> Self {
        Self {
            profile_repo,
            skill_repo,
            experience_repo,
            owners,
            id_generator,
        }
    }

    async fn find_profile(&self, user_id: i64) -> Result<Option<AspirantProfile>, ProfileError> {
        self.profile_repo
            .find_by_user_id(user_id)
            .await
            .map_err(store_error("Failed to load aspirant profile"))
    }

    async fn require_profile(&self, user_id: i64) -> Result<AspirantProfile, ProfileError> {
        self.find_profile(user_id).await?.ok_or(ProfileError::NotFound)
    }

    fn build_skills(&self, profile_id: i64, skills: Vec<NewSkill>) -> Vec<SkillItem> {
        skills
            .into_iter()
            .map(|skill| SkillItem {
                id: self.id_generator.generate(),
                profile_id,
                skill_name: skill.skill_name,
                level: skill.level,
            })
            .collect()
    }

    fn experience_item(
        &self,
        profile_id: i64,
        item: NewExperience,
    ) -> Result<ExperienceItem, ProfileError> {
        let item = ExperienceItem {
            id: self.id_generator.generate(),
            profile_id,
            title: item.title,
            company: item.company,
            start_date: item.start_date,
            end_date: item.end_date,
            description: item.description,
        };
        if !item.has_valid_range() {
            return Err(ProfileError::InvalidDateRange);
        }
        Ok(item)
    }

    fn build_experience(
        &self,
        profile_id: i64,
        items: Vec<NewExperience>,
    ) -> Result<Vec<ExperienceItem>, ProfileError> {
        items
            .into_iter()
            .map(|item| self.experience_item(profile_id, item))
            .collect()
    }
}

#[async_trait]
impl<P, S, E, O> AspirantProfileService for AspirantProfileServiceImpl<P, S, E, O>
where
    P: AspirantProfileRepository + 'static,
    S: SkillItemRepository + 'static,
    E: ExperienceItemRepository + 'static,
    O: OwnershipResolver + 'static,
{
    async fn get_mine(&self, caller_user_id: i64) -> Result<AspirantProfile, ProfileError> {
        self.require_profile(caller_user_id).await
    }

    async fn create(
        &self,
        caller_user_id: i64,
        input: AspirantProfileInput,
    ) -> Result<AspirantProfile, ProfileError> {
        let existing = self.find_profile(caller_user_id).await?;
        if existing.as_ref().is_some_and(|p| !p.is_placeholder()) {
            return Err(ProfileError::AlreadyExists);
        }

        let now = Utc::now();
        let (id, created_at) = existing
            .as_ref()
            .map(|p| (p.id, p.created_at))
            .unwrap_or_else(|| (self.id_generator.generate(), now));

        let skills = self.build_skills(id, input.skills);
        let experience = self.build_experience(id, input.experience)?;

        let mut profile = AspirantProfile {
            id,
            user_id: caller_user_id,
            first_name: input.first_name,
            last_name: input.last_name,
            email: input.email,
            phone: input.phone,
            bio: input.bio,
            linkedin_url: input.linkedin_url,
            portfolio_url: input.portfolio_url,
            current_job_title: input.current_job_title,
            photo_url: input.photo_url,
            cv_url: input.cv_url,
            skills: Vec::new(),
            experience: Vec::new(),
            created_at,
            updated_at: now,
        };

        let result = if existing.is_some() {
            self.profile_repo
                .update(&profile, Some(skills), Some(experience))
                .await
        } else {
            profile.skills = skills;
            profile.experience = experience;
            self.profile_repo.create(&profile).await
        };
        let saved = result.map_err(store_error("Failed to save aspirant profile"))?;

        tracing::info!(profile_id = saved.id, user_id = caller_user_id, "Aspirant profile saved");
        Ok(saved)
    }

    async fn update(
        &self,
        caller_user_id: i64,
        patch: AspirantProfilePatch,
    ) -> Result<AspirantProfile, ProfileError> {
        let mut profile = self.require_profile(caller_user_id).await?;

        if let Some(first_name) = patch.first_name {
            profile.first_name = first_name;
        }
        if let Some(last_name) = patch.last_name {
            profile.last_name = last_name;
        }
        if let Some(email) = patch.email {
            profile.email = email;
        }
        if patch.phone.is_some() {
            profile.phone = patch.phone;
        }
        if patch.bio.is_some() {
            profile.bio = patch.bio;
        }
        if patch.linkedin_url.is_some() {
            profile.linkedin_url = patch.linkedin_url;
        }
        if patch.portfolio_url.is_some() {
            profile.portfolio_url = patch.portfolio_url;
        }
        if patch.current_job_title.is_some() {
            profile.current_job_title = patch.current_job_title;
        }
        if patch.photo_url.is_some() {
            profile.photo_url = patch.photo_url;
        }
        if patch.cv_url.is_some() {
            profile.cv_url = patch.cv_url;
        }

        let skills = patch.skills.map(|s| self.build_skills(profile.id, s));
        let experience = patch
            .experience
            .map(|items| self.build_experience(profile.id, items))
            .transpose()?;

        self.profile_repo
            .update(&profile, skills, experience)
            .await
            .map_err(|e| match e {
                AppError::NotFound(_) => ProfileError::NotFound,
                e => store_error("Failed to update aspirant profile")(e),
            })
    }

    async fn delete(&self, caller_user_id: i64) -> Result<(), ProfileError> {
        let profile = self.require_profile(caller_user_id).await?;

        self.profile_repo
            .delete(profile.id)
            .await
            .map_err(|e| match e {
                AppError::NotFound(_) => ProfileError::NotFound,
                e => store_error("Failed to delete aspirant profile")(e),
            })?;

        tracing::info!(profile_id = profile.id, "Aspirant profile deleted");
        Ok(())
    }

    async fn list_skills(&self, caller_user_id: i64) -> Result<Vec<SkillItem>, ProfileError> {
        let Some(profile) = self.find_profile(caller_user_id).await? else {
            return Ok(Vec::new());
        };

        self.skill_repo
            .find_by_profile(profile.id)
            .await
            .map_err(store_error("Failed to list skills"))
    }

    async fn add_skill(&self, caller_user_id: i64, skill: NewSkill) -> Result<SkillItem, ProfileError> {
        let profile = self.require_profile(caller_user_id).await?;

        let item = SkillItem {
            id: self.id_generator.generate(),
            profile_id: profile.id,
            skill_name: skill.skill_name,
            level: skill.level,
        };

        self.skill_repo
            .create(&item)
            .await
            .map_err(store_error("Failed to add skill"))
    }

    async fn update_skill(
        &self,
        caller_user_id: i64,
        skill_id: i64,
        patch: SkillPatch,
    ) -> Result<SkillItem, ProfileError> {
        ensure_owner(self.owners.as_ref(), caller_user_id, OwnedEntity::SkillItem(skill_id)).await?;

        let mut skill = self
            .skill_repo
            .find_by_id(skill_id)
            .await
            .map_err(store_error("Failed to load skill"))?
            .ok_or(ProfileError::ItemNotFound("Skill"))?;

        if let Some(name) = patch.skill_name {
            skill.skill_name = name;
        }
        if let Some(level) = patch.level {
            skill.level = level;
        }

        self.skill_repo.update(&skill).await.map_err(|e| match e {
            AppError::NotFound(_) => ProfileError::ItemNotFound("Skill"),
            e => store_error("Failed to update skill")(e),
        })
    }

    async fn remove_skill(&self, caller_user_id: i64, skill_id: i64) -> Result<(), ProfileError> {
        ensure_owner(self.owners.as_ref(), caller_user_id, OwnedEntity::SkillItem(skill_id)).await?;

        self.skill_repo.delete(skill_id).await.map_err(|e| match e {
            AppError::NotFound(_) => ProfileError::ItemNotFound("Skill"),
            e => store_error("Failed to remove skill")(e),
        })
    }

    async fn list_experience(&self, caller_user_id: i64) -> Result<Vec<ExperienceItem>, ProfileError> {
        let Some(profile) = self.find_profile(caller_user_id).await? else {
            return Ok(Vec::new());
        };

        self.experience_repo
            .find_by_profile(profile.id)
            .await
            .map_err(store_error("Failed to list experience"))
    }

    async fn add_experience(
        &self,
        caller_user_id: i64,
        item: NewExperience,
    ) -> Result<ExperienceItem, ProfileError> {
        let profile = self.require_profile(caller_user_id).await?;

        let item = self.experience_item(profile.id, item)?;

        self.experience_repo
            .create(&item)
            .await
            .map_err(store_error("Failed to add experience"))
    }

    async fn update_experience(
        &self,
        caller_user_id: i64,
        item_id: i64,
        patch: ExperiencePatch,
    ) -> Result<ExperienceItem, ProfileError> {
        ensure_owner(
            self.owners.as_ref(),
            caller_user_id,
            OwnedEntity::ExperienceItem(item_id),
        )
        .await?;

        let mut item = self
            .experience_repo
            .find_by_id(item_id)
            .await
            .map_err(store_error("Failed to load experience item"))?
            .ok_or(ProfileError::ItemNotFound("Experience item"))?;

        if let Some(title) = patch.title {
            item.title = title;
        }
        if let Some(company) = patch.company {
            item.company = company;
        }
        if let Some(start_date) = patch.start_date {
            item.start_date = start_date;
        }
        if patch.end_date.is_some() {
            item.end_date = patch.end_date;
        }
        if patch.description.is_some() {
            item.description = patch.description;
        }

        if !item.has_valid_range() {
            return Err(ProfileError::InvalidDateRange);
        }

        self.experience_repo.update(&item).await.map_err(|e| match e {
            AppError::NotFound(_) => ProfileError::ItemNotFound("Experience item"),
            e => store_error("Failed to update experience item")(e),
        })
    }

    async fn remove_experience(&self, caller_user_id: i64, item_id: i64) -> Result<(), ProfileError> {
        ensure_owner(
            self.owners.as_ref(),
            caller_user_id,
            OwnedEntity::ExperienceItem(item_id),
        )
        .await?;

        self.experience_repo.delete(item_id).await.map_err(|e| match e {
            AppError::NotFound(_) => ProfileError::ItemNotFound("Experience item"),
            e => store_error("Failed to remove experience item")(e),
        })
    }
}
