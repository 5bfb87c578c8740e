//! Aspirant profile entity and repository trait.
//!
//! Maps to the `aspirant_profiles` table in the database schema.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{ExperienceItem, SkillItem};
use crate::shared::error::AppError;

/// The CV of a job seeker. At most one per user.
///
/// Maps to the `aspirant_profiles` table:
/// - id: BIGINT PRIMARY KEY (Snowflake ID)
/// - user_id: BIGINT NOT NULL UNIQUE REFERENCES users(id) ON DELETE CASCADE
/// - first_name, last_name: VARCHAR(100) NOT NULL
/// - email: VARCHAR(255) NOT NULL UNIQUE
/// - phone: VARCHAR(20) NULL
/// - bio, linkedin_url, portfolio_url, current_job_title, photo_url, cv_url: NULL
/// - created_at, updated_at: TIMESTAMPTZ NOT NULL DEFAULT NOW()
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AspirantProfile {
    /// Snowflake ID (primary key)
    pub id: i64,

    /// Owning user
    pub user_id: i64,

    pub first_name: String,
    pub last_name: String,

    /// Contact email (unique across aspirant profiles)
    pub email: String,

    pub phone: Option<String>,
    pub bio: Option<String>,
    pub linkedin_url: Option<String>,
    pub portfolio_url: Option<String>,
    pub current_job_title: Option<String>,
    pub photo_url: Option<String>,
    pub cv_url: Option<String>,

    /// Loaded with the profile; empty when freshly created
    #[serde(default)]
    pub skills: Vec<SkillItem>,

    /// Loaded with the profile; empty when freshly created
    #[serde(default)]
    pub experience: Vec<ExperienceItem>,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl AspirantProfile {
    /// Minimal profile created at registration: empty names, the account email.
    pub fn placeholder(id: i64, user_id: i64, email: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            id,
            user_id,
            first_name: String::new(),
            last_name: String::new(),
            email: email.into(),
            phone: None,
            bio: None,
            linkedin_url: None,
            portfolio_url: None,
            current_job_title: None,
            photo_url: None,
            cv_url: None,
            skills: Vec::new(),
            experience: Vec::new(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Still the untouched registration placeholder.
    pub fn is_placeholder(&self) -> bool {
        self.first_name.is_empty()
            && self.last_name.is_empty()
            && self.skills.is_empty()
            && self.experience.is_empty()
    }

    /// Full name as shown to companies reviewing applications.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
            .trim()
            .to_string()
    }
}

/// Repository trait for AspirantProfile data access operations.
#[async_trait]
pub trait AspirantProfileRepository: Send + Sync {
    /// Find the profile owned by a user, with skills and experience loaded.
    async fn find_by_user_id(&self, user_id: i64) -> Result<Option<AspirantProfile>, AppError>;

    /// Insert a profile together with its skills and experience in one transaction.
    async fn create(&self, profile: &AspirantProfile) -> Result<AspirantProfile, AppError>;

    /// Update the base fields. A `Some` collection replaces the stored one
    /// wholesale (delete then recreate) in the same transaction.
    async fn update(
        &self,
        profile: &AspirantProfile,
        skills: Option<Vec<SkillItem>>,
        experience: Option<Vec<ExperienceItem>>,
    ) -> Result<AspirantProfile, AppError>;

    /// Delete a profile. Skills, experience and applications cascade.
    async fn delete(&self, id: i64) -> Result<(), AppError>;
}
