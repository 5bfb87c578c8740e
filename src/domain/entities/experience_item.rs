//! Experience item entity and repository trait.
//!
//! Maps to the `experience_items` table in the database schema.

use async_trait::async_trait;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::shared::error::AppError;

/// A past or current position on an aspirant's CV.
///
/// Maps to the `experience_items` table:
/// - id: BIGINT PRIMARY KEY (Snowflake ID)
/// - profile_id: BIGINT NOT NULL REFERENCES aspirant_profiles(id) ON DELETE CASCADE
/// - title: VARCHAR(150) NOT NULL
/// - company: VARCHAR(100) NOT NULL
/// - start_date: DATE NOT NULL
/// - end_date: DATE NULL (open-ended while current)
/// - description: TEXT NULL
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExperienceItem {
    pub id: i64,
    pub profile_id: i64,
    pub title: String,
    pub company: String,
    pub start_date: NaiveDate,
    pub end_date: Option<NaiveDate>,
    pub description: Option<String>,
}

impl ExperienceItem {
    /// Still held: no end date.
    pub fn is_current(&self) -> bool {
        self.end_date.is_none()
    }

    /// End date, when present, must not precede the start date.
    pub fn has_valid_range(&self) -> bool {
        self.end_date.map_or(true, |end| end >= self.start_date)
    }
}

/// Repository trait for ExperienceItem data access operations.
#[async_trait]
pub trait ExperienceItemRepository: Send + Sync {
    async fn find_by_id(&self, id: i64) -> Result<Option<ExperienceItem>, AppError>;

    /// All entries of a profile, most recent start first.
    async fn find_by_profile(&self, profile_id: i64) -> Result<Vec<ExperienceItem>, AppError>;

    async fn create(&self, item: &ExperienceItem) -> Result<ExperienceItem, AppError>;

    async fn update(&self, item: &ExperienceItem) -> Result<ExperienceItem, AppError>;

    async fn delete(&self, id: i64) -> Result<(), AppError>;
}
