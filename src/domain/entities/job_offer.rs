//! Job offer entity and repository trait.
//!
//! Maps to the `job_offers` table in the database schema.

use std::fmt;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::CompanyProfile;
use crate::shared::error::AppError;

/// Publication state of an offer. Only `Open` offers are listed publicly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum JobOfferStatus {
    #[default]
    Open,
    Closed,
    Paused,
}

impl JobOfferStatus {
    /// Parse the database / request representation.
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "open" => Some(Self::Open),
            "closed" => Some(Self::Closed),
            "paused" => Some(Self::Paused),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Open => "open",
            Self::Closed => "closed",
            Self::Paused => "paused",
        }
    }
}

impl fmt::Display for JobOfferStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A posting owned by exactly one company profile.
///
/// Maps to the `job_offers` table:
/// - id: BIGINT PRIMARY KEY (Snowflake ID)
/// - company_id: BIGINT NOT NULL REFERENCES company_profiles(id) ON DELETE CASCADE
/// - title: VARCHAR(150) NOT NULL
/// - description: TEXT NOT NULL
/// - location: VARCHAR(150) NOT NULL
/// - salary_range: VARCHAR(100) NOT NULL
/// - status: VARCHAR(20) NOT NULL DEFAULT 'open'
/// - created_at: TIMESTAMPTZ NOT NULL DEFAULT NOW()
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobOffer {
    /// Snowflake ID (primary key)
    pub id: i64,

    /// Owning company profile
    pub company_id: i64,

    pub title: String,
    pub description: String,
    pub location: String,
    pub salary_range: String,

    #[serde(default)]
    pub status: JobOfferStatus,

    pub created_at: DateTime<Utc>,
}

impl JobOffer {
    pub fn is_open(&self) -> bool {
        self.status == JobOfferStatus::Open
    }
}

/// An offer joined with the company that posted it.
#[derive(Debug, Clone)]
pub struct JobOfferWithCompany {
    pub offer: JobOffer,
    pub company: CompanyProfile,
}

/// Repository trait for JobOffer data access operations.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait JobOfferRepository: Send + Sync {
    /// Find an offer by its Snowflake ID.
    async fn find_by_id(&self, id: i64) -> Result<Option<JobOffer>, AppError>;

    /// Find an offer together with its company.
    async fn find_with_company(&self, id: i64) -> Result<Option<JobOfferWithCompany>, AppError>;

    /// All open offers with their companies, newest first.
    async fn list_open(&self) -> Result<Vec<JobOfferWithCompany>, AppError>;

    /// All offers of one company, newest first.
    async fn find_by_company(&self, company_id: i64) -> Result<Vec<JobOffer>, AppError>;

    async fn create(&self, offer: &JobOffer) -> Result<JobOffer, AppError>;

    /// Overwrite the mutable fields of an offer.
    async fn update(&self, offer: &JobOffer) -> Result<JobOffer, AppError>;

    /// Delete an offer. Its applications cascade.
    async fn delete(&self, id: i64) -> Result<(), AppError>;
}
