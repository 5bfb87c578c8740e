//! Company profile entity and repository trait.
//!
//! Maps to the `company_profiles` table in the database schema.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::shared::error::AppError;

/// Description written into profiles created at registration.
pub const PLACEHOLDER_DESCRIPTION: &str = "Company profile pending completion";

/// Width of the `company_name` column, in characters.
pub const COMPANY_NAME_MAX_CHARS: usize = 150;

/// The employer side of the platform. At most one per user.
///
/// Maps to the `company_profiles` table:
/// - id: BIGINT PRIMARY KEY (Snowflake ID)
/// - user_id: BIGINT NOT NULL UNIQUE REFERENCES users(id) ON DELETE CASCADE
/// - company_name: VARCHAR(150) NOT NULL UNIQUE
/// - email: VARCHAR(255) NOT NULL UNIQUE
/// - description: TEXT NULL
/// - website, logo_url: VARCHAR(255) NULL
/// - created_at, updated_at: TIMESTAMPTZ NOT NULL DEFAULT NOW()
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompanyProfile {
    /// Snowflake ID (primary key)
    pub id: i64,

    /// Owning user
    pub user_id: i64,

    /// Public name (unique)
    pub company_name: String,

    /// Contact email (unique)
    pub email: String,

    pub description: Option<String>,
    pub website: Option<String>,
    pub logo_url: Option<String>,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl CompanyProfile {
    /// Minimal profile created at registration. Without a chosen name the
    /// account email stands in, since names are unique. Either is cut to
    /// the column width.
    pub fn placeholder(id: i64, user_id: i64, company_name: Option<&str>, email: &str) -> Self {
        let now = Utc::now();
        let company_name = company_name
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .unwrap_or(email)
            .chars()
            .take(COMPANY_NAME_MAX_CHARS)
            .collect();

        Self {
            id,
            user_id,
            company_name,
            email: email.to_string(),
            description: Some(PLACEHOLDER_DESCRIPTION.to_string()),
            website: None,
            logo_url: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// Still the untouched registration placeholder.
    pub fn is_placeholder(&self) -> bool {
        self.description.as_deref() == Some(PLACEHOLDER_DESCRIPTION)
            && self.website.is_none()
            && self.logo_url.is_none()
    }
}

/// Repository trait for CompanyProfile data access operations.
#[async_trait]
pub trait CompanyProfileRepository: Send + Sync {
    async fn find_by_id(&self, id: i64) -> Result<Option<CompanyProfile>, AppError>;

    /// Find the profile owned by a user.
    async fn find_by_user_id(&self, user_id: i64) -> Result<Option<CompanyProfile>, AppError>;

    /// Insert a profile. A taken name or email is a `Conflict`.
    async fn create(&self, profile: &CompanyProfile) -> Result<CompanyProfile, AppError>;

    /// Overwrite the mutable fields. A taken name or email is a `Conflict`.
    async fn update(&self, profile: &CompanyProfile) -> Result<CompanyProfile, AppError>;
}
