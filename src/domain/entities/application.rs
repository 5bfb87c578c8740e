//! Application entity and repository trait.
//!
//! Maps to the `applications` table in the database schema.

use std::fmt;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{AspirantProfile, CompanyProfile, JobOffer};
use crate::shared::error::AppError;

/// Name of the constraint guarding one application per aspirant and offer.
pub const UNIQUE_APPLICATION_CONSTRAINT: &str = "uq_applications_aspirant_offer";

/// Review state of an application, set by the company that owns the offer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ApplicationStatus {
    #[default]
    Pending,
    Applied,
    InReview,
    Interview,
    Hired,
    Rejected,
}

impl ApplicationStatus {
    /// Parse the database / request representation.
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_ascii_uppercase().as_str() {
            "PENDING" => Some(Self::Pending),
            "APPLIED" => Some(Self::Applied),
            "IN_REVIEW" => Some(Self::InReview),
            "INTERVIEW" => Some(Self::Interview),
            "HIRED" => Some(Self::Hired),
            "REJECTED" => Some(Self::Rejected),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "PENDING",
            Self::Applied => "APPLIED",
            Self::InReview => "IN_REVIEW",
            Self::Interview => "INTERVIEW",
            Self::Hired => "HIRED",
            Self::Rejected => "REJECTED",
        }
    }

    /// A decision has been made on the application.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Hired | Self::Rejected)
    }
}

impl fmt::Display for ApplicationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An aspirant's application to a job offer.
///
/// Maps to the `applications` table:
/// - id: BIGINT PRIMARY KEY (Snowflake ID)
/// - aspirant_id: BIGINT NOT NULL REFERENCES aspirant_profiles(id) ON DELETE CASCADE
/// - job_offer_id: BIGINT NOT NULL REFERENCES job_offers(id) ON DELETE CASCADE
/// - status: VARCHAR(20) NOT NULL DEFAULT 'PENDING'
/// - cover_letter: TEXT NULL
/// - internal_note: TEXT NULL (visible to the company only)
/// - applied_at: TIMESTAMPTZ NOT NULL DEFAULT NOW()
/// - CONSTRAINT uq_applications_aspirant_offer UNIQUE (aspirant_id, job_offer_id)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Application {
    /// Snowflake ID (primary key)
    pub id: i64,

    /// Applying aspirant profile
    pub aspirant_id: i64,

    /// Target offer
    pub job_offer_id: i64,

    pub status: ApplicationStatus,

    pub cover_letter: Option<String>,

    /// Company-side note, never shown to the aspirant
    pub internal_note: Option<String>,

    pub applied_at: DateTime<Utc>,
}

impl Application {
    /// A freshly submitted application: `PENDING`, applied now.
    pub fn submit(
        id: i64,
        aspirant_id: i64,
        job_offer_id: i64,
        cover_letter: Option<String>,
    ) -> Self {
        Self {
            id,
            aspirant_id,
            job_offer_id,
            status: ApplicationStatus::Pending,
            cover_letter,
            internal_note: None,
            applied_at: Utc::now(),
        }
    }
}

/// An application as the aspirant sees it: with the offer and its company.
#[derive(Debug, Clone)]
pub struct ApplicationWithOffer {
    pub application: Application,
    pub job_offer: JobOffer,
    pub company: CompanyProfile,
}

/// An application as the company sees it: with the offer and the applicant.
#[derive(Debug, Clone)]
pub struct ApplicationWithAspirant {
    pub application: Application,
    pub job_offer: JobOffer,
    pub aspirant: AspirantProfile,
}

/// Repository trait for Application data access operations.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ApplicationRepository: Send + Sync {
    /// Find an application by its Snowflake ID.
    async fn find_by_id(&self, id: i64) -> Result<Option<Application>, AppError>;

    /// Check whether the aspirant already applied to the offer.
    async fn exists_for(&self, aspirant_id: i64, job_offer_id: i64) -> Result<bool, AppError>;

    /// Insert an application.
    ///
    /// A second row for the same (aspirant, offer) pair is rejected by the
    /// database and reported as `Conflict`; a vanished offer or profile as
    /// `NotFound`.
    async fn create(&self, application: &Application) -> Result<Application, AppError>;

    /// Applications of one aspirant with offer and company, newest first.
    async fn find_by_aspirant(&self, aspirant_id: i64)
        -> Result<Vec<ApplicationWithOffer>, AppError>;

    /// Applications to every offer of the company owned by `user_id`, with
    /// the applicant attached, newest first.
    async fn find_by_company_user(
        &self,
        user_id: i64,
    ) -> Result<Vec<ApplicationWithAspirant>, AppError>;

    /// Overwrite the status and, when given, the internal note.
    async fn update_status(
        &self,
        id: i64,
        status: ApplicationStatus,
        internal_note: Option<String>,
    ) -> Result<Application, AppError>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case("PENDING", Some(ApplicationStatus::Pending))]
    #[test_case("applied", Some(ApplicationStatus::Applied))]
    #[test_case("IN_REVIEW", Some(ApplicationStatus::InReview))]
    #[test_case("Interview", Some(ApplicationStatus::Interview))]
    #[test_case("HIRED", Some(ApplicationStatus::Hired))]
    #[test_case("REJECTED", Some(ApplicationStatus::Rejected))]
    #[test_case("IN REVIEW", None)]
    #[test_case("", None)]
    fn test_status_parse(input: &str, expected: Option<ApplicationStatus>) {
        assert_eq!(ApplicationStatus::parse(input), expected);
    }

    #[test]
    fn test_status_serde_matches_db_representation() {
        let json = serde_json::to_string(&ApplicationStatus::InReview).unwrap();
        assert_eq!(json, "\"IN_REVIEW\"");

        let status: ApplicationStatus = serde_json::from_str("\"HIRED\"").unwrap();
        assert_eq!(status, ApplicationStatus::Hired);
    }

    #[test]
    fn test_terminal_statuses() {
        assert!(ApplicationStatus::Hired.is_terminal());
        assert!(ApplicationStatus::Rejected.is_terminal());
        assert!(!ApplicationStatus::Pending.is_terminal());
        assert!(!ApplicationStatus::Interview.is_terminal());
    }

    #[test]
    fn test_submit_starts_pending() {
        let app = Application::submit(1, 2, 3, Some("Hello".into()));
        assert_eq!(app.status, ApplicationStatus::Pending);
        assert_eq!(app.cover_letter.as_deref(), Some("Hello"));
        assert!(app.internal_note.is_none());
    }
}
