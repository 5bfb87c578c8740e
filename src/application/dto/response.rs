//! Response DTOs
//!
//! Data structures for API response bodies. IDs are rendered as strings so
//! 64-bit snowflakes survive JavaScript clients.

use serde::Serialize;

use crate::application::services::{AuthSession, CompanyProfileWithOffers};
use crate::domain::{
    Application, ApplicationWithAspirant, ApplicationWithOffer, AspirantProfile, CompanyProfile,
    ExperienceItem, JobOffer, JobOfferWithCompany, SkillItem, User,
};

/// User response
#[derive(Debug, Serialize)]
pub struct UserResponse {
    pub id: String,
    pub email: String,
    pub role: String,
    pub created_at: String,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id.to_string(),
            email: user.email,
            role: user.role.as_str().to_string(),
            created_at: user.created_at.to_rfc3339(),
        }
    }
}

/// Registration and login response
#[derive(Debug, Serialize)]
pub struct AuthResponse {
    pub user: UserResponse,
    pub access_token: String,
    pub expires_in: i64,
    pub token_type: String,
}

impl From<AuthSession> for AuthResponse {
    fn from(session: AuthSession) -> Self {
        Self {
            user: UserResponse::from(session.user),
            access_token: session.tokens.access_token,
            expires_in: session.tokens.expires_in,
            token_type: session.tokens.token_type,
        }
    }
}

/// Skill response
#[derive(Debug, Serialize)]
pub struct SkillResponse {
    pub id: String,
    pub skill_name: String,
    pub level: String,
}

impl From<SkillItem> for SkillResponse {
    fn from(skill: SkillItem) -> Self {
        Self {
            id: skill.id.to_string(),
            skill_name: skill.skill_name,
            level: skill.level.as_str().to_string(),
        }
    }
}

/// Experience response
#[derive(Debug, Serialize)]
pub struct ExperienceResponse {
    pub id: String,
    pub title: String,
    pub company: String,
    pub start_date: String,
    pub end_date: Option<String>,
    pub description: Option<String>,
    pub current: bool,
}

impl From<ExperienceItem> for ExperienceResponse {
    fn from(item: ExperienceItem) -> Self {
        Self {
            current: item.is_current(),
            id: item.id.to_string(),
            title: item.title,
            company: item.company,
            start_date: item.start_date.to_string(),
            end_date: item.end_date.map(|d| d.to_string()),
            description: item.description,
        }
    }
}

/// Aspirant profile response
#[derive(Debug, Serialize)]
pub struct AspirantProfileResponse {
    pub id: String,
    pub user_id: String,
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
    pub skills: Vec<SkillResponse>,
    pub experience: Vec<ExperienceResponse>,
    pub created_at: String,
    pub updated_at: String,
}

impl From<AspirantProfile> for AspirantProfileResponse {
    fn from(profile: AspirantProfile) -> Self {
        Self {
            id: profile.id.to_string(),
            user_id: profile.user_id.to_string(),
            first_name: profile.first_name,
            last_name: profile.last_name,
            email: profile.email,
            phone: profile.phone,
            bio: profile.bio,
            linkedin_url: profile.linkedin_url,
            portfolio_url: profile.portfolio_url,
            current_job_title: profile.current_job_title,
            photo_url: profile.photo_url,
            cv_url: profile.cv_url,
            skills: profile.skills.into_iter().map(SkillResponse::from).collect(),
            experience: profile
                .experience
                .into_iter()
                .map(ExperienceResponse::from)
                .collect(),
            created_at: profile.created_at.to_rfc3339(),
            updated_at: profile.updated_at.to_rfc3339(),
        }
    }
}

/// Company summary embedded in offer and application responses
#[derive(Debug, Serialize)]
pub struct CompanySummary {
    pub id: String,
    pub company_name: String,
    pub logo_url: Option<String>,
    pub website: Option<String>,
}

impl From<CompanyProfile> for CompanySummary {
    fn from(company: CompanyProfile) -> Self {
        Self {
            id: company.id.to_string(),
            company_name: company.company_name,
            logo_url: company.logo_url,
            website: company.website,
        }
    }
}

/// Job offer response
#[derive(Debug, Serialize)]
pub struct JobOfferResponse {
    pub id: String,
    pub company_id: String,
    pub title: String,
    pub description: String,
    pub location: String,
    pub salary_range: String,
    pub status: String,
    pub created_at: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company: Option<CompanySummary>,
}

impl From<JobOffer> for JobOfferResponse {
    fn from(offer: JobOffer) -> Self {
        Self {
            id: offer.id.to_string(),
            company_id: offer.company_id.to_string(),
            title: offer.title,
            description: offer.description,
            location: offer.location,
            salary_range: offer.salary_range,
            status: offer.status.as_str().to_string(),
            created_at: offer.created_at.to_rfc3339(),
            company: None,
        }
    }
}

impl From<JobOfferWithCompany> for JobOfferResponse {
    fn from(found: JobOfferWithCompany) -> Self {
        Self {
            company: Some(CompanySummary::from(found.company)),
            ..Self::from(found.offer)
        }
    }
}

/// Company profile response
#[derive(Debug, Serialize)]
pub struct CompanyProfileResponse {
    pub id: String,
    pub user_id: String,
    pub company_name: String,
    pub email: String,
    pub description: Option<String>,
    pub website: Option<String>,
    pub logo_url: Option<String>,
    pub created_at: String,
    pub updated_at: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub job_offers: Option<Vec<JobOfferResponse>>,
}

impl From<CompanyProfile> for CompanyProfileResponse {
    fn from(profile: CompanyProfile) -> Self {
        Self {
            id: profile.id.to_string(),
            user_id: profile.user_id.to_string(),
            company_name: profile.company_name,
            email: profile.email,
            description: profile.description,
            website: profile.website,
            logo_url: profile.logo_url,
            created_at: profile.created_at.to_rfc3339(),
            updated_at: profile.updated_at.to_rfc3339(),
            job_offers: None,
        }
    }
}

impl From<CompanyProfileWithOffers> for CompanyProfileResponse {
    fn from(found: CompanyProfileWithOffers) -> Self {
        Self {
            job_offers: Some(found.offers.into_iter().map(JobOfferResponse::from).collect()),
            ..Self::from(found.profile)
        }
    }
}

/// Application response. `internal_note` is only rendered for the company.
#[derive(Debug, Serialize)]
pub struct ApplicationResponse {
    pub id: String,
    pub aspirant_id: String,
    pub job_offer_id: String,
    pub status: String,
    pub cover_letter: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub internal_note: Option<String>,
    pub applied_at: String,
}

impl ApplicationResponse {
    pub fn from_application(application: Application, include_note: bool) -> Self {
        Self {
            id: application.id.to_string(),
            aspirant_id: application.aspirant_id.to_string(),
            job_offer_id: application.job_offer_id.to_string(),
            status: application.status.as_str().to_string(),
            cover_letter: application.cover_letter,
            internal_note: if include_note {
                application.internal_note
            } else {
                None
            },
            applied_at: application.applied_at.to_rfc3339(),
        }
    }
}

/// An aspirant's own application with the offer and company
#[derive(Debug, Serialize)]
pub struct AspirantApplicationResponse {
    #[serde(flatten)]
    pub application: ApplicationResponse,
    pub job_offer: JobOfferResponse,
}

impl From<ApplicationWithOffer> for AspirantApplicationResponse {
    fn from(found: ApplicationWithOffer) -> Self {
        let job_offer = JobOfferResponse::from(JobOfferWithCompany {
            offer: found.job_offer,
            company: found.company,
        });
        Self {
            application: ApplicationResponse::from_application(found.application, false),
            job_offer,
        }
    }
}

/// Applicant summary shown to the reviewing company
#[derive(Debug, Serialize)]
pub struct ApplicantSummary {
    pub id: String,
    pub full_name: String,
    pub email: String,
    pub phone: Option<String>,
    pub current_job_title: Option<String>,
    pub linkedin_url: Option<String>,
    pub cv_url: Option<String>,
}

impl From<AspirantProfile> for ApplicantSummary {
    fn from(profile: AspirantProfile) -> Self {
        Self {
            full_name: profile.full_name(),
            id: profile.id.to_string(),
            email: profile.email,
            phone: profile.phone,
            current_job_title: profile.current_job_title,
            linkedin_url: profile.linkedin_url,
            cv_url: profile.cv_url,
        }
    }
}

/// An application received by a company
#[derive(Debug, Serialize)]
pub struct CompanyApplicationResponse {
    #[serde(flatten)]
    pub application: ApplicationResponse,
    pub job_offer: JobOfferResponse,
    pub aspirant: ApplicantSummary,
}

impl From<ApplicationWithAspirant> for CompanyApplicationResponse {
    fn from(found: ApplicationWithAspirant) -> Self {
        Self {
            application: ApplicationResponse::from_application(found.application, true),
            job_offer: JobOfferResponse::from(found.job_offer),
            aspirant: ApplicantSummary::from(found.aspirant),
        }
    }
}
