//! Request DTOs
//!
//! Data structures for API request bodies.

use chrono::NaiveDate;
use serde::Deserialize;
use validator::{Validate, ValidationError};

use crate::application::services::{
    AspirantProfileInput, AspirantProfilePatch, CompanyProfileInput, CompanyProfilePatch,
    ExperiencePatch, NewExperience, NewSkill, SkillPatch,
};
use crate::domain::{ApplicationStatus, JobOfferStatus, SkillLevel, UserRole};

fn valid_role(role: &str) -> Result<(), ValidationError> {
    UserRole::parse(role)
        .map(|_| ())
        .ok_or_else(|| ValidationError::new("role").with_message("Role must be aspirant or company".into()))
}

fn valid_offer_status(status: &str) -> Result<(), ValidationError> {
    JobOfferStatus::parse(status)
        .map(|_| ())
        .ok_or_else(|| {
            ValidationError::new("status").with_message("Status must be open, closed or paused".into())
        })
}

fn valid_application_status(status: &str) -> Result<(), ValidationError> {
    ApplicationStatus::parse(status)
        .map(|_| ())
        .ok_or_else(|| ValidationError::new("status").with_message("Invalid application status".into()))
}

fn valid_id(raw: &str) -> Result<(), ValidationError> {
    raw.parse::<i64>()
        .map(|_| ())
        .map_err(|_| ValidationError::new("id").with_message("Invalid ID".into()))
}

/// Login request
#[derive(Debug, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(email(message = "Invalid email format"))]
    pub email: String,

    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

/// Registration request
#[derive(Debug, Deserialize, Validate)]
pub struct RegisterRequest {
    #[validate(email(message = "Invalid email format"))]
    pub email: String,

    #[validate(length(min = 8, message = "Password must be at least 8 characters"))]
    pub password: String,

    #[validate(custom(function = "valid_role"))]
    pub role: String,

    /// Only used for company accounts
    #[validate(length(max = 150, message = "Company name must be at most 150 characters"))]
    pub company_name: Option<String>,
}

impl RegisterRequest {
    /// Role after validation has passed.
    pub fn user_role(&self) -> UserRole {
        UserRole::parse(&self.role).unwrap_or(UserRole::Aspirant)
    }
}

/// Create job offer request
#[derive(Debug, Deserialize, Validate)]
pub struct CreateJobOfferRequest {
    #[validate(length(min = 1, max = 150, message = "Title must be 1-150 characters"))]
    pub title: String,

    #[validate(length(min = 1, message = "Description is required"))]
    pub description: String,

    #[validate(length(min = 1, max = 100, message = "Location must be 1-100 characters"))]
    pub location: String,

    #[validate(length(min = 1, max = 50, message = "Salary range must be 1-50 characters"))]
    pub salary_range: String,

    #[validate(custom(function = "valid_offer_status"))]
    pub status: Option<String>,
}

/// Update job offer request
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateJobOfferRequest {
    #[validate(length(min = 1, max = 150, message = "Title must be 1-150 characters"))]
    pub title: Option<String>,

    #[validate(length(min = 1, message = "Description cannot be empty"))]
    pub description: Option<String>,

    #[validate(length(min = 1, max = 100, message = "Location must be 1-100 characters"))]
    pub location: Option<String>,

    #[validate(length(min = 1, max = 50, message = "Salary range must be 1-50 characters"))]
    pub salary_range: Option<String>,

    #[validate(custom(function = "valid_offer_status"))]
    pub status: Option<String>,
}

pub(crate) fn offer_status(raw: Option<&str>) -> Option<JobOfferStatus> {
    raw.and_then(JobOfferStatus::parse)
}

/// Skill entry. `level` uses the 1-5 scale.
#[derive(Debug, Deserialize, Validate)]
pub struct SkillRequest {
    #[validate(length(min = 1, max = 100, message = "Skill name must be 1-100 characters"))]
    pub skill_name: String,

    #[validate(range(min = 1, max = 5, message = "Level must be between 1 and 5"))]
    pub level: u8,
}

impl From<SkillRequest> for NewSkill {
    fn from(req: SkillRequest) -> Self {
        Self {
            skill_name: req.skill_name,
            level: SkillLevel::from_score(req.level),
        }
    }
}

/// Update skill request
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateSkillRequest {
    #[validate(length(min = 1, max = 100, message = "Skill name must be 1-100 characters"))]
    pub skill_name: Option<String>,

    #[validate(range(min = 1, max = 5, message = "Level must be between 1 and 5"))]
    pub level: Option<u8>,
}

impl From<UpdateSkillRequest> for SkillPatch {
    fn from(req: UpdateSkillRequest) -> Self {
        Self {
            skill_name: req.skill_name,
            level: req.level.map(SkillLevel::from_score),
        }
    }
}

/// Experience entry. Dates are `YYYY-MM-DD`; no `end_date` means current.
#[derive(Debug, Deserialize, Validate)]
pub struct ExperienceRequest {
    #[validate(length(min = 1, max = 150, message = "Title must be 1-150 characters"))]
    pub title: String,

    #[validate(length(min = 1, max = 100, message = "Company must be 1-100 characters"))]
    pub company: String,

    pub start_date: NaiveDate,
    pub end_date: Option<NaiveDate>,
    pub description: Option<String>,
}

impl From<ExperienceRequest> for NewExperience {
    fn from(req: ExperienceRequest) -> Self {
        Self {
            title: req.title,
            company: req.company,
            start_date: req.start_date,
            end_date: req.end_date,
            description: req.description,
        }
    }
}

/// Update experience request
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateExperienceRequest {
    #[validate(length(min = 1, max = 150, message = "Title must be 1-150 characters"))]
    pub title: Option<String>,

    #[validate(length(min = 1, max = 100, message = "Company must be 1-100 characters"))]
    pub company: Option<String>,

    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub description: Option<String>,
}

impl From<UpdateExperienceRequest> for ExperiencePatch {
    fn from(req: UpdateExperienceRequest) -> Self {
        Self {
            title: req.title,
            company: req.company,
            start_date: req.start_date,
            end_date: req.end_date,
            description: req.description,
        }
    }
}

/// Create aspirant profile request
#[derive(Debug, Deserialize, Validate)]
pub struct CreateAspirantProfileRequest {
    #[validate(length(min = 1, max = 100, message = "First name must be 1-100 characters"))]
    pub first_name: String,

    #[validate(length(min = 1, max = 100, message = "Last name must be 1-100 characters"))]
    pub last_name: String,

    #[validate(email(message = "Invalid email format"))]
    pub email: String,

    #[validate(length(max = 20, message = "Phone must be at most 20 characters"))]
    pub phone: Option<String>,

    pub bio: Option<String>,

    #[validate(
        url(message = "Invalid LinkedIn URL"),
        length(max = 255, message = "LinkedIn URL must be at most 255 characters")
    )]
    pub linkedin_url: Option<String>,

    #[validate(
        url(message = "Invalid portfolio URL"),
        length(max = 255, message = "Portfolio URL must be at most 255 characters")
    )]
    pub portfolio_url: Option<String>,

    #[validate(length(max = 50, message = "Job title must be at most 50 characters"))]
    pub current_job_title: Option<String>,

    #[validate(
        url(message = "Invalid photo URL"),
        length(max = 255, message = "Photo URL must be at most 255 characters")
    )]
    pub photo_url: Option<String>,

    #[validate(
        url(message = "Invalid CV URL"),
        length(max = 255, message = "CV URL must be at most 255 characters")
    )]
    pub cv_url: Option<String>,

    #[serde(default)]
    #[validate(nested)]
    pub skills: Vec<SkillRequest>,

    #[serde(default)]
    #[validate(nested)]
    pub experience: Vec<ExperienceRequest>,
}

impl From<CreateAspirantProfileRequest> for AspirantProfileInput {
    fn from(req: CreateAspirantProfileRequest) -> Self {
        Self {
            first_name: req.first_name,
            last_name: req.last_name,
            email: req.email.trim().to_lowercase(),
            phone: req.phone,
            bio: req.bio,
            linkedin_url: req.linkedin_url,
            portfolio_url: req.portfolio_url,
            current_job_title: req.current_job_title,
            photo_url: req.photo_url,
            cv_url: req.cv_url,
            skills: req.skills.into_iter().map(NewSkill::from).collect(),
            experience: req.experience.into_iter().map(NewExperience::from).collect(),
        }
    }
}

/// Update aspirant profile request. A present `skills` or `experience`
/// list replaces the stored one.
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateAspirantProfileRequest {
    #[validate(length(min = 1, max = 100, message = "First name must be 1-100 characters"))]
    pub first_name: Option<String>,

    #[validate(length(min = 1, max = 100, message = "Last name must be 1-100 characters"))]
    pub last_name: Option<String>,

    #[validate(email(message = "Invalid email format"))]
    pub email: Option<String>,

    #[validate(length(max = 20, message = "Phone must be at most 20 characters"))]
    pub phone: Option<String>,

    pub bio: Option<String>,

    #[validate(
        url(message = "Invalid LinkedIn URL"),
        length(max = 255, message = "LinkedIn URL must be at most 255 characters")
    )]
    pub linkedin_url: Option<String>,

    #[validate(
        url(message = "Invalid portfolio URL"),
        length(max = 255, message = "Portfolio URL must be at most 255 characters")
    )]
    pub portfolio_url: Option<String>,

    #[validate(length(max = 50, message = "Job title must be at most 50 characters"))]
    pub current_job_title: Option<String>,

    #[validate(
        url(message = "Invalid photo URL"),
        length(max = 255, message = "Photo URL must be at most 255 characters")
    )]
    pub photo_url: Option<String>,

    #[validate(
        url(message = "Invalid CV URL"),
        length(max = 255, message = "CV URL must be at most 255 characters")
    )]
    pub cv_url: Option<String>,

    #[validate(nested)]
    pub skills: Option<Vec<SkillRequest>>,

    #[validate(nested)]
    pub experience: Option<Vec<ExperienceRequest>>,
}

impl From<UpdateAspirantProfileRequest> for AspirantProfilePatch {
    fn from(req: UpdateAspirantProfileRequest) -> Self {
        Self {
            first_name: req.first_name,
            last_name: req.last_name,
            email: req.email.map(|e| e.trim().to_lowercase()),
            phone: req.phone,
            bio: req.bio,
            linkedin_url: req.linkedin_url,
            portfolio_url: req.portfolio_url,
            current_job_title: req.current_job_title,
            photo_url: req.photo_url,
            cv_url: req.cv_url,
            skills: req
                .skills
                .map(|skills| skills.into_iter().map(NewSkill::from).collect()),
            experience: req
                .experience
                .map(|items| items.into_iter().map(NewExperience::from).collect()),
        }
    }
}

/// Create company profile request
#[derive(Debug, Deserialize, Validate)]
pub struct CreateCompanyProfileRequest {
    #[validate(length(min = 1, max = 150, message = "Company name must be 1-150 characters"))]
    pub company_name: String,

    #[validate(email(message = "Invalid email format"))]
    pub email: String,

    pub description: Option<String>,

    #[validate(
        url(message = "Invalid website URL"),
        length(max = 255, message = "Website URL must be at most 255 characters")
    )]
    pub website: Option<String>,

    #[validate(
        url(message = "Invalid logo URL"),
        length(max = 255, message = "Logo URL must be at most 255 characters")
    )]
    pub logo_url: Option<String>,
}

impl From<CreateCompanyProfileRequest> for CompanyProfileInput {
    fn from(req: CreateCompanyProfileRequest) -> Self {
        Self {
            company_name: req.company_name.trim().to_string(),
            email: req.email.trim().to_lowercase(),
            description: req.description,
            website: req.website,
            logo_url: req.logo_url,
        }
    }
}

/// Update company profile request
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateCompanyProfileRequest {
    #[validate(length(min = 1, max = 150, message = "Company name must be 1-150 characters"))]
    pub company_name: Option<String>,

    #[validate(email(message = "Invalid email format"))]
    pub email: Option<String>,

    pub description: Option<String>,

    #[validate(
        url(message = "Invalid website URL"),
        length(max = 255, message = "Website URL must be at most 255 characters")
    )]
    pub website: Option<String>,

    #[validate(
        url(message = "Invalid logo URL"),
        length(max = 255, message = "Logo URL must be at most 255 characters")
    )]
    pub logo_url: Option<String>,
}

impl From<UpdateCompanyProfileRequest> for CompanyProfilePatch {
    fn from(req: UpdateCompanyProfileRequest) -> Self {
        Self {
            company_name: req.company_name.map(|n| n.trim().to_string()),
            email: req.email.map(|e| e.trim().to_lowercase()),
            description: req.description,
            website: req.website,
            logo_url: req.logo_url,
        }
    }
}

/// Create application request
#[derive(Debug, Deserialize, Validate)]
pub struct CreateApplicationRequest {
    #[validate(custom(function = "valid_id"))]
    pub job_offer_id: String,

    #[validate(length(max = 5000, message = "Cover letter must be at most 5000 characters"))]
    pub cover_letter: Option<String>,
}

/// Update application status request
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateApplicationStatusRequest {
    #[validate(custom(function = "valid_application_status"))]
    pub status: String,

    pub internal_note: Option<String>,
}
