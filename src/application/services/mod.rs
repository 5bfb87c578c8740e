//! Application Services
//!
//! Business logic services that coordinate domain operations.
//!
//! ## Available Services
//!
//! - **AuthService**: Registration with default profile, login, JWT tokens
//! - **ApplicationService**: Applying to offers and reviewing applications
//! - **JobOfferService**: Public catalog and company offer management
//! - **AspirantProfileService**: The aspirant CV, skills and experience
//! - **CompanyProfileService**: Employer profiles

pub mod auth_service;
pub mod application_service;
pub mod job_offer_service;
pub mod aspirant_profile_service;
pub mod company_profile_service;

#[cfg(test)]
mod tests;

// Re-export auth service types
pub use auth_service::{AuthError, AuthService, AuthServiceImpl, AuthSession, AuthTokens, Claims, TokenCodec};

// Re-export application service types
pub use application_service::{ApplicationError, ApplicationService, ApplicationServiceImpl};

// Re-export job offer service types
pub use job_offer_service::{
    CreateJobOfferDto, JobOfferError, JobOfferService, JobOfferServiceImpl, UpdateJobOfferDto,
};

// Re-export profile service types
pub use aspirant_profile_service::{
    AspirantProfileInput, AspirantProfilePatch, AspirantProfileService, AspirantProfileServiceImpl,
    ExperiencePatch, NewExperience, NewSkill, ProfileError, SkillPatch,
};
pub use company_profile_service::{
    CompanyProfileInput, CompanyProfilePatch, CompanyProfileService, CompanyProfileServiceImpl,
    CompanyProfileWithOffers,
};
