//! # Domain Entities
//!
//! Core domain entities representing the main business objects of the
//! recruitment platform. All entities map directly to their database tables.
//!
//! ## Core Entities
//!
//! - **User**: account with credentials and role
//! - **AspirantProfile**: a job seeker's CV
//! - **CompanyProfile**: an employer
//! - **JobOffer**: a posting owned by a company
//! - **Application**: an aspirant applying to an offer
//!
//! ## Supporting Entities
//!
//! - **SkillItem** / **ExperienceItem**: CV collections owned by an aspirant profile
//!
//! ## Repository Traits
//!
//! Each entity has an associated repository trait defining data access operations.
//! These traits are implemented in the infrastructure layer, following the
//! dependency inversion principle.

mod user;
mod aspirant_profile;
mod skill_item;
mod experience_item;
mod company_profile;
mod job_offer;
mod application;

pub use user::{DefaultProfile, User, UserRepository};

pub use aspirant_profile::{AspirantProfile, AspirantProfileRepository};

pub use skill_item::{SkillItem, SkillItemRepository, SkillLevel};

pub use experience_item::{ExperienceItem, ExperienceItemRepository};

pub use company_profile::{
    CompanyProfile, CompanyProfileRepository, COMPANY_NAME_MAX_CHARS, PLACEHOLDER_DESCRIPTION,
};

pub use job_offer::{JobOffer, JobOfferRepository, JobOfferStatus, JobOfferWithCompany};

pub use application::{
    Application, ApplicationRepository, ApplicationStatus, ApplicationWithAspirant,
    ApplicationWithOffer, UNIQUE_APPLICATION_CONSTRAINT,
};

#[cfg(test)]
pub use application::MockApplicationRepository;
#[cfg(test)]
pub use job_offer::MockJobOfferRepository;
#[cfg(test)]
pub use user::MockUserRepository;
