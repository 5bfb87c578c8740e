//! Repository Implementations
//!
//! PostgreSQL implementations of domain repository traits.
//!
//! ## Available Repositories
//!
//! - **UserRepository** - accounts, registered together with a default profile
//! - **AspirantProfileRepository** - aspirant CVs with skills and experience
//! - **SkillItemRepository** / **ExperienceItemRepository** - single CV entries
//! - **CompanyProfileRepository** - employer profiles
//! - **JobOfferRepository** - postings and the public open-offer listing
//! - **ApplicationRepository** - applications, constraint-guarded against duplicates
//! - **OwnershipResolver** - owner lookup along foreign-key chains
//!
//! ## Usage Example
//!
//! ```rust,ignore
//! use sqlx::PgPool;
//! use recruitment_server::infrastructure::repositories::{
//!     PgApplicationRepository, PgJobOfferRepository, PgOwnershipResolver,
//! };
//!
//! async fn setup_repositories(pool: PgPool) {
//!     let applications = PgApplicationRepository::new(pool.clone());
//!     let offers = PgJobOfferRepository::new(pool.clone());
//!     let owners = PgOwnershipResolver::new(pool);
//! }
//! ```

pub mod user_repository;
pub mod aspirant_profile_repository;
pub mod skill_item_repository;
pub mod experience_item_repository;
pub mod company_profile_repository;
pub mod job_offer_repository;
pub mod application_repository;
pub mod ownership_repository;

pub use user_repository::PgUserRepository;
pub use aspirant_profile_repository::PgAspirantProfileRepository;
pub use skill_item_repository::PgSkillItemRepository;
pub use experience_item_repository::PgExperienceItemRepository;
pub use company_profile_repository::PgCompanyProfileRepository;
pub use job_offer_repository::PgJobOfferRepository;
pub use application_repository::PgApplicationRepository;
pub use ownership_repository::PgOwnershipResolver;
