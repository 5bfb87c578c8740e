//! Ownership-chain authorization.
//!
//! Every mutation of a job offer, application or CV item walks the foreign-key
//! chain of the target back to the owning user and compares it with the caller.
//! Resolution lives behind [`OwnershipResolver`]; the comparison lives in
//! [`ensure_owner`] and nowhere else.

use std::fmt;

use async_trait::async_trait;

use crate::shared::error::AppError;

/// An entity whose mutations are restricted to a single user.
///
/// | Entity | Chain |
/// |---|---|
/// | JobOffer | job_offers → company_profiles → users |
/// | Application | applications → job_offers → company_profiles → users |
/// | SkillItem | skill_items → aspirant_profiles → users |
/// | ExperienceItem | experience_items → aspirant_profiles → users |
///
/// An application is owned by the company that posted the offer, since only
/// that company may change its status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OwnedEntity {
    JobOffer(i64),
    Application(i64),
    SkillItem(i64),
    ExperienceItem(i64),
}

impl OwnedEntity {
    pub fn id(&self) -> i64 {
        match *self {
            Self::JobOffer(id)
            | Self::Application(id)
            | Self::SkillItem(id)
            | Self::ExperienceItem(id) => id,
        }
    }

    /// Human-readable kind, used in error messages.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::JobOffer(_) => "Job offer",
            Self::Application(_) => "Application",
            Self::SkillItem(_) => "Skill",
            Self::ExperienceItem(_) => "Experience item",
        }
    }
}

impl fmt::Display for OwnedEntity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.kind(), self.id())
    }
}

/// Resolves the user at the end of an entity's ownership chain.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait OwnershipResolver: Send + Sync {
    /// `None` when the entity (or any link of its chain) does not exist.
    async fn resolve_owner(&self, entity: OwnedEntity) -> Result<Option<i64>, AppError>;
}

/// Outcome of a failed ownership check.
#[derive(Debug, thiserror::Error)]
pub enum OwnershipError {
    #[error("{} not found", .0.kind())]
    NotFound(OwnedEntity),

    #[error("{0} belongs to another user")]
    Forbidden(OwnedEntity),

    #[error(transparent)]
    Store(#[from] AppError),
}

/// Succeeds only when `caller_user_id` owns `entity`.
pub async fn ensure_owner<R>(
    resolver: &R,
    caller_user_id: i64,
    entity: OwnedEntity,
) -> Result<(), OwnershipError>
where
    R: OwnershipResolver + ?Sized,
{
    match resolver.resolve_owner(entity).await? {
        None => Err(OwnershipError::NotFound(entity)),
        Some(owner) if owner != caller_user_id => {
            tracing::warn!(
                entity = %entity,
                caller = caller_user_id,
                "Ownership check failed"
            );
            Err(OwnershipError::Forbidden(entity))
        }
        Some(_) => Ok(()),
    }
}
