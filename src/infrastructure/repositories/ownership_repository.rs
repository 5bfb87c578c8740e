//! Ownership Resolver Implementation
//!
//! One query per entity kind, each joining the foreign-key chain up to the
//! owning user.

use async_trait::async_trait;
use sqlx::PgPool;

use crate::domain::services::{OwnedEntity, OwnershipResolver};
use crate::shared::error::AppError;

/// PostgreSQL ownership resolver.
#[derive(Clone)]
pub struct PgOwnershipResolver {
    pool: PgPool,
}

impl PgOwnershipResolver {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn owner_query(entity: &OwnedEntity) -> &'static str {
    match entity {
        OwnedEntity::JobOffer(_) => {
            r#"
            SELECT c.user_id
            FROM job_offers o
            JOIN company_profiles c ON c.id = o.company_id
            WHERE o.id = $1
            "#
        }
        OwnedEntity::Application(_) => {
            r#"
            SELECT c.user_id
            FROM applications a
            JOIN job_offers o ON o.id = a.job_offer_id
            JOIN company_profiles c ON c.id = o.company_id
            WHERE a.id = $1
            "#
        }
        OwnedEntity::SkillItem(_) => {
            r#"
            SELECT p.user_id
            FROM skill_items s
            JOIN aspirant_profiles p ON p.id = s.profile_id
            WHERE s.id = $1
            "#
        }
        OwnedEntity::ExperienceItem(_) => {
            r#"
            SELECT p.user_id
            FROM experience_items e
            JOIN aspirant_profiles p ON p.id = e.profile_id
            WHERE e.id = $1
            "#
        }
    }
}

#[async_trait]
impl OwnershipResolver for PgOwnershipResolver {
    async fn resolve_owner(&self, entity: OwnedEntity) -> Result<Option<i64>, AppError> {
        let owner = sqlx::query_scalar::<_, i64>(owner_query(&entity))
            .bind(entity.id())
            .fetch_optional(&self.pool)
            .await?;

        Ok(owner)
    }
}
