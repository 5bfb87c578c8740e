//! Aspirant Profile Repository Implementation
//!
//! Profiles are stored in `aspirant_profiles`; their skills and experience in
//! `skill_items` / `experience_items`. Reads assemble all three.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{PgConnection, PgPool};

use super::experience_item_repository::{insert_experience, select_experience};
use super::skill_item_repository::{insert_skill, map_skill_error, select_skills};
use crate::domain::{AspirantProfile, AspirantProfileRepository, ExperienceItem, SkillItem};
use crate::infrastructure::database::{violated_constraint, with_transaction};
use crate::shared::error::AppError;

#[derive(Debug, sqlx::FromRow)]
pub(crate) struct AspirantProfileRow {
    id: i64,
    user_id: i64,
    first_name: String,
    last_name: String,
    email: String,
    phone: Option<String>,
    bio: Option<String>,
    linkedin_url: Option<String>,
    portfolio_url: Option<String>,
    current_job_title: Option<String>,
    photo_url: Option<String>,
    cv_url: Option<String>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl AspirantProfileRow {
    pub(crate) fn into_profile(
        self,
        skills: Vec<SkillItem>,
        experience: Vec<ExperienceItem>,
    ) -> AspirantProfile {
        AspirantProfile {
            id: self.id,
            user_id: self.user_id,
            first_name: self.first_name,
            last_name: self.last_name,
            email: self.email,
            phone: self.phone,
            bio: self.bio,
            linkedin_url: self.linkedin_url,
            portfolio_url: self.portfolio_url,
            current_job_title: self.current_job_title,
            photo_url: self.photo_url,
            cv_url: self.cv_url,
            skills,
            experience,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

/// Insert the base profile row (no collections) on the given connection.
pub(crate) async fn insert_aspirant_profile(
    conn: &mut PgConnection,
    profile: &AspirantProfile,
) -> Result<(), sqlx::Error> {
    sqlx::query(
        r#"
        INSERT INTO aspirant_profiles (
            id, user_id, first_name, last_name, email, phone, bio, linkedin_url,
            portfolio_url, current_job_title, photo_url, cv_url, created_at, updated_at
        )
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14)
        "#,
    )
    .bind(profile.id)
    .bind(profile.user_id)
    .bind(&profile.first_name)
    .bind(&profile.last_name)
    .bind(&profile.email)
    .bind(&profile.phone)
    .bind(&profile.bio)
    .bind(&profile.linkedin_url)
    .bind(&profile.portfolio_url)
    .bind(&profile.current_job_title)
    .bind(&profile.photo_url)
    .bind(&profile.cv_url)
    .bind(profile.created_at)
    .bind(profile.updated_at)
    .execute(conn)
    .await?;

    Ok(())
}

fn map_profile_error(e: sqlx::Error) -> AppError {
    match violated_constraint(&e) {
        Some("uq_aspirant_profiles_user") => {
            AppError::Conflict("Aspirant profile already exists".into())
        }
        Some("uq_aspirant_profiles_email") => {
            AppError::Conflict("Profile email already in use".into())
        }
        Some("uq_skill_items_profile_name") => map_skill_error(e),
        Some("aspirant_profiles_user_id_fkey") => AppError::NotFound("User not found".into()),
        _ => AppError::Database(e),
    }
}

/// PostgreSQL aspirant profile repository implementation.
#[derive(Clone)]
pub struct PgAspirantProfileRepository {
    pool: PgPool,
}

impl PgAspirantProfileRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AspirantProfileRepository for PgAspirantProfileRepository {
    async fn find_by_user_id(&self, user_id: i64) -> Result<Option<AspirantProfile>, AppError> {
        let mut conn = self.pool.acquire().await?;

        let row = sqlx::query_as::<_, AspirantProfileRow>(
            r#"
            SELECT id, user_id, first_name, last_name, email, phone, bio, linkedin_url,
                   portfolio_url, current_job_title, photo_url, cv_url, created_at, updated_at
            FROM aspirant_profiles
            WHERE user_id = $1
            "#,
        )
        .bind(user_id)
        .fetch_optional(&mut *conn)
        .await?;

        let Some(row) = row else {
            return Ok(None);
        };

        let skills = select_skills(&mut conn, row.id).await?;
        let experience = select_experience(&mut conn, row.id).await?;

        Ok(Some(row.into_profile(skills, experience)))
    }

    async fn create(&self, profile: &AspirantProfile) -> Result<AspirantProfile, AppError> {
        with_transaction(&self.pool, |mut tx| async move {
            insert_aspirant_profile(tx.connection(), profile)
                .await
                .map_err(map_profile_error)?;

            for skill in &profile.skills {
                insert_skill(tx.connection(), skill)
                    .await
                    .map_err(map_profile_error)?;
            }
            for item in &profile.experience {
                insert_experience(tx.connection(), item)
                    .await
                    .map_err(map_profile_error)?;
            }

            Ok(((), tx))
        })
        .await?;

        self.find_by_user_id(profile.user_id)
            .await?
            .ok_or_else(|| AppError::Internal("Aspirant profile vanished after insert".into()))
    }

    async fn update(
        &self,
        profile: &AspirantProfile,
        skills: Option<Vec<SkillItem>>,
        experience: Option<Vec<ExperienceItem>>,
    ) -> Result<AspirantProfile, AppError> {
        with_transaction(&self.pool, |mut tx| async move {
            let result = sqlx::query(
                r#"
                UPDATE aspirant_profiles
                SET first_name = $2,
                    last_name = $3,
                    email = $4,
                    phone = $5,
                    bio = $6,
                    linkedin_url = $7,
                    portfolio_url = $8,
                    current_job_title = $9,
                    photo_url = $10,
                    cv_url = $11,
                    updated_at = NOW()
                WHERE id = $1
                "#,
            )
            .bind(profile.id)
            .bind(&profile.first_name)
            .bind(&profile.last_name)
            .bind(&profile.email)
            .bind(&profile.phone)
            .bind(&profile.bio)
            .bind(&profile.linkedin_url)
            .bind(&profile.portfolio_url)
            .bind(&profile.current_job_title)
            .bind(&profile.photo_url)
            .bind(&profile.cv_url)
            .execute(tx.connection())
            .await
            .map_err(map_profile_error)?;

            if result.rows_affected() == 0 {
                return Err(AppError::NotFound("Aspirant profile not found".into()));
            }

            // Collections are replaced, never merged by id.
            if let Some(skills) = skills {
                sqlx::query("DELETE FROM skill_items WHERE profile_id = $1")
                    .bind(profile.id)
                    .execute(tx.connection())
                    .await?;
                for skill in &skills {
                    insert_skill(tx.connection(), skill)
                        .await
                        .map_err(map_profile_error)?;
                }
            }

            if let Some(experience) = experience {
                sqlx::query("DELETE FROM experience_items WHERE profile_id = $1")
                    .bind(profile.id)
                    .execute(tx.connection())
                    .await?;
                for item in &experience {
                    insert_experience(tx.connection(), item)
                        .await
                        .map_err(map_profile_error)?;
                }
            }

            Ok(((), tx))
        })
        .await?;

        self.find_by_user_id(profile.user_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Aspirant profile not found".into()))
    }

    async fn delete(&self, id: i64) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM aspirant_profiles WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Aspirant profile not found".into()));
        }

        Ok(())
    }
}
