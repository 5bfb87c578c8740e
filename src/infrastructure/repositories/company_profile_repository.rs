//! Company Profile Repository Implementation

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{PgConnection, PgPool};

use crate::domain::{CompanyProfile, CompanyProfileRepository};
use crate::infrastructure::database::violated_constraint;
use crate::shared::error::AppError;

#[derive(Debug, sqlx::FromRow)]
struct CompanyProfileRow {
    id: i64,
    user_id: i64,
    company_name: String,
    email: String,
    description: Option<String>,
    website: Option<String>,
    logo_url: Option<String>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl CompanyProfileRow {
    fn into_profile(self) -> CompanyProfile {
        CompanyProfile {
            id: self.id,
            user_id: self.user_id,
            company_name: self.company_name,
            email: self.email,
            description: self.description,
            website: self.website,
            logo_url: self.logo_url,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

/// Insert a company profile on the given connection (pool or transaction).
pub(crate) async fn insert_company_profile(
    conn: &mut PgConnection,
    profile: &CompanyProfile,
) -> Result<(), sqlx::Error> {
    sqlx::query(
        r#"
        INSERT INTO company_profiles (
            id, user_id, company_name, email, description, website, logo_url,
            created_at, updated_at
        )
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
        "#,
    )
    .bind(profile.id)
    .bind(profile.user_id)
    .bind(&profile.company_name)
    .bind(&profile.email)
    .bind(&profile.description)
    .bind(&profile.website)
    .bind(&profile.logo_url)
    .bind(profile.created_at)
    .bind(profile.updated_at)
    .execute(conn)
    .await?;

    Ok(())
}

fn map_company_error(e: sqlx::Error) -> AppError {
    let message = match violated_constraint(&e) {
        Some("uq_company_profiles_user") => "Company profile already exists",
        Some("uq_company_profiles_name") => "Company name already taken",
        Some("uq_company_profiles_email") => "Company email already in use",
        Some("company_profiles_user_id_fkey") => {
            return AppError::NotFound("User not found".into())
        }
        _ => return AppError::Database(e),
    };
    AppError::Conflict(message.into())
}

/// PostgreSQL company profile repository implementation.
#[derive(Clone)]
pub struct PgCompanyProfileRepository {
    pool: PgPool,
}

impl PgCompanyProfileRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CompanyProfileRepository for PgCompanyProfileRepository {
    async fn find_by_id(&self, id: i64) -> Result<Option<CompanyProfile>, AppError> {
        let row = sqlx::query_as::<_, CompanyProfileRow>(
            r#"
            SELECT id, user_id, company_name, email, description, website, logo_url,
                   created_at, updated_at
            FROM company_profiles
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(CompanyProfileRow::into_profile))
    }

    async fn find_by_user_id(&self, user_id: i64) -> Result<Option<CompanyProfile>, AppError> {
        let row = sqlx::query_as::<_, CompanyProfileRow>(
            r#"
            SELECT id, user_id, company_name, email, description, website, logo_url,
                   created_at, updated_at
            FROM company_profiles
            WHERE user_id = $1
            "#,
        )
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(CompanyProfileRow::into_profile))
    }

    async fn create(&self, profile: &CompanyProfile) -> Result<CompanyProfile, AppError> {
        let mut conn = self.pool.acquire().await?;
        insert_company_profile(&mut conn, profile)
            .await
            .map_err(map_company_error)?;

        Ok(profile.clone())
    }

    async fn update(&self, profile: &CompanyProfile) -> Result<CompanyProfile, AppError> {
        let row = sqlx::query_as::<_, CompanyProfileRow>(
            r#"
            UPDATE company_profiles
            SET company_name = $2,
                email = $3,
                description = $4,
                website = $5,
                logo_url = $6,
                updated_at = NOW()
            WHERE id = $1
            RETURNING id, user_id, company_name, email, description, website, logo_url,
                      created_at, updated_at
            "#,
        )
        .bind(profile.id)
        .bind(&profile.company_name)
        .bind(&profile.email)
        .bind(&profile.description)
        .bind(&profile.website)
        .bind(&profile.logo_url)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_company_error)?
        .ok_or_else(|| AppError::NotFound("Company profile not found".into()))?;

        Ok(row.into_profile())
    }
}
