//! Job Offer Repository Implementation

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;

use crate::domain::{
    CompanyProfile, JobOffer, JobOfferRepository, JobOfferStatus, JobOfferWithCompany,
};
use crate::infrastructure::database::{decode_column, map_constraint_error};
use crate::shared::error::AppError;

#[derive(Debug, sqlx::FromRow)]
pub(crate) struct JobOfferRow {
    id: i64,
    company_id: i64,
    title: String,
    description: String,
    location: String,
    salary_range: String,
    status: String,
    created_at: DateTime<Utc>,
}

impl JobOfferRow {
    pub(crate) fn into_offer(self) -> Result<JobOffer, AppError> {
        let status = decode_column(
            JobOfferStatus::parse(&self.status),
            "job_offers.status",
            &self.status,
        )?;
        Ok(JobOffer {
            id: self.id,
            company_id: self.company_id,
            title: self.title,
            description: self.description,
            location: self.location,
            salary_range: self.salary_range,
            status,
            created_at: self.created_at,
        })
    }
}

/// An offer joined with its company; company columns carry a `company_` prefix.
#[derive(Debug, sqlx::FromRow)]
struct JobOfferCompanyRow {
    #[sqlx(flatten)]
    offer: JobOfferRow,
    company_user_id: i64,
    company_name: String,
    company_email: String,
    company_description: Option<String>,
    company_website: Option<String>,
    company_logo_url: Option<String>,
    company_created_at: DateTime<Utc>,
    company_updated_at: DateTime<Utc>,
}

impl JobOfferCompanyRow {
    fn into_offer_with_company(self) -> Result<JobOfferWithCompany, AppError> {
        let offer = self.offer.into_offer()?;
        let company = CompanyProfile {
            id: offer.company_id,
            user_id: self.company_user_id,
            company_name: self.company_name,
            email: self.company_email,
            description: self.company_description,
            website: self.company_website,
            logo_url: self.company_logo_url,
            created_at: self.company_created_at,
            updated_at: self.company_updated_at,
        };
        Ok(JobOfferWithCompany { offer, company })
    }
}

/// PostgreSQL job offer repository implementation.
#[derive(Clone)]
pub struct PgJobOfferRepository {
    pool: PgPool,
}

impl PgJobOfferRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl JobOfferRepository for PgJobOfferRepository {
    async fn find_by_id(&self, id: i64) -> Result<Option<JobOffer>, AppError> {
        let row = sqlx::query_as::<_, JobOfferRow>(
            r#"
            SELECT id, company_id, title, description, location, salary_range, status, created_at
            FROM job_offers
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        row.map(JobOfferRow::into_offer).transpose()
    }

    async fn find_with_company(&self, id: i64) -> Result<Option<JobOfferWithCompany>, AppError> {
        let row = sqlx::query_as::<_, JobOfferCompanyRow>(
            r#"
            SELECT o.id, o.company_id, o.title, o.description, o.location, o.salary_range,
                   o.status, o.created_at,
                   c.user_id AS company_user_id, c.company_name, c.email AS company_email,
                   c.description AS company_description, c.website AS company_website,
                   c.logo_url AS company_logo_url, c.created_at AS company_created_at,
                   c.updated_at AS company_updated_at
            FROM job_offers o
            JOIN company_profiles c ON c.id = o.company_id
            WHERE o.id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        row.map(JobOfferCompanyRow::into_offer_with_company)
            .transpose()
    }

    async fn list_open(&self) -> Result<Vec<JobOfferWithCompany>, AppError> {
        let rows = sqlx::query_as::<_, JobOfferCompanyRow>(
            r#"
            SELECT o.id, o.company_id, o.title, o.description, o.location, o.salary_range,
                   o.status, o.created_at,
                   c.user_id AS company_user_id, c.company_name, c.email AS company_email,
                   c.description AS company_description, c.website AS company_website,
                   c.logo_url AS company_logo_url, c.created_at AS company_created_at,
                   c.updated_at AS company_updated_at
            FROM job_offers o
            JOIN company_profiles c ON c.id = o.company_id
            WHERE o.status = 'open'
            ORDER BY o.created_at DESC, o.id DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter()
            .map(JobOfferCompanyRow::into_offer_with_company)
            .collect()
    }

    async fn find_by_company(&self, company_id: i64) -> Result<Vec<JobOffer>, AppError> {
        let rows = sqlx::query_as::<_, JobOfferRow>(
            r#"
            SELECT id, company_id, title, description, location, salary_range, status, created_at
            FROM job_offers
            WHERE company_id = $1
            ORDER BY created_at DESC, id DESC
            "#,
        )
        .bind(company_id)
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(JobOfferRow::into_offer).collect()
    }

    async fn create(&self, offer: &JobOffer) -> Result<JobOffer, AppError> {
        let row = sqlx::query_as::<_, JobOfferRow>(
            r#"
            INSERT INTO job_offers (id, company_id, title, description, location, salary_range, status, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            RETURNING id, company_id, title, description, location, salary_range, status, created_at
            "#,
        )
        .bind(offer.id)
        .bind(offer.company_id)
        .bind(&offer.title)
        .bind(&offer.description)
        .bind(&offer.location)
        .bind(&offer.salary_range)
        .bind(offer.status.as_str())
        .bind(offer.created_at)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| map_constraint_error(e, "Job offer already exists", "Company profile not found"))?;

        row.into_offer()
    }

    async fn update(&self, offer: &JobOffer) -> Result<JobOffer, AppError> {
        let row = sqlx::query_as::<_, JobOfferRow>(
            r#"
            UPDATE job_offers
            SET title = $2,
                description = $3,
                location = $4,
                salary_range = $5,
                status = $6
            WHERE id = $1
            RETURNING id, company_id, title, description, location, salary_range, status, created_at
            "#,
        )
        .bind(offer.id)
        .bind(&offer.title)
        .bind(&offer.description)
        .bind(&offer.location)
        .bind(&offer.salary_range)
        .bind(offer.status.as_str())
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::NotFound("Job offer not found".into()))?;

        row.into_offer()
    }

    async fn delete(&self, id: i64) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM job_offers WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Job offer not found".into()));
        }

        Ok(())
    }
}
