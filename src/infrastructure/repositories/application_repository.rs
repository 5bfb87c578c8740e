//! Application Repository Implementation
//!
//! The `(aspirant_id, job_offer_id)` pair is guarded by the
//! `uq_applications_aspirant_offer` constraint; inserts that trip it come back
//! as `AppError::Conflict` no matter how many requests raced to get there.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;

use crate::domain::{
    Application, ApplicationRepository, ApplicationStatus, ApplicationWithAspirant,
    ApplicationWithOffer, AspirantProfile, CompanyProfile, JobOffer, JobOfferStatus,
    UNIQUE_APPLICATION_CONSTRAINT,
};
use crate::infrastructure::database::{decode_column, violated_constraint};
use crate::shared::error::AppError;

#[derive(Debug, sqlx::FromRow)]
struct ApplicationRow {
    id: i64,
    aspirant_id: i64,
    job_offer_id: i64,
    status: String,
    cover_letter: Option<String>,
    internal_note: Option<String>,
    applied_at: DateTime<Utc>,
}

impl ApplicationRow {
    fn into_application(self) -> Result<Application, AppError> {
        let status = decode_column(
            ApplicationStatus::parse(&self.status),
            "applications.status",
            &self.status,
        )?;
        Ok(Application {
            id: self.id,
            aspirant_id: self.aspirant_id,
            job_offer_id: self.job_offer_id,
            status,
            cover_letter: self.cover_letter,
            internal_note: self.internal_note,
            applied_at: self.applied_at,
        })
    }
}

/// Offer columns of a joined read, prefixed `offer_`.
#[derive(Debug, sqlx::FromRow)]
struct OfferColumns {
    offer_company_id: i64,
    offer_title: String,
    offer_description: String,
    offer_location: String,
    offer_salary_range: String,
    offer_status: String,
    offer_created_at: DateTime<Utc>,
}

impl OfferColumns {
    fn into_offer(self, id: i64) -> Result<JobOffer, AppError> {
        let status = decode_column(
            JobOfferStatus::parse(&self.offer_status),
            "job_offers.status",
            &self.offer_status,
        )?;
        Ok(JobOffer {
            id,
            company_id: self.offer_company_id,
            title: self.offer_title,
            description: self.offer_description,
            location: self.offer_location,
            salary_range: self.offer_salary_range,
            status,
            created_at: self.offer_created_at,
        })
    }
}

#[derive(Debug, sqlx::FromRow)]
struct ApplicationOfferRow {
    #[sqlx(flatten)]
    application: ApplicationRow,
    #[sqlx(flatten)]
    offer: OfferColumns,
    company_user_id: i64,
    company_name: String,
    company_email: String,
    company_description: Option<String>,
    company_website: Option<String>,
    company_logo_url: Option<String>,
    company_created_at: DateTime<Utc>,
    company_updated_at: DateTime<Utc>,
}

impl ApplicationOfferRow {
    fn into_parts(self) -> Result<ApplicationWithOffer, AppError> {
        let application = self.application.into_application()?;
        let job_offer = self.offer.into_offer(application.job_offer_id)?;
        let company = CompanyProfile {
            id: job_offer.company_id,
            user_id: self.company_user_id,
            company_name: self.company_name,
            email: self.company_email,
            description: self.company_description,
            website: self.company_website,
            logo_url: self.company_logo_url,
            created_at: self.company_created_at,
            updated_at: self.company_updated_at,
        };
        Ok(ApplicationWithOffer {
            application,
            job_offer,
            company,
        })
    }
}

#[derive(Debug, sqlx::FromRow)]
struct ApplicationAspirantRow {
    #[sqlx(flatten)]
    application: ApplicationRow,
    #[sqlx(flatten)]
    offer: OfferColumns,
    aspirant_user_id: i64,
    aspirant_first_name: String,
    aspirant_last_name: String,
    aspirant_email: String,
    aspirant_phone: Option<String>,
    aspirant_bio: Option<String>,
    aspirant_linkedin_url: Option<String>,
    aspirant_portfolio_url: Option<String>,
    aspirant_current_job_title: Option<String>,
    aspirant_photo_url: Option<String>,
    aspirant_cv_url: Option<String>,
    aspirant_created_at: DateTime<Utc>,
    aspirant_updated_at: DateTime<Utc>,
}

impl ApplicationAspirantRow {
    fn into_parts(self) -> Result<ApplicationWithAspirant, AppError> {
        let application = self.application.into_application()?;
        let job_offer = self.offer.into_offer(application.job_offer_id)?;
        let aspirant = AspirantProfile {
            id: application.aspirant_id,
            user_id: self.aspirant_user_id,
            first_name: self.aspirant_first_name,
            last_name: self.aspirant_last_name,
            email: self.aspirant_email,
            phone: self.aspirant_phone,
            bio: self.aspirant_bio,
            linkedin_url: self.aspirant_linkedin_url,
            portfolio_url: self.aspirant_portfolio_url,
            current_job_title: self.aspirant_current_job_title,
            photo_url: self.aspirant_photo_url,
            cv_url: self.aspirant_cv_url,
            skills: Vec::new(),
            experience: Vec::new(),
            created_at: self.aspirant_created_at,
            updated_at: self.aspirant_updated_at,
        };
        Ok(ApplicationWithAspirant {
            application,
            job_offer,
            aspirant,
        })
    }
}

fn map_insert_error(e: sqlx::Error) -> AppError {
    match violated_constraint(&e) {
        Some(UNIQUE_APPLICATION_CONSTRAINT) => {
            AppError::Conflict("You have already applied to this job offer".into())
        }
        Some("applications_job_offer_id_fkey") => AppError::NotFound("Job offer not found".into()),
        Some("applications_aspirant_id_fkey") => {
            AppError::NotFound("Aspirant profile not found".into())
        }
        _ => AppError::Database(e),
    }
}

/// PostgreSQL application repository implementation.
#[derive(Clone)]
pub struct PgApplicationRepository {
    pool: PgPool,
}

impl PgApplicationRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ApplicationRepository for PgApplicationRepository {
    async fn find_by_id(&self, id: i64) -> Result<Option<Application>, AppError> {
        let row = sqlx::query_as::<_, ApplicationRow>(
            r#"
            SELECT id, aspirant_id, job_offer_id, status, cover_letter, internal_note, applied_at
            FROM applications
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        row.map(ApplicationRow::into_application).transpose()
    }

    async fn exists_for(&self, aspirant_id: i64, job_offer_id: i64) -> Result<bool, AppError> {
        let exists = sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(SELECT 1 FROM applications WHERE aspirant_id = $1 AND job_offer_id = $2)",
        )
        .bind(aspirant_id)
        .bind(job_offer_id)
        .fetch_one(&self.pool)
        .await?;

        Ok(exists)
    }

    async fn create(&self, application: &Application) -> Result<Application, AppError> {
        let row = sqlx::query_as::<_, ApplicationRow>(
            r#"
            INSERT INTO applications (id, aspirant_id, job_offer_id, status, cover_letter, internal_note, applied_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING id, aspirant_id, job_offer_id, status, cover_letter, internal_note, applied_at
            "#,
        )
        .bind(application.id)
        .bind(application.aspirant_id)
        .bind(application.job_offer_id)
        .bind(application.status.as_str())
        .bind(&application.cover_letter)
        .bind(&application.internal_note)
        .bind(application.applied_at)
        .fetch_one(&self.pool)
        .await
        .map_err(map_insert_error)?;

        row.into_application()
    }

    async fn find_by_aspirant(
        &self,
        aspirant_id: i64,
    ) -> Result<Vec<ApplicationWithOffer>, AppError> {
        let rows = sqlx::query_as::<_, ApplicationOfferRow>(
            r#"
            SELECT a.id, a.aspirant_id, a.job_offer_id, a.status, a.cover_letter,
                   a.internal_note, a.applied_at,
                   o.company_id AS offer_company_id, o.title AS offer_title,
                   o.description AS offer_description, o.location AS offer_location,
                   o.salary_range AS offer_salary_range, o.status AS offer_status,
                   o.created_at AS offer_created_at,
                   c.user_id AS company_user_id, c.company_name, c.email AS company_email,
                   c.description AS company_description, c.website AS company_website,
                   c.logo_url AS company_logo_url, c.created_at AS company_created_at,
                   c.updated_at AS company_updated_at
            FROM applications a
            JOIN job_offers o ON o.id = a.job_offer_id
            JOIN company_profiles c ON c.id = o.company_id
            WHERE a.aspirant_id = $1
            ORDER BY a.applied_at DESC, a.id DESC
            "#,
        )
        .bind(aspirant_id)
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(ApplicationOfferRow::into_parts).collect()
    }

    async fn find_by_company_user(
        &self,
        user_id: i64,
    ) -> Result<Vec<ApplicationWithAspirant>, AppError> {
        let rows = sqlx::query_as::<_, ApplicationAspirantRow>(
            r#"
            SELECT a.id, a.aspirant_id, a.job_offer_id, a.status, a.cover_letter,
                   a.internal_note, a.applied_at,
                   o.company_id AS offer_company_id, o.title AS offer_title,
                   o.description AS offer_description, o.location AS offer_location,
                   o.salary_range AS offer_salary_range, o.status AS offer_status,
                   o.created_at AS offer_created_at,
                   p.user_id AS aspirant_user_id, p.first_name AS aspirant_first_name,
                   p.last_name AS aspirant_last_name, p.email AS aspirant_email,
                   p.phone AS aspirant_phone, p.bio AS aspirant_bio,
                   p.linkedin_url AS aspirant_linkedin_url,
                   p.portfolio_url AS aspirant_portfolio_url,
                   p.current_job_title AS aspirant_current_job_title,
                   p.photo_url AS aspirant_photo_url, p.cv_url AS aspirant_cv_url,
                   p.created_at AS aspirant_created_at, p.updated_at AS aspirant_updated_at
            FROM applications a
            JOIN job_offers o ON o.id = a.job_offer_id
            JOIN company_profiles c ON c.id = o.company_id
            JOIN aspirant_profiles p ON p.id = a.aspirant_id
            WHERE c.user_id = $1
            ORDER BY a.applied_at DESC, a.id DESC
            "#,
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter()
            .map(ApplicationAspirantRow::into_parts)
            .collect()
    }

    async fn update_status(
        &self,
        id: i64,
        status: ApplicationStatus,
        internal_note: Option<String>,
    ) -> Result<Application, AppError> {
        let row = sqlx::query_as::<_, ApplicationRow>(
            r#"
            UPDATE applications
            SET status = $2,
                internal_note = COALESCE($3, internal_note)
            WHERE id = $1
            RETURNING id, aspirant_id, job_offer_id, status, cover_letter, internal_note, applied_at
            "#,
        )
        .bind(id)
        .bind(status.as_str())
        .bind(internal_note)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::NotFound("Application not found".into()))?;

        row.into_application()
    }
}
