//! Experience Item Repository Implementation

use async_trait::async_trait;
use chrono::NaiveDate;
use sqlx::{PgConnection, PgPool};

use crate::domain::{ExperienceItem, ExperienceItemRepository};
use crate::infrastructure::database::map_constraint_error;
use crate::shared::error::AppError;

#[derive(Debug, sqlx::FromRow)]
pub(crate) struct ExperienceItemRow {
    id: i64,
    profile_id: i64,
    title: String,
    company: String,
    start_date: NaiveDate,
    end_date: Option<NaiveDate>,
    description: Option<String>,
}

impl ExperienceItemRow {
    pub(crate) fn into_item(self) -> ExperienceItem {
        ExperienceItem {
            id: self.id,
            profile_id: self.profile_id,
            title: self.title,
            company: self.company,
            start_date: self.start_date,
            end_date: self.end_date,
            description: self.description,
        }
    }
}

/// Insert one experience entry on the given connection (pool or transaction).
pub(crate) async fn insert_experience(
    conn: &mut PgConnection,
    item: &ExperienceItem,
) -> Result<(), sqlx::Error> {
    sqlx::query(
        r#"
        INSERT INTO experience_items (id, profile_id, title, company, start_date, end_date, description)
        VALUES ($1, $2, $3, $4, $5, $6, $7)
        "#,
    )
    .bind(item.id)
    .bind(item.profile_id)
    .bind(&item.title)
    .bind(&item.company)
    .bind(item.start_date)
    .bind(item.end_date)
    .bind(&item.description)
    .execute(conn)
    .await?;

    Ok(())
}

/// All experience entries of a profile, most recent start first.
pub(crate) async fn select_experience(
    conn: &mut PgConnection,
    profile_id: i64,
) -> Result<Vec<ExperienceItem>, sqlx::Error> {
    let rows = sqlx::query_as::<_, ExperienceItemRow>(
        r#"
        SELECT id, profile_id, title, company, start_date, end_date, description
        FROM experience_items
        WHERE profile_id = $1
        ORDER BY start_date DESC, id
        "#,
    )
    .bind(profile_id)
    .fetch_all(conn)
    .await?;

    Ok(rows.into_iter().map(ExperienceItemRow::into_item).collect())
}

/// PostgreSQL experience item repository implementation.
#[derive(Clone)]
pub struct PgExperienceItemRepository {
    pool: PgPool,
}

impl PgExperienceItemRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ExperienceItemRepository for PgExperienceItemRepository {
    async fn find_by_id(&self, id: i64) -> Result<Option<ExperienceItem>, AppError> {
        let row = sqlx::query_as::<_, ExperienceItemRow>(
            r#"
            SELECT id, profile_id, title, company, start_date, end_date, description
            FROM experience_items
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(ExperienceItemRow::into_item))
    }

    async fn find_by_profile(&self, profile_id: i64) -> Result<Vec<ExperienceItem>, AppError> {
        let mut conn = self.pool.acquire().await?;
        Ok(select_experience(&mut conn, profile_id).await?)
    }

    async fn create(&self, item: &ExperienceItem) -> Result<ExperienceItem, AppError> {
        let mut conn = self.pool.acquire().await?;
        insert_experience(&mut conn, item)
            .await
            .map_err(|e| map_constraint_error(e, "Experience item already exists", "Aspirant profile not found"))?;

        Ok(item.clone())
    }

    async fn update(&self, item: &ExperienceItem) -> Result<ExperienceItem, AppError> {
        let row = sqlx::query_as::<_, ExperienceItemRow>(
            r#"
            UPDATE experience_items
            SET title = $2,
                company = $3,
                start_date = $4,
                end_date = $5,
                description = $6
            WHERE id = $1
            RETURNING id, profile_id, title, company, start_date, end_date, description
            "#,
        )
        .bind(item.id)
        .bind(&item.title)
        .bind(&item.company)
        .bind(item.start_date)
        .bind(item.end_date)
        .bind(&item.description)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::NotFound("Experience item not found".into()))?;

        Ok(row.into_item())
    }

    async fn delete(&self, id: i64) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM experience_items WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Experience item not found".into()));
        }

        Ok(())
    }
}
