//! Skill Item Repository Implementation

use async_trait::async_trait;
use sqlx::{PgConnection, PgPool};

use crate::domain::{SkillItem, SkillItemRepository, SkillLevel};
use crate::infrastructure::database::{decode_column, violated_constraint};
use crate::shared::error::AppError;

#[derive(Debug, sqlx::FromRow)]
pub(crate) struct SkillItemRow {
    id: i64,
    profile_id: i64,
    skill_name: String,
    level: String,
}

impl SkillItemRow {
    pub(crate) fn into_skill(self) -> Result<SkillItem, AppError> {
        let level = decode_column(SkillLevel::parse(&self.level), "skill_items.level", &self.level)?;
        Ok(SkillItem {
            id: self.id,
            profile_id: self.profile_id,
            skill_name: self.skill_name,
            level,
        })
    }
}

/// Insert one skill on the given connection (pool or transaction).
pub(crate) async fn insert_skill(
    conn: &mut PgConnection,
    skill: &SkillItem,
) -> Result<(), sqlx::Error> {
    sqlx::query(
        r#"
        INSERT INTO skill_items (id, profile_id, skill_name, level)
        VALUES ($1, $2, $3, $4)
        "#,
    )
    .bind(skill.id)
    .bind(skill.profile_id)
    .bind(&skill.skill_name)
    .bind(skill.level.as_str())
    .execute(conn)
    .await?;

    Ok(())
}

/// All skills of a profile, by name.
pub(crate) async fn select_skills(
    conn: &mut PgConnection,
    profile_id: i64,
) -> Result<Vec<SkillItem>, AppError> {
    let rows = sqlx::query_as::<_, SkillItemRow>(
        r#"
        SELECT id, profile_id, skill_name, level
        FROM skill_items
        WHERE profile_id = $1
        ORDER BY skill_name
        "#,
    )
    .bind(profile_id)
    .fetch_all(conn)
    .await?;

    rows.into_iter().map(SkillItemRow::into_skill).collect()
}

pub(crate) fn map_skill_error(e: sqlx::Error) -> AppError {
    match violated_constraint(&e) {
        Some("uq_skill_items_profile_name") => {
            AppError::Conflict("Skill already listed on this profile".into())
        }
        Some("skill_items_profile_id_fkey") => {
            AppError::NotFound("Aspirant profile not found".into())
        }
        _ => AppError::Database(e),
    }
}

/// PostgreSQL skill item repository implementation.
#[derive(Clone)]
pub struct PgSkillItemRepository {
    pool: PgPool,
}

impl PgSkillItemRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl SkillItemRepository for PgSkillItemRepository {
    async fn find_by_id(&self, id: i64) -> Result<Option<SkillItem>, AppError> {
        let row = sqlx::query_as::<_, SkillItemRow>(
            "SELECT id, profile_id, skill_name, level FROM skill_items WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        row.map(SkillItemRow::into_skill).transpose()
    }

    async fn find_by_profile(&self, profile_id: i64) -> Result<Vec<SkillItem>, AppError> {
        let mut conn = self.pool.acquire().await?;
        select_skills(&mut conn, profile_id).await
    }

    async fn create(&self, skill: &SkillItem) -> Result<SkillItem, AppError> {
        let mut conn = self.pool.acquire().await?;
        insert_skill(&mut conn, skill)
            .await
            .map_err(map_skill_error)?;

        Ok(skill.clone())
    }

    async fn update(&self, skill: &SkillItem) -> Result<SkillItem, AppError> {
        let row = sqlx::query_as::<_, SkillItemRow>(
            r#"
            UPDATE skill_items
            SET skill_name = $2,
                level = $3
            WHERE id = $1
            RETURNING id, profile_id, skill_name, level
            "#,
        )
        .bind(skill.id)
        .bind(&skill.skill_name)
        .bind(skill.level.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_skill_error)?
        .ok_or_else(|| AppError::NotFound("Skill not found".into()))?;

        row.into_skill()
    }

    async fn delete(&self, id: i64) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM skill_items WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Skill not found".into()));
        }

        Ok(())
    }
}
