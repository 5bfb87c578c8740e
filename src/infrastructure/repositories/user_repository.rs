//! User Repository Implementation
//!
//! PostgreSQL implementation of the UserRepository trait.
//! Maps between the database schema and domain User entity.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{PgConnection, PgPool};

use super::aspirant_profile_repository::insert_aspirant_profile;
use super::company_profile_repository::insert_company_profile;
use crate::domain::{DefaultProfile, User, UserRepository, UserRole};
use crate::infrastructure::database::{decode_column, violated_constraint, with_transaction};
use crate::shared::error::AppError;

/// Database row representation matching the users table schema.
#[derive(Debug, sqlx::FromRow)]
struct UserRow {
    id: i64,
    email: String,
    password_hash: String,
    role: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl UserRow {
    /// Convert database row to domain User entity.
    fn into_user(self) -> Result<User, AppError> {
        let role = decode_column(UserRole::parse(&self.role), "users.role", &self.role)?;
        Ok(User {
            id: self.id,
            email: self.email,
            password_hash: self.password_hash,
            role,
            created_at: self.created_at,
            updated_at: self.updated_at,
        })
    }
}

/// PostgreSQL user repository implementation.
#[derive(Clone)]
pub struct PgUserRepository {
    pool: PgPool,
}

impl PgUserRepository {
    /// Create a new PgUserRepository with the given connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

async fn insert_user(conn: &mut PgConnection, user: &User) -> Result<UserRow, sqlx::Error> {
    sqlx::query_as::<_, UserRow>(
        r#"
        INSERT INTO users (id, email, password_hash, role, created_at, updated_at)
        VALUES ($1, $2, $3, $4, $5, $6)
        RETURNING id, email, password_hash, role, created_at, updated_at
        "#,
    )
    .bind(user.id)
    .bind(&user.email)
    .bind(&user.password_hash)
    .bind(user.role.as_str())
    .bind(user.created_at)
    .bind(user.updated_at)
    .fetch_one(conn)
    .await
}

fn map_registration_error(e: sqlx::Error) -> AppError {
    let message = match violated_constraint(&e) {
        Some("uq_users_email") => "Email already registered",
        Some("uq_company_profiles_name") => "Company name already taken",
        Some("uq_company_profiles_email") | Some("uq_aspirant_profiles_email") => {
            "Profile email already in use"
        }
        _ => return AppError::Database(e),
    };
    AppError::Conflict(message.to_string())
}

#[async_trait]
impl UserRepository for PgUserRepository {
    async fn find_by_id(&self, id: i64) -> Result<Option<User>, AppError> {
        let row = sqlx::query_as::<_, UserRow>(
            r#"
            SELECT id, email, password_hash, role, created_at, updated_at
            FROM users
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        row.map(UserRow::into_user).transpose()
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, AppError> {
        let row = sqlx::query_as::<_, UserRow>(
            r#"
            SELECT id, email, password_hash, role, created_at, updated_at
            FROM users
            WHERE email = $1
            "#,
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await?;

        row.map(UserRow::into_user).transpose()
    }

    async fn email_exists(&self, email: &str) -> Result<bool, AppError> {
        let result = sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(SELECT 1 FROM users WHERE email = $1)",
        )
        .bind(email)
        .fetch_one(&self.pool)
        .await?;

        Ok(result)
    }

    async fn create_with_profile(
        &self,
        user: &User,
        profile: &DefaultProfile,
    ) -> Result<User, AppError> {
        if profile.user_id() != user.id {
            return Err(AppError::Internal(
                "Default profile does not belong to the new user".into(),
            ));
        }

        let row = with_transaction(&self.pool, |mut tx| async move {
            let row = insert_user(tx.connection(), user)
                .await
                .map_err(map_registration_error)?;

            let inserted = match profile {
                DefaultProfile::Aspirant(p) => insert_aspirant_profile(tx.connection(), p).await,
                DefaultProfile::Company(p) => insert_company_profile(tx.connection(), p).await,
            };
            inserted.map_err(map_registration_error)?;

            Ok((row, tx))
        })
        .await?;

        tracing::debug!(user_id = row.id, role = %row.role, "User registered with default profile");
        row.into_user()
    }
}
