//! User entity and repository trait.
//!
//! Maps to the `users` table in the database schema.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{AspirantProfile, CompanyProfile};
use crate::domain::value_objects::UserRole;
use crate::shared::error::AppError;

/// Represents an account in the recruitment system.
///
/// Maps to the `users` table:
/// - id: BIGINT PRIMARY KEY (Snowflake ID)
/// - email: VARCHAR(255) NOT NULL UNIQUE
/// - password_hash: VARCHAR(255) NOT NULL
/// - role: VARCHAR(20) NOT NULL ('aspirant' | 'company')
/// - created_at: TIMESTAMPTZ NOT NULL DEFAULT NOW()
/// - updated_at: TIMESTAMPTZ NOT NULL DEFAULT NOW()
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    /// Snowflake ID (primary key)
    pub id: i64,

    /// Email address (unique, used as login)
    pub email: String,

    /// Argon2 password hash
    #[serde(skip_serializing)]
    pub password_hash: String,

    /// Role fixed at registration
    pub role: UserRole,

    /// Account creation timestamp
    pub created_at: DateTime<Utc>,

    /// Last update timestamp
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Build a new account with both timestamps set to now.
    pub fn new(id: i64, email: impl Into<String>, password_hash: String, role: UserRole) -> Self {
        let now = Utc::now();
        Self {
            id,
            email: email.into(),
            password_hash,
            role,
            created_at: now,
            updated_at: now,
        }
    }
}

/// The placeholder profile written together with a new account.
#[derive(Debug, Clone)]
pub enum DefaultProfile {
    Aspirant(AspirantProfile),
    Company(CompanyProfile),
}

impl DefaultProfile {
    /// Owner of the profile; must equal the id of the user it is created with.
    pub fn user_id(&self) -> i64 {
        match self {
            Self::Aspirant(p) => p.user_id,
            Self::Company(p) => p.user_id,
        }
    }
}

/// Repository trait for User data access operations.
///
/// Implementations of this trait handle the actual database interactions.
/// The trait is defined in the domain layer to maintain dependency inversion.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find a user by their Snowflake ID.
    async fn find_by_id(&self, id: i64) -> Result<Option<User>, AppError>;

    /// Find a user by their email address.
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, AppError>;

    /// Check if an email address is already registered.
    async fn email_exists(&self, email: &str) -> Result<bool, AppError>;

    /// Insert the user and its default profile atomically. Neither row
    /// persists if either insert fails.
    async fn create_with_profile(
        &self,
        user: &User,
        profile: &DefaultProfile,
    ) -> Result<User, AppError>;
}
