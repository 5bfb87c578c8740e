//! Authentication Service
//!
//! Registration (account plus default profile), login and access-token handling.

use std::sync::Arc;

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};
use async_trait::async_trait;
use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use crate::config::JwtSettings;
use crate::domain::{
    AspirantProfile, CompanyProfile, DefaultProfile, User, UserRepository, UserRole,
};
use crate::shared::error::AppError;
use crate::shared::snowflake::SnowflakeGenerator;

/// Authentication service trait for dependency injection
#[async_trait]
pub trait AuthService: Send + Sync {
    /// Register a new account. The default profile for `role` is created in
    /// the same transaction.
    async fn register(
        &self,
        email: &str,
        password: &str,
        role: UserRole,
        company_name: Option<&str>,
    ) -> Result<AuthSession, AuthError>;

    /// Authenticate user with credentials
    async fn login(&self, email: &str, password: &str) -> Result<AuthSession, AuthError>;
}

/// Access token handed to the client
#[derive(Debug, Clone, Serialize)]
pub struct AuthTokens {
    pub access_token: String,
    pub expires_in: i64,
    pub token_type: String,
}

/// A signed-in user with its token
#[derive(Debug, Clone)]
pub struct AuthSession {
    pub user: User,
    pub tokens: AuthTokens,
}

/// JWT claims structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (user ID)
    pub sub: String,
    /// Account email at issue time
    pub email: String,
    /// Account role
    pub role: UserRole,
    /// Issued at time (Unix timestamp)
    pub iat: i64,
    /// Expiration time (Unix timestamp)
    pub exp: i64,
    /// JWT ID
    pub jti: String,
}

impl Claims {
    /// Numeric user id carried in `sub`.
    pub fn user_id(&self) -> Result<i64, AuthError> {
        self.sub.parse().map_err(|_| AuthError::InvalidToken)
    }
}

/// Authentication errors
#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    #[error("Invalid email or password")]
    InvalidCredentials,

    #[error("Token expired")]
    TokenExpired,

    #[error("Invalid token")]
    InvalidToken,

    #[error("Email already registered")]
    EmailExists,

    #[error("{0}")]
    ProfileConflict(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<AuthError> for AppError {
    fn from(e: AuthError) -> Self {
        match e {
            AuthError::InvalidCredentials | AuthError::TokenExpired | AuthError::InvalidToken => {
                AppError::Unauthorized(e.to_string())
            }
            AuthError::EmailExists | AuthError::ProfileConflict(_) => {
                AppError::Conflict(e.to_string())
            }
            AuthError::Internal(msg) => AppError::Internal(msg),
        }
    }
}

/// Issues and verifies HS256 access tokens.
#[derive(Clone)]
pub struct TokenCodec {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    expiry_minutes: i64,
}

impl TokenCodec {
    pub fn new(settings: &JwtSettings) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(settings.secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(settings.secret.as_bytes()),
            expiry_minutes: settings.access_token_expiry_minutes,
        }
    }

    /// Sign a token for `user`.
    pub fn issue(&self, user: &User) -> Result<AuthTokens, AuthError> {
        let now = Utc::now();
        let claims = Claims {
            sub: user.id.to_string(),
            email: user.email.clone(),
            role: user.role,
            iat: now.timestamp(),
            exp: (now + Duration::minutes(self.expiry_minutes)).timestamp(),
            jti: uuid::Uuid::new_v4().to_string(),
        };

        let access_token = encode(&Header::default(), &claims, &self.encoding_key)
            .map_err(|e| AuthError::Internal(format!("Token generation failed: {}", e)))?;

        Ok(AuthTokens {
            access_token,
            expires_in: self.expiry_minutes * 60,
            token_type: "Bearer".to_string(),
        })
    }

    /// Verify signature and expiry, returning the claims.
    pub fn decode(&self, token: &str) -> Result<Claims, AuthError> {
        let token_data = decode::<Claims>(token, &self.decoding_key, &Validation::default())
            .map_err(|e| match e.kind() {
                jsonwebtoken::errors::ErrorKind::ExpiredSignature => AuthError::TokenExpired,
                _ => AuthError::InvalidToken,
            })?;

        Ok(token_data.claims)
    }
}

/// AuthService implementation
pub struct AuthServiceImpl<U>
where
    U: UserRepository,
{
    user_repo: Arc<U>,
    id_generator: Arc<SnowflakeGenerator>,
    tokens: TokenCodec,
}

impl<U> AuthServiceImpl<U>
where
    U: UserRepository,
{
    /// Create a new AuthServiceImpl
    pub fn new(user_repo: Arc<U>, id_generator: Arc<SnowflakeGenerator>, tokens: TokenCodec) -> Self {
        Self {
            user_repo,
            id_generator,
            tokens,
        }
    }

    /// Hash a password using Argon2id
    fn hash_password(&self, password: &str) -> Result<String, AuthError> {
        let salt = SaltString::generate(&mut OsRng);
        let argon2 = Argon2::default();

        argon2
            .hash_password(password.as_bytes(), &salt)
            .map(|hash| hash.to_string())
            .map_err(|e| AuthError::Internal(format!("Password hashing failed: {}", e)))
    }

    /// Verify a password against its hash
    fn verify_password(&self, password: &str, hash: &str) -> Result<bool, AuthError> {
        let parsed_hash = PasswordHash::new(hash)
            .map_err(|e| AuthError::Internal(format!("Invalid password hash: {}", e)))?;

        Ok(Argon2::default()
            .verify_password(password.as_bytes(), &parsed_hash)
            .is_ok())
    }

    fn default_profile(&self, user: &User, company_name: Option<&str>) -> DefaultProfile {
        let profile_id = self.id_generator.generate();
        match user.role {
            UserRole::Aspirant => {
                DefaultProfile::Aspirant(AspirantProfile::placeholder(profile_id, user.id, &user.email))
            }
            UserRole::Company => DefaultProfile::Company(CompanyProfile::placeholder(
                profile_id,
                user.id,
                company_name,
                &user.email,
            )),
        }
    }
}

fn store_error(context: &'static str) -> impl Fn(AppError) -> AuthError {
    move |e| {
        tracing::error!(error = %e, "{}", context);
        AuthError::Internal(e.to_string())
    }
}

fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

#[async_trait]
impl<U> AuthService for AuthServiceImpl<U>
where
    U: UserRepository + 'static,
{
    async fn register(
        &self,
        email: &str,
        password: &str,
        role: UserRole,
        company_name: Option<&str>,
    ) -> Result<AuthSession, AuthError> {
        let email = normalize_email(email);

        // Advisory; users.email is the authoritative guard
        if self
            .user_repo
            .email_exists(&email)
            .await
            .map_err(store_error("Failed to check email"))?
        {
            return Err(AuthError::EmailExists);
        }

        let password_hash = self.hash_password(password)?;
        let user = User::new(self.id_generator.generate(), email, password_hash, role);
        let profile = self.default_profile(&user, company_name);

        let user = self
            .user_repo
            .create_with_profile(&user, &profile)
            .await
            .map_err(|e| match e {
                AppError::Conflict(msg) if msg == AuthError::EmailExists.to_string() => {
                    AuthError::EmailExists
                }
                AppError::Conflict(msg) => AuthError::ProfileConflict(msg),
                e => store_error("Failed to register user")(e),
            })?;

        tracing::info!(user_id = user.id, role = %user.role, "User registered");

        let tokens = self.tokens.issue(&user)?;
        Ok(AuthSession { user, tokens })
    }

    async fn login(&self, email: &str, password: &str) -> Result<AuthSession, AuthError> {
        let user = self
            .user_repo
            .find_by_email(&normalize_email(email))
            .await
            .map_err(store_error("Failed to load user"))?
            .ok_or(AuthError::InvalidCredentials)?;

        if !self.verify_password(password, &user.password_hash)? {
            return Err(AuthError::InvalidCredentials);
        }

        let tokens = self.tokens.issue(&user)?;
        Ok(AuthSession { user, tokens })
    }
}
