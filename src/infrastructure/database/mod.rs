//! Database Module
//!
//! PostgreSQL connection pool, migrations, error translation and transaction management.

pub mod unit_of_work;

use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use std::time::Duration;

use crate::config::DatabaseSettings;
use crate::infrastructure::metrics;
use crate::shared::error::AppError;

pub use unit_of_work::{with_transaction, TransactionContext};

/// Create a PostgreSQL connection pool
pub async fn create_pool(settings: &DatabaseSettings) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(settings.max_connections)
        .min_connections(settings.min_connections)
        .acquire_timeout(Duration::from_secs(settings.acquire_timeout))
        .connect(&settings.url)
        .await
}

/// Run database migrations
pub async fn run_migrations(pool: &PgPool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!("./migrations").run(pool).await
}

/// Publish the pool's current occupancy to the metrics registry.
pub fn record_pool_stats(pool: &PgPool, max_connections: u32) {
    let size = pool.size();
    let idle = pool.num_idle() as u32;
    metrics::update_db_pool_stats(idle, size.saturating_sub(idle), max_connections);
}

/// Translate constraint violations into domain errors.
///
/// Unique violations become `Conflict(conflict)`, foreign-key violations
/// become `NotFound(missing)`; anything else stays a database error.
pub fn map_constraint_error(e: sqlx::Error, conflict: &str, missing: &str) -> AppError {
    match &e {
        sqlx::Error::Database(db_err) if db_err.is_unique_violation() => {
            AppError::Conflict(conflict.to_string())
        }
        sqlx::Error::Database(db_err) if db_err.is_foreign_key_violation() => {
            AppError::NotFound(missing.to_string())
        }
        _ => AppError::Database(e),
    }
}

/// Name of the constraint a database error violated, if any.
pub fn violated_constraint(e: &sqlx::Error) -> Option<&str> {
    match e {
        sqlx::Error::Database(db_err) => db_err.constraint(),
        _ => None,
    }
}

/// Turn a parsed column value into a domain value, failing loudly on data
/// the schema's CHECK constraints should have rejected.
pub fn decode_column<T>(parsed: Option<T>, column: &str, raw: &str) -> Result<T, AppError> {
    parsed.ok_or_else(|| {
        AppError::Internal(format!("Unexpected value {:?} in column {}", raw, column))
    })
}
