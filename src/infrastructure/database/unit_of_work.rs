//! Unit of Work
//!
//! Transactional boundaries for writes that span several tables.
//! All statements run inside one transaction either commit together or not at all.

use std::future::Future;

use sqlx::{PgConnection, PgPool, Postgres, Transaction};

use crate::shared::error::AppError;

/// Transaction context that wraps a SQLx transaction.
pub struct TransactionContext {
    tx: Transaction<'static, Postgres>,
}

impl TransactionContext {
    /// Create a new transaction context.
    pub fn new(tx: Transaction<'static, Postgres>) -> Self {
        Self { tx }
    }

    /// Connection to run statements on, inside the transaction.
    pub fn connection(&mut self) -> &mut PgConnection {
        &mut *self.tx
    }

    /// Commit the transaction.
    pub async fn commit(self) -> Result<(), AppError> {
        self.tx.commit().await.map_err(AppError::Database)
    }
}

/// Execute a closure within a transaction.
///
/// The closure hands the context back on success so it can be committed;
/// on error the context is dropped, which rolls the transaction back.
///
/// # Example
/// ```ignore
/// let user = with_transaction(&pool, |mut tx| async move {
///     insert_user(tx.connection(), &user).await?;
///     insert_profile(tx.connection(), &profile).await?;
///     Ok((user, tx))
/// }).await?;
/// ```
pub async fn with_transaction<F, Fut, T>(pool: &PgPool, f: F) -> Result<T, AppError>
where
    F: FnOnce(TransactionContext) -> Fut,
    Fut: Future<Output = Result<(T, TransactionContext), AppError>>,
{
    let tx = pool.begin().await.map_err(AppError::Database)?;
    let ctx = TransactionContext::new(tx);

    match f(ctx).await {
        Ok((result, ctx)) => {
            ctx.commit().await?;
            Ok(result)
        }
        Err(e) => {
            tracing::debug!(error = %e, "Transaction rolled back");
            Err(e)
        }
    }
}
