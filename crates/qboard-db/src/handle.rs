//! Process-wide shared database handle.
//!
//! The original forum layer opened one database connection lazily and
//! shared it for the process lifetime. Here the shared state is a
//! connection pool installed once via [`init`]; callers check out a
//! connection per operation with [`connection`]. The pool makes the
//! shared handle safe to reach from multiple threads, and the connection
//! is returned to the pool when the guard drops.

use std::sync::OnceLock;

use r2d2::PooledConnection;
use r2d2_sqlite::SqliteConnectionManager;
use thiserror::Error;

use crate::migrations::{run_migrations, MigrationError};
use crate::pool::{create_pool, DbPool, DbRuntimeSettings, PoolError};

static SHARED_POOL: OnceLock<DbPool> = OnceLock::new();

/// Errors from the shared-handle lifecycle.
#[derive(Debug, Error)]
pub enum HandleError {
    /// [`init`] was called more than once.
    #[error("database handle already initialized")]
    AlreadyInitialized,

    /// [`connection`] was called before [`init`].
    #[error("database handle not initialized; call qboard_db::init first")]
    NotInitialized,

    /// The pool could not be created.
    #[error(transparent)]
    Pool(#[from] PoolError),

    /// Schema migrations failed during initialization.
    #[error(transparent)]
    Migration(#[from] MigrationError),

    /// Checking a connection out of the pool failed.
    #[error("failed to check out database connection: {0}")]
    Checkout(#[from] r2d2::Error),
}

/// Initializes the process-wide database handle and runs migrations.
///
/// Must be called exactly once, before any repository call. Subsequent
/// calls return [`HandleError::AlreadyInitialized`] and leave the
/// existing handle untouched.
///
/// # Errors
///
/// Returns [`HandleError`] if the pool cannot be created, migrations
/// fail, or the handle is already installed.
pub fn init(db_path: &str, settings: DbRuntimeSettings) -> Result<(), HandleError> {
    let pool = create_pool(db_path, settings)?;

    let conn = pool.get()?;
    let applied = run_migrations(&conn)?;
    drop(conn);

    tracing::info!(db_path, applied, "initialized shared database handle");

    SHARED_POOL
        .set(pool)
        .map_err(|_| HandleError::AlreadyInitialized)
}

/// Checks a connection out of the process-wide pool.
///
/// # Errors
///
/// Returns [`HandleError::NotInitialized`] before [`init`], or
/// [`HandleError::Checkout`] if the pool is exhausted past its timeout.
pub fn connection() -> Result<PooledConnection<SqliteConnectionManager>, HandleError> {
    let pool = SHARED_POOL.get().ok_or(HandleError::NotInitialized)?;
    Ok(pool.get()?)
}
