//! SQLite connection pool for the forum store.
//!
//! Every connection handed out by the pool has already run its pragma
//! setup: WAL journal mode, foreign keys on, busy timeout applied.

use r2d2::Pool;
use r2d2_sqlite::SqliteConnectionManager;
use rusqlite::OpenFlags;
use thiserror::Error;

/// Runtime tunables for SQLite connection behavior.
///
/// The defaults suit the forum's read-mostly, single-process workload;
/// tests override them to exercise the pragma plumbing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DbRuntimeSettings {
    /// Busy timeout applied to every connection, in milliseconds.
    pub busy_timeout_ms: u64,

    /// Upper bound on pooled connections.
    pub pool_max_size: u32,
}

impl Default for DbRuntimeSettings {
    fn default() -> Self {
        Self {
            busy_timeout_ms: 5_000,
            pool_max_size: 4,
        }
    }
}

/// A type alias for the SQLite connection pool.
pub type DbPool = Pool<SqliteConnectionManager>;

/// Errors that can occur when creating the database pool.
#[derive(Debug, Error)]
pub enum PoolError {
    /// Failed to build the connection pool.
    #[error("failed to create database connection pool: {0}")]
    PoolInit(#[from] r2d2::Error),
}

fn apply_pragmas(
    conn: &mut rusqlite::Connection,
    settings: DbRuntimeSettings,
) -> Result<(), rusqlite::Error> {
    // WAL must be verified, not just requested: SQLite silently falls back
    // when the filesystem cannot support it. In-memory databases report
    // "memory", which is fine for tests.
    let journal_mode: String = conn.query_row("PRAGMA journal_mode = WAL;", [], |row| row.get(0))?;
    if journal_mode != "wal" && journal_mode != "memory" {
        return Err(rusqlite::Error::SqliteFailure(
            rusqlite::ffi::Error::new(rusqlite::ffi::SQLITE_ERROR),
            Some(format!("WAL journal mode rejected, got: {journal_mode}")),
        ));
    }

    conn.execute_batch(&format!(
        "PRAGMA foreign_keys = ON;
         PRAGMA busy_timeout = {};",
        settings.busy_timeout_ms
    ))
}

/// Creates the SQLite connection pool for a database file.
///
/// Pass `:memory:` as `db_path` for an in-memory database; each pooled
/// connection then gets its own private database, so tests that go through
/// the pool should cap `pool_max_size` at 1 or seed through a single
/// checked-out connection.
///
/// # Errors
///
/// Returns [`PoolError::PoolInit`] if the pool cannot be built.
pub fn create_pool(db_path: &str, settings: DbRuntimeSettings) -> Result<DbPool, PoolError> {
    let flags = OpenFlags::SQLITE_OPEN_READ_WRITE
        | OpenFlags::SQLITE_OPEN_CREATE
        | OpenFlags::SQLITE_OPEN_FULL_MUTEX;

    let manager = SqliteConnectionManager::file(db_path)
        .with_flags(flags)
        .with_init(move |conn| apply_pragmas(conn, settings));

    let pool = Pool::builder()
        .max_size(settings.pool_max_size)
        .build(manager)?;

    tracing::debug!(db_path, max_size = settings.pool_max_size, "created sqlite pool");

    Ok(pool)
}
