//! Database layer for the qboard forum.
//!
//! Provides SQLite connection pooling (via `r2d2`), WAL-mode
//! initialization, embedded SQL migrations, and a process-wide shared
//! pool handle. The forum tables (`users`, `questions`, `replies`,
//! `question_likes`, `question_follows`) are created through versioned
//! migrations managed by this crate.
//!
//! # Design decisions
//!
//! - **SQLite with WAL mode**: the forum is a single-file store with a
//!   read-mostly access pattern; WAL allows concurrent readers with a
//!   single writer.
//! - **`r2d2` connection pool**: the original layer shared one lazily
//!   opened connection for the whole process. The pool keeps that
//!   one-shared-handle ergonomics while making checkout safe from
//!   multiple threads.
//! - **Embedded migrations**: SQL files are compiled into the binary via
//!   `include_str!`, so the schema ships with the code that queries it.

mod handle;
mod migrations;
mod pool;

pub use handle::{connection, init, HandleError};
pub use migrations::{run_migrations, MigrationError};
pub use pool::{create_pool, DbPool, DbRuntimeSettings, PoolError};
