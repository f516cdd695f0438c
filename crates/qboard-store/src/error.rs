//! Error types for the forum store.

/// Errors that can occur during repository operations.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// A database operation failed.
    #[error("store database error: {0}")]
    Database(#[from] rusqlite::Error),

    /// A single-valued association lookup found no row.
    ///
    /// Returned when a foreign key is NULL or points at a row that no
    /// longer exists. Collection-valued lookups never produce this;
    /// they return an empty vec instead.
    #[error("{entity} not found (id: {id:?})")]
    NotFound {
        /// Table name of the missing entity.
        entity: &'static str,
        /// The foreign key that failed to resolve, if one was present.
        id: Option<i64>,
    },
}
