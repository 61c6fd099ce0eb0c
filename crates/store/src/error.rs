//! Storage error model.

use thiserror::Error;

/// Error from the storage gateway.
///
/// `Duplicate` is split out because it is an expected rejection (the caller
/// supplied an id that already exists), not an infrastructure failure.
#[derive(Debug, Error)]
pub enum StoreError {
    /// A row with the same key already exists.
    #[error("duplicate key: {0}")]
    Duplicate(String),

    /// Any other database failure.
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Postgres unique-violation SQLSTATE.
const UNIQUE_VIOLATION: &str = "23505";

/// True if `err` is a unique-constraint violation.
pub(crate) fn is_unique_violation(err: &sqlx::Error) -> bool {
    matches!(
        err,
        sqlx::Error::Database(db) if db.code().as_deref() == Some(UNIQUE_VIOLATION)
    )
}
