//! Errors raised by the schedule store.
//!
//! Lookups never produce `Missing`; they report an absent row as `Ok(None)`.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum DbError {
    /// Connection, query, decode or constraint failure from SQLite.
    #[error("schedule store query failed: {0}")]
    Sqlx(#[from] sqlx::Error),

    /// A delete matched no row in the named table.
    #[error("no row to delete in `{table}`")]
    Missing { table: &'static str },

    #[error("applying schedule schema failed: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),
}
