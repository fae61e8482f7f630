//! Repository functions — one function per database operation.
//!
//! Every function takes a `&DbPool` and returns a `Result<T, DbError>`.
//! Lookups by primary key return `Ok(None)` for a missing row; only writes
//! report `DbError::Missing`.  No ordering is promised for list results.

pub mod events;
pub mod sessions;
pub mod speakers;
pub mod bios;
