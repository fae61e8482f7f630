//! `db` crate — pure persistence layer.
//!
//! Provides a SQLite connection pool, typed row structs, and repository
//! functions for every table in the event-schedule schema.  No HTTP concerns
//! live here.

pub mod error;
pub mod pool;
pub mod repository;
pub mod models;

pub use pool::DbPool;
pub use error::DbError;
