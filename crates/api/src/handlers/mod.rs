//! Route handlers, one module per resource.

pub mod events;
pub mod sessions;
pub mod speakers;

pub use crate::AppState;
