//! `api` crate — read-only HTTP layer over the event schedule.
//!
//! Exposes:
//!   GET /events
//!   GET /events/{id}/sessions
//!   GET /speakers
//!   GET /speakers/{id}
//!   GET /sessions/{id}/speakers

pub mod dto;
pub mod error;
pub mod handlers;
pub mod json;

use axum::{routing::get, Router};
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::info;

use db::DbPool;

pub use error::{ApiError, ApiResult};
pub use json::PrettyJson;

/// Shared handler state.  Cloning is cheap; the pool is reference-counted.
#[derive(Clone)]
pub struct AppState {
    pub pool: DbPool,
}

/// Build the application router over `pool`.
pub fn router(pool: DbPool) -> Router {
    let state = AppState { pool };

    Router::new()
        .route("/events", get(handlers::events::list))
        .route("/events/:id/sessions", get(handlers::events::sessions))
        .route("/speakers", get(handlers::speakers::list))
        .route("/speakers/:id", get(handlers::speakers::get))
        .route("/sessions/:id/speakers", get(handlers::sessions::speakers))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Bind `addr` and serve until the process is stopped.
pub async fn serve(addr: &str, pool: DbPool) -> std::io::Result<()> {
    let listener = TcpListener::bind(addr).await?;
    info!("Listening on {}", listener.local_addr()?);
    axum::serve(listener, router(pool)).await
}
