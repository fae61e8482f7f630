use axum::extract::{Path, State};
use tracing::debug;

use super::AppState;
use crate::dto::{EventDto, SessionDto};
use crate::error::{ApiError, ApiResult};
use crate::json::PrettyJson;
use db::repository::events as event_repo;

/// `GET /events`
pub async fn list(State(state): State<AppState>) -> ApiResult<PrettyJson<Vec<EventDto>>> {
    let events = event_repo::list_events(&state.pool).await?;
    debug!(count = events.len(), "listing events");
    Ok(PrettyJson(events.into_iter().map(EventDto::from).collect()))
}

/// `GET /events/{id}/sessions`
pub async fn sessions(
    Path(id): Path<i64>,
    State(state): State<AppState>,
) -> ApiResult<PrettyJson<Vec<SessionDto>>> {
    let event = event_repo::get_event_with_sessions(&state.pool, id)
        .await?
        .ok_or(ApiError::NotFound("Event"))?;

    debug!(event_id = id, count = event.sessions.len(), "listing event sessions");
    Ok(PrettyJson(event.sessions.into_iter().map(SessionDto::from).collect()))
}
