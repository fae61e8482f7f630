use axum::extract::{Path, State};
use tracing::debug;

use super::AppState;
use crate::dto::SpeakerDto;
use crate::error::{ApiError, ApiResult};
use crate::json::PrettyJson;
use db::repository::sessions as session_repo;

/// `GET /sessions/{id}/speakers`
pub async fn speakers(
    Path(id): Path<i64>,
    State(state): State<AppState>,
) -> ApiResult<PrettyJson<Vec<SpeakerDto>>> {
    let session = session_repo::get_session_with_speakers(&state.pool, id)
        .await?
        .ok_or(ApiError::NotFound("Session"))?;

    debug!(session_id = id, count = session.speakers.len(), "listing session speakers");
    Ok(PrettyJson(session.speakers.into_iter().map(SpeakerDto::from).collect()))
}
